//! CLI 命令行参数解析
//!
//! 使用 clap 定义命令行接口。只有一个顶层命令，所有参数都是可选的。

use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

/// Utility to exorcise critters from outer planes (like Gradle daemons)
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "exo", version, long_about = None)]
pub struct Cli {
    /// Command-line fragment that pre-checks a process in the list
    /// (default: GradleDaemon, or $EXO_MARKER)
    #[arg(long, value_name = "TEXT")]
    pub marker: Option<String>,

    /// Maximum number of processes inspected at the same time
    #[arg(long, value_name = "N")]
    pub concurrency: Option<usize>,

    /// Log filter, e.g. `debug` or `exo=trace` (default: $RUST_LOG, then warn)
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Also append logs to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    pub fn parse_command() -> Self {
        Self::parse()
    }

    pub fn try_parse_command_from<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Self::try_parse_from(args)
    }
}
