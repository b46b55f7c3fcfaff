use std::env;

/// Listing utility used to discover JVM processes.
pub const LISTING_BIN: &str = "jps";
/// `-l` prints the fully qualified main class (or jar path) per pid.
pub const LISTING_ARGS: &[&str] = &["-l"];
/// Label under which the listing utility reports itself.
pub const SELF_LABEL: &str = "sun.tools.jps.Jps";
/// Command-line fragment marking a process as a likely target.
pub const DEFAULT_MARKER: &str = "GradleDaemon";
pub const MARKER_ENV: &str = "EXO_MARKER";

// Upper bound on in-flight per-pid lookups during enrichment
pub const DEFAULT_CONCURRENCY: usize = 8;

pub const PID_WIDTH: usize = 6;
pub const ELAPSED_WIDTH: usize = 11;
pub const MEMORY_WIDTH: usize = 8;
pub const COMMAND_MAX_CHARS: usize = 32;
pub const ELAPSED_UNIT_COUNT: usize = 2;

pub const MEMORY_RED_ABOVE: u64 = 1_000_000_000;
// Inclusive lower bound: exactly 100 MB is already yellow, not green.
// The red bound above stays strict.
pub const MEMORY_YELLOW_FROM: u64 = 100_000_000;

pub const SELECTION_HEADER: &str = " Pid    | Running for |  Memory  | Command";

/// Settings for one run, resolved from flags, environment and defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub listing_bin: String,
    pub listing_args: Vec<String>,
    pub self_label: String,
    pub marker: String,
    pub concurrency: usize,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            listing_bin: LISTING_BIN.to_string(),
            listing_args: LISTING_ARGS.iter().map(|s| s.to_string()).collect(),
            self_label: SELF_LABEL.to_string(),
            marker: DEFAULT_MARKER.to_string(),
            concurrency: DEFAULT_CONCURRENCY,
        }
    }
}

impl RunConfig {
    /// Flag values win over `EXO_MARKER`, which wins over the defaults.
    pub fn resolve(marker: Option<String>, concurrency: Option<usize>) -> Self {
        let marker = marker
            .or_else(|| env::var(MARKER_ENV).ok())
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_MARKER.to_string());

        Self {
            marker,
            concurrency: concurrency.unwrap_or(DEFAULT_CONCURRENCY).max(1),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn defaults_when_nothing_is_set() {
        env::remove_var(MARKER_ENV);
        let config = RunConfig::resolve(None, None);
        assert_eq!(config, RunConfig::default());
        assert_eq!(config.listing_args, vec!["-l".to_string()]);
    }

    #[test]
    #[serial]
    fn flag_beats_environment() {
        env::set_var(MARKER_ENV, "KotlinCompileDaemon");
        assert_eq!(RunConfig::resolve(None, None).marker, "KotlinCompileDaemon");
        assert_eq!(
            RunConfig::resolve(Some("Launcher".to_string()), None).marker,
            "Launcher"
        );
        env::remove_var(MARKER_ENV);
    }

    #[test]
    #[serial]
    fn blank_marker_falls_back_and_concurrency_is_at_least_one() {
        env::remove_var(MARKER_ENV);
        let config = RunConfig::resolve(Some("  ".to_string()), Some(0));
        assert_eq!(config.marker, DEFAULT_MARKER);
        assert_eq!(config.concurrency, 1);
    }
}
