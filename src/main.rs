use exo::commands::{exorcise, Cli};
use exo::utils::logger::init_logger;
use exo::RunConfig;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse_command();

    // 初始化日志系统
    if let Err(err) = init_logger(cli.log_level.as_deref(), cli.log_file.clone()) {
        eprintln!("Failed to initialize logging: {err}");
    }

    let config = RunConfig::resolve(cli.marker, cli.concurrency);
    exorcise::run(&config).await
}
