use clap::Parser;
use prevdays::adapter::inbound::cli::{window, Cli};
use prevdays::infrastructure::config::logging::{LogFormat, LoggingConfig};
use tracing::error;

fn main() {
    let cli = Cli::parse();

    let format = if cli.log_json {
        LogFormat::Json
    } else {
        LogFormat::Pretty
    };
    LoggingConfig::from_verbosity(cli.verbose, format).init();

    if let Err(e) = window::execute(&cli) {
        error!(error = %e, "Window computation failed");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
