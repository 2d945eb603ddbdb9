use binge_check::utils::logger;
use binge_check::{CliConfig, InputProcessor};
use clap::Parser;
use std::io::{self, BufWriter};

fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting binge-check");
    tracing::debug!("CLI config: {:?}", config);

    let stdin = io::stdin().lock();
    let stdout = BufWriter::new(io::stdout().lock());
    let mut processor = InputProcessor::new(stdin, stdout);

    match processor.run() {
        Ok(summary) => {
            tracing::info!(
                "Processed {} test cases ({} YES, {} NO)",
                summary.cases,
                summary.accepted,
                summary.rejected
            );
        }
        Err(e) => {
            tracing::error!("Processing failed: {}", e);
            eprintln!("error: {}", e.user_friendly_message());
            std::process::exit(e.exit_code());
        }
    }
}
