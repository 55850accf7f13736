use clap::Parser;
use std::process;
use veil::cli::Cli;
use veil::logging::init_logging;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    if let Err(e) = init_logging(&cli.log_level) {
        eprintln!("Failed to initialize logging: {e}");
        process::exit(5);
    }

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        "Veil - deterministic CSV pseudonymization"
    );

    // Execute and get exit code
    let exit_code = match cli.execute() {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "Run failed");
            eprintln!("Error: {e}");
            1
        }
    };

    process::exit(exit_code);
}
