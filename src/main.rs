use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use gallery_verify::cli;

fn main() -> anyhow::Result<ExitCode> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("gallery_verify=debug,info")
    } else {
        EnvFilter::new("gallery_verify=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    let verdict = cli::verify::run(&cli.verify, cli.output_format(), cli.verbose)?;

    Ok(ExitCode::from(verdict.exit_code()))
}
