use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use string_blaster::cli;

fn main() -> ExitCode {
    let cli = match cli::Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = cli::usage_exit_code(&e);
            let _ = e.print();
            return ExitCode::from(code);
        }
    };

    // Initialize logging based on verbosity flag; stdout may carry the fixture
    let filter = if cli.verbose {
        EnvFilter::new("string_blaster=debug,info")
    } else {
        EnvFilter::new("string_blaster=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    match cli::generate::run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("ERROR: {e}");
            ExitCode::from(e.exit_code())
        }
    }
}
