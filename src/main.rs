use anyhow::Result;
use clap::CommandFactory;
use std::io;
use std::process::ExitCode;

use walkdel::cli::Cli;
use walkdel::runner;

fn main() -> ExitCode {
    match try_main() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", err);
            ExitCode::FAILURE
        }
    }
}

fn try_main() -> Result<()> {
    let cli = Cli::parse_args();

    // Initialize logging based on verbosity
    init_logging(cli.verbose, cli.quiet);

    if let Some(shell) = cli.completions {
        clap_complete::generate(shell, &mut Cli::command(), "walkdel", &mut io::stdout());
        return Ok(());
    }

    let config = cli.to_config();

    tracing::debug!(?config, "Resolved configuration");

    runner::execute(&config)?;

    Ok(())
}

fn init_logging(verbosity: u8, quiet: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let level = if quiet {
        "warn"
    } else {
        match verbosity {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("walkdel={}", level)));

    // Diagnostics stay off stdout, which carries listed paths
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(io::stderr))
        .with(filter)
        .init();
}
