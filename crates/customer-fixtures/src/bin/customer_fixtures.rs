//! Customer XML generator.
//!
//! Thin wrapper over `customer_fixtures::cli`: installs logging, loads
//! settings and wires the process streams.

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use customer_fixtures::GeneratorSettings;
use customer_fixtures::cli::{CliArgs, CliError, run};
use mockable::DefaultClock;
use tracing::{error, warn};
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> ExitCode {
    init_tracing();

    match run_cli() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "customer generation failed");
            if let Err(write_err) = writeln!(io::stderr().lock(), "{err}") {
                drop(write_err);
            }
            ExitCode::FAILURE
        }
    }
}

fn run_cli() -> Result<(), CliError> {
    let args = CliArgs::parse();
    let settings = GeneratorSettings::load_ambient()?;

    let mut input = io::stdin().lock();
    let mut output = io::stdout().lock();
    run(&args, &settings, &mut input, &mut output, &DefaultClock)?;
    Ok(())
}

fn init_tracing() {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }
}
