// SPDX-License-Identifier: MIT OR Apache-2.0

//! `sops-read-secret` binary.
//!
//! Prints the decrypted document, or one value from it, to stdout or a file.
//! Diagnostics and errors go to stderr.

use clap::Parser;
use sops_read_secret::adapters::Cli;
use sops_read_secret::domain::Result;
use sops_read_secret::service::extract::NOTICE_TARGET;
use sops_read_secret::service::SecretReader;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Installs a stderr logger. `RUST_LOG` overrides the verbosity flags, but
/// notices are kept at `warn` regardless.
fn init_logging(default_level: &str) {
    let mut filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    if let Ok(directive) = format!("{NOTICE_TARGET}=warn").parse() {
        filter = filter.add_directive(directive);
    }
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    let request = cli.request()?;
    debug!(?request, "parsed arguments");

    SecretReader::new(cli.decryptor()).run(&request)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.log_level());

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {}", err.report());
            ExitCode::from(err.exit_code())
        }
    }
}
