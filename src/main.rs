use anyhow::{bail, Result};
use clap::Parser;
use statusgate::cli::{Cli, OutputFormat};
use statusgate::output::{print_config, print_error, print_success};
use statusgate::StatusSettings;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.log_level()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "status configuration rejected");
            print_error(&format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let settings = StatusSettings::resolve(cli)?;

    if cli.all_errors {
        let errors = settings.allow_list_errors();
        if !errors.is_empty() {
            for err in &errors {
                print_error(&err.to_string());
            }
            bail!("{} invalid nginx-status-allow-cidrs entries", errors.len());
        }
    }

    let config = settings.validate()?;
    info!(
        enabled = config.is_enabled(),
        port = settings.nginx_status_port,
        allow_cidrs = %settings.nginx_status_allow_cidrs,
        output = %cli.output,
        "status configuration accepted"
    );

    print_config(&config, cli.output)?;
    if cli.output == OutputFormat::Plain && !cli.quiet {
        print_success("status configuration is valid");
    }
    Ok(())
}
