use clap::Parser;

use prest_config::cli::{Cli, execute_command, init_logger_from_cli};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logger_from_cli(&cli)?;

    tracing::debug!(version = prest_config::pkg_version(), "prest-config starting");

    let output = execute_command(&cli)?;
    println!("{}", output);

    Ok(())
}
