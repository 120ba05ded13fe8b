mod app;
mod cli;
mod prompt;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use prompt::Prompter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(cli.log_level())
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let mut prompter = Prompter::stdio();
    let outcome = app::run(cli, &mut prompter)?;
    tracing::debug!(?outcome, "Finished");

    Ok(())
}
