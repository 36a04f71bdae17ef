mod cli;
mod logging;

use clap::Parser;
use eyre::Result;

use crate::cli::Cli;

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    logging::init(cli.log_level());
    cli.run()
}
