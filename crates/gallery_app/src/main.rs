mod cli;
mod host;

use clap::Parser;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    gallery_logging::initialize(cli.log.into(), cli.level());
    host::run_app(&cli)
}
