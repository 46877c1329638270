//! EVET CLI - Command line access to the evapotranspiration dataset.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "evet-cli",
    version,
    about = "Evapotranspiration monitoring data toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: evet_cmd::Command,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    evet_cmd::run(cli.command)
}
