//! CHR CLI - Command line tool for inspecting and rendering county health data.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "chr-cli",
    version,
    about = "U.S. county health data toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: chr_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    chr_cmd::run(cli.command).await
}
