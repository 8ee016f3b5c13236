use bakecal::cli::Cli;
use clap::Parser;

fn main() -> anyhow::Result<()> {
    bakecal::services::logging::init();
    let cli = Cli::parse();
    cli.run()
}
