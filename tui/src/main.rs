use clap::Parser;
use resan_tui::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    resan_tui::run_main(cli)
}
