//! CLI entry point for the joinless colocation miner

use clap::Parser;
use joinless::io::cli::{Cli, Runner};

fn main() -> joinless::Result<()> {
    let cli = Cli::parse();
    let mut runner = Runner::new(cli);
    runner.run()
}
