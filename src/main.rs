//! CLI entry point for the island shell

use clap::Parser;
use islet::io::cli::{Cli, Shell};

fn main() -> islet::Result<()> {
    let cli = Cli::parse();
    let shell = Shell::new(cli);
    shell.run()
}
