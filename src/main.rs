//! CLI entry point for the wall frame layout generator

use clap::Parser;
use framepack::io::cli::{Cli, LayoutRunner};

fn main() -> framepack::Result<()> {
    let cli = Cli::parse();
    let mut runner = LayoutRunner::new(cli);
    runner.run()
}
