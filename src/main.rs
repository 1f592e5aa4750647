//! CLI entry point for tile assembly and motif scanning

use clap::Parser;
use tilestitch::io::cli::{Cli, SolveRunner};

fn main() -> tilestitch::Result<()> {
    let cli = Cli::parse();
    let runner = SolveRunner::new(cli);
    runner.run()
}
