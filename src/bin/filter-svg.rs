//! Rewrite an SVG icon in place, keeping only its main green and blue paths.

use anyhow::Result;
use clap::Parser;
use iconprep::cli::{self, FilterCli};

fn main() -> Result<()> {
    let cli = FilterCli::parse();
    cli::filter::run(&cli)
}
