//! Add transparent padding around a raster icon.

use anyhow::Result;
use clap::Parser;
use iconprep::cli::{self, PadCli};

fn main() -> Result<()> {
    let cli = match PadCli::try_parse() {
        Ok(cli) => cli,
        Err(e) if cli::pad::is_missing_args(&e) => {
            println!("{}", cli::pad::usage());
            std::process::exit(1);
        }
        Err(e) => e.exit(),
    };
    cli::pad::run(&cli)
}
