//! Command-line interface definitions.

use clap::{ColorChoice, Parser};
use std::ffi::OsString;
use std::path::PathBuf;

use crate::config::CONFIG_FILE;
use crate::image::Background;

/// Options shared by both tools
#[derive(clap::Args, Debug, Clone)]
pub struct CommonArgs {
    /// Control colored output (auto, always, never)
    #[arg(long, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (searched upward from the current directory)
    #[arg(short = 'C', long, default_value = CONFIG_FILE, value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Enable verbose output for debugging
    #[arg(short, long)]
    pub verbose: bool,
}

impl CommonArgs {
    /// Apply global output settings (color override, verbosity).
    pub fn apply(&self) {
        match self.color {
            ColorChoice::Always => owo_colors::set_override(true),
            ColorChoice::Never => owo_colors::set_override(false),
            ColorChoice::Auto => {} // owo-colors auto-detects TTY
        }
        if self.verbose {
            crate::logger::set_verbose(true);
        }
    }
}

/// Keep only the main green and blue paths of an SVG icon, rewriting it in place
#[derive(Parser, Debug, Clone)]
#[command(name = "filter-svg", version, about, long_about = None)]
pub struct FilterCli {
    #[command(flatten)]
    pub common: CommonArgs,

    /// SVG file to rewrite (default: `filter.input` from config, or assets/icon/icon.svg)
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub svg: Option<PathBuf>,

    /// Report what would be kept without writing the file
    #[arg(short = 'n', long)]
    pub dry_run: bool,
}

/// Center an image on a larger transparent canvas
#[derive(Parser, Debug, Clone)]
#[command(name = "pad-icon", version, about, long_about = None)]
pub struct PadCli {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Source image
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub input: PathBuf,

    /// Destination image (format inferred from extension)
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub output: PathBuf,

    /// Fraction of width/height added on each side (default: 0.2)
    pub ratio: Option<f64>,

    /// Canvas fill as #RRGGBB or #RRGGBBAA (default: transparent)
    #[arg(short, long)]
    pub background: Option<Background>,

    /// Extra positional values, accepted and ignored
    #[arg(hide = true)]
    pub extra: Vec<OsString>,
}
