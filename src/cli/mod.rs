//! Command-line interface module.

mod args;
pub mod filter;
pub mod pad;

pub use args::{CommonArgs, FilterCli, PadCli};
