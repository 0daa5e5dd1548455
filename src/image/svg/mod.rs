//! SVG brand-color filtering.
//!
//! Works line by line on the raw text: no XML parsing is done, so the input
//! is expected to carry one element per line.
//!
//! # Modules
//!
//! - [`classify`]: Lexical green/blue/light classification of fill colors
//! - [`filter`]: Per-line keep/drop decisions and in-place file rewrite

mod classify;
mod filter;

pub use classify::{ColorClass, classify_fill, is_light};
pub use filter::{FilterError, FilterReport, LineDecision, decide, filter_svg, filter_svg_file};
