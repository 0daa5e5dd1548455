//! iconprep - icon asset preparation.
//!
//! Two independent tools share this library:
//!
//! - `filter-svg`: keep only the main green and blue paths of an SVG icon
//! - `pad-icon`: center a raster icon on a larger transparent canvas

pub mod cli;
pub mod config;
pub mod image;
pub mod logger;
