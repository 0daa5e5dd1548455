//! Image processing utilities.
//!
//! # Modules
//!
//! - [`color`]: Canvas background color parsing
//! - [`pad`]: Transparent padding around raster icons
//! - [`svg`]: Brand-color path filtering for SVG icons

pub mod color;
pub mod pad;
pub mod svg;

pub use color::Background;
pub use pad::{DEFAULT_RATIO, PadError, Padding, pad_file, pad_image};
pub use svg::{ColorClass, FilterError, FilterReport, LineDecision, filter_svg, filter_svg_file};
