//! `favigen`
//!
//! Renders a single SVG logo into the favicon, Apple touch icon and Android icon
//! PNGs a web front-end links to, plus a `favicon.ico` container.

pub mod config;
mod error;
pub mod generate;
pub mod raster;
pub mod sizes;
pub mod svg;

pub use config::GeneratorConfig;
pub use error::GenerateIconsError;
pub use generate::{GenerationReport, IconGenerator};
pub use sizes::{IconSet, IconSize};

/// The directory every icon is written to, relative to the working directory.
pub const DEFAULT_OUTPUT_DIR: &str = "static/img/";

/// The file name of the source logo, inside [`DEFAULT_OUTPUT_DIR`].
pub const DEFAULT_SOURCE_FILE_NAME: &str = "bulk-watermarker.svg";

/// The file name of the icon container, inside [`DEFAULT_OUTPUT_DIR`].
pub const DEFAULT_ICO_FILE_NAME: &str = "favicon.ico";

/// The edge length, in pixels, of the image embedded in the icon container.
pub const DEFAULT_ICO_SIZE: u32 = 32;
