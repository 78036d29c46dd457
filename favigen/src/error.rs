//! `error`
//!
//! Everything that can stop an icon generation run.

use std::{io, path::PathBuf};

/// Errors that can occur while turning the source SVG into icons.
#[derive(Debug, thiserror::Error)]
pub enum GenerateIconsError {
    /// The source SVG could not be read from disk.
    #[error("failed to read source image {}: {source}", path.display())]
    ReadSource {
        /// The path that was being read.
        path: PathBuf,
        /// The underlying IO error.
        source: io::Error,
    },
    /// The source bytes are not a usable SVG.
    #[error("failed to parse SVG: {0}")]
    ParseSvg(#[from] resvg::usvg::Error),
    /// Icons must be at least one pixel across.
    #[error("invalid icon size {0}, icons must be at least 1px square")]
    InvalidSize(u32),
    /// The pixmap for the requested size could not be allocated.
    #[error("could not allocate a {0}x{0} pixmap")]
    CreatePixmap(u32),
    /// The rendered pixmap could not be encoded as PNG.
    #[error("failed to encode {size}x{size} PNG: {message}")]
    EncodePng {
        /// Edge length of the image being encoded.
        size: u32,
        /// The encoder's description of what went wrong.
        message: String,
    },
    /// The output directory could not be created.
    #[error("failed to create output directory {}: {source}", path.display())]
    CreateOutputDir {
        /// The directory that was being created.
        path: PathBuf,
        /// The underlying IO error.
        source: io::Error,
    },
    /// A rendered icon could not be written.
    #[error("failed to write {}: {source}", path.display())]
    WriteOutput {
        /// The file that was being written.
        path: PathBuf,
        /// The underlying IO error.
        source: io::Error,
    },
    /// Decoding or re-encoding through the image library failed.
    #[error(transparent)]
    Image(#[from] image::ImageError),
}
