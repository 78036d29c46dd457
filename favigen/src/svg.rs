//! `svg`
//!
//! Loads the source logo.
use std::path::Path;

use resvg::usvg;

use crate::GenerateIconsError;

/// Reads and parses an SVG file from disk.
///
/// # Arguments
/// * `path`: The SVG file. Its directory is used to resolve any files the SVG links to.
///
/// # Returns
/// The parsed SVG tree.
///
/// # Errors
/// [`GenerateIconsError::ReadSource`] if the file cannot be read, or
/// [`GenerateIconsError::ParseSvg`] if its contents are not a valid SVG.
pub fn load_svg(path: &Path) -> Result<usvg::Tree, GenerateIconsError> {
    let bytes = std::fs::read(path).map_err(|source| GenerateIconsError::ReadSource {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("Read {} bytes from {}", bytes.len(), path.display());

    parse_svg(path, &bytes)
}

/// Parses SVG bytes into a tree ready for rendering.
///
/// # Arguments
/// * `path`: Where the bytes came from, used to resolve linked resources such as embedded images.
/// * `bytes`: The bytes of the file.
///
/// # Returns
/// The parsed SVG if it was successfully parsed, otherwise an error.
///
/// # Errors
/// [`GenerateIconsError::ParseSvg`] if a tree cannot be parsed from the provided `bytes`.
pub fn parse_svg(path: &Path, bytes: &[u8]) -> Result<usvg::Tree, GenerateIconsError> {
    let mut options = usvg::Options {
        resources_dir: path.parent().map(Path::to_path_buf),
        ..usvg::Options::default()
    };

    let fontdb = options.fontdb_mut();
    fontdb.load_system_fonts();
    fontdb.set_serif_family("Times New Roman");
    fontdb.set_sans_serif_family("Arial");
    fontdb.set_monospace_family("Courier New");

    Ok(usvg::Tree::from_data(bytes, &options)?)
}
