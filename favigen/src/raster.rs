//! `raster`
//!
//! Renders a parsed SVG into square pixel images.

use resvg::{tiny_skia, usvg};

use crate::GenerateIconsError;

/// Renders the SVG into a `size` by `size` pixmap.
/// The drawing is stretched to fill the square, so non-square sources are distorted
/// rather than letterboxed.
///
/// # Arguments
/// * `tree`: The SVG to render.
/// * `size`: Width and height of the output, in pixels.
///
/// # Returns
/// The rendered pixmap.
///
/// # Errors
/// [`GenerateIconsError::InvalidSize`] if `size` is zero, [`GenerateIconsError::CreatePixmap`] if
/// the pixmap cannot be allocated.
pub fn rasterize(tree: &usvg::Tree, size: u32) -> Result<tiny_skia::Pixmap, GenerateIconsError> {
    if size == 0 {
        return Err(GenerateIconsError::InvalidSize(size));
    }

    let mut pixmap =
        tiny_skia::Pixmap::new(size, size).ok_or(GenerateIconsError::CreatePixmap(size))?;

    #[allow(clippy::cast_precision_loss)]
    let edge = size as f32;
    let tree_size = tree.size();
    resvg::render(
        tree,
        tiny_skia::Transform::from_scale(edge / tree_size.width(), edge / tree_size.height()),
        &mut pixmap.as_mut(),
    );
    log::debug!("Rendered {size}x{size} pixmap");

    Ok(pixmap)
}

/// Renders the SVG and encodes the result as PNG, without touching the disk.
///
/// # Arguments
/// * `tree`: The SVG to render.
/// * `size`: Width and height of the output, in pixels.
///
/// # Returns
/// The PNG file contents.
///
/// # Errors
/// Any error from [`rasterize`], or [`GenerateIconsError::EncodePng`] if encoding fails.
pub fn render_png(tree: &usvg::Tree, size: u32) -> Result<Vec<u8>, GenerateIconsError> {
    rasterize(tree, size)?
        .encode_png()
        .map_err(|err| GenerateIconsError::EncodePng {
            size,
            message: err.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;
    use crate::svg::parse_svg;

    /// A red square covering the whole canvas.
    const RED_SQUARE: &[u8] = br##"<svg xmlns="http://www.w3.org/2000/svg" width="64" height="64" viewBox="0 0 64 64">
        <rect x="0" y="0" width="64" height="64" fill="#ff0000"/>
    </svg>"##;

    fn red_square() -> usvg::Tree {
        parse_svg(Path::new("square.svg"), RED_SQUARE).expect("test SVG should parse")
    }

    #[test]
    fn renders_requested_size() {
        let pixmap = rasterize(&red_square(), 20).expect("render should succeed");
        assert_eq!((pixmap.width(), pixmap.height()), (20, 20), "pixmap size");
    }

    #[test]
    fn fills_whole_canvas_when_scaled() {
        let pixmap = rasterize(&red_square(), 128).expect("render should succeed");
        let corner = pixmap.pixel(127, 127).expect("corner pixel exists");
        assert_eq!(
            (corner.red(), corner.green(), corner.blue(), corner.alpha()),
            (255, 0, 0, 255),
            "scaled render should reach the far corner"
        );
    }

    #[test]
    fn zero_size_is_rejected() {
        assert!(
            matches!(
                rasterize(&red_square(), 0),
                Err(GenerateIconsError::InvalidSize(0))
            ),
            "zero size should be rejected"
        );
    }

    #[test]
    fn png_buffer_decodes_to_requested_size() {
        let png = render_png(&red_square(), 48).expect("render should succeed");
        let image = image::load_from_memory_with_format(&png, image::ImageFormat::Png)
            .expect("buffer should be a valid PNG");
        assert_eq!((image.width(), image.height()), (48, 48), "decoded size");
    }
}
