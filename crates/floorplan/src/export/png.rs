//! PNG rasterization of rendered SVG documents.

use log::debug;
use resvg::{tiny_skia, usvg};

use super::Error;
use crate::config::{CanvasConfig, StyleConfig};

/// Rasterizes `svg` into PNG bytes of the canvas size.
pub fn rasterize(svg: &str, canvas: &CanvasConfig, style: &StyleConfig) -> Result<Vec<u8>, Error> {
    let mut options = usvg::Options {
        font_family: style.font_family().to_string(),
        ..usvg::Options::default()
    };
    options.fontdb_mut().load_system_fonts();

    let tree = usvg::Tree::from_str(svg, &options)
        .map_err(|err| Error::Render(format!("failed to parse rendered SVG: {err}")))?;

    let mut pixmap = tiny_skia::Pixmap::new(canvas.width(), canvas.height()).ok_or_else(|| {
        Error::Render(format!(
            "failed to allocate {}x{} pixmap",
            canvas.width(),
            canvas.height()
        ))
    })?;

    resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());

    let png = pixmap
        .encode_png()
        .map_err(|err| Error::Render(format!("failed to encode PNG: {err}")))?;
    debug!(bytes = png.len(), width = canvas.width(), height = canvas.height(); "PNG encoded");

    Ok(png)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n'];

    #[test]
    fn test_rasterize_simple_document() {
        let canvas = CanvasConfig::new(40, 30, 5);
        let svg = r##"<svg xmlns="http://www.w3.org/2000/svg" width="40" height="30" viewBox="0 0 40 30"><rect x="0" y="0" width="40" height="30" fill="#ffffff"/></svg>"##;

        let png = rasterize(svg, &canvas, &StyleConfig::default()).unwrap();

        assert_eq!(png[..8], PNG_SIGNATURE);
    }

    #[test]
    fn test_rasterize_rejects_invalid_svg() {
        let canvas = CanvasConfig::new(40, 30, 5);
        let result = rasterize("not an svg", &canvas, &StyleConfig::default());
        assert!(matches!(result, Err(Error::Render(_))));
    }

    #[test]
    fn test_rasterize_rejects_empty_canvas() {
        let canvas = CanvasConfig::new(0, 30, 5);
        let svg = r#"<svg xmlns="http://www.w3.org/2000/svg" width="10" height="10"/>"#;
        let result = rasterize(svg, &canvas, &StyleConfig::default());
        assert!(matches!(result, Err(Error::Render(_))));
    }
}
