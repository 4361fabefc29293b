//! SVG rendering of grid and force layouts.
//!
//! The document is sized to the [`CanvasConfig`] the engine used. Geometry
//! outside the canvas (grid rooms left of or above the start room, force
//! nodes pushed past the border) is emitted as is and clipped by the viewer.

mod force;
mod grid;

use svg::{
    Document,
    node::{Text as SvgText, element as svg_element},
};

use floorplan_core::{color::Color, geometry::Point};

use crate::config::{CanvasConfig, StyleConfig};

/// SVG renderer for computed layouts.
#[derive(Debug, Clone)]
pub struct Svg {
    canvas: CanvasConfig,
    style: StyleConfig,
}

impl Svg {
    /// Creates a renderer drawing on `canvas` with `style`.
    pub fn new(canvas: CanvasConfig, style: StyleConfig) -> Self {
        Self { canvas, style }
    }

    /// Empty document of the canvas size, filled with the background color.
    fn create_document(&self) -> Document {
        let width = self.canvas.width();
        let height = self.canvas.height();

        let background = svg_element::Rectangle::new()
            .set("x", 0)
            .set("y", 0)
            .set("width", width)
            .set("height", height)
            .set("fill", self.style.background_color());

        Document::new()
            .set("viewBox", format!("0 0 {width} {height}"))
            .set("width", width)
            .set("height", height)
            .add(background)
    }

    /// Text centered on `position`.
    fn create_label(
        &self,
        content: &str,
        position: Point,
        font_size: u32,
        color: Color,
    ) -> svg_element::Text {
        svg_element::Text::new("")
            .set("x", position.x())
            .set("y", position.y())
            .set("text-anchor", "middle")
            .set("dominant-baseline", "central")
            .set("font-family", self.style.font_family())
            .set("font-size", font_size)
            .set("fill", color)
            .set("fill-opacity", color.alpha())
            .add(SvgText::new(content))
    }

    fn stroke_color(&self) -> Color {
        self.style.line_color()
    }
}
