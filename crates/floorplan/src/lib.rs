//! Floorplan - layout engines for architectural floor plan graphs.
//!
//! Rooms and their adjacencies are read from a plan file into a [`Graph`],
//! placed by one of two engines and rendered to SVG or PNG:
//!
//! - the grid engine puts rooms into fixed-size cells breadth-first from the
//!   first room;
//! - the force engine runs a repulsion/attraction simulation over the
//!   adjacency edges.
//!
//! [`Graph`]: structure::Graph

pub mod config;
pub mod layout;
pub mod plan;
pub mod structure;

mod error;
mod export;

pub use floorplan_core::{color, geometry, identifier};

pub use error::FloorplanError;

use std::path::Path;

use log::{debug, info};
use rand::Rng;

use config::{AppConfig, CanvasConfig, LayoutEngine};
use layout::{ForceLayout, GridLayout, engines};
use structure::{Graph, VectorGraph};

/// Builder for parsing, laying out and rendering floor plans.
///
/// # Examples
///
/// ```rust,no_run
/// use floorplan::{PlanBuilder, config::AppConfig};
///
/// let source = r#"
///     [[room]]
///     id = "Living"
///     adjacent = ["Kitchen"]
/// "#;
///
/// let builder = PlanBuilder::new(AppConfig::default());
/// let graph = builder.parse(source).expect("Failed to parse");
/// let svg = builder.render_svg(&graph).expect("Failed to render");
/// ```
#[derive(Default)]
pub struct PlanBuilder {
    config: AppConfig,
}

impl PlanBuilder {
    /// Create a new plan builder with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration the builder runs with.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Parse plan source text into a room graph.
    ///
    /// # Errors
    ///
    /// Returns [`FloorplanError::Plan`] when the source is not a valid plan.
    pub fn parse(&self, source: &str) -> Result<Graph, FloorplanError> {
        plan::parse(source)
    }

    /// Places the rooms of `graph` with the grid engine.
    ///
    /// # Errors
    ///
    /// See [`engines::grid::Engine::place`].
    pub fn layout_grid(&self, graph: &Graph) -> Result<GridLayout, FloorplanError> {
        engines::grid::Engine::new(*self.config.layout().grid()).place(graph)
    }

    /// Positions the nodes of `graph` with the force engine.
    ///
    /// # Errors
    ///
    /// See [`engines::force::Engine::compute`].
    pub fn layout_force<R: Rng>(
        &self,
        graph: &VectorGraph,
        rng: &mut R,
    ) -> Result<ForceLayout, FloorplanError> {
        engines::force::Engine::new(*self.config.layout().force()).compute(graph, rng)
    }

    /// Lays out `graph` with the configured engine and renders it to SVG.
    ///
    /// The force engine draws its initial positions from the configured
    /// seed, or from fresh entropy when none is set.
    ///
    /// # Errors
    ///
    /// Returns the layout errors of the selected engine.
    pub fn render_svg(&self, graph: &Graph) -> Result<String, FloorplanError> {
        let (svg, _) = self.render_document(graph)?;
        Ok(svg)
    }

    /// Lays out `graph` with the configured engine and renders it to PNG.
    ///
    /// # Errors
    ///
    /// Returns the layout errors of the selected engine, or
    /// [`FloorplanError::Export`] when rasterization fails.
    #[cfg(feature = "png")]
    pub fn render_png(&self, graph: &Graph) -> Result<Vec<u8>, FloorplanError> {
        let (svg, canvas) = self.render_document(graph)?;
        let png = export::png::rasterize(&svg, &canvas, self.config.style())?;
        info!(bytes = png.len(); "PNG rendered successfully");
        Ok(png)
    }

    /// Renders `graph` and writes it to `path`.
    ///
    /// The format follows the file extension: `svg`, or `png` when built
    /// with the `png` feature.
    ///
    /// # Errors
    ///
    /// Returns [`FloorplanError::Export`] for an unsupported extension or a
    /// failed write, plus any layout or rendering error.
    pub fn export(&self, graph: &Graph, path: &Path) -> Result<(), FloorplanError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        let contents = match extension.as_deref() {
            Some("svg") => self.render_svg(graph)?.into_bytes(),
            #[cfg(feature = "png")]
            Some("png") => self.render_png(graph)?,
            _ => {
                return Err(export::Error::Render(format!(
                    "unsupported output format for `{}`",
                    path.display()
                ))
                .into());
            }
        };

        export::write_file(path, &contents)?;
        Ok(())
    }

    /// Lays out and renders `graph`, returning the SVG text and the canvas
    /// it was drawn on.
    fn render_document(&self, graph: &Graph) -> Result<(String, CanvasConfig), FloorplanError> {
        let engine = self.config.layout().engine();
        info!(
            engine = engine.to_string(),
            rooms = graph.vertices_count(),
            adjacencies = graph.edges_count();
            "Laying out plan"
        );

        let (document, canvas) = match engine {
            LayoutEngine::Grid => {
                let layout = self.layout_grid(graph)?;
                debug!(placed = layout.len(); "Grid layout calculated");

                let canvas = *self.config.layout().grid().canvas();
                let svg = export::svg::Svg::new(canvas, self.config.style().clone());
                (svg.render_grid_layout(graph, &layout), canvas)
            }
            LayoutEngine::Force => {
                let vector_graph = VectorGraph::try_from(graph)?;
                let force = self.config.layout().force();
                let mut rng = engines::force::rng_from_seed(force.seed());
                let layout = self.layout_force(&vector_graph, &mut rng)?;
                debug!(nodes = layout.len(); "Force layout calculated");

                let canvas = *force.canvas();
                let svg = export::svg::Svg::new(canvas, self.config.style().clone());
                (svg.render_force_layout(&vector_graph, &layout), canvas)
            }
        };

        info!("SVG rendered successfully");
        Ok((document.to_string(), canvas))
    }
}
