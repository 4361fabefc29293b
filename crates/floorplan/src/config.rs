//! Configuration types for floor plan layout and rendering.
//!
//! All types implement [`serde::Deserialize`] with every field defaulted, so
//! a configuration file only needs to name the values it changes.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining layout and style settings.
//! - [`LayoutConfig`] - Selects the [`LayoutEngine`] and holds per-engine settings.
//! - [`GridConfig`] / [`ForceConfig`] - Parameters of the two engines.
//! - [`CanvasConfig`] - Canvas geometry shared by an engine and the renderer.
//! - [`StyleConfig`] - Colors, strokes and fonts used by the renderer.
//!
//! # Example
//!
//! ```
//! # use floorplan::config::{AppConfig, LayoutEngine};
//! let config = AppConfig::default();
//! assert_eq!(config.layout().engine(), LayoutEngine::Grid);
//! assert_eq!(config.layout().grid().rows(), 3);
//! assert_eq!(config.layout().force().iterations(), 1000);
//! ```

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use serde::{Deserialize, Deserializer};

use floorplan_core::{color::Color, geometry::Size};

use crate::FloorplanError;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    layout: LayoutConfig,
    style: StyleConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified layout and style configurations.
    pub fn new(layout: LayoutConfig, style: StyleConfig) -> Self {
        Self { layout, style }
    }

    /// Returns the layout configuration.
    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    /// Returns the layout configuration for modification.
    pub fn layout_mut(&mut self) -> &mut LayoutConfig {
        &mut self.layout
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }
}

/// Available layout engines.
///
/// The names match external configuration strings (snake_case).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutEngine {
    /// Breadth-first fixed-cell placement of rooms (default)
    #[default]
    Grid,
    /// Force-directed simulation of room nodes
    Force,
}

impl FromStr for LayoutEngine {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "grid" => Ok(Self::Grid),
            "force" => Ok(Self::Force),
            _ => Err("Unsupported layout engine"),
        }
    }
}

impl From<LayoutEngine> for &'static str {
    fn from(val: LayoutEngine) -> Self {
        match val {
            LayoutEngine::Grid => "grid",
            LayoutEngine::Force => "force",
        }
    }
}

impl Display for LayoutEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: &'static str = (*self).into();
        write!(f, "{s}")
    }
}

/// Layout configuration: the selected engine plus the settings of both engines.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    engine: LayoutEngine,
    grid: GridConfig,
    force: ForceConfig,
}

impl LayoutConfig {
    /// Creates a new [`LayoutConfig`].
    pub fn new(engine: LayoutEngine, grid: GridConfig, force: ForceConfig) -> Self {
        Self {
            engine,
            grid,
            force,
        }
    }

    /// Returns the selected [`LayoutEngine`].
    pub fn engine(&self) -> LayoutEngine {
        self.engine
    }

    /// Selects the [`LayoutEngine`] used by the builder.
    pub fn set_engine(&mut self, engine: LayoutEngine) -> &mut Self {
        self.engine = engine;
        self
    }

    /// Returns the grid engine configuration.
    pub fn grid(&self) -> &GridConfig {
        &self.grid
    }

    /// Returns the force engine configuration.
    pub fn force(&self) -> &ForceConfig {
        &self.force
    }

    /// Returns the force engine configuration for modification.
    pub fn force_mut(&mut self) -> &mut ForceConfig {
        &mut self.force
    }
}

/// Canvas geometry shared by a layout engine and the renderer drawing its output.
///
/// Keeping both sides on one value means the image is always sized to what
/// the engine assumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasConfig {
    width: u32,
    height: u32,
    node_radius: u32,
}

impl CanvasConfig {
    pub fn new(width: u32, height: u32, node_radius: u32) -> Self {
        Self {
            width,
            height,
            node_radius,
        }
    }

    /// Canvas width in pixels
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Canvas height in pixels
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Radius of a drawn node; initial force positions are inset by it
    pub fn node_radius(&self) -> u32 {
        self.node_radius
    }

    /// Canvas dimensions as a [`Size`]
    pub fn size(&self) -> Size {
        Size::new(self.width as f32, self.height as f32)
    }
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: 500,
            height: 500,
            node_radius: 20,
        }
    }
}

/// A canvas section as written in a configuration file.
///
/// Fields left out keep the value of the owning engine's default canvas.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CanvasSection {
    width: Option<u32>,
    height: Option<u32>,
    node_radius: Option<u32>,
}

impl CanvasSection {
    fn merge_onto(self, base: CanvasConfig) -> CanvasConfig {
        CanvasConfig {
            width: self.width.unwrap_or(base.width),
            height: self.height.unwrap_or(base.height),
            node_radius: self.node_radius.unwrap_or(base.node_radius),
        }
    }
}

fn grid_canvas<'de, D: Deserializer<'de>>(deserializer: D) -> Result<CanvasConfig, D::Error> {
    let section = CanvasSection::deserialize(deserializer)?;
    Ok(section.merge_onto(GridConfig::default().canvas))
}

fn force_canvas<'de, D: Deserializer<'de>>(deserializer: D) -> Result<CanvasConfig, D::Error> {
    let section = CanvasSection::deserialize(deserializer)?;
    Ok(section.merge_onto(ForceConfig::default().canvas))
}

/// Collision handling of the grid engine.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GridPlacement {
    /// Direction purely from the per-room neighbor counter; rooms may overlap.
    #[default]
    Legacy,
    /// Try the four directions from the counter's direction and take the
    /// first free cell, falling back to the counter's direction.
    AvoidOverlap,
}

/// Grid placement engine configuration.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    #[serde(deserialize_with = "grid_canvas")]
    canvas: CanvasConfig,
    rows: u32,
    columns: u32,
    placement: GridPlacement,
}

impl GridConfig {
    /// Returns the canvas the grid is laid over.
    pub fn canvas(&self) -> &CanvasConfig {
        &self.canvas
    }

    /// Number of grid rows
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of grid columns
    pub fn columns(&self) -> u32 {
        self.columns
    }

    /// Returns the [`GridPlacement`] strategy.
    pub fn placement(&self) -> GridPlacement {
        self.placement
    }

    /// Sets the canvas.
    pub fn with_canvas(mut self, canvas: CanvasConfig) -> Self {
        self.canvas = canvas;
        self
    }

    /// Sets the grid dimensions.
    pub fn with_grid(mut self, rows: u32, columns: u32) -> Self {
        self.rows = rows;
        self.columns = columns;
        self
    }

    /// Sets the [`GridPlacement`] strategy.
    pub fn with_placement(mut self, placement: GridPlacement) -> Self {
        self.placement = placement;
        self
    }

    /// Size of one grid cell.
    ///
    /// Uses integer division of the canvas by the grid dimensions, so a
    /// 300×400 canvas split 3×3 yields 100×133 cells.
    pub fn cell_size(&self) -> Size {
        let columns = self.columns.max(1);
        let rows = self.rows.max(1);
        Size::new(
            (self.canvas.width / columns) as f32,
            (self.canvas.height / rows) as f32,
        )
    }

    /// Checks that the grid can be laid over the canvas.
    ///
    /// # Errors
    ///
    /// Returns [`FloorplanError::Config`] for a zero-sized grid or a canvas
    /// too small to give every cell at least one pixel.
    pub fn validate(&self) -> Result<(), FloorplanError> {
        if self.rows == 0 || self.columns == 0 {
            return Err(FloorplanError::Config(format!(
                "grid must have at least one row and column, got {}x{}",
                self.rows, self.columns
            )));
        }
        if self.canvas.width < self.columns || self.canvas.height < self.rows {
            return Err(FloorplanError::Config(format!(
                "canvas {}x{} is too small for a {}x{} grid",
                self.canvas.width, self.canvas.height, self.rows, self.columns
            )));
        }
        Ok(())
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            canvas: CanvasConfig::new(300, 400, 20),
            rows: 3,
            columns: 3,
            placement: GridPlacement::Legacy,
        }
    }
}

/// How the force simulation applies displacements within an iteration.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpdateMode {
    /// Every pass reads a frozen snapshot and commits all displacements at its end.
    #[default]
    Snapshot,
    /// Positions are mutated immediately; later pairs see earlier updates.
    InPlace,
}

/// Force-directed layout engine configuration.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct ForceConfig {
    #[serde(deserialize_with = "force_canvas")]
    canvas: CanvasConfig,
    iterations: usize,
    attraction: f32,
    repulsion: f32,
    min_distance: f32,
    update: UpdateMode,
    tolerance: Option<f32>,
    seed: Option<u64>,
}

impl ForceConfig {
    /// Returns the canvas initial positions are drawn from.
    pub fn canvas(&self) -> &CanvasConfig {
        &self.canvas
    }

    /// Number of simulation iterations
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Linear spring coefficient along edges
    pub fn attraction(&self) -> f32 {
        self.attraction
    }

    /// Inverse-square repulsion coefficient between all node pairs
    pub fn repulsion(&self) -> f32 {
        self.repulsion
    }

    /// Lower bound applied to every distance used as a divisor
    pub fn min_distance(&self) -> f32 {
        self.min_distance
    }

    /// Returns the [`UpdateMode`].
    pub fn update(&self) -> UpdateMode {
        self.update
    }

    /// Early-exit threshold on the largest per-iteration displacement
    pub fn tolerance(&self) -> Option<f32> {
        self.tolerance
    }

    /// Seed for the initial placement, if reproducible output is wanted
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn with_canvas(mut self, canvas: CanvasConfig) -> Self {
        self.canvas = canvas;
        self
    }

    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    pub fn with_attraction(mut self, attraction: f32) -> Self {
        self.attraction = attraction;
        self
    }

    pub fn with_repulsion(mut self, repulsion: f32) -> Self {
        self.repulsion = repulsion;
        self
    }

    pub fn with_min_distance(mut self, min_distance: f32) -> Self {
        self.min_distance = min_distance;
        self
    }

    pub fn with_update(mut self, update: UpdateMode) -> Self {
        self.update = update;
        self
    }

    pub fn with_tolerance(mut self, tolerance: Option<f32>) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Sets the seed in place, e.g. from a command-line override.
    pub fn set_seed(&mut self, seed: Option<u64>) -> &mut Self {
        self.seed = seed;
        self
    }

    /// Checks the simulation parameters.
    ///
    /// # Errors
    ///
    /// Returns [`FloorplanError::Config`] when the canvas cannot hold a node
    /// inset by its radius, the distance floor is not positive, or a
    /// coefficient is not finite.
    pub fn validate(&self) -> Result<(), FloorplanError> {
        let inset = self.canvas.node_radius.saturating_mul(2);
        if self.canvas.width <= inset || self.canvas.height <= inset {
            return Err(FloorplanError::Config(format!(
                "canvas {}x{} leaves no room for nodes of radius {}",
                self.canvas.width, self.canvas.height, self.canvas.node_radius
            )));
        }
        if !(self.min_distance.is_finite() && self.min_distance > 0.0) {
            return Err(FloorplanError::Config(format!(
                "min_distance must be positive, got {}",
                self.min_distance
            )));
        }
        if !self.attraction.is_finite() || !self.repulsion.is_finite() {
            return Err(FloorplanError::Config(
                "attraction and repulsion must be finite".to_string(),
            ));
        }
        match self.tolerance {
            Some(tolerance) if !(tolerance.is_finite() && tolerance >= 0.0) => {
                Err(FloorplanError::Config(format!(
                    "tolerance must be a non-negative number, got {tolerance}"
                )))
            }
            _ => Ok(()),
        }
    }
}

impl Default for ForceConfig {
    fn default() -> Self {
        Self {
            canvas: CanvasConfig::new(500, 500, 20),
            iterations: 1000,
            attraction: 0.01,
            repulsion: 1000.0,
            min_distance: 0.1,
            update: UpdateMode::Snapshot,
            tolerance: None,
            seed: None,
        }
    }
}

/// Visual styling configuration for rendered plans.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    background_color: Color,
    room_fill_color: Color,
    node_fill_color: Color,
    line_color: Color,
    line_width: f32,
    label_color: Color,
    node_label_color: Color,
    font_family: String,
    room_font_size: u32,
    node_font_size: u32,
    label_prefix: String,
}

impl StyleConfig {
    /// Canvas background
    pub fn background_color(&self) -> Color {
        self.background_color
    }

    /// Fill of grid-placed rooms
    pub fn room_fill_color(&self) -> Color {
        self.room_fill_color
    }

    /// Fill of force-layout nodes
    pub fn node_fill_color(&self) -> Color {
        self.node_fill_color
    }

    /// Stroke of room outlines, node outlines and edges
    pub fn line_color(&self) -> Color {
        self.line_color
    }

    pub fn line_width(&self) -> f32 {
        self.line_width
    }

    /// Text color of room labels
    pub fn label_color(&self) -> Color {
        self.label_color
    }

    /// Text color of node labels
    pub fn node_label_color(&self) -> Color {
        self.node_label_color
    }

    pub fn font_family(&self) -> &str {
        &self.font_family
    }

    pub fn room_font_size(&self) -> u32 {
        self.room_font_size
    }

    pub fn node_font_size(&self) -> u32 {
        self.node_font_size
    }

    /// Text removed from node labels in force renderings, wherever it occurs
    pub fn label_prefix(&self) -> &str {
        &self.label_prefix
    }
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            background_color: Color::new("white").expect("'white' is a valid CSS color"),
            room_fill_color: Color::new("lightblue").expect("'lightblue' is a valid CSS color"),
            node_fill_color: Color::default(),
            line_color: Color::default(),
            line_width: 2.0,
            label_color: Color::default(),
            node_label_color: Color::new("white").expect("'white' is a valid CSS color"),
            font_family: "Arial".to_string(),
            room_font_size: 10,
            node_font_size: 12,
            label_prefix: "Room".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_engine_from_str() {
        assert_eq!("grid".parse::<LayoutEngine>(), Ok(LayoutEngine::Grid));
        assert_eq!("force".parse::<LayoutEngine>(), Ok(LayoutEngine::Force));
        assert!("sugiyama".parse::<LayoutEngine>().is_err());
        assert_eq!(LayoutEngine::Force.to_string(), "force");
    }

    #[test]
    fn test_grid_defaults() {
        let grid = GridConfig::default();
        assert_eq!(grid.canvas().width(), 300);
        assert_eq!(grid.canvas().height(), 400);
        assert_eq!(grid.cell_size(), Size::new(100.0, 133.0));
        assert_eq!(grid.placement(), GridPlacement::Legacy);
        assert!(grid.validate().is_ok());
    }

    #[test]
    fn test_grid_validation() {
        let grid = GridConfig::default().with_grid(0, 3);
        assert!(matches!(grid.validate(), Err(FloorplanError::Config(_))));

        let grid = GridConfig::default()
            .with_canvas(CanvasConfig::new(2, 2, 0))
            .with_grid(3, 3);
        assert!(matches!(grid.validate(), Err(FloorplanError::Config(_))));
    }

    #[test]
    fn test_force_defaults() {
        let force = ForceConfig::default();
        assert_eq!(force.canvas().width(), 500);
        assert_eq!(force.canvas().node_radius(), 20);
        assert_eq!(force.iterations(), 1000);
        assert_eq!(force.attraction(), 0.01);
        assert_eq!(force.repulsion(), 1000.0);
        assert_eq!(force.min_distance(), 0.1);
        assert_eq!(force.update(), UpdateMode::Snapshot);
        assert_eq!(force.tolerance(), None);
        assert_eq!(force.seed(), None);
        assert!(force.validate().is_ok());
    }

    #[test]
    fn test_force_validation() {
        let small = ForceConfig::default().with_canvas(CanvasConfig::new(40, 500, 20));
        assert!(matches!(small.validate(), Err(FloorplanError::Config(_))));

        let no_floor = ForceConfig::default().with_min_distance(0.0);
        assert!(matches!(no_floor.validate(), Err(FloorplanError::Config(_))));

        let nan = ForceConfig::default().with_repulsion(f32::NAN);
        assert!(matches!(nan.validate(), Err(FloorplanError::Config(_))));

        let negative = ForceConfig::default().with_tolerance(Some(-1.0));
        assert!(matches!(negative.validate(), Err(FloorplanError::Config(_))));
    }

    #[test]
    fn test_deserialize_partial_config() {
        let config: AppConfig = toml::from_str(
            r##"
            [layout]
            engine = "force"

            [layout.grid]
            rows = 4
            placement = "avoid_overlap"

            [layout.force]
            iterations = 50
            update = "in_place"
            seed = 7

            [layout.force.canvas]
            width = 800
            height = 600

            [style]
            room_fill_color = "#ffeeaa"
            label_prefix = ""
            "##,
        )
        .unwrap();

        assert_eq!(config.layout().engine(), LayoutEngine::Force);
        assert_eq!(config.layout().grid().rows(), 4);
        assert_eq!(config.layout().grid().columns(), 3);
        assert_eq!(
            config.layout().grid().placement(),
            GridPlacement::AvoidOverlap
        );

        let force = config.layout().force();
        assert_eq!(force.iterations(), 50);
        assert_eq!(force.update(), UpdateMode::InPlace);
        assert_eq!(force.seed(), Some(7));
        assert_eq!(force.canvas().width(), 800);
        assert_eq!(force.canvas().height(), 600);
        assert_eq!(force.canvas().node_radius(), 20);
        assert_eq!(force.repulsion(), 1000.0);

        assert_eq!(config.style().room_fill_color().to_hex(), "#ffeeaa");
        assert_eq!(config.style().label_prefix(), "");
        assert_eq!(config.style().font_family(), "Arial");
    }

    #[test]
    fn test_partial_canvas_keeps_engine_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [layout.grid.canvas]
            width = 600

            [layout.force.canvas]
            node_radius = 10
            "#,
        )
        .unwrap();

        let grid = config.layout().grid();
        assert_eq!(*grid.canvas(), CanvasConfig::new(600, 400, 20));
        assert_eq!(grid.cell_size(), Size::new(200.0, 133.0));

        let force = config.layout().force();
        assert_eq!(*force.canvas(), CanvasConfig::new(500, 500, 10));
    }

    #[test]
    fn test_canvas_section_rejects_unknown_key() {
        let result: Result<AppConfig, _> = toml::from_str(
            r#"
            [layout.grid.canvas]
            depth = 3
            "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_deserialize_rejects_bad_color() {
        let result: Result<AppConfig, _> = toml::from_str(
            r#"
            [style]
            line_color = "not-a-color"
            "#,
        );
        assert!(result.is_err());
    }
}
