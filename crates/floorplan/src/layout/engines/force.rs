//! Force-directed layout engine
//!
//! Every node starts at a random integer position inset from the canvas
//! border by the node radius. Each iteration then runs two passes:
//!
//! 1. Repulsion between every ordered pair of distinct nodes, an
//!    inverse-square push of magnitude `repulsion / d²` applied to the first
//!    node of the pair.
//! 2. Attraction along every edge, a linear spring of magnitude
//!    `attraction * d` moving both endpoints towards each other.
//!
//! Every distance used as a divisor is clamped from below by
//! [`ForceConfig::min_distance`], see [`clamped_distance`]. Positions are
//! not bounded to the canvas during or after the simulation.

use indexmap::IndexMap;
use log::{debug, info, trace};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use floorplan_core::{geometry::Point, identifier::Id};

use crate::{
    FloorplanError,
    config::{ForceConfig, UpdateMode},
    layout::ForceLayout,
    structure::VectorGraph,
};

/// Length of `delta`, but never less than `floor`.
pub fn clamped_distance(delta: Point, floor: f32) -> f32 {
    delta.hypot().max(floor)
}

/// Random source for the initial placement.
///
/// A seed makes layouts reproducible; without one the generator is seeded
/// from the thread-local entropy source.
pub fn rng_from_seed(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_rng(&mut rand::rng()),
    }
}

/// Force-directed layout engine
pub struct Engine {
    config: ForceConfig,
}

impl Engine {
    /// Create a new force layout engine
    pub fn new(config: ForceConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration of the simulation.
    pub fn config(&self) -> &ForceConfig {
        &self.config
    }

    /// Computes a position for every node of `graph`.
    ///
    /// Nodes are the distinct edge endpoints in order of first appearance;
    /// the layout lists them in that order.
    ///
    /// # Errors
    ///
    /// Returns [`FloorplanError::InvalidInput`] for a graph without edges and
    /// [`FloorplanError::Config`] for unusable simulation parameters.
    pub fn compute<R: Rng>(
        &self,
        graph: &VectorGraph,
        rng: &mut R,
    ) -> Result<ForceLayout, FloorplanError> {
        self.config.validate()?;

        if graph.is_empty() {
            return Err(FloorplanError::InvalidInput(
                "graph has no edges to lay out".to_string(),
            ));
        }

        let positions = self.initial_positions(graph, rng);
        self.simulate(graph, positions)
    }

    /// Draws a random starting position for every node of `graph`.
    ///
    /// Coordinates are integers in `[radius, width - radius)` and
    /// `[radius, height - radius)`.
    pub fn initial_positions<R: Rng>(
        &self,
        graph: &VectorGraph,
        rng: &mut R,
    ) -> IndexMap<Id, Point> {
        let canvas = self.config.canvas();
        let radius = canvas.node_radius();
        let x_range = radius..canvas.width().saturating_sub(radius).max(radius.saturating_add(1));
        let y_range = radius..canvas.height().saturating_sub(radius).max(radius.saturating_add(1));

        graph
            .node_ids()
            .into_iter()
            .map(|id| {
                let x = rng.random_range(x_range.clone());
                let y = rng.random_range(y_range.clone());
                trace!(node = id.to_string(), x, y; "Initial position");
                (id, Point::new(x as f32, y as f32))
            })
            .collect()
    }

    /// Runs the simulation from the given starting positions.
    ///
    /// Positions for nodes without edges take part in repulsion only.
    ///
    /// # Errors
    ///
    /// Returns [`FloorplanError::InvalidInput`] when an edge endpoint has no
    /// starting position.
    pub fn simulate(
        &self,
        graph: &VectorGraph,
        positions: IndexMap<Id, Point>,
    ) -> Result<ForceLayout, FloorplanError> {
        let edges = graph
            .edges()
            .iter()
            .map(|edge| {
                let index_of = |id: Id| {
                    positions.get_index_of(&id).ok_or_else(|| {
                        FloorplanError::InvalidInput(format!("node `{id}` has no position"))
                    })
                };
                Ok((index_of(edge.start_id())?, index_of(edge.end_id())?))
            })
            .collect::<Result<Vec<_>, FloorplanError>>()?;

        let (ids, mut points): (Vec<Id>, Vec<Point>) = positions.into_iter().unzip();

        info!(
            nodes = points.len(),
            edges = edges.len(),
            iterations = self.config.iterations(),
            update:? = self.config.update();
            "Running force simulation"
        );

        let mut previous = points.clone();
        for iteration in 0..self.config.iterations() {
            match self.config.update() {
                UpdateMode::Snapshot => self.step_snapshot(&mut points, &edges),
                UpdateMode::InPlace => self.step_in_place(&mut points, &edges),
            }

            if let Some(tolerance) = self.config.tolerance() {
                let movement = max_displacement(&previous, &points);
                if movement < tolerance {
                    debug!(iteration, movement; "Simulation converged");
                    break;
                }
                previous.copy_from_slice(&points);
            }
        }

        let layout = ForceLayout::from(ids.into_iter().zip(points).collect::<IndexMap<_, _>>());
        debug!(bounds:? = layout.bounds(); "Force simulation finished");

        Ok(layout)
    }

    /// Push on a node away from another node `delta` behind it.
    fn repulsion(&self, delta: Point) -> Point {
        let distance = clamped_distance(delta, self.config.min_distance());
        let force = self.config.repulsion() / (distance * distance);
        delta.scale(force / distance)
    }

    /// Pull on an edge's start towards its end, `delta` being end minus start.
    fn attraction(&self, delta: Point) -> Point {
        let distance = clamped_distance(delta, self.config.min_distance());
        let force = self.config.attraction() * distance;
        delta.scale(force / distance)
    }

    /// Total repulsion on node `index` from every other node.
    fn repulsion_on(&self, index: usize, points: &[Point]) -> Point {
        let position = points[index];
        points
            .iter()
            .enumerate()
            .filter(|(other, _)| *other != index)
            .fold(Point::default(), |total, (_, other)| {
                total.add_point(self.repulsion(position.sub_point(*other)))
            })
    }

    #[cfg(feature = "parallel")]
    fn repulsion_pass(&self, points: &[Point]) -> Vec<Point> {
        use rayon::prelude::*;

        (0..points.len())
            .into_par_iter()
            .map(|index| self.repulsion_on(index, points))
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    fn repulsion_pass(&self, points: &[Point]) -> Vec<Point> {
        (0..points.len())
            .map(|index| self.repulsion_on(index, points))
            .collect()
    }

    /// One iteration where each pass reads a frozen copy of the positions.
    fn step_snapshot(&self, points: &mut [Point], edges: &[(usize, usize)]) {
        let repulsion = self.repulsion_pass(points);
        commit(points, &repulsion);

        let mut attraction = vec![Point::default(); points.len()];
        for &(start, end) in edges {
            let pull = self.attraction(points[end].sub_point(points[start]));
            attraction[start] = attraction[start].add_point(pull);
            attraction[end] = attraction[end].sub_point(pull);
        }
        commit(points, &attraction);
    }

    /// One iteration mutating positions as it goes.
    fn step_in_place(&self, points: &mut [Point], edges: &[(usize, usize)]) {
        for node in 0..points.len() {
            for other in 0..points.len() {
                if node == other {
                    continue;
                }
                let push = self.repulsion(points[node].sub_point(points[other]));
                points[node] = points[node].add_point(push);
            }
        }

        for &(start, end) in edges {
            let (start_position, end_position) = (points[start], points[end]);
            let pull = self.attraction(end_position.sub_point(start_position));
            points[start] = start_position.add_point(pull);
            points[end] = end_position.sub_point(pull);
        }
    }
}

fn commit(points: &mut [Point], displacements: &[Point]) {
    for (point, displacement) in points.iter_mut().zip(displacements) {
        *point = point.add_point(*displacement);
    }
}

fn max_displacement(before: &[Point], after: &[Point]) -> f32 {
    before
        .iter()
        .zip(after)
        .map(|(old, new)| new.sub_point(*old).hypot())
        .fold(0.0, f32::max)
}


#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use super::*;
    use crate::structure::VectorEdge;

    fn graph_strategy() -> impl Strategy<Value = VectorGraph> {
        prop::collection::vec((0u8..6, 0u8..6), 1..10).prop_map(|pairs| {
            pairs
                .into_iter()
                .map(|(start, end)| {
                    VectorEdge::new(Id::new(&format!("Room{start}")), Id::new(&format!("Room{end}")))
                        .unwrap()
                })
                .collect()
        })
    }

    /// The distance floor holds for any delta.
    fn check_clamped_distance_floor(x: f32, y: f32, floor: f32) -> Result<(), TestCaseError> {
        let distance = clamped_distance(Point::new(x, y), floor);
        prop_assert!(distance >= floor);
        prop_assert!(distance >= Point::new(x, y).hypot());
        Ok(())
    }

    /// Every endpoint gets a finite position and nothing else is placed.
    fn check_layout_is_finite_and_complete(
        graph: VectorGraph,
        seed: u64,
        update: UpdateMode,
    ) -> Result<(), TestCaseError> {
        let engine = Engine::new(
            ForceConfig::default()
                .with_iterations(50)
                .with_update(update),
        );
        let layout = engine
            .compute(&graph, &mut rng_from_seed(Some(seed)))
            .map_err(|err| TestCaseError::fail(err.to_string()))?;

        let expected: Vec<Id> = graph.node_ids().into_iter().collect();
        let actual: Vec<Id> = layout.ids().collect();
        prop_assert_eq!(actual, expected);
        prop_assert!(layout.iter().all(|(_, point)| point.is_finite()));
        Ok(())
    }

    proptest! {
        #[test]
        fn clamped_distance_floor(
            x in -1000.0f32..1000.0,
            y in -1000.0f32..1000.0,
            floor in 0.001f32..10.0,
        ) {
            check_clamped_distance_floor(x, y, floor)?;
        }

        #[test]
        fn layout_is_finite_and_complete(
            graph in graph_strategy(),
            seed in any::<u64>(),
            in_place in any::<bool>(),
        ) {
            let update = if in_place { UpdateMode::InPlace } else { UpdateMode::Snapshot };
            check_layout_is_finite_and_complete(graph, seed, update)?;
        }
    }
}
