//! Grid placement engine
//!
//! Rooms are placed breadth-first from the first vertex of the graph. The
//! start room occupies the cell at the canvas origin; every newly reached
//! neighbor gets a cell next to the room it was reached from, in the
//! direction picked by that room's neighbor counter:
//!
//! ```text
//!              3: up
//!               ▲
//!   2: left ◄ current ► 0: right
//!               ▼
//!             1: down
//! ```
//!
//! The counter starts at zero for every room and only advances when a
//! neighbor is actually placed. Cells are fixed by the configured grid and
//! are not scaled to the number of rooms, so large plans run off the canvas
//! and, with [`GridPlacement::Legacy`], rooms may be stacked on top of each
//! other.

use std::collections::VecDeque;

use indexmap::IndexMap;
use log::{debug, info, trace};

use floorplan_core::{
    geometry::{Bounds, Point, Size},
    identifier::Id,
};

use crate::{
    FloorplanError,
    config::{GridConfig, GridPlacement},
    layout::GridLayout,
    structure::Graph,
};

/// Side of the current room a neighbor is placed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Right,
    Down,
    Left,
    Up,
}

impl Direction {
    const CYCLE: [Direction; 4] = [Self::Right, Self::Down, Self::Left, Self::Up];

    /// Direction for the `index`-th placed neighbor of a room.
    fn from_index(index: usize) -> Self {
        Self::CYCLE[index % Self::CYCLE.len()]
    }

    /// The following direction in the cycle.
    fn next(self) -> Self {
        match self {
            Self::Right => Self::Down,
            Self::Down => Self::Left,
            Self::Left => Self::Up,
            Self::Up => Self::Right,
        }
    }

    /// Cell next to `from` in this direction.
    ///
    /// Right and down step by the current room's size, left and up by one
    /// cell.
    fn place(self, from: Bounds, cell: Size) -> Bounds {
        let offset = match self {
            Self::Right => Point::new(from.width(), 0.0),
            Self::Down => Point::new(0.0, from.height()),
            Self::Left => Point::new(-cell.width(), 0.0),
            Self::Up => Point::new(0.0, -cell.height()),
        };
        Bounds::new_from_top_left(from.min_point().add_point(offset), cell)
    }
}

/// Grid placement engine
pub struct Engine {
    config: GridConfig,
}

impl Engine {
    /// Create a new grid engine
    pub fn new(config: GridConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration the engine places rooms with.
    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// Places every room reachable from the first vertex of `graph`.
    ///
    /// Rooms that cannot be reached by following edges from the first vertex
    /// get no entry.
    ///
    /// # Errors
    ///
    /// Returns [`FloorplanError::InvalidInput`] for a graph without vertices
    /// and [`FloorplanError::Config`] for an unusable grid.
    pub fn place(&self, graph: &Graph) -> Result<GridLayout, FloorplanError> {
        self.config.validate()?;

        let start = graph.first_vertex().ok_or_else(|| {
            FloorplanError::InvalidInput("graph has no vertices to place".to_string())
        })?;

        let cell = self.config.cell_size();
        info!(
            start = start.id().to_string(),
            rooms = graph.vertices_count(),
            cell_width = cell.width(),
            cell_height = cell.height();
            "Placing rooms on grid"
        );

        // Insertion into `rooms` marks a vertex visited, which happens on enqueue.
        let mut rooms: IndexMap<Id, Bounds> = IndexMap::with_capacity(graph.vertices_count());
        let mut queue = VecDeque::new();

        rooms.insert(
            start.id(),
            Bounds::new_from_top_left(Point::default(), cell),
        );
        queue.push_back(start.id());

        while let Some(current_id) = queue.pop_front() {
            let (Some(current), Some(&current_room)) =
                (graph.vertex(current_id), rooms.get(&current_id))
            else {
                continue;
            };

            let mut neighbor_index = 0;
            for edge in current.edges() {
                let neighbor = edge.end();
                if rooms.contains_key(&neighbor) {
                    continue;
                }

                let direction = self.choose_direction(
                    Direction::from_index(neighbor_index),
                    current_room,
                    cell,
                    &rooms,
                );
                let room = direction.place(current_room, cell);
                trace!(
                    from = current_id.to_string(),
                    room = neighbor.to_string(),
                    direction:? = direction,
                    x = room.min_x(),
                    y = room.min_y();
                    "Placed room"
                );

                rooms.insert(neighbor, room);
                queue.push_back(neighbor);
                neighbor_index += 1;
            }
        }

        debug!(
            placed = rooms.len(),
            unreachable = graph.vertices_count().saturating_sub(rooms.len());
            "Grid placement finished"
        );

        Ok(GridLayout::from(rooms))
    }

    /// Applies the configured [`GridPlacement`] to the counter's direction.
    fn choose_direction(
        &self,
        preferred: Direction,
        current_room: Bounds,
        cell: Size,
        rooms: &IndexMap<Id, Bounds>,
    ) -> Direction {
        match self.config.placement() {
            GridPlacement::Legacy => preferred,
            GridPlacement::AvoidOverlap => {
                let mut direction = preferred;
                for _ in 0..Direction::CYCLE.len() {
                    let candidate = direction.place(current_room, cell);
                    if !rooms.values().any(|room| room.intersects(&candidate)) {
                        return direction;
                    }
                    direction = direction.next();
                }
                preferred
            }
        }
    }
}
