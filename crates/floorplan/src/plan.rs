//! Plan file parsing.
//!
//! A plan is a TOML document listing rooms and the rooms adjacent to them:
//!
//! ```toml
//! [[room]]
//! id = "Living"
//! adjacent = ["Kitchen", "Hall"]
//!
//! [[room]]
//! id = "Kitchen"
//! ```
//!
//! Rooms become vertices in file order. Each `adjacent` entry becomes an
//! edge from the declaring room; a room that is only ever named as adjacent
//! is created on first mention.

use std::collections::HashSet;

use log::{debug, info};
use serde::Deserialize;
use toml::Spanned;

use floorplan_core::identifier::Id;

use crate::{FloorplanError, structure::Graph};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct PlanFile {
    #[serde(default)]
    room: Vec<RoomEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RoomEntry {
    id: Spanned<String>,
    #[serde(default)]
    adjacent: Vec<Spanned<String>>,
}

/// Parses plan source text into a room [`Graph`].
///
/// # Errors
///
/// Returns [`FloorplanError::Plan`] for malformed TOML, unknown keys, empty
/// room names, or a room declared twice. The error carries `source` and,
/// where known, the byte span of the offending text.
pub fn parse(source: &str) -> Result<Graph, FloorplanError> {
    info!(bytes = source.len(); "Parsing plan");

    let plan: PlanFile = toml::from_str(source).map_err(|err| {
        FloorplanError::new_plan_error(err.message().to_string(), err.span(), source)
    })?;

    let mut graph = Graph::new();
    let mut declared = HashSet::new();

    for room in &plan.room {
        let id = room_id(&room.id, source)?;
        if !declared.insert(id) {
            return Err(FloorplanError::new_plan_error(
                format!("room `{id}` is declared more than once"),
                Some(room.id.span()),
                source,
            ));
        }
        graph.add_vertex(id);

        for adjacent in &room.adjacent {
            graph.add_edge(id, room_id(adjacent, source)?);
        }
    }

    debug!(
        rooms = graph.vertices_count(),
        adjacencies = graph.edges_count();
        "Plan parsed"
    );

    Ok(graph)
}

fn room_id(name: &Spanned<String>, source: &str) -> Result<Id, FloorplanError> {
    let trimmed = name.get_ref().trim();
    if trimmed.is_empty() {
        return Err(FloorplanError::new_plan_error(
            "room name must not be empty",
            Some(name.span()),
            source,
        ));
    }
    Ok(Id::new(trimmed))
}
