//! Room adjacency graph.
//!
//! Vertices are kept in insertion order, which makes "the first vertex of
//! the graph" well defined for the grid engine. Each vertex owns its
//! outgoing edges, also in insertion order.

use indexmap::IndexMap;
use log::trace;

use floorplan_core::identifier::Id;

/// A directed adjacency from one room to another.
///
/// Traversal follows edges from start to end only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    start: Id,
    end: Id,
}

impl Edge {
    /// Creates a new edge between two rooms.
    pub fn new(start: Id, end: Id) -> Self {
        Self { start, end }
    }

    /// Room the edge leaves from
    pub fn start(&self) -> Id {
        self.start
    }

    /// Room the edge points to
    pub fn end(&self) -> Id {
        self.end
    }
}

/// A room and its ordered outgoing edges.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vertex {
    id: Id,
    edges: Vec<Edge>,
}

impl Vertex {
    fn new(id: Id) -> Self {
        Self {
            id,
            edges: Vec::new(),
        }
    }

    /// Identifier of the room
    pub fn id(&self) -> Id {
        self.id
    }

    /// Outgoing edges in the order they were added
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }
}

/// Insertion-ordered room graph.
///
/// # Examples
///
/// ```
/// use floorplan::structure::Graph;
/// use floorplan_core::identifier::Id;
///
/// let mut graph = Graph::new();
/// graph.add_edge(Id::new("Living"), Id::new("Kitchen"));
/// graph.add_vertex(Id::new("Attic"));
///
/// let ids: Vec<String> = graph.vertices().map(|v| v.id().to_string()).collect();
/// assert_eq!(ids, ["Living", "Kitchen", "Attic"]);
/// assert_eq!(graph.edges_count(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    vertices: IndexMap<Id, Vertex>,
}

impl Graph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a vertex if it does not exist yet.
    ///
    /// Returns true when a new vertex was inserted.
    pub fn add_vertex(&mut self, id: Id) -> bool {
        if self.vertices.contains_key(&id) {
            return false;
        }
        self.vertices.insert(id, Vertex::new(id));
        true
    }

    /// Appends an edge from `start` to `end`, creating missing endpoints
    /// (start first, then end).
    pub fn add_edge(&mut self, start: Id, end: Id) {
        self.add_vertex(start);
        self.add_vertex(end);
        trace!(start = start.to_string(), end = end.to_string(); "Adding edge");
        if let Some(vertex) = self.vertices.get_mut(&start) {
            vertex.edges.push(Edge::new(start, end));
        }
    }

    /// Returns the vertex with the given id.
    pub fn vertex(&self, id: Id) -> Option<&Vertex> {
        self.vertices.get(&id)
    }

    /// Returns true when the graph has a vertex with the given id.
    pub fn contains_vertex(&self, id: Id) -> bool {
        self.vertices.contains_key(&id)
    }

    /// Iterates vertices in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex> {
        self.vertices.values()
    }

    /// First inserted vertex, the start of the grid traversal.
    pub fn first_vertex(&self) -> Option<&Vertex> {
        self.vertices.first().map(|(_, vertex)| vertex)
    }

    /// Iterates all edges, vertex by vertex in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.vertices.values().flat_map(|vertex| vertex.edges.iter())
    }

    /// Number of vertices
    pub fn vertices_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of edges
    pub fn edges_count(&self) -> usize {
        self.vertices.values().map(|vertex| vertex.edges.len()).sum()
    }

    /// Returns true when the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_graph_new_is_empty() {
        let graph = Graph::new();
        assert!(graph.is_empty());
        assert_eq!(graph.vertices_count(), 0);
        assert_eq!(graph.edges_count(), 0);
        assert!(graph.first_vertex().is_none());
    }

    #[test]
    fn test_add_vertex_is_idempotent() {
        let mut graph = Graph::new();
        assert!(graph.add_vertex(Id::new("A")));
        assert!(!graph.add_vertex(Id::new("A")));
        assert_eq!(graph.vertices_count(), 1);
    }

    #[test]
    fn test_add_edge_creates_endpoints_in_order() {
        let mut graph = Graph::new();
        graph.add_edge(Id::new("B"), Id::new("C"));
        graph.add_edge(Id::new("A"), Id::new("B"));

        let ids: Vec<String> = graph.vertices().map(|v| v.id().to_string()).collect();
        assert_eq!(ids, ["B", "C", "A"]);
        assert_eq!(graph.first_vertex().map(Vertex::id), Some(Id::new("B")));
    }

    #[test]
    fn test_edges_keep_insertion_order() {
        let mut graph = Graph::new();
        let a = Id::new("A");
        graph.add_edge(a, Id::new("C"));
        graph.add_edge(a, Id::new("B"));
        graph.add_edge(a, Id::new("C"));

        let ends: Vec<Id> = graph
            .vertex(a)
            .unwrap()
            .edges()
            .iter()
            .map(Edge::end)
            .collect();
        assert_eq!(ends, [Id::new("C"), Id::new("B"), Id::new("C")]);
        assert_eq!(graph.edges_count(), 3);
    }

    #[test]
    fn test_edges_iterate_vertex_by_vertex() {
        let mut graph = Graph::new();
        graph.add_vertex(Id::new("A"));
        graph.add_vertex(Id::new("B"));
        graph.add_edge(Id::new("B"), Id::new("A"));
        graph.add_edge(Id::new("A"), Id::new("B"));

        let edges: Vec<Edge> = graph.edges().copied().collect();
        assert_eq!(
            edges,
            [
                Edge::new(Id::new("A"), Id::new("B")),
                Edge::new(Id::new("B"), Id::new("A")),
            ]
        );
    }

    #[test]
    fn test_self_loop_is_kept() {
        let mut graph = Graph::new();
        graph.add_edge(Id::new("Loop"), Id::new("Loop"));
        assert_eq!(graph.vertices_count(), 1);
        assert_eq!(graph.edges_count(), 1);
    }
}
