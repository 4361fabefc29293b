//! Flat edge-list graph for the force-directed engine.

use indexmap::IndexSet;

use floorplan_core::identifier::Id;

use super::Graph;
use crate::FloorplanError;

/// An edge given only by the identifiers of its endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VectorEdge {
    start_id: Id,
    end_id: Id,
}

impl VectorEdge {
    /// Creates a new edge.
    ///
    /// # Errors
    ///
    /// Returns [`FloorplanError::InvalidInput`] if either identifier is empty.
    pub fn new(start_id: Id, end_id: Id) -> Result<Self, FloorplanError> {
        if start_id.is_empty() || end_id.is_empty() {
            return Err(FloorplanError::InvalidInput(format!(
                "edge endpoints must be non-empty, got `{start_id}` -> `{end_id}`"
            )));
        }
        Ok(Self { start_id, end_id })
    }

    pub fn start_id(&self) -> Id {
        self.start_id
    }

    pub fn end_id(&self) -> Id {
        self.end_id
    }
}

/// A graph represented only by its edges.
///
/// Nodes are implied by edge endpoints; a room without edges does not exist
/// for this representation.
///
/// # Examples
///
/// ```
/// use floorplan::structure::{VectorEdge, VectorGraph};
/// use floorplan_core::identifier::Id;
///
/// let mut graph = VectorGraph::new();
/// graph.push(VectorEdge::new(Id::new("A"), Id::new("B")).unwrap());
/// graph.push(VectorEdge::new(Id::new("B"), Id::new("C")).unwrap());
///
/// let nodes: Vec<String> = graph.node_ids().iter().map(|id| id.to_string()).collect();
/// assert_eq!(nodes, ["A", "B", "C"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VectorGraph {
    edges: Vec<VectorEdge>,
}

impl VectorGraph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an edge.
    pub fn push(&mut self, edge: VectorEdge) {
        self.edges.push(edge);
    }

    /// Edges in insertion order
    pub fn edges(&self) -> &[VectorEdge] {
        &self.edges
    }

    /// Distinct endpoint identifiers in order of first appearance.
    pub fn node_ids(&self) -> IndexSet<Id> {
        self.edges
            .iter()
            .flat_map(|edge| [edge.start_id, edge.end_id])
            .collect()
    }

    /// Returns true when the graph has no edges (and hence no nodes).
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

impl TryFrom<&Graph> for VectorGraph {
    type Error = FloorplanError;

    /// One vector edge per graph edge, vertex by vertex.
    fn try_from(graph: &Graph) -> Result<Self, Self::Error> {
        let edges = graph
            .edges()
            .map(|edge| VectorEdge::new(edge.start(), edge.end()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { edges })
    }
}

impl FromIterator<VectorEdge> for VectorGraph {
    fn from_iter<T: IntoIterator<Item = VectorEdge>>(iter: T) -> Self {
        Self {
            edges: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vector_edge_rejects_empty_ids() {
        assert!(matches!(
            VectorEdge::new(Id::new(""), Id::new("B")),
            Err(FloorplanError::InvalidInput(_))
        ));
        assert!(matches!(
            VectorEdge::new(Id::new("A"), Id::new("")),
            Err(FloorplanError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_node_ids_are_distinct_and_ordered() {
        let graph: VectorGraph = [("B", "A"), ("A", "C"), ("C", "B")]
            .into_iter()
            .map(|(s, e)| VectorEdge::new(Id::new(s), Id::new(e)).unwrap())
            .collect();

        let nodes: Vec<Id> = graph.node_ids().into_iter().collect();
        assert_eq!(nodes, [Id::new("B"), Id::new("A"), Id::new("C")]);
    }

    #[test]
    fn test_from_graph_skips_isolated_vertices() {
        let mut graph = Graph::new();
        graph.add_vertex(Id::new("Isolated"));
        graph.add_edge(Id::new("A"), Id::new("B"));
        graph.add_edge(Id::new("B"), Id::new("C"));

        let vector = VectorGraph::try_from(&graph).unwrap();
        assert_eq!(vector.edges().len(), 2);
        assert!(!vector.node_ids().contains(&Id::new("Isolated")));
    }

    #[test]
    fn test_empty_graph() {
        let vector = VectorGraph::try_from(&Graph::new()).unwrap();
        assert!(vector.is_empty());
        assert!(vector.node_ids().is_empty());
    }
}
