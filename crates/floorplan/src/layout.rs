//! Layout computation.
//!
//! The engines live in [`engines`]; this module defines the position maps
//! they return. A position map is created fresh by every engine call and
//! owned by the caller.

pub mod engines;

use indexmap::IndexMap;

use floorplan_core::{
    geometry::{Bounds, Point, Size},
    identifier::Id,
};

/// Geometry stored per node in a [`Layout`].
pub trait Extent: Copy {
    /// Bounding rectangle of the geometry
    fn extent(&self) -> Bounds;
}

impl Extent for Bounds {
    fn extent(&self) -> Bounds {
        *self
    }
}

impl Extent for Point {
    fn extent(&self) -> Bounds {
        Bounds::new_from_top_left(*self, Size::default())
    }
}

/// Ordered mapping from node identifier to its computed geometry.
///
/// Entries keep the order in which the engine produced them.
#[derive(Debug, Clone, PartialEq)]
pub struct Layout<G> {
    entries: IndexMap<Id, G>,
}

/// Rooms placed by the grid engine, as rectangles.
pub type GridLayout = Layout<Bounds>;

/// Nodes placed by the force engine, as points.
pub type ForceLayout = Layout<Point>;

impl<G: Extent> Layout<G> {
    /// Returns the geometry of a node, or `None` when the engine did not place it.
    pub fn get(&self, id: Id) -> Option<G> {
        self.entries.get(&id).copied()
    }

    /// Returns true when the engine placed the node.
    pub fn contains(&self, id: Id) -> bool {
        self.entries.contains_key(&id)
    }

    /// Number of placed nodes
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates placed nodes in placement order.
    pub fn iter(&self) -> impl Iterator<Item = (Id, G)> + '_ {
        self.entries.iter().map(|(id, geometry)| (*id, *geometry))
    }

    /// Identifiers of all placed nodes in placement order.
    pub fn ids(&self) -> impl Iterator<Item = Id> + '_ {
        self.entries.keys().copied()
    }

    /// Smallest rectangle containing every placed node, `None` when empty.
    pub fn bounds(&self) -> Option<Bounds> {
        self.entries
            .values()
            .map(Extent::extent)
            .reduce(|acc, bounds| acc.merge(&bounds))
    }

    /// Consumes the layout, returning the underlying map.
    pub fn into_inner(self) -> IndexMap<Id, G> {
        self.entries
    }
}

impl<G> From<IndexMap<Id, G>> for Layout<G> {
    fn from(entries: IndexMap<Id, G>) -> Self {
        Self { entries }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_layout() {
        let layout = ForceLayout::from(IndexMap::new());
        assert!(layout.is_empty());
        assert_eq!(layout.len(), 0);
        assert_eq!(layout.bounds(), None);
    }

    #[test]
    fn test_force_layout_bounds() {
        let mut entries = IndexMap::new();
        entries.insert(Id::new("A"), Point::new(10.0, 40.0));
        entries.insert(Id::new("B"), Point::new(-5.0, 20.0));
        let layout = ForceLayout::from(entries);

        let bounds = layout.bounds().unwrap();
        assert_eq!(bounds.min_point(), Point::new(-5.0, 20.0));
        assert_eq!(bounds.max_x(), 10.0);
        assert_eq!(bounds.max_y(), 40.0);
    }

    #[test]
    fn test_grid_layout_accessors() {
        let a = Bounds::new_from_top_left(Point::new(0.0, 0.0), Size::new(100.0, 133.0));
        let b = Bounds::new_from_top_left(Point::new(0.0, -133.0), Size::new(100.0, 133.0));
        let mut entries = IndexMap::new();
        entries.insert(Id::new("A"), a);
        entries.insert(Id::new("B"), b);
        let layout = GridLayout::from(entries);

        assert_eq!(layout.get(Id::new("A")), Some(a));
        assert!(layout.contains(Id::new("B")));
        assert!(!layout.contains(Id::new("C")));
        assert_eq!(
            layout.ids().collect::<Vec<_>>(),
            [Id::new("A"), Id::new("B")]
        );

        let bounds = layout.bounds().unwrap();
        assert_eq!(bounds.min_y(), -133.0);
        assert_eq!(bounds.height(), 266.0);
    }
}
