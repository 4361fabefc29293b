//! SVG rendering of force layouts.

use log::{debug, trace};
use svg::{Document, node::element as svg_element};

use super::Svg;
use crate::{layout::ForceLayout, structure::VectorGraph};

impl Svg {
    /// Renders edges as lines, then every node as a circle with its label.
    ///
    /// An edge is drawn only when both endpoints have a position.
    pub fn render_force_layout(&self, graph: &VectorGraph, layout: &ForceLayout) -> Document {
        let mut doc = self.create_document();

        let mut edges = svg_element::Group::new();
        let mut skipped = 0;
        for edge in graph.edges() {
            let (Some(start), Some(end)) = (layout.get(edge.start_id()), layout.get(edge.end_id()))
            else {
                trace!(
                    start = edge.start_id().to_string(),
                    end = edge.end_id().to_string();
                    "Skipping edge with unplaced endpoint"
                );
                skipped += 1;
                continue;
            };

            edges = edges.add(
                svg_element::Line::new()
                    .set("x1", start.x())
                    .set("y1", start.y())
                    .set("x2", end.x())
                    .set("y2", end.y())
                    .set("stroke", self.stroke_color())
                    .set("stroke-width", self.style.line_width()),
            );
        }
        doc = doc.add(edges);

        let radius = self.canvas.node_radius();
        let prefix = self.style.label_prefix();
        for (id, position) in layout.iter() {
            let fill = self.style.node_fill_color();
            let circle = svg_element::Circle::new()
                .set("cx", position.x())
                .set("cy", position.y())
                .set("r", radius)
                .set("fill", fill)
                .set("fill-opacity", fill.alpha())
                .set("stroke", self.stroke_color())
                .set("stroke-width", self.style.line_width());

            let label = self
                .create_label(
                    &id.label_without_prefix(prefix),
                    position,
                    self.style.node_font_size(),
                    self.style.node_label_color(),
                )
                .set("font-weight", "bold");

            doc = doc.add(svg_element::Group::new().add(circle).add(label));
        }

        debug!(nodes = layout.len(), skipped_edges = skipped; "Force layout rendered");
        doc
    }
}

#[cfg(test)]
mod tests {
    use floorplan_core::{geometry::Point, identifier::Id};
    use indexmap::IndexMap;

    use super::*;
    use crate::{
        config::{CanvasConfig, StyleConfig},
        structure::VectorEdge,
    };

    fn vector_graph(edges: &[(&str, &str)]) -> VectorGraph {
        edges
            .iter()
            .map(|(start, end)| VectorEdge::new(Id::new(start), Id::new(end)).unwrap())
            .collect()
    }

    fn layout(nodes: &[(&str, f32, f32)]) -> ForceLayout {
        nodes
            .iter()
            .map(|(id, x, y)| (Id::new(id), Point::new(*x, *y)))
            .collect::<IndexMap<_, _>>()
            .into()
    }

    #[test]
    fn test_edges_and_nodes_are_drawn() {
        let graph = vector_graph(&[("Room1", "Room2")]);
        let layout = layout(&[("Room1", 100.0, 120.0), ("Room2", 300.0, 320.0)]);

        let rendered = Svg::new(CanvasConfig::default(), StyleConfig::default())
            .render_force_layout(&graph, &layout)
            .to_string();

        assert_eq!(rendered.matches("<line").count(), 1);
        assert_eq!(rendered.matches("<circle").count(), 2);
        assert!(rendered.contains(r#"x1="100""#));
        assert!(rendered.contains(r#"y2="320""#));
        assert!(rendered.contains(r#"r="20""#));
        assert!(rendered.contains(r#"font-weight="bold""#));
    }

    #[test]
    fn test_edges_with_missing_endpoint_are_skipped() {
        let graph = vector_graph(&[("A", "B"), ("B", "Ghost")]);
        let layout = layout(&[("A", 50.0, 50.0), ("B", 150.0, 50.0)]);

        let rendered = Svg::new(CanvasConfig::default(), StyleConfig::default())
            .render_force_layout(&graph, &layout)
            .to_string();

        assert_eq!(rendered.matches("<line").count(), 1);
        assert_eq!(rendered.matches("<circle").count(), 2);
        assert!(!rendered.contains("Ghost"));
    }

    #[test]
    fn test_label_prefix_is_stripped() {
        let graph = vector_graph(&[("RoomKitchen", "RoomHall")]);
        let layout = layout(&[("RoomKitchen", 50.0, 50.0), ("RoomHall", 150.0, 50.0)]);

        let rendered = Svg::new(CanvasConfig::default(), StyleConfig::default())
            .render_force_layout(&graph, &layout)
            .to_string();

        assert!(rendered.contains("Kitchen"));
        assert!(rendered.contains("Hall"));
        assert!(!rendered.contains("RoomKitchen"));
    }

    #[test]
    fn test_empty_prefix_keeps_labels() {
        let style: StyleConfig = toml::from_str(r#"label_prefix = """#).unwrap();
        let graph = vector_graph(&[("RoomKitchen", "RoomHall")]);
        let layout = layout(&[("RoomKitchen", 50.0, 50.0), ("RoomHall", 150.0, 50.0)]);

        let rendered = Svg::new(CanvasConfig::default(), style)
            .render_force_layout(&graph, &layout)
            .to_string();

        assert!(rendered.contains("RoomKitchen"));
    }
}
