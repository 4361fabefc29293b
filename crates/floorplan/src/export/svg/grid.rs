//! SVG rendering of grid layouts.

use log::debug;
use svg::{Document, node::element as svg_element};

use super::Svg;
use crate::{layout::GridLayout, structure::Graph};

impl Svg {
    /// Renders every placed room of `graph` as a labelled rectangle.
    ///
    /// Rooms are drawn in vertex order; vertices the engine did not place
    /// are skipped.
    pub fn render_grid_layout(&self, graph: &Graph, layout: &GridLayout) -> Document {
        let mut doc = self.create_document();
        let mut drawn = 0;

        for vertex in graph.vertices() {
            let Some(room) = layout.get(vertex.id()) else {
                continue;
            };

            let rect = svg_element::Rectangle::new()
                .set("x", room.min_x())
                .set("y", room.min_y())
                .set("width", room.width())
                .set("height", room.height())
                .set("fill", self.style.room_fill_color())
                .set("stroke", self.stroke_color())
                .set("stroke-width", self.style.line_width());

            let label = self.create_label(
                &vertex.id().to_string(),
                room.center(),
                self.style.room_font_size(),
                self.style.label_color(),
            );

            doc = doc.add(svg_element::Group::new().add(rect).add(label));
            drawn += 1;
        }

        debug!(rooms = drawn, skipped = graph.vertices_count() - drawn; "Grid layout rendered");
        doc
    }
}

#[cfg(test)]
mod tests {
    use floorplan_core::identifier::Id;

    use super::*;
    use crate::{
        config::{GridConfig, StyleConfig},
        layout::engines::grid,
    };

    fn render(graph: &Graph) -> String {
        let config = GridConfig::default();
        let layout = grid::Engine::new(config).place(graph).unwrap();
        Svg::new(*config.canvas(), StyleConfig::default())
            .render_grid_layout(graph, &layout)
            .to_string()
    }

    #[test]
    fn test_rooms_are_drawn_with_labels() {
        let mut graph = Graph::new();
        graph.add_edge(Id::new("Living"), Id::new("Kitchen"));

        let rendered = render(&graph);

        // Background plus one rectangle per room
        assert_eq!(rendered.matches("<rect").count(), 3);
        assert!(rendered.contains("Living"));
        assert!(rendered.contains("Kitchen"));
        assert!(rendered.contains(r##"fill="#add8e6""##));
        assert!(rendered.contains(r#"stroke-width="2""#));
        // Kitchen sits right of Living
        assert!(rendered.contains(r#"x="100""#));
    }

    #[test]
    fn test_unplaced_rooms_are_skipped() {
        let mut graph = Graph::new();
        graph.add_edge(Id::new("Living"), Id::new("Kitchen"));
        graph.add_vertex(Id::new("Garage"));

        let rendered = render(&graph);

        assert_eq!(rendered.matches("<rect").count(), 3);
        assert!(!rendered.contains("Garage"));
    }

    #[test]
    fn test_room_labels_keep_prefix() {
        let mut graph = Graph::new();
        graph.add_edge(Id::new("Room1"), Id::new("Room2"));

        let rendered = render(&graph);

        assert!(rendered.contains("Room1"));
        assert!(rendered.contains("Room2"));
    }
}
