//! Decides which nodes are drawn as flat images instead of markup.

use crate::{DesignNode, PaintKind};

/// Whether a node should be rendered as an opaque raster image.
///
/// Vector-like shapes always are; any other node is when it carries a visible
/// image fill.
#[must_use]
pub fn is_image_node(node: &DesignNode) -> bool {
    node.node_type.is_vector_like()
        || node
            .visible_fills()
            .any(|fill| fill.kind == PaintKind::Image)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Color, NodeType, Paint};

    #[test]
    fn test_vector_shapes_are_images() {
        for node_type in [
            NodeType::Vector,
            NodeType::BooleanOperation,
            NodeType::Star,
            NodeType::Line,
            NodeType::Ellipse,
            NodeType::RegularPolygon,
            NodeType::Slice,
        ] {
            assert!(is_image_node(&DesignNode::new("1", "shape", node_type)));
        }
    }

    #[test]
    fn test_image_fill_makes_image() {
        let node = DesignNode::new("1", "Photo", NodeType::Rectangle).with_fills(vec![
            Paint::solid(Color::new(1.0, 1.0, 1.0, 1.0)),
            Paint::of_kind(PaintKind::Image),
        ]);
        assert!(is_image_node(&node));
    }

    #[test]
    fn test_hidden_image_fill_is_ignored() {
        let node = DesignNode::new("1", "Photo", NodeType::Rectangle)
            .with_fills(vec![Paint::of_kind(PaintKind::Image).hidden()]);
        assert!(!is_image_node(&node));
    }

    #[test]
    fn test_plain_frame_is_not_image() {
        let node = DesignNode::new("1", "Frame", NodeType::Frame)
            .with_fills(vec![Paint::solid(Color::new(0.0, 0.0, 0.0, 1.0))]);
        assert!(!is_image_node(&node));
    }
}
