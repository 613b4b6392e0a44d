//! Collects the ids of image-like nodes so their renders can be requested.

use crate::classify::is_image_node;
use crate::DesignNode;

/// Ids of every image-like node under `root`, in pre-order.
///
/// A collected node's descendants are not visited: the node is drawn as one
/// flat image, so nothing below it ever reaches the output.
#[must_use]
pub fn collect_image_node_ids(root: &DesignNode) -> Vec<String> {
    let mut ids = Vec::new();
    collect_into(root, &mut ids);
    ids
}

fn collect_into(node: &DesignNode, ids: &mut Vec<String>) {
    if is_image_node(node) {
        ids.push(node.id.clone());
        return;
    }
    for child in &node.children {
        collect_into(child, ids);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{NodeType, Paint, PaintKind};

    #[test]
    fn test_preorder_collection() {
        let root = DesignNode::new("0", "Root", NodeType::Frame).with_children(vec![
            DesignNode::new("1", "Icon", NodeType::Vector),
            DesignNode::new("2", "Group", NodeType::Group).with_children(vec![
                DesignNode::new("3", "Dot", NodeType::Ellipse),
                DesignNode::new("4", "Label", NodeType::Text),
            ]),
            DesignNode::new("5", "Hero", NodeType::Rectangle)
                .with_fills(vec![Paint::of_kind(PaintKind::Image)]),
        ]);

        assert_eq!(collect_image_node_ids(&root), vec!["1", "3", "5"]);
    }

    #[test]
    fn test_does_not_descend_into_image_nodes() {
        let root = DesignNode::new("0", "Logo", NodeType::BooleanOperation)
            .with_children(vec![DesignNode::new("1", "Part", NodeType::Vector)]);

        assert_eq!(collect_image_node_ids(&root), vec!["0"]);
    }

    #[test]
    fn test_no_images() {
        let root = DesignNode::new("0", "Root", NodeType::Frame)
            .with_children(vec![DesignNode::new("1", "Box", NodeType::Rectangle)]);
        assert!(collect_image_node_ids(&root).is_empty());
    }
}
