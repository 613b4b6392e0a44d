//! Property tests for tree traversal invariants.
//!
//! Random trees are generated with unique node names (`TokNEnd`) so the
//! presence of a node in the output can be checked by searching for its name.

use design_core::{collect_image_node_ids, DesignNode, ImageMap, MarkupCompiler, NodeType};
use proptest::prelude::*;

fn arb_node_type() -> impl Strategy<Value = NodeType> {
    prop_oneof![
        Just(NodeType::Frame),
        Just(NodeType::Group),
        Just(NodeType::Text),
        Just(NodeType::Rectangle),
        Just(NodeType::Vector),
        Just(NodeType::Ellipse),
    ]
}

fn arb_tree() -> impl Strategy<Value = DesignNode> {
    let leaf = (arb_node_type(), any::<bool>()).prop_map(|(node_type, visible)| {
        let mut node = DesignNode::new("", "", node_type);
        node.visible = visible;
        node
    });
    leaf.prop_recursive(4, 32, 4, |inner| {
        (
            arb_node_type(),
            any::<bool>(),
            prop::collection::vec(inner, 0..4),
        )
            .prop_map(|(node_type, visible, children)| {
                let mut node = DesignNode::new("", "", node_type).with_children(children);
                node.visible = visible;
                node
            })
    })
}

/// Give every node a unique id and name, in pre-order.
fn label(node: &mut DesignNode, next: &mut usize) {
    node.id = next.to_string();
    node.name = format!("Tok{next}End");
    *next += 1;
    for child in &mut node.children {
        label(child, next);
    }
}

fn labelled(mut root: DesignNode) -> DesignNode {
    // The root stays visible so there is always a document to inspect.
    root.visible = true;
    let mut next = 0;
    label(&mut root, &mut next);
    root
}

fn names(node: &DesignNode, out: &mut Vec<String>) {
    out.push(node.name.clone());
    for child in &node.children {
        names(child, out);
    }
}

/// Partition names into (emitted, suppressed) given the image map.
fn expected(
    node: &DesignNode,
    images: &ImageMap,
    emitted: &mut Vec<String>,
    suppressed: &mut Vec<String>,
) {
    if !node.visible {
        names(node, suppressed);
        return;
    }
    emitted.push(node.name.clone());
    if images.contains_key(&node.id) {
        for child in &node.children {
            names(child, suppressed);
        }
        return;
    }
    for child in &node.children {
        expected(child, images, emitted, suppressed);
    }
}

proptest! {
    #[test]
    fn prop_invisible_subtrees_produce_nothing(tree in arb_tree()) {
        let root = labelled(tree);
        let html = MarkupCompiler::default().convert(&root).html;

        let mut emitted = Vec::new();
        let mut suppressed = Vec::new();
        expected(&root, &ImageMap::new(), &mut emitted, &mut suppressed);

        for name in &suppressed {
            prop_assert!(!html.contains(name.as_str()), "{} should be pruned", name);
        }
        for name in &emitted {
            let rule = format!("-{name} {{");
            prop_assert!(html.contains(&rule), "{} should have a style rule", name);
        }
    }

    #[test]
    fn prop_resolved_images_are_leaves(tree in arb_tree()) {
        let root = labelled(tree);
        let images: ImageMap = collect_image_node_ids(&root)
            .into_iter()
            .map(|id| {
                let url = format!("https://img.example/{id}.png");
                (id, url)
            })
            .collect();

        let html = MarkupCompiler::new(images.clone()).convert(&root).html;

        let mut emitted = Vec::new();
        let mut suppressed = Vec::new();
        expected(&root, &images, &mut emitted, &mut suppressed);

        for name in &suppressed {
            prop_assert!(!html.contains(name.as_str()), "{} should not be emitted", name);
        }

        let visible_images = emitted
            .iter()
            .filter(|name| {
                let id = name.trim_start_matches("Tok").trim_end_matches("End");
                images.contains_key(id)
            })
            .count();
        prop_assert_eq!(html.matches("<img ").count(), visible_images);
    }

    #[test]
    fn prop_conversion_is_deterministic(tree in arb_tree()) {
        let root = labelled(tree);
        let compiler = MarkupCompiler::default();
        prop_assert_eq!(compiler.convert(&root), compiler.convert(&root));
    }
}
