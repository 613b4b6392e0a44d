//! Recoverable problems found while converting a tree.

use std::fmt;

/// A non-fatal conversion problem.
///
/// Each one is logged when raised and the affected node is converted with a
/// safe fallback; conversion of the rest of the tree continues.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A node that needs relative offsets lacks absolute bounds, or its parent
    /// does. The offsets are omitted.
    MissingGeometry {
        /// Node id.
        node_id: String,
        /// Node name.
        node_name: String,
        /// Parent name.
        parent_name: String,
    },
    /// An image-like node has no resolved URL and is expanded as markup.
    UnresolvedImageReference {
        /// Node id.
        node_id: String,
        /// Node name.
        node_name: String,
    },
    /// A linear gradient fill has fewer than two handles or no stops. Its
    /// background is `none`.
    MalformedGradient {
        /// Node id.
        node_id: String,
        /// Node name.
        node_name: String,
    },
}

impl Diagnostic {
    /// Id of the node the diagnostic is about.
    #[must_use]
    pub fn node_id(&self) -> &str {
        match self {
            Self::MissingGeometry { node_id, .. }
            | Self::UnresolvedImageReference { node_id, .. }
            | Self::MalformedGradient { node_id, .. } => node_id,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingGeometry {
                node_id,
                node_name,
                parent_name,
            } => write!(
                f,
                "Missing absoluteBoundingBox for node {node_name} ({node_id}) or parent {parent_name}"
            ),
            Self::UnresolvedImageReference { node_id, node_name } => write!(
                f,
                "No image URL for image node {node_name} ({node_id}); expanding as markup"
            ),
            Self::MalformedGradient { node_id, node_name } => write!(
                f,
                "Malformed linear gradient on node {node_name} ({node_id})"
            ),
        }
    }
}
