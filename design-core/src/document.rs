//! Design file envelope as returned by the file endpoint.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::{DesignError, DesignNode, DesignResult, NodeType};

/// Published component metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentMeta {
    /// Component key.
    pub key: String,
    /// Component name.
    pub name: String,
    /// Author description.
    #[serde(default)]
    pub description: String,
}

/// Kind of shared style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StyleType {
    /// Fill style.
    Fill,
    /// Text style.
    Text,
    /// Effect style.
    Effect,
    /// Layout grid style.
    Grid,
}

/// Shared style metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleMeta {
    /// Style key.
    pub key: String,
    /// Style name.
    pub name: String,
    /// Author description.
    #[serde(default)]
    pub description: String,
    /// What the style applies to.
    pub style_type: StyleType,
}

/// A complete design file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignFile {
    /// File name.
    pub name: String,
    /// Last modification timestamp (ISO 8601).
    #[serde(default)]
    pub last_modified: String,
    /// Thumbnail URL.
    #[serde(default)]
    pub thumbnail_url: String,
    /// File version.
    #[serde(default)]
    pub version: String,
    /// Document root node.
    pub document: DesignNode,
    /// Published components by node id.
    #[serde(default)]
    pub components: HashMap<String, ComponentMeta>,
    /// Shared styles by style id.
    #[serde(default)]
    pub styles: HashMap<String, StyleMeta>,
}

impl DesignFile {
    /// Parse a file response from JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON does not describe a design file.
    pub fn from_json(json: &str) -> DesignResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// The node to convert: the first top-level frame of the first page.
    ///
    /// # Errors
    ///
    /// Returns [`DesignError::NoContent`] if the document has no page, or the
    /// first page is empty.
    pub fn first_frame(&self) -> DesignResult<&DesignNode> {
        let canvas = self
            .document
            .children
            .iter()
            .find(|c| c.node_type == NodeType::Canvas)
            .ok_or_else(|| DesignError::NoContent(format!("{} has no pages", self.name)))?;

        canvas.children.first().ok_or_else(|| {
            DesignError::NoContent(format!("page {} of {} is empty", canvas.name, self.name))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file_json(pages: &str) -> String {
        format!(
            r#"{{
                "name": "Landing",
                "lastModified": "2024-01-01T00:00:00Z",
                "version": "42",
                "document": {{ "id": "0:0", "name": "Document", "type": "DOCUMENT", "children": {pages} }},
                "components": {{ "1:5": {{ "key": "abc", "name": "Button", "description": "" }} }},
                "styles": {{ "S:1": {{ "key": "k", "name": "Primary", "styleType": "FILL" }} }}
            }}"#
        )
    }

    #[test]
    fn test_first_frame_of_first_page() {
        let json = file_json(
            r#"[{ "id": "0:1", "name": "Page 1", "type": "CANVAS", "children": [
                { "id": "1:1", "name": "Home", "type": "FRAME" },
                { "id": "1:2", "name": "About", "type": "FRAME" }
            ]}]"#,
        );
        let file = DesignFile::from_json(&json).expect("should parse");
        assert_eq!(file.components["1:5"].name, "Button");
        assert_eq!(file.styles["S:1"].style_type, StyleType::Fill);

        let frame = file.first_frame().expect("frame");
        assert_eq!(frame.id, "1:1");
    }

    #[test]
    fn test_no_pages_is_no_content() {
        let file = DesignFile::from_json(&file_json("[]")).expect("should parse");
        assert!(matches!(file.first_frame(), Err(DesignError::NoContent(_))));
    }

    #[test]
    fn test_empty_page_is_no_content() {
        let json = file_json(r#"[{ "id": "0:1", "name": "Page 1", "type": "CANVAS" }]"#);
        let file = DesignFile::from_json(&json).expect("should parse");
        let err = file.first_frame().unwrap_err();
        assert!(err.to_string().contains("Page 1"));
    }
}
