//! Semantic element inference from layer names.
//!
//! Layer names are free text, so this is a best-effort classifier. The rule
//! order is fixed: a name matching several rules resolves to the first one.
//!
//! | Name contains                     | Element                          |
//! |-----------------------------------|----------------------------------|
//! | `button`, `btn`                   | `<button type="button">`         |
//! | `input`, `field`, `textbox`       | `<input>` (password/email/text)  |
//! | (text node)                       | `<span>`                         |
//! | (anything else)                   | `<div>`                          |

use crate::markup::escape_attribute;
use crate::{DesignNode, NodeType};

/// The output element chosen for a node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputElement {
    /// A clickable button.
    Button,
    /// Password input with a fixed placeholder.
    PasswordInput,
    /// Email input with a fixed placeholder.
    EmailInput,
    /// Plain text input.
    TextInput {
        /// Placeholder text (unescaped).
        placeholder: String,
    },
    /// Inline text run.
    Span,
    /// Generic block container.
    Div,
}

impl OutputElement {
    /// Infer the element for a node.
    #[must_use]
    pub fn infer(node: &DesignNode) -> Self {
        let name = node.name.to_lowercase();

        if name.contains("button") || name.contains("btn") {
            return Self::Button;
        }

        if name.contains("input") || name.contains("field") || name.contains("textbox") {
            if name.contains("password") {
                return Self::PasswordInput;
            }
            if name.contains("email") {
                return Self::EmailInput;
            }
            let placeholder = match node.node_type {
                NodeType::Text => node.characters.clone().unwrap_or_default(),
                _ => String::new(),
            };
            return Self::TextInput { placeholder };
        }

        match node.node_type {
            NodeType::Text => Self::Span,
            NodeType::Document
            | NodeType::Canvas
            | NodeType::Frame
            | NodeType::Group
            | NodeType::Vector
            | NodeType::BooleanOperation
            | NodeType::Star
            | NodeType::Line
            | NodeType::Ellipse
            | NodeType::RegularPolygon
            | NodeType::Rectangle
            | NodeType::Slice
            | NodeType::Component
            | NodeType::ComponentSet
            | NodeType::Instance
            | NodeType::Unknown => Self::Div,
        }
    }

    /// Tag name.
    #[must_use]
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Button => "button",
            Self::PasswordInput | Self::EmailInput | Self::TextInput { .. } => "input",
            Self::Span => "span",
            Self::Div => "div",
        }
    }

    /// Extra attributes, already escaped, without a leading space.
    #[must_use]
    pub fn attributes(&self) -> Option<String> {
        match self {
            Self::Button => Some(r#"type="button""#.to_string()),
            Self::PasswordInput => Some(r#"type="password" placeholder="Password""#.to_string()),
            Self::EmailInput => Some(r#"type="email" placeholder="Email""#.to_string()),
            Self::TextInput { placeholder } => Some(format!(
                r#"type="text" placeholder="{}""#,
                escape_attribute(placeholder)
            )),
            Self::Span | Self::Div => None,
        }
    }

    /// Whether the element is self-closing and never receives content.
    #[must_use]
    pub fn is_void(&self) -> bool {
        matches!(
            self,
            Self::PasswordInput | Self::EmailInput | Self::TextInput { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn infer(name: &str, node_type: NodeType) -> OutputElement {
        OutputElement::infer(&DesignNode::new("1", name, node_type))
    }

    #[test]
    fn test_buttons() {
        assert_eq!(infer("Login Button", NodeType::Frame), OutputElement::Button);
        assert_eq!(infer("primary-BTN", NodeType::Instance), OutputElement::Button);
        assert_eq!(
            infer("Login Button", NodeType::Frame).attributes().as_deref(),
            Some(r#"type="button""#)
        );
    }

    #[test]
    fn test_inputs() {
        assert_eq!(infer("Email Field", NodeType::Text), OutputElement::EmailInput);
        assert_eq!(
            infer("Password Input", NodeType::Frame),
            OutputElement::PasswordInput
        );
        assert_eq!(
            infer("Search textbox", NodeType::Frame),
            OutputElement::TextInput {
                placeholder: String::new()
            }
        );
        assert!(infer("Email Field", NodeType::Text).is_void());
        assert_eq!(
            infer("Email Field", NodeType::Text).attributes().as_deref(),
            Some(r#"type="email" placeholder="Email""#)
        );
    }

    #[test]
    fn test_text_input_placeholder_from_own_text() {
        let mut node = DesignNode::new("1", "Name field", NodeType::Text);
        node.characters = Some("Your \"name\"".to_string());
        let element = OutputElement::infer(&node);
        assert_eq!(
            element.attributes().as_deref(),
            Some(r#"type="text" placeholder="Your &quot;name&quot;""#)
        );
    }

    #[test]
    fn test_first_rule_wins() {
        assert_eq!(
            infer("Button Input Field", NodeType::Frame),
            OutputElement::Button
        );
    }

    #[test]
    fn test_fallbacks() {
        assert_eq!(infer("Label", NodeType::Text), OutputElement::Span);
        assert_eq!(infer("Card", NodeType::Frame), OutputElement::Div);
        assert!(!OutputElement::Span.is_void());
        assert_eq!(OutputElement::Div.attributes(), None);
    }
}
