//! Markup emitter: walks a design tree and serializes a standalone document.
//!
//! [`MarkupCompiler`] only holds immutable inputs (the image map and
//! [`CompileOptions`]). Every [`MarkupCompiler::convert`] call builds its own
//! run state (style registry, font list, class counter, diagnostics), so one
//! compiler can be shared across threads and repeated runs are
//! byte-identical.

use std::collections::HashMap;
use std::fmt::Write as _;

use tracing::{debug, warn};

use crate::classify::is_image_node;
use crate::markup::{class_name, escape_attribute, escape_text, text_with_breaks};
use crate::style::{extract_styles, StyleDeclaration};
use crate::{DesignNode, Diagnostic, NodeType, OutputElement};

/// Resolved image URLs keyed by node id.
pub type ImageMap = HashMap<String, String>;

/// Default stylesheet endpoint for font links.
pub const DEFAULT_FONT_STYLESHEET_URL: &str = "https://fonts.googleapis.com/css2";

/// Document-level output options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileOptions {
    /// CSS color for the page body.
    pub page_background: String,
    /// Base URL font families are requested from.
    pub font_stylesheet_url: String,
    /// Axis range appended to each family request.
    pub font_axis: String,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            page_background: "black".to_string(),
            font_stylesheet_url: DEFAULT_FONT_STYLESHEET_URL.to_string(),
            font_axis: "wght@100..900".to_string(),
        }
    }
}

/// Output of one conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    /// The complete document.
    pub html: String,
    /// Recoverable problems, in the order they were found.
    pub diagnostics: Vec<Diagnostic>,
}

/// Converts design trees into HTML documents.
#[derive(Debug, Clone, Default)]
pub struct MarkupCompiler {
    images: ImageMap,
    options: CompileOptions,
}

impl MarkupCompiler {
    /// Create a compiler with default options.
    #[must_use]
    pub fn new(images: ImageMap) -> Self {
        Self::with_options(images, CompileOptions::default())
    }

    /// Create a compiler with explicit options.
    #[must_use]
    pub fn with_options(images: ImageMap, options: CompileOptions) -> Self {
        Self { images, options }
    }

    /// Convert `root` and everything visible below it into a document.
    #[must_use]
    pub fn convert(&self, root: &DesignNode) -> Conversion {
        let mut run = RunContext::new(&self.images);
        let body = run.visit(root, None);

        debug!(
            root = %root.name,
            classes = run.styles.len(),
            fonts = run.fonts.len(),
            diagnostics = run.diagnostics.len(),
            "Converted design tree"
        );

        Conversion {
            html: self.document(root, &body, &run),
            diagnostics: run.diagnostics,
        }
    }

    fn document(&self, root: &DesignNode, body: &str, run: &RunContext<'_>) -> String {
        let mut out = String::new();
        out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
        out.push_str("    <meta charset=\"UTF-8\">\n");
        out.push_str(
            "    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
        );
        let _ = writeln!(out, "    <title>{}</title>", escape_text(&root.name));
        for family in &run.fonts {
            let _ = writeln!(out, "    {}", self.font_link(family));
        }
        out.push_str("    <style>\n");
        let _ = writeln!(
            out,
            "        body {{ margin: 0; padding: 0; background-color: {}; }}",
            self.options.page_background
        );
        out.push_str("        * { box-sizing: border-box; }\n");
        for (class, declaration) in &run.styles {
            let _ = writeln!(out, "        .{class} {{ {declaration} }}");
        }
        out.push_str("    </style>\n</head>\n<body>\n");
        let _ = writeln!(out, "    {body}");
        out.push_str("</body>\n</html>\n");
        out
    }

    fn font_link(&self, family: &str) -> String {
        let family: String = family
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("+");
        format!(
            "<link href=\"{}?family={}:{}&display=swap\" rel=\"stylesheet\">",
            self.options.font_stylesheet_url,
            escape_attribute(&family),
            self.options.font_axis
        )
    }
}

/// State for a single conversion run.
struct RunContext<'a> {
    images: &'a ImageMap,
    /// Registered classes in registration order.
    styles: Vec<(String, StyleDeclaration)>,
    /// Distinct font families in first-seen order.
    fonts: Vec<String>,
    counter: usize,
    diagnostics: Vec<Diagnostic>,
}

impl<'a> RunContext<'a> {
    fn new(images: &'a ImageMap) -> Self {
        Self {
            images,
            styles: Vec::new(),
            fonts: Vec::new(),
            counter: 0,
            diagnostics: Vec::new(),
        }
    }

    fn next_class(&mut self, name: &str) -> String {
        let class = class_name(self.counter, name);
        self.counter += 1;
        class
    }

    fn diagnose(&mut self, diagnostic: Diagnostic) {
        warn!("{diagnostic}");
        self.diagnostics.push(diagnostic);
    }

    fn visit(&mut self, node: &DesignNode, parent: Option<&DesignNode>) -> String {
        if !node.visible {
            return String::new();
        }

        let class = self.next_class(&node.name);
        let extracted = extract_styles(node, parent);
        for diagnostic in extracted.diagnostics {
            self.diagnose(diagnostic);
        }

        if let Some(url) = self.images.get(&node.id) {
            self.styles.push((class.clone(), extracted.declaration));
            return format!(
                "<img src=\"{}\" class=\"{class}\" alt=\"{}\" />",
                escape_attribute(url),
                escape_attribute(&node.name)
            );
        }
        if is_image_node(node) {
            self.diagnose(Diagnostic::UnresolvedImageReference {
                node_id: node.id.clone(),
                node_name: node.name.clone(),
            });
        }

        if let Some(family) = extracted.font_family {
            if !self.fonts.contains(&family) {
                self.fonts.push(family);
            }
        }

        let element = OutputElement::infer(node);
        let attributes = element
            .attributes()
            .map(|a| format!(" {a}"))
            .unwrap_or_default();

        // Void elements drop child markup but keep their classes, fonts and rules.
        let mut content: String = node
            .children
            .iter()
            .map(|child| self.visit(child, Some(node)))
            .collect();

        if element.is_void() {
            self.styles.push((class.clone(), extracted.declaration));
            return format!("<{} class=\"{class}\"{attributes} />", element.tag());
        }

        if node.node_type == NodeType::Text {
            if let Some(text) = node.characters.as_deref().filter(|t| !t.is_empty()) {
                content = text_with_breaks(text);
            }
        }

        self.styles.push((class.clone(), extracted.declaration));
        format!(
            "<{tag} class=\"{class}\"{attributes}>{content}</{tag}>",
            tag = element.tag()
        )
    }
}
