//! Style extraction: one node (plus its parent) to a flat CSS declaration.
//!
//! Declarations are emitted in a fixed order so output is reproducible:
//! layout and positioning, sizing, background, border, shadow, typography,
//! corner radius.

use std::fmt;

use crate::gradient::{linear_gradient, NO_GRADIENT};
use crate::{
    AxisAlign, DesignNode, Diagnostic, EffectKind, LayoutMode, LayoutPositioning, Paint, PaintKind,
};

/// Ordered CSS property/value pairs for one node.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleDeclaration {
    properties: Vec<(String, String)>,
}

impl StyleDeclaration {
    /// Create an empty declaration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a property.
    pub fn push(&mut self, property: &str, value: impl Into<String>) {
        self.properties.push((property.to_string(), value.into()));
    }

    /// Value of the last occurrence of `property`.
    #[must_use]
    pub fn get(&self, property: &str) -> Option<&str> {
        self.properties
            .iter()
            .rev()
            .find(|(p, _)| p == property)
            .map(|(_, v)| v.as_str())
    }

    /// Whether `property` is declared.
    #[must_use]
    pub fn contains(&self, property: &str) -> bool {
        self.get(property).is_some()
    }

}

impl fmt::Display for StyleDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (property, value)) in self.properties.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{property}: {value}")?;
        }
        Ok(())
    }
}

/// Result of extracting one node's style.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExtractedStyle {
    /// The declaration.
    pub declaration: StyleDeclaration,
    /// Font family the document must load, for text nodes.
    pub font_family: Option<String>,
    /// Problems found while extracting.
    pub diagnostics: Vec<Diagnostic>,
}

/// Compute the style of `node`; `parent` is `None` for the conversion root.
#[must_use]
pub fn extract_styles(node: &DesignNode, parent: Option<&DesignNode>) -> ExtractedStyle {
    let mut out = ExtractedStyle::default();

    if node.has_auto_layout() {
        push_flex_container(node, &mut out.declaration);
    }
    push_position(node, parent, &mut out);

    if let Some(bounds) = node.bounds {
        out.declaration.push("width", px(bounds.width));
        out.declaration.push("height", px(bounds.height));
    }

    if !node.is_text() {
        push_background(node, &mut out);
    }
    push_border(node, &mut out.declaration);
    push_shadow(node, &mut out.declaration);

    if node.is_text() {
        push_typography(node, &mut out);
    }

    if let Some(radius) = non_zero(node.corner_radius) {
        out.declaration.push("border-radius", px(radius));
    }

    out
}

fn push_flex_container(node: &DesignNode, decl: &mut StyleDeclaration) {
    decl.push("display", "flex");
    let direction = match node.layout_mode {
        Some(LayoutMode::Horizontal) => "row",
        Some(LayoutMode::Vertical | LayoutMode::None) | None => "column",
    };
    decl.push("flex-direction", direction);

    if let Some(align) = node.primary_axis_align {
        decl.push("justify-content", justify_content(align));
    }
    if let Some(align) = node.counter_axis_align {
        decl.push("align-items", align_items(align));
    }
    if let Some(gap) = non_zero(node.item_spacing) {
        decl.push("gap", px(gap));
    }

    for (property, value) in [
        ("padding-top", node.padding_top),
        ("padding-right", node.padding_right),
        ("padding-bottom", node.padding_bottom),
        ("padding-left", node.padding_left),
    ] {
        if let Some(value) = non_zero(value) {
            decl.push(property, px(value));
        }
    }
}

fn justify_content(align: AxisAlign) -> &'static str {
    match align {
        AxisAlign::Center => "center",
        AxisAlign::Max => "flex-end",
        AxisAlign::SpaceBetween => "space-between",
        AxisAlign::Min | AxisAlign::Baseline | AxisAlign::Other => "flex-start",
    }
}

fn align_items(align: AxisAlign) -> &'static str {
    match align {
        AxisAlign::Center => "center",
        AxisAlign::Max => "flex-end",
        AxisAlign::Baseline => "baseline",
        AxisAlign::Min | AxisAlign::SpaceBetween | AxisAlign::Other => "flex-start",
    }
}

fn push_position(node: &DesignNode, parent: Option<&DesignNode>, out: &mut ExtractedStyle) {
    let Some(parent) = parent else {
        out.declaration.push("position", "relative");
        out.declaration.push("margin", "0 auto");
        return;
    };

    let opts_out = node.layout_positioning == Some(LayoutPositioning::Absolute);
    if parent.has_auto_layout() && !opts_out {
        out.declaration.push("position", "static");
        return;
    }

    out.declaration.push("position", "absolute");
    match (node.bounds, parent.bounds) {
        (Some(own), Some(outer)) => {
            out.declaration.push("left", px(own.x - outer.x));
            out.declaration.push("top", px(own.y - outer.y));
        }
        _ => out.diagnostics.push(Diagnostic::MissingGeometry {
            node_id: node.id.clone(),
            node_name: node.name.clone(),
            parent_name: parent.name.clone(),
        }),
    }
}

fn push_background(node: &DesignNode, out: &mut ExtractedStyle) {
    // Fills are stacked back to front: the last visible one is on top.
    let Some(fill) = node.visible_fills().last() else {
        return;
    };

    if fill.kind == PaintKind::Solid {
        if let Some(color) = fill.color {
            out.declaration.push("background-color", color.to_css());
        }
    } else if fill.kind.is_gradient() {
        let value = if let Some(gradient) = linear_gradient(fill) {
            gradient.to_string()
        } else {
            // Radial, angular and diamond gradients are unsupported, not malformed.
            if fill.kind == PaintKind::GradientLinear {
                out.diagnostics.push(Diagnostic::MalformedGradient {
                    node_id: node.id.clone(),
                    node_name: node.name.clone(),
                });
            }
            NO_GRADIENT.to_string()
        };
        out.declaration.push("background", value);
    }
}

fn push_border(node: &DesignNode, decl: &mut StyleDeclaration) {
    let Some(weight) = non_zero(node.stroke_weight) else {
        return;
    };
    if let Some(color) = node.visible_strokes().next().and_then(solid_color_css) {
        decl.push("border", format!("{} solid {color}", px(weight)));
    }
}

fn push_shadow(node: &DesignNode, decl: &mut StyleDeclaration) {
    let shadows: Vec<String> = node
        .effects
        .iter()
        .filter(|e| e.visible)
        .filter_map(|effect| {
            let inset = match effect.kind {
                EffectKind::DropShadow => "",
                EffectKind::InnerShadow => "inset ",
                EffectKind::LayerBlur | EffectKind::BackgroundBlur | EffectKind::Other => {
                    return None
                }
            };
            let offset = effect.offset.unwrap_or_default();
            let color = effect
                .color
                .map_or_else(|| "rgba(0, 0, 0, 0)".to_string(), |c| c.to_css());
            Some(format!(
                "{inset}{} {} {} {} {color}",
                px(offset.x),
                px(offset.y),
                px(effect.radius),
                px(effect.spread.unwrap_or(0.0)),
            ))
        })
        .collect();

    if !shadows.is_empty() {
        decl.push("box-shadow", shadows.join(", "));
    }
}

fn push_typography(node: &DesignNode, out: &mut ExtractedStyle) {
    let Some(style) = &node.text_style else {
        return;
    };
    let decl = &mut out.declaration;

    out.font_family = Some(style.font_family.clone());
    decl.push("font-family", format!("'{}', sans-serif", style.font_family));
    decl.push("font-weight", number(style.font_weight));
    decl.push("font-size", px(style.font_size));
    decl.push("text-align", style.text_align_horizontal.as_lowercase());
    if let Some(line_height) = non_zero(style.line_height_px) {
        decl.push("line-height", px(line_height));
    }
    if let Some(spacing) = non_zero(style.letter_spacing) {
        decl.push("letter-spacing", px(spacing));
    }

    // Unlike backgrounds, text color comes from the first fill.
    if let Some(color) = node.visible_fills().next().and_then(solid_color_css) {
        decl.push("color", color);
    }
}

fn solid_color_css(paint: &Paint) -> Option<String> {
    match paint.kind {
        PaintKind::Solid => paint.color.map(|c| c.to_css()),
        _ => None,
    }
}

fn non_zero(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.abs() > f64::EPSILON)
}

/// Shortest decimal form, with negative zero printed as `0`.
pub(crate) fn number(value: f64) -> String {
    format!("{}", value + 0.0)
}

pub(crate) fn px(value: f64) -> String {
    format!("{}px", number(value))
}
