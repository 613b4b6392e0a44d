//! Design nodes - the input tree handed to the compiler.
//!
//! These types mirror the design service's JSON wire format closely enough to
//! deserialize a file response directly. Field names are `camelCase` on the
//! wire, enumeration values are upper snake case.

use serde::{Deserialize, Serialize};

use crate::error::DesignResult;

fn default_true() -> bool {
    true
}

/// The shape type of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NodeType {
    /// Document root.
    Document,
    /// A page of the document.
    Canvas,
    /// A frame, possibly with auto-layout.
    Frame,
    /// A plain group of children.
    Group,
    /// Free-form vector path.
    Vector,
    /// Boolean composition of shapes.
    BooleanOperation,
    /// Star shape.
    Star,
    /// Straight line.
    Line,
    /// Ellipse or circle.
    Ellipse,
    /// Regular polygon.
    RegularPolygon,
    /// Rectangle.
    Rectangle,
    /// Text run.
    Text,
    /// Export slice.
    Slice,
    /// Component definition.
    Component,
    /// Set of component variants.
    ComponentSet,
    /// Component instance.
    Instance,
    /// A shape type this crate does not know about; handled as a container.
    #[serde(other)]
    Unknown,
}

impl NodeType {
    /// Whether nodes of this type are drawn as flat vector artwork.
    #[must_use]
    pub fn is_vector_like(self) -> bool {
        match self {
            Self::Vector
            | Self::BooleanOperation
            | Self::Star
            | Self::Line
            | Self::Ellipse
            | Self::RegularPolygon
            | Self::Slice => true,
            Self::Document
            | Self::Canvas
            | Self::Frame
            | Self::Group
            | Self::Rectangle
            | Self::Text
            | Self::Component
            | Self::ComponentSet
            | Self::Instance
            | Self::Unknown => false,
        }
    }
}

/// Axis-aligned rectangle in absolute document coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
}

impl Rect {
    /// Create a new rectangle.
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// A 2D vector (offsets, gradient handles).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector {
    /// X component.
    pub x: f64,
    /// Y component (grows downward).
    pub y: f64,
}

impl Vector {
    /// Create a new vector.
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// RGBA color with channels in `0..=1`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    /// Red channel.
    pub r: f64,
    /// Green channel.
    pub g: f64,
    /// Blue channel.
    pub b: f64,
    /// Alpha channel.
    #[serde(default = "opaque")]
    pub a: f64,
}

fn opaque() -> f64 {
    1.0
}

impl Color {
    /// Create a new color.
    #[must_use]
    pub fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Render as a CSS `rgba()` value.
    #[must_use]
    pub fn to_css(&self) -> String {
        format!(
            "rgba({}, {}, {}, {})",
            channel(self.r),
            channel(self.g),
            channel(self.b),
            (self.a.clamp(0.0, 1.0) * 100.0).round() / 100.0
        )
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn channel(value: f64) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Kind of paint used for a fill or stroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaintKind {
    /// Flat color.
    Solid,
    /// Linear gradient.
    GradientLinear,
    /// Radial gradient.
    GradientRadial,
    /// Angular (conic) gradient.
    GradientAngular,
    /// Diamond gradient.
    GradientDiamond,
    /// Bitmap image.
    Image,
    /// Anything else (video, emoji, ...).
    #[serde(other)]
    Other,
}

impl PaintKind {
    /// Whether this is any of the gradient kinds.
    #[must_use]
    pub fn is_gradient(self) -> bool {
        matches!(
            self,
            Self::GradientLinear
                | Self::GradientRadial
                | Self::GradientAngular
                | Self::GradientDiamond
        )
    }
}

/// A gradient color stop.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorStop {
    /// Position along the gradient, `0..=1`.
    pub position: f64,
    /// Stop color.
    pub color: Color,
}

/// A fill or stroke description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paint {
    /// Paint kind.
    #[serde(rename = "type")]
    pub kind: PaintKind,
    /// Whether the paint is drawn.
    #[serde(default = "default_true")]
    pub visible: bool,
    /// Paint opacity.
    #[serde(default)]
    pub opacity: Option<f64>,
    /// Color for solid paints.
    #[serde(default)]
    pub color: Option<Color>,
    /// Gradient handles in the node's normalized space.
    #[serde(default)]
    pub gradient_handle_positions: Vec<Vector>,
    /// Gradient stops in order.
    #[serde(default)]
    pub gradient_stops: Vec<ColorStop>,
    /// Image scale mode (FILL, FIT, TILE, STRETCH).
    #[serde(default)]
    pub scale_mode: Option<String>,
    /// Image reference for image paints.
    #[serde(default)]
    pub image_ref: Option<String>,
}

impl Paint {
    /// A visible solid paint.
    #[must_use]
    pub fn solid(color: Color) -> Self {
        Self {
            color: Some(color),
            ..Self::of_kind(PaintKind::Solid)
        }
    }

    /// A visible paint of the given kind with no other properties set.
    #[must_use]
    pub fn of_kind(kind: PaintKind) -> Self {
        Self {
            kind,
            visible: true,
            opacity: None,
            color: None,
            gradient_handle_positions: Vec::new(),
            gradient_stops: Vec::new(),
            scale_mode: None,
            image_ref: None,
        }
    }

    /// A visible linear gradient.
    #[must_use]
    pub fn linear_gradient(handles: Vec<Vector>, stops: Vec<ColorStop>) -> Self {
        Self {
            gradient_handle_positions: handles,
            gradient_stops: stops,
            ..Self::of_kind(PaintKind::GradientLinear)
        }
    }

    /// Mark the paint hidden.
    #[must_use]
    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }
}

/// Kind of visual effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EffectKind {
    /// Shadow drawn inside the shape.
    InnerShadow,
    /// Shadow drawn behind the shape.
    DropShadow,
    /// Blur of the layer itself.
    LayerBlur,
    /// Blur of what is behind the layer.
    BackgroundBlur,
    /// Unknown effect kind.
    #[serde(other)]
    Other,
}

/// A shadow or blur.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Effect {
    /// Effect kind.
    #[serde(rename = "type")]
    pub kind: EffectKind,
    /// Whether the effect is drawn.
    #[serde(default = "default_true")]
    pub visible: bool,
    /// Blur radius.
    #[serde(default)]
    pub radius: f64,
    /// Shadow color.
    #[serde(default)]
    pub color: Option<Color>,
    /// Shadow offset.
    #[serde(default)]
    pub offset: Option<Vector>,
    /// Shadow spread.
    #[serde(default)]
    pub spread: Option<f64>,
}

/// Horizontal text alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TextAlign {
    /// Left aligned.
    #[default]
    Left,
    /// Right aligned.
    Right,
    /// Centered.
    Center,
    /// Justified.
    Justified,
}

impl TextAlign {
    /// Lowercased wire name.
    #[must_use]
    pub fn as_lowercase(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Center => "center",
            Self::Justified => "justified",
        }
    }
}

/// Typography of a text node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeStyle {
    /// Font family name.
    pub font_family: String,
    /// PostScript name of the exact face.
    #[serde(default)]
    pub font_post_script_name: Option<String>,
    /// Numeric weight (100-900).
    #[serde(default = "default_weight")]
    pub font_weight: f64,
    /// Font size in pixels.
    pub font_size: f64,
    /// Horizontal alignment.
    #[serde(default)]
    pub text_align_horizontal: TextAlign,
    /// Vertical alignment (TOP, CENTER, BOTTOM).
    #[serde(default)]
    pub text_align_vertical: Option<String>,
    /// Letter spacing in pixels.
    #[serde(default)]
    pub letter_spacing: Option<f64>,
    /// Line height in pixels.
    #[serde(default)]
    pub line_height_px: Option<f64>,
    /// Line height as a percentage of the font's intrinsic line height.
    #[serde(default)]
    pub line_height_percent: Option<f64>,
    /// Unit the line height was authored in.
    #[serde(default)]
    pub line_height_unit: Option<String>,
    /// Italic face.
    #[serde(default)]
    pub italic: Option<bool>,
}

fn default_weight() -> f64 {
    400.0
}

impl TypeStyle {
    /// A style with the given family and size, weight 400, left aligned.
    #[must_use]
    pub fn new(font_family: impl Into<String>, font_size: f64) -> Self {
        Self {
            font_family: font_family.into(),
            font_post_script_name: None,
            font_weight: default_weight(),
            font_size,
            text_align_horizontal: TextAlign::Left,
            text_align_vertical: None,
            letter_spacing: None,
            line_height_px: None,
            line_height_percent: None,
            line_height_unit: None,
            italic: None,
        }
    }
}

/// Auto-layout direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LayoutMode {
    /// No automatic layout.
    #[default]
    None,
    /// Children flow left to right.
    Horizontal,
    /// Children flow top to bottom.
    Vertical,
}

/// Alignment along an auto-layout axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AxisAlign {
    /// Start of the axis.
    Min,
    /// Center of the axis.
    Center,
    /// End of the axis.
    Max,
    /// Distribute with space between.
    SpaceBetween,
    /// Align text baselines.
    Baseline,
    /// Unrecognised value.
    #[serde(other)]
    Other,
}

/// Whether an auto-layout child participates in flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LayoutPositioning {
    /// Laid out by the parent.
    #[default]
    Auto,
    /// Positioned absolutely inside the parent.
    Absolute,
}

/// One node of a design document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignNode {
    /// Stable identifier, unique within the document.
    pub id: String,
    /// Free-text layer name.
    pub name: String,
    /// Shape type.
    #[serde(rename = "type")]
    pub node_type: NodeType,
    /// Children in paint order.
    #[serde(default)]
    pub children: Vec<DesignNode>,
    /// Bounds in absolute document coordinates.
    #[serde(default, rename = "absoluteBoundingBox")]
    pub bounds: Option<Rect>,
    /// Fills, back to front.
    #[serde(default)]
    pub fills: Vec<Paint>,
    /// Strokes.
    #[serde(default)]
    pub strokes: Vec<Paint>,
    /// Border thickness.
    #[serde(default)]
    pub stroke_weight: Option<f64>,
    /// Shadows and blurs.
    #[serde(default)]
    pub effects: Vec<Effect>,
    /// Text content (text nodes only).
    #[serde(default)]
    pub characters: Option<String>,
    /// Typography (text nodes only).
    #[serde(default, rename = "style")]
    pub text_style: Option<TypeStyle>,
    /// Auto-layout direction.
    #[serde(default)]
    pub layout_mode: Option<LayoutMode>,
    /// Distribution along the primary axis.
    #[serde(default, rename = "primaryAxisAlignItems")]
    pub primary_axis_align: Option<AxisAlign>,
    /// Alignment along the counter axis.
    #[serde(default, rename = "counterAxisAlignItems")]
    pub counter_axis_align: Option<AxisAlign>,
    /// Top padding.
    #[serde(default)]
    pub padding_top: Option<f64>,
    /// Right padding.
    #[serde(default)]
    pub padding_right: Option<f64>,
    /// Bottom padding.
    #[serde(default)]
    pub padding_bottom: Option<f64>,
    /// Left padding.
    #[serde(default)]
    pub padding_left: Option<f64>,
    /// Gap between flow children.
    #[serde(default)]
    pub item_spacing: Option<f64>,
    /// Flow participation inside an auto-layout parent.
    #[serde(default)]
    pub layout_positioning: Option<LayoutPositioning>,
    /// Uniform corner radius.
    #[serde(default)]
    pub corner_radius: Option<f64>,
    /// Layer opacity.
    #[serde(default)]
    pub opacity: Option<f64>,
    /// Whether the node is drawn at all.
    #[serde(default = "default_true")]
    pub visible: bool,
}

impl DesignNode {
    /// Create a visible node with no geometry, paints or children.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, node_type: NodeType) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            node_type,
            children: Vec::new(),
            bounds: None,
            fills: Vec::new(),
            strokes: Vec::new(),
            stroke_weight: None,
            effects: Vec::new(),
            characters: None,
            text_style: None,
            layout_mode: None,
            primary_axis_align: None,
            counter_axis_align: None,
            padding_top: None,
            padding_right: None,
            padding_bottom: None,
            padding_left: None,
            item_spacing: None,
            layout_positioning: None,
            corner_radius: None,
            opacity: None,
            visible: true,
        }
    }

    /// Parse a single node (and its subtree) from JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON does not describe a node.
    pub fn from_json(json: &str) -> DesignResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Set the absolute bounds.
    #[must_use]
    pub fn with_bounds(mut self, bounds: Rect) -> Self {
        self.bounds = Some(bounds);
        self
    }

    /// Set the children.
    #[must_use]
    pub fn with_children(mut self, children: Vec<DesignNode>) -> Self {
        self.children = children;
        self
    }

    /// Set the fills.
    #[must_use]
    pub fn with_fills(mut self, fills: Vec<Paint>) -> Self {
        self.fills = fills;
        self
    }

    /// Set the auto-layout direction.
    #[must_use]
    pub fn with_layout(mut self, mode: LayoutMode) -> Self {
        self.layout_mode = Some(mode);
        self
    }

    /// Set text content and typography.
    #[must_use]
    pub fn with_text(mut self, characters: impl Into<String>, style: TypeStyle) -> Self {
        self.characters = Some(characters.into());
        self.text_style = Some(style);
        self
    }

    /// Mark the node hidden.
    #[must_use]
    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    /// Whether the node declares auto-layout.
    #[must_use]
    pub fn has_auto_layout(&self) -> bool {
        matches!(
            self.layout_mode,
            Some(LayoutMode::Horizontal | LayoutMode::Vertical)
        )
    }

    /// Whether this is a text node.
    #[must_use]
    pub fn is_text(&self) -> bool {
        self.node_type == NodeType::Text
    }

    /// Fills that are drawn, in document order.
    pub fn visible_fills(&self) -> impl Iterator<Item = &Paint> {
        self.fills.iter().filter(|p| p.visible)
    }

    /// Strokes that are drawn, in document order.
    pub fn visible_strokes(&self) -> impl Iterator<Item = &Paint> {
        self.strokes.iter().filter(|p| p.visible)
    }
}
