//! # Design Core
//!
//! Compiles a design-tool node tree into a standalone HTML document with an
//! embedded stylesheet.
//!
//! ## Pipeline
//!
//! ```text
//! ┌───────────────┐   collect_image_node_ids   ┌──────────────────┐
//! │  DesignNode   │ ─────────────────────────▶ │  image renderer  │
//! │     tree      │                            │  (design-fetch)  │
//! └───────┬───────┘ ◀───────── ImageMap ────── └──────────────────┘
//!         │
//!         ▼
//! ┌─────────────────────────────────────────────┐
//! │               MarkupCompiler                │
//! │  classify → style → element → emit          │
//! └───────────────────────┬─────────────────────┘
//!                         ▼
//!              Conversion { html, diagnostics }
//! ```
//!
//! The core is synchronous and performs no I/O. Malformed nodes never abort a
//! conversion; they produce [`Diagnostic`] values and a safe fallback.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod classify;
pub mod collect;
pub mod diagnostic;
pub mod document;
pub mod element;
pub mod emit;
pub mod error;
pub mod gradient;
pub mod markup;
pub mod node;
pub mod style;

pub use classify::is_image_node;
pub use collect::collect_image_node_ids;
pub use diagnostic::Diagnostic;
pub use document::{ComponentMeta, DesignFile, StyleMeta, StyleType};
pub use element::OutputElement;
pub use emit::{CompileOptions, Conversion, ImageMap, MarkupCompiler};
pub use error::{DesignError, DesignResult};
pub use gradient::{linear_gradient, LinearGradient};
pub use node::{
    AxisAlign, Color, ColorStop, DesignNode, Effect, EffectKind, LayoutMode, LayoutPositioning,
    NodeType, Paint, PaintKind, Rect, TextAlign, TypeStyle, Vector,
};
pub use style::{extract_styles, ExtractedStyle, StyleDeclaration};

/// Design core version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
