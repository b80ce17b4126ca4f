//! Accord: declarative layout negotiation.
//!
//! A tree of small, composable nodes decides where everything goes and how large
//! it is through a two-pass protocol:
//! - A parent proposes a size; each axis may be left unset
//! - The child answers with the size it wants
//! - The parent places the child by alignment and renders it at that size
//!
//! No node needs global knowledge of its siblings or ancestors.
//!
//! # Usage
//!
//! ```
//! use accord::{Alignment, Color, Ellipse, LayoutConfig, Size, ViewExt, layout};
//!
//! let root = Ellipse
//!     .frame_width(150.0)
//!     .flexible_frame()
//!     .min_width(100.0)
//!     .max_width(400.0)
//!     .border(Color::BLUE, 2.0)
//!     .frame_height(300.0)
//!     .alignment(Alignment::TOP);
//!
//! let drawing = layout(&root, Size::new(800.0, 400.0), &LayoutConfig::default()).unwrap();
//! assert_eq!(drawing.len(), 2);
//! ```

// Core primitives
pub mod primitives;
pub mod alignment;
pub mod error;
pub mod config;

// Rendering backend boundary
pub mod canvas;

// Layout nodes and protocol
pub mod layout;

// Text engine (cosmic-text integration)
pub mod text_engine;

// Entry points
pub mod engine;

// Re-export core types
pub use primitives::{Axis, Color, DEFAULT_PROPOSAL, Point, ProposedSize, Rect, Size};
pub use alignment::{Alignment, AlignmentId, AlignmentKey, HorizontalAlignment, VerticalAlignment};
pub use error::{LayoutError, Result};
pub use config::{LayoutConfig, UnboundedStackPolicy};
pub use canvas::{Canvas, DisplayList, DrawCommand, Path, PathElement, with_saved_state};

// Re-export layout
pub use layout::{
    AlignmentGuide, AnyView, Border, Compose, Ellipse, FixedFrame, FixedSize, FlexibleFrame, ForegroundColor,
    GeometryReader, LayoutContext, MonospaceMeasurer, Overlay, Rectangle, Shape, ShapeView, Stack, Text,
    TextMeasurer, View, ViewExt, hstack, vstack,
};
pub use text_engine::{CosmicTextMeasurer, FontFamily};
pub use engine::{LayoutEngine, layout, layout_into};
