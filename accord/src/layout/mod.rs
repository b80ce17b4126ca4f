//! Layout nodes and the negotiation protocol.
//!
//! Layout runs in two passes over an immutable tree:
//!
//! ```text
//! size(proposal) resolves recursively -> render(size) places and draws recursively
//! ```
//!
//! A parent proposes, the child answers with the size it wants, and the parent
//! decides where the child goes. No node sees its siblings or ancestors.

pub mod cache;
pub mod context;
pub mod view;

pub mod decorators;
pub mod frame;
pub mod geometry_reader;
pub mod guide;
pub mod overlay;
pub mod shape;
pub mod stack;
pub mod text;

pub(crate) mod placement;

// Re-export core types
pub use cache::{MeasureMemo, MemoKey, StackLayout};
pub use context::LayoutContext;
pub use view::{AnyView, Compose, View, ViewExt};

// Re-export nodes
pub use decorators::{Border, ForegroundColor};
pub use frame::{FixedFrame, FixedSize, FlexibleFrame};
pub use geometry_reader::GeometryReader;
pub use guide::AlignmentGuide;
pub use overlay::Overlay;
pub use shape::{Ellipse, Rectangle, Shape, ShapeView};
pub use stack::{Stack, hstack, vstack};
pub use text::{MonospaceMeasurer, Text, TextMeasurer};
