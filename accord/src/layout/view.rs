//! The node contract.
//!
//! Every layout participant is a [`View`]. Primitive nodes (frames, stacks,
//! shapes, text, ...) implement it directly. Composite nodes implement
//! [`Compose`] instead and get `View` for free: all three operations delegate to
//! their `body`, with no behavior of their own.

use crate::alignment::{Alignment, AlignmentId};
use crate::canvas::Canvas;
use crate::error::Result;
use crate::primitives::{Color, ProposedSize, Size};

use super::context::LayoutContext;
use super::decorators::{Border, ForegroundColor};
use super::frame::{FixedFrame, FixedSize, FlexibleFrame};
use super::guide::AlignmentGuide;
use super::overlay::Overlay;

/// A node in a layout tree.
pub trait View {
    /// How large this node will be if offered `proposed`.
    ///
    /// Must be a pure function of the proposal (and of children's answers).
    fn size(&self, proposed: ProposedSize, cx: &mut LayoutContext<'_>) -> Result<Size>;

    /// Draw this node at exactly `size`, a value previously returned by `size`.
    fn render(&self, cx: &mut LayoutContext<'_>, canvas: &mut dyn Canvas, size: Size) -> Result<()>;

    /// Custom value for the alignment `id` in a box of `size`, if this node or one
    /// of its descendants overrides it.
    fn custom_alignment(&self, _id: AlignmentId, _size: Size, _cx: &mut LayoutContext<'_>) -> Result<Option<f32>> {
        Ok(None)
    }
}

/// A composite node: entirely described by another node.
///
/// ```
/// use accord::{Compose, Ellipse, FixedFrame, ViewExt};
///
/// struct Badge;
///
/// impl Compose for Badge {
///     type Body = FixedFrame<Ellipse>;
///
///     fn body(&self) -> Self::Body {
///         Ellipse.frame(40.0, 40.0)
///     }
/// }
/// ```
pub trait Compose {
    type Body: View;

    fn body(&self) -> Self::Body;
}

impl<C: Compose> View for C {
    fn size(&self, proposed: ProposedSize, cx: &mut LayoutContext<'_>) -> Result<Size> {
        cx.measure("body", 0, &self.body(), proposed)
    }

    fn render(&self, cx: &mut LayoutContext<'_>, canvas: &mut dyn Canvas, size: Size) -> Result<()> {
        cx.arrange("body", 0, &self.body(), canvas, size)
    }

    fn custom_alignment(&self, id: AlignmentId, size: Size, cx: &mut LayoutContext<'_>) -> Result<Option<f32>> {
        cx.alignment_of("body", 0, &self.body(), id, size)
    }
}

/// A type-erased node, for heterogeneous child lists.
pub struct AnyView(Box<dyn View>);

impl AnyView {
    pub fn new(view: impl View + 'static) -> Self {
        Self(Box::new(view))
    }
}

impl View for AnyView {
    fn size(&self, proposed: ProposedSize, cx: &mut LayoutContext<'_>) -> Result<Size> {
        self.0.size(proposed, cx)
    }

    fn render(&self, cx: &mut LayoutContext<'_>, canvas: &mut dyn Canvas, size: Size) -> Result<()> {
        self.0.render(cx, canvas, size)
    }

    fn custom_alignment(&self, id: AlignmentId, size: Size, cx: &mut LayoutContext<'_>) -> Result<Option<f32>> {
        self.0.custom_alignment(id, size, cx)
    }
}

/// Fluent modifiers available on every view.
pub trait ViewExt: View + Sized {
    /// Pin both width and height.
    fn frame(self, width: f32, height: f32) -> FixedFrame<Self> {
        FixedFrame::new(self, Some(width), Some(height))
    }

    /// Pin only the width.
    fn frame_width(self, width: f32) -> FixedFrame<Self> {
        FixedFrame::new(self, Some(width), None)
    }

    /// Pin only the height.
    fn frame_height(self, height: f32) -> FixedFrame<Self> {
        FixedFrame::new(self, None, Some(height))
    }

    /// Start a min/ideal/max frame; configure it with the builder methods.
    fn flexible_frame(self) -> FlexibleFrame<Self> {
        FlexibleFrame::new(self)
    }

    /// Offer the child an unconstrained proposal on the chosen axes.
    fn fixed_size(self, horizontal: bool, vertical: bool) -> FixedSize<Self> {
        FixedSize::new(self, horizontal, vertical)
    }

    fn border(self, color: Color, width: f32) -> Border<Self> {
        Border::new(self, color, width)
    }

    fn foreground_color(self, color: Color) -> ForegroundColor<Self> {
        ForegroundColor::new(self, color)
    }

    /// Draw `overlay` on top, sized against this view's size.
    fn overlay<O: View>(self, overlay: O, alignment: Alignment) -> Overlay<Self, O> {
        Overlay::new(self, overlay, alignment)
    }

    /// Answer queries for `id` with `compute(size)`.
    fn alignment_guide<F>(self, id: AlignmentId, compute: F) -> AlignmentGuide<Self, F>
    where
        F: Fn(Size) -> f32,
    {
        AlignmentGuide::new(self, id, compute)
    }

    fn erased(self) -> AnyView
    where
        Self: 'static,
    {
        AnyView::new(self)
    }
}

impl<V: View> ViewExt for V {}
