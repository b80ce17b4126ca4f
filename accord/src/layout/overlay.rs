//! Overlay: draws a secondary view on top of a primary one.

use crate::alignment::{Alignment, AlignmentId};
use crate::canvas::{Canvas, with_saved_state};
use crate::error::Result;
use crate::primitives::{Point, ProposedSize, Size};

use super::context::LayoutContext;
use super::placement::alignment_point;
use super::view::View;

/// `content` decides the size; `overlay` is proposed that size and aligned onto it.
pub struct Overlay<V, O> {
    content: V,
    overlay: O,
    alignment: Alignment,
}

impl<V: View, O: View> Overlay<V, O> {
    pub fn new(content: V, overlay: O, alignment: Alignment) -> Self {
        Self { content, overlay, alignment }
    }
}

impl<V: View, O: View> View for Overlay<V, O> {
    fn size(&self, proposed: ProposedSize, cx: &mut LayoutContext<'_>) -> Result<Size> {
        cx.measure("content", 0, &self.content, proposed)
    }

    fn render(&self, cx: &mut LayoutContext<'_>, canvas: &mut dyn Canvas, size: Size) -> Result<()> {
        cx.arrange("content", 0, &self.content, canvas, size)?;

        let overlay_size = cx.measure("overlay", 0, &self.overlay, size.into())?;
        // Either side may carry custom guides.
        let anchor: Point = alignment_point(cx, "content", 0, &self.content, size, self.alignment)?;
        let child = alignment_point(cx, "overlay", 0, &self.overlay, overlay_size, self.alignment)?;
        let t = anchor - child;

        with_saved_state(canvas, |canvas| {
            canvas.translate(t.x, t.y);
            cx.arrange("overlay", 0, &self.overlay, canvas, overlay_size)
        })
    }

    fn custom_alignment(&self, id: AlignmentId, size: Size, cx: &mut LayoutContext<'_>) -> Result<Option<f32>> {
        cx.alignment_of("content", 0, &self.content, id, size)
    }
}
