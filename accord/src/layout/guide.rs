//! Custom alignment guides.

use crate::alignment::AlignmentId;
use crate::canvas::Canvas;
use crate::error::Result;
use crate::primitives::{ProposedSize, Size};

use super::context::LayoutContext;
use super::view::View;

/// Answers queries for one alignment id with `compute(size)`; every other query
/// falls through to the child.
pub struct AlignmentGuide<V, F> {
    content: V,
    id: AlignmentId,
    compute: F,
}

impl<V, F> AlignmentGuide<V, F>
where
    V: View,
    F: Fn(Size) -> f32,
{
    pub fn new(content: V, id: AlignmentId, compute: F) -> Self {
        Self { content, id, compute }
    }
}

impl<V, F> View for AlignmentGuide<V, F>
where
    V: View,
    F: Fn(Size) -> f32,
{
    fn size(&self, proposed: ProposedSize, cx: &mut LayoutContext<'_>) -> Result<Size> {
        cx.measure("content", 0, &self.content, proposed)
    }

    fn render(&self, cx: &mut LayoutContext<'_>, canvas: &mut dyn Canvas, size: Size) -> Result<()> {
        cx.arrange("content", 0, &self.content, canvas, size)
    }

    fn custom_alignment(&self, id: AlignmentId, size: Size, cx: &mut LayoutContext<'_>) -> Result<Option<f32>> {
        if id == self.id {
            return Ok(Some((self.compute)(size)));
        }
        cx.alignment_of("content", 0, &self.content, id, size)
    }
}
