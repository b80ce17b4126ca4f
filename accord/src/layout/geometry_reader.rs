//! GeometryReader: builds its content from the size it was given.

use crate::alignment::Alignment;
use crate::canvas::{Canvas, with_saved_state};
use crate::error::Result;
use crate::primitives::{ProposedSize, Size};

use super::context::LayoutContext;
use super::placement::child_translation;
use super::view::View;

/// Takes the proposal (unset axes fall back to the default) and, at render time,
/// hands the resolved size to `content` to build the view it draws, centered.
pub struct GeometryReader<F> {
    content: F,
}

impl<F, V> GeometryReader<F>
where
    F: Fn(Size) -> V,
    V: View,
{
    pub fn new(content: F) -> Self {
        Self { content }
    }
}

impl<F, V> View for GeometryReader<F>
where
    F: Fn(Size) -> V,
    V: View,
{
    fn size(&self, proposed: ProposedSize, _cx: &mut LayoutContext<'_>) -> Result<Size> {
        Ok(proposed.or_default())
    }

    fn render(&self, cx: &mut LayoutContext<'_>, canvas: &mut dyn Canvas, size: Size) -> Result<()> {
        let child = (self.content)(size);
        let child_size = cx.measure("content", 0, &child, size.into())?;
        let t = child_translation(cx, "content", 0, &child, size, child_size, Alignment::CENTER)?;
        with_saved_state(canvas, |canvas| {
            canvas.translate(t.x, t.y);
            cx.arrange("content", 0, &child, canvas, child_size)
        })
    }
}
