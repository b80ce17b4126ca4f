//! Drawing decorators: Border, ForegroundColor.
//!
//! Both are size-transparent. They only touch the canvas state, always inside a
//! saved state.

use crate::alignment::AlignmentId;
use crate::canvas::{Canvas, Path, with_saved_state};
use crate::error::Result;
use crate::primitives::{Color, ProposedSize, Rect, Size};

use super::context::LayoutContext;
use super::view::View;

/// Strokes a rectangle of `width` just inside the child's bounds, after the child.
pub struct Border<V> {
    content: V,
    color: Color,
    width: f32,
}

impl<V: View> Border<V> {
    pub fn new(content: V, color: Color, width: f32) -> Self {
        Self { content, color, width }
    }
}

impl<V: View> View for Border<V> {
    fn size(&self, proposed: ProposedSize, cx: &mut LayoutContext<'_>) -> Result<Size> {
        cx.measure("content", 0, &self.content, proposed)
    }

    fn render(&self, cx: &mut LayoutContext<'_>, canvas: &mut dyn Canvas, size: Size) -> Result<()> {
        cx.arrange("content", 0, &self.content, canvas, size)?;

        // Centered on the edge inset, so the whole stroke stays inside the box.
        let half = self.width / 2.0;
        let outline = Path::rect(Rect::from_size(size).inset(half, half));
        with_saved_state(canvas, |canvas| {
            canvas.set_stroke_color(self.color);
            canvas.stroke_path(&outline, self.width);
        });
        Ok(())
    }

    fn custom_alignment(&self, id: AlignmentId, size: Size, cx: &mut LayoutContext<'_>) -> Result<Option<f32>> {
        cx.alignment_of("content", 0, &self.content, id, size)
    }
}

/// Sets the ambient fill and stroke color for its subtree.
pub struct ForegroundColor<V> {
    content: V,
    color: Color,
}

impl<V: View> ForegroundColor<V> {
    pub fn new(content: V, color: Color) -> Self {
        Self { content, color }
    }
}

impl<V: View> View for ForegroundColor<V> {
    fn size(&self, proposed: ProposedSize, cx: &mut LayoutContext<'_>) -> Result<Size> {
        cx.measure("content", 0, &self.content, proposed)
    }

    fn render(&self, cx: &mut LayoutContext<'_>, canvas: &mut dyn Canvas, size: Size) -> Result<()> {
        with_saved_state(canvas, |canvas| {
            canvas.set_fill_color(self.color);
            canvas.set_stroke_color(self.color);
            cx.arrange("content", 0, &self.content, canvas, size)
        })
    }

    fn custom_alignment(&self, id: AlignmentId, size: Size, cx: &mut LayoutContext<'_>) -> Result<Option<f32>> {
        cx.alignment_of("content", 0, &self.content, id, size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{DisplayList, DrawCommand};
    use crate::config::LayoutConfig;
    use crate::layout::shape::{Ellipse, Rectangle};
    use crate::layout::text::MonospaceMeasurer;
    use crate::layout::view::ViewExt;

    fn record<V: View>(view: &V, size: Size) -> DisplayList {
        let config = LayoutConfig::default();
        let mut cx = LayoutContext::new(&config, &MonospaceMeasurer);
        let mut list = DisplayList::new(config.foreground, config.stroke);
        let size = view.size(size.into(), &mut cx).unwrap();
        view.render(&mut cx, &mut list, size).unwrap();
        list
    }

    #[test]
    fn test_border_is_size_transparent() {
        let config = LayoutConfig::default();
        let mut cx = LayoutContext::new(&config, &MonospaceMeasurer);
        let view = Rectangle.frame(40.0, 30.0).border(Color::BLUE, 4.0);
        let size = view.size(ProposedSize::new(Some(100.0), Some(100.0)), &mut cx).unwrap();
        assert_eq!(size, Size::new(40.0, 30.0));
    }

    #[test]
    fn test_border_strokes_inset_after_content() {
        let list = record(&Rectangle.frame(40.0, 30.0).border(Color::BLUE, 4.0), Size::new(40.0, 30.0));
        assert_eq!(list.len(), 2);
        assert!(matches!(list.commands()[0], DrawCommand::Fill { .. }));
        match &list.commands()[1] {
            DrawCommand::Stroke { path, width, color } => {
                assert_eq!(*width, 4.0);
                assert_eq!(*color, Color::BLUE);
                assert_eq!(path.bounds(), Some(Rect::new(2.0, 2.0, 36.0, 26.0)));
            }
            other => panic!("expected stroke, got {other:?}"),
        }
        assert_eq!(list.saved_depth(), 0);
    }

    #[test]
    fn test_foreground_color_is_inherited_and_scoped() {
        let view = Ellipse.frame(10.0, 10.0).foreground_color(Color::GREEN);
        let list = record(&view, Size::new(10.0, 10.0));
        match &list.commands()[0] {
            DrawCommand::Fill { color, .. } => assert_eq!(*color, Color::GREEN),
            other => panic!("expected fill, got {other:?}"),
        }
        assert_eq!(list.saved_depth(), 0);
    }

    #[test]
    fn test_explicit_shape_color_beats_foreground() {
        let view = Color::YELLOW.frame(10.0, 10.0).foreground_color(Color::GREEN);
        let list = record(&view, Size::new(10.0, 10.0));
        match &list.commands()[0] {
            DrawCommand::Fill { color, .. } => assert_eq!(*color, Color::YELLOW),
            other => panic!("expected fill, got {other:?}"),
        }
    }
}
