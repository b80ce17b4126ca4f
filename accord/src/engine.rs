//! Top-level layout entry points.
//!
//! The root is proposed the full target size and then forced to fill it: whatever
//! size it reports, it is centered in the target like the content of a fixed frame.

use crate::alignment::Alignment;
use crate::canvas::{Canvas, DisplayList, Path, with_saved_state};
use crate::config::LayoutConfig;
use crate::error::{LayoutError, Result};
use crate::layout::placement::child_translation;
use crate::layout::text::{MonospaceMeasurer, TextMeasurer};
use crate::layout::{LayoutContext, View};
use crate::primitives::{Rect, Size};

/// Configuration plus text measurement for a series of layout calls.
///
/// Each call gets a fresh [`LayoutContext`]; nothing carries over between calls.
pub struct LayoutEngine<'a> {
    config: &'a LayoutConfig,
    measurer: &'a dyn TextMeasurer,
}

impl<'a> LayoutEngine<'a> {
    pub fn new(config: &'a LayoutConfig) -> Self {
        Self { config, measurer: &MonospaceMeasurer }
    }

    /// Measure text with `measurer` instead of the monospace estimate.
    pub fn measurer(mut self, measurer: &'a dyn TextMeasurer) -> Self {
        self.measurer = measurer;
        self
    }

    /// Lay out `root` in `target` and record the drawing.
    pub fn layout<V: View + ?Sized>(&self, root: &V, target: Size) -> Result<DisplayList> {
        let mut list = DisplayList::new(self.config.foreground, self.config.stroke);
        self.layout_into(root, target, &mut list)?;
        Ok(list)
    }

    /// Lay out `root` in `target`, drawing into `canvas`.
    pub fn layout_into<V: View + ?Sized>(&self, root: &V, target: Size, canvas: &mut dyn Canvas) -> Result<()> {
        if !target.is_valid() {
            return Err(LayoutError::unsupported(
                "layout",
                format!("target {target:?} must be finite and non-negative"),
            ));
        }

        let mut cx = LayoutContext::new(self.config, self.measurer);
        let size = cx.measure("root", 0, root, target.into())?;
        let t = child_translation(&mut cx, "root", 0, root, target, size, Alignment::CENTER)?;
        tracing::debug!(?target, ?size, offset = ?t, "root measured");

        with_saved_state(canvas, |canvas| {
            canvas.translate(t.x, t.y);
            cx.arrange("root", 0, root, canvas, size)
        })?;

        if let Some((color, width)) = self.config.debug_outline {
            let half = width / 2.0;
            let outline = Path::rect(Rect::from_size(target).inset(half, half));
            with_saved_state(canvas, |canvas| {
                canvas.set_stroke_color(color);
                canvas.stroke_path(&outline, width);
            });
        }

        let (hits, misses) = cx.memo().stats();
        tracing::debug!(memo_entries = cx.memo().len(), hits, misses, "layout complete");
        Ok(())
    }
}

/// Lay out `root` in `target` with the monospace text estimate.
pub fn layout<V: View + ?Sized>(root: &V, target: Size, config: &LayoutConfig) -> Result<DisplayList> {
    LayoutEngine::new(config).layout(root, target)
}

/// Like [`layout`], drawing into a caller-provided canvas.
pub fn layout_into<V: View + ?Sized>(
    root: &V,
    target: Size,
    config: &LayoutConfig,
    canvas: &mut dyn Canvas,
) -> Result<()> {
    LayoutEngine::new(config).layout_into(root, target, canvas)
}
