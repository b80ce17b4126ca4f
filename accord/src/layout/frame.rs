//! Frame modifiers: FixedFrame, FlexibleFrame, FixedSize.
//!
//! Frames decide the size they report from their own configuration and the
//! child's answer, then place the child inside that size by alignment. They never
//! draw; they only translate.

use crate::alignment::{Alignment, AlignmentId};
use crate::canvas::{Canvas, with_saved_state};
use crate::error::Result;
use crate::primitives::{DEFAULT_PROPOSAL, ProposedSize, Size};

use super::context::LayoutContext;
use super::placement::child_translation;
use super::view::View;

// =========================================================================
// Shared frame placement
// =========================================================================

/// Re-measure `content` against the arrangement size and render it aligned.
fn render_aligned<V: View>(
    cx: &mut LayoutContext<'_>,
    canvas: &mut dyn Canvas,
    content: &V,
    size: Size,
    alignment: Alignment,
) -> Result<()> {
    let child_size = cx.measure("child", 0, content, size.into())?;
    let t = child_translation(cx, "child", 0, content, size, child_size, alignment)?;
    with_saved_state(canvas, |canvas| {
        canvas.translate(t.x, t.y);
        cx.arrange("child", 0, content, canvas, child_size)
    })
}

/// Child's guide value for `id`, expressed in the frame's coordinate space.
fn aligned_guide<V: View>(
    cx: &mut LayoutContext<'_>,
    content: &V,
    id: AlignmentId,
    size: Size,
    alignment: Alignment,
) -> Result<Option<f32>> {
    let child_size = cx.measure("child", 0, content, size.into())?;
    let Some(value) = cx.alignment_of("child", 0, content, id, child_size)? else {
        return Ok(None);
    };
    let t = child_translation(cx, "child", 0, content, size, child_size, alignment)?;
    Ok(Some(value + t.along(id.axis())))
}

// =========================================================================
// FixedFrame
// =========================================================================

/// Pins width and/or height; unset axes pass through.
pub struct FixedFrame<V> {
    content: V,
    width: Option<f32>,
    height: Option<f32>,
    alignment: Alignment,
}

impl<V: View> FixedFrame<V> {
    pub fn new(content: V, width: Option<f32>, height: Option<f32>) -> Self {
        Self {
            content,
            width,
            height,
            alignment: Alignment::CENTER,
        }
    }

    /// Set how the child is placed inside the frame (default: center).
    pub fn alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }
}

impl<V: View> View for FixedFrame<V> {
    fn size(&self, proposed: ProposedSize, cx: &mut LayoutContext<'_>) -> Result<Size> {
        let child_proposal = ProposedSize::new(
            self.width.or(proposed.width),
            self.height.or(proposed.height),
        );
        let child = cx.measure("child", 0, &self.content, child_proposal)?;
        Ok(Size::new(
            self.width.unwrap_or(child.width),
            self.height.unwrap_or(child.height),
        ))
    }

    fn render(&self, cx: &mut LayoutContext<'_>, canvas: &mut dyn Canvas, size: Size) -> Result<()> {
        render_aligned(cx, canvas, &self.content, size, self.alignment)
    }

    fn custom_alignment(&self, id: AlignmentId, size: Size, cx: &mut LayoutContext<'_>) -> Result<Option<f32>> {
        aligned_guide(cx, &self.content, id, size, self.alignment)
    }
}

// =========================================================================
// FlexibleFrame
// =========================================================================

/// min/ideal/max bounds for one axis.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct AxisBounds {
    min: Option<f32>,
    ideal: Option<f32>,
    max: Option<f32>,
}

impl AxisBounds {
    fn is_unbounded(&self) -> bool {
        self.min.is_none() && self.ideal.is_none() && self.max.is_none()
    }

    /// Clamp into `[min, max]`. Min is applied last, so it wins when `min > max`.
    fn clamp(&self, value: f32) -> f32 {
        let mut value = value;
        if let Some(max) = self.max {
            if value > max {
                value = max;
            }
        }
        if let Some(min) = self.min {
            if value < min {
                value = min;
            }
        }
        value
    }

    /// Proposal offered to the child on this axis.
    ///
    /// An unset proposal takes the ideal; with no ideal either, the child is asked
    /// for its natural extent.
    fn propose(&self, proposed: Option<f32>) -> Option<f32> {
        if self.is_unbounded() {
            return proposed;
        }
        proposed.or(self.ideal).map(|v| self.clamp(v))
    }

    /// Proposal to retry with when an unconstrained child claimed unlimited room.
    fn fallback(&self, offered: Option<f32>, child: f32) -> Option<f32> {
        match offered {
            None if !self.is_unbounded() && child >= f32::MAX => Some(self.clamp(DEFAULT_PROPOSAL)),
            _ => offered,
        }
    }

    /// Reported extent: prefer the proposal, never leave `[min, max]`, never drop
    /// below the child's need when it exceeds the proposal.
    fn reconcile(&self, child: f32, offered: Option<f32>) -> f32 {
        let proposed = offered.unwrap_or(child);
        let mut result = child;
        if let Some(min) = self.min {
            result = min.max(result.min(proposed));
        }
        if let Some(max) = self.max {
            result = max.min(result.max(proposed));
        }
        result
    }
}

/// Clamps the proposal into per-axis bounds before asking the child, then
/// reconciles the child's answer back into those bounds.
pub struct FlexibleFrame<V> {
    content: V,
    width: AxisBounds,
    height: AxisBounds,
    alignment: Alignment,
}

impl<V: View> FlexibleFrame<V> {
    pub fn new(content: V) -> Self {
        Self {
            content,
            width: AxisBounds::default(),
            height: AxisBounds::default(),
            alignment: Alignment::CENTER,
        }
    }

    pub fn min_width(mut self, value: f32) -> Self {
        self.width.min = Some(value);
        self
    }

    pub fn ideal_width(mut self, value: f32) -> Self {
        self.width.ideal = Some(value);
        self
    }

    pub fn max_width(mut self, value: f32) -> Self {
        self.width.max = Some(value);
        self
    }

    pub fn min_height(mut self, value: f32) -> Self {
        self.height.min = Some(value);
        self
    }

    pub fn ideal_height(mut self, value: f32) -> Self {
        self.height.ideal = Some(value);
        self
    }

    pub fn max_height(mut self, value: f32) -> Self {
        self.height.max = Some(value);
        self
    }

    pub fn alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }
}

impl<V: View> View for FlexibleFrame<V> {
    fn size(&self, proposed: ProposedSize, cx: &mut LayoutContext<'_>) -> Result<Size> {
        let mut offered = ProposedSize::new(
            self.width.propose(proposed.width),
            self.height.propose(proposed.height),
        );
        let mut child = cx.measure("child", 0, &self.content, offered)?;

        let retry = ProposedSize::new(
            self.width.fallback(offered.width, child.width),
            self.height.fallback(offered.height, child.height),
        );
        if retry != offered {
            offered = retry;
            child = cx.measure("child", 0, &self.content, offered)?;
        }

        let size = Size::new(
            self.width.reconcile(child.width, offered.width),
            self.height.reconcile(child.height, offered.height),
        );
        tracing::trace!(?proposed, ?offered, ?child, ?size, "flexible frame");
        Ok(size)
    }

    fn render(&self, cx: &mut LayoutContext<'_>, canvas: &mut dyn Canvas, size: Size) -> Result<()> {
        render_aligned(cx, canvas, &self.content, size, self.alignment)
    }

    fn custom_alignment(&self, id: AlignmentId, size: Size, cx: &mut LayoutContext<'_>) -> Result<Option<f32>> {
        aligned_guide(cx, &self.content, id, size, self.alignment)
    }
}

// =========================================================================
// FixedSize
// =========================================================================

/// Offers the child an unconstrained proposal on the chosen axes, so it reports
/// its natural size there.
pub struct FixedSize<V> {
    content: V,
    horizontal: bool,
    vertical: bool,
}

impl<V: View> FixedSize<V> {
    pub fn new(content: V, horizontal: bool, vertical: bool) -> Self {
        Self { content, horizontal, vertical }
    }
}

impl<V: View> View for FixedSize<V> {
    fn size(&self, proposed: ProposedSize, cx: &mut LayoutContext<'_>) -> Result<Size> {
        let mut proposed = proposed;
        if self.horizontal {
            proposed.width = None;
        }
        if self.vertical {
            proposed.height = None;
        }
        cx.measure("child", 0, &self.content, proposed)
    }

    fn render(&self, cx: &mut LayoutContext<'_>, canvas: &mut dyn Canvas, size: Size) -> Result<()> {
        cx.arrange("child", 0, &self.content, canvas, size)
    }

    fn custom_alignment(&self, id: AlignmentId, size: Size, cx: &mut LayoutContext<'_>) -> Result<Option<f32>> {
        cx.alignment_of("child", 0, &self.content, id, size)
    }
}
