//! Stack distribution for horizontal and vertical stacks.
//!
//! One axis-agnostic implementation serves both directions. Space on the main axis
//! is handed out least-flexible child first, so children that cannot use extra
//! room give it back to the ones that can:
//!
//! 1. Reserve `spacing * (n - 1)`.
//! 2. Probe every child at 0 and at `f32::MAX` on the main axis; the difference is
//!    its flexibility.
//! 3. Walk the children in ascending flexibility (stable), offering each an even
//!    share of what is left and subtracting what it actually took.
//!
//! The per-child sizes are kept in the layout call's memo so that the render pass
//! places children exactly as they were measured.

use crate::alignment::{AlignmentId, HorizontalAlignment, VerticalAlignment};
use crate::canvas::{Canvas, with_saved_state};
use crate::config::UnboundedStackPolicy;
use crate::error::{LayoutError, Result};
use crate::primitives::{Axis, Point, ProposedSize, Size};

use super::cache::StackLayout;
use super::context::LayoutContext;
use super::placement::guide_value;
use super::view::{AnyView, View};

/// Children laid out along one axis, aligned on the other.
pub struct Stack {
    axis: Axis,
    alignment: AlignmentId,
    spacing: f32,
    children: Vec<AnyView>,
}

/// Horizontal stack, children vertically centered.
pub fn hstack() -> Stack {
    Stack::horizontal(VerticalAlignment::CENTER)
}

/// Vertical stack, children horizontally centered.
pub fn vstack() -> Stack {
    Stack::vertical(HorizontalAlignment::CENTER)
}

impl Stack {
    /// Leading to trailing, aligned by `alignment` on the vertical axis.
    pub fn horizontal(alignment: VerticalAlignment) -> Self {
        Self::new(Axis::Horizontal, alignment.id())
    }

    /// Top to bottom, aligned by `alignment` on the horizontal axis.
    pub fn vertical(alignment: HorizontalAlignment) -> Self {
        Self::new(Axis::Vertical, alignment.id())
    }

    fn new(axis: Axis, alignment: AlignmentId) -> Self {
        Self {
            axis,
            alignment,
            spacing: 0.0,
            children: Vec::new(),
        }
    }

    pub fn spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn push(mut self, child: impl View + 'static) -> Self {
        self.children.push(AnyView::new(child));
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = AnyView>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    fn total_spacing(&self) -> f32 {
        self.spacing * self.children.len().saturating_sub(1) as f32
    }

    fn child_proposal(&self, main: Option<f32>, cross: Option<f32>) -> ProposedSize {
        ProposedSize::UNSPECIFIED
            .with(self.axis, main)
            .with(self.axis.cross(), cross)
    }

    /// Main-axis range a child can occupy at a fixed cross proposal.
    fn flexibility(&self, index: usize, cross: Option<f32>, cx: &mut LayoutContext<'_>) -> Result<f32> {
        let child = &self.children[index];
        let least = cx.measure("child", index, child, self.child_proposal(Some(0.0), cross))?;
        let most = cx.measure("child", index, child, self.child_proposal(Some(f32::MAX), cross))?;
        Ok(most.along(self.axis) - least.along(self.axis))
    }

    fn distribute(&self, proposed: ProposedSize, cx: &mut LayoutContext<'_>) -> Result<StackLayout> {
        let cross = proposed.along(self.axis.cross());
        let Some(main) = proposed.along(self.axis) else {
            return self.distribute_unbounded(proposed, cx);
        };

        let count = self.children.len();
        let mut order = Vec::with_capacity(count);
        for index in 0..count {
            order.push((index, self.flexibility(index, cross, cx)?));
        }
        // sort_by is stable: equally flexible children keep their order.
        order.sort_by(|a, b| a.1.total_cmp(&b.1));

        let mut remaining = (main - self.total_spacing()).max(0.0);
        let mut child_sizes = vec![Size::ZERO; count];
        for (placed, &(index, flexibility)) in order.iter().enumerate() {
            let share = remaining / (count - placed) as f32;
            let size = cx.measure("child", index, &self.children[index], self.child_proposal(Some(share), cross))?;
            tracing::trace!(index, flexibility, share, ?size, "stack child");
            remaining = (remaining - size.along(self.axis)).max(0.0);
            child_sizes[index] = size;
        }

        let layout = self.finish(proposed, child_sizes);
        tracing::debug!(axis = ?self.axis, children = count, main, size = ?layout.size, "stack distributed");
        Ok(layout)
    }

    fn distribute_unbounded(&self, proposed: ProposedSize, cx: &mut LayoutContext<'_>) -> Result<StackLayout> {
        match cx.config().unbounded_stack {
            UnboundedStackPolicy::Reject => Err(LayoutError::unsupported(
                "Stack",
                format!("{:?} stack proposed an unconstrained main axis", self.axis),
            )),
            UnboundedStackPolicy::Intrinsic => {
                let cross = proposed.along(self.axis.cross());
                let mut child_sizes = Vec::with_capacity(self.children.len());
                for (index, child) in self.children.iter().enumerate() {
                    child_sizes.push(cx.measure("child", index, child, self.child_proposal(None, cross))?);
                }
                Ok(self.finish(proposed, child_sizes))
            }
        }
    }

    fn finish(&self, proposal: ProposedSize, child_sizes: Vec<Size>) -> StackLayout {
        let main: f32 = child_sizes.iter().map(|s| s.along(self.axis)).sum::<f32>() + self.total_spacing();
        let cross = child_sizes
            .iter()
            .map(|s| s.along(self.axis.cross()))
            .fold(0.0, f32::max);
        StackLayout {
            proposal,
            size: self.axis.size(main, cross),
            child_sizes,
        }
    }

    /// Child sizes behind a size this stack reported earlier in the call.
    fn recorded_sizes(&self, size: Size, cx: &LayoutContext<'_>) -> Result<Vec<Size>> {
        match cx.stack_for_size(size) {
            Some(layout) => Ok(layout.child_sizes.clone()),
            None => Err(LayoutError::contract(
                "Stack",
                format!("arranged at {size:?}, a size it never reported"),
            )),
        }
    }

    /// Offset of every child inside a stack of `size`.
    fn placements(&self, size: Size, child_sizes: &[Size], cx: &mut LayoutContext<'_>) -> Result<Vec<Point>> {
        let anchor = self.alignment.default_value(size);
        let mut offset = 0.0;
        let mut points = Vec::with_capacity(child_sizes.len());

        for (index, (child, child_size)) in self.children.iter().zip(child_sizes).enumerate() {
            let child_anchor = guide_value(cx, "child", index, child, self.alignment, *child_size)?;
            let main = match self.axis {
                Axis::Horizontal => offset,
                // y-up: the first child sits at the top.
                Axis::Vertical => size.height - offset - child_size.height,
            };
            points.push(self.axis.point(main, anchor - child_anchor));
            offset += child_size.along(self.axis) + self.spacing;
        }

        Ok(points)
    }
}

impl View for Stack {
    fn size(&self, proposed: ProposedSize, cx: &mut LayoutContext<'_>) -> Result<Size> {
        let layout = self.distribute(proposed, cx)?;
        let size = layout.size;
        cx.record_stack(layout);
        Ok(size)
    }

    fn render(&self, cx: &mut LayoutContext<'_>, canvas: &mut dyn Canvas, size: Size) -> Result<()> {
        let child_sizes = self.recorded_sizes(size, cx)?;
        let placements = self.placements(size, &child_sizes, cx)?;

        for (index, child) in self.children.iter().enumerate() {
            let p = placements[index];
            with_saved_state(canvas, |canvas| {
                canvas.translate(p.x, p.y);
                cx.arrange("child", index, child, canvas, child_sizes[index])
            })?;
        }
        Ok(())
    }

    fn custom_alignment(&self, id: AlignmentId, size: Size, cx: &mut LayoutContext<'_>) -> Result<Option<f32>> {
        let child_sizes = self.recorded_sizes(size, cx)?;
        let placements = self.placements(size, &child_sizes, cx)?;

        for (index, child) in self.children.iter().enumerate() {
            if let Some(value) = cx.alignment_of("child", index, child, id, child_sizes[index])? {
                return Ok(Some(value + placements[index].along(id.axis())));
            }
        }
        Ok(None)
    }
}
