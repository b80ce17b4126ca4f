//! Alignment-based placement shared by frames, overlays and stacks.

use crate::alignment::{Alignment, AlignmentId};
use crate::error::Result;
use crate::primitives::{Point, Size};

use super::context::LayoutContext;
use super::view::View;

/// Coordinate of `id` on `child` at `child_size`: the child's custom guide if it
/// has one, the default rule otherwise.
pub(crate) fn guide_value<V: View + ?Sized>(
    cx: &mut LayoutContext<'_>,
    name: &'static str,
    index: usize,
    child: &V,
    id: AlignmentId,
    child_size: Size,
) -> Result<f32> {
    Ok(cx
        .alignment_of(name, index, child, id, child_size)?
        .unwrap_or_else(|| id.default_value(child_size)))
}

/// Alignment point of `child` at `child_size`, honoring custom guides on both axes.
pub(crate) fn alignment_point<V: View + ?Sized>(
    cx: &mut LayoutContext<'_>,
    name: &'static str,
    index: usize,
    child: &V,
    child_size: Size,
    alignment: Alignment,
) -> Result<Point> {
    Ok(Point::new(
        guide_value(cx, name, index, child, alignment.horizontal.id(), child_size)?,
        guide_value(cx, name, index, child, alignment.vertical.id(), child_size)?,
    ))
}

/// Offset that puts `child`'s alignment point on its parent's.
pub(crate) fn child_translation<V: View + ?Sized>(
    cx: &mut LayoutContext<'_>,
    name: &'static str,
    index: usize,
    child: &V,
    parent_size: Size,
    child_size: Size,
    alignment: Alignment,
) -> Result<Point> {
    let parent = alignment.point(parent_size);
    let child = alignment_point(cx, name, index, child, child_size, alignment)?;
    Ok(parent - child)
}
