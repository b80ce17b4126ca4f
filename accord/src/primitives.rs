//! Core primitive types for accord.
//!
//! Geometry and color values passed down and up the layout tree. All of them are
//! plain `Copy` values; nothing here holds layout state.
//!
//! The vertical axis is y-up: `y = 0` is the bottom edge of a box and
//! `y = height` is its top edge.

use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

/// Fallback used by [`ProposedSize::or_default`] for an unset axis.
pub const DEFAULT_PROPOSAL: f32 = 10.0;

/// A point in 2D space.
///
/// Used as a translation offset: placement is always relative to the parent's
/// coordinate space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Component along `axis`.
    #[inline]
    pub fn along(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.x,
            Axis::Vertical => self.y,
        }
    }
}

impl From<(f32, f32)> for Point {
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y }
    }
}

impl Add for Point {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl Sub for Point {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

/// A 2D size. Always concrete; nodes never report negative sizes.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Extent along `axis`.
    #[inline]
    pub fn along(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.width,
            Axis::Vertical => self.height,
        }
    }

    /// Whether both extents are finite and non-negative.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width >= 0.0 && self.height >= 0.0
    }
}

impl From<(f32, f32)> for Size {
    fn from((width, height): (f32, f32)) -> Self {
        Self { width, height }
    }
}

/// A size suggestion passed down during the size query.
///
/// `None` on an axis means "unconstrained: you decide".
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ProposedSize {
    pub width: Option<f32>,
    pub height: Option<f32>,
}

impl ProposedSize {
    /// Both axes unconstrained.
    pub const UNSPECIFIED: Self = Self {
        width: None,
        height: None,
    };

    #[inline]
    pub const fn new(width: Option<f32>, height: Option<f32>) -> Self {
        Self { width, height }
    }

    /// Unset axes fall back to [`DEFAULT_PROPOSAL`].
    #[inline]
    pub fn or_default(&self) -> Size {
        Size {
            width: self.width.unwrap_or(DEFAULT_PROPOSAL),
            height: self.height.unwrap_or(DEFAULT_PROPOSAL),
        }
    }

    /// Unset axes fall back to the largest representable value.
    #[inline]
    pub fn or_max(&self) -> Size {
        Size {
            width: self.width.unwrap_or(f32::MAX),
            height: self.height.unwrap_or(f32::MAX),
        }
    }

    #[inline]
    pub fn along(&self, axis: Axis) -> Option<f32> {
        match axis {
            Axis::Horizontal => self.width,
            Axis::Vertical => self.height,
        }
    }

    /// Copy of this proposal with the `axis` component replaced.
    #[inline]
    pub fn with(mut self, axis: Axis, value: Option<f32>) -> Self {
        match axis {
            Axis::Horizontal => self.width = value,
            Axis::Vertical => self.height = value,
        }
        self
    }

    /// Bit pattern used for memo keys. `None` and every float map to distinct values.
    #[inline]
    pub(crate) fn key(&self) -> (u64, u64) {
        fn axis_key(v: Option<f32>) -> u64 {
            match v {
                Some(f) => f.to_bits() as u64,
                None => u64::MAX,
            }
        }
        (axis_key(self.width), axis_key(self.height))
    }
}

impl From<Size> for ProposedSize {
    fn from(size: Size) -> Self {
        Self {
            width: Some(size.width),
            height: Some(size.height),
        }
    }
}

/// A layout axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    /// The perpendicular axis.
    #[inline]
    pub fn cross(self) -> Self {
        match self {
            Axis::Horizontal => Axis::Vertical,
            Axis::Vertical => Axis::Horizontal,
        }
    }

    /// Build a size from main/cross extents.
    #[inline]
    pub fn size(self, main: f32, cross: f32) -> Size {
        match self {
            Axis::Horizontal => Size::new(main, cross),
            Axis::Vertical => Size::new(cross, main),
        }
    }

    /// Build a point from main/cross offsets.
    #[inline]
    pub fn point(self, main: f32, cross: f32) -> Point {
        match self {
            Axis::Horizontal => Point::new(main, cross),
            Axis::Vertical => Point::new(cross, main),
        }
    }
}

/// A rectangle, origin at its bottom-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        width: 0.0,
        height: 0.0,
    };

    #[inline]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    #[inline]
    pub fn from_origin_size(origin: Point, size: Size) -> Self {
        Self {
            x: origin.x,
            y: origin.y,
            width: size.width,
            height: size.height,
        }
    }

    /// Rectangle at the origin with the given size.
    #[inline]
    pub fn from_size(size: Size) -> Self {
        Self::from_origin_size(Point::ORIGIN, size)
    }

    #[inline]
    pub fn origin(&self) -> Point {
        Point { x: self.x, y: self.y }
    }

    #[inline]
    pub fn size(&self) -> Size {
        Size {
            width: self.width,
            height: self.height,
        }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.y + self.height
    }

    #[inline]
    pub fn center(&self) -> Point {
        Point {
            x: self.x + self.width / 2.0,
            y: self.y + self.height / 2.0,
        }
    }

    /// Shrink by `dx` on the left and right and `dy` on the top and bottom.
    ///
    /// Extents never go below zero.
    #[inline]
    pub fn inset(&self, dx: f32, dy: f32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            width: (self.width - 2.0 * dx).max(0.0),
            height: (self.height - 2.0 * dy).max(0.0),
        }
    }

    /// Smallest rectangle containing both.
    #[inline]
    pub fn union(&self, other: &Rect) -> Rect {
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        let right = self.right().max(other.right());
        let top = self.top().max(other.top());
        Rect { x, y, width: right - x, height: top - y }
    }

    #[inline]
    pub fn translate(&self, offset: Point) -> Self {
        Self {
            x: self.x + offset.x,
            y: self.y + offset.y,
            ..*self
        }
    }
}

/// RGBA color with components in 0.0-1.0 range.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const TRANSPARENT: Self = Self::rgba(0.0, 0.0, 0.0, 0.0);
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    pub const RED: Self = Self::rgb(1.0, 0.0, 0.0);
    pub const GREEN: Self = Self::rgb(0.0, 1.0, 0.0);
    pub const BLUE: Self = Self::rgb(0.0, 0.0, 1.0);
    pub const YELLOW: Self = Self::rgb(1.0, 1.0, 0.0);

    /// Create a color from RGB values (0.0-1.0).
    #[inline]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Create a color from RGBA values (0.0-1.0).
    #[inline]
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create a color from RGB values (0-255).
    #[inline]
    pub fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: 1.0,
        }
    }

    /// Return this color with a different alpha value.
    #[inline]
    pub const fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_add_sub() {
        let a = Point::new(10.0, 20.0);
        let b = Point::new(5.0, 15.0);
        assert_eq!(a + b, Point::new(15.0, 35.0));
        assert_eq!(a - b, Point::new(5.0, 5.0));
    }

    #[test]
    fn proposed_or_default_fills_unset_axes() {
        let p = ProposedSize::new(Some(40.0), None);
        assert_eq!(p.or_default(), Size::new(40.0, DEFAULT_PROPOSAL));
        assert_eq!(ProposedSize::UNSPECIFIED.or_default(), Size::new(10.0, 10.0));
    }

    #[test]
    fn proposed_or_max_fills_unset_axes() {
        let p = ProposedSize::new(None, Some(7.0));
        assert_eq!(p.or_max(), Size::new(f32::MAX, 7.0));
    }

    #[test]
    fn proposed_from_size_is_fully_specified() {
        let p = ProposedSize::from(Size::new(3.0, 4.0));
        assert_eq!(p, ProposedSize::new(Some(3.0), Some(4.0)));
    }

    #[test]
    fn proposed_key_distinguishes_none_from_values() {
        let unset = ProposedSize::UNSPECIFIED;
        let zero = ProposedSize::new(Some(0.0), Some(0.0));
        assert_ne!(unset.key(), zero.key());
        assert_eq!(zero.key(), ProposedSize::from(Size::ZERO).key());
    }

    #[test]
    fn axis_helpers() {
        let s = Axis::Vertical.size(30.0, 10.0);
        assert_eq!(s, Size::new(10.0, 30.0));
        assert_eq!(s.along(Axis::Vertical), 30.0);
        assert_eq!(Axis::Horizontal.cross(), Axis::Vertical);
        assert_eq!(Axis::Vertical.point(1.0, 2.0), Point::new(2.0, 1.0));

        let p = ProposedSize::new(Some(5.0), Some(6.0)).with(Axis::Vertical, None);
        assert_eq!(p, ProposedSize::new(Some(5.0), None));
    }

    #[test]
    fn rect_inset_clamps_to_zero() {
        let r = Rect::from_size(Size::new(10.0, 4.0)).inset(1.0, 3.0);
        assert_eq!(r, Rect::new(1.0, 3.0, 8.0, 0.0));
    }

    #[test]
    fn rect_union() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, -5.0, 10.0, 10.0);
        assert_eq!(a.union(&b), Rect::new(0.0, -5.0, 15.0, 15.0));
    }

    #[test]
    fn size_validity() {
        assert!(Size::new(0.0, 5.0).is_valid());
        assert!(!Size::new(-1.0, 5.0).is_valid());
        assert!(!Size::new(f32::INFINITY, 5.0).is_valid());
    }

    #[test]
    fn color_rgb8() {
        let c = Color::rgb8(255, 0, 0);
        assert_eq!(c, Color::RED);
        assert_eq!(Color::RED.with_alpha(0.5).a, 0.5);
    }
}
