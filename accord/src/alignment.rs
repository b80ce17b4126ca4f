//! Alignment model.
//!
//! An [`AlignmentId`] names a rule mapping a box's size to a coordinate on one
//! axis. Identity matters: custom alignment guides only intercept queries for the
//! exact key they were declared with, so ids compare by the address of their
//! `'static` [`AlignmentKey`], never by name or rule.
//!
//! Declaring a custom guide:
//!
//! ```
//! use accord::alignment::{AlignmentId, AlignmentKey};
//!
//! static FIRST_LABEL: AlignmentKey = AlignmentKey::horizontal("first_label", |size| size.width / 2.0);
//! const FIRST_LABEL_ID: AlignmentId = AlignmentId::new(&FIRST_LABEL);
//! ```

use std::fmt;

use crate::primitives::{Axis, Point, Size};

/// The definition behind an [`AlignmentId`]. Must live in a `static`.
pub struct AlignmentKey {
    name: &'static str,
    axis: Axis,
    default_value: fn(Size) -> f32,
}

impl AlignmentKey {
    pub const fn horizontal(name: &'static str, default_value: fn(Size) -> f32) -> Self {
        Self { name, axis: Axis::Horizontal, default_value }
    }

    pub const fn vertical(name: &'static str, default_value: fn(Size) -> f32) -> Self {
        Self { name, axis: Axis::Vertical, default_value }
    }
}

/// Identity of an alignment rule.
#[derive(Clone, Copy)]
pub struct AlignmentId(&'static AlignmentKey);

impl AlignmentId {
    pub const fn new(key: &'static AlignmentKey) -> Self {
        Self(key)
    }

    pub fn name(&self) -> &'static str {
        self.0.name
    }

    pub fn axis(&self) -> Axis {
        self.0.axis
    }

    /// Coordinate this rule assigns to a box of `size`.
    #[inline]
    pub fn default_value(&self, size: Size) -> f32 {
        (self.0.default_value)(size)
    }
}

impl PartialEq for AlignmentId {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.0, other.0)
    }
}

impl Eq for AlignmentId {}

impl fmt::Debug for AlignmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AlignmentId({:?}, {})", self.0.axis, self.0.name)
    }
}

static LEADING_KEY: AlignmentKey = AlignmentKey::horizontal("leading", |_| 0.0);
static H_CENTER_KEY: AlignmentKey = AlignmentKey::horizontal("center", |size| size.width / 2.0);
static TRAILING_KEY: AlignmentKey = AlignmentKey::horizontal("trailing", |size| size.width);
static TOP_KEY: AlignmentKey = AlignmentKey::vertical("top", |size| size.height);
static V_CENTER_KEY: AlignmentKey = AlignmentKey::vertical("center", |size| size.height / 2.0);
static BOTTOM_KEY: AlignmentKey = AlignmentKey::vertical("bottom", |_| 0.0);

/// An alignment rule on the horizontal axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HorizontalAlignment(AlignmentId);

impl HorizontalAlignment {
    pub const LEADING: Self = Self(AlignmentId::new(&LEADING_KEY));
    pub const CENTER: Self = Self(AlignmentId::new(&H_CENTER_KEY));
    pub const TRAILING: Self = Self(AlignmentId::new(&TRAILING_KEY));

    /// A custom horizontal alignment. `key` must be declared with
    /// [`AlignmentKey::horizontal`].
    pub fn custom(key: &'static AlignmentKey) -> Self {
        debug_assert_eq!(key.axis, Axis::Horizontal, "vertical key used as horizontal alignment");
        Self(AlignmentId::new(key))
    }

    #[inline]
    pub fn id(&self) -> AlignmentId {
        self.0
    }
}

/// An alignment rule on the vertical axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerticalAlignment(AlignmentId);

impl VerticalAlignment {
    pub const TOP: Self = Self(AlignmentId::new(&TOP_KEY));
    pub const CENTER: Self = Self(AlignmentId::new(&V_CENTER_KEY));
    pub const BOTTOM: Self = Self(AlignmentId::new(&BOTTOM_KEY));

    /// A custom vertical alignment. `key` must be declared with
    /// [`AlignmentKey::vertical`].
    pub fn custom(key: &'static AlignmentKey) -> Self {
        debug_assert_eq!(key.axis, Axis::Vertical, "horizontal key used as vertical alignment");
        Self(AlignmentId::new(key))
    }

    #[inline]
    pub fn id(&self) -> AlignmentId {
        self.0
    }
}

/// A two-axis alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Alignment {
    pub horizontal: HorizontalAlignment,
    pub vertical: VerticalAlignment,
}

impl Alignment {
    pub const CENTER: Self = Self::new(HorizontalAlignment::CENTER, VerticalAlignment::CENTER);
    pub const LEADING: Self = Self::new(HorizontalAlignment::LEADING, VerticalAlignment::CENTER);
    pub const TRAILING: Self = Self::new(HorizontalAlignment::TRAILING, VerticalAlignment::CENTER);
    pub const TOP: Self = Self::new(HorizontalAlignment::CENTER, VerticalAlignment::TOP);
    pub const BOTTOM: Self = Self::new(HorizontalAlignment::CENTER, VerticalAlignment::BOTTOM);
    pub const TOP_LEADING: Self = Self::new(HorizontalAlignment::LEADING, VerticalAlignment::TOP);
    pub const TOP_TRAILING: Self = Self::new(HorizontalAlignment::TRAILING, VerticalAlignment::TOP);
    pub const BOTTOM_LEADING: Self = Self::new(HorizontalAlignment::LEADING, VerticalAlignment::BOTTOM);
    pub const BOTTOM_TRAILING: Self = Self::new(HorizontalAlignment::TRAILING, VerticalAlignment::BOTTOM);

    pub const fn new(horizontal: HorizontalAlignment, vertical: VerticalAlignment) -> Self {
        Self { horizontal, vertical }
    }

    /// Alignment point of a box of `size` under the default rules.
    #[inline]
    pub fn point(&self, size: Size) -> Point {
        Point::new(
            self.horizontal.id().default_value(size),
            self.vertical.id().default_value(size),
        )
    }
}

impl Default for Alignment {
    fn default() -> Self {
        Self::CENTER
    }
}
