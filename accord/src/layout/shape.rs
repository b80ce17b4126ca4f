//! Shape leaves.
//!
//! A shape is greedy: it takes whatever it is offered, and everything on an
//! unconstrained axis. Wrap it in a frame to give it a size.

use crate::canvas::{Canvas, Path, with_saved_state};
use crate::error::Result;
use crate::primitives::{Color, ProposedSize, Rect, Size};

use super::context::LayoutContext;
use super::view::{Compose, View};

/// Outline of a shape for a given bounding box.
pub trait Shape {
    fn path(&self, rect: Rect) -> Path;
}

/// Fills a [`Shape`] over its whole size.
///
/// Draws with its own color if set, otherwise with the canvas's current fill
/// color (see [`ForegroundColor`](super::decorators::ForegroundColor)).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeView<S> {
    shape: S,
    color: Option<Color>,
}

impl<S: Shape> ShapeView<S> {
    pub fn new(shape: S) -> Self {
        Self { shape, color: None }
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }
}

impl<S: Shape> View for ShapeView<S> {
    fn size(&self, proposed: ProposedSize, _cx: &mut LayoutContext<'_>) -> Result<Size> {
        Ok(proposed.or_max())
    }

    fn render(&self, _cx: &mut LayoutContext<'_>, canvas: &mut dyn Canvas, size: Size) -> Result<()> {
        let path = self.shape.path(Rect::from_size(size));
        match self.color {
            Some(color) => with_saved_state(canvas, |canvas| {
                canvas.set_fill_color(color);
                canvas.fill_path(&path);
            }),
            None => canvas.fill_path(&path),
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rectangle;

impl Shape for Rectangle {
    fn path(&self, rect: Rect) -> Path {
        Path::rect(rect)
    }
}

impl Compose for Rectangle {
    type Body = ShapeView<Rectangle>;

    fn body(&self) -> Self::Body {
        ShapeView::new(*self)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Ellipse;

impl Shape for Ellipse {
    fn path(&self, rect: Rect) -> Path {
        Path::ellipse(rect)
    }
}

impl Compose for Ellipse {
    type Body = ShapeView<Ellipse>;

    fn body(&self) -> Self::Body {
        ShapeView::new(*self)
    }
}

/// A color on its own is a rectangle filled with it.
impl Compose for Color {
    type Body = ShapeView<Rectangle>;

    fn body(&self) -> Self::Body {
        ShapeView::new(Rectangle).color(*self)
    }
}
