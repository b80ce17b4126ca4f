//! Rendering backend boundary.
//!
//! The engine never rasterizes anything itself. Leaves and decorators describe what
//! to draw through the [`Canvas`] trait; frames, stacks and overlays only translate.
//!
//! [`DisplayList`] is the built-in backend: it records every fill, stroke and text
//! run in absolute (root) coordinates so a host can replay them on a real surface.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::primitives::{Color, Point, Rect};

// =========================================================================
// Path
// =========================================================================

/// Magic constant for approximating a quarter ellipse with one cubic bezier.
const KAPPA: f32 = 0.552_284_8;

/// One segment of a [`Path`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PathElement {
    MoveTo(Point),
    LineTo(Point),
    CubicTo(Point, Point, Point),
    Close,
}

/// A geometric path made of closed or open subpaths.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Path {
    elements: Vec<PathElement>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(&mut self, p: Point) -> &mut Self {
        self.elements.push(PathElement::MoveTo(p));
        self
    }

    pub fn line_to(&mut self, p: Point) -> &mut Self {
        self.elements.push(PathElement::LineTo(p));
        self
    }

    pub fn cubic_to(&mut self, c1: Point, c2: Point, p: Point) -> &mut Self {
        self.elements.push(PathElement::CubicTo(c1, c2, p));
        self
    }

    pub fn close(&mut self) -> &mut Self {
        self.elements.push(PathElement::Close);
        self
    }

    /// A closed rectangle.
    pub fn rect(rect: Rect) -> Self {
        let mut path = Self::new();
        path.move_to(Point::new(rect.x, rect.y))
            .line_to(Point::new(rect.right(), rect.y))
            .line_to(Point::new(rect.right(), rect.top()))
            .line_to(Point::new(rect.x, rect.top()))
            .close();
        path
    }

    /// A closed ellipse inscribed in `rect`, built from four cubic arcs.
    pub fn ellipse(rect: Rect) -> Self {
        let c = rect.center();
        let rx = rect.width / 2.0;
        let ry = rect.height / 2.0;
        let kx = rx * KAPPA;
        let ky = ry * KAPPA;

        let mut path = Self::new();
        path.move_to(Point::new(c.x + rx, c.y))
            .cubic_to(Point::new(c.x + rx, c.y + ky), Point::new(c.x + kx, c.y + ry), Point::new(c.x, c.y + ry))
            .cubic_to(Point::new(c.x - kx, c.y + ry), Point::new(c.x - rx, c.y + ky), Point::new(c.x - rx, c.y))
            .cubic_to(Point::new(c.x - rx, c.y - ky), Point::new(c.x - kx, c.y - ry), Point::new(c.x, c.y - ry))
            .cubic_to(Point::new(c.x + kx, c.y - ry), Point::new(c.x + rx, c.y - ky), Point::new(c.x + rx, c.y))
            .close();
        path
    }

    pub fn elements(&self) -> &[PathElement] {
        &self.elements
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Copy of this path moved by `offset`.
    pub fn translated(&self, offset: Point) -> Self {
        let elements = self
            .elements
            .iter()
            .map(|el| match *el {
                PathElement::MoveTo(p) => PathElement::MoveTo(p + offset),
                PathElement::LineTo(p) => PathElement::LineTo(p + offset),
                PathElement::CubicTo(a, b, p) => PathElement::CubicTo(a + offset, b + offset, p + offset),
                PathElement::Close => PathElement::Close,
            })
            .collect();
        Self { elements }
    }

    /// Bounding box of all points, control points included.
    pub fn bounds(&self) -> Option<Rect> {
        let mut points = self.elements.iter().flat_map(|el| match *el {
            PathElement::MoveTo(p) | PathElement::LineTo(p) => vec![p],
            PathElement::CubicTo(a, b, p) => vec![a, b, p],
            PathElement::Close => Vec::new(),
        });
        let first = points.next()?;
        Some(points.fold(Rect::from_origin_size(first, Default::default()), |acc, p| {
            acc.union(&Rect::from_origin_size(p, Default::default()))
        }))
    }
}

// =========================================================================
// Canvas
// =========================================================================

/// Drawing surface driven by the render pass.
///
/// Every node that mutates state (translation, colors) must bracket the mutation
/// with `save`/`restore`; use [`with_saved_state`] so the restore also happens when
/// the child's render returns an error.
pub trait Canvas {
    /// Push a copy of the current graphics state.
    fn save(&mut self);

    /// Pop back to the most recently saved graphics state.
    fn restore(&mut self);

    /// Move the coordinate origin by `(dx, dy)`.
    fn translate(&mut self, dx: f32, dy: f32);

    fn set_fill_color(&mut self, color: Color);

    fn set_stroke_color(&mut self, color: Color);

    /// Fill a closed path with the current fill color.
    fn fill_path(&mut self, path: &Path);

    /// Stroke a path outline of `width` with the current stroke color.
    fn stroke_path(&mut self, path: &Path, width: f32);

    /// Draw `text` laid out inside `rect` with the current fill color.
    fn draw_text(&mut self, text: &str, rect: Rect, font_size: f32);
}

/// Run `f` between `save` and `restore`.
#[inline]
pub fn with_saved_state<R>(canvas: &mut dyn Canvas, f: impl FnOnce(&mut dyn Canvas) -> R) -> R {
    canvas.save();
    let result = f(canvas);
    canvas.restore();
    result
}

// =========================================================================
// DisplayList
// =========================================================================

/// A recorded drawing operation, in root coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawCommand {
    Fill { path: Path, color: Color },
    Stroke { path: Path, width: f32, color: Color },
    Text { text: String, rect: Rect, font_size: f32, color: Color },
}

#[derive(Debug, Clone, Copy)]
struct GraphicsState {
    offset: Point,
    fill: Color,
    stroke: Color,
}

/// Recording [`Canvas`]: the artifact produced by [`layout`](crate::layout).
#[derive(Debug, Clone, Serialize)]
pub struct DisplayList {
    commands: Vec<DrawCommand>,
    #[serde(skip)]
    state: GraphicsState,
    #[serde(skip)]
    saved: Vec<GraphicsState>,
}

impl DisplayList {
    pub fn new(fill: Color, stroke: Color) -> Self {
        Self {
            commands: Vec::new(),
            state: GraphicsState { offset: Point::ORIGIN, fill, stroke },
            saved: Vec::with_capacity(16),
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn into_commands(self) -> Vec<DrawCommand> {
        self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Number of unmatched `save` calls.
    pub fn saved_depth(&self) -> usize {
        self.saved.len()
    }

    /// Current translation of the coordinate origin.
    pub fn offset(&self) -> Point {
        self.state.offset
    }
}

impl Canvas for DisplayList {
    fn save(&mut self) {
        self.saved.push(self.state);
    }

    fn restore(&mut self) {
        match self.saved.pop() {
            Some(state) => self.state = state,
            None => tracing::warn!("restore without matching save"),
        }
    }

    fn translate(&mut self, dx: f32, dy: f32) {
        self.state.offset = self.state.offset + Point::new(dx, dy);
    }

    fn set_fill_color(&mut self, color: Color) {
        self.state.fill = color;
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.state.stroke = color;
    }

    fn fill_path(&mut self, path: &Path) {
        self.commands.push(DrawCommand::Fill {
            path: path.translated(self.state.offset),
            color: self.state.fill,
        });
    }

    fn stroke_path(&mut self, path: &Path, width: f32) {
        self.commands.push(DrawCommand::Stroke {
            path: path.translated(self.state.offset),
            width,
            color: self.state.stroke,
        });
    }

    fn draw_text(&mut self, text: &str, rect: Rect, font_size: f32) {
        self.commands.push(DrawCommand::Text {
            text: text.to_owned(),
            rect: rect.translate(self.state.offset),
            font_size,
            color: self.state.fill,
        });
    }
}

impl fmt::Display for DisplayList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, cmd) in self.commands.iter().enumerate() {
            match cmd {
                DrawCommand::Fill { path, color } => {
                    write!(f, "{i:>3} fill   ")?;
                    write_bounds(f, path)?;
                    writeln!(f, " {}", ColorHex(*color))?;
                }
                DrawCommand::Stroke { path, width, color } => {
                    write!(f, "{i:>3} stroke ")?;
                    write_bounds(f, path)?;
                    writeln!(f, " w={width} {}", ColorHex(*color))?;
                }
                DrawCommand::Text { text, rect, font_size, color } => {
                    writeln!(
                        f,
                        "{i:>3} text   [{:.1}, {:.1} {:.1}x{:.1}] {text:?} size={font_size} {}",
                        rect.x, rect.y, rect.width, rect.height,
                        ColorHex(*color)
                    )?;
                }
            }
        }
        Ok(())
    }
}

fn write_bounds(f: &mut fmt::Formatter<'_>, path: &Path) -> fmt::Result {
    match path.bounds() {
        Some(r) => write!(f, "[{:.1}, {:.1} {:.1}x{:.1}]", r.x, r.y, r.width, r.height),
        None => write!(f, "[empty]"),
    }
}

struct ColorHex(Color);

impl fmt::Display for ColorHex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        write!(f, "#{:02x}{:02x}{:02x}{:02x}", c(self.0.r), c(self.0.g), c(self.0.b), c(self.0.a))
    }
}
