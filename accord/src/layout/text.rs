//! Text leaf and text measurement.
//!
//! Measurement is pluggable through [`TextMeasurer`]. [`MonospaceMeasurer`] is a
//! deterministic estimate that needs no fonts; [`CosmicTextMeasurer`] shapes real
//! glyphs.
//!
//! [`CosmicTextMeasurer`]: crate::text_engine::CosmicTextMeasurer

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::canvas::{Canvas, with_saved_state};
use crate::error::Result;
use crate::primitives::{Color, ProposedSize, Rect, Size};

use super::context::LayoutContext;
use super::view::View;

/// Width of one terminal cell, as a fraction of the font size.
pub const CELL_WIDTH_EM: f32 = 0.6;
/// Line height, as a fraction of the font size.
pub const LINE_HEIGHT_EM: f32 = 1.2;

/// Measures a run of text wrapped into at most `max.width`.
pub trait TextMeasurer {
    fn measure(&self, text: &str, font_size: f32, max: Size) -> Size;
}

/// Fixed-pitch estimate: every display cell is `0.6em` wide, lines are `1.2em`
/// high, words wrap greedily.
#[derive(Debug, Clone, Copy, Default)]
pub struct MonospaceMeasurer;

impl TextMeasurer for MonospaceMeasurer {
    fn measure(&self, text: &str, font_size: f32, max: Size) -> Size {
        if text.is_empty() {
            return Size::ZERO;
        }

        let cell = font_size * CELL_WIDTH_EM;
        let max_cols = if max.width >= f32::MAX || cell <= 0.0 {
            usize::MAX
        } else {
            ((max.width / cell).floor() as usize).max(1)
        };

        let lines = wrap_columns(text, max_cols);
        let widest = lines.iter().copied().max().unwrap_or(0);
        Size::new(widest as f32 * cell, lines.len() as f32 * font_size * LINE_HEIGHT_EM)
    }
}

/// Greedy word wrap. Returns the width of every line in display cells.
///
/// Words longer than a line are broken between characters.
pub(crate) fn wrap_columns(text: &str, max_cols: usize) -> Vec<usize> {
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let mut line = 0usize;
        let mut started = false;

        for word in paragraph.split(' ') {
            let width = UnicodeWidthStr::width(word);
            let needed = if started { line + 1 + width } else { width };
            if needed <= max_cols {
                line = needed;
                started = true;
                continue;
            }

            if started {
                lines.push(line);
            }
            line = 0;
            started = true;

            if width <= max_cols {
                line = width;
                continue;
            }
            for ch in word.chars() {
                let w = UnicodeWidthChar::width(ch).unwrap_or(0);
                if line > 0 && line + w > max_cols {
                    lines.push(line);
                    line = 0;
                }
                line += w;
            }
        }
        lines.push(line);
    }

    lines
}

/// A run of text.
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    content: String,
    font_size: Option<f32>,
    color: Option<Color>,
}

impl Text {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            font_size: None,
            color: None,
        }
    }

    pub fn font_size(mut self, size: f32) -> Self {
        self.font_size = Some(size);
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    fn resolved_font_size(&self, cx: &LayoutContext<'_>) -> f32 {
        self.font_size.unwrap_or(cx.config().font_size)
    }
}

impl View for Text {
    fn size(&self, proposed: ProposedSize, cx: &mut LayoutContext<'_>) -> Result<Size> {
        let font_size = self.resolved_font_size(cx);
        Ok(cx.measurer().measure(&self.content, font_size, proposed.or_max()))
    }

    fn render(&self, cx: &mut LayoutContext<'_>, canvas: &mut dyn Canvas, size: Size) -> Result<()> {
        let font_size = self.resolved_font_size(cx);
        let rect = Rect::from_size(size);
        match self.color {
            Some(color) => with_saved_state(canvas, |canvas| {
                canvas.set_fill_color(color);
                canvas.draw_text(&self.content, rect, font_size);
            }),
            None => canvas.draw_text(&self.content, rect, font_size),
        }
        Ok(())
    }
}
