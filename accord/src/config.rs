//! Engine configuration.

use serde::{Deserialize, Serialize};

use crate::primitives::Color;

/// What a stack does when its main axis is proposed as unconstrained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnboundedStackPolicy {
    /// Fail with [`LayoutError::UnsupportedConfiguration`](crate::LayoutError).
    #[default]
    Reject,
    /// Propose the unset axis to every child and sum their answers.
    Intrinsic,
}

/// Configuration for one or more layout calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Initial fill color of the canvas; leaves without a color draw with it.
    pub foreground: Color,

    /// Initial stroke color of the canvas.
    pub stroke: Color,

    /// Font size for `Text` without an explicit size.
    pub font_size: f32,

    /// Stack behavior for an unconstrained main axis.
    pub unbounded_stack: UnboundedStackPolicy,

    /// Memoize `size` answers per (node path, proposal) within one call.
    pub memoize: bool,

    /// Outline drawn around the root after it renders: (color, width).
    pub debug_outline: Option<(Color, f32)>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            foreground: Color::RED,
            stroke: Color::BLACK,
            font_size: 16.0,
            unbounded_stack: UnboundedStackPolicy::Reject,
            memoize: true,
            debug_outline: None,
        }
    }
}
