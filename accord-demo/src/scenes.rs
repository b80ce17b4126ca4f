//! Scenes the demo can lay out.

use accord::{
    Alignment, AlignmentKey, AnyView, Color, Ellipse, GeometryReader, HorizontalAlignment, Rectangle, Size, Stack,
    Text, ViewExt, hstack,
};
use clap::ValueEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Scene {
    /// Ellipse in fixed and flexible frames, with its size printed on top.
    Sample,
    /// A row of children with different flexibility.
    Stack,
    /// Label/value rows lined up on a custom guide.
    Alignment,
}

/// Knobs exposed on the command line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneParams {
    pub width: f32,
    pub min_width: f32,
    pub max_width: f32,
}

pub fn build(scene: Scene, params: SceneParams) -> AnyView {
    match scene {
        Scene::Sample => sample(params),
        Scene::Stack => stack(params),
        Scene::Alignment => alignment(params),
    }
}

/// Prints the size it was given.
fn size_label() -> GeometryReader<impl Fn(Size) -> Text> {
    GeometryReader::new(|size: Size| Text::new(format!("{}x{}", size.width, size.height)).color(Color::WHITE))
}

fn sample(params: SceneParams) -> AnyView {
    Ellipse
        .frame_width(150.0)
        .flexible_frame()
        .min_width(params.min_width)
        .max_width(params.max_width)
        .overlay(size_label(), Alignment::CENTER)
        .border(Color::BLUE, 2.0)
        .frame(params.width, 300.0)
        .border(Color::YELLOW, 2.0)
        .erased()
}

fn stack(params: SceneParams) -> AnyView {
    hstack()
        .spacing(8.0)
        .push(Text::new("leading"))
        .push(Rectangle.foreground_color(Color::BLUE).overlay(size_label(), Alignment::CENTER))
        .push(Ellipse.frame(60.0, 60.0).foreground_color(Color::GREEN))
        .push(
            Rectangle
                .flexible_frame()
                .min_width(params.min_width / 2.0)
                .max_width(params.max_width / 2.0)
                .overlay(size_label(), Alignment::CENTER),
        )
        .push(Text::new("trailing text that wraps"))
        .frame(params.width, 120.0)
        .border(Color::YELLOW, 2.0)
        .erased()
}

static VALUE_EDGE_KEY: AlignmentKey = AlignmentKey::horizontal("value_edge", |s| s.width / 2.0);

fn alignment(params: SceneParams) -> AnyView {
    let edge = HorizontalAlignment::custom(&VALUE_EDGE_KEY);
    let row = |label: &str, value: &str| {
        hstack()
            .spacing(6.0)
            .push(Text::new(label))
            .push(Text::new(value).color(Color::BLUE).alignment_guide(edge.id(), |_| 0.0))
    };

    Stack::vertical(edge)
        .spacing(4.0)
        .push(row("name", "accord"))
        .push(row("kind", "layout engine"))
        .push(row("proposal width", &params.width.to_string()))
        .border(Color::GREEN, 1.0)
        .erased()
}
