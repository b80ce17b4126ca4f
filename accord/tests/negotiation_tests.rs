//! Integration tests for the layout negotiation protocol.
//!
//! These drive whole trees through the public API: a size query at some proposal,
//! then (where placement matters) a full layout into a display list whose commands
//! are inspected in root coordinates.

use accord::{
    Alignment, AlignmentKey, Canvas, Color, DisplayList, DrawCommand, Ellipse, GeometryReader, HorizontalAlignment,
    LayoutConfig, LayoutContext, LayoutError, MonospaceMeasurer, Point, ProposedSize, Rect, Rectangle, Size, Text,
    VerticalAlignment, View, ViewExt, hstack, layout, layout_into, vstack,
};

/// Test harness that owns a config and answers size queries in fresh contexts.
struct Negotiation {
    config: LayoutConfig,
}

impl Negotiation {
    fn new() -> Self {
        Self { config: LayoutConfig::default() }
    }

    fn without_memo() -> Self {
        Self {
            config: LayoutConfig { memoize: false, ..LayoutConfig::default() },
        }
    }

    fn size<V: View>(&self, view: &V, proposed: ProposedSize) -> Size {
        let mut cx = LayoutContext::new(&self.config, &MonospaceMeasurer);
        let result = view.size(proposed, &mut cx);
        assert!(result.is_ok(), "size failed: {:?}", result.err());
        result.unwrap_or(Size::ZERO)
    }

    fn custom<V: View>(&self, view: &V, id: accord::AlignmentId, size: Size) -> Option<f32> {
        let mut cx = LayoutContext::new(&self.config, &MonospaceMeasurer);
        view.size(size.into(), &mut cx).unwrap();
        view.custom_alignment(id, size, &mut cx).unwrap()
    }

    /// Bounds of every fill, in drawing order.
    fn fills<V: View>(&self, view: &V, target: Size) -> Vec<Rect> {
        layout(view, target, &self.config)
            .unwrap()
            .commands()
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCommand::Fill { path, .. } => path.bounds(),
                _ => None,
            })
            .collect()
    }
}

fn proposals() -> Vec<ProposedSize> {
    let values = [None, Some(0.0), Some(35.0), Some(100.0), Some(250.0), Some(400.0), Some(1000.0)];
    let mut out = Vec::new();
    for w in values {
        for h in [None, Some(0.0), Some(80.0)] {
            out.push(ProposedSize::new(w, h));
        }
    }
    out
}

// =========================================================================
// Frames
// =========================================================================

#[test]
fn test_fixed_frame_always_reports_its_size() {
    let n = Negotiation::new();
    let views = [
        Rectangle.frame(64.0, 32.0).erased(),
        Text::new("some text that wraps").frame(64.0, 32.0).erased(),
        Rectangle.frame(500.0, 500.0).frame(64.0, 32.0).erased(),
    ];
    for view in &views {
        for proposed in proposals() {
            assert_eq!(n.size(view, proposed), Size::new(64.0, 32.0), "at {proposed:?}");
        }
    }
}

#[test]
fn test_flexible_frame_stays_in_bounds() {
    let n = Negotiation::new();
    let views = [
        Rectangle.flexible_frame().min_width(100.0).max_width(400.0).erased(),
        Text::new("hello world").flexible_frame().min_width(100.0).max_width(400.0).erased(),
        Rectangle.frame_width(30.0).flexible_frame().min_width(100.0).max_width(400.0).erased(),
        Rectangle.frame_width(900.0).flexible_frame().min_width(100.0).max_width(400.0).erased(),
    ];
    for view in &views {
        for proposed in proposals() {
            let width = n.size(view, proposed).width;
            assert!((100.0..=400.0).contains(&width), "{width} at {proposed:?}");
        }
    }
}

#[test]
fn test_flexible_frame_keeps_natural_width_when_unconstrained() {
    let n = Negotiation::new();
    let fixed = Rectangle.frame_width(150.0).flexible_frame().min_width(100.0).max_width(400.0);
    assert_eq!(n.size(&fixed, ProposedSize::UNSPECIFIED).width, 150.0);

    let text = Text::new("one two three four five");
    let natural = n.size(&text, ProposedSize::UNSPECIFIED).width;
    assert!(natural > 100.0 && natural < 400.0);
    let framed = Text::new("one two three four five").flexible_frame().min_width(100.0).max_width(400.0);
    assert_eq!(n.size(&framed, ProposedSize::new(None, Some(50.0))).width, natural);
}

#[test]
fn test_nested_frames_translate_top_leading() {
    let n = Negotiation::new();
    let inner = Ellipse.frame(200.0, 100.0);
    let outer = Ellipse.frame(200.0, 100.0).frame(300.0, 300.0).alignment(Alignment::TOP_LEADING);

    assert_eq!(n.size(&inner, ProposedSize::UNSPECIFIED), Size::new(200.0, 100.0));
    assert_eq!(n.size(&outer, ProposedSize::UNSPECIFIED), Size::new(300.0, 300.0));

    let fills = n.fills(&outer, Size::new(300.0, 300.0));
    assert_eq!(fills, vec![Rect::new(0.0, 200.0, 200.0, 100.0)]);
}

// =========================================================================
// Alignment
// =========================================================================

#[test]
fn test_builtin_alignment_points() {
    let size = Size::new(80.0, 60.0);
    assert_eq!(Alignment::CENTER.point(size), Point::new(40.0, 30.0));
    assert_eq!(Alignment::TOP_LEADING.point(size), Point::new(0.0, 60.0));
    assert_eq!(Alignment::LEADING.point(size), Point::new(0.0, 30.0));
    assert_eq!(Alignment::BOTTOM_TRAILING.point(size), Point::new(80.0, 0.0));
}

static FIRST_TEXT_KEY: AlignmentKey = AlignmentKey::horizontal("first_text", |s| s.width / 2.0);
static OTHER_KEY: AlignmentKey = AlignmentKey::horizontal("other", |s| s.width / 2.0);

#[test]
fn test_guide_overrides_only_its_id() {
    let n = Negotiation::new();
    let id = HorizontalAlignment::custom(&FIRST_TEXT_KEY).id();
    let other = HorizontalAlignment::custom(&OTHER_KEY).id();
    let view = Rectangle.frame(40.0, 20.0).alignment_guide(id, |s| s.width - 3.0);

    assert_eq!(n.custom(&view, id, Size::new(40.0, 20.0)), Some(37.0));
    assert_eq!(n.custom(&view, other, Size::new(40.0, 20.0)), None);
    assert_eq!(n.custom(&view, HorizontalAlignment::CENTER.id(), Size::new(40.0, 20.0)), None);
}

#[test]
fn test_guides_align_children_across_a_vstack() {
    let n = Negotiation::new();
    let mark = HorizontalAlignment::custom(&FIRST_TEXT_KEY);
    let stack = accord::Stack::vertical(mark)
        .push(Rectangle.frame(100.0, 10.0).alignment_guide(mark.id(), |_| 70.0))
        .push(Rectangle.frame(40.0, 10.0).alignment_guide(mark.id(), |_| 10.0));

    let fills = n.fills(&stack, Size::new(300.0, 100.0));
    assert_eq!(fills.len(), 2);
    assert_eq!(fills[0].x + 70.0, fills[1].x + 10.0);
    // First child on top.
    assert!(fills[0].y > fills[1].y);
}

#[test]
fn test_guide_value_survives_frame_and_overlay() {
    let n = Negotiation::new();
    let id = HorizontalAlignment::custom(&FIRST_TEXT_KEY).id();
    let view = Rectangle
        .frame(20.0, 20.0)
        .alignment_guide(id, |_| 4.0)
        .frame(100.0, 20.0)
        .alignment(Alignment::TRAILING)
        .overlay(Rectangle.frame(5.0, 5.0), Alignment::CENTER);
    // 20-wide child at the trailing edge of 100: offset 80.
    assert_eq!(n.custom(&view, id, Size::new(100.0, 20.0)), Some(84.0));
}

// =========================================================================
// Stacks
// =========================================================================

#[test]
fn test_stack_of_fixed_widths_fits_proposal() {
    let n = Negotiation::new();
    let stack = hstack()
        .push(Rectangle.frame(50.0, 10.0))
        .push(Rectangle.frame(100.0, 25.0))
        .push(Rectangle.frame(150.0, 15.0));
    let size = n.size(&stack, ProposedSize::new(Some(300.0), Some(100.0)));
    assert!(size.width <= 300.0);
    assert_eq!(size.height, 25.0);
}

#[test]
fn test_stack_width_within_proposal_and_monotonic() {
    let n = Negotiation::new();
    let make = || {
        hstack()
            .spacing(4.0)
            .push(Text::new("alpha beta gamma"))
            .push(Rectangle)
            .push(Rectangle.frame_width(60.0))
            .push(Text::new("delta"))
    };

    let mut last = 0.0;
    for width in [150.0, 200.0, 300.0, 450.0, 800.0] {
        let size = n.size(&make(), ProposedSize::new(Some(width), Some(40.0)));
        assert!(size.width <= width + 0.001, "{} > {width}", size.width);
        assert!(size.width >= last);
        last = size.width;
    }
}

#[test]
fn test_vstack_distributes_height() {
    let n = Negotiation::new();
    let stack = vstack().push(Rectangle).push(Rectangle.frame_height(30.0)).push(Rectangle);
    let fills = n.fills(&stack, Size::new(50.0, 130.0));
    let heights: Vec<f32> = fills.iter().map(|r| r.height).collect();
    assert_eq!(heights, vec![50.0, 30.0, 50.0]);
    assert_eq!(fills[0].y, 80.0);
    assert_eq!(fills[2].y, 0.0);
}

// =========================================================================
// Protocol
// =========================================================================

#[test]
fn test_size_is_idempotent() {
    let tree = || {
        hstack()
            .push(Text::new("left side").border(Color::BLUE, 1.0))
            .push(Ellipse.flexible_frame().min_width(20.0).max_width(90.0))
            .frame_height(60.0)
    };
    for n in [Negotiation::new(), Negotiation::without_memo()] {
        let mut cx = LayoutContext::new(&n.config, &MonospaceMeasurer);
        let view = tree();
        let p = ProposedSize::new(Some(240.0), Some(200.0));
        let first = view.size(p, &mut cx).unwrap();
        let second = view.size(p, &mut cx).unwrap();
        assert_eq!(first, second);
        assert_eq!(first, n.size(&tree(), p));
    }
}

#[test]
fn test_memo_hits_on_repeat_queries() {
    let config = LayoutConfig::default();
    let mut cx = LayoutContext::new(&config, &MonospaceMeasurer);
    let stack = hstack().push(Rectangle.frame_width(10.0)).push(Rectangle);

    cx.measure("root", 0, &stack, ProposedSize::new(Some(100.0), Some(10.0))).unwrap();
    let (hits_before, _) = cx.memo().stats();
    cx.measure("root", 0, &stack, ProposedSize::new(Some(100.0), Some(10.0))).unwrap();
    let (hits_after, _) = cx.memo().stats();
    assert_eq!(hits_after, hits_before + 1);
}

#[test]
fn test_sample_scene_reports_its_geometry() {
    let config = LayoutConfig {
        debug_outline: Some((Color::GREEN, 2.0)),
        ..LayoutConfig::default()
    };
    let root = Ellipse
        .frame_width(150.0)
        .flexible_frame()
        .min_width(100.0)
        .max_width(400.0)
        .overlay(
            GeometryReader::new(|size: Size| Text::new(format!("{}x{}", size.width, size.height))),
            Alignment::CENTER,
        )
        .border(Color::BLUE, 2.0)
        .frame(200.0, 300.0)
        .border(Color::YELLOW, 2.0);

    let list = layout(&root, Size::new(800.0, 400.0), &config).unwrap();
    let texts: Vec<&str> = list
        .commands()
        .iter()
        .filter_map(|cmd| match cmd {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(texts, vec!["200x300"]);

    let strokes: Vec<Color> = list
        .commands()
        .iter()
        .filter_map(|cmd| match cmd {
            DrawCommand::Stroke { color, .. } => Some(*color),
            _ => None,
        })
        .collect();
    assert_eq!(strokes, vec![Color::BLUE, Color::YELLOW, Color::GREEN]);

    match &list.commands()[0] {
        // 150-wide ellipse centered in the 200x300 frame, centered in 800x400.
        DrawCommand::Fill { path, color } => {
            assert_eq!(path.bounds(), Some(Rect::new(325.0, 50.0, 150.0, 300.0)));
            assert_eq!(*color, Color::RED);
        }
        other => panic!("expected fill, got {other:?}"),
    }
}

#[test]
fn test_vertical_alignment_constants_are_distinct() {
    assert_ne!(VerticalAlignment::TOP.id(), VerticalAlignment::BOTTOM.id());
    assert_ne!(VerticalAlignment::CENTER.id(), HorizontalAlignment::CENTER.id());
}

/// Leaf that measures fine but refuses to draw.
struct FailingRender;

impl View for FailingRender {
    fn size(&self, _proposed: ProposedSize, _cx: &mut LayoutContext<'_>) -> accord::Result<Size> {
        Ok(Size::new(20.0, 20.0))
    }

    fn render(&self, _cx: &mut LayoutContext<'_>, _canvas: &mut dyn Canvas, _size: Size) -> accord::Result<()> {
        Err(LayoutError::ContractViolation { node: "failing", detail: "render refused".to_string() })
    }
}

#[test]
fn test_render_error_restores_canvas_state() {
    let config = LayoutConfig::default();
    let view = FailingRender
        .frame(40.0, 40.0)
        .foreground_color(Color::BLUE)
        .border(Color::GREEN, 2.0)
        .overlay(Rectangle.frame(10.0, 10.0), Alignment::TOP_LEADING)
        .frame(100.0, 100.0);

    let mut list = DisplayList::new(Color::RED, Color::BLACK);
    let result = layout_into(&view, Size::new(300.0, 200.0), &config, &mut list);
    assert!(matches!(result, Err(LayoutError::ContractViolation { node: "failing", .. })));
    assert_eq!(list.saved_depth(), 0);
    assert_eq!(list.offset(), Point::ORIGIN);
}

#[test]
fn test_render_error_inside_stack_restores_canvas_state() {
    let config = LayoutConfig::default();
    let view = hstack().spacing(5.0).push(Rectangle.frame_width(30.0)).push(FailingRender).frame(200.0, 50.0);

    let mut list = DisplayList::new(Color::RED, Color::BLACK);
    let result = layout_into(&view, Size::new(300.0, 100.0), &config, &mut list);
    assert!(result.is_err());
    assert_eq!(list.len(), 1);
    assert_eq!(list.saved_depth(), 0);
    assert_eq!(list.offset(), Point::ORIGIN);
}
