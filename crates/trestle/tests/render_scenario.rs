//! End-to-end rendering checks against the built-in pipeline diagram.

use float_cmp::assert_approx_eq;

use trestle::{
    CanvasBuilder, CanvasStyle, CanvasView, EdgeAnchor, InteractionMode, TrestleError,
    config::AppConfig,
    demo::demo_diagram,
    diagram::DiagramBuilder,
    draw::{DrawCommand, RecordingSurface, RenderLayer},
    geometry::{Bounds, Point, Size},
    identifier::NodeId,
};

fn demo_view() -> CanvasView {
    CanvasView::new(demo_diagram().unwrap(), CanvasStyle::default())
}

/// Returns the x-ranges of `line` (horizontal) that no rectangle covers.
fn uncovered_span(line: (Point, Point), rects: &[Bounds]) -> (f32, f32) {
    let (from, to) = line;
    let mut start = from.x().min(to.x());
    let mut end = from.x().max(to.x());
    for rect in rects {
        if rect.min_x() <= start && rect.max_x() >= start {
            start = rect.max_x();
        }
        if rect.min_x() <= end && rect.max_x() >= end {
            end = rect.min_x();
        }
    }
    (start, end)
}

#[test]
fn test_demo_renders_three_rectangles_at_their_origins() {
    let mut surface = RecordingSurface::new();
    demo_view().render(&mut surface);

    let rects = surface.filled_rects();
    let expected = [(50.0, 100.0), (300.0, 100.0), (550.0, 100.0)];
    assert_eq!(rects.len(), expected.len());
    for (rect, (x, y)) in rects.iter().zip(expected) {
        assert_approx_eq!(f32, rect.min_x(), x);
        assert_approx_eq!(f32, rect.min_y(), y);
        assert_approx_eq!(f32, rect.max_x(), x + 150.0);
        assert_approx_eq!(f32, rect.max_y(), y + 60.0);
    }

    assert_eq!(surface.texts(), ["Input", "Process", "Output"]);
}

#[test]
fn test_demo_renders_two_rightward_arrows_at_y_130() {
    let mut surface = RecordingSurface::new();
    demo_view().render(&mut surface);

    let lines = surface.lines();
    assert_eq!(
        lines,
        [
            (Point::new(125.0, 130.0), Point::new(375.0, 130.0)),
            (Point::new(375.0, 130.0), Point::new(625.0, 130.0)),
        ]
    );

    // Nodes paint over the segment ends, leaving the gaps between boxes visible.
    let rects = surface.filled_rects();
    let (start, end) = uncovered_span(lines[0], &rects);
    assert_approx_eq!(f32, start, 200.0);
    assert_approx_eq!(f32, end, 300.0);
    let (start, end) = uncovered_span(lines[1], &rects);
    assert_approx_eq!(f32, start, 450.0);
    assert_approx_eq!(f32, end, 550.0);

    for command in surface.commands_in(RenderLayer::Edge) {
        if let DrawCommand::Polygon { points, .. } = command {
            // Apex on the target center; both base vertices behind it.
            assert_eq!(points[0].y(), 130.0);
            assert!(points[1].x() < points[0].x());
            assert!(points[2].x() < points[0].x());
        }
    }
}

#[test]
fn test_border_anchor_makes_arrowheads_touch_target_border() {
    let config: AppConfig = toml::from_str("[style]\nedge_anchor = \"border\"\n").unwrap();
    let view = CanvasBuilder::new(config)
        .build_view(demo_diagram().unwrap(), InteractionMode::Static)
        .unwrap();
    assert_eq!(view.style().edge_anchor(), EdgeAnchor::Border);

    let mut surface = RecordingSurface::new();
    view.render(&mut surface);

    let expected = [(200.0, 300.0), (450.0, 550.0)];
    let lines = surface.lines();
    assert_eq!(lines.len(), expected.len());
    for ((from, to), (x1, x2)) in lines.into_iter().zip(expected) {
        assert_approx_eq!(f32, from.x(), x1, epsilon = 1e-3);
        assert_approx_eq!(f32, to.x(), x2, epsilon = 1e-3);
        assert_approx_eq!(f32, from.y(), 130.0);
        assert_approx_eq!(f32, to.y(), 130.0);
    }
}

#[test]
fn test_node_covering_edge_midpoint_is_painted_after_edge() {
    let diagram = DiagramBuilder::new()
        .add_node("a", "A", Point::new(0.0, 0.0))
        .add_node("b", "B", Point::new(600.0, 0.0))
        // Center (375, 30) is the midpoint of a→b.
        .add_node("cover", "Cover", Point::new(300.0, 0.0))
        .add_edge("a", "b")
        .build()
        .unwrap();
    let view = CanvasView::new(diagram, CanvasStyle::default());

    let mut surface = RecordingSurface::new();
    view.render(&mut surface);
    let commands = surface.commands();

    let line_index = commands
        .iter()
        .position(|c| matches!(c, DrawCommand::Line { .. }))
        .unwrap();
    let cover_index = commands
        .iter()
        .position(|c| {
            matches!(c, DrawCommand::FillRect { bounds, .. }
                if bounds.contains(Point::new(375.0, 30.0)))
        })
        .unwrap();
    assert!(line_index < cover_index);
}

#[test]
fn test_rerender_after_drag_uses_new_centers() {
    let mut view = demo_view();
    view.paint(&mut RecordingSurface::new());

    // Grab Process 10px right and 10px below its corner, drop it lower.
    assert!(view.pointer_pressed(Point::new(310.0, 110.0)));
    assert!(view.pointer_moved(Point::new(310.0, 410.0)));
    view.pointer_released();
    assert!(view.needs_repaint());

    let mut surface = RecordingSurface::new();
    view.paint(&mut surface);

    assert_eq!(
        surface.lines(),
        [
            (Point::new(125.0, 130.0), Point::new(375.0, 430.0)),
            (Point::new(375.0, 430.0), Point::new(625.0, 130.0)),
        ]
    );
    let process = view.diagram().node(NodeId::new("node2")).unwrap();
    assert_eq!(process.position(), Point::new(300.0, 400.0));
    assert_eq!(
        view.diagram().node(NodeId::new("node1")).unwrap().position(),
        Point::new(50.0, 100.0)
    );
}

#[test]
fn test_press_exactly_on_left_edge_hits_one_unit_outside_misses() {
    let mut view = demo_view();
    assert!(!view.pointer_pressed(Point::new(49.0, 130.0)));
    assert!(view.pointer_pressed(Point::new(50.0, 130.0)));
}

#[test]
fn test_render_svg_uses_window_size() {
    let builder = CanvasBuilder::default();
    let svg = builder.render_svg(&demo_diagram().unwrap()).unwrap();
    assert!(svg.contains("width=\"900\""));
    assert!(svg.contains("height=\"700\""));
    assert!(svg.contains("Process"));
}

#[test]
fn test_render_svg_rejects_degenerate_window_size() {
    let config: AppConfig = toml::from_str("[window]\nwidth = -10.0\nheight = 0.0\n").unwrap();
    let builder = CanvasBuilder::new(config);

    let result = builder.render_svg(&demo_diagram().unwrap());
    assert!(matches!(result, Err(TrestleError::Config(_))));
}

#[test]
fn test_export_svg_rejects_degenerate_window_size_before_writing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("never.svg");
    let config: AppConfig = toml::from_str("[window]\nheight = nan\n").unwrap();

    let result = CanvasBuilder::new(config).export_svg(&demo_diagram().unwrap(), &path);
    assert!(matches!(result, Err(TrestleError::Config(_))));
    assert!(!path.exists());
}

#[test]
fn test_dashed_edge_style_reaches_svg() {
    let config: AppConfig = toml::from_str("[style]\nedge_style = \"dashed\"\n").unwrap();
    let svg = CanvasBuilder::new(config)
        .render_svg(&demo_diagram().unwrap())
        .unwrap();

    assert_eq!(svg.matches("stroke-dasharray=\"5,5\"").count(), 2);
}

#[test]
fn test_export_svg_writes_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("demo.svg");

    CanvasBuilder::default()
        .export_svg(&demo_diagram().unwrap(), &path)
        .unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.starts_with("<svg"));
    assert!(content.contains("Output"));
}

#[test]
fn test_export_svg_into_missing_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("demo.svg");

    let result = CanvasBuilder::default().export_svg(&demo_diagram().unwrap(), &path);
    assert!(matches!(result, Err(TrestleError::Export(_))));
}

#[test]
fn test_invalid_style_surfaces_config_error() {
    let config: AppConfig = toml::from_str("[style]\nbackground_color = \"nope\"\n").unwrap();
    let result = CanvasBuilder::new(config).render_svg(&demo_diagram().unwrap());
    assert!(matches!(result, Err(TrestleError::Config(_))));
}

#[test]
fn test_canvas_size_does_not_clip_model() {
    // The model keeps positions outside the canvas; only the surface clips.
    let mut view = demo_view();
    view.pointer_pressed(Point::new(60.0, 110.0));
    view.pointer_moved(Point::new(2000.0, 2000.0));
    let node = view.diagram().node(NodeId::new("node1")).unwrap();
    assert_eq!(node.bounds().to_size(), Size::new(150.0, 60.0));
    assert_eq!(node.position(), Point::new(1990.0, 1990.0));
}
