//! The canvas view: renders a [`Diagram`] onto a [`Surface`] and edits it
//! through pointer events.
//!
//! # Rendering order
//!
//! Each paint issues, back to front:
//!
//! 1. the background fill ([`RenderLayer::Background`]),
//! 2. every edge in definition order: a segment between the endpoint
//!    anchors and a filled arrowhead at the target ([`RenderLayer::Edge`]),
//! 3. every node in definition order: fill, border, centered label
//!    ([`RenderLayer::Node`]).
//!
//! Nodes are therefore always painted over edges.
//!
//! # Repaint tracking
//!
//! The view is dirty when created and after every diagram mutation.
//! [`CanvasView::paint`] renders and clears the flag; hosts poll
//! [`CanvasView::needs_repaint`] to decide whether to schedule a repaint.

use log::{debug, trace, warn};
use serde::Deserialize;

use trestle_core::{
    color::Color,
    diagram::{Diagram, Edge},
    draw::{ArrowDefinition, FontWeight, RenderLayer, StrokeDefinition, Surface, TextDefinition},
    geometry::Point,
};

use crate::interaction::{DragController, DragState};

/// Where edge segments attach to their nodes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeAnchor {
    /// From source center to target center. The arrowhead apex sits on the
    /// target center, under the target node.
    #[default]
    Center,
    /// Clipped to the node rectangles so the arrowhead apex touches the
    /// target's border.
    Border,
}

/// Whether a view reacts to pointer input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InteractionMode {
    /// Pointer events are ignored.
    Static,
    /// Nodes can be dragged.
    #[default]
    Interactive,
}

/// Resolved visual style of a canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct CanvasStyle {
    background: Color,
    node_fill: Color,
    node_border: StrokeDefinition,
    label: TextDefinition,
    arrow: ArrowDefinition,
    edge_anchor: EdgeAnchor,
}

impl Default for CanvasStyle {
    fn default() -> Self {
        let color = |css: &str| Color::new(css).expect("built-in color is valid");

        let mut label = TextDefinition::new();
        label.set_font_family("Arial");
        label.set_font_size(13.0);
        label.set_weight(FontWeight::Bold);
        label.set_color(color("#FFFFFF"));

        Self {
            background: color("#f0f0f0"),
            node_fill: color("#2196F3"),
            node_border: StrokeDefinition::solid(color("#000000"), 2.0),
            label,
            arrow: ArrowDefinition::new(StrokeDefinition::solid(color("#1976D2"), 2.0))
                .with_head_length(15.0),
            edge_anchor: EdgeAnchor::Center,
        }
    }
}

impl CanvasStyle {
    pub fn new(
        background: Color,
        node_fill: Color,
        node_border: StrokeDefinition,
        label: TextDefinition,
        arrow: ArrowDefinition,
        edge_anchor: EdgeAnchor,
    ) -> Self {
        Self {
            background,
            node_fill,
            node_border,
            label,
            arrow,
            edge_anchor,
        }
    }

    pub fn background(&self) -> Color {
        self.background
    }

    pub fn node_fill(&self) -> Color {
        self.node_fill
    }

    pub fn node_border(&self) -> &StrokeDefinition {
        &self.node_border
    }

    pub fn label(&self) -> &TextDefinition {
        &self.label
    }

    pub fn arrow(&self) -> &ArrowDefinition {
        &self.arrow
    }

    pub fn edge_anchor(&self) -> EdgeAnchor {
        self.edge_anchor
    }
}

/// Computes the segment drawn for `edge` in the current diagram state.
pub fn edge_segment(diagram: &Diagram, edge: &Edge, anchor: EdgeAnchor) -> (Point, Point) {
    let (source, target) = diagram.edge_endpoints(edge);
    let (from, to) = (source.center(), target.center());
    match anchor {
        EdgeAnchor::Center => (from, to),
        EdgeAnchor::Border => (
            source.bounds().boundary_point_toward(to),
            target.bounds().boundary_point_toward(from),
        ),
    }
}

/// Draws `diagram` with `style`, back to front.
pub fn render_diagram(diagram: &Diagram, style: &CanvasStyle, surface: &mut dyn Surface) {
    surface.begin_layer(RenderLayer::Background);
    surface.fill_background(style.background);

    surface.begin_layer(RenderLayer::Edge);
    for edge in diagram.edges() {
        let (from, to) = edge_segment(diagram, edge, style.edge_anchor);
        style.arrow.draw(surface, from, to);
    }

    surface.begin_layer(RenderLayer::Node);
    for node in diagram.nodes() {
        let bounds = node.bounds();
        surface.fill_rect(bounds, style.node_fill);
        surface.stroke_rect(bounds, &style.node_border);
        surface.draw_text(bounds, node.label(), &style.label);
    }
}

/// A diagram together with its style, drag state and repaint flag.
#[derive(Debug)]
pub struct CanvasView {
    diagram: Diagram,
    style: CanvasStyle,
    mode: InteractionMode,
    drag: DragController,
    dirty: bool,
}

impl CanvasView {
    /// Creates an interactive view. The view starts dirty.
    pub fn new(diagram: Diagram, style: CanvasStyle) -> Self {
        Self {
            diagram,
            style,
            mode: InteractionMode::default(),
            drag: DragController::new(),
            dirty: true,
        }
    }

    /// Sets the interaction mode (builder style).
    pub fn with_mode(mut self, mode: InteractionMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn diagram(&self) -> &Diagram {
        &self.diagram
    }

    pub fn style(&self) -> &CanvasStyle {
        &self.style
    }

    pub fn mode(&self) -> InteractionMode {
        self.mode
    }

    pub fn drag_state(&self) -> DragState {
        self.drag.state()
    }

    /// Returns `true` when the diagram changed since the last paint.
    pub fn needs_repaint(&self) -> bool {
        self.dirty
    }

    /// Forces the next [`CanvasView::needs_repaint`] to report `true`, e.g.
    /// after the host surface was resized.
    pub fn invalidate(&mut self) {
        self.dirty = true;
    }

    /// Renders the current diagram without touching the repaint flag.
    pub fn render(&self, surface: &mut dyn Surface) {
        render_diagram(&self.diagram, &self.style, surface);
    }

    /// Renders the current diagram and clears the repaint flag.
    pub fn paint(&mut self, surface: &mut dyn Surface) {
        trace!(
            nodes = self.diagram.nodes().len(),
            edges = self.diagram.edges().len();
            "Painting canvas"
        );
        self.render(surface);
        self.dirty = false;
    }

    /// Handles a pointer press. Returns `true` if a drag started.
    pub fn pointer_pressed(&mut self, pointer: Point) -> bool {
        if self.mode == InteractionMode::Static {
            return false;
        }
        self.drag.press(&self.diagram, pointer).is_some()
    }

    /// Handles a pointer move. Returns `true` if a node moved, in which case
    /// the view is now dirty.
    pub fn pointer_moved(&mut self, pointer: Point) -> bool {
        if self.mode == InteractionMode::Static {
            return false;
        }
        match self.drag.move_to(&mut self.diagram, pointer) {
            Ok(moved) => {
                self.dirty |= moved;
                moved
            }
            Err(err) => {
                warn!(err:err; "Dropping drag of a node missing from the diagram");
                self.drag.release();
                false
            }
        }
    }

    /// Handles a pointer release, ending any drag.
    pub fn pointer_released(&mut self) {
        if let Some(node) = self.drag.release() {
            debug!(node:% = node; "Node placed");
        }
    }
}

#[cfg(test)]
mod tests {
    use trestle_core::{
        diagram::DiagramBuilder,
        draw::{DrawCommand, RecordingSurface},
        geometry::{Bounds, Size},
        identifier::NodeId,
    };

    use super::*;

    fn two_nodes() -> Diagram {
        DiagramBuilder::new()
            .with_node_size(Size::new(100.0, 40.0))
            .add_node("s", "Source", Point::new(0.0, 0.0))
            .add_node("t", "Target", Point::new(0.0, 200.0))
            .add_edge("s", "t")
            .build()
            .unwrap()
    }

    #[test]
    fn test_new_view_is_dirty_and_paint_clears() {
        let mut view = CanvasView::new(two_nodes(), CanvasStyle::default());
        assert!(view.needs_repaint());

        view.paint(&mut RecordingSurface::new());
        assert!(!view.needs_repaint());

        view.invalidate();
        assert!(view.needs_repaint());
    }

    #[test]
    fn test_render_does_not_clear_dirty() {
        let view = CanvasView::new(two_nodes(), CanvasStyle::default());
        view.render(&mut RecordingSurface::new());
        assert!(view.needs_repaint());
    }

    #[test]
    fn test_layers_in_back_to_front_order() {
        let view = CanvasView::new(two_nodes(), CanvasStyle::default());
        let mut surface = RecordingSurface::new();
        view.render(&mut surface);

        let background = surface.commands_in(RenderLayer::Background);
        let edges = surface.commands_in(RenderLayer::Edge);
        let nodes = surface.commands_in(RenderLayer::Node);

        assert_eq!(background.len(), 1);
        assert_eq!(edges.len(), 2);
        assert_eq!(nodes.len(), 6);

        let commands = surface.commands();
        assert!(matches!(commands[0], DrawCommand::Background(_)));
        assert!(matches!(commands[1], DrawCommand::Line { .. }));
        assert!(matches!(commands[2], DrawCommand::Polygon { .. }));
        assert!(matches!(commands[3], DrawCommand::FillRect { .. }));
        assert!(matches!(commands[4], DrawCommand::StrokeRect { .. }));
        assert!(matches!(commands[5], DrawCommand::Text { .. }));
    }

    #[test]
    fn test_node_label_drawn_in_node_bounds() {
        let view = CanvasView::new(two_nodes(), CanvasStyle::default());
        let mut surface = RecordingSurface::new();
        view.render(&mut surface);

        let labels: Vec<_> = surface
            .commands()
            .into_iter()
            .filter_map(|c| match c {
                DrawCommand::Text { bounds, content, .. } => Some((*bounds, content.clone())),
                _ => None,
            })
            .collect();

        assert_eq!(
            labels,
            [
                (
                    Bounds::new_from_top_left(Point::new(0.0, 0.0), Size::new(100.0, 40.0)),
                    "Source".to_string()
                ),
                (
                    Bounds::new_from_top_left(Point::new(0.0, 200.0), Size::new(100.0, 40.0)),
                    "Target".to_string()
                ),
            ]
        );
    }

    #[test]
    fn test_center_anchor_segment() {
        let diagram = two_nodes();
        let segment = edge_segment(&diagram, &diagram.edges()[0], EdgeAnchor::Center);
        assert_eq!(segment, (Point::new(50.0, 20.0), Point::new(50.0, 220.0)));
    }

    #[test]
    fn test_border_anchor_segment() {
        let diagram = two_nodes();
        let segment = edge_segment(&diagram, &diagram.edges()[0], EdgeAnchor::Border);
        assert_eq!(segment, (Point::new(50.0, 40.0), Point::new(50.0, 200.0)));
    }

    #[test]
    fn test_drag_marks_dirty_and_moves_edge() {
        let mut view = CanvasView::new(two_nodes(), CanvasStyle::default());
        view.paint(&mut RecordingSurface::new());

        assert!(view.pointer_pressed(Point::new(10.0, 10.0)));
        assert!(!view.needs_repaint());

        assert!(view.pointer_moved(Point::new(310.0, 10.0)));
        assert!(view.needs_repaint());

        let mut surface = RecordingSurface::new();
        view.paint(&mut surface);
        assert_eq!(
            surface.lines(),
            [(Point::new(350.0, 20.0), Point::new(50.0, 220.0))]
        );

        view.pointer_released();
        assert_eq!(view.drag_state(), DragState::Idle);
        assert!(!view.pointer_moved(Point::new(0.0, 0.0)));
        assert!(!view.needs_repaint());
    }

    #[test]
    fn test_static_view_ignores_pointer() {
        let mut view =
            CanvasView::new(two_nodes(), CanvasStyle::default()).with_mode(InteractionMode::Static);
        view.paint(&mut RecordingSurface::new());

        assert!(!view.pointer_pressed(Point::new(10.0, 10.0)));
        assert!(!view.pointer_moved(Point::new(300.0, 300.0)));
        view.pointer_released();

        assert!(!view.needs_repaint());
        assert_eq!(
            view.diagram().node(NodeId::new("s")).unwrap().position(),
            Point::new(0.0, 0.0)
        );
    }

    #[test]
    fn test_default_style_colors() {
        let style = CanvasStyle::default();
        assert_eq!(style.background().to_rgba8(), [0xf0, 0xf0, 0xf0, 0xff]);
        assert_eq!(style.node_fill().to_rgba8(), [0x21, 0x96, 0xf3, 0xff]);
        assert_eq!(style.arrow().stroke().color().to_rgba8(), [0x19, 0x76, 0xd2, 0xff]);
        assert_eq!(style.arrow().stroke().width(), 2.0);
        assert_eq!(style.node_border().width(), 2.0);
        assert_eq!(style.label().weight(), FontWeight::Bold);
        assert_eq!(style.edge_anchor(), EdgeAnchor::Center);
    }
}
