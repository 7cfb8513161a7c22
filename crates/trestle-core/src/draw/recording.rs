//! A [`Surface`] that records every call instead of painting it.
//!
//! Used to assert render order and geometry without a window or an SVG
//! parser.

use crate::{
    color::Color,
    draw::{RenderLayer, StrokeDefinition, Surface, TextDefinition},
    geometry::{Bounds, Point},
};

/// One recorded drawing call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Background(Color),
    Line {
        from: Point,
        to: Point,
        stroke: StrokeDefinition,
    },
    Polygon {
        points: Vec<Point>,
        color: Color,
    },
    FillRect {
        bounds: Bounds,
        color: Color,
    },
    StrokeRect {
        bounds: Bounds,
        stroke: StrokeDefinition,
    },
    Text {
        bounds: Bounds,
        content: String,
        text: TextDefinition,
    },
}

/// Records draw calls in issue order, tagged with the active layer.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    layer: Option<RenderLayer>,
    commands: Vec<(Option<RenderLayer>, DrawCommand)>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded commands in issue order.
    pub fn commands(&self) -> Vec<&DrawCommand> {
        self.commands.iter().map(|(_, command)| command).collect()
    }

    /// Returns the commands issued while `layer` was active.
    pub fn commands_in(&self, layer: RenderLayer) -> Vec<&DrawCommand> {
        self.commands
            .iter()
            .filter(|(l, _)| *l == Some(layer))
            .map(|(_, command)| command)
            .collect()
    }

    /// Returns the recorded line segments as `(from, to)` pairs.
    pub fn lines(&self) -> Vec<(Point, Point)> {
        self.commands
            .iter()
            .filter_map(|(_, command)| match command {
                DrawCommand::Line { from, to, .. } => Some((*from, *to)),
                _ => None,
            })
            .collect()
    }

    /// Returns the bounds of every filled rectangle.
    pub fn filled_rects(&self) -> Vec<Bounds> {
        self.commands
            .iter()
            .filter_map(|(_, command)| match command {
                DrawCommand::FillRect { bounds, .. } => Some(*bounds),
                _ => None,
            })
            .collect()
    }

    /// Returns the drawn text strings in issue order.
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|(_, command)| match command {
                DrawCommand::Text { content, .. } => Some(content.as_str()),
                _ => None,
            })
            .collect()
    }

    fn push(&mut self, command: DrawCommand) {
        self.commands.push((self.layer, command));
    }
}

impl Surface for RecordingSurface {
    fn begin_layer(&mut self, layer: RenderLayer) {
        self.layer = Some(layer);
    }

    fn fill_background(&mut self, color: Color) {
        self.push(DrawCommand::Background(color));
    }

    fn draw_line(&mut self, from: Point, to: Point, stroke: &StrokeDefinition) {
        self.push(DrawCommand::Line {
            from,
            to,
            stroke: stroke.clone(),
        });
    }

    fn fill_polygon(&mut self, points: &[Point], color: Color) {
        self.push(DrawCommand::Polygon {
            points: points.to_vec(),
            color,
        });
    }

    fn fill_rect(&mut self, bounds: Bounds, color: Color) {
        self.push(DrawCommand::FillRect { bounds, color });
    }

    fn stroke_rect(&mut self, bounds: Bounds, stroke: &StrokeDefinition) {
        self.push(DrawCommand::StrokeRect {
            bounds,
            stroke: stroke.clone(),
        });
    }

    fn draw_text(&mut self, bounds: Bounds, content: &str, text: &TextDefinition) {
        self.push(DrawCommand::Text {
            bounds,
            content: content.to_string(),
            text: text.clone(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Size;

    #[test]
    fn test_records_in_order_with_layers() {
        let mut surface = RecordingSurface::new();
        surface.fill_background(Color::default());
        surface.begin_layer(RenderLayer::Node);
        let bounds = Bounds::new_from_top_left(Point::new(1.0, 2.0), Size::new(3.0, 4.0));
        surface.fill_rect(bounds, Color::default());
        surface.draw_text(bounds, "hi", &TextDefinition::default());

        assert_eq!(surface.commands().len(), 3);
        assert_eq!(surface.commands_in(RenderLayer::Node).len(), 2);
        assert_eq!(surface.filled_rects(), [bounds]);
        assert_eq!(surface.texts(), ["hi"]);
    }
}
