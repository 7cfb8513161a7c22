//! [`Surface`] implementation over an egui painter.
//!
//! Diagram coordinates are pixels relative to the top-left corner of the
//! canvas rectangle allocated by the window.

use eframe::egui::{
    Align2, Color32, FontId, Painter, Pos2, Rect, Shape, Stroke, StrokeKind, Vec2,
};

use trestle::{
    color::Color,
    draw::{StrokeDefinition, StrokeStyle, Surface, TextDefinition},
    geometry::{Bounds, Point},
};

pub struct EguiSurface<'a> {
    painter: &'a Painter,
    canvas: Rect,
}

impl<'a> EguiSurface<'a> {
    pub fn new(painter: &'a Painter, canvas: Rect) -> Self {
        Self { painter, canvas }
    }

    fn to_screen(&self, point: Point) -> Pos2 {
        self.canvas.min + Vec2::new(point.x(), point.y())
    }

    fn to_screen_rect(&self, bounds: Bounds) -> Rect {
        Rect::from_min_max(
            self.to_screen(bounds.min_point()),
            self.to_screen(bounds.max_point()),
        )
    }
}

/// Converts a screen position inside `canvas` to diagram coordinates.
pub fn to_canvas(canvas: Rect, pos: Pos2) -> Point {
    let offset = pos - canvas.min;
    Point::new(offset.x, offset.y)
}

pub fn to_color32(color: Color) -> Color32 {
    let [r, g, b, a] = color.to_rgba8();
    Color32::from_rgba_unmultiplied(r, g, b, a)
}

fn to_stroke(stroke: &StrokeDefinition) -> Stroke {
    Stroke::new(stroke.width(), to_color32(stroke.color()))
}

impl Surface for EguiSurface<'_> {
    fn fill_background(&mut self, color: Color) {
        self.painter.rect_filled(self.canvas, 0.0, to_color32(color));
    }

    fn draw_line(&mut self, from: Point, to: Point, stroke: &StrokeDefinition) {
        let points = [self.to_screen(from), self.to_screen(to)];
        let egui_stroke = to_stroke(stroke);
        match stroke.style() {
            StrokeStyle::Solid => {
                self.painter.line_segment(points, egui_stroke);
            }
            StrokeStyle::Dashed => {
                self.painter
                    .extend(Shape::dashed_line(&points, egui_stroke, 5.0, 5.0));
            }
            StrokeStyle::Dotted => {
                self.painter
                    .extend(Shape::dashed_line(&points, egui_stroke, 2.0, 3.0));
            }
        }
    }

    fn fill_polygon(&mut self, points: &[Point], color: Color) {
        let points = points.iter().map(|p| self.to_screen(*p)).collect();
        self.painter.add(Shape::convex_polygon(
            points,
            to_color32(color),
            Stroke::NONE,
        ));
    }

    fn fill_rect(&mut self, bounds: Bounds, color: Color) {
        self.painter
            .rect_filled(self.to_screen_rect(bounds), 0.0, to_color32(color));
    }

    fn stroke_rect(&mut self, bounds: Bounds, stroke: &StrokeDefinition) {
        self.painter.rect_stroke(
            self.to_screen_rect(bounds),
            0.0,
            to_stroke(stroke),
            StrokeKind::Middle,
        );
    }

    // egui's default fonts have no family lookup by name or bold face, so only
    // size and color carry over.
    fn draw_text(&mut self, bounds: Bounds, content: &str, text: &TextDefinition) {
        self.painter.text(
            self.to_screen(bounds.center()),
            Align2::CENTER_CENTER,
            content,
            FontId::proportional(text.font_size()),
            to_color32(text.color()),
        );
    }
}
