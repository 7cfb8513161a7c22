//! Arrow geometry and drawing.
//!
//! An arrow is a straight segment plus a filled isosceles triangle whose apex
//! sits on the segment's end point:
//!
//! ```text
//!                       left
//!                        \
//!   from ─────────────────▶ to (apex)
//!                        /
//!                       right
//! ```
//!
//! Both base vertices lie `head_length` away from the apex, at
//! `±head_angle` from the direction of the segment.

use std::f32::consts::FRAC_PI_6;

use crate::{
    draw::{StrokeDefinition, Surface},
    geometry::Point,
};

/// Visual definition of a directed arrow.
#[derive(Debug, Clone, PartialEq)]
pub struct ArrowDefinition {
    stroke: StrokeDefinition,
    head_length: f32,
    head_angle: f32,
}

impl Default for ArrowDefinition {
    /// 1px black line, 15px head at ±30°.
    fn default() -> Self {
        Self {
            stroke: StrokeDefinition::default(),
            head_length: 15.0,
            head_angle: FRAC_PI_6,
        }
    }
}

impl ArrowDefinition {
    /// Creates an arrow definition with the given stroke and default head.
    pub fn new(stroke: StrokeDefinition) -> Self {
        Self {
            stroke,
            ..Self::default()
        }
    }

    /// Sets the distance from the apex to each base vertex (builder style).
    pub fn with_head_length(mut self, head_length: f32) -> Self {
        self.head_length = head_length;
        self
    }

    /// Returns the line stroke; the head is filled with the same color.
    pub fn stroke(&self) -> &StrokeDefinition {
        &self.stroke
    }

    pub fn head_length(&self) -> f32 {
        self.head_length
    }

    /// Returns the half-angle of the head, in radians.
    pub fn head_angle(&self) -> f32 {
        self.head_angle
    }

    /// Computes the arrowhead triangle `[apex, left, right]` for a segment
    /// running from `from` to `to`.
    ///
    /// When both points coincide the direction angle is zero, so the head
    /// points right.
    pub fn head(&self, from: Point, to: Point) -> [Point; 3] {
        let direction = to.sub_point(from);
        let angle = direction.y().atan2(direction.x());

        let base = |offset: f32| {
            let theta = angle + offset;
            Point::new(
                to.x() - self.head_length * theta.cos(),
                to.y() - self.head_length * theta.sin(),
            )
        };

        [to, base(-self.head_angle), base(self.head_angle)]
    }

    /// Draws the segment and its filled head onto `surface`.
    pub fn draw(&self, surface: &mut dyn Surface, from: Point, to: Point) {
        surface.draw_line(from, to, &self.stroke);
        surface.fill_polygon(&self.head(from, to), self.stroke.color());
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;
    use crate::draw::{DrawCommand, RecordingSurface};

    #[test]
    fn test_head_rightward() {
        let arrow = ArrowDefinition::default();
        let [apex, left, right] = arrow.head(Point::new(0.0, 0.0), Point::new(100.0, 0.0));

        assert_eq!(apex, Point::new(100.0, 0.0));

        let dx = 15.0 * FRAC_PI_6.cos();
        let dy = 15.0 * FRAC_PI_6.sin();
        assert_approx_eq!(f32, left.x(), 100.0 - dx, epsilon = 1e-4);
        assert_approx_eq!(f32, left.y(), dy, epsilon = 1e-4);
        assert_approx_eq!(f32, right.x(), 100.0 - dx, epsilon = 1e-4);
        assert_approx_eq!(f32, right.y(), -dy, epsilon = 1e-4);
    }

    #[test]
    fn test_head_is_isosceles_for_any_direction() {
        let arrow = ArrowDefinition::default().with_head_length(20.0);
        for to in [
            Point::new(-30.0, 40.0),
            Point::new(0.0, -10.0),
            Point::new(7.0, 7.0),
        ] {
            let [apex, left, right] = arrow.head(Point::new(0.0, 0.0), to);
            let length = |p: Point| {
                let d = p.sub_point(apex);
                d.x().hypot(d.y())
            };
            assert_approx_eq!(f32, length(left), 20.0, epsilon = 1e-3);
            assert_approx_eq!(f32, length(right), 20.0, epsilon = 1e-3);
        }
    }

    #[test]
    fn test_head_for_degenerate_segment_points_right() {
        let arrow = ArrowDefinition::default();
        let p = Point::new(5.0, 5.0);
        let [_, left, right] = arrow.head(p, p);
        assert!(left.x() < 5.0);
        assert!(right.x() < 5.0);
    }

    #[test]
    fn test_draw_emits_line_then_head() {
        let arrow = ArrowDefinition::default();
        let mut surface = RecordingSurface::new();
        arrow.draw(&mut surface, Point::new(0.0, 0.0), Point::new(10.0, 0.0));

        let commands = surface.commands();
        assert_eq!(commands.len(), 2);
        assert!(matches!(commands[0], DrawCommand::Line { .. }));
        assert!(matches!(&commands[1], DrawCommand::Polygon { points, .. } if points.len() == 3));
    }
}
