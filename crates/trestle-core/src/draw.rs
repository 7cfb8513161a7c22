//! Drawing-surface abstraction and visual definitions.
//!
//! Renderers never talk to a concrete backend. They issue primitive calls on a
//! [`Surface`]: filled rectangles, rectangle borders, line segments, filled
//! polygons and centered text. Backends (an SVG document, a window painter, a
//! [`RecordingSurface`] in tests) implement the trait.
//!
//! Calls are painted in the order they are issued; later calls cover earlier
//! ones. [`Surface::begin_layer`] tags the calls that follow with a
//! [`RenderLayer`] so backends can group them.
mod arrow;
mod layer;
mod recording;
mod stroke;
mod text;

pub use arrow::ArrowDefinition;
pub use layer::RenderLayer;
pub use recording::{DrawCommand, RecordingSurface};
pub use stroke::{StrokeDefinition, StrokeStyle};
pub use text::{FontWeight, TextDefinition};

use crate::{
    color::Color,
    geometry::{Bounds, Point},
};

/// A 2D target for diagram primitives.
pub trait Surface {
    /// Marks the start of a layer. Every call until the next `begin_layer`
    /// belongs to `layer`.
    fn begin_layer(&mut self, _layer: RenderLayer) {}

    /// Fills the whole drawing area with `color`.
    fn fill_background(&mut self, color: Color);

    /// Draws a straight segment from `from` to `to`.
    fn draw_line(&mut self, from: Point, to: Point, stroke: &StrokeDefinition);

    /// Fills the closed polygon through `points`.
    fn fill_polygon(&mut self, points: &[Point], color: Color);

    /// Fills the rectangle `bounds`.
    fn fill_rect(&mut self, bounds: Bounds, color: Color);

    /// Strokes the outline of the rectangle `bounds`.
    fn stroke_rect(&mut self, bounds: Bounds, stroke: &StrokeDefinition);

    /// Draws `content` centered horizontally and vertically within `bounds`.
    fn draw_text(&mut self, bounds: Bounds, content: &str, text: &TextDefinition);
}
