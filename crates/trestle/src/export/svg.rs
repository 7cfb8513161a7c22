//! SVG backend: a [`Surface`] that builds an [`svg::Document`].

use std::{
    fs::File,
    io::Write,
    path::{Path, PathBuf},
};

use log::{debug, error, info};
use svg::{
    Document, Node,
    node::element::{Group, Line, Polygon, Rectangle, Text as SvgText},
};

use trestle_core::{
    apply_stroke,
    color::Color,
    draw::{RenderLayer, StrokeDefinition, Surface, TextDefinition},
    geometry::{Bounds, Point, Size},
};

use crate::{canvas::CanvasView, export};

/// Collects draw calls into an SVG document of a fixed size.
///
/// Calls issued after [`Surface::begin_layer`] are grouped into a
/// `<g data-layer="...">` element; the groups keep issue order.
#[derive(Debug)]
pub struct SvgSurface {
    size: Size,
    document: Document,
    group: Option<Group>,
}

impl SvgSurface {
    pub fn new(size: Size) -> Self {
        let document = Document::new()
            .set("width", size.width())
            .set("height", size.height())
            .set("viewBox", (0.0, 0.0, size.width(), size.height()));
        Self {
            size,
            document,
            group: None,
        }
    }

    /// Finishes the open layer group and returns the document.
    pub fn into_document(mut self) -> Document {
        self.flush_group();
        self.document
    }

    fn flush_group(&mut self) {
        if let Some(group) = self.group.take() {
            self.document.append(group);
        }
    }

    fn add<N>(&mut self, node: N)
    where
        N: Into<Box<dyn Node>>,
    {
        match self.group.as_mut() {
            Some(group) => group.append(node),
            None => self.document.append(node),
        }
    }
}

fn rectangle(bounds: Bounds) -> Rectangle {
    Rectangle::new()
        .set("x", bounds.min_x())
        .set("y", bounds.min_y())
        .set("width", bounds.width())
        .set("height", bounds.height())
}

fn points_attribute(points: &[Point]) -> String {
    points
        .iter()
        .map(|p| format!("{},{}", p.x(), p.y()))
        .collect::<Vec<_>>()
        .join(" ")
}

impl Surface for SvgSurface {
    fn begin_layer(&mut self, layer: RenderLayer) {
        self.flush_group();
        self.group = Some(Group::new().set("data-layer", layer.name()));
    }

    fn fill_background(&mut self, color: Color) {
        let rect = rectangle(Bounds::new_from_top_left(Point::default(), self.size))
            .set("fill", &color)
            .set("fill-opacity", color.alpha())
            .set("stroke", "none");
        self.add(rect);
    }

    fn draw_line(&mut self, from: Point, to: Point, stroke: &StrokeDefinition) {
        let line = Line::new()
            .set("x1", from.x())
            .set("y1", from.y())
            .set("x2", to.x())
            .set("y2", to.y());
        self.add(apply_stroke!(line, stroke));
    }

    fn fill_polygon(&mut self, points: &[Point], color: Color) {
        let polygon = Polygon::new()
            .set("points", points_attribute(points))
            .set("fill", &color)
            .set("fill-opacity", color.alpha())
            .set("stroke", "none");
        self.add(polygon);
    }

    fn fill_rect(&mut self, bounds: Bounds, color: Color) {
        let rect = rectangle(bounds)
            .set("fill", &color)
            .set("fill-opacity", color.alpha())
            .set("stroke", "none");
        self.add(rect);
    }

    fn stroke_rect(&mut self, bounds: Bounds, stroke: &StrokeDefinition) {
        let rect = rectangle(bounds).set("fill", "none");
        self.add(apply_stroke!(rect, stroke));
    }

    fn draw_text(&mut self, bounds: Bounds, content: &str, text: &TextDefinition) {
        let center = bounds.center();
        let label = SvgText::new(content)
            .set("x", center.x())
            .set("y", center.y())
            .set("text-anchor", "middle")
            .set("dominant-baseline", "central")
            .set("font-family", text.font_family())
            .set("font-size", text.font_size())
            .set("font-weight", text.weight().to_svg_value())
            .set("fill", &text.color())
            .set("fill-opacity", text.color().alpha());
        self.add(label);
    }
}

/// Renders `canvas` into an in-memory SVG document of `size`.
pub fn render_document(canvas: &CanvasView, size: Size) -> Document {
    let mut surface = SvgSurface::new(size);
    canvas.render(&mut surface);
    debug!("SVG document rendered");
    surface.into_document()
}

/// Writes rendered canvases to an SVG file.
#[derive(Debug)]
pub struct SvgExporter {
    path: PathBuf,
    size: Size,
}

impl SvgExporter {
    pub fn new(path: impl AsRef<Path>, size: Size) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            size,
        }
    }

    fn write_document(&self, doc: &Document) -> Result<(), export::Error> {
        let file_name = self.path.display().to_string();
        info!(file_name = file_name.as_str(); "Creating SVG file");

        let mut f = File::create(&self.path).map_err(|err| {
            error!(file_name = file_name.as_str(), err:err; "Failed to create SVG file");
            export::Error::Io(err)
        })?;

        write!(f, "{doc}").map_err(|err| {
            error!(file_name = file_name.as_str(), err:err; "Failed to write SVG content");
            export::Error::Io(err)
        })
    }
}

impl export::Exporter for SvgExporter {
    fn export_canvas(&mut self, canvas: &CanvasView) -> Result<(), export::Error> {
        if !(self.size.width() > 0.0 && self.size.height() > 0.0) {
            return Err(export::Error::Render(format!(
                "canvas size must be positive, got {}x{}",
                self.size.width(),
                self.size.height()
            )));
        }
        let doc = render_document(canvas, self.size);
        self.write_document(&doc)
    }
}
