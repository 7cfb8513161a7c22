//! Trestle - render and drag-edit small block diagrams.
//!
//! A diagram is a list of labeled, equally sized rectangular nodes and a list
//! of directed edges between them. This crate renders diagrams onto any
//! [`Surface`](draw::Surface), drives node dragging from pointer events,
//! and exports the result as SVG.
//!
//! # Overview
//!
//! - [`canvas`] - [`CanvasView`]: rendering, repaint tracking, pointer handling
//! - [`interaction`] - the drag state machine
//! - [`config`] - TOML-loadable window and style settings
//! - [`export`] - SVG output
//! - [`demo`] - the built-in `Input → Process → Output` diagram

pub mod canvas;
pub mod config;
pub mod demo;
pub mod export;
pub mod interaction;

mod error;

pub use trestle_core::{color, diagram, draw, geometry, identifier};

pub use canvas::{CanvasStyle, CanvasView, EdgeAnchor, InteractionMode};
pub use error::TrestleError;

use std::path::Path;

use log::info;

use config::AppConfig;
use diagram::Diagram;
use export::Exporter;

/// Builds canvas views and SVG renders from a shared configuration.
///
/// # Examples
///
/// ```rust,no_run
/// use trestle::{CanvasBuilder, InteractionMode, config::AppConfig, demo::demo_diagram};
///
/// let builder = CanvasBuilder::new(AppConfig::default());
/// let diagram = demo_diagram().expect("demo diagram is valid");
///
/// let svg = builder.render_svg(&diagram).expect("Failed to render");
/// assert!(svg.contains("<svg"));
///
/// let view = builder
///     .build_view(diagram, InteractionMode::Interactive)
///     .expect("Failed to build view");
/// assert!(view.needs_repaint());
/// ```
#[derive(Debug, Default)]
pub struct CanvasBuilder {
    config: AppConfig,
}

impl CanvasBuilder {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration this builder was created with.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Creates a view of `diagram` styled by the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`TrestleError::Config`] if the window size or the style
    /// configuration is invalid.
    pub fn build_view(
        &self,
        diagram: Diagram,
        mode: InteractionMode,
    ) -> Result<CanvasView, TrestleError> {
        self.config.window().validate()?;
        let style = self.config.style().resolve()?;
        Ok(CanvasView::new(diagram, style).with_mode(mode))
    }

    /// Renders `diagram` to an SVG string sized like the configured window.
    ///
    /// # Errors
    ///
    /// Returns [`TrestleError::Config`] if the window size or the style
    /// configuration is invalid.
    pub fn render_svg(&self, diagram: &Diagram) -> Result<String, TrestleError> {
        let view = self.build_view(diagram.clone(), InteractionMode::Static)?;
        let document = export::svg::render_document(&view, self.config.window().size());
        info!("SVG rendered successfully");
        Ok(document.to_string())
    }

    /// Renders `diagram` and writes the SVG to `path`.
    ///
    /// # Errors
    ///
    /// Returns [`TrestleError::Config`] for an invalid window size or style and
    /// [`TrestleError::Export`] if the file cannot be written.
    pub fn export_svg(&self, diagram: &Diagram, path: impl AsRef<Path>) -> Result<(), TrestleError> {
        let view = self.build_view(diagram.clone(), InteractionMode::Static)?;
        let mut exporter = export::svg::SvgExporter::new(path, self.config.window().size());
        exporter.export_canvas(&view)?;
        Ok(())
    }
}
