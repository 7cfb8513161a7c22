//! Export functionality for Trestle canvases.
//!
//! This module provides the [`Exporter`] trait that defines the interface for
//! writing a rendered canvas to an output format.
//!
//! # Available Backends
//!
//! - [`svg`] - SVG output via [`svg::SvgExporter`] and [`svg::SvgSurface`]
//!
//! # Error Handling
//!
//! Export operations return [`Error`], covering rendering failures and I/O
//! errors. [`Error`] converts into [`TrestleError::Export`] at the crate
//! boundary.
//!
//! [`TrestleError::Export`]: crate::TrestleError::Export

/// SVG export backend.
pub mod svg;

use crate::canvas::CanvasView;

/// Abstraction for canvas export backends.
pub trait Exporter {
    /// Renders `canvas` in its current state and writes it out.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Render`] if the canvas cannot be converted to the
    /// target format, or [`Error::Io`] if writing the output fails.
    fn export_canvas(&mut self, canvas: &CanvasView) -> Result<(), Error>;
}

/// Errors that can occur during canvas export.
#[derive(Debug)]
pub enum Error {
    /// A rendering or conversion failure described by `message`.
    Render(String),
    /// An I/O error encountered while writing output.
    Io(std::io::Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Render(msg) => write!(f, "Render error: {msg}"),
            Self::Io(err) => write!(f, "I/O error: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Render(_) => None,
            Self::Io(err) => Some(err),
        }
    }
}
