//! Error types for Trestle operations.
//!
//! This module provides the main error type [`TrestleError`] which wraps the
//! error conditions that can occur while building, rendering or exporting a
//! diagram.

use std::io;

use thiserror::Error;

use trestle_core::diagram::DiagramError;

/// The main error type for Trestle operations.
#[derive(Debug, Error)]
pub enum TrestleError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Diagram error: {0}")]
    Diagram(#[from] DiagramError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Export error: {0}")]
    Export(Box<dyn std::error::Error + Send + Sync>),

    #[error("Window error: {0}")]
    Window(String),
}

impl From<crate::export::Error> for TrestleError {
    fn from(error: crate::export::Error) -> Self {
        Self::Export(Box::new(error))
    }
}
