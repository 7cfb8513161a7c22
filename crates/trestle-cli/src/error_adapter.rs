//! Error adapter for converting TrestleError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error types
//! and miette's rich diagnostic formatting used in the CLI.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan};

use trestle::{TrestleError, diagram::DiagramError};

/// Adapter exposing a [`TrestleError`] as a miette diagnostic.
pub struct ErrorAdapter<'a>(pub &'a TrestleError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        std::error::Error::source(self.0)
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            TrestleError::Io(_) => "trestle::io",
            TrestleError::Diagram(_) => "trestle::diagram",
            TrestleError::Config(_) => "trestle::config",
            TrestleError::Export(_) => "trestle::export",
            TrestleError::Window(_) => "trestle::window",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match &self.0 {
            TrestleError::Diagram(DiagramError::DanglingEdge { .. }) => {
                "every edge must connect two nodes added to the same diagram"
            }
            TrestleError::Diagram(DiagramError::DuplicateNode(_)) => {
                "node identifiers must be unique within a diagram"
            }
            TrestleError::Config(_) => {
                "check the file passed with --config, trestle/config.toml, or the user config directory"
            }
            TrestleError::Window(_) => {
                "a graphical session is required; use `trestle export` on headless systems"
            }
            _ => return None,
        };
        Some(Box::new(help))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        None
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}

/// Converts an error into the list of diagnostics to render.
pub fn to_reportables(err: &TrestleError) -> Vec<ErrorAdapter<'_>> {
    vec![ErrorAdapter(err)]
}
