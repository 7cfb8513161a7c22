//! CLI logic for the Trestle diagram viewer.
//!
//! `trestle view` opens the demo diagram in a window where its nodes can be
//! dragged; `trestle export` writes the same render to an SVG file.

pub mod app;
pub mod error_adapter;

mod args;
mod config;
mod painter;

pub use args::{Args, Command};

use log::info;

use trestle::{CanvasBuilder, InteractionMode, TrestleError, demo::demo_diagram};

use app::AppContext;

/// Run the Trestle CLI application
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `TrestleError` for:
/// - Configuration loading errors
/// - Invalid style settings
/// - Window creation errors
/// - Export errors
pub fn run(args: &Args) -> Result<(), TrestleError> {
    let app_config = config::load_config(args.config.as_ref())?;
    let diagram = demo_diagram()?;

    match args.command.clone().unwrap_or_default() {
        Command::View { read_only } => {
            let mode = if read_only {
                InteractionMode::Static
            } else {
                InteractionMode::Interactive
            };
            AppContext::new(app_config, diagram, mode)?.run()
        }
        Command::Export { output } => {
            info!(output_path = output.as_str(); "Exporting diagram");
            CanvasBuilder::new(app_config).export_svg(&diagram, &output)?;
            info!(output_file = output.as_str(); "SVG exported successfully");
            Ok(())
        }
    }
}
