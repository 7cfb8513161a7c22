//! Command-line argument definitions for the Trestle CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Without a subcommand the demo diagram opens in an
//! interactive window.

use clap::{Parser, Subcommand};

/// Command-line arguments for the Trestle diagram viewer
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// What to do; defaults to opening the interactive window
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to configuration file (TOML)
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info", global = true)]
    pub log_level: String,
}

/// Trestle subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Open the demo diagram in a window
    View {
        /// Disable node dragging
        #[arg(long = "static")]
        read_only: bool,
    },

    /// Write the demo diagram to an SVG file
    Export {
        /// Path to the output SVG file
        #[arg(short, long, default_value = "out.svg")]
        output: String,
    },
}

impl Command {
    /// Short description of what the command does, for logs.
    pub fn describe(&self) -> &'static str {
        match self {
            Self::View { read_only: false } => "interactive canvas window",
            Self::View { read_only: true } => "read-only canvas window",
            Self::Export { .. } => "SVG export",
        }
    }
}

impl Default for Command {
    fn default() -> Self {
        Self::View { read_only: false }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_defaults_to_view() {
        let args = Args::try_parse_from(["trestle"]).unwrap();
        assert_eq!(args.command, None);
        assert_eq!(args.command.unwrap_or_default(), Command::View { read_only: false });
        assert_eq!(args.log_level, "info");
    }

    #[test]
    fn test_describe_names_each_mode() {
        assert_eq!(Command::default().describe(), "interactive canvas window");
        assert_eq!(
            Command::View { read_only: true }.describe(),
            "read-only canvas window"
        );
        assert_eq!(
            Command::Export {
                output: "out.svg".to_string()
            }
            .describe(),
            "SVG export"
        );
    }

    #[test]
    fn test_view_static_flag() {
        let args = Args::try_parse_from(["trestle", "view", "--static"]).unwrap();
        assert_eq!(args.command, Some(Command::View { read_only: true }));
    }

    #[test]
    fn test_export_with_global_options_after_subcommand() {
        let args = Args::try_parse_from([
            "trestle",
            "export",
            "-o",
            "diagram.svg",
            "--config",
            "style.toml",
            "--log-level",
            "debug",
        ])
        .unwrap();

        assert_eq!(
            args.command,
            Some(Command::Export {
                output: "diagram.svg".to_string()
            })
        );
        assert_eq!(args.config.as_deref(), Some("style.toml"));
        assert_eq!(args.log_level, "debug");
    }

    #[test]
    fn test_export_default_output() {
        let args = Args::try_parse_from(["trestle", "export"]).unwrap();
        assert_eq!(
            args.command,
            Some(Command::Export {
                output: "out.svg".to_string()
            })
        );
    }
}
