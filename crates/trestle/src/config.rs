//! Configuration types for Trestle rendering.
//!
//! All types implement [`serde::Deserialize`] so they can be loaded from TOML.
//! Every field is optional; missing values fall back to the built-in demo
//! look (light grey canvas, blue boxes with black borders and white bold
//! labels, blue arrows).
//!
//! - [`AppConfig`] - Top-level configuration combining window and style settings.
//! - [`WindowConfig`] - Window title and canvas size.
//! - [`StyleConfig`] - Colors, stroke widths, label font and arrow shape.
//!
//! # Example
//!
//! ```
//! # use trestle::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.window().width(), 900.0);
//! assert!(config.style().resolve().is_ok());
//! ```

use serde::Deserialize;

use trestle_core::{
    color::Color,
    draw::{ArrowDefinition, FontWeight, StrokeDefinition, StrokeStyle},
    geometry::Size,
};

use crate::{
    TrestleError,
    canvas::{CanvasStyle, EdgeAnchor},
};

const DEFAULT_WIDTH: f32 = 900.0;
const DEFAULT_HEIGHT: f32 = 700.0;
const DEFAULT_TITLE: &str = "Trestle Canvas Demo";

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Window configuration section.
    #[serde(default)]
    window: WindowConfig,

    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    pub fn new(window: WindowConfig, style: StyleConfig) -> Self {
        Self { window, style }
    }

    /// Returns the window configuration.
    pub fn window(&self) -> &WindowConfig {
        &self.window
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }
}

/// Window title and logical canvas size.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WindowConfig {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    width: Option<f32>,
    #[serde(default)]
    height: Option<f32>,
}

impl WindowConfig {
    /// Returns the window title, "Trestle Canvas Demo" by default.
    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or(DEFAULT_TITLE)
    }

    /// Returns the window width, 900 by default.
    pub fn width(&self) -> f32 {
        self.width.unwrap_or(DEFAULT_WIDTH)
    }

    /// Returns the window height, 700 by default.
    pub fn height(&self) -> f32 {
        self.height.unwrap_or(DEFAULT_HEIGHT)
    }

    /// Returns the canvas size as a [`Size`].
    pub fn size(&self) -> Size {
        Size::new(self.width(), self.height())
    }

    /// Checks that the window has a positive, finite width and height.
    ///
    /// # Errors
    ///
    /// Returns [`TrestleError::Config`] naming the first offending field.
    pub fn validate(&self) -> Result<(), TrestleError> {
        for (field, value) in [("width", self.width()), ("height", self.height())] {
            if !(value.is_finite() && value > 0.0) {
                return Err(TrestleError::Config(format!(
                    "window.{field}: expected a positive number, got {value}"
                )));
            }
        }
        Ok(())
    }
}

/// Visual styling configuration for rendered diagrams.
///
/// Color fields accept any CSS color string.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StyleConfig {
    #[serde(default)]
    background_color: Option<String>,
    #[serde(default)]
    node_fill_color: Option<String>,
    #[serde(default)]
    node_border_color: Option<String>,
    #[serde(default)]
    node_border_width: Option<f32>,
    #[serde(default)]
    node_border_style: Option<String>,
    #[serde(default)]
    label_color: Option<String>,
    #[serde(default)]
    label_font_family: Option<String>,
    #[serde(default)]
    label_font_size: Option<f32>,
    #[serde(default)]
    label_font_weight: Option<String>,
    #[serde(default)]
    edge_color: Option<String>,
    #[serde(default)]
    edge_width: Option<f32>,
    #[serde(default)]
    edge_style: Option<String>,
    #[serde(default)]
    arrow_length: Option<f32>,
    #[serde(default)]
    edge_anchor: Option<EdgeAnchor>,
}

impl StyleConfig {
    /// Resolves this configuration into a [`CanvasStyle`], filling unset
    /// fields from [`CanvasStyle::default`].
    ///
    /// # Errors
    ///
    /// Returns [`TrestleError::Config`] if a color or font weight cannot be
    /// parsed, or a width, size or length is negative or not finite.
    pub fn resolve(&self) -> Result<CanvasStyle, TrestleError> {
        let defaults = CanvasStyle::default();

        let background = parse_color("background_color", self.background_color.as_deref())?
            .unwrap_or(defaults.background());
        let node_fill = parse_color("node_fill_color", self.node_fill_color.as_deref())?
            .unwrap_or(defaults.node_fill());

        let mut node_border = defaults.node_border().clone();
        if let Some(color) = parse_color("node_border_color", self.node_border_color.as_deref())? {
            node_border.set_color(color);
        }
        if let Some(width) = parse_length("node_border_width", self.node_border_width)? {
            node_border.set_width(width);
        }
        if let Some(style) = parse_stroke_style("node_border_style", self.node_border_style.as_deref())? {
            node_border.set_style(style);
        }

        let mut label = defaults.label().clone();
        if let Some(color) = parse_color("label_color", self.label_color.as_deref())? {
            label.set_color(color);
        }
        if let Some(family) = &self.label_font_family {
            label.set_font_family(family);
        }
        if let Some(size) = parse_length("label_font_size", self.label_font_size)? {
            label.set_font_size(size);
        }
        if let Some(weight) = &self.label_font_weight {
            let weight = weight
                .parse::<FontWeight>()
                .map_err(|err| TrestleError::Config(format!("label_font_weight: {err}")))?;
            label.set_weight(weight);
        }

        let mut edge_stroke: StrokeDefinition = defaults.arrow().stroke().clone();
        if let Some(color) = parse_color("edge_color", self.edge_color.as_deref())? {
            edge_stroke.set_color(color);
        }
        if let Some(width) = parse_length("edge_width", self.edge_width)? {
            edge_stroke.set_width(width);
        }
        if let Some(style) = parse_stroke_style("edge_style", self.edge_style.as_deref())? {
            edge_stroke.set_style(style);
        }
        let arrow_length = parse_length("arrow_length", self.arrow_length)?
            .unwrap_or(defaults.arrow().head_length());
        let arrow = ArrowDefinition::new(edge_stroke).with_head_length(arrow_length);

        let edge_anchor = self.edge_anchor.unwrap_or(defaults.edge_anchor());

        Ok(CanvasStyle::new(
            background,
            node_fill,
            node_border,
            label,
            arrow,
            edge_anchor,
        ))
    }
}

fn parse_color(field: &str, value: Option<&str>) -> Result<Option<Color>, TrestleError> {
    value
        .map(Color::new)
        .transpose()
        .map_err(|err| TrestleError::Config(format!("{field}: {err}")))
}

fn parse_stroke_style(field: &str, value: Option<&str>) -> Result<Option<StrokeStyle>, TrestleError> {
    value
        .map(str::parse::<StrokeStyle>)
        .transpose()
        .map_err(|err| TrestleError::Config(format!("{field}: {err}")))
}

fn parse_length(field: &str, value: Option<f32>) -> Result<Option<f32>, TrestleError> {
    match value {
        Some(v) if !v.is_finite() || v < 0.0 => Err(TrestleError::Config(format!(
            "{field}: expected a non-negative number, got {v}"
        ))),
        other => Ok(other),
    }
}
