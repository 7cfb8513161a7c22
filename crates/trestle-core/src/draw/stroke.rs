//! Stroke and line-style definitions.
//!
//! # SVG Attribute Mapping
//!
//! | Rust Property | SVG Attribute | Example Values |
//! |--------------|---------------|----------------|
//! | `color` | `stroke`, `stroke-opacity` | `"#000000"`, `0.5` |
//! | `width` | `stroke-width` | `2.0` |
//! | `style` | `stroke-dasharray` | `"5,5"`, `"2,3"` |

use std::str::FromStr;

use crate::color::Color;

/// Defines the visual pattern of a stroke.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum StrokeStyle {
    /// Solid continuous line (default)
    #[default]
    Solid,
    /// Dashed line (5px dash, 5px gap)
    Dashed,
    /// Dotted line (2px dot, 3px gap)
    Dotted,
}

impl FromStr for StrokeStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "solid" => Ok(Self::Solid),
            "dashed" => Ok(Self::Dashed),
            "dotted" => Ok(Self::Dotted),
            _ => Err(format!(
                "invalid stroke style `{s}`, valid values: solid, dashed, dotted"
            )),
        }
    }
}

impl StrokeStyle {
    /// Returns the SVG dasharray value for this style, or None for solid lines
    pub fn to_svg_value(self) -> Option<&'static str> {
        match self {
            Self::Solid => None,
            Self::Dashed => Some("5,5"),
            Self::Dotted => Some("2,3"),
        }
    }
}

/// A stroke definition for rendering lines and borders.
///
/// # Examples
///
/// ```
/// use trestle_core::draw::{StrokeDefinition, StrokeStyle};
/// use trestle_core::color::Color;
///
/// let stroke = StrokeDefinition::solid(Color::new("black").unwrap(), 2.0);
/// assert_eq!(stroke.style(), StrokeStyle::Solid);
///
/// let mut stroke = StrokeDefinition::new(Color::new("red").unwrap(), 1.0);
/// stroke.set_style(StrokeStyle::Dashed);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeDefinition {
    color: Color,
    width: f32,
    style: StrokeStyle,
}

impl StrokeDefinition {
    /// Creates a new solid stroke with the given color and width.
    pub fn new(color: Color, width: f32) -> Self {
        Self {
            color,
            width,
            style: StrokeStyle::Solid,
        }
    }

    /// Creates a solid stroke (convenience constructor).
    pub fn solid(color: Color, width: f32) -> Self {
        Self::new(color, width)
    }

    /// Returns the stroke color.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Returns the stroke width.
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Returns the stroke style.
    pub fn style(&self) -> StrokeStyle {
        self.style
    }

    /// Sets the stroke color.
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    /// Sets the stroke width.
    pub fn set_width(&mut self, width: f32) {
        self.width = width;
    }

    /// Sets the stroke style.
    pub fn set_style(&mut self, style: StrokeStyle) {
        self.style = style;
    }
}

impl Default for StrokeDefinition {
    /// Black, 1px, solid.
    fn default() -> Self {
        Self::new(Color::default(), 1.0)
    }
}

/// Applies all stroke attributes of a [`StrokeDefinition`] to an SVG element.
///
/// ```
/// use trestle_core::{apply_stroke, color::Color, draw::StrokeDefinition};
/// use svg::node::element::Line;
///
/// let stroke = StrokeDefinition::solid(Color::new("black").unwrap(), 2.0);
/// let line = apply_stroke!(Line::new(), &stroke);
/// ```
#[macro_export]
macro_rules! apply_stroke {
    ($element:expr, $stroke:expr) => {{
        let stroke: &$crate::draw::StrokeDefinition = $stroke;
        let element = $element
            .set("stroke", &stroke.color())
            .set("stroke-opacity", stroke.color().alpha())
            .set("stroke-width", stroke.width());
        match stroke.style().to_svg_value() {
            Some(pattern) => element.set("stroke-dasharray", pattern),
            None => element,
        }
    }};
}
