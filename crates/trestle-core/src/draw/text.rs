//! Text style definitions for node labels.

use std::str::FromStr;

use crate::color::Color;

/// Weight of a label font.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
}

impl FontWeight {
    /// Returns the CSS `font-weight` value
    pub fn to_svg_value(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Bold => "bold",
        }
    }
}

impl FromStr for FontWeight {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "normal" => Ok(Self::Normal),
            "bold" => Ok(Self::Bold),
            _ => Err(format!(
                "invalid font weight `{s}`, valid values: normal, bold"
            )),
        }
    }
}

/// Defines the visual style of label text.
///
/// | Property | Default |
/// |----------|---------|
/// | Font family | `"Arial"` |
/// | Font size | `13` px |
/// | Weight | normal |
/// | Color | black |
#[derive(Debug, Clone, PartialEq)]
pub struct TextDefinition {
    font_family: String,
    font_size: f32,
    weight: FontWeight,
    color: Color,
}

impl Default for TextDefinition {
    fn default() -> Self {
        Self {
            font_family: "Arial".to_string(),
            font_size: 13.0,
            weight: FontWeight::Normal,
            color: Color::default(),
        }
    }
}

impl TextDefinition {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn font_family(&self) -> &str {
        &self.font_family
    }

    /// Returns the font size in pixels
    pub fn font_size(&self) -> f32 {
        self.font_size
    }

    pub fn weight(&self) -> FontWeight {
        self.weight
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn set_font_family(&mut self, family: &str) {
        self.font_family = family.to_string();
    }

    pub fn set_font_size(&mut self, size: f32) {
        self.font_size = size;
    }

    pub fn set_weight(&mut self, weight: FontWeight) {
        self.weight = weight;
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }
}
