use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// PlotStyle – typesetting configuration
// ---------------------------------------------------------------------------

/// Fonts and stroke widths for chart text and traces.
///
/// This only affects how labels and legends are typeset, never the data; it
/// is passed explicitly into the plotter so renders stay reproducible and
/// testable in isolation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotStyle {
    /// Font family: "serif", "sans-serif", "monospace", or a concrete name.
    #[serde(default = "PlotStyle::default_font_family")]
    pub font_family: String,

    /// Base font size in pixels for axis and legend text.
    #[serde(default = "PlotStyle::default_base_font_size")]
    pub base_font_size: f64,

    /// Stroke width of the line traces, in pixels.
    #[serde(default = "PlotStyle::default_line_width")]
    pub line_width: u32,
}

impl PlotStyle {
    fn default_font_family() -> String {
        "serif".to_string()
    }

    fn default_base_font_size() -> f64 {
        14.0
    }

    fn default_line_width() -> u32 {
        2
    }

    /// Load a style from a JSON file.  Absent fields keep their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading style file {}", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("parsing style file {}", path.display()))
    }
}

impl Default for PlotStyle {
    fn default() -> Self {
        Self {
            font_family: Self::default_font_family(),
            base_font_size: Self::default_base_font_size(),
            line_width: Self::default_line_width(),
        }
    }
}
