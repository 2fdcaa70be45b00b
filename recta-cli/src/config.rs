use serde::{Deserialize, Serialize};

use crate::io::svg_util::SvgDrawOptions;

/// Configuration of the `recta` command-line tool
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct RectaConfig {
    /// Pretty-print the result when reporting it as JSON
    #[serde(default = "default_pretty_json")]
    pub pretty_json: bool,
    /// Options for the SVG drawing of the two rectangles
    #[serde(default)]
    pub svg_draw_options: SvgDrawOptions,
}

fn default_pretty_json() -> bool {
    true
}

impl Default for RectaConfig {
    fn default() -> Self {
        Self {
            pretty_json: default_pretty_json(),
            svg_draw_options: SvgDrawOptions::default(),
        }
    }
}
