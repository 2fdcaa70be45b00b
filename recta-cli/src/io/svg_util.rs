use std::fmt::{Display, Formatter};
use std::str::FromStr;

use anyhow::{Result, ensure};
use recta_rs::geometry::primitives::{Point, Rectangle};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use svg::node::element::{Circle, Rectangle as SvgRectangle};

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, Copy)]
pub struct SvgDrawOptions {
    ///The theme to use for the svg
    #[serde(default)]
    pub theme: SvgTheme,
    ///Size of one unit of the rectangles' coordinate space in the rendered image
    #[serde(default = "default_scale")]
    pub scale: f64,
    ///Mark the intersection points
    #[serde(default = "default_true")]
    pub intersections: bool,
    ///Print a summary of the comparison above the rectangles
    #[serde(default = "default_true")]
    pub label: bool,
}

fn default_scale() -> f64 {
    10.0
}

fn default_true() -> bool {
    true
}

impl Default for SvgDrawOptions {
    fn default() -> Self {
        Self {
            theme: SvgTheme::default(),
            scale: default_scale(),
            intersections: true,
            label: true,
        }
    }
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, Copy)]
pub struct SvgTheme {
    pub stroke_width_multiplier: f64,
    pub background_fill: Color,
    pub first_stroke: Color,
    pub second_stroke: Color,
    pub intersection_fill: Color,
}

impl Default for SvgTheme {
    fn default() -> Self {
        SvgTheme::RED_BLUE
    }
}

impl SvgTheme {
    pub const RED_BLUE: SvgTheme = SvgTheme {
        stroke_width_multiplier: 2.0,
        background_fill: Color(0xFF, 0xFF, 0xFF), // WHITE
        first_stroke: Color(0xFF, 0x00, 0x00),    // RED
        second_stroke: Color(0x00, 0x00, 0xFF),   // BLUE
        intersection_fill: Color(0x00, 0x00, 0x00), // BLACK
    };
}

#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Color(u8, u8, u8);

impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

impl FromStr for Color {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        ensure!(
            hex.len() == 6 && hex.is_ascii(),
            "invalid color: {s}, expected #RRGGBB"
        );
        let r = u8::from_str_radix(&hex[0..2], 16)?;
        let g = u8::from_str_radix(&hex[2..4], 16)?;
        let b = u8::from_str_radix(&hex[4..6], 16)?;
        Ok(Color(r, g, b))
    }
}

impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format!("{self}"))
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Color::from_str(&s).map_err(serde::de::Error::custom)
    }
}

pub fn point(p: Point, fill: Option<&str>, rad: Option<f64>) -> Circle {
    Circle::new()
        .set("cx", p.x())
        .set("cy", p.y())
        .set("r", rad.unwrap_or(0.5))
        .set("fill", fill.unwrap_or("black"))
}

/// Axis-aligned rectangle given as `(x, y, width, height)`
pub fn aa_rect((x, y, width, height): (f64, f64, f64, f64), params: &[(&str, &str)]) -> SvgRectangle {
    let mut svg_rect = SvgRectangle::new()
        .set("x", x)
        .set("y", y)
        .set("width", width)
        .set("height", height);
    for param in params {
        svg_rect = svg_rect.set(param.0, param.1)
    }
    svg_rect
}

pub fn rectangle(rect: &Rectangle, params: &[(&str, &str)]) -> SvgRectangle {
    aa_rect((rect.x(), rect.y(), rect.width(), rect.height()), params)
}
