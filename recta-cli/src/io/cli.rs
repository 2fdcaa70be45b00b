use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::LevelFilter;

const AFTER_HELP: &str = "\
Each rectangle is given as: origin-x origin-y width height
The origin is the top-left corner of the rectangle, the y-axis points down.

e.g.: recta 1 1 5 3 2 3 4 4
  Rectangle 1: origin at 1,1 width 5 / height 3
  Rectangle 2: origin at 2,3 width 4 / height 4";

/// Compares two rectangles for intersection, containment and adjacency
#[derive(Parser, Debug)]
#[command(author, version, about, after_help = AFTER_HELP)]
pub struct Cli {
    /// Origin x, origin y, width and height of rectangle 1, followed by those of rectangle 2
    #[arg(
        num_args = 8,
        required = true,
        allow_negative_numbers = true,
        value_names = ["X1", "Y1", "W1", "H1", "X2", "Y2", "W2", "H2"]
    )]
    pub values: Vec<f64>,
    /// Draw both rectangles and their intersection points to an SVG file
    #[arg(short, long)]
    pub draw: bool,
    /// Folder the drawing is written to
    #[arg(short, long, value_name = "FOLDER", default_value = ".")]
    pub output_folder: PathBuf,
    #[arg(short, long, value_name = "FILE")]
    pub config_file: Option<PathBuf>,
    /// Report the result as JSON instead of text
    #[arg(short, long)]
    pub json: bool,
    #[arg(
        short,
        long,
        value_name = "[off, error, warn, info, debug, trace]",
        default_value = "warn"
    )]
    pub log_level: LevelFilter,
}

impl Cli {
    /// The positional values as `[x1, y1, w1, h1, x2, y2, w2, h2]`
    pub fn rectangle_values(&self) -> Result<[f64; 8]> {
        <[f64; 8]>::try_from(self.values.as_slice()).with_context(|| {
            format!(
                "expected 8 numbers (4 per rectangle), got {}",
                self.values.len()
            )
        })
    }
}
