use std::sync::LazyLock;
use std::time::Instant;

use itertools::Itertools;
use recta_rs::geometry::primitives::Rectangle;
use recta_rs::util::InvalidRectangle;
use thiserror::Error;

pub mod config;
pub mod io;

pub static EPOCH: LazyLock<Instant> = LazyLock::new(Instant::now);

/// Rectangles from the input that could not be constructed, identified by their position (1 or 2).
/// Displays as the report shown to the user.
#[derive(Debug, Error)]
#[error("{}", report(.0))]
pub struct RejectedRectangles(pub Vec<(usize, InvalidRectangle)>);

fn report(rejections: &[(usize, InvalidRectangle)]) -> String {
    rejections
        .iter()
        .map(|(n, invalid)| {
            let messages = invalid.messages().map(|m| format!("  * {m}")).join("\n");
            format!("Error with rectangle {n}:\n{messages}")
        })
        .join("\n")
}

/// Builds both rectangles from `[x1, y1, w1, h1, x2, y2, w2, h2]`.
/// Both rectangles are always validated, so a rejection lists the violations of each invalid one.
pub fn build_rectangles(values: [f64; 8]) -> Result<(Rectangle, Rectangle), RejectedRectangles> {
    let [x1, y1, w1, h1, x2, y2, w2, h2] = values;
    match (
        Rectangle::try_new(x1, y1, w1, h1),
        Rectangle::try_new(x2, y2, w2, h2),
    ) {
        (Ok(r1), Ok(r2)) => Ok((r1, r2)),
        (r1, r2) => {
            let rejections = [(1, r1), (2, r2)]
                .into_iter()
                .filter_map(|(n, r)| r.err().map(|e| (n, e)))
                .collect();
            Err(RejectedRectangles(rejections))
        }
    }
}
