use std::fmt::{Display, Formatter};

use serde::Serialize;

/// The way two rectangles share their boundary.
/// Variants are listed from strongest to weakest evidence of adjacency.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Adjacency {
    /// A full side of one rectangle coincides with a full side of the other (two shared vertices)
    Proper,
    /// A full side of one rectangle lies strictly within a collinear side of the other
    Subline,
    /// A collinear side of each rectangle overlaps, without one being nested in the other
    Partial,
    /// The rectangles do not share any part of their boundary
    None,
}

impl Adjacency {
    pub fn is_adjacent(&self) -> bool {
        !matches!(self, Adjacency::None)
    }
}

impl Display for Adjacency {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Adjacency::Proper => "properly adjacent",
            Adjacency::Subline => "subline adjacent",
            Adjacency::Partial => "partially adjacent",
            Adjacency::None => "not adjacent",
        };
        f.write_str(s)
    }
}

/// The four sides of an axis-aligned rectangle.
/// The y-axis points down: `Top` is the side with the smallest y-coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    Top,
    Right,
    Bottom,
    Left,
}

impl Side {
    pub const ALL: [Side; 4] = [Side::Top, Side::Right, Side::Bottom, Side::Left];

    pub fn opposite(self) -> Side {
        match self {
            Side::Top => Side::Bottom,
            Side::Right => Side::Left,
            Side::Bottom => Side::Top,
            Side::Left => Side::Right,
        }
    }
}
