use itertools::Itertools;
use thiserror::Error;

/// An invariant of [`Rectangle`](crate::geometry::primitives::Rectangle) that was not upheld during construction.
/// The `Display` output is the message shown to the user.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum RectangleViolation {
    #[error("Width must be greater than 0")]
    NonPositiveWidth,
    #[error("Height must be greater than 0")]
    NonPositiveHeight,
    /// At least one vertex has a negative coordinate
    #[error("Out of bounds")]
    OutOfBounds,
}

/// Every invariant violated by a rejected rectangle, in the order they were checked.
/// Never empty.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("invalid rectangle: {}", .violations.iter().join("; "))]
pub struct InvalidRectangle {
    pub violations: Vec<RectangleViolation>,
}

impl InvalidRectangle {
    /// The human-readable message of every violation
    pub fn messages(&self) -> impl Iterator<Item = String> + '_ {
        self.violations.iter().map(|v| v.to_string())
    }
}
