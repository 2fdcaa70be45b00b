use std::fmt::{Display, Formatter};

use log::debug;
use serde::Serialize;

use crate::geometry::geo_enums::Adjacency;
use crate::geometry::geo_traits::CollidesWith;
use crate::geometry::primitives::{Point, Rectangle};
use crate::relations::{Containment, find_adjacency, find_containment, find_intersections};

/// Every relation found between two rectangles
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ComparisonResult {
    /// Unique crossing points, in the order they were found
    pub intersections: Vec<Point>,
    pub containment: Containment,
    pub adjacency: Adjacency,
}

impl ComparisonResult {
    /// The result for two rectangles that are apart from each other
    pub fn unrelated() -> Self {
        ComparisonResult {
            intersections: vec![],
            containment: Containment::default(),
            adjacency: Adjacency::None,
        }
    }
}

/// Runs all relation checks on the same pair of rectangles.
///
/// Rectangles whose closed areas do not meet cannot cross, contain or touch each other,
/// so all checks are skipped for them.
pub fn compare(r1: &Rectangle, r2: &Rectangle) -> ComparisonResult {
    let result = match r1.collides_with(r2) {
        false => ComparisonResult::unrelated(),
        true => ComparisonResult {
            intersections: find_intersections(r1, r2),
            containment: find_containment(r1, r2),
            adjacency: find_adjacency(r1, r2),
        },
    };

    debug!(
        "compared rectangles: {} intersection(s), containment: {}, adjacency: {:?}",
        result.intersections.len(),
        result.containment.any(),
        result.adjacency
    );

    result
}

/// Human-readable report of the result, one finding per line.
/// Rectangles are referred to as "Rectangle 1" and "Rectangle 2" in the order they were compared.
impl Display for ComparisonResult {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.intersections.is_empty() {
            true => writeln!(f, "No intersections")?,
            false => {
                writeln!(f, "Intersection points:")?;
                for p in &self.intersections {
                    writeln!(f, "  * {p}")?;
                }
            }
        }

        let Containment {
            first_in_second,
            second_in_first,
        } = self.containment;
        match (first_in_second, second_in_first) {
            (true, _) => writeln!(f, "Rectangle 1 is contained within Rectangle 2")?,
            (false, true) => writeln!(f, "Rectangle 2 is contained within Rectangle 1")?,
            (false, false) => writeln!(f, "No containment")?,
        }

        match self.adjacency.is_adjacent() {
            false => write!(f, "No adjacency"),
            true => write!(f, "Rectangle 1 and Rectangle 2 are {}", self.adjacency),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(x: f64, y: f64, w: f64, h: f64) -> Rectangle {
        Rectangle::try_new(x, y, w, h).unwrap()
    }

    #[test]
    fn report_for_crossing_rectangles() {
        let result = compare(&rect(2.0, 2.0, 8.0, 8.0), &rect(5.0, 3.0, 5.0, 5.0));
        assert_eq!(
            result.to_string(),
            "Intersection points:\n  * 9, 3\n  * 8, 8\nNo containment\nNo adjacency"
        );
    }

    #[test]
    fn report_for_contained_rectangle() {
        let result = compare(&rect(3.0, 3.0, 6.0, 5.0), &rect(2.0, 2.0, 8.0, 8.0));
        assert_eq!(
            result.to_string(),
            "No intersections\nRectangle 1 is contained within Rectangle 2\nNo adjacency"
        );

        let result = compare(&rect(2.0, 2.0, 8.0, 8.0), &rect(3.0, 3.0, 6.0, 5.0));
        assert!(
            result
                .to_string()
                .contains("Rectangle 2 is contained within Rectangle 1")
        );
    }

    #[test]
    fn report_for_adjacent_rectangles() {
        let result = compare(&rect(2.0, 2.0, 8.0, 8.0), &rect(10.0, 3.0, 7.0, 5.0));
        assert!(
            result
                .to_string()
                .ends_with("Rectangle 1 and Rectangle 2 are subline adjacent")
        );
    }

    #[test]
    fn apart_rectangles_are_unrelated() {
        let result = compare(&rect(2.0, 2.0, 8.0, 8.0), &rect(11.0, 11.0, 5.0, 7.0));
        assert_eq!(result, ComparisonResult::unrelated());
        assert_eq!(
            result.to_string(),
            "No intersections\nNo containment\nNo adjacency"
        );
    }
}
