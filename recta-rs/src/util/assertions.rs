use log::error;

use crate::geometry::geo_traits::DistanceTo;
use crate::geometry::primitives::{Point, Rectangle};
use crate::relations::Containment;
use crate::util::FPA;

//Various checks to verify correctness of the relations between two rectangles
//Used in debug_assertion!() blocks

/// No two points share both coordinates
pub fn points_are_unique(points: &[Point]) -> bool {
    for (i, p) in points.iter().enumerate() {
        if points[i + 1..].contains(p) {
            error!("duplicate point {p:?} in {points:?}");
            return false;
        }
    }
    true
}

/// Every point lies on at least one of the sides of `r1` and on at least one of the sides of `r2`.
///
/// A crossing is computed along one of the two sides involved, so it carries a rounding error
/// proportional to the largest coordinate of either rectangle. Distances are measured relative to that magnitude.
pub fn points_lie_on_sides(r1: &Rectangle, r2: &Rectangle, points: &[Point]) -> bool {
    let scale = coordinate_magnitude(r1, r2);
    let on_sides = |r: &Rectangle, p: &Point| {
        r.sides()
            .all()
            .iter()
            .any(|s| FPA(s.distance_to(p) / scale) == FPA(0.0))
    };

    for p in points {
        if !on_sides(r1, p) || !on_sides(r2, p) {
            error!("point {p:?} does not lie on the sides of both {r1:?} and {r2:?}");
            return false;
        }
    }
    true
}

/// Largest absolute coordinate among the vertices of `r1` and `r2`, at least 1
fn coordinate_magnitude(r1: &Rectangle, r2: &Rectangle) -> f64 {
    r1.vertices()
        .iter()
        .chain(r2.vertices())
        .flat_map(|v| [v.0.abs(), v.1.abs()])
        .fold(1.0, f64::max)
}

/// Two valid rectangles can never contain each other
pub fn containment_is_exclusive(containment: &Containment) -> bool {
    if containment.first_in_second && containment.second_in_first {
        error!("mutual containment: {containment:?}");
        return false;
    }
    true
}
