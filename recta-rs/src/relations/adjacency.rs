use log::trace;

use crate::geometry::geo_enums::{Adjacency, Side};
use crate::geometry::primitives::{Rectangle, SideSpan};

/// Classifies how `r1` and `r2` share their boundary.
///
/// Checks are made from strongest to weakest evidence and the first match wins:
/// 1. [`Adjacency::Proper`]: at least two vertices coincide, meaning a full side is shared.
/// 2. [`Adjacency::Subline`]: a full side of one rectangle lies strictly within a collinear side of the other.
/// 3. [`Adjacency::Partial`]: an endpoint of a side lies strictly within a collinear side of the other.
///
/// The classification does not depend on the order of the arguments.
pub fn find_adjacency(r1: &Rectangle, r2: &Rectangle) -> Adjacency {
    let adjacency = if shares_full_side(r1, r2) {
        Adjacency::Proper
    } else if any_collinear_sides(r1, r2, SideSpan::surrounds) {
        Adjacency::Subline
    } else if any_collinear_sides(r1, r2, SideSpan::partially_overlaps) {
        Adjacency::Partial
    } else {
        Adjacency::None
    };

    trace!("adjacency between {r1:?} and {r2:?}: {adjacency:?}");

    adjacency
}

/// Two distinct corners in common imply a common side
fn shares_full_side(r1: &Rectangle, r2: &Rectangle) -> bool {
    let n_shared = r1
        .vertices()
        .iter()
        .filter(|v| r2.vertices().contains(v))
        .count();
    n_shared >= 2
}

/// Whether `test(outer_side, inner_side)` holds for any pair of collinear sides.
///
/// Every side of the outer rectangle is paired with the same side ("inner" pairing, e.g. both tops)
/// and the opposite side ("outer" pairing, e.g. a top against a bottom) of the inner rectangle.
/// Both rectangles take a turn as the outer one.
fn any_collinear_sides(
    r1: &Rectangle,
    r2: &Rectangle,
    test: fn(&SideSpan, &SideSpan) -> bool,
) -> bool {
    [(r1, r2), (r2, r1)].into_iter().any(|(outer, inner)| {
        side_pairings()
            .map(|(o, i)| (outer.side_span(o), inner.side_span(i)))
            .filter(|(o, i)| o.is_collinear_with(i))
            .any(|(o, i)| test(&o, &i))
    })
}

fn side_pairings() -> impl Iterator<Item = (Side, Side)> {
    Side::ALL
        .into_iter()
        .flat_map(|side| [(side, side), (side, side.opposite())])
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn rect(x: f64, y: f64, w: f64, h: f64) -> Rectangle {
        Rectangle::try_new(x, y, w, h).unwrap()
    }

    #[test_case(rect(2.0, 10.0, 8.0, 3.0), Adjacency::Proper; "proper below")]
    #[test_case(rect(10.0, 2.0, 3.0, 8.0), Adjacency::Proper; "proper right")]
    #[test_case(rect(2.0, 2.0, 8.0, 8.0), Adjacency::Proper; "identical")]
    #[test_case(rect(10.0, 3.0, 7.0, 5.0), Adjacency::Subline; "subline right")]
    #[test_case(rect(0.0, 4.0, 2.0, 3.0), Adjacency::Subline; "subline left")]
    #[test_case(rect(4.0, 0.0, 3.0, 2.0), Adjacency::Subline; "subline above")]
    #[test_case(rect(4.0, 10.0, 3.0, 2.0), Adjacency::Subline; "subline below")]
    #[test_case(rect(1.0, 1.0, 4.0, 1.0), Adjacency::Partial; "partial above")]
    #[test_case(rect(10.0, 8.0, 3.0, 4.0), Adjacency::Partial; "partial right")]
    #[test_case(rect(0.0, 8.0, 2.0, 4.0), Adjacency::Partial; "partial left")]
    #[test_case(rect(2.0, 10.0, 4.0, 4.0), Adjacency::Partial; "sharing one corner and part of a side")]
    #[test_case(rect(11.0, 11.0, 5.0, 7.0), Adjacency::None; "disjoint")]
    #[test_case(rect(10.0, 10.0, 5.0, 5.0), Adjacency::None; "touching corners")]
    #[test_case(rect(3.0, 3.0, 6.0, 5.0), Adjacency::None; "nested without touching")]
    fn adjacency(other: Rectangle, expected: Adjacency) {
        let base = rect(2.0, 2.0, 8.0, 8.0);
        assert_eq!(find_adjacency(&base, &other), expected);
        assert_eq!(find_adjacency(&other, &base), expected);
    }

    #[test]
    fn longer_side_on_second_rectangle() {
        // the shorter side belongs to the first rectangle
        let short = rect(10.0, 3.0, 7.0, 5.0);
        let long = rect(2.0, 2.0, 8.0, 8.0);
        assert_eq!(find_adjacency(&short, &long), Adjacency::Subline);
    }

    #[test]
    fn inner_pairing_counts_as_subline() {
        // nested rectangle flush against the top side of its container
        let container = rect(2.0, 2.0, 8.0, 8.0);
        let nested = rect(4.0, 2.0, 3.0, 3.0);
        assert_eq!(find_adjacency(&container, &nested), Adjacency::Subline);
    }
}
