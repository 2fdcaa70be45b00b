use itertools::Itertools;
use log::trace;

use crate::geometry::primitives::{Edge, Point, Rectangle};
use crate::util::assertions;

/// Returns the points where the [`Sides`](crate::geometry::primitives::Sides) of `r1` and `r2` cross.
///
/// Each horizontal side of one rectangle is tested against both vertical sides of the other, in both
/// directions, for eight pairs in total:
/// `r1`'s horizontals against `r2`'s verticals first, then `r1`'s verticals against `r2`'s horizontals.
/// Points found more than once (e.g. at a shared corner) are reported only at their first occurrence.
pub fn find_intersections(r1: &Rectangle, r2: &Rectangle) -> Vec<Point> {
    let r1_horizontals = r1
        .sides()
        .horizontals()
        .into_iter()
        .cartesian_product(r2.sides().verticals());

    let r1_verticals = r2
        .sides()
        .horizontals()
        .into_iter()
        .cartesian_product(r1.sides().verticals())
        .map(|(r2_horizontal, r1_vertical)| (r1_vertical, r2_horizontal));

    let intersections = r1_horizontals
        .chain(r1_verticals)
        .filter_map(|(e1, e2): (Edge, Edge)| e1.collides_at(&e2))
        .fold(vec![], |mut unique, p| {
            if !unique.contains(&p) {
                unique.push(p);
            }
            unique
        });

    debug_assert!(assertions::points_are_unique(&intersections));
    debug_assert!(assertions::points_lie_on_sides(r1, r2, &intersections));
    trace!("intersections between {r1:?} and {r2:?}: {intersections:?}");

    intersections
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(x: f64, y: f64, w: f64, h: f64) -> Rectangle {
        Rectangle::try_new(x, y, w, h).unwrap()
    }

    #[test]
    fn two_crossings() {
        let a = rect(2.0, 2.0, 8.0, 8.0);
        let b = rect(5.0, 3.0, 5.0, 5.0);
        assert_eq!(
            find_intersections(&a, &b),
            vec![Point(9.0, 3.0), Point(8.0, 8.0)]
        );
    }

    #[test]
    fn shared_corner_is_reported_once() {
        let a = rect(2.0, 2.0, 8.0, 8.0);
        let c = rect(10.0, 10.0, 5.0, 5.0);
        assert_eq!(find_intersections(&a, &c), vec![Point(10.0, 10.0)]);
    }

    #[test]
    fn disjoint_rectangles_do_not_cross() {
        let a = rect(2.0, 2.0, 8.0, 8.0);
        let d = rect(11.0, 11.0, 5.0, 7.0);
        assert!(find_intersections(&a, &d).is_empty());
    }

    #[test]
    fn order_follows_pair_evaluation() {
        // swapping the rectangles changes which pairs find which point first
        let a = rect(2.0, 2.0, 8.0, 8.0);
        let b = rect(5.0, 3.0, 5.0, 5.0);
        let forward = find_intersections(&a, &b);
        let backward = find_intersections(&b, &a);
        assert_eq!(forward.len(), backward.len());
        assert!(backward.iter().all(|p| forward.contains(p)));
    }
}
