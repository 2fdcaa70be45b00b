use log::trace;
use serde::Serialize;

use crate::geometry::primitives::Rectangle;
use crate::util::assertions;

/// Strict containment between two rectangles, in both directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize)]
pub struct Containment {
    /// The first rectangle lies strictly inside the second
    pub first_in_second: bool,
    /// The second rectangle lies strictly inside the first
    pub second_in_first: bool,
}

impl Containment {
    /// Either rectangle contains the other
    pub fn any(&self) -> bool {
        self.first_in_second || self.second_in_first
    }
}

/// Determines, independently for both directions, whether one rectangle lies strictly inside the other.
///
/// Boundaries that touch do not count as containment.
pub fn find_containment(r1: &Rectangle, r2: &Rectangle) -> Containment {
    let containment = Containment {
        first_in_second: is_strictly_inside(r1, r2),
        second_in_first: is_strictly_inside(r2, r1),
    };

    debug_assert!(assertions::containment_is_exclusive(&containment));
    trace!("containment between {r1:?} and {r2:?}: {containment:?}");

    containment
}

/// Compares the corners of `inner` with the corresponding corners of `outer`:
/// each corner of `inner` must lie strictly on the interior side of the matching corner of `outer`.
fn is_strictly_inside(inner: &Rectangle, outer: &Rectangle) -> bool {
    let [i_tl, i_tr, i_br, i_bl] = *inner.vertices();
    let [o_tl, o_tr, o_br, o_bl] = *outer.vertices();

    let top_left = i_tl.0 > o_tl.0 && i_tl.1 > o_tl.1;
    let top_right = i_tr.0 < o_tr.0 && i_tr.1 > o_tr.1;
    let bottom_right = i_br.0 < o_br.0 && i_br.1 < o_br.1;
    let bottom_left = i_bl.0 > o_bl.0 && i_bl.1 < o_bl.1;

    top_left && top_right && bottom_right && bottom_left
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn rect(x: f64, y: f64, w: f64, h: f64) -> Rectangle {
        Rectangle::try_new(x, y, w, h).unwrap()
    }

    #[test_case(rect(3.0, 3.0, 6.0, 5.0), false, true; "second inside first")]
    #[test_case(rect(1.0, 1.0, 15.0, 12.0), true, false; "first inside second")]
    #[test_case(rect(11.0, 11.0, 7.0, 5.0), false, false; "disjoint")]
    #[test_case(rect(2.0, 3.0, 5.0, 5.0), false, false; "touching the left side from inside")]
    #[test_case(rect(2.0, 2.0, 8.0, 8.0), false, false; "identical")]
    #[test_case(rect(5.0, 3.0, 5.0, 5.0), false, false; "crossing")]
    fn containment(other: Rectangle, first_in_second: bool, second_in_first: bool) {
        let base = rect(2.0, 2.0, 8.0, 8.0);
        assert_eq!(
            find_containment(&base, &other),
            Containment {
                first_in_second,
                second_in_first
            }
        );
    }

    #[test]
    fn directions_are_mirrored() {
        let outer = rect(1.0, 1.0, 15.0, 12.0);
        let inner = rect(3.0, 3.0, 6.0, 5.0);
        let forward = find_containment(&outer, &inner);
        let backward = find_containment(&inner, &outer);
        assert!(forward.second_in_first && !forward.first_in_second);
        assert!(backward.first_in_second && !backward.second_in_first);
        assert!(forward.any() && backward.any());
    }
}
