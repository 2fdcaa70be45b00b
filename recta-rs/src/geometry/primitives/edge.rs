use crate::geometry::geo_traits::DistanceTo;
use crate::geometry::primitives::Point;

/// Directed line segment between two [`Point`]s
#[derive(Clone, Debug, PartialEq, Copy)]
pub struct Edge {
    pub start: Point,
    pub end: Point,
}

impl Edge {
    /// Returns the point where `self` and `other` cross, if any.
    /// Touching at an endpoint counts as crossing.
    /// Parallel and collinear edges never cross, even when they overlap.
    pub fn collides_at(&self, other: &Edge) -> Option<Point> {
        match edge_intersection(self, other) {
            Intersection::No => None,
            Intersection::Yes(point) => Some(point),
        }
    }

    /// Returns the closest point which lies on the edge to the given point
    pub fn closest_point_on_edge(&self, point: &Point) -> Point {
        //from https://stackoverflow.com/a/6853926
        let Point(x1, y1) = self.start;
        let Point(x2, y2) = self.end;
        let Point(x, y) = *point;

        let a = x - x1;
        let b = y - y1;
        let c = x2 - x1;
        let d = y2 - y1;

        let dot = a * c + b * d;
        let len_sq = c * c + d * d;
        let mut param = -1.0;
        if len_sq != 0.0 {
            param = dot / len_sq;
        }
        let (xx, yy) = match param {
            p if p < 0.0 => (x1, y1),              //start is the closest point
            p if p > 1.0 => (x2, y2),              //end is the closest point
            _ => (x1 + param * c, y1 + param * d), //closest point is on the edge
        };

        Point(xx, yy)
    }
}

impl DistanceTo<Point> for Edge {
    #[inline(always)]
    fn distance_to(&self, point: &Point) -> f64 {
        f64::sqrt(self.sq_distance_to(point))
    }

    #[inline(always)]
    fn sq_distance_to(&self, point: &Point) -> f64 {
        self.closest_point_on_edge(point).sq_distance_to(point)
    }
}

/// Parametric line-line intersection of two segments.
///
/// Both edges are written as `start + u * (end - start)`, after which `u_a` and `u_b` are solved for.
/// based on: <http://paulbourke.net/geometry/pointlineplane/>
#[inline(always)]
fn edge_intersection(e1: &Edge, e2: &Edge) -> Intersection {
    let Point(x1, y1) = e1.start;
    let Point(x2, y2) = e1.end;
    let Point(x3, y3) = e2.start;
    let Point(x4, y4) = e2.end;

    let denom = (y4 - y3) * (x2 - x1) - (x4 - x3) * (y2 - y1);

    if denom == 0.0 {
        //parallel or collinear edges
        return Intersection::No;
    }

    let u_a = ((x4 - x3) * (y1 - y3) - (y4 - y3) * (x1 - x3)) / denom;
    let u_b = ((x2 - x1) * (y1 - y3) - (y2 - y1) * (x1 - x3)) / denom;

    if (0.0..=1.0).contains(&u_a) && (0.0..=1.0).contains(&u_b) {
        let x = x1 + u_a * (x2 - x1);
        let y = y1 + u_a * (y2 - y1);
        Intersection::Yes(Point(x, y))
    } else {
        Intersection::No
    }
}

enum Intersection {
    Yes(Point),
    No,
}
