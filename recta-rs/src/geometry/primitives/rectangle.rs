use itertools::Itertools;

use crate::geometry::geo_enums::Side;
use crate::geometry::geo_traits::CollidesWith;
use crate::geometry::primitives::{Edge, Point};
use crate::util::{InvalidRectangle, RectangleViolation};

/// Axis-aligned rectangle, defined by its top-left corner, width and height.
///
/// The y-axis points down, so the top-left corner holds the smallest coordinates.
/// Vertices and sides are derived once during construction and never change afterwards.
/// Only valid rectangles can be constructed: strictly positive width and height, and no vertex
/// with a negative coordinate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rectangle {
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    vertices: [Point; 4],
    sides: Sides,
}

impl Rectangle {
    pub const TOP_LEFT: usize = 0;
    pub const TOP_RIGHT: usize = 1;
    pub const BOTTOM_RIGHT: usize = 2;
    pub const BOTTOM_LEFT: usize = 3;

    /// Creates a rectangle with its top-left corner at `(x, y)`.
    ///
    /// All invariants are checked independently: a rejected rectangle reports every
    /// [`RectangleViolation`] that applies, not only the first one.
    pub fn try_new(x: f64, y: f64, width: f64, height: f64) -> Result<Self, InvalidRectangle> {
        let vertices = [
            Point(x, y),
            Point(x + width, y),
            Point(x + width, y + height),
            Point(x, y + height),
        ];

        let out_of_bounds = |c: f64| c.is_nan() || c < 0.0;

        let violations = [
            (
                width.is_nan() || width <= 0.0,
                RectangleViolation::NonPositiveWidth,
            ),
            (
                height.is_nan() || height <= 0.0,
                RectangleViolation::NonPositiveHeight,
            ),
            (
                vertices.iter().any(|v| out_of_bounds(v.0) || out_of_bounds(v.1)),
                RectangleViolation::OutOfBounds,
            ),
        ]
        .into_iter()
        .filter_map(|(violated, violation)| violated.then_some(violation))
        .collect_vec();

        if !violations.is_empty() {
            return Err(InvalidRectangle { violations });
        }

        Ok(Rectangle {
            x,
            y,
            width,
            height,
            vertices,
            sides: Sides::from_vertices(&vertices),
        })
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// The four corners, in the order: top-left, top-right, bottom-right, bottom-left.
    pub fn vertices(&self) -> &[Point; 4] {
        &self.vertices
    }

    pub fn sides(&self) -> &Sides {
        &self.sides
    }

    pub fn x_min(&self) -> f64 {
        self.vertices[Self::TOP_LEFT].0
    }

    pub fn y_min(&self) -> f64 {
        self.vertices[Self::TOP_LEFT].1
    }

    pub fn x_max(&self) -> f64 {
        self.vertices[Self::BOTTOM_RIGHT].0
    }

    pub fn y_max(&self) -> f64 {
        self.vertices[Self::BOTTOM_RIGHT].1
    }

    /// Returns the span of one of the four boundary sides of `self`.
    pub fn side_span(&self, side: Side) -> SideSpan {
        let [tl, tr, br, bl] = self.vertices;
        match side {
            Side::Top => SideSpan::new(tl.1, tl.0, tr.0),
            Side::Right => SideSpan::new(tr.0, tr.1, br.1),
            Side::Bottom => SideSpan::new(br.1, bl.0, br.0),
            Side::Left => SideSpan::new(bl.0, tl.1, bl.1),
        }
    }
}

impl CollidesWith<Rectangle> for Rectangle {
    /// Whether the closed areas of both rectangles have at least one point in common
    #[inline(always)]
    fn collides_with(&self, other: &Rectangle) -> bool {
        f64::max(self.x_min(), other.x_min()) <= f64::min(self.x_max(), other.x_max())
            && f64::max(self.y_min(), other.y_min()) <= f64::min(self.y_max(), other.y_max())
    }
}

/// The four segments used to find crossings between two rectangles.
///
/// The horizontal sides are the true top and bottom sides of the rectangle.
/// The two "vertical" sides span the rectangle's diagonals (top-left to bottom-right and
/// top-right to bottom-left) rather than its left and right sides.
/// The crossings reported by [`find_intersections`](crate::relations::find_intersections) are defined in terms
/// of these segments, so they are kept exactly as they are.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sides {
    /// top-left → top-right
    pub horizontal_top: Edge,
    /// bottom-right → bottom-left
    pub horizontal_bottom: Edge,
    /// top-left → bottom-right
    pub vertical_1: Edge,
    /// top-right → bottom-left
    pub vertical_2: Edge,
}

impl Sides {
    fn from_vertices(v: &[Point; 4]) -> Self {
        let edge = |start: usize, end: usize| Edge {
            start: v[start],
            end: v[end],
        };
        Sides {
            horizontal_top: edge(Rectangle::TOP_LEFT, Rectangle::TOP_RIGHT),
            horizontal_bottom: edge(Rectangle::BOTTOM_RIGHT, Rectangle::BOTTOM_LEFT),
            vertical_1: edge(Rectangle::TOP_LEFT, Rectangle::BOTTOM_RIGHT),
            vertical_2: edge(Rectangle::TOP_RIGHT, Rectangle::BOTTOM_LEFT),
        }
    }

    pub fn horizontals(&self) -> [Edge; 2] {
        [self.horizontal_top, self.horizontal_bottom]
    }

    pub fn verticals(&self) -> [Edge; 2] {
        [self.vertical_1, self.vertical_2]
    }

    pub fn all(&self) -> [Edge; 4] {
        [
            self.horizontal_top,
            self.horizontal_bottom,
            self.vertical_1,
            self.vertical_2,
        ]
    }
}

/// A boundary side of an axis-aligned rectangle, reduced to one dimension:
/// the coordinate it is fixed at and the closed interval `[start, end]` it covers along the other axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SideSpan {
    pub fixed: f64,
    pub start: f64,
    pub end: f64,
}

impl SideSpan {
    pub fn new(fixed: f64, start: f64, end: f64) -> Self {
        debug_assert!(start <= end, "side span is inverted: [{start}, {end}]");
        SideSpan { fixed, start, end }
    }

    /// Both sides lie on the same line. Only meaningful for sides with the same orientation.
    pub fn is_collinear_with(&self, other: &SideSpan) -> bool {
        self.fixed == other.fixed
    }

    /// `value` lies in the interior of the span, endpoints excluded
    pub fn strictly_contains(&self, value: f64) -> bool {
        self.start < value && value < self.end
    }

    /// Both endpoints of `other` lie strictly within `self`
    pub fn surrounds(&self, other: &SideSpan) -> bool {
        self.strictly_contains(other.start) && self.strictly_contains(other.end)
    }

    /// At least one endpoint of `other` lies strictly within `self`
    pub fn partially_overlaps(&self, other: &SideSpan) -> bool {
        self.strictly_contains(other.start) || self.strictly_contains(other.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn vertices_are_ordered_clockwise_from_top_left() {
        let r = Rectangle::try_new(2.0, 3.0, 4.0, 5.0).unwrap();
        assert_eq!(
            r.vertices(),
            &[
                Point(2.0, 3.0),
                Point(6.0, 3.0),
                Point(6.0, 8.0),
                Point(2.0, 8.0)
            ]
        );
    }

    #[test]
    fn vertical_sides_are_diagonals() {
        let r = Rectangle::try_new(0.0, 0.0, 4.0, 2.0).unwrap();
        let sides = r.sides();
        assert_eq!(sides.horizontal_top.start, Point(0.0, 0.0));
        assert_eq!(sides.horizontal_top.end, Point(4.0, 0.0));
        assert_eq!(sides.horizontal_bottom.start, Point(4.0, 2.0));
        assert_eq!(sides.horizontal_bottom.end, Point(0.0, 2.0));
        assert_eq!(sides.vertical_1.start, Point(0.0, 0.0));
        assert_eq!(sides.vertical_1.end, Point(4.0, 2.0));
        assert_eq!(sides.vertical_2.start, Point(4.0, 0.0));
        assert_eq!(sides.vertical_2.end, Point(0.0, 2.0));
    }

    #[test_case(1.0, 1.0, 0.0, 3.0, &[RectangleViolation::NonPositiveWidth]; "zero width")]
    #[test_case(1.0, 1.0, 3.0, 0.0, &[RectangleViolation::NonPositiveHeight]; "zero height")]
    #[test_case(-1.0, 0.0, 5.0, 5.0, &[RectangleViolation::OutOfBounds]; "negative origin")]
    #[test_case(1.0, 1.0, -4.0, 3.0, &[RectangleViolation::NonPositiveWidth, RectangleViolation::OutOfBounds]; "negative width reaching past the origin")]
    #[test_case(0.0, 0.0, 0.0, 0.0, &[RectangleViolation::NonPositiveWidth, RectangleViolation::NonPositiveHeight]; "zero width and height")]
    #[test_case(1.0, 1.0, -4.0, -4.0, &[RectangleViolation::NonPositiveWidth, RectangleViolation::NonPositiveHeight, RectangleViolation::OutOfBounds]; "all violations")]
    #[test_case(1.0, 1.0, f64::NAN, 3.0, &[RectangleViolation::NonPositiveWidth, RectangleViolation::OutOfBounds]; "nan width")]
    fn invalid_rectangles(x: f64, y: f64, w: f64, h: f64, expected: &[RectangleViolation]) {
        let err = Rectangle::try_new(x, y, w, h).unwrap_err();
        assert_eq!(err.violations, expected);
    }

    #[test]
    fn violation_messages() {
        let err = Rectangle::try_new(1.0, 1.0, -4.0, 3.0).unwrap_err();
        let messages: Vec<String> = err.messages().collect();
        assert_eq!(messages, ["Width must be greater than 0", "Out of bounds"]);
        assert_eq!(
            err.to_string(),
            "invalid rectangle: Width must be greater than 0; Out of bounds"
        );
    }

    #[test]
    fn rectangle_touching_the_axes_is_valid() {
        assert!(Rectangle::try_new(0.0, 0.0, 1.0, 1.0).is_ok());
    }

    #[test]
    fn side_spans() {
        let r = Rectangle::try_new(2.0, 3.0, 4.0, 5.0).unwrap();
        assert_eq!(r.side_span(Side::Top), SideSpan::new(3.0, 2.0, 6.0));
        assert_eq!(r.side_span(Side::Right), SideSpan::new(6.0, 3.0, 8.0));
        assert_eq!(r.side_span(Side::Bottom), SideSpan::new(8.0, 2.0, 6.0));
        assert_eq!(r.side_span(Side::Left), SideSpan::new(2.0, 3.0, 8.0));
    }

    #[test]
    fn span_overlap() {
        let long = SideSpan::new(0.0, 2.0, 10.0);
        let nested = SideSpan::new(0.0, 3.0, 8.0);
        let sticking_out = SideSpan::new(0.0, 1.0, 5.0);
        let touching_end = SideSpan::new(0.0, 2.0, 5.0);

        assert!(long.surrounds(&nested));
        assert!(!nested.surrounds(&long));
        assert!(!long.surrounds(&sticking_out));
        assert!(long.partially_overlaps(&sticking_out));
        assert!(!long.surrounds(&touching_end));
        assert!(long.partially_overlaps(&touching_end));
        assert!(!long.partially_overlaps(&long));
    }

    #[test]
    fn collides_with_includes_touching() {
        let a = Rectangle::try_new(2.0, 2.0, 8.0, 8.0).unwrap();
        let touching = Rectangle::try_new(10.0, 10.0, 5.0, 5.0).unwrap();
        let apart = Rectangle::try_new(11.0, 11.0, 5.0, 7.0).unwrap();
        assert!(a.collides_with(&touching));
        assert!(!a.collides_with(&apart));
    }
}
