mod edge;
mod point;
mod rectangle;

#[doc(inline)]
pub use edge::Edge;
#[doc(inline)]
pub use point::Point;
#[doc(inline)]
pub use rectangle::Rectangle;
#[doc(inline)]
pub use rectangle::SideSpan;
#[doc(inline)]
pub use rectangle::Sides;
