mod adjacency;
mod comparator;
mod containment;
mod intersection;

#[doc(inline)]
pub use adjacency::find_adjacency;
#[doc(inline)]
pub use comparator::ComparisonResult;
#[doc(inline)]
pub use comparator::compare;
#[doc(inline)]
pub use containment::Containment;
#[doc(inline)]
pub use containment::find_containment;
#[doc(inline)]
pub use intersection::find_intersections;
