/// Set of functions used throughout assure the correctness of the library.
pub mod assertions;

mod fpa;
mod violation;

#[doc(inline)]
pub use fpa::FPA;
#[doc(inline)]
pub use violation::InvalidRectangle;
#[doc(inline)]
pub use violation::RectangleViolation;
