//! `recta-rs` determines how two axis-aligned rectangles relate to each other:
//! where their boundaries cross, whether one strictly contains the other and
//! whether they share (part of) a side.
//!
//! ```
//! use recta_rs::geometry::primitives::Rectangle;
//! use recta_rs::geometry::geo_enums::Adjacency;
//! use recta_rs::relations::compare;
//!
//! let a = Rectangle::try_new(2.0, 2.0, 8.0, 8.0).unwrap();
//! let e = Rectangle::try_new(2.0, 10.0, 8.0, 3.0).unwrap();
//!
//! let result = compare(&a, &e);
//! assert_eq!(result.adjacency, Adjacency::Proper);
//! assert!(!result.containment.any());
//! ```

/// Geometric primitives and base algorithms
pub mod geometry;

/// Relations between two rectangles: intersection, containment and adjacency
pub mod relations;

/// Helper functions which do not belong to any specific module
pub mod util;
