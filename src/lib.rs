//! vector3d: an immutable three-dimensional vector value type
//!
//! This crate provides [`Vector3D`], a small `Copy` value holding three `f64`
//! components, together with the usual vector-algebra operations: magnitude,
//! normalization, addition, scalar multiplication, dot and cross products,
//! the angle between two vectors, and a fixed two-decimal display form.
//!
//! No operation mutates its receiver; every derived vector is a new value.
//!
//! ```rust
//! use vector3d::Vector3D;
//!
//! let x_axis = Vector3D::new(1.0, 0.0, 0.0);
//! let y_axis = Vector3D::new(0.0, 1.0, 0.0);
//!
//! assert_eq!(x_axis.cross_product(y_axis), Vector3D::new(0.0, 0.0, 1.0));
//! assert_eq!(x_axis.to_string(), "(1.00, 0.00, 0.00)");
//! ```

pub mod errors;
pub mod vector;

// Re-export commonly used types
pub use errors::{Result, VectorError};
pub use vector::Vector3D;
