//! # Three-Dimensional Vector Module
//!
//! This module provides [`Vector3D`], an immutable vector in R³ stored as
//! three `f64` components.
//!
//! ## Immutability
//!
//! The components are private and no method takes `&mut self`. Every
//! operation that conceptually changes a vector (normalization, addition,
//! scaling, cross product) returns a new value. The type is `Copy`, so
//! passing vectors by value is the normal calling convention and instances
//! can be shared freely across threads.
//!
//! ## Floating-Point Semantics
//!
//! Components are plain IEEE 754 doubles. `NaN` and infinite inputs are
//! accepted and propagate through every operation according to IEEE 754;
//! nothing is validated except the zero-magnitude precondition of
//! [`Vector3D::normalize`].
//!
//! ## Examples
//!
//! ```rust
//! use vector3d::Vector3D;
//!
//! let a = Vector3D::new(3.0, 4.0, 0.0);
//! assert_eq!(a.magnitude(), 5.0);
//!
//! let unit = a.normalize().unwrap();
//! assert_eq!(unit.to_string(), "(0.60, 0.80, 0.00)");
//!
//! // Operators delegate to the named methods
//! let b = a + Vector3D::new(0.0, 0.0, 2.0) * 0.5;
//! assert_eq!(b, Vector3D::new(3.0, 4.0, 1.0));
//! ```

use std::fmt;
use std::ops::{Add, Mul, Neg};

use approx::{AbsDiffEq, RelativeEq};
use log::debug;
use nalgebra::Vector3;

use crate::errors::{Result, VectorError};

/// Immutable three-dimensional vector
///
/// Holds the x, y and z components as `f64`. Construct with
/// [`Vector3D::new`] and read components back through the accessors.
///
/// # Equality
///
/// `PartialEq` compares components exactly, so `0.0 == -0.0` and
/// `NaN != NaN` as for `f64`. For tolerance-based comparison the type
/// implements [`approx::AbsDiffEq`] and [`approx::RelativeEq`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector3D {
    x: f64,
    y: f64,
    z: f64,
}

impl Vector3D {
    /// The zero vector
    pub const ZERO: Vector3D = Vector3D::new(0.0, 0.0, 0.0);

    /// Creates a new vector from its three components
    ///
    /// No constraints are enforced; non-finite values are stored as given.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vector3d::Vector3D;
    ///
    /// let v = Vector3D::new(1.0, 2.0, 3.0);
    /// assert_eq!(v.x(), 1.0);
    /// assert_eq!(v.y(), 2.0);
    /// assert_eq!(v.z(), 3.0);
    /// ```
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Vector3D { x, y, z }
    }

    /// X-component
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Y-component
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Z-component
    pub fn z(&self) -> f64 {
        self.z
    }

    /// Calculates the magnitude (Euclidean length) of the vector
    ///
    /// # Mathematical Formula
    ///
    /// `magnitude = sqrt(x² + y² + z²)`
    ///
    /// The result is never negative and is zero only for the zero vector.
    /// Non-finite components yield `inf` or `NaN`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vector3d::Vector3D;
    ///
    /// assert_eq!(Vector3D::new(3.0, 4.0, 0.0).magnitude(), 5.0);
    /// assert_eq!(Vector3D::ZERO.magnitude(), 0.0);
    /// ```
    pub fn magnitude(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Returns a unit vector pointing in the same direction
    ///
    /// Each component is divided by the magnitude.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::InvalidOperation`] when the magnitude is
    /// exactly zero. A non-finite magnitude is not checked and yields
    /// `NaN` components.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vector3d::{Vector3D, VectorError};
    ///
    /// let unit = Vector3D::new(3.0, 4.0, 0.0).normalize().unwrap();
    /// assert!((unit.magnitude() - 1.0).abs() < 1e-15);
    ///
    /// assert!(matches!(
    ///     Vector3D::ZERO.normalize(),
    ///     Err(VectorError::InvalidOperation(_))
    /// ));
    /// ```
    pub fn normalize(&self) -> Result<Vector3D> {
        let mag = self.magnitude();
        if mag == 0.0 {
            debug!("Cannot normalize {:?}: magnitude is zero", self);
            return Err(VectorError::InvalidOperation(
                "vector magnitude is zero".to_string(),
            ));
        }

        Ok(Vector3D::new(self.x / mag, self.y / mag, self.z / mag))
    }

    /// Component-wise sum of two vectors
    #[allow(clippy::should_implement_trait)]
    pub fn add(&self, other: Vector3D) -> Vector3D {
        Vector3D::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }

    /// Scales every component by `scalar`
    ///
    /// A zero scalar yields the zero vector, a negative scalar reverses
    /// the direction.
    pub fn multiply(&self, scalar: f64) -> Vector3D {
        Vector3D::new(scalar * self.x, scalar * self.y, scalar * self.z)
    }

    /// Calculates the dot product with another vector
    ///
    /// # Mathematical Formula
    ///
    /// `dot = x₁*x₂ + y₁*y₂ + z₁*z₂`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vector3d::Vector3D;
    ///
    /// let x_axis = Vector3D::new(1.0, 0.0, 0.0);
    /// let y_axis = Vector3D::new(0.0, 1.0, 0.0);
    /// assert_eq!(x_axis.dot_product(y_axis), 0.0); // Perpendicular
    /// assert_eq!(x_axis.dot_product(Vector3D::new(2.0, 0.0, 0.0)), 2.0);
    /// ```
    pub fn dot_product(&self, other: Vector3D) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Calculates the angle between two vectors in radians
    ///
    /// # Mathematical Formula
    ///
    /// `angle = acos(a·b / (|a| * |b|))`, in `[0, π]`
    ///
    /// # Edge Cases
    ///
    /// The ratio is neither guarded nor clamped:
    /// - if either vector has zero magnitude the ratio is `0/0` and the
    ///   result is `NaN`
    /// - rounding can push the ratio of near-parallel or near-antiparallel
    ///   vectors just outside `[-1, 1]`, which also gives `NaN`
    ///
    /// Use [`Vector3D::angle_between_clamped`] when the second case must
    /// produce `0` or `π` instead.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vector3d::Vector3D;
    /// use std::f64::consts::PI;
    ///
    /// let x_axis = Vector3D::new(1.0, 0.0, 0.0);
    /// let y_axis = Vector3D::new(0.0, 1.0, 0.0);
    /// assert!((x_axis.angle_between(y_axis) - PI / 2.0).abs() < 1e-15);
    /// assert!(x_axis.angle_between(Vector3D::ZERO).is_nan());
    /// ```
    pub fn angle_between(&self, other: Vector3D) -> f64 {
        (self.dot_product(other) / (self.magnitude() * other.magnitude())).acos()
    }

    /// Angle between two vectors with the cosine clamped into `[-1, 1]`
    ///
    /// Same as [`Vector3D::angle_between`] except that rounding noise on
    /// near-parallel vectors cannot produce `NaN`. A zero-magnitude operand
    /// still gives `NaN`, since `0/0` survives the clamp.
    pub fn angle_between_clamped(&self, other: Vector3D) -> f64 {
        let cos_angle = self.dot_product(other) / (self.magnitude() * other.magnitude());
        cos_angle.clamp(-1.0, 1.0).acos()
    }

    /// Calculates the cross product with another vector
    ///
    /// The result is perpendicular to both inputs, with magnitude equal to
    /// the area of the parallelogram they span. It is the zero vector when
    /// the inputs are parallel or either is zero.
    ///
    /// # Mathematical Formula
    ///
    /// ```text
    /// cross = (y₁*z₂ - z₁*y₂, z₁*x₂ - x₁*z₂, x₁*y₂ - y₁*x₂)
    /// ```
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vector3d::Vector3D;
    ///
    /// let x_axis = Vector3D::new(1.0, 0.0, 0.0);
    /// let y_axis = Vector3D::new(0.0, 1.0, 0.0);
    /// assert_eq!(x_axis.cross_product(y_axis), Vector3D::new(0.0, 0.0, 1.0));
    /// ```
    pub fn cross_product(&self, other: Vector3D) -> Vector3D {
        Vector3D::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Converts to nalgebra Vector3 for linear algebra operations
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vector3d::Vector3D;
    /// use nalgebra::Vector3;
    ///
    /// let vec: Vector3<f64> = Vector3D::new(1.0, 2.0, 3.0).to_vector3();
    /// assert_eq!(vec, Vector3::new(1.0, 2.0, 3.0));
    /// ```
    pub fn to_vector3(&self) -> Vector3<f64> {
        Vector3::new(self.x, self.y, self.z)
    }

    /// Creates from nalgebra Vector3
    pub fn from_vector3(vec: Vector3<f64>) -> Self {
        Vector3D::new(vec.x, vec.y, vec.z)
    }
}

/// Renders `(x, y, z)` with each component at two decimal places.
///
/// Uses the standard `{:.2}` formatter: the exact binary value is rounded to
/// nearest with ties to even, and the sign of zero is kept, so `-0.0` and
/// `-0.001` both render as `-0.00`.
impl fmt::Display for Vector3D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.2}, {:.2}, {:.2})", self.x, self.y, self.z)
    }
}

// Arithmetic operators delegate to the named methods
impl Add for Vector3D {
    type Output = Vector3D;

    fn add(self, other: Vector3D) -> Vector3D {
        Vector3D::add(&self, other)
    }
}

impl Mul<f64> for Vector3D {
    type Output = Vector3D;

    fn mul(self, scalar: f64) -> Vector3D {
        self.multiply(scalar)
    }
}

impl Mul<Vector3D> for f64 {
    type Output = Vector3D;

    fn mul(self, vector: Vector3D) -> Vector3D {
        vector.multiply(self)
    }
}

impl Neg for Vector3D {
    type Output = Vector3D;

    fn neg(self) -> Vector3D {
        self.multiply(-1.0)
    }
}

impl From<[f64; 3]> for Vector3D {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Vector3D::new(x, y, z)
    }
}

impl From<(f64, f64, f64)> for Vector3D {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Vector3D::new(x, y, z)
    }
}

impl From<Vector3D> for [f64; 3] {
    fn from(v: Vector3D) -> Self {
        [v.x, v.y, v.z]
    }
}

impl From<Vector3<f64>> for Vector3D {
    fn from(vec: Vector3<f64>) -> Self {
        Vector3D::from_vector3(vec)
    }
}

impl From<Vector3D> for Vector3<f64> {
    fn from(v: Vector3D) -> Self {
        v.to_vector3()
    }
}

impl AbsDiffEq for Vector3D {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon)
            && self.y.abs_diff_eq(&other.y, epsilon)
            && self.z.abs_diff_eq(&other.z, epsilon)
    }
}

impl RelativeEq for Vector3D {
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        self.x.relative_eq(&other.x, epsilon, max_relative)
            && self.y.relative_eq(&other.y, epsilon, max_relative)
            && self.z.relative_eq(&other.z, epsilon, max_relative)
    }
}
