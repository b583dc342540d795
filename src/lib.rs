//! A small **3d vector, transform, plane and spline** kernel for geometric modeling.
//!
//! - [`Vector3d`] / [`ModifiableVector3d`]: vector algebra shared by owned vectors
//!   ([`Vec3`], [`ModifiableVec3`]) and views into caller-owned flat buffers
//!   ([`StoredVec3`], [`StoredVec3Mut`])
//! - [`Transform`]: a fluent builder accumulating rotations, translations,
//!   scalings and mirrorings in one row-major 4x4 [`Matrix4d`]
//! - [`Plane`]: anchor + unit normal with point classification and projection
//! - [`Spline3d`]: natural cubic spline through 3d control points
//!
//! Angles are in degrees throughout. A single shared tolerance (see
//! [`float_types::tolerance`]) governs vector equality, plane classification
//! and the collinearity test.
//!
//! # Features
//! #### Optional
//! - **wasm**: `wasm-bindgen` wrappers for vectors, transforms, planes and splines

#![forbid(unsafe_code)]
#![warn(unused)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod errors;
pub mod float_types;
pub mod matrix;
pub mod plane;
pub mod spline;
pub mod traits;
pub mod transform;
pub mod vector;
pub mod vectors;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use errors::VecMathError;
pub use matrix::Matrix4d;
pub use plane::{Orientation, Plane};
pub use spline::{Cubic, Spline3d};
pub use traits::{ModifiableVector3d, Vector3d};
pub use transform::Transform;
pub use vector::{ModifiableVec3, StoredVec3, StoredVec3Mut, Vec3};
