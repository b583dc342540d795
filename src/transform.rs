//! Affine transformations built up from elementary rotations, translations,
//! scalings and mirrorings.
//!
//! A [`Transform`] is a single mutable 4x4 accumulator. Every builder method
//! right-multiplies an elementary matrix `E` onto the accumulated matrix
//! (`M = M * E`). Acting on a point, the **most recently added** elementary
//! transform is therefore applied first:
//!
//! ```
//! use vecmath3d::{Transform, Vec3, Vector3d};
//!
//! let mut t = Transform::unity();
//! // scale first, then translate
//! t.translate(1.0, 0.0, 0.0).scale_uniform(2.0).unwrap();
//! assert_eq!(t.transform(&Vec3::X_ONE), Vec3::xyz(3.0, 0.0, 0.0));
//! ```
//!
//! Angles are given in degrees.

use crate::errors::VecMathError;
use crate::float_types::{ROTATION_DEGENERACY_THRESHOLD, Real, to_radians};
use crate::matrix::Matrix4d;
use crate::plane::Plane;
use crate::traits::{ModifiableVector3d, Vector3d};
use crate::vector::Vec3;
use nalgebra::Matrix4;
use std::fmt;

/// An accumulated 4x4 affine matrix.
///
/// A single-owner accumulator: builders take `&mut self`, while
/// [`transform`](Self::transform) takes `&self`, so a finished transform can
/// be shared by several readers and threads.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Transform {
    m: Matrix4d,
}

impl Transform {
    /// The identity transform.
    pub fn unity() -> Self {
        Transform {
            m: Matrix4d::identity(),
        }
    }

    /// Builds a transform from 16 row-major matrix values.
    pub fn from_values(values: &[Real]) -> Result<Self, VecMathError> {
        Ok(Transform {
            m: Matrix4d::from_row_slice(values)?,
        })
    }

    pub fn from_matrix(m: Matrix4d) -> Self {
        Transform { m }
    }

    pub const fn matrix(&self) -> &Matrix4d {
        &self.m
    }

    /// The accumulated matrix as 16 row-major values.
    pub fn to_values(&self) -> [Real; 16] {
        self.m.to_row_major()
    }

    /// Right-multiplies a row-major elementary matrix.
    fn push(&mut self, e: Matrix4<Real>) -> &mut Self {
        self.m.mul(&Matrix4d::from(e));
        self
    }

    /// Rotation about the x axis.
    pub fn rot_x(&mut self, degrees: Real) -> &mut Self {
        let (s, c) = to_radians(degrees).sin_cos();
        #[rustfmt::skip]
        let e = Matrix4::new(
            1.0, 0.0, 0.0, 0.0,
            0.0,   c,   s, 0.0,
            0.0,  -s,   c, 0.0,
            0.0, 0.0, 0.0, 1.0,
        );
        self.push(e)
    }

    /// Rotation about the y axis.
    pub fn rot_y(&mut self, degrees: Real) -> &mut Self {
        let (s, c) = to_radians(degrees).sin_cos();
        #[rustfmt::skip]
        let e = Matrix4::new(
              c, 0.0,  -s, 0.0,
            0.0, 1.0, 0.0, 0.0,
              s, 0.0,   c, 0.0,
            0.0, 0.0, 0.0, 1.0,
        );
        self.push(e)
    }

    /// Rotation about the z axis.
    pub fn rot_z(&mut self, degrees: Real) -> &mut Self {
        let (s, c) = to_radians(degrees).sin_cos();
        #[rustfmt::skip]
        let e = Matrix4::new(
              c,   s, 0.0, 0.0,
             -s,   c, 0.0, 0.0,
            0.0, 0.0, 1.0, 0.0,
            0.0, 0.0, 0.0, 1.0,
        );
        self.push(e)
    }

    /// Shorthand for `rot_x(x).rot_y(y).rot_z(z)`.
    pub fn rot(&mut self, x: Real, y: Real, z: Real) -> &mut Self {
        self.rot_x(x).rot_y(y).rot_z(z)
    }

    /// [`rot`](Self::rot) with the vector components as angles.
    pub fn rot_vec<V: Vector3d + ?Sized>(&mut self, angles: &V) -> &mut Self {
        self.rot(angles.x(), angles.y(), angles.z())
    }

    /// **Mathematical Foundation: Rotation about an arbitrary axis**
    ///
    /// Rotates by `degrees` about the line through `axis_pos` with direction
    /// `axis_dir` (normalized here). With `d = axis_dir / |axis_dir|`,
    /// `p = axis_pos`, `C = cos θ`, `S = sin θ`:
    ///
    /// ```text
    /// m00 = dx² + (dy² + dz²)C
    /// m01 = dx·dy(1 − C) − dz·S
    /// m03 = (px(dy² + dz²) − dx(py·dy + pz·dz))(1 − C) + (py·dz − pz·dy)S
    /// ...
    /// ```
    ///
    /// The translation column moves the rotation center from the origin onto
    /// the axis.
    pub fn rot_axis<P, D>(&mut self, axis_pos: &P, axis_dir: &D, degrees: Real) -> &mut Self
    where
        P: Vector3d + ?Sized,
        D: Vector3d + ?Sized,
    {
        let (s, c) = to_radians(degrees).sin_cos();
        let d = axis_dir.normalized();
        let (dx, dy, dz) = (d.x(), d.y(), d.z());
        let (px, py, pz) = (axis_pos.x(), axis_pos.y(), axis_pos.z());
        let (dx2, dy2, dz2) = (dx * dx, dy * dy, dz * dz);
        let ic = 1.0 - c;

        let m00 = dx2 + (dy2 + dz2) * c;
        let m01 = dx * dy * ic - dz * s;
        let m02 = dx * dz * ic + dy * s;
        let m03 = (px * (dy2 + dz2) - dx * (py * dy + pz * dz)) * ic + (py * dz - pz * dy) * s;

        let m10 = dx * dy * ic + dz * s;
        let m11 = dy2 + (dx2 + dz2) * c;
        let m12 = dy * dz * ic - dx * s;
        let m13 = (py * (dx2 + dz2) - dy * (px * dx + pz * dz)) * ic + (pz * dx - px * dz) * s;

        let m20 = dx * dz * ic - dy * s;
        let m21 = dy * dz * ic + dx * s;
        let m22 = dz2 + (dx2 + dy2) * c;
        let m23 = (pz * (dx2 + dy2) - dz * (px * dx + py * dy)) * ic + (px * dy - py * dx) * s;

        #[rustfmt::skip]
        let e = Matrix4::new(
            m00, m01, m02, m03,
            m10, m11, m12, m13,
            m20, m21, m22, m23,
            0.0, 0.0, 0.0, 1.0,
        );
        self.apply(&Transform::from_matrix(Matrix4d::from(e)))
    }

    /// Rotation turning direction `from` onto direction `to` about their
    /// common perpendicular.
    ///
    /// Parallel and anti-parallel directions (cross product magnitude at most
    /// [`ROTATION_DEGENERACY_THRESHOLD`]) leave the transform unchanged.
    pub fn rot_from_to<A, B>(&mut self, from: &A, to: &B) -> &mut Self
    where
        A: Vector3d + ?Sized,
        B: Vector3d + ?Sized,
    {
        let a = from.normalized();
        let b = to.normalized();
        let axis = a.crossed(&b);
        let len = axis.magnitude();

        if len > ROTATION_DEGENERACY_THRESHOLD {
            self.rot_axis(&Vec3::ZERO, &axis.normalized(), a.angle(&b))
        } else {
            tracing::trace!(%a, %b, len, "rot_from_to: directions are parallel, skipping");
            self
        }
    }

    pub fn translate(&mut self, x: Real, y: Real, z: Real) -> &mut Self {
        #[rustfmt::skip]
        let e = Matrix4::new(
            1.0, 0.0, 0.0,   x,
            0.0, 1.0, 0.0,   y,
            0.0, 0.0, 1.0,   z,
            0.0, 0.0, 0.0, 1.0,
        );
        self.push(e)
    }

    pub fn translate_vec<V: Vector3d + ?Sized>(&mut self, v: &V) -> &mut Self {
        self.translate(v.x(), v.y(), v.z())
    }

    pub fn translate_x(&mut self, x: Real) -> &mut Self {
        self.translate(x, 0.0, 0.0)
    }

    pub fn translate_y(&mut self, y: Real) -> &mut Self {
        self.translate(0.0, y, 0.0)
    }

    pub fn translate_z(&mut self, z: Real) -> &mut Self {
        self.translate(0.0, 0.0, z)
    }

    /// Mirrors about `plane`.
    ///
    /// The reflection is exact only for planes through the origin. For other
    /// planes the offset ends up in the bottom matrix row, which
    /// [`transform`](Self::transform) ignores, so points are mirrored about
    /// the parallel plane through the origin.
    pub fn mirror(&mut self, plane: &Plane) -> &mut Self {
        let n = plane.normal();
        let (nx, ny, nz) = (n.x(), n.y(), n.z());
        let w = plane.dist();

        if w != 0.0 {
            tracing::warn!(
                anchor = %plane.anchor(),
                normal = %n,
                "mirror: plane does not pass through the origin, offset is ignored"
            );
        }

        #[rustfmt::skip]
        let e = Matrix4::new(
            1.0 - 2.0 * nx * nx,      -2.0 * ny * nx,      -2.0 * nz * nx, 0.0,
                 -2.0 * nx * ny, 1.0 - 2.0 * ny * ny,      -2.0 * nz * ny, 0.0,
                 -2.0 * nx * nz,      -2.0 * ny * nz, 1.0 - 2.0 * nz * nz, 0.0,
                 -2.0 * nx * w,       -2.0 * ny * w,       -2.0 * nz * w,  1.0,
        );
        self.push(e)
    }

    /// Non-uniform scaling. A zero factor is rejected and leaves the
    /// transform unchanged.
    pub fn scale(&mut self, x: Real, y: Real, z: Real) -> Result<&mut Self, VecMathError> {
        if x == 0.0 || y == 0.0 || z == 0.0 {
            return Err(VecMathError::ZeroScale { x, y, z });
        }
        #[rustfmt::skip]
        let e = Matrix4::new(
              x, 0.0, 0.0, 0.0,
            0.0,   y, 0.0, 0.0,
            0.0, 0.0,   z, 0.0,
            0.0, 0.0, 0.0, 1.0,
        );
        Ok(self.push(e))
    }

    pub fn scale_vec<V: Vector3d + ?Sized>(&mut self, v: &V) -> Result<&mut Self, VecMathError> {
        self.scale(v.x(), v.y(), v.z())
    }

    pub fn scale_uniform(&mut self, s: Real) -> Result<&mut Self, VecMathError> {
        self.scale(s, s, s)
    }

    pub fn scale_x(&mut self, s: Real) -> Result<&mut Self, VecMathError> {
        self.scale(s, 1.0, 1.0)
    }

    pub fn scale_y(&mut self, s: Real) -> Result<&mut Self, VecMathError> {
        self.scale(1.0, s, 1.0)
    }

    pub fn scale_z(&mut self, s: Real) -> Result<&mut Self, VecMathError> {
        self.scale(1.0, 1.0, s)
    }

    /// Applies the transform to `v`. Only the upper three rows are used.
    pub fn transform<V: Vector3d + ?Sized>(&self, v: &V) -> Vec3 {
        let m = self.m.as_nalgebra();
        let (x, y, z) = (v.x(), v.y(), v.z());
        Vec3::xyz(
            m[(0, 0)] * x + m[(0, 1)] * y + m[(0, 2)] * z + m[(0, 3)],
            m[(1, 0)] * x + m[(1, 1)] * y + m[(1, 2)] * z + m[(1, 3)],
            m[(2, 0)] * x + m[(2, 1)] * y + m[(2, 2)] * z + m[(2, 3)],
        )
    }

    /// Applies the transform to `v` in place (also through stored views).
    pub fn transform_in_place<'v, M: ModifiableVector3d + ?Sized>(&self, v: &'v mut M) -> &'v mut M {
        let t = self.transform(&*v);
        v.assign(&t)
    }

    /// Blends between `v` and its transformed image:
    /// `v + amount * (transform(v) - v)`.
    pub fn transform_amount<V: Vector3d + ?Sized>(&self, v: &V, amount: Real) -> Vec3 {
        let prev = v.to_vec3();
        let next = self.transform(v);
        prev.plus(&next.minus(&prev).times(amount))
    }

    pub fn transform_in_place_amount<'v, M: ModifiableVector3d + ?Sized>(
        &self,
        v: &'v mut M,
        amount: Real,
    ) -> &'v mut M {
        let t = self.transform_amount(&*v, amount);
        v.assign(&t)
    }

    /// Whether the transform flips orientation (negative determinant).
    pub fn is_mirror(&self) -> bool {
        self.m.determinant() < 0.0
    }

    /// Right-multiplies `other` onto this transform: `M = M * other`.
    pub fn apply(&mut self, other: &Transform) -> &mut Self {
        self.m.mul(&other.m);
        self
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.m, f)
    }
}
