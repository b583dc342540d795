//! Owned vector types and views over external storage.

use crate::float_types::Real;
use crate::traits::Vector3d;
use core::ops::{Add, Div, Mul, Neg, Sub};
use nalgebra::{Point3, Vector3};
use std::fmt;

mod modifiable;
pub mod stored;

pub use modifiable::ModifiableVec3;
pub use stored::{STRUCT_SIZE, StoredVec3, StoredVec3Mut, stored_vectors};

/// An immutable 3d vector.
///
/// Equality compares components with the shared tolerance, see
/// [`Vector3d::eq_within_tolerance`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Vec3 {
    x: Real,
    y: Real,
    z: Real,
}

impl Vec3 {
    /// `(0, 0, 0)`
    pub const ZERO: Vec3 = Vec3::xyz(0.0, 0.0, 0.0);
    /// `(1, 1, 1)`
    pub const UNITY: Vec3 = Vec3::xyz(1.0, 1.0, 1.0);
    /// `(1, 0, 0)`
    pub const X_ONE: Vec3 = Vec3::xyz(1.0, 0.0, 0.0);
    /// `(0, 1, 0)`
    pub const Y_ONE: Vec3 = Vec3::xyz(0.0, 1.0, 0.0);
    /// `(0, 0, 1)`
    pub const Z_ONE: Vec3 = Vec3::xyz(0.0, 0.0, 1.0);

    #[inline]
    pub const fn xyz(x: Real, y: Real, z: Real) -> Self {
        Vec3 { x, y, z }
    }

    /// `(x, y, 0)`
    #[inline]
    pub const fn xy(x: Real, y: Real) -> Self {
        Vec3::xyz(x, y, 0.0)
    }

    /// `(x, 0, z)`
    #[inline]
    pub const fn xz(x: Real, z: Real) -> Self {
        Vec3::xyz(x, 0.0, z)
    }

    /// `(0, y, z)`
    #[inline]
    pub const fn yz(y: Real, z: Real) -> Self {
        Vec3::xyz(0.0, y, z)
    }

    /// `(x, 0, 0)`
    #[inline]
    pub const fn from_x(x: Real) -> Self {
        Vec3::xyz(x, 0.0, 0.0)
    }

    /// `(0, y, 0)`
    #[inline]
    pub const fn from_y(y: Real) -> Self {
        Vec3::xyz(0.0, y, 0.0)
    }

    /// `(0, 0, z)`
    #[inline]
    pub const fn from_z(z: Real) -> Self {
        Vec3::xyz(0.0, 0.0, z)
    }

    pub const fn zero() -> Self {
        Vec3::ZERO
    }

    pub const fn unity() -> Self {
        Vec3::UNITY
    }
}

impl Vector3d for Vec3 {
    #[inline]
    fn x(&self) -> Real {
        self.x
    }

    #[inline]
    fn y(&self) -> Real {
        self.y
    }

    #[inline]
    fn z(&self) -> Real {
        self.z
    }
}

impl PartialEq for Vec3 {
    fn eq(&self, other: &Self) -> bool {
        self.eq_within_tolerance(other)
    }
}

impl fmt::Display for Vec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}, {}]", self.x, self.y, self.z)
    }
}

impl From<[Real; 3]> for Vec3 {
    fn from(v: [Real; 3]) -> Self {
        Vec3::xyz(v[0], v[1], v[2])
    }
}

impl From<Vec3> for [Real; 3] {
    fn from(v: Vec3) -> Self {
        [v.x, v.y, v.z]
    }
}

impl From<Vector3<Real>> for Vec3 {
    fn from(v: Vector3<Real>) -> Self {
        Vec3::xyz(v.x, v.y, v.z)
    }
}

impl From<Vec3> for Vector3<Real> {
    fn from(v: Vec3) -> Self {
        Vector3::new(v.x, v.y, v.z)
    }
}

impl From<Point3<Real>> for Vec3 {
    fn from(p: Point3<Real>) -> Self {
        Vec3::xyz(p.x, p.y, p.z)
    }
}

impl From<Vec3> for Point3<Real> {
    fn from(v: Vec3) -> Self {
        Point3::new(v.x, v.y, v.z)
    }
}

impl Add for Vec3 {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        self.plus(&other)
    }
}

impl Sub for Vec3 {
    type Output = Self;
    fn sub(self, other: Self) -> Self {
        self.minus(&other)
    }
}

impl Mul<Real> for Vec3 {
    type Output = Self;
    fn mul(self, scalar: Real) -> Self {
        self.times(scalar)
    }
}

impl Div<Real> for Vec3 {
    type Output = Self;
    fn div(self, scalar: Real) -> Self {
        self.divided(scalar)
    }
}

impl Neg for Vec3 {
    type Output = Self;
    fn neg(self) -> Self {
        self.negated()
    }
}
