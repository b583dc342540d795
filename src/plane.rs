//! Planes given by an anchor point and a unit normal.

use crate::float_types::{Real, tolerance};
use crate::traits::Vector3d;
use crate::vector::Vec3;
use std::fmt;

/// Side of a plane a point lies on, relative to the normal direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i8)]
pub enum Orientation {
    Front = 1,
    On = 0,
    Back = -1,
}

impl From<Orientation> for i8 {
    fn from(o: Orientation) -> Self {
        o as i8
    }
}

/// An infinite plane.
///
/// The normal is normalized once at construction and never again, so
/// projections and signed distances assume `|normal| == 1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    anchor: Vec3,
    normal: Vec3,
}

impl Plane {
    /// The x-y plane through the origin, normal `+z`.
    pub const XY_PLANE: Plane = Plane::from_unit_normal(Vec3::ZERO, Vec3::Z_ONE);
    /// The x-z plane through the origin, normal `+y`.
    pub const XZ_PLANE: Plane = Plane::from_unit_normal(Vec3::ZERO, Vec3::Y_ONE);
    /// The y-z plane through the origin, normal `+x`.
    pub const YZ_PLANE: Plane = Plane::from_unit_normal(Vec3::ZERO, Vec3::X_ONE);

    const fn from_unit_normal(anchor: Vec3, normal: Vec3) -> Self {
        Plane { anchor, normal }
    }

    /// Plane through `point` with the direction of `normal`.
    /// A zero `normal` yields a NaN normal.
    pub fn from_point_and_normal<P, N>(point: &P, normal: &N) -> Self
    where
        P: Vector3d + ?Sized,
        N: Vector3d + ?Sized,
    {
        Plane {
            anchor: point.to_vec3(),
            normal: normal.normalized(),
        }
    }

    /// Plane through three points.
    ///
    /// The normal follows the right-hand rule on `(b - a) × (c - a)`; the
    /// anchor is the centroid of the triangle. Collinear points yield a NaN
    /// normal.
    pub fn from_points<A, B, C>(a: &A, b: &B, c: &C) -> Self
    where
        A: Vector3d + ?Sized,
        B: Vector3d + ?Sized,
        C: Vector3d + ?Sized,
    {
        let normal = b.minus(a).crossed(&c.minus(a)).normalized();
        let anchor = a.plus(b).plus(c).divided(3.0);
        Plane { anchor, normal }
    }

    pub const fn anchor(&self) -> Vec3 {
        self.anchor
    }

    pub const fn normal(&self) -> Vec3 {
        self.normal
    }

    /// Distance of the anchor from the origin.
    pub fn dist(&self) -> Real {
        self.anchor.magnitude()
    }

    /// Classifies `p` using the shared [`tolerance`].
    pub fn compare<P: Vector3d + ?Sized>(&self, p: &P) -> Orientation {
        self.compare_with_tolerance(p, tolerance())
    }

    /// Classifies `p` by its signed distance `t = n · (p - anchor)`:
    /// `Back` if `t < -tol`, `Front` if `t > tol`, otherwise `On`.
    pub fn compare_with_tolerance<P: Vector3d + ?Sized>(&self, p: &P, tol: Real) -> Orientation {
        let t = self.normal.dot(&p.minus(&self.anchor));
        if t < -tol {
            Orientation::Back
        } else if t > tol {
            Orientation::Front
        } else {
            Orientation::On
        }
    }

    /// Orthogonal projection of `p` onto the plane.
    pub fn project<P: Vector3d + ?Sized>(&self, p: &P) -> Vec3 {
        let along_normal = self.normal.project(&p.minus(&self.anchor));
        p.minus(&along_normal)
    }

    /// Unsigned distance of `p` from the plane.
    pub fn distance<P: Vector3d + ?Sized>(&self, p: &P) -> Real {
        p.distance(&self.project(p))
    }

    /// Same anchor, opposite normal.
    pub fn flipped(&self) -> Plane {
        Plane {
            anchor: self.anchor,
            normal: self.normal.negated(),
        }
    }
}

impl fmt::Display for Plane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Plane(anchor: {}, normal: {})", self.anchor, self.normal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_planes() {
        assert_eq!(Plane::XY_PLANE.normal(), Vec3::Z_ONE);
        assert_eq!(Plane::XZ_PLANE.normal(), Vec3::Y_ONE);
        assert_eq!(Plane::YZ_PLANE.normal(), Vec3::X_ONE);
        assert_eq!(Plane::XY_PLANE.dist(), 0.0);
    }

    #[test]
    fn explicit_tolerance() {
        let p = Vec3::xyz(0.0, 0.0, 0.01);
        assert_eq!(Plane::XY_PLANE.compare(&p), Orientation::Front);
        assert_eq!(
            Plane::XY_PLANE.compare_with_tolerance(&p, 0.1),
            Orientation::On
        );
        assert_eq!(i8::from(Orientation::Back), -1);
    }

    #[test]
    fn normal_is_normalized() {
        let plane = Plane::from_point_and_normal(&Vec3::ZERO, &Vec3::xyz(0.0, 0.0, 5.0));
        assert_eq!(plane.normal(), Vec3::Z_ONE);
    }
}
