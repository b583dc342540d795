use crate::errors::VecMathError;
use crate::float_types::{PI, Real, tolerance};
use crate::transform::Transform;
use crate::vector::{ModifiableVec3, Vec3};
use nalgebra::{Point3, Vector3};
use std::fmt::{self, Write};

/// Read-only vector algebra.
///
/// Implementors only provide the three component accessors; every algebraic
/// operation is derived from them, so owned vectors and views of external
/// storage behave identically. All operations are pure and return a new [`Vec3`].
pub trait Vector3d {
    fn x(&self) -> Real;
    fn y(&self) -> Real;
    fn z(&self) -> Real;

    /// Returns an owned copy of this vector.
    fn to_vec3(&self) -> Vec3 {
        Vec3::xyz(self.x(), self.y(), self.z())
    }

    /// Returns a modifiable copy of this vector.
    fn as_modifiable(&self) -> ModifiableVec3 {
        ModifiableVec3::xyz(self.x(), self.y(), self.z())
    }

    fn to_array(&self) -> [Real; 3] {
        [self.x(), self.y(), self.z()]
    }

    /// Returns the `i`-th component (`0 => x`, `1 => y`, `2 => z`).
    fn get(&self, i: usize) -> Result<Real, VecMathError> {
        match i {
            0 => Ok(self.x()),
            1 => Ok(self.y()),
            2 => Ok(self.z()),
            _ => Err(VecMathError::IndexOutOfRange { index: i, len: 3 }),
        }
    }

    /// The components as an `nalgebra` column vector.
    #[inline]
    fn coords(&self) -> Vector3<Real> {
        Vector3::new(self.x(), self.y(), self.z())
    }

    /// The components as an `nalgebra` point.
    #[inline]
    fn to_point(&self) -> Point3<Real> {
        Point3::new(self.x(), self.y(), self.z())
    }

    fn plus<V: Vector3d + ?Sized>(&self, v: &V) -> Vec3 {
        Vec3::from(self.coords() + v.coords())
    }

    fn plus_xyz(&self, x: Real, y: Real, z: Real) -> Vec3 {
        Vec3::xyz(self.x() + x, self.y() + y, self.z() + z)
    }

    fn minus<V: Vector3d + ?Sized>(&self, v: &V) -> Vec3 {
        Vec3::from(self.coords() - v.coords())
    }

    fn minus_xyz(&self, x: Real, y: Real, z: Real) -> Vec3 {
        Vec3::xyz(self.x() - x, self.y() - y, self.z() - z)
    }

    fn times(&self, a: Real) -> Vec3 {
        Vec3::from(self.coords() * a)
    }

    /// Component-wise product.
    fn times_vec<V: Vector3d + ?Sized>(&self, a: &V) -> Vec3 {
        Vec3::from(self.coords().component_mul(&a.coords()))
    }

    fn times_xyz(&self, x: Real, y: Real, z: Real) -> Vec3 {
        Vec3::xyz(self.x() * x, self.y() * y, self.z() * z)
    }

    /// Divides every component by `a`. Dividing by zero yields infinities/NaN.
    fn divided(&self, a: Real) -> Vec3 {
        Vec3::from(self.coords() / a)
    }

    fn dot<V: Vector3d + ?Sized>(&self, a: &V) -> Real {
        self.coords().dot(&a.coords())
    }

    /// Right-handed cross product `self × a`.
    fn crossed<V: Vector3d + ?Sized>(&self, a: &V) -> Vec3 {
        Vec3::from(self.coords().cross(&a.coords()))
    }

    fn magnitude(&self) -> Real {
        self.dot(self).sqrt()
    }

    fn magnitude_sq(&self) -> Real {
        self.dot(self)
    }

    /// `self / |self|`. The zero vector yields NaN components; callers must guard.
    fn normalized(&self) -> Vec3 {
        self.divided(self.magnitude())
    }

    fn negated(&self) -> Vec3 {
        Vec3::from(-self.coords())
    }

    /// Returns some vector orthogonal to this one (zero for the zero vector).
    fn orthogonal(&self) -> Vec3 {
        if self.z().abs() < self.x().abs() {
            Vec3::xy(self.y(), -self.x())
        } else {
            Vec3::yz(-self.z(), self.y())
        }
    }

    /// **Mathematical Foundation: Angle Between Vectors**
    ///
    /// ```text
    /// θ = arccos(clamp(a · b / (|a| · |b|), -1, 1))
    /// ```
    ///
    /// Returns the angle in **degrees** `[0, 180]`. The clamp absorbs round-off
    /// pushing the cosine slightly outside `[-1, 1]`.
    fn angle<V: Vector3d + ?Sized>(&self, v: &V) -> Real {
        let val = self.dot(v) / (self.magnitude() * v.magnitude());
        val.clamp(-1.0, 1.0).acos() * 180.0 / PI
    }

    fn distance<V: Vector3d + ?Sized>(&self, p: &V) -> Real {
        self.minus(p).magnitude()
    }

    /// `self + t·(a − self)`. `t` is not clamped, so values outside `[0, 1]` extrapolate.
    fn lerp<V: Vector3d + ?Sized>(&self, a: &V, t: Real) -> Vec3 {
        self.plus(&a.minus(self).times(t))
    }

    /// Projects `v` onto this vector: `self · (v·self / |self|²)`.
    /// Undefined (NaN) when `self` is the zero vector.
    fn project<V: Vector3d + ?Sized>(&self, v: &V) -> Vec3 {
        let p_scale = v.dot(self) / self.magnitude_sq();
        self.times(p_scale)
    }

    /// Whether `self`, `p2` and `p3` lie on one line.
    ///
    /// The points are collinear iff the largest of the pairwise distances
    /// equals the sum of the other two (within [`tolerance`]). When all three
    /// distances are equal, only identical points are collinear; a nonzero
    /// equilateral triangle is not. Two coincident points and a third one are
    /// collinear.
    fn collinear<A, B>(&self, p2: &A, p3: &B) -> bool
    where
        A: Vector3d + ?Sized,
        B: Vector3d + ?Sized,
    {
        let a = self.distance(p2);
        let b = self.distance(p3);
        let c = p2.distance(p3);

        if a == b && b == c {
            return a == 0.0;
        }

        let largest = a.max(b).max(c);
        (largest - (a + b + c - largest)).abs() < tolerance()
    }

    /// Component-wise comparison with the shared [`tolerance`].
    ///
    /// Not transitive: `a ≈ b` and `b ≈ c` do not imply `a ≈ c`.
    fn eq_within_tolerance<V: Vector3d + ?Sized>(&self, other: &V) -> bool {
        let tol = tolerance();
        (self.x() - other.x()).abs() <= tol
            && (self.y() - other.y()).abs() <= tol
            && (self.z() - other.z()).abs() <= tol
    }

    fn transformed(&self, transform: &Transform) -> Vec3 {
        transform.transform(self)
    }

    fn transformed_amount(&self, transform: &Transform, amount: Real) -> Vec3 {
        transform.transform_amount(self, amount)
    }

    /// Writes `"x y z"` as used in ASCII STL `vertex` lines.
    fn write_stl<W: Write>(&self, out: &mut W) -> fmt::Result {
        write!(out, "{} {} {}", self.x(), self.y(), self.z())
    }

    fn to_stl_string(&self) -> String {
        let mut s = String::new();
        // writing into a String cannot fail
        let _ = self.write_stl(&mut s);
        s
    }

    /// Writes `"x y z"` as used in Wavefront OBJ `v` lines.
    fn write_obj<W: Write>(&self, out: &mut W) -> fmt::Result {
        write!(out, "{} {} {}", self.x(), self.y(), self.z())
    }

    fn to_obj_string(&self) -> String {
        let mut s = String::new();
        let _ = self.write_obj(&mut s);
        s
    }
}

/// In-place vector algebra for vectors that own or view writable storage.
///
/// Every mutating operation returns `&mut Self` so calls can be chained.
pub trait ModifiableVector3d: Vector3d {
    fn set_x(&mut self, x: Real);
    fn set_y(&mut self, y: Real);
    fn set_z(&mut self, z: Real);

    /// Sets the `i`-th component. Fails without modifying anything if `i > 2`.
    fn set(&mut self, i: usize, value: Real) -> Result<&mut Self, VecMathError> {
        match i {
            0 => self.set_x(value),
            1 => self.set_y(value),
            2 => self.set_z(value),
            _ => return Err(VecMathError::IndexOutOfRange { index: i, len: 3 }),
        }
        Ok(self)
    }

    /// Sets the leading components from `values` (`x`, then `y`, then `z`).
    /// More than three values are rejected before anything is written.
    fn set_components(&mut self, values: &[Real]) -> Result<&mut Self, VecMathError> {
        if values.len() > 3 {
            return Err(VecMathError::TooManyComponents(values.len()));
        }
        for (i, value) in values.iter().enumerate() {
            self.set(i, *value)?;
        }
        Ok(self)
    }

    fn assign<V: Vector3d + ?Sized>(&mut self, v: &V) -> &mut Self {
        self.set_x(v.x());
        self.set_y(v.y());
        self.set_z(v.z());
        self
    }

    fn add<V: Vector3d + ?Sized>(&mut self, v: &V) -> &mut Self {
        let sum = self.plus(v);
        self.assign(&sum)
    }

    fn add_xyz(&mut self, x: Real, y: Real, z: Real) -> &mut Self {
        let sum = self.plus_xyz(x, y, z);
        self.assign(&sum)
    }

    fn subtract<V: Vector3d + ?Sized>(&mut self, v: &V) -> &mut Self {
        let diff = self.minus(v);
        self.assign(&diff)
    }

    fn subtract_xyz(&mut self, x: Real, y: Real, z: Real) -> &mut Self {
        let diff = self.minus_xyz(x, y, z);
        self.assign(&diff)
    }

    fn multiply(&mut self, a: Real) -> &mut Self {
        let scaled = self.times(a);
        self.assign(&scaled)
    }

    fn multiply_vec<V: Vector3d + ?Sized>(&mut self, a: &V) -> &mut Self {
        let scaled = self.times_vec(a);
        self.assign(&scaled)
    }

    fn divide(&mut self, a: Real) -> &mut Self {
        let scaled = self.divided(a);
        self.assign(&scaled)
    }

    /// Component-wise division.
    fn divide_vec<V: Vector3d + ?Sized>(&mut self, v: &V) -> &mut Self {
        let q = Vec3::from(self.coords().component_div(&v.coords()));
        self.assign(&q)
    }

    /// Replaces this vector with `self × a`.
    fn cross<V: Vector3d + ?Sized>(&mut self, a: &V) -> &mut Self {
        let c = self.crossed(a);
        self.assign(&c)
    }

    fn negate(&mut self) -> &mut Self {
        self.multiply(-1.0)
    }

    fn normalize(&mut self) -> &mut Self {
        let m = self.magnitude();
        self.divide(m)
    }
}
