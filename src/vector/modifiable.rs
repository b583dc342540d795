use crate::float_types::Real;
use crate::traits::{ModifiableVector3d, Vector3d};
use crate::vector::Vec3;
use std::fmt;

/// A 3d vector that can be modified in place.
#[derive(Debug, Clone, Copy, Default)]
pub struct ModifiableVec3 {
    x: Real,
    y: Real,
    z: Real,
}

impl ModifiableVec3 {
    #[inline]
    pub const fn xyz(x: Real, y: Real, z: Real) -> Self {
        ModifiableVec3 { x, y, z }
    }

    pub const fn zero() -> Self {
        ModifiableVec3::xyz(0.0, 0.0, 0.0)
    }

    /// Freezes the current value into an immutable [`Vec3`].
    pub const fn freeze(&self) -> Vec3 {
        Vec3::xyz(self.x, self.y, self.z)
    }
}

impl Vector3d for ModifiableVec3 {
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

impl ModifiableVector3d for ModifiableVec3 {
    #[inline]
    fn set_x(&mut self, x: Real) {
        self.x = x;
    }

    #[inline]
    fn set_y(&mut self, y: Real) {
        self.y = y;
    }

    #[inline]
    fn set_z(&mut self, z: Real) {
        self.z = z;
    }
}

impl PartialEq for ModifiableVec3 {
    fn eq(&self, other: &Self) -> bool {
        self.eq_within_tolerance(other)
    }
}

impl fmt::Display for ModifiableVec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}, {}]", self.x, self.y, self.z)
    }
}

impl From<Vec3> for ModifiableVec3 {
    fn from(v: Vec3) -> Self {
        v.as_modifiable()
    }
}

impl From<ModifiableVec3> for Vec3 {
    fn from(v: ModifiableVec3) -> Self {
        v.freeze()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::VecMathError;

    #[test]
    fn setters_chain() {
        let mut v = ModifiableVec3::zero();
        v.set(0, 1.0).unwrap().set(1, 2.0).unwrap().set(2, 3.0).unwrap();
        assert_eq!(v.freeze(), Vec3::xyz(1.0, 2.0, 3.0));
    }

    #[test]
    fn illegal_index_leaves_vector_untouched() {
        let mut v = ModifiableVec3::xyz(1.0, 2.0, 3.0);
        assert_eq!(
            v.set(3, 9.0).err(),
            Some(VecMathError::IndexOutOfRange { index: 3, len: 3 })
        );
        assert_eq!(v, ModifiableVec3::xyz(1.0, 2.0, 3.0));
    }

    #[test]
    fn set_components() {
        let mut v = ModifiableVec3::xyz(1.0, 2.0, 3.0);
        v.set_components(&[7.0, 8.0]).unwrap();
        assert_eq!(v, ModifiableVec3::xyz(7.0, 8.0, 3.0));

        assert_eq!(
            v.set_components(&[0.0, 0.0, 0.0, 0.0]).err(),
            Some(VecMathError::TooManyComponents(4))
        );
        assert_eq!(v, ModifiableVec3::xyz(7.0, 8.0, 3.0));
    }

    #[test]
    fn in_place_algebra() {
        let mut v = ModifiableVec3::xyz(1.0, 0.0, 0.0);
        v.add(&Vec3::Y_ONE).add_xyz(0.0, 0.0, 1.0);
        assert_eq!(v.freeze(), Vec3::UNITY);

        v.multiply(4.0).subtract_xyz(1.0, 2.0, 3.0);
        assert_eq!(v.freeze(), Vec3::xyz(3.0, 2.0, 1.0));

        v.divide(2.0).multiply_vec(&Vec3::xyz(2.0, 1.0, 4.0));
        assert_eq!(v.freeze(), Vec3::xyz(3.0, 1.0, 2.0));

        v.divide_vec(&Vec3::xyz(3.0, 1.0, 2.0)).negate();
        assert_eq!(v.freeze(), Vec3::xyz(-1.0, -1.0, -1.0));

        v.subtract(&Vec3::xyz(-1.0, -1.0, 0.0)).normalize();
        assert_eq!(v.freeze(), Vec3::xyz(0.0, 0.0, -1.0));
    }

    #[test]
    fn in_place_cross_uses_original_components() {
        let mut v = ModifiableVec3::xyz(1.0, 0.0, 0.0);
        v.cross(&Vec3::Y_ONE);
        assert_eq!(v.freeze(), Vec3::Z_ONE);

        let mut w = ModifiableVec3::xyz(1.0, 2.0, 3.0);
        w.cross(&Vec3::xyz(4.0, 5.0, 6.0));
        assert_eq!(w.freeze(), Vec3::xyz(-3.0, 6.0, -3.0));
    }
}
