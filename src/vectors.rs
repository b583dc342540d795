//! Bulk constructors turning flat value lists into vectors.

use crate::errors::VecMathError;
use crate::float_types::Real;
use crate::vector::Vec3;

fn grouped(values: &[Real], group: usize) -> Result<core::slice::ChunksExact<'_, Real>, VecMathError> {
    if values.len() % group != 0 {
        return Err(VecMathError::ValueCountNotMultiple {
            count: values.len(),
            group,
        });
    }
    Ok(values.chunks_exact(group))
}

/// One `(v, 0, 0)` per value.
pub fn x(values: &[Real]) -> Vec<Vec3> {
    values.iter().map(|&v| Vec3::from_x(v)).collect()
}

/// One `(0, v, 0)` per value.
pub fn y(values: &[Real]) -> Vec<Vec3> {
    values.iter().map(|&v| Vec3::from_y(v)).collect()
}

/// One `(0, 0, v)` per value.
pub fn z(values: &[Real]) -> Vec<Vec3> {
    values.iter().map(|&v| Vec3::from_z(v)).collect()
}

/// Pairs `x0, y0, x1, y1, ...` into `(x, y, 0)` vectors.
pub fn xy(values: &[Real]) -> Result<Vec<Vec3>, VecMathError> {
    Ok(grouped(values, 2)?.map(|c| Vec3::xy(c[0], c[1])).collect())
}

/// Pairs `x0, z0, x1, z1, ...` into `(x, 0, z)` vectors.
pub fn xz(values: &[Real]) -> Result<Vec<Vec3>, VecMathError> {
    Ok(grouped(values, 2)?.map(|c| Vec3::xz(c[0], c[1])).collect())
}

/// Pairs `y0, z0, y1, z1, ...` into `(0, y, z)` vectors.
pub fn yz(values: &[Real]) -> Result<Vec<Vec3>, VecMathError> {
    Ok(grouped(values, 2)?.map(|c| Vec3::yz(c[0], c[1])).collect())
}

/// Triples `x0, y0, z0, x1, ...` into full vectors.
pub fn xyz(values: &[Real]) -> Result<Vec<Vec3>, VecMathError> {
    Ok(grouped(values, 3)?.map(|c| Vec3::xyz(c[0], c[1], c[2])).collect())
}
