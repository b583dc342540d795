//! Row-major 4x4 matrix used as the accumulator of [`Transform`](crate::transform::Transform).

use crate::errors::VecMathError;
use crate::float_types::Real;
use nalgebra::Matrix4;
use std::fmt;

/// A 4x4 homogeneous matrix.
///
/// Storage is delegated to [`nalgebra::Matrix4`]; this type only fixes the
/// row-major conventions used when importing, exporting and indexing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix4d {
    m: Matrix4<Real>,
}

impl Matrix4d {
    pub fn identity() -> Self {
        Matrix4d {
            m: Matrix4::identity(),
        }
    }

    /// Builds a matrix from 16 values in row-major order.
    pub fn from_row_slice(values: &[Real]) -> Result<Self, VecMathError> {
        if values.len() != 16 {
            return Err(VecMathError::WrongValueCount {
                expected: 16,
                actual: values.len(),
            });
        }
        Ok(Matrix4d {
            m: Matrix4::from_row_slice(values),
        })
    }

    /// Multiplies in place from the right: `self = self * other`.
    pub fn mul(&mut self, other: &Matrix4d) -> &mut Self {
        self.m *= other.m;
        self
    }

    pub fn determinant(&self) -> Real {
        self.m.determinant()
    }

    pub fn get(&self, row: usize, col: usize) -> Result<Real, VecMathError> {
        Self::check(row, col)?;
        Ok(self.m[(row, col)])
    }

    pub fn set(&mut self, row: usize, col: usize, value: Real) -> Result<&mut Self, VecMathError> {
        Self::check(row, col)?;
        self.m[(row, col)] = value;
        Ok(self)
    }

    /// The 16 values in row-major order.
    pub fn to_row_major(&self) -> [Real; 16] {
        let mut out = [0.0; 16];
        for row in 0..4 {
            for col in 0..4 {
                out[row * 4 + col] = self.m[(row, col)];
            }
        }
        out
    }

    /// The underlying `nalgebra` matrix.
    pub const fn as_nalgebra(&self) -> &Matrix4<Real> {
        &self.m
    }

    fn check(row: usize, col: usize) -> Result<(), VecMathError> {
        if row > 3 {
            return Err(VecMathError::IndexOutOfRange { index: row, len: 4 });
        }
        if col > 3 {
            return Err(VecMathError::IndexOutOfRange { index: col, len: 4 });
        }
        Ok(())
    }
}

impl Default for Matrix4d {
    fn default() -> Self {
        Matrix4d::identity()
    }
}

impl From<Matrix4<Real>> for Matrix4d {
    fn from(m: Matrix4<Real>) -> Self {
        Matrix4d { m }
    }
}

impl From<Matrix4d> for Matrix4<Real> {
    fn from(m: Matrix4d) -> Self {
        m.m
    }
}

impl fmt::Display for Matrix4d {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..4 {
            writeln!(
                f,
                "{} {} {} {}",
                self.m[(row, 0)],
                self.m[(row, 1)],
                self.m[(row, 2)],
                self.m[(row, 3)]
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counting() -> Matrix4d {
        let values: Vec<Real> = (0..16).map(|i| i as Real).collect();
        Matrix4d::from_row_slice(&values).unwrap()
    }

    #[test]
    fn row_major_layout() {
        let m = counting();
        assert_eq!(m.get(0, 3).unwrap(), 3.0);
        assert_eq!(m.get(3, 0).unwrap(), 12.0);
        assert_eq!(m.to_row_major()[7], 7.0);
    }

    #[test]
    fn wrong_value_count() {
        assert_eq!(
            Matrix4d::from_row_slice(&[1.0; 9]),
            Err(VecMathError::WrongValueCount {
                expected: 16,
                actual: 9
            })
        );
    }

    #[test]
    fn index_checks() {
        let mut m = Matrix4d::identity();
        assert_eq!(
            m.get(4, 0),
            Err(VecMathError::IndexOutOfRange { index: 4, len: 4 })
        );
        assert!(m.set(0, 4, 1.0).is_err());
        assert_eq!(m, Matrix4d::identity());

        m.set(1, 2, 5.0).unwrap();
        assert_eq!(m.get(1, 2).unwrap(), 5.0);
    }

    #[test]
    fn right_multiplication() {
        let mut a = Matrix4d::identity();
        a.set(0, 3, 2.0).unwrap();
        let mut b = Matrix4d::identity();
        b.set(0, 0, 3.0).unwrap();

        // (T * S) scales first, then translates
        a.mul(&b);
        assert_eq!(a.get(0, 0).unwrap(), 3.0);
        assert_eq!(a.get(0, 3).unwrap(), 2.0);
        assert!((a.determinant() - 3.0).abs() < 1e-12);
    }

    #[test]
    fn display_rows() {
        let text = Matrix4d::identity().to_string();
        assert_eq!(text.lines().count(), 4);
        assert_eq!(text.lines().next(), Some("1 0 0 0"));
    }
}
