//! Natural cubic splines through 3d control points.
//!
//! Each axis is interpolated independently. For the values `v0..vn` of one
//! axis the derivatives `D0..Dn` at the control points solve the tridiagonal
//! system of a natural spline (zero second derivative at both ends):
//!
//! ```text
//! 2D0 +  D1             = 3(v1 - v0)
//!  Di-1 + 4Di + Di+1    = 3(vi+1 - vi-1)      0 < i < n
//!             Dn-1 + 2Dn = 3(vn - vn-1)
//! ```
//!
//! which is solved by forward elimination and back substitution
//! (Thomas algorithm). Segment `i` is then the cubic
//! `vi + Di·u + (3(vi+1 - vi) - 2Di - Di+1)·u² + (2(vi - vi+1) + Di + Di+1)·u³`
//! for `u ∈ [0, 1]`.

use crate::errors::VecMathError;
use crate::float_types::Real;
use crate::traits::Vector3d;
use crate::vector::Vec3;

/// `a + b·u + c·u² + d·u³`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cubic {
    pub a: Real,
    pub b: Real,
    pub c: Real,
    pub d: Real,
}

impl Cubic {
    pub const fn new(a: Real, b: Real, c: Real, d: Real) -> Self {
        Cubic { a, b, c, d }
    }

    /// Horner evaluation at `u`.
    #[inline]
    pub fn eval(&self, u: Real) -> Real {
        ((self.d * u + self.c) * u + self.b) * u + self.a
    }
}

/// Solves the natural cubic spline for one axis.
///
/// Returns `values.len() - 1` segments; at least two values are required.
pub fn natural_cubics(values: &[Real]) -> Result<Vec<Cubic>, VecMathError> {
    if values.len() < 2 {
        return Err(VecMathError::InsufficientPoints {
            required: 2,
            actual: values.len(),
        });
    }

    let n = values.len() - 1;
    let mut gamma = vec![0.0; n + 1];
    let mut delta = vec![0.0; n + 1];
    let mut d = vec![0.0; n + 1];

    gamma[0] = 0.5;
    for i in 1..n {
        gamma[i] = 1.0 / (4.0 - gamma[i - 1]);
    }
    gamma[n] = 1.0 / (2.0 - gamma[n - 1]);

    delta[0] = 3.0 * (values[1] - values[0]) * gamma[0];
    for i in 1..n {
        delta[i] = (3.0 * (values[i + 1] - values[i - 1]) - delta[i - 1]) * gamma[i];
    }
    delta[n] = (3.0 * (values[n] - values[n - 1]) - delta[n - 1]) * gamma[n];

    d[n] = delta[n];
    for i in (0..n).rev() {
        d[i] = delta[i] - gamma[i] * d[i + 1];
    }

    Ok((0..n)
        .map(|i| {
            Cubic::new(
                values[i],
                d[i],
                3.0 * (values[i + 1] - values[i]) - 2.0 * d[i] - d[i + 1],
                2.0 * (values[i] - values[i + 1]) + d[i] + d[i + 1],
            )
        })
        .collect())
}

/// A natural cubic spline through an ordered list of control points.
///
/// Points are collected with [`add_point`](Self::add_point), the cubics are
/// solved by [`calc_spline`](Self::calc_spline), and the curve is evaluated
/// with [`point`](Self::point). Adding a point invalidates the cubics until
/// the next `calc_spline`.
///
/// A spline is a single-owner accumulator mutated through `&mut self`; once
/// calculated, `point` and `sample` take `&self` and may be called from
/// several threads at once.
#[derive(Debug, Clone, Default)]
pub struct Spline3d {
    points: Vec<Vec3>,
    x_cubics: Vec<Cubic>,
    y_cubics: Vec<Cubic>,
    z_cubics: Vec<Cubic>,
    calculated: bool,
}

impl Spline3d {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_point<V: Vector3d + ?Sized>(&mut self, point: &V) -> &mut Self {
        self.points.push(point.to_vec3());
        self.calculated = false;
        self
    }

    pub fn points(&self) -> &[Vec3] {
        &self.points
    }

    /// Whether the cubics match the current control points.
    pub fn is_calculated(&self) -> bool {
        self.calculated
    }

    /// Solves the per-axis cubics for the current control points.
    pub fn calc_spline(&mut self) -> Result<&mut Self, VecMathError> {
        if self.points.len() < 2 {
            return Err(VecMathError::InsufficientPoints {
                required: 2,
                actual: self.points.len(),
            });
        }

        let xs: Vec<Real> = self.points.iter().map(|p| p.x()).collect();
        let ys: Vec<Real> = self.points.iter().map(|p| p.y()).collect();
        let zs: Vec<Real> = self.points.iter().map(|p| p.z()).collect();

        self.x_cubics = natural_cubics(&xs)?;
        self.y_cubics = natural_cubics(&ys)?;
        self.z_cubics = natural_cubics(&zs)?;
        self.calculated = true;

        tracing::debug!(
            points = self.points.len(),
            segments = self.x_cubics.len(),
            "spline calculated"
        );
        Ok(self)
    }

    /// The curve point at `t ∈ [0, 1)`; `t = 0` is the first control point.
    ///
    /// `t` is split evenly over the segments: segment `⌊t·N⌋` is evaluated at
    /// the fractional part of `t·N`.
    pub fn point(&self, t: Real) -> Result<Vec3, VecMathError> {
        if !self.calculated {
            return Err(VecMathError::SplineNotCalculated);
        }
        if !(0.0..1.0).contains(&t) {
            return Err(VecMathError::ParameterOutOfRange(t));
        }

        let segments = self.x_cubics.len();
        let position = t * segments as Real;
        let segment = (position as usize).min(segments - 1);
        let u = position - segment as Real;

        Ok(Vec3::xyz(
            self.x_cubics[segment].eval(u),
            self.y_cubics[segment].eval(u),
            self.z_cubics[segment].eval(u),
        ))
    }

    /// `n` curve points at `t = i / n` for `i` in `0..n`.
    pub fn sample(&self, n: usize) -> Result<Vec<Vec3>, VecMathError> {
        (0..n).map(|i| self.point(i as Real / n as Real)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn horner() {
        let c = Cubic::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(c.eval(0.0), 1.0);
        assert_eq!(c.eval(1.0), 10.0);
        assert_eq!(c.eval(2.0), 1.0 + 4.0 + 12.0 + 32.0);
    }

    #[test]
    fn two_values_are_linear() {
        let cubics = natural_cubics(&[1.0, 3.0]).unwrap();
        assert_eq!(cubics.len(), 1);
        let c = cubics[0];
        assert!((c.a - 1.0).abs() < 1e-12);
        assert!((c.b - 2.0).abs() < 1e-12);
        assert!(c.c.abs() < 1e-12);
        assert!(c.d.abs() < 1e-12);
    }

    #[test]
    fn segments_join_at_knots() {
        let values = [0.0, 2.0, -1.0, 4.0, 3.0];
        let cubics = natural_cubics(&values).unwrap();
        assert_eq!(cubics.len(), 4);
        for (i, c) in cubics.iter().enumerate() {
            assert!((c.eval(0.0) - values[i]).abs() < 1e-12);
            assert!((c.eval(1.0) - values[i + 1]).abs() < 1e-9);
        }
        // natural end condition: zero second derivative at both ends
        assert!(cubics[0].c.abs() < 1e-9);
        let last = cubics[3];
        assert!((2.0 * last.c + 6.0 * last.d).abs() < 1e-9);
    }

    #[test]
    fn single_value_rejected() {
        assert_eq!(
            natural_cubics(&[1.0]),
            Err(VecMathError::InsufficientPoints {
                required: 2,
                actual: 1
            })
        );
    }

    #[test]
    fn add_point_invalidates() {
        let mut spline = Spline3d::new();
        spline.add_point(&Vec3::ZERO).add_point(&Vec3::X_ONE);
        spline.calc_spline().unwrap();
        assert!(spline.is_calculated());

        spline.add_point(&Vec3::Y_ONE);
        assert!(!spline.is_calculated());
        assert_eq!(spline.point(0.0), Err(VecMathError::SplineNotCalculated));
    }
}
