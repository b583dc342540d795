// Our Real scalar type:
pub type Real = f64;

use core::str::FromStr;
use std::sync::OnceLock;

/// Lazily-initialized tolerance shared by vector equality, plane-side
/// classification and the collinearity test.
/// Defaults to `1e-12`, but can be overridden:
///  1) **Build-time**: set env var `VECMATH3D_TOLERANCE` (e.g. `VECMATH3D_TOLERANCE=1e-9 cargo build`)
///  2) **Runtime**: call [`set_tolerance`] once before using the library
static TOLERANCE_CELL: OnceLock<Real> = OnceLock::new();

/// Default tolerance when nothing else is configured.
pub const DEFAULT_TOLERANCE: Real = 1e-12;

/// Below this cross-product magnitude `Transform::rot_from_to` treats its two
/// directions as parallel and applies no rotation. Independent of [`tolerance`].
pub const ROTATION_DEGENERACY_THRESHOLD: Real = 1e-9;

fn parse_tolerance(value: &str) -> Option<Real> {
    Real::from_str(value.trim())
        .ok()
        .filter(|v| v.is_finite() && *v >= 0.0)
        .map(|v| v.max(Real::EPSILON))
}

/// Returns the current tolerance.
/// If not set yet, it tries `VECMATH3D_TOLERANCE` (parsed as `Real`) and
/// falls back to [`DEFAULT_TOLERANCE`].
pub fn tolerance() -> Real {
    *TOLERANCE_CELL.get_or_init(|| {
        // Compile-time env if provided, inherited by dependencies
        if let Some(environment_variable) = option_env!("VECMATH3D_TOLERANCE") {
            if let Some(value) = parse_tolerance(environment_variable) {
                return value;
            }
        }
        DEFAULT_TOLERANCE
    })
}

/// Set the tolerance programmatically once (subsequent calls are ignored).
/// Call near program start: `vecmath3d::float_types::set_tolerance(1e-9);`
///
/// Returns `true` if the value was installed.
pub fn set_tolerance(value: Real) -> bool {
    let value = value.max(Real::EPSILON);
    match TOLERANCE_CELL.set(value) {
        Ok(()) => true,
        Err(rejected) => {
            tracing::warn!(
                rejected,
                current = tolerance(),
                "tolerance already fixed, ignoring set_tolerance"
            );
            false
        },
    }
}

// Pi
/// Archimedes' constant (π)
pub const PI: Real = core::f64::consts::PI;

/// π/2
pub const FRAC_PI_2: Real = core::f64::consts::FRAC_PI_2;

/// Degrees to radians, as the transform builders compute it.
#[inline]
pub fn to_radians(degrees: Real) -> Real {
    degrees * PI * (1.0 / 180.0)
}
