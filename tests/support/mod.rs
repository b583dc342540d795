//! Test support library
//! Provides various helper functions & utilities for tests.
#![allow(dead_code)]

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use vecmath3d::{Transform, Vec3, Vector3d, float_types::Real};

/// Quick helper to compare floating-point results with an acceptable tolerance.
pub fn approx_eq(a: Real, b: Real, eps: Real) -> bool {
    (a - b).abs() < eps
}

/// Compares two vectors by their distance.
pub fn vec_approx_eq<A, B>(a: &A, b: &B, eps: Real) -> bool
where
    A: Vector3d + ?Sized,
    B: Vector3d + ?Sized,
{
    a.distance(b) < eps
}

/// Deterministic generator so failures are reproducible.
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// A vector with every component drawn from `[-extent, extent)`.
pub fn random_vector(rng: &mut StdRng, extent: Real) -> Vec3 {
    Vec3::xyz(
        rng.gen_range(-extent..extent),
        rng.gen_range(-extent..extent),
        rng.gen_range(-extent..extent),
    )
}

/// A rotation about x, y and z by random angles in degrees.
pub fn random_rotation(rng: &mut StdRng) -> Transform {
    let mut t = Transform::unity();
    t.rot(
        rng.gen_range(0.0..360.0),
        rng.gen_range(0.0..360.0),
        rng.gen_range(0.0..360.0),
    );
    t
}

/// Routes `tracing` output through the test harness. Safe to call repeatedly.
pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
