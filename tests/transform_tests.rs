mod support;

use support::{init_logging, random_rotation, random_vector, seeded_rng, vec_approx_eq};
use vecmath3d::{Plane, Transform, Vec3, VecMathError, Vector3d, float_types::Real};

const EPS: Real = 1e-9;

#[test]
fn unity_is_identity() {
    let mut rng = seeded_rng(20);
    let t = Transform::unity();
    for _ in 0..10 {
        let v = random_vector(&mut rng, 100.0);
        assert_eq!(t.transform(&v), v);
    }
    assert!(!t.is_mirror());
}

#[test]
fn rotations_preserve_length() {
    let mut rng = seeded_rng(21);
    for _ in 0..20 {
        let rot = random_rotation(&mut rng);
        let v = random_vector(&mut rng, 10.0);
        let r = rot.transform(&v);
        assert!((r.magnitude() - v.magnitude()).abs() < EPS);
        assert!(!rot.is_mirror());
    }
}

#[test]
fn rot_is_x_then_y_then_z() {
    let mut combined = Transform::unity();
    combined.rot(30.0, 40.0, 50.0);

    let mut chained = Transform::unity();
    chained.rot_x(30.0).rot_y(40.0).rot_z(50.0);

    let mut from_vec = Transform::unity();
    from_vec.rot_vec(&Vec3::xyz(30.0, 40.0, 50.0));

    assert_eq!(combined, chained);
    assert_eq!(combined, from_vec);
}

#[test]
fn rotated_basis_stays_orthogonal() {
    let mut rng = seeded_rng(22);
    let rot = random_rotation(&mut rng);
    let x = rot.transform(&Vec3::X_ONE);
    let y = rot.transform(&Vec3::Y_ONE);
    let z = rot.transform(&Vec3::Z_ONE);
    assert!(x.dot(&y).abs() < EPS);
    assert!(y.dot(&z).abs() < EPS);
    assert!(z.dot(&x).abs() < EPS);
    assert!(vec_approx_eq(&x.crossed(&y), &z, EPS));
}

#[test]
fn translate_variants() {
    let mut t = Transform::unity();
    t.translate_x(1.0).translate_y(2.0).translate_z(3.0);

    let mut u = Transform::unity();
    u.translate_vec(&Vec3::xyz(1.0, 2.0, 3.0));

    assert_eq!(t, u);
    assert_eq!(t.transform(&Vec3::ZERO), Vec3::xyz(1.0, 2.0, 3.0));
}

#[test]
fn scale_variants() {
    let mut t = Transform::unity();
    t.scale_x(2.0)
        .unwrap()
        .scale_y(3.0)
        .unwrap()
        .scale_z(4.0)
        .unwrap();
    assert_eq!(t.transform(&Vec3::UNITY), Vec3::xyz(2.0, 3.0, 4.0));

    let mut u = Transform::unity();
    u.scale_vec(&Vec3::xyz(2.0, 3.0, 4.0)).unwrap();
    assert_eq!(t, u);

    let mut w = Transform::unity();
    w.scale_uniform(0.5).unwrap();
    assert_eq!(w.transform(&Vec3::UNITY), Vec3::xyz(0.5, 0.5, 0.5));
}

#[test]
fn zero_scale_is_rejected() {
    let mut t = Transform::unity();
    assert_eq!(
        t.scale(0.0, 1.0, 1.0).err(),
        Some(VecMathError::ZeroScale {
            x: 0.0,
            y: 1.0,
            z: 1.0
        })
    );
    assert!(t.scale_uniform(0.0).is_err());
    assert!(t.scale_vec(&Vec3::xy(1.0, 1.0)).is_err());
    assert_eq!(t, Transform::unity());
}

#[test]
fn mirror_parity() {
    let mut once = Transform::unity();
    once.mirror(&Plane::XY_PLANE);
    assert!(once.is_mirror());
    assert_eq!(
        once.transform(&Vec3::xyz(1.0, 2.0, 3.0)),
        Vec3::xyz(1.0, 2.0, -3.0)
    );

    let mut twice = Transform::unity();
    twice.mirror(&Plane::XY_PLANE).mirror(&Plane::YZ_PLANE);
    assert!(!twice.is_mirror());
    assert_eq!(
        twice.transform(&Vec3::xyz(1.0, 2.0, 3.0)),
        Vec3::xyz(-1.0, 2.0, -3.0)
    );

    let mut negative = Transform::unity();
    negative.scale(-1.0, 1.0, 1.0).unwrap();
    assert!(negative.is_mirror());
    negative.scale_z(-2.0).unwrap();
    assert!(!negative.is_mirror());
}

#[test]
fn mirror_about_offset_plane_uses_parallel_plane_through_origin() {
    init_logging();
    let plane = Plane::from_point_and_normal(&Vec3::xyz(0.0, 0.0, 5.0), &Vec3::Z_ONE);
    let mut t = Transform::unity();
    t.mirror(&plane);
    assert!(t.is_mirror());
    assert_eq!(
        t.transform(&Vec3::xyz(1.0, 2.0, 3.0)),
        Vec3::xyz(1.0, 2.0, -3.0)
    );
}

#[test]
fn rot_axis_matches_elementary_rotation() {
    let mut about_z = Transform::unity();
    about_z.rot_axis(&Vec3::ZERO, &Vec3::xyz(0.0, 0.0, 3.0), 30.0);

    let mut rz = Transform::unity();
    rz.rot_z(-30.0);

    let mut rng = seeded_rng(23);
    for _ in 0..10 {
        let v = random_vector(&mut rng, 10.0);
        assert!(vec_approx_eq(&about_z.transform(&v), &rz.transform(&v), EPS));
    }
}

#[test]
fn rot_from_to_aligns_directions() {
    init_logging();
    let mut rng = seeded_rng(24);
    for _ in 0..20 {
        let from = random_vector(&mut rng, 10.0);
        let to = random_vector(&mut rng, 10.0);
        let mut t = Transform::unity();
        t.rot_from_to(&from, &to);
        assert!(vec_approx_eq(
            &t.transform(&from.normalized()),
            &to.normalized(),
            1e-7
        ));
    }

    let mut parallel = Transform::unity();
    parallel.rot_from_to(&Vec3::Y_ONE, &Vec3::xyz(0.0, -4.0, 0.0));
    assert_eq!(parallel, Transform::unity());
}

#[test]
fn apply_composes_on_the_right() {
    let mut a = Transform::unity();
    a.translate(1.0, 0.0, 0.0);
    let mut b = Transform::unity();
    b.scale_uniform(3.0).unwrap();

    let mut ab = a;
    ab.apply(&b);
    // b acts first
    assert_eq!(ab.transform(&Vec3::X_ONE), Vec3::xyz(4.0, 0.0, 0.0));

    let mut chained = Transform::unity();
    chained.translate(1.0, 0.0, 0.0).scale_uniform(3.0).unwrap();
    assert_eq!(ab, chained);
}

#[test]
fn transformed_copies() {
    let mut t = Transform::unity();
    t.translate(0.0, 0.0, 4.0);
    let v = Vec3::xyz(1.0, 1.0, 1.0);
    assert_eq!(v.transformed(&t), Vec3::xyz(1.0, 1.0, 5.0));
    assert_eq!(v.transformed_amount(&t, 0.5), Vec3::xyz(1.0, 1.0, 3.0));
    assert_eq!(v, Vec3::UNITY);

    let mut m = v.as_modifiable();
    t.transform_in_place(&mut m);
    assert_eq!(m.freeze(), Vec3::xyz(1.0, 1.0, 5.0));
}

#[test]
fn values_and_display() {
    let mut t = Transform::unity();
    t.translate(1.0, 2.0, 3.0);
    let values = t.to_values();
    assert_eq!(values[3], 1.0);
    assert_eq!(values[7], 2.0);
    assert_eq!(values[11], 3.0);
    assert_eq!(values[15], 1.0);
    assert_eq!(Transform::from_values(&values).unwrap(), t);
    assert_eq!(t.matrix().get(2, 3).unwrap(), 3.0);
    assert_eq!(t.to_string().lines().next(), Some("1 0 0 1"));

    assert_eq!(
        Transform::from_values(&values[..15]),
        Err(VecMathError::WrongValueCount {
            expected: 16,
            actual: 15
        })
    );
}
