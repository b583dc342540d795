mod support;

use support::{approx_eq, random_vector, seeded_rng, vec_approx_eq};
use vecmath3d::{Orientation, Plane, Vec3, Vector3d, float_types::Real};

const EPS: Real = 1e-9;

#[test]
fn flipped() {
    let plane = Plane::from_point_and_normal(&Vec3::xyz(0.0, 2.0, 0.0), &Vec3::Y_ONE);
    let flipped = plane.flipped();
    assert_eq!(flipped.normal(), Vec3::xyz(0.0, -1.0, 0.0));
    assert_eq!(flipped.anchor(), plane.anchor());
    assert_eq!(flipped.dist(), 2.0);

    let p = Vec3::xyz(5.0, 3.0, -1.0);
    assert_eq!(plane.compare(&p), Orientation::Front);
    assert_eq!(flipped.compare(&p), Orientation::Back);
}

#[test]
fn from_points() {
    let a = Vec3::xyz(0.0, 0.0, 1.0);
    let b = Vec3::xyz(3.0, 0.0, 1.0);
    let c = Vec3::xyz(0.0, 3.0, 1.0);
    let plane = Plane::from_points(&a, &b, &c);

    // right-hand rule on (b - a) x (c - a)
    assert_eq!(plane.normal(), Vec3::Z_ONE);
    // anchored at the centroid
    assert_eq!(plane.anchor(), Vec3::xyz(1.0, 1.0, 1.0));

    let reversed = Plane::from_points(&a, &c, &b);
    assert_eq!(reversed.normal(), Vec3::xyz(0.0, 0.0, -1.0));
}

#[test]
fn classification() {
    let plane = Plane::XY_PLANE;
    assert_eq!(plane.compare(&Vec3::xyz(4.0, -2.0, 1.0)), Orientation::Front);
    assert_eq!(plane.compare(&Vec3::xyz(4.0, -2.0, -1.0)), Orientation::Back);
    assert_eq!(plane.compare(&Vec3::xyz(4.0, -2.0, 0.0)), Orientation::On);
    // inside the shared tolerance
    assert_eq!(plane.compare(&Vec3::xyz(0.0, 0.0, 1e-13)), Orientation::On);

    assert_eq!(
        Plane::XZ_PLANE.compare(&Vec3::xyz(0.0, 1.0, 0.0)),
        Orientation::Front
    );
    assert_eq!(
        Plane::YZ_PLANE.compare(&Vec3::xyz(-1.0, 0.0, 0.0)),
        Orientation::Back
    );
}

#[test]
fn project_and_distance() {
    let mut rng = seeded_rng(30);
    let anchor = random_vector(&mut rng, 10.0);
    let normal = random_vector(&mut rng, 1.0);
    let plane = Plane::from_point_and_normal(&anchor, &normal);

    for _ in 0..20 {
        let p = random_vector(&mut rng, 50.0);
        let q = plane.project(&p);

        assert_eq!(
            plane.compare_with_tolerance(&q, 1e-9),
            Orientation::On
        );
        // the offset from the plane is along the normal
        let offset = p.minus(&q);
        assert!(approx_eq(offset.crossed(&plane.normal()).magnitude(), 0.0, EPS));
        assert!(approx_eq(plane.distance(&p), offset.magnitude(), EPS));
        assert!(plane.distance(&p) >= 0.0);
        // projecting twice changes nothing
        assert!(vec_approx_eq(&plane.project(&q), &q, EPS));
    }
}

#[test]
fn distance_is_unsigned() {
    let plane = Plane::XY_PLANE;
    assert_eq!(plane.distance(&Vec3::xyz(1.0, 1.0, 3.0)), 3.0);
    assert_eq!(plane.distance(&Vec3::xyz(1.0, 1.0, -3.0)), 3.0);
}

#[test]
fn display() {
    assert_eq!(
        Plane::XY_PLANE.to_string(),
        "Plane(anchor: [0, 0, 0], normal: [0, 0, 1])"
    );
}
