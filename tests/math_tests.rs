use harmonic_physics::math::{Vector2, Vector3, Transform, Aabb, approx_eq, approx_zero};
use approx::assert_relative_eq;
use nalgebra as na;

#[test]
fn test_vector2_operations() {
    let v1 = Vector2::new(1.0, 2.0);
    let v2 = Vector2::new(3.0, -1.0);

    assert_eq!(v1 + v2, Vector2::new(4.0, 1.0));
    assert_eq!(v1 - v2, Vector2::new(-2.0, 3.0));
    assert_eq!(v1 * 2.0, Vector2::new(2.0, 4.0));
    assert_eq!(v1 / 2.0, Vector2::new(0.5, 1.0));
    assert_eq!(-v1, Vector2::new(-1.0, -2.0));

    assert_eq!(v1.min(v2), Vector2::new(1.0, -1.0));
    assert_eq!(v1.max(v2), Vector2::new(3.0, 2.0));

    let mut v = v1;
    v += v2;
    v -= Vector2::new(1.0, 1.0);
    assert_eq!(v, Vector2::new(3.0, 0.0));

    let normalized = Vector2::new(3.0, 4.0).normalize();
    assert_relative_eq!(normalized.length(), 1.0, epsilon = 1.0e-6);
    assert!(Vector2::zero().normalize().is_zero());
}

#[test]
fn test_vector2_rotation() {
    let rotated = Vector2::new(1.0, 0.0).rotate(std::f32::consts::FRAC_PI_2);

    assert_relative_eq!(rotated.x, 0.0, epsilon = 1.0e-6);
    assert_relative_eq!(rotated.y, 1.0, epsilon = 1.0e-6);
}

#[test]
fn test_vector3_operations() {
    let v1 = Vector3::new(1.0, 2.0, 3.0);
    let v2 = Vector3::new(4.0, 5.0, 6.0);

    assert_eq!(v1 + v2, Vector3::new(5.0, 7.0, 9.0));
    assert_eq!(v2 - v1, Vector3::new(3.0, 3.0, 3.0));
    assert_eq!(v1 * 2.0 / 2.0, v1);
    assert_eq!(v1.xy(), Vector2::new(1.0, 2.0));

    let mut v = v1;
    v += v2;
    v -= v1;
    assert_eq!(v, v2);

    assert_relative_eq!(Vector3::new(0.0, 3.0, 4.0).length(), 5.0);
    assert!(Vector3::zero().is_zero());
}

#[test]
fn test_clamp_components() {
    let v = Vector3::new(30.0, -25.0, 5.0);

    assert_eq!(v.clamp_components(20.0), Vector3::new(20.0, -20.0, 5.0));
    assert_eq!(v.clamp_components(0.0), Vector3::zero());

    // A negative limit behaves like zero
    assert_eq!(v.clamp_components(-1.0), Vector3::zero());
}

#[test]
fn test_nalgebra_conversions() {
    let v = Vector3::new(1.0, -2.0, 3.0);
    let na_v = v.to_nalgebra();

    assert_eq!(na_v, na::Vector3::new(1.0, -2.0, 3.0));
    assert_eq!(Vector3::from_nalgebra(&na_v), v);

    let v2 = Vector2::new(0.5, 4.0);
    assert_eq!(Vector2::from_nalgebra(&v2.to_nalgebra()), v2);
}

#[test]
fn test_array_conversions() {
    let v: Vector2 = [1.0, 2.0].into();
    let a: [f32; 2] = v.into();
    assert_eq!(a, [1.0, 2.0]);

    let v: Vector3 = [1.0, 2.0, 3.0].into();
    assert_eq!(v, Vector3::new(1.0, 2.0, 3.0));
}

#[test]
fn test_transform_point() {
    let transform = Transform::new(
        Vector3::new(10.0, 0.0, 0.0),
        std::f32::consts::FRAC_PI_2,
        Vector2::new(2.0, 2.0),
    );

    // Scale, then rotate, then translate
    let point = transform.transform_point(Vector2::new(1.0, 0.0));
    assert_relative_eq!(point.x, 10.0, epsilon = 1.0e-5);
    assert_relative_eq!(point.y, 2.0, epsilon = 1.0e-5);

    assert_eq!(Transform::identity().transform_point(Vector2::new(3.0, 4.0)), Vector2::new(3.0, 4.0));
}

#[test]
fn test_transform_translate() {
    let mut transform = Transform::default();
    transform.translate(Vector3::new(1.0, 2.0, 0.0));
    transform.translate(Vector3::new(1.0, 0.0, 0.0));

    assert_eq!(transform.position, Vector3::new(2.0, 2.0, 0.0));
}

#[test]
fn test_aabb() {
    let a = Aabb::from_center_half_extents(Vector2::zero(), Vector2::new(1.0, 1.0));
    let b = Aabb::new(Vector2::new(0.5, 0.5), Vector2::new(2.0, 2.0));
    let c = Aabb::new(Vector2::new(3.0, 3.0), Vector2::new(4.0, 4.0));

    assert!(a.intersects(&b));
    assert!(!a.intersects(&c));
    assert!(a.contains_point(Vector2::new(1.0, -1.0)));
    assert!(!a.contains_point(Vector2::new(1.5, 0.0)));
    assert_eq!(a.extents(), Vector2::new(2.0, 2.0));

    let points = [Vector2::new(2.0, -1.0), Vector2::new(-3.0, 4.0), Vector2::new(0.0, 0.0)];
    let bounds = Aabb::from_points(&points).unwrap();
    assert_eq!(bounds.min, Vector2::new(-3.0, -1.0));
    assert_eq!(bounds.max, Vector2::new(2.0, 4.0));
    assert!(Aabb::from_points(&[]).is_none());
}

#[test]
fn test_approx_helpers() {
    assert!(approx_eq(1.0, 1.0 + 1.0e-7));
    assert!(!approx_eq(1.0, 1.001));
    assert!(approx_zero(1.0e-8));
}
