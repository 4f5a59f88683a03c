use crate::geom::{
    HORIZONTAL_DIP_DIRECTION, Orientation, OrientationError, Tolerance, Vec3, to_dip_vector,
    to_normal, to_strike_vector,
};

fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
    (a - b).abs() <= eps
}

#[test]
fn normals_are_unit_over_the_whole_range() {
    for dip_step in 0..=18 {
        for dd_step in 0..72 {
            let dip = f64::from(dip_step) * 5.0;
            let dd = f64::from(dd_step) * 5.0;
            let orientation = Orientation::new(dip, dd).expect("in range");

            let n = to_normal(orientation);
            assert!(approx_eq(n.length(), 1.0, 1e-9), "|n| for {dip}/{dd} = {}", n.length());
            assert!(n.z >= -1e-12, "normal must point up for {dip}/{dd}");
        }
    }
}

#[test]
fn basis_is_orthonormal_and_right_handed() {
    let orientation = Orientation::new(50.0, 156.0).unwrap();
    let n = to_normal(orientation);
    let s = to_strike_vector(orientation);
    let d = to_dip_vector(orientation);

    assert!(approx_eq(s.length(), 1.0, 1e-12));
    assert!(approx_eq(d.length(), 1.0, 1e-12));
    assert!(approx_eq(s.dot(d), 0.0, 1e-12));
    assert!(approx_eq(s.dot(n), 0.0, 1e-12));
    assert!(approx_eq(d.dot(n), 0.0, 1e-12));
    // Strike is horizontal and the dip vector descends.
    assert_eq!(s.z, 0.0);
    assert!(d.z < 0.0);
    // s × n points down-dip.
    assert!(Tolerance::default_geom().approx_eq_vec3(s.cross(n), d));
}

#[test]
fn strike_follows_the_right_hand_rule() {
    let east_dipping = Orientation::new(30.0, 90.0).unwrap();
    assert!(approx_eq(east_dipping.strike_azimuth(), 0.0, 1e-12));

    let s = east_dipping.to_strike_vector();
    assert!(Tolerance::default_geom().approx_eq_vec3(s, Vec3::NORTH));
}

#[test]
fn horizontal_plane_gets_a_canonical_basis() {
    let flat = Orientation::new(0.0, 271.0).unwrap();
    assert!(flat.is_horizontal());
    assert_eq!(flat.effective_dip_direction(), HORIZONTAL_DIP_DIRECTION);

    let tol = Tolerance::default_geom();
    assert!(tol.approx_eq_vec3(flat.to_normal(), Vec3::UP));
    assert!(tol.approx_eq_vec3(flat.to_strike_vector(), Vec3::EAST));
    assert!(tol.approx_eq_vec3(flat.to_dip_vector(), -Vec3::NORTH));
}

#[test]
fn vertical_plane_has_a_horizontal_normal() {
    let wall = Orientation::new(90.0, 45.0).unwrap();
    let n = wall.to_normal();
    assert!(approx_eq(n.z, 0.0, 1e-12));
    assert!(wall.to_dip_vector().is_finite());
    assert!(approx_eq(wall.to_dip_vector().z, -1.0, 1e-12));
}

#[test]
fn round_trip_through_the_normal() {
    for dip in [1.0, 10.0, 35.5, 50.0, 75.0, 89.0] {
        for dd in [0.0, 28.0, 90.0, 156.0, 233.3, 359.0] {
            let original = Orientation::new(dip, dd).unwrap();
            let back = Orientation::from_normal(original.to_normal()).expect("unit normal");

            assert!(approx_eq(back.dip(), dip, 1e-9), "dip {dip}/{dd} -> {}", back.dip());
            let delta = (back.dip_direction() - dd).rem_euclid(360.0);
            assert!(
                delta < 1e-9 || 360.0 - delta < 1e-9,
                "dd {dip}/{dd} -> {}",
                back.dip_direction()
            );
        }
    }
}

#[test]
fn round_trip_boundaries_are_canonical() {
    // Dip 0 collapses the dip direction: it always comes back as 0.
    let flat = Orientation::from_normal(Orientation::new(0.0, 123.0).unwrap().to_normal()).unwrap();
    assert_eq!(flat.dip(), 0.0);
    assert_eq!(flat.dip_direction(), 0.0);

    // Dip 90 keeps the dip direction the normal points toward.
    let wall =
        Orientation::from_normal(Orientation::new(90.0, 200.0).unwrap().to_normal()).unwrap();
    assert!(approx_eq(wall.dip(), 90.0, 1e-9));
    assert!(approx_eq(wall.dip_direction(), 200.0, 1e-9));

    // A downward normal describes the same plane.
    let down =
        Orientation::from_normal(-Orientation::new(40.0, 10.0).unwrap().to_normal()).unwrap();
    assert!(approx_eq(down.dip(), 40.0, 1e-9));
    assert!(approx_eq(down.dip_direction(), 10.0, 1e-9));

    assert!(Orientation::from_normal(Vec3::ZERO).is_none());
}

#[test]
fn rejects_out_of_range_angles() {
    assert_eq!(Orientation::new(-1.0, 0.0), Err(OrientationError::InvalidDip(-1.0)));
    assert_eq!(Orientation::new(90.5, 0.0), Err(OrientationError::InvalidDip(90.5)));
    assert!(matches!(Orientation::new(f64::NAN, 0.0), Err(OrientationError::InvalidDip(_))));
    assert_eq!(
        Orientation::new(10.0, 360.5),
        Err(OrientationError::InvalidDipDirection(360.5))
    );
    assert!(matches!(
        Orientation::new(10.0, f64::INFINITY),
        Err(OrientationError::InvalidDipDirection(_))
    ));

    let wrapped = Orientation::new(10.0, 360.0).unwrap();
    assert_eq!(wrapped.dip_direction(), 0.0);
}
