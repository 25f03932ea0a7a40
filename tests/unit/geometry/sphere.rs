use super::*;

fn extent(w: u32, h: u32) -> Extent {
    Extent::new(w, h).unwrap()
}

#[test]
fn rejects_degenerate_radius() {
    assert!(Sphere::new(0.0).is_err());
    assert!(Sphere::new(-1.0).is_err());
    assert!(Sphere::new(f64::NAN).is_err());
    assert!(Sphere::new(f64::INFINITY).is_err());
}

#[test]
fn radius_follows_shorter_output_side() {
    let s = Sphere::for_output(extent(400, 300), 1.5).unwrap();
    assert!((s.radius() - 45.0).abs() < 1e-12);
    assert!(Sphere::for_output(extent(4, 4), 0.0).is_err());
}

#[test]
fn plane_origin_hits_pole_on_positive_z() {
    let s = Sphere::new(3.0).unwrap();
    assert_eq!(s.intersect_plane(0.0, 0.0), Point3::new(0.0, 0.0, 3.0));
}

#[test]
fn far_plane_points_approach_projection_pole() {
    let s = Sphere::new(2.0).unwrap();
    let p = s.intersect_plane(1e7, -1e7);
    assert!(p.x.abs() < 1e-6);
    assert!(p.y.abs() < 1e-6);
    assert!((p.z + 2.0).abs() < 1e-6);
}

#[test]
fn intersection_lies_on_sphere() {
    let s = Sphere::new(4.5).unwrap();
    for &(x, y) in &[(1.0, 2.0), (-30.0, 7.5), (0.25, -0.125), (400.0, 300.0)] {
        let p = s.intersect_plane(x, y);
        assert!((p.length() - 4.5).abs() < 1e-9, "{p:?}");
    }
}

#[test]
fn intersection_is_collinear_with_plane_point_and_pole() {
    let s = Sphere::new(1.0).unwrap();
    let q = Point3::new(3.0, -2.0, 0.0);
    let pole = Point3::new(0.0, 0.0, -1.0);
    let p = s.intersect_plane(q.x, q.y);
    let cross = (q - pole).cross(p - pole);
    assert!(cross.length() < 1e-12);
}

#[test]
fn pole_on_axis_maps_to_row_zero() {
    let s = Sphere::new(2.0).unwrap();
    let px = s.to_source_pixel(Point3::new(0.0, 0.0, 2.0), extent(8, 6));
    assert_eq!(px.row, 0);
}

#[test]
fn opposite_pole_wraps_back_to_row_zero() {
    // acos(-1) / pi == 1.0 exactly, which rounds to the height and then wraps.
    let s = Sphere::new(2.0).unwrap();
    let px = s.to_source_pixel(Point3::new(0.0, 0.0, -2.0), extent(8, 6));
    assert_eq!(px.row, 0);
}

#[test]
fn drift_past_the_poles_is_clamped() {
    let s = Sphere::new(1.0).unwrap();
    let src = extent(10, 10);
    assert_eq!(s.to_source_pixel(Point3::new(0.0, 0.0, 1.0 + 1e-12), src).row, 0);
    assert_eq!(s.to_source_pixel(Point3::new(0.0, 0.0, -1.0 - 1e-12), src).row, 0);
}

#[test]
fn equator_longitudes_land_on_expected_columns() {
    let s = Sphere::new(1.0).unwrap();
    let src = extent(8, 4);

    // +x: longitude 0, centre column.
    let px = s.to_source_pixel(Point3::new(1.0, 0.0, 0.0), src);
    assert_eq!(px, PixelCoord::new(2, 4));

    // +y: quarter turn right of centre.
    let px = s.to_source_pixel(Point3::new(0.0, 1.0, 0.0), src);
    assert_eq!(px, PixelCoord::new(2, 6));

    // -y: quarter turn left of centre.
    let px = s.to_source_pixel(Point3::new(0.0, -1.0, 0.0), src);
    assert_eq!(px, PixelCoord::new(2, 2));

    // -x: the seam, col_frac == 1.0 wraps to column 0.
    let px = s.to_source_pixel(Point3::new(-1.0, 0.0, 0.0), src);
    assert_eq!(px, PixelCoord::new(2, 0));
}

#[test]
fn exact_halves_round_to_even() {
    assert_eq!(wrap_index(0.125, 4), 0);
    assert_eq!(wrap_index(0.375, 4), 2);
    assert_eq!(wrap_index(0.625, 4), 2);
    assert_eq!(wrap_index(0.875, 4), 0);
}

#[test]
fn lookup_is_total_over_awkward_inputs() {
    let s = Sphere::new(0.7).unwrap();
    let src = extent(5, 3);
    let points = [
        Point3::ZERO,
        Point3::new(-0.0, -0.0, 0.0),
        Point3::new(1e300, -1e300, 1e300),
        Point3::new(0.0, 0.0, -1e300),
        Point3::new(-1.0, -0.0, 0.2),
    ];
    for p in points {
        assert!(src.contains(s.to_source_pixel(p, src)), "{p:?}");
    }
}
