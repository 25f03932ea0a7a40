use std::f64::consts::FRAC_PI_2;

use super::*;

fn square(n: u32) -> Extent {
    Extent::new(n, n).unwrap()
}

#[test]
fn zero_offsets_centre_the_viewport_on_the_plane_origin() {
    let cfg = ProjectionConfig {
        match_source_size: true,
        ..ProjectionConfig::default()
    };
    let proj = Projection::new(&cfg, square(4)).unwrap();
    assert_eq!(
        proj.plane_point(PixelCoord::new(2, 2)),
        Point3::new(0.0, 0.0, 0.0)
    );
    assert_eq!(
        proj.plane_point(PixelCoord::new(0, 3)),
        Point3::new(-2.0, 1.0, 0.0)
    );
}

#[test]
fn offsets_shift_rows_along_x_and_columns_along_y() {
    let cfg = ProjectionConfig {
        output_width: 400,
        output_height: 300,
        offset_horizontal: 0.25,
        offset_vertical: 0.4,
        ..ProjectionConfig::default()
    };
    let proj = Projection::new(&cfg, Extent::new(800, 400).unwrap()).unwrap();
    let q = proj.plane_point(PixelCoord::new(0, 0));
    assert!((q.x + 30.0).abs() < 1e-9);
    assert!((q.y + 100.0).abs() < 1e-9);
    assert_eq!(q.z, 0.0);
}

#[test]
fn new_rejects_invalid_configuration() {
    let cfg = ProjectionConfig {
        scale: 0.0,
        ..ProjectionConfig::default()
    };
    assert!(Projection::new(&cfg, square(8)).is_err());
}

#[test]
fn radius_uses_output_not_source_size() {
    let cfg = ProjectionConfig {
        output_width: 200,
        output_height: 100,
        scale: 2.0,
        ..ProjectionConfig::default()
    };
    let proj = Projection::new(&cfg, square(1000)).unwrap();
    assert_eq!(proj.output(), Extent::new(200, 100).unwrap());
    assert_eq!(proj.source(), square(1000));
    assert!((proj.sphere().radius() - 20.0).abs() < 1e-12);
}

#[test]
fn viewport_centre_without_rotation_hits_the_top_row() {
    let cfg = ProjectionConfig {
        match_source_size: true,
        ..ProjectionConfig::default()
    };
    let proj = Projection::new(&cfg, square(4)).unwrap();
    assert_eq!(proj.source_pixel(PixelCoord::new(2, 2)), PixelCoord::new(0, 2));
}

#[test]
fn quarter_turn_about_y_moves_the_centre_to_the_equator() {
    let cfg = ProjectionConfig {
        output_width: 4,
        output_height: 4,
        rotate_y: FRAC_PI_2,
        ..ProjectionConfig::default()
    };
    let proj = Projection::new(&cfg, Extent::new(8, 4).unwrap()).unwrap();
    assert_eq!(proj.source_pixel(PixelCoord::new(2, 2)), PixelCoord::new(2, 4));
}

#[test]
fn every_output_pixel_maps_inside_the_source() {
    let cfg = ProjectionConfig {
        output_width: 37,
        output_height: 23,
        offset_horizontal: -0.3,
        offset_vertical: 0.4,
        scale: 1.5,
        rotate_x: 0.2,
        rotate_y: -5f64.to_radians(),
        rotate_z: 2.8,
        ..ProjectionConfig::default()
    };
    let src = Extent::new(19, 11).unwrap();
    let proj = Projection::new(&cfg, src).unwrap();
    for row in 0..23 {
        for col in 0..37 {
            assert!(src.contains(proj.source_pixel(PixelCoord::new(row, col))));
        }
    }
}
