use super::*;
use crate::error::AsterismError;

fn pos(h: f64, d: f64) -> Position {
    Position::from_hours_degrees(h, d).unwrap()
}

fn seeded(seed: u64) -> CircumcenterCfg {
    CircumcenterCfg {
        seed: Some(seed),
        ..Default::default()
    }
}

#[test]
fn midpoint_of_two_pairs() {
    let m = midpoint(&pos(1.0, 10.0), &pos(3.0, 30.0)).unwrap();
    assert_eq!(m.arity(), 2);
    assert!((m.ra.hours() - 2.0).abs() < 1e-12);
    assert!((m.dec.degrees() - 20.0).abs() < 1e-12);
    assert_eq!(m.ra.preference(), Preference::Hours);
    assert!(m.dec.is_signed());
}

#[test]
fn midpoint_averages_distance() {
    let a = pos(0.0, 0.0).with_distance(Distance::from_au(1.0));
    let b = pos(2.0, -10.0).with_distance(Distance::from_au(3.0));
    let m = midpoint(&a, &b).unwrap();
    assert_eq!(m.arity(), 3);
    assert!((m.dist.unwrap().au() - 2.0).abs() < 1e-15);
    assert!((m.dec.degrees() + 5.0).abs() < 1e-12);
}

#[test]
fn midpoint_rejects_mismatched_arity() {
    let a = pos(0.0, 0.0).with_distance(Distance::from_au(1.0));
    let b = pos(2.0, -10.0);
    let err = midpoint(&a, &b).unwrap_err();
    assert!(matches!(err, AsterismError::InvalidArgument { .. }));
}

#[test]
fn mean_center_accepts_stars_and_tuples() {
    let stars = vec![
        Star::from_sexagesimal("Algol", (3.0, 8.0, 10.1315), (40.0, 57.0, 20.332)),
        Star::from_sexagesimal("Mizar", (13.0, 23.0, 55.5), (54.0, 55.0, 31.0)),
        Star::from_sexagesimal("Vega", (18.0, 36.0, 56.33635), (38.0, 47.0, 1.2802)),
    ];
    let tuples: Vec<(Angle, Angle)> = stars.iter().map(|s| (s.ra, s.dec)).collect();
    let c1 = mean_center(&stars).unwrap();
    let c2 = mean_center(&tuples).unwrap();
    assert_eq!(c1, c2);

    let want_ra: f64 = stars.iter().map(|s| s.ra.hours()).sum::<f64>() / 3.0;
    let want_dec: f64 = stars.iter().map(|s| s.dec.degrees()).sum::<f64>() / 3.0;
    assert!((c1.ra.hours() - want_ra).abs() < 1e-12);
    assert!((c1.dec.degrees() - want_dec).abs() < 1e-12);
}

#[test]
fn mean_center_empty_is_an_error() {
    let none: [Position; 0] = [];
    assert!(matches!(
        mean_center(&none).unwrap_err(),
        AsterismError::EmptyInput { .. }
    ));
}

#[test]
fn circumcenter_empty_is_an_error() {
    let none: Vec<Star> = Vec::new();
    assert!(matches!(
        circumcenter(&none, &PlateCarree).unwrap_err(),
        AsterismError::EmptyInput { .. }
    ));
}

#[test]
fn circumcenter_plate_carree_matches_planar_solver() {
    // Collinear in (ra, dec) radians: the outer pair is a diameter.
    let pts = [
        (Angle::from_radians(0.1), Angle::from_radians(0.2)),
        (Angle::from_radians(0.2), Angle::from_radians(0.2)),
        (Angle::from_radians(0.3), Angle::from_radians(0.2)),
    ];
    let d = circumcenter_with(&pts, &PlateCarree, seeded(3)).unwrap();
    assert!((d.center.ra.radians() - 0.2).abs() < 1e-12);
    assert!((d.center.dec.radians() - 0.2).abs() < 1e-12);
    assert!((d.radius.radians() - 0.1).abs() < 1e-12);
}

#[test]
fn circumcenter_gnomonic_encloses_ring() {
    // Four stars one degree from (10h, +45°) along the cardinal directions.
    let ra0 = Angle::from_hours(10.0);
    let dec0 = Angle::from_degrees(45.0);
    let dra = 1f64.to_radians() / dec0.radians().cos();
    let stars = vec![
        Star::new("n", ra0, Angle::from_degrees(46.0)),
        Star::new("s", ra0, Angle::from_degrees(44.0)),
        Star::new("e", Angle::from_radians(ra0.radians() + dra), dec0),
        Star::new("w", Angle::from_radians(ra0.radians() - dra), dec0),
    ];
    let g = Gnomonic::new(ra0, dec0);
    let d = circumcenter_with(&stars, &g, seeded(11)).unwrap();
    let off = Angle::separation(d.center.ra, d.center.dec, ra0, dec0);
    assert!(off.degrees() < 0.01, "center offset {}°", off.degrees());
    assert!((d.radius.degrees() - 1.0).abs() < 0.01);
    for s in &stars {
        let sep = Angle::separation(d.center.ra, d.center.dec, s.ra, s.dec);
        assert!(sep.radians() <= d.radius.radians() + 1e-9);
    }
}

#[test]
fn circumcenter_across_ra_zero() {
    let pts = [pos(23.9, 0.0), pos(0.1, 0.0)];
    let g = Gnomonic::about(&pts).unwrap();
    let d = circumcenter_with(&pts, &g, seeded(5)).unwrap();
    let h = d.center.ra.hours();
    assert!(h < 1e-6 || 24.0 - h < 1e-6, "center ra {h}h");
    assert!((d.radius.hours() - 0.1).abs() < 1e-6);
}

#[test]
fn circumcenter_result_independent_of_seed() {
    let pts: Vec<Position> = (0..30)
        .map(|k| {
            let t = k as f64;
            pos(5.0 + 0.3 * (t * 1.7).sin(), 20.0 + 4.0 * (t * 0.9).cos())
        })
        .collect();
    let a = circumcenter_with(&pts, &PlateCarree, seeded(1)).unwrap();
    let b = circumcenter_with(&pts, &PlateCarree, seeded(99)).unwrap();
    assert!((a.radius.radians() - b.radius.radians()).abs() < 1e-9);
    assert!((a.center.ra.radians() - b.center.ra.radians()).abs() < 1e-9);
    assert!((a.center.dec.radians() - b.center.dec.radians()).abs() < 1e-9);
}

#[test]
fn circumcenter_gnomonic_radius_covers_off_axis_stars() {
    // Triangles inscribed in a plane circle away from the tangent point; the
    // angular distance to the ring varies with direction, so boundary
    // sampling alone can fall short of a star between samples.
    let g = Gnomonic::new(Angle::from_degrees(0.0), Angle::from_degrees(30.0));
    let (cx, cy, r) = (0.6, 0.3, 0.5);
    for k in 0..360 {
        let th0 = (k as f64 * 0.5).to_radians();
        let pts: Vec<(Angle, Angle)> = (0..3)
            .map(|j| {
                let th = th0 + j as f64 * std::f64::consts::TAU / 3.0;
                g.deproject(nalgebra::Vector2::new(cx + r * th.cos(), cy + r * th.sin()))
            })
            .collect();
        let d = circumcenter_with(&pts, &g, seeded(1)).unwrap();
        for &(ra, dec) in &pts {
            let sep = Angle::separation(d.center.ra, d.center.dec, ra, dec);
            assert!(
                sep.radians() <= d.radius.radians() + 1e-12,
                "start {k}: sep {} > radius {}",
                sep.radians(),
                d.radius.radians()
            );
        }
    }
}
