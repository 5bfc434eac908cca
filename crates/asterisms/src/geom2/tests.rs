use super::rand::{draw_cloud, CloudCfg, CloudShape, ReplayToken};
use super::*;
use crate::error::AsterismError;
use nalgebra::{vector, Vector2};
use proptest::prelude::*;

fn solve(points: &[Vector2<f64>]) -> Disk {
    smallest_enclosing_disk_seeded(points, 7).expect("non-empty input")
}

fn max_dist(d: &Disk, points: &[Vector2<f64>]) -> f64 {
    points
        .iter()
        .map(|p| (p - d.center).norm())
        .fold(0.0, f64::max)
}

/// O(n⁴) reference: smallest candidate disk over all points, pairs and triples
/// that contains every point.
fn brute_force(points: &[Vector2<f64>]) -> Disk {
    let cfg = GeomCfg::default();
    let mut cands: Vec<Disk> = points.iter().map(|&p| Disk::from_point(p)).collect();
    for i in 0..points.len() {
        for j in (i + 1)..points.len() {
            cands.push(Disk::from_diameter(points[i], points[j]));
            for k in (j + 1)..points.len() {
                if let Some(d) = circumcircle(points[i], points[j], points[k], &cfg) {
                    cands.push(d);
                }
            }
        }
    }
    cands
        .into_iter()
        .filter(|d| points.iter().all(|&p| d.contains_eps(p, 1e-9 * d.radius.max(1.0))))
        .min_by(|a, b| a.radius.total_cmp(&b.radius))
        .expect("the diameter disk of the farthest pair is always a candidate")
}

#[test]
fn empty_input_is_an_error() {
    let err = smallest_enclosing_disk(&[]).unwrap_err();
    assert!(matches!(err, AsterismError::EmptyInput { .. }));
}

#[test]
fn non_finite_point_is_rejected() {
    let err = smallest_enclosing_disk(&[vector![0.0, 0.0], vector![f64::NAN, 1.0]]).unwrap_err();
    assert!(matches!(err, AsterismError::InvalidArgument { .. }));
}

#[test]
fn single_point() {
    let d = solve(&[vector![0.0, 0.0]]);
    assert_eq!(d.center, vector![0.0, 0.0]);
    assert_eq!(d.radius, 0.0);
}

#[test]
fn two_points() {
    let d = solve(&[vector![0.0, 0.0], vector![2.0, 0.0]]);
    assert!((d.center - vector![1.0, 0.0]).norm() < 1e-12);
    assert!((d.radius - 1.0).abs() < 1e-12);
}

#[test]
fn equilateral_triangle() {
    let s3 = 3f64.sqrt();
    let d = solve(&[vector![0.0, 0.0], vector![2.0, 0.0], vector![1.0, s3]]);
    assert!((d.center - vector![1.0, s3 / 3.0]).norm() < 1e-12);
    assert!((d.radius - 2.0 / s3).abs() < 1e-12);
}

#[test]
fn collinear_points_use_diameter() {
    let pts = [vector![0.0, 0.0], vector![1.0, 0.0], vector![2.0, 0.0]];
    for seed in 0..16 {
        let d = smallest_enclosing_disk_seeded(&pts, seed).unwrap();
        assert!((d.center - vector![1.0, 0.0]).norm() < 1e-12);
        assert!((d.radius - 1.0).abs() < 1e-12);
    }
}

#[test]
fn obtuse_triangle_uses_longest_side() {
    // Circumcircle would be larger; the long side is a diameter.
    let d = solve(&[vector![-1.0, 0.0], vector![1.0, 0.0], vector![0.0, 0.2]]);
    assert!(d.center.norm() < 1e-12);
    assert!((d.radius - 1.0).abs() < 1e-12);
}

#[test]
fn coincident_points_collapse() {
    let p = vector![3.5, -2.0];
    let d = solve(&[p, p, p, p]);
    assert!((d.center - p).norm() < 1e-12);
    assert!(d.radius < 1e-12);

    let q = vector![5.5, -2.0];
    let d2 = solve(&[p, q, p, q, p]);
    assert!((d2.center - vector![4.5, -2.0]).norm() < 1e-12);
    assert!((d2.radius - 1.0).abs() < 1e-12);
}

#[test]
fn input_slice_is_untouched() {
    let pts = vec![
        vector![0.0, 0.0],
        vector![4.0, 1.0],
        vector![1.0, 3.0],
        vector![-2.0, 2.0],
    ];
    let before = pts.clone();
    let _ = solve(&pts);
    assert_eq!(pts, before);
}

#[test]
fn circumcircle_rejects_collinear_and_fallback_picks_farthest_pair() {
    let cfg = GeomCfg::default();
    let a = vector![0.0, 0.0];
    let b = vector![1.0, 1.0];
    let c = vector![3.0, 3.0];
    assert!(circumcircle(a, b, c, &cfg).is_none());
    let d = disk_from_three(a, b, c, &cfg);
    assert!((d.center - vector![1.5, 1.5]).norm() < 1e-12);
    assert!((d.radius - 1.5 * 2f64.sqrt()).abs() < 1e-12);
}

#[test]
fn minimality_against_brute_force() {
    let shapes = [
        CloudShape::Box { half_width: 10.0 },
        CloudShape::Annulus {
            r_min: 0.9,
            r_max: 1.0,
        },
        CloudShape::Strip {
            half_length: 4.0,
            jitter: 0.5,
        },
    ];
    for (s, &shape) in shapes.iter().enumerate() {
        for index in 0..40u64 {
            let count = 1 + (index as usize % 20);
            let pts = draw_cloud(
                CloudCfg {
                    count,
                    shape,
                    offset: vector![2.0, -3.0],
                },
                ReplayToken {
                    seed: 1000 + s as u64,
                    index,
                },
            );
            let got = solve(&pts);
            let want = brute_force(&pts);
            let tol = 1e-7 * want.radius.max(1.0);
            assert!(
                (got.radius - want.radius).abs() <= tol,
                "shape {s} index {index}: radius {} vs brute force {}",
                got.radius,
                want.radius
            );
            assert!(max_dist(&got, &pts) <= got.radius + tol);
        }
    }
}

#[test]
fn many_points_near_boundary() {
    let pts = draw_cloud(
        CloudCfg {
            count: 5000,
            shape: CloudShape::Annulus {
                r_min: 0.999,
                r_max: 1.0,
            },
            offset: vector![100.0, 50.0],
        },
        ReplayToken { seed: 9, index: 0 },
    );
    let d = solve(&pts);
    assert!(max_dist(&d, &pts) <= d.radius * (1.0 + 1e-9) + 1e-9);
    assert!(d.radius <= 1.0 + 1e-9);
    assert!((d.center - vector![100.0, 50.0]).norm() < 1e-2);
}

fn point_strategy() -> impl Strategy<Value = Vector2<f64>> {
    (-1e3..1e3f64, -1e3..1e3f64).prop_map(|(x, y)| Vector2::new(x, y))
}

proptest! {
    #[test]
    fn prop_contains_every_point(
        pts in prop::collection::vec(point_strategy(), 1..500),
        seed in any::<u64>(),
    ) {
        let d = smallest_enclosing_disk_seeded(&pts, seed).unwrap();
        let tol = 1e-7 * d.radius.max(1.0);
        for p in &pts {
            prop_assert!((p - d.center).norm() <= d.radius + tol);
        }
    }

    #[test]
    fn prop_permutation_invariant(
        pts in prop::collection::vec(point_strategy(), 1..200),
        seed in any::<u64>(),
    ) {
        let d1 = smallest_enclosing_disk_seeded(&pts, seed).unwrap();
        let mut rev = pts.clone();
        rev.reverse();
        let d2 = smallest_enclosing_disk_seeded(&rev, seed.wrapping_add(1)).unwrap();
        let tol = 1e-6 * d1.radius.max(1.0);
        prop_assert!((d1.radius - d2.radius).abs() <= tol);
        prop_assert!((d1.center - d2.center).norm() <= tol);
    }
}
