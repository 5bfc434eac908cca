//! Smallest enclosing disk (Welzl's randomized incremental construction).
//!
//! - `smallest_enclosing_disk`: entropy-seeded entry point.
//! - `smallest_enclosing_disk_seeded`: reproducible run from a `u64` seed.
//! - `smallest_enclosing_disk_with`: explicit tolerances and RNG.
//!
//! Structure
//! - Three nested loops with 0, 1 and 2 fixed boundary points. Depth is bounded
//!   by construction; there is no recursion.
//! - The caller's slice is copied and shuffled; the result does not depend on the
//!   permutation (the minimal disk is unique), only the amount of work does.
//!
//! Reference: E. Welzl, "Smallest enclosing disks (balls and ellipsoids)", LNCS 555 (1991).
//!
//! Code cross-refs: `types::{Disk, GeomCfg}`, `util::disk_from_three`

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use super::types::{Disk, GeomCfg};
use super::util::disk_from_three;
use crate::error::{AsterismError, AsterismResult};

/// Smallest closed disk containing every point, with default tolerances and a
/// fresh entropy-seeded generator.
pub fn smallest_enclosing_disk(points: &[Vector2<f64>]) -> AsterismResult<Disk> {
    let mut rng = StdRng::from_entropy();
    smallest_enclosing_disk_with(points, GeomCfg::default(), &mut rng)
}

/// Same as [`smallest_enclosing_disk`], with a reproducible shuffle.
pub fn smallest_enclosing_disk_seeded(points: &[Vector2<f64>], seed: u64) -> AsterismResult<Disk> {
    let mut rng = StdRng::seed_from_u64(seed);
    smallest_enclosing_disk_with(points, GeomCfg::default(), &mut rng)
}

/// Smallest closed disk containing every point.
///
/// Errors
/// - `EmptyInput` for an empty slice.
/// - `InvalidArgument` if any coordinate is NaN or infinite.
pub fn smallest_enclosing_disk_with<R: Rng + ?Sized>(
    points: &[Vector2<f64>],
    cfg: GeomCfg,
    rng: &mut R,
) -> AsterismResult<Disk> {
    if points.is_empty() {
        return Err(AsterismError::empty("smallest_enclosing_disk"));
    }
    if let Some(i) = points
        .iter()
        .position(|p| !(p.x.is_finite() && p.y.is_finite()))
    {
        return Err(AsterismError::invalid(format!(
            "point {i} has a non-finite coordinate: ({}, {})",
            points[i].x, points[i].y
        )));
    }

    let mut pts = points.to_vec();
    pts.shuffle(rng);

    let mut disk = Disk::from_point(pts[0]);
    let mut restarts = 0usize;
    for i in 1..pts.len() {
        let p = pts[i];
        if !disk.contains(p, &cfg) {
            restarts += 1;
            disk = disk_with_one(&pts[..i], p, &cfg);
        }
    }
    tracing::trace!(
        n = pts.len(),
        restarts,
        radius = disk.radius,
        "smallest_enclosing_disk"
    );
    Ok(disk)
}

/// Smallest disk containing `prefix` with `p` on its boundary.
fn disk_with_one(prefix: &[Vector2<f64>], p: Vector2<f64>, cfg: &GeomCfg) -> Disk {
    let mut disk = Disk::from_point(p);
    for j in 0..prefix.len() {
        let q = prefix[j];
        if !disk.contains(q, cfg) {
            disk = disk_with_two(&prefix[..j], p, q, cfg);
        }
    }
    disk
}

/// Smallest disk containing `prefix` with `p` and `q` on its boundary.
fn disk_with_two(prefix: &[Vector2<f64>], p: Vector2<f64>, q: Vector2<f64>, cfg: &GeomCfg) -> Disk {
    let mut disk = Disk::from_diameter(p, q);
    for &r in prefix {
        if !disk.contains(r, cfg) {
            disk = disk_from_three(p, q, r, cfg);
        }
    }
    disk
}

/// Alias kept for callers that know the construction by its paper name.
#[inline]
pub fn minidisk(points: &[Vector2<f64>]) -> AsterismResult<Disk> {
    smallest_enclosing_disk(points)
}
