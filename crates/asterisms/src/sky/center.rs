//! Centers of groups of sky positions.
//!
//! - `midpoint`: componentwise average of two coordinate tuples.
//! - `mean_center`: unweighted average of RA and Dec.
//! - `circumcenter`: center and angular radius of the smallest enclosing disk,
//!   computed in the plane of a caller-chosen [`Projection`].
//!
//! `midpoint` and `mean_center` average the angles themselves, not unit
//! vectors: results near the poles or across RA 0h/24h are not the spherical
//! centroid. Use `circumcenter` with [`super::Gnomonic`] for groups that
//! straddle RA 0h.

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use super::angle::{Angle, Distance};
use super::position::{Position, RaDec};
use super::projection::Projection;
use crate::error::{AsterismError, AsterismResult};
use crate::geom2::{smallest_enclosing_disk_with, GeomCfg};

/// Midpoint of two positions of the same arity.
///
/// Errors: `InvalidArgument` if one position carries a distance and the other does not.
pub fn midpoint(p1: &Position, p2: &Position) -> AsterismResult<Position> {
    if p1.arity() != p2.arity() {
        return Err(AsterismError::invalid(format!(
            "midpoint needs two positions of equal arity, got {} and {}",
            p1.arity(),
            p2.arity()
        )));
    }
    let ra = (p1.ra.radians() + p2.ra.radians()) / 2.0;
    let dec = (p1.dec.radians() + p2.dec.radians()) / 2.0;
    let mid = Position::new(Angle::from_radians(ra), Angle::from_radians(dec));
    Ok(match (p1.dist, p2.dist) {
        (Some(a), Some(b)) => mid.with_distance(Distance::from_au((a.au() + b.au()) / 2.0)),
        _ => mid,
    })
}

/// Unweighted mean of right ascensions and declinations.
///
/// Errors: `EmptyInput` for an empty slice.
pub fn mean_center<P: RaDec>(positions: &[P]) -> AsterismResult<Position> {
    if positions.is_empty() {
        return Err(AsterismError::empty("mean_center"));
    }
    let (sum_ra, sum_dec) = positions.iter().fold((0.0, 0.0), |(ra, dec), p| {
        (ra + p.ra().radians(), dec + p.dec().radians())
    });
    let n = positions.len() as f64;
    Ok(Position::new(
        Angle::from_radians(sum_ra / n),
        Angle::from_radians(sum_dec / n),
    ))
}

/// Center and angular radius of an enclosing disk on the sky.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SkyDisk {
    pub center: Position,
    pub radius: Angle,
}

/// Options for [`circumcenter_with`].
#[derive(Clone, Copy, Debug, Default)]
pub struct CircumcenterCfg {
    pub geom: GeomCfg,
    /// Shuffle seed; `None` draws one from entropy.
    pub seed: Option<u64>,
}

/// Smallest enclosing disk of `positions` in the plane of `projection`,
/// mapped back to the sky.
pub fn circumcenter<P: RaDec, J: Projection>(
    positions: &[P],
    projection: &J,
) -> AsterismResult<SkyDisk> {
    circumcenter_with(positions, projection, CircumcenterCfg::default())
}

pub fn circumcenter_with<P: RaDec, J: Projection>(
    positions: &[P],
    projection: &J,
    cfg: CircumcenterCfg,
) -> AsterismResult<SkyDisk> {
    if positions.is_empty() {
        return Err(AsterismError::empty("circumcenter"));
    }
    let planar = projection.project_all(positions)?;
    let mut rng = match cfg.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let disk = smallest_enclosing_disk_with(&planar, cfg.geom, &mut rng)?;
    let (ra, dec) = projection.deproject(disk.center);
    let radius = projection.covering_radius(&disk, positions);
    tracing::debug!(
        n = positions.len(),
        center_ra = %ra,
        center_dec = %dec,
        radius_deg = radius.degrees(),
        "circumcenter"
    );
    Ok(SkyDisk {
        center: Position::new(ra, dec),
        radius,
    })
}
