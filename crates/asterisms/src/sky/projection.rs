//! Sky → plane projections used before calling the planar solver.
//!
//! - `PlateCarree`: `(x, y) = (ra, dec)` in radians. This is the frame in which
//!   the mean center averages; it is distorted near the poles and splits groups
//!   straddling RA 0h/24h.
//! - `Gnomonic`: tangent-plane (TAN) projection about a reference point. Great
//!   circles map to straight lines; valid within 90° of the tangent point.

use nalgebra::{Vector2, Vector3};

use super::angle::{Angle, Preference};
use super::position::RaDec;
use crate::error::{AsterismError, AsterismResult};
use crate::geom2::Disk;

/// Boundary samples used to map a planar radius back to an angle.
const RADIUS_SAMPLES: usize = 64;

pub trait Projection {
    /// Planar coordinates of `(ra, dec)`.
    fn project(&self, ra: Angle, dec: Angle) -> AsterismResult<Vector2<f64>>;

    /// Inverse of `project`; RA in `[0, 2π)`.
    fn deproject(&self, p: Vector2<f64>) -> (Angle, Angle);

    /// Approximate angular radius of the deprojected `disk`.
    ///
    /// Default: largest separation between the deprojected center and
    /// deprojected boundary samples. Off the tangent point the separation
    /// varies around the ring, so this can undershoot between samples; use
    /// [`Projection::covering_radius`] when the cap must hold given positions.
    fn angular_radius(&self, disk: &Disk) -> Angle {
        let (ra_c, dec_c) = self.deproject(disk.center);
        let mut max = 0.0f64;
        for k in 0..RADIUS_SAMPLES {
            let th = std::f64::consts::TAU * (k as f64) / (RADIUS_SAMPLES as f64);
            let b = disk.center + Vector2::new(th.cos(), th.sin()) * disk.radius;
            let (ra, dec) = self.deproject(b);
            max = max.max(Angle::separation(ra_c, dec_c, ra, dec).radians());
        }
        Angle::from_radians(max)
    }

    /// Angular radius about the deprojected disk center that holds every
    /// position: the larger of `angular_radius` and the largest separation
    /// from the center to a position.
    fn covering_radius<P: RaDec>(&self, disk: &Disk, positions: &[P]) -> Angle
    where
        Self: Sized,
    {
        let (ra_c, dec_c) = self.deproject(disk.center);
        let farthest = positions
            .iter()
            .map(|p| Angle::separation(ra_c, dec_c, p.ra(), p.dec()).radians())
            .fold(0.0f64, f64::max);
        Angle::from_radians(self.angular_radius(disk).radians().max(farthest))
    }

    /// Project every item, failing on the first unprojectable one.
    fn project_all<P: RaDec>(&self, positions: &[P]) -> AsterismResult<Vec<Vector2<f64>>>
    where
        Self: Sized,
    {
        positions
            .iter()
            .map(|p| self.project(p.ra(), p.dec()))
            .collect()
    }
}

fn sky_angles(ra: f64, dec: f64) -> (Angle, Angle) {
    (
        Angle::from_radians(ra.rem_euclid(std::f64::consts::TAU)).with_preference(Preference::Hours),
        Angle::from_radians(dec).signed(),
    )
}

/// Equirectangular frame: RA and Dec radians as plane coordinates.
#[derive(Clone, Copy, Debug, Default)]
pub struct PlateCarree;

impl Projection for PlateCarree {
    fn project(&self, ra: Angle, dec: Angle) -> AsterismResult<Vector2<f64>> {
        Ok(Vector2::new(ra.radians(), dec.radians()))
    }

    fn deproject(&self, p: Vector2<f64>) -> (Angle, Angle) {
        sky_angles(p.x, p.y)
    }

    /// Planar radius in radians, unchanged.
    fn angular_radius(&self, disk: &Disk) -> Angle {
        Angle::from_radians(disk.radius)
    }
}

/// Tangent-plane projection about `(ra0, dec0)`.
#[derive(Clone, Copy, Debug)]
pub struct Gnomonic {
    pub ra0: Angle,
    pub dec0: Angle,
}

impl Gnomonic {
    /// Points closer than this to 90° from the tangent point are rejected.
    const MIN_COS_C: f64 = 1e-9;

    pub fn new(ra0: Angle, dec0: Angle) -> Self {
        Self { ra0, dec0 }
    }

    /// Tangent point at the normalized sum of the unit vectors of `positions`.
    pub fn about<P: RaDec>(positions: &[P]) -> AsterismResult<Self> {
        if positions.is_empty() {
            return Err(AsterismError::empty("Gnomonic::about"));
        }
        let sum: Vector3<f64> = positions.iter().map(|p| unit_vector(p.ra(), p.dec())).sum();
        let norm = sum.norm();
        if !norm.is_finite() || norm < 1e-12 {
            return Err(AsterismError::invalid(
                "positions have no well-defined mean direction",
            ));
        }
        let u = sum / norm;
        let (ra0, dec0) = sky_angles(u.y.atan2(u.x), u.z.clamp(-1.0, 1.0).asin());
        tracing::debug!(ra0 = %ra0, dec0 = %dec0, n = positions.len(), "gnomonic tangent point");
        Ok(Self { ra0, dec0 })
    }
}

fn unit_vector(ra: Angle, dec: Angle) -> Vector3<f64> {
    let (sr, cr) = ra.radians().sin_cos();
    let (sd, cd) = dec.radians().sin_cos();
    Vector3::new(cd * cr, cd * sr, sd)
}

impl Projection for Gnomonic {
    fn project(&self, ra: Angle, dec: Angle) -> AsterismResult<Vector2<f64>> {
        let (sd0, cd0) = self.dec0.radians().sin_cos();
        let (sd, cd) = dec.radians().sin_cos();
        let (sdra, cdra) = (ra.radians() - self.ra0.radians()).sin_cos();
        let cos_c = sd0 * sd + cd0 * cd * cdra;
        if !cos_c.is_finite() || cos_c <= Self::MIN_COS_C {
            return Err(AsterismError::invalid(format!(
                "({ra}, {dec}) is 90° or more from the tangent point ({}, {})",
                self.ra0, self.dec0
            )));
        }
        Ok(Vector2::new(
            cd * sdra / cos_c,
            (cd0 * sd - sd0 * cd * cdra) / cos_c,
        ))
    }

    fn deproject(&self, p: Vector2<f64>) -> (Angle, Angle) {
        let rho = p.norm();
        if rho == 0.0 {
            return sky_angles(self.ra0.radians(), self.dec0.radians());
        }
        let (sd0, cd0) = self.dec0.radians().sin_cos();
        let c = rho.atan();
        let (sc, cc) = c.sin_cos();
        let dec = (cc * sd0 + p.y * sc * cd0 / rho).clamp(-1.0, 1.0).asin();
        let ra = self.ra0.radians() + (p.x * sc).atan2(rho * cd0 * cc - p.y * sd0 * sc);
        sky_angles(ra, dec)
    }
}
