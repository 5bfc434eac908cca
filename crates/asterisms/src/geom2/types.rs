//! Basic 2D types and tolerances used by the enclosing-disk solver.
//!
//! - `GeomCfg`: centralizes epsilons for containment and collinearity checks.
//! - `Disk`: closed disk `{ p : |p - center| <= radius }` with eps-aware predicates.
//!
//! Code cross-refs: `solvers::smallest_enclosing_disk_with`, `util::{circumcircle, farthest_pair_disk}`

use nalgebra::Vector2;

/// Geometry configuration (tolerances).
#[derive(Clone, Copy, Debug)]
pub struct GeomCfg {
    /// Absolute floor of the containment slack.
    pub eps_abs: f64,
    /// Containment slack relative to the current radius.
    pub eps_rel: f64,
    /// Relative determinant threshold below which a triangle counts as collinear.
    pub eps_det: f64,
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self {
            eps_abs: 1e-9,
            eps_rel: 1e-9,
            eps_det: 1e-12,
        }
    }
}

impl GeomCfg {
    /// Containment slack for a disk of the given radius: `max(eps_abs, eps_rel * radius)`.
    #[inline]
    pub fn containment_eps(&self, radius: f64) -> f64 {
        self.eps_abs.max(self.eps_rel * radius)
    }
}

/// Closed disk in the plane.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Disk {
    pub center: Vector2<f64>,
    pub radius: f64,
}

impl Disk {
    #[inline]
    pub fn new(center: Vector2<f64>, radius: f64) -> Self {
        Self { center, radius }
    }

    /// Degenerate disk of radius zero at `p`.
    #[inline]
    pub fn from_point(p: Vector2<f64>) -> Self {
        Self {
            center: p,
            radius: 0.0,
        }
    }

    /// Smallest disk with `a` and `b` on its boundary: the segment is a diameter.
    #[inline]
    pub fn from_diameter(a: Vector2<f64>, b: Vector2<f64>) -> Self {
        let center = (a + b) * 0.5;
        Self {
            center,
            radius: (a - b).norm() * 0.5,
        }
    }

    /// `|p - center| <= radius + eps`, compared on squared distances.
    #[inline]
    pub fn contains_eps(&self, p: Vector2<f64>, eps: f64) -> bool {
        let r = self.radius + eps;
        (p - self.center).norm_squared() <= r * r
    }

    /// Containment with the slack prescribed by `cfg` for this radius.
    #[inline]
    pub fn contains(&self, p: Vector2<f64>, cfg: &GeomCfg) -> bool {
        self.contains_eps(p, cfg.containment_eps(self.radius))
    }
}
