use nalgebra::Vector2;

use super::types::{Disk, GeomCfg};

/// z-component of `(b - a) × (c - a)`; twice the signed triangle area.
#[inline]
pub(crate) fn cross(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>) -> f64 {
    let ab = b - a;
    let ac = c - a;
    ab.x * ac.y - ab.y * ac.x
}

/// Diameter disk of the farthest-apart pair among three points.
pub fn farthest_pair_disk(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>) -> Disk {
    let dab = (a - b).norm_squared();
    let dbc = (b - c).norm_squared();
    let dac = (a - c).norm_squared();
    if dab >= dbc && dab >= dac {
        Disk::from_diameter(a, b)
    } else if dbc >= dac {
        Disk::from_diameter(b, c)
    } else {
        Disk::from_diameter(a, c)
    }
}

/// Circumscribed circle of the triangle `(a, b, c)`.
///
/// Perpendicular-bisector intersection, solved in coordinates relative to `a`
/// to limit cancellation. Returns `None` when `|det| <= eps_det * max(|ab|², |ac|²)`
/// (collinear or coincident points).
pub fn circumcircle(
    a: Vector2<f64>,
    b: Vector2<f64>,
    c: Vector2<f64>,
    cfg: &GeomCfg,
) -> Option<Disk> {
    let ab = b - a;
    let ac = c - a;
    let ab2 = ab.norm_squared();
    let ac2 = ac.norm_squared();
    let d = 2.0 * cross(a, b, c);
    let scale = ab2.max(ac2);
    if !d.is_finite() || d.abs() <= cfg.eps_det * scale {
        return None;
    }
    let ux = (ac.y * ab2 - ab.y * ac2) / d;
    let uy = (ab.x * ac2 - ac.x * ab2) / d;
    let u = Vector2::new(ux, uy);
    Some(Disk::new(a + u, u.norm()))
}

/// Disk through three boundary points, falling back to the farthest-pair
/// diameter disk for degenerate triangles.
pub fn disk_from_three(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>, cfg: &GeomCfg) -> Disk {
    circumcircle(a, b, c, cfg).unwrap_or_else(|| farthest_pair_disk(a, b, c))
}
