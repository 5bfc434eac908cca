//! Flat re-exports of the public surface.
//!
//! Prefer these paths in binaries and benches so module moves inside the
//! crate do not ripple out.

// Planar solver
pub use crate::geom2::{
    circumcircle, disk_from_three, farthest_pair_disk, minidisk, smallest_enclosing_disk,
    smallest_enclosing_disk_seeded, smallest_enclosing_disk_with, Disk, GeomCfg,
};
// Point clouds
pub use crate::geom2::rand::{draw_cloud, draw_cloud_with, CloudCfg, CloudShape, ReplayToken};
// Sky helpers
pub use crate::sky::{
    circumcenter, circumcenter_with, mean_center, midpoint, Angle, CircumcenterCfg, Distance,
    Gnomonic, PlateCarree, Position, Preference, Projection, RaDec, SkyDisk, Star,
};
