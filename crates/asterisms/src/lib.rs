//! Centers and enclosing disks of groups of sky positions.
//!
//! Layout
//! - `geom2`: planar smallest-enclosing-disk solver (Welzl) and point samplers.
//! - `sky`: angle/distance units, positions, projections, and the
//!   `midpoint` / `mean_center` / `circumcenter` helpers built on `geom2`.
//! - `api`: flat re-exports for callers that want one import path.

pub mod api;
pub mod error;
pub mod geom2;
pub mod sky;

pub use error::{AsterismError, AsterismResult};

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::error::{AsterismError, AsterismResult};
    pub use crate::geom2::{smallest_enclosing_disk, smallest_enclosing_disk_seeded, Disk, GeomCfg};
    pub use crate::sky::{
        circumcenter, mean_center, midpoint, Angle, Distance, Gnomonic, PlateCarree, Position,
        Projection, RaDec, SkyDisk, Star,
    };
    pub use nalgebra::Vector2 as Vec2;
}
