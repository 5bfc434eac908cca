//! Sky positions, angle units, projections, and group centers.
//!
//! Code cross-refs: `Angle`, `Position`, `RaDec`, `Projection`, `circumcenter`

mod angle;
mod center;
mod position;
mod projection;

pub use angle::{Angle, Distance, Preference, AU_KM};
pub use center::{circumcenter, circumcenter_with, mean_center, midpoint, CircumcenterCfg, SkyDisk};
pub use position::{Position, RaDec, Star};
pub use projection::{Gnomonic, PlateCarree, Projection};

#[cfg(test)]
mod tests;
