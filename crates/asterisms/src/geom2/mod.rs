//! Planar geometry for the enclosing-disk problem.
//!
//! Purpose
//! - Provide the smallest-enclosing-disk primitive (`smallest_enclosing_disk`)
//!   on plain `Vector2<f64>` points, numerically explicit (eps-aware).
//! - Unit metadata never reaches this module; callers project first
//!   (see `crate::sky::Projection`).
//!
//! Code cross-refs: `Disk`, `GeomCfg`, `circumcircle`, `rand::draw_cloud`

pub mod rand;
mod solvers;
mod types;
mod util;

pub use solvers::{
    minidisk, smallest_enclosing_disk, smallest_enclosing_disk_seeded,
    smallest_enclosing_disk_with,
};
pub use types::{Disk, GeomCfg};
pub use util::{circumcircle, disk_from_three, farthest_pair_disk};

#[cfg(test)]
mod tests;
