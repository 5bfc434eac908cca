//! Random planar point clouds (replay tokens for reproducible draws).
//!
//! Purpose
//! - Feed the enclosing-disk tests and benchmarks with reproducible inputs of
//!   different shapes: uniform boxes, annuli (many points near the boundary),
//!   and nearly collinear strips (degenerate circumcircles).
//!
//! Determinism
//! - A replay token `(seed, index)` is mixed into a single `StdRng`, so the
//!   `index`-th draw of a run can be regenerated without replaying the stream.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Shape of a point cloud.
#[derive(Clone, Copy, Debug)]
pub enum CloudShape {
    /// Uniform in the axis-aligned box `[-half_width, half_width]²`.
    Box { half_width: f64 },
    /// Uniform angle, radius uniform in `[r_min, r_max]`.
    Annulus { r_min: f64, r_max: f64 },
    /// Points along the x axis in `[-half_length, half_length]`, with `|y| <= jitter`.
    Strip { half_length: f64, jitter: f64 },
}

/// Point cloud sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct CloudCfg {
    pub count: usize,
    pub shape: CloudShape,
    /// Translation applied after sampling.
    pub offset: Vector2<f64>,
}

impl Default for CloudCfg {
    fn default() -> Self {
        Self {
            count: 100,
            shape: CloudShape::Box { half_width: 1.0 },
            offset: Vector2::zeros(),
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    pub fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw a point cloud.
pub fn draw_cloud(cfg: CloudCfg, tok: ReplayToken) -> Vec<Vector2<f64>> {
    let mut rng = tok.to_std_rng();
    draw_cloud_with(cfg, &mut rng)
}

/// Draw a point cloud from an existing generator.
pub fn draw_cloud_with<R: Rng + ?Sized>(cfg: CloudCfg, rng: &mut R) -> Vec<Vector2<f64>> {
    (0..cfg.count)
        .map(|_| sample_one(cfg.shape, rng) + cfg.offset)
        .collect()
}

fn sample_one<R: Rng + ?Sized>(shape: CloudShape, rng: &mut R) -> Vector2<f64> {
    match shape {
        CloudShape::Box { half_width } => {
            let h = half_width.abs();
            Vector2::new(
                (rng.gen::<f64>() * 2.0 - 1.0) * h,
                (rng.gen::<f64>() * 2.0 - 1.0) * h,
            )
        }
        CloudShape::Annulus { r_min, r_max } => {
            let lo = r_min.max(0.0);
            let hi = r_max.max(lo);
            let th = rng.gen::<f64>() * std::f64::consts::TAU;
            let r = lo + rng.gen::<f64>() * (hi - lo);
            Vector2::new(th.cos() * r, th.sin() * r)
        }
        CloudShape::Strip {
            half_length,
            jitter,
        } => Vector2::new(
            (rng.gen::<f64>() * 2.0 - 1.0) * half_length.abs(),
            (rng.gen::<f64>() * 2.0 - 1.0) * jitter.abs(),
        ),
    }
}
