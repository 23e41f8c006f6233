//! Random valid triangles (rejection sampling + replay tokens).
//!
//! Model
//! - Draw three sides uniformly in `[side_min, side_max)` and keep the first
//!   triple that passes `Triangle::new`. Roughly half of all uniform triples
//!   are valid, so a small attempt budget suffices.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use super::types::Triangle;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const MAX_ATTEMPTS: usize = 64;

/// Side-length bounds for the sampler.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SampleCfg {
    /// Lower side bound (inclusive). Clamped to a tiny positive value.
    pub side_min: f64,
    /// Upper side bound (exclusive). If `<= side_min` the draw is equilateral.
    pub side_max: f64,
}

impl Default for SampleCfg {
    fn default() -> Self {
        Self {
            side_min: 0.1,
            side_max: 10.0,
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
    fn to_std_rng(self) -> StdRng {
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        StdRng::seed_from_u64(mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15))))
    }
}

fn equilateral(side: f64) -> Triangle {
    Triangle {
        a: side,
        b: side,
        c: side,
    }
}

/// Draw one valid triangle for `tok`.
pub fn draw_triangle(cfg: SampleCfg, tok: ReplayToken) -> Triangle {
    let lo = if cfg.side_min.is_finite() {
        cfg.side_min.max(1e-9)
    } else {
        1e-9
    };
    let hi = if cfg.side_max.is_finite() {
        cfg.side_max
    } else {
        lo
    };
    if hi <= lo {
        return equilateral(lo);
    }
    let mut rng = tok.to_std_rng();
    for _ in 0..MAX_ATTEMPTS {
        let sides = [
            rng.gen_range(lo..hi),
            rng.gen_range(lo..hi),
            rng.gen_range(lo..hi),
        ];
        if let Ok(t) = Triangle::from_sides(sides) {
            return t;
        }
    }
    equilateral(lo)
}

/// `count` draws with indexes `0..count` under one seed.
pub fn draw_many(cfg: SampleCfg, seed: u64, count: usize) -> Vec<Triangle> {
    (0..count as u64)
        .map(|index| draw_triangle(cfg, ReplayToken { seed, index }))
        .collect()
}
