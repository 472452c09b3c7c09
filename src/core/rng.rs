// Copyright @yucwang 2026

use crate::math::constants::{Float, Vector2f};
use rand::rngs::StdRng;
use rand::{Rng as _, SeedableRng};

pub const DEFAULT_SEED: u64 = 1234;

/// Seedable uniform source. One instance per sampler; never shared between
/// threads.
#[derive(Clone, Debug)]
pub struct Rng {
    engine: StdRng,
}

impl Default for Rng {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

impl Rng {
    pub fn new(seed: u64) -> Self {
        Self { engine: StdRng::seed_from_u64(seed) }
    }

    // [0, i32::MAX]
    pub fn uniform_int(&mut self) -> i32 {
        self.engine.gen_range(0..=i32::MAX)
    }

    // [0, u32::MAX]
    pub fn uniform_uint(&mut self) -> u32 {
        self.engine.gen()
    }

    // [0, 1)
    pub fn uniform_float(&mut self) -> Float {
        self.engine.gen::<Float>()
    }

    // [0, 1) x [0, 1)
    pub fn uniform_float2(&mut self) -> Vector2f {
        let x = self.uniform_float();
        let y = self.uniform_float();
        Vector2f::new(x, y)
    }
}
