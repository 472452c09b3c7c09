// Copyright @yucwang 2026

use crate::core::rng::Rng;
use crate::core::sampler::{CameraSample, Sampler};
use crate::math::constants::{Float, Vector2f};
use crate::math::warp::sample_tent;

// 2x2 sub-pixel grid.
pub const SUB_PIXEL_NUM: u32 = 4;

/// Stratified sampler with a tent reconstruction filter.
///
/// Each pixel is split into a 2x2 grid of strata and every stratum receives
/// the requested number of samples, so a pixel gets `requested * 4` samples
/// in total. Inside a stratum the offset follows a triangle distribution on
/// [-1, 1) around the stratum center, which weights samples toward the
/// center and tapers them off at the edges.
pub struct TentSampler {
    rng: Rng,
    samples_per_stratum: u32,
    current_sample_index: u32,
    current_sub_pixel_index: u32,
}

impl TentSampler {
    pub fn new(samples_per_stratum: u32, seed: u64) -> Self {
        Self {
            rng: Rng::new(seed),
            samples_per_stratum: samples_per_stratum.max(1),
            current_sample_index: 0,
            current_sub_pixel_index: 0,
        }
    }

    pub fn samples_per_stratum(&self) -> u32 {
        self.samples_per_stratum
    }

    /// Index of the stratum the next camera sample falls in.
    pub fn sub_pixel_index(&self) -> u32 {
        self.current_sub_pixel_index
    }
}

impl Sampler for TentSampler {
    fn samples_per_pixel(&self) -> u32 {
        self.samples_per_stratum * SUB_PIXEL_NUM
    }

    fn clone_seeded(&self, seed: u64) -> Box<dyn Sampler> {
        Box::new(TentSampler::new(self.samples_per_stratum, seed))
    }

    fn start_pixel(&mut self) {
        self.current_sample_index = 0;
        self.current_sub_pixel_index = 0;
    }

    fn start_next_sample(&mut self) -> bool {
        if self.current_sub_pixel_index >= SUB_PIXEL_NUM {
            return false;
        }

        self.current_sample_index += 1;
        if self.current_sample_index < self.samples_per_stratum {
            return true;
        }

        self.current_sample_index = 0;
        self.current_sub_pixel_index += 1;
        self.current_sub_pixel_index < SUB_PIXEL_NUM
    }

    fn get_1d(&mut self) -> Float {
        self.rng.uniform_float()
    }

    fn get_2d(&mut self) -> Vector2f {
        self.rng.uniform_float2()
    }

    fn get_camera_sample(&mut self, p_film: Vector2f) -> CameraSample {
        let sub_pixel_x = (self.current_sub_pixel_index % 2) as Float;
        let sub_pixel_y = (self.current_sub_pixel_index / 2) as Float;

        let delta_x = sample_tent(self.rng.uniform_float());
        let delta_y = sample_tent(self.rng.uniform_float());

        let offset = Vector2f::new((sub_pixel_x + delta_x + 0.5) / 2.0,
                                   (sub_pixel_y + delta_y + 0.5) / 2.0);

        CameraSample { p_film: p_film + offset }
    }
}
