// Copyright @yucwang 2026

use crate::core::rng::Rng;
use crate::core::sampler::{CameraSample, Sampler};
use crate::math::constants::{Float, Vector2f};

/// Box-filtered jitter: every sample lands uniformly inside the pixel.
pub struct RandomSampler {
    rng: Rng,
    samples_per_pixel: u32,
    current_sample_index: u32,
}

impl RandomSampler {
    pub fn new(samples_per_pixel: u32, seed: u64) -> Self {
        Self {
            rng: Rng::new(seed),
            samples_per_pixel: samples_per_pixel.max(1),
            current_sample_index: 0,
        }
    }
}

impl Sampler for RandomSampler {
    fn samples_per_pixel(&self) -> u32 {
        self.samples_per_pixel
    }

    fn clone_seeded(&self, seed: u64) -> Box<dyn Sampler> {
        Box::new(RandomSampler::new(self.samples_per_pixel, seed))
    }

    fn start_pixel(&mut self) {
        self.current_sample_index = 0;
    }

    fn start_next_sample(&mut self) -> bool {
        if self.current_sample_index < self.samples_per_pixel {
            self.current_sample_index += 1;
        }
        self.current_sample_index < self.samples_per_pixel
    }

    fn get_1d(&mut self) -> Float {
        self.rng.uniform_float()
    }

    fn get_2d(&mut self) -> Vector2f {
        self.rng.uniform_float2()
    }

    fn get_camera_sample(&mut self, p_film: Vector2f) -> CameraSample {
        CameraSample { p_film: p_film + self.rng.uniform_float2() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count_samples(sampler: &mut dyn Sampler) -> u32 {
        let mut count = 0;
        sampler.start_pixel();
        loop {
            count += 1;
            if !sampler.start_next_sample() {
                break;
            }
        }
        count
    }

    #[test]
    fn test_sample_count() {
        let mut sampler = RandomSampler::new(7, 1);
        assert_eq!(count_samples(&mut sampler), 7);
        assert_eq!(count_samples(&mut sampler), 7);
        assert!(!sampler.start_next_sample());
    }

    #[test]
    fn test_zero_request_is_clamped() {
        let mut sampler = RandomSampler::new(0, 1);
        assert_eq!(sampler.samples_per_pixel(), 1);
        assert_eq!(count_samples(&mut sampler), 1);
    }

    #[test]
    fn test_camera_sample_inside_pixel() {
        let mut sampler = RandomSampler::new(16, 3);
        let origin = Vector2f::new(10.0, 20.0);
        sampler.start_pixel();
        loop {
            let sample = sampler.get_camera_sample(origin);
            assert!(sample.p_film.x >= 10.0 && sample.p_film.x < 11.0);
            assert!(sample.p_film.y >= 20.0 && sample.p_film.y < 21.0);
            if !sampler.start_next_sample() {
                break;
            }
        }
    }

    #[test]
    fn test_clone_is_independent_and_deterministic() {
        let prototype = RandomSampler::new(4, 0);
        let mut a = prototype.clone_seeded(99);
        let mut b = prototype.clone_seeded(99);
        let mut c = prototype.clone_seeded(100);
        assert_eq!(a.samples_per_pixel(), 4);
        let va: Vec<Float> = (0..16).map(|_| a.get_1d()).collect();
        let vb: Vec<Float> = (0..16).map(|_| b.get_1d()).collect();
        let vc: Vec<Float> = (0..16).map(|_| c.get_1d()).collect();
        assert_eq!(va, vb);
        assert_ne!(va, vc);
    }
}
