// Copyright @yucwang 2026

use crate::math::constants::{Float, Vector2f};

/// Sample point on the film plane, in pixel units.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CameraSample {
    pub p_film: Vector2f,
}

/// Per-pixel sample pattern plus the random numbers the integrator draws.
///
/// A sampler carries mutable random state and must not be shared by
/// concurrent workers; use `clone_seeded` to hand each worker its own.
///
/// Iteration runs as a do/while: call `start_pixel`, take a sample, then
/// keep sampling while `start_next_sample` returns `true`.
pub trait Sampler: Send + Sync {
    fn samples_per_pixel(&self) -> u32;

    /// Independent sampler with the same policy and a fresh generator.
    fn clone_seeded(&self, seed: u64) -> Box<dyn Sampler>;

    fn start_pixel(&mut self);
    fn start_next_sample(&mut self) -> bool;

    fn get_1d(&mut self) -> Float;
    fn get_2d(&mut self) -> Vector2f;
    fn get_camera_sample(&mut self, p_film: Vector2f) -> CameraSample;

    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}
