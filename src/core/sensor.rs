// Copyright @yucwang 2026

use crate::core::sampler::CameraSample;
use crate::math::ray::Ray3f;

pub trait Sensor: Sync {
    /// Primary ray through a film-plane sample given in pixel units.
    fn sample_ray(&self, sample: &CameraSample) -> Ray3f;
    fn width(&self) -> usize;
    fn height(&self) -> usize;
    fn describe(&self) -> String {
        String::from("Sensor")
    }
}
