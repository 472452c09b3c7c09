// Copyright @yucwang 2026

use crate::core::sampler::Sampler;
use crate::core::scene::Scene;
use crate::math::ray::Ray3f;
use crate::math::spectrum::RGBSpectrum;

pub trait Integrator: Sync {
    /// Radiance arriving along `ray`, estimated with the sampler's random
    /// numbers. `depth` counts the bounces taken so far.
    fn radiance(&self, scene: &Scene, ray: &Ray3f, depth: u32, sampler: &mut dyn Sampler) -> RGBSpectrum;

    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}
