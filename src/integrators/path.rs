// Copyright @yucwang 2026

use crate::core::bsdf::{reflect, MaterialType};
use crate::core::integrator::Integrator;
use crate::core::interaction::SurfaceIntersection;
use crate::core::sampler::Sampler;
use crate::core::scene::Scene;
use crate::materials::dielectric::{reflection_probability, DielectricBSDF};
use crate::materials::lambertian_diffuse::LambertianDiffuseBSDF;
use crate::math::ray::Ray3f;
use crate::math::spectrum::{max_component, RGBSpectrum};

pub const DEFAULT_MAX_DEPTH: u32 = 100;
pub const DEFAULT_RR_DEPTH: u32 = 5;
pub const DEFAULT_SPLIT_DEPTH: u32 = 2;

/// Recursive unidirectional path tracer.
///
/// Light is only found by chance: every material scatters one (or, for
/// glass near the camera, two) continuation rays and the emission of
/// whatever they hit is picked up on the way back.
pub struct PathIntegrator {
    /// Past this depth a hit returns its emission only.
    pub max_depth: u32,
    /// Russian roulette starts once the bounce count exceeds this.
    pub rr_depth: u32,
    /// Up to this bounce count glass traces both branches.
    pub split_depth: u32,
    dielectric: DielectricBSDF,
}

impl Default for PathIntegrator {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_DEPTH, DEFAULT_RR_DEPTH, DEFAULT_SPLIT_DEPTH)
    }
}

impl PathIntegrator {
    pub fn new(max_depth: u32, rr_depth: u32, split_depth: u32) -> Self {
        Self { max_depth, rr_depth, split_depth, dielectric: DielectricBSDF::default() }
    }

    fn diffuse(&self, scene: &Scene, its: &SurfaceIntersection, f: &RGBSpectrum,
               depth: u32, sampler: &mut dyn Sampler) -> RGBSpectrum {
        let bsdf = LambertianDiffuseBSDF::new(*f);
        let wi = bsdf.sample(&sampler.get_2d(), &its.sh_normal());

        // cos/pdf cancels to pi; both stay explicit so the estimator reads
        // as f * Li * cos / pdf.
        let abs_cos_theta = its.sh_normal().dot(&wi).abs();
        let pdf = bsdf.pdf(abs_cos_theta);
        let li = self.radiance(scene, &Ray3f::new(its.p(), wi), depth, sampler);

        bsdf.eval().component_mul(&li) * abs_cos_theta / pdf
    }

    fn specular(&self, scene: &Scene, ray: &Ray3f, its: &SurfaceIntersection, f: &RGBSpectrum,
                depth: u32, sampler: &mut dyn Sampler) -> RGBSpectrum {
        let wi = reflect(&ray.dir(), &its.geo_normal());
        f.component_mul(&self.radiance(scene, &Ray3f::new(its.p(), wi), depth, sampler))
    }

    fn refract(&self, scene: &Scene, ray: &Ray3f, its: &SurfaceIntersection, f: &RGBSpectrum,
               depth: u32, sampler: &mut dyn Sampler) -> RGBSpectrum {
        let reflect_ray = Ray3f::new(its.p(), reflect(&ray.dir(), &its.geo_normal()));

        let transmission = match self.dielectric.sample_transmission(&ray.dir(), &its.geo_normal(), &its.sh_normal()) {
            Some(t) => t,
            // Total internal reflection.
            None => return f.component_mul(&self.radiance(scene, &reflect_ray, depth, sampler)),
        };
        let refract_ray = Ray3f::new(its.p(), transmission.dir);
        let re = transmission.reflectance;
        let tr = transmission.transmittance;

        let li = if depth > self.split_depth {
            let p = reflection_probability(re);
            if sampler.get_1d() < p {
                self.radiance(scene, &reflect_ray, depth, sampler) * (re / p)
            } else {
                self.radiance(scene, &refract_ray, depth, sampler) * (tr / (1.0 - p))
            }
        } else {
            self.radiance(scene, &reflect_ray, depth, sampler) * re
                + self.radiance(scene, &refract_ray, depth, sampler) * tr
        };

        f.component_mul(&li)
    }
}

impl Integrator for PathIntegrator {
    fn radiance(&self, scene: &Scene, ray: &Ray3f, depth: u32, sampler: &mut dyn Sampler) -> RGBSpectrum {
        let its = match scene.ray_intersection(ray) {
            Some(its) => its,
            None => return RGBSpectrum::zeros(),
        };
        let object = scene.object(its.object_index());
        let le = object.emission;

        if depth > self.max_depth {
            return le;
        }

        let mut f = object.albedo;
        let depth = depth.saturating_add(1);
        if depth > self.rr_depth {
            let q = max_component(&f);
            if sampler.get_1d() < q {
                f = f * (1.0 / q);
            } else {
                return le;
            }
        }

        let scattered = match object.material {
            MaterialType::Diffuse => self.diffuse(scene, &its, &f, depth, sampler),
            MaterialType::Specular => self.specular(scene, ray, &its, &f, depth, sampler),
            MaterialType::Refract => self.refract(scene, ray, &its, &f, depth, sampler),
        };

        le + scattered
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::scene_loader::load_cornell_box;
    use crate::core::sensor::Sensor;
    use crate::core::sampler::CameraSample;
    use crate::math::constants::{Float, Vector2f, Vector3f};
    use crate::samplers::random::RandomSampler;
    use crate::shapes::sphere::Sphere;

    fn enclosure(emission: Float, albedo: Float, material: MaterialType) -> Scene {
        Scene::new(vec![Sphere::new(10.0, Vector3f::zeros(), RGBSpectrum::repeat(emission),
                                    RGBSpectrum::repeat(albedo), material)])
    }

    fn mean_radiance(integrator: &PathIntegrator, scene: &Scene, count: usize, seed: u64) -> RGBSpectrum {
        let mut sampler = RandomSampler::new(1, seed);
        let mut sum = RGBSpectrum::zeros();
        for i in 0..count {
            let phi = i as Float * 0.618;
            let dir = Vector3f::new(phi.cos(), 0.3, phi.sin());
            let ray = Ray3f::new(Vector3f::zeros(), dir);
            sum += integrator.radiance(scene, &ray, 0, &mut sampler);
        }
        sum / count as Float
    }

    #[test]
    fn test_miss_returns_black() {
        let scene = Scene::default();
        let integrator = PathIntegrator::default();
        let mut sampler = RandomSampler::new(1, 0);
        let ray = Ray3f::new(Vector3f::zeros(), Vector3f::new(0.0, 0.0, 1.0));
        assert_eq!(integrator.radiance(&scene, &ray, 0, &mut sampler), RGBSpectrum::zeros());
    }

    #[test]
    fn test_depth_guard_returns_emission_only() {
        let scene = enclosure(2.0, 0.9, MaterialType::Diffuse);
        let integrator = PathIntegrator::default();
        let mut sampler = RandomSampler::new(1, 0);
        let ray = Ray3f::new(Vector3f::zeros(), Vector3f::new(0.0, 0.0, 1.0));
        let l = integrator.radiance(&scene, &ray, DEFAULT_MAX_DEPTH + 1, &mut sampler);
        assert_eq!(l, RGBSpectrum::repeat(2.0));
    }

    #[test]
    fn test_black_albedo_terminates_after_roulette_depth() {
        let scene = enclosure(1.0, 0.0, MaterialType::Diffuse);
        let integrator = PathIntegrator::default();
        let mut sampler = RandomSampler::new(1, 0);
        let ray = Ray3f::new(Vector3f::zeros(), Vector3f::new(1.0, 0.0, 0.0));
        let l = integrator.radiance(&scene, &ray, DEFAULT_RR_DEPTH, &mut sampler);
        assert_eq!(l, RGBSpectrum::repeat(1.0));
    }

    #[test]
    fn test_roulette_is_unbiased() {
        // Inside a closed emitter every bounce hits the wall again, so
        // L = Le + a * L and L = Le / (1 - a).
        let scene = enclosure(1.0, 0.5, MaterialType::Diffuse);
        let expected = 2.0;

        let roulette = PathIntegrator::default();
        let with_roulette = mean_radiance(&roulette, &scene, 20_000, 17);

        let reference = PathIntegrator::new(200, u32::MAX, DEFAULT_SPLIT_DEPTH);
        let without_roulette = mean_radiance(&reference, &scene, 2_000, 23);

        for c in 0..3 {
            assert!((without_roulette[c] - expected).abs() < 1e-6, "reference {}", without_roulette[c]);
            assert!((with_roulette[c] - expected).abs() < 0.02, "roulette {}", with_roulette[c]);
        }
    }

    #[test]
    fn test_roulette_is_unbiased_for_colored_albedo() {
        let scene = Scene::new(vec![Sphere::new(10.0, Vector3f::zeros(), RGBSpectrum::repeat(1.0),
                                                RGBSpectrum::new(0.6, 0.3, 0.1), MaterialType::Diffuse)]);
        let with_roulette = mean_radiance(&PathIntegrator::default(), &scene, 40_000, 5);
        let expected = [1.0 / 0.4, 1.0 / 0.7, 1.0 / 0.9];
        for c in 0..3 {
            assert!((with_roulette[c] - expected[c]).abs() < 0.03,
                    "channel {}: {} vs {}", c, with_roulette[c], expected[c]);
        }
    }

    #[test]
    fn test_mirror_enclosure_is_geometric_series() {
        // Deterministic until roulette kicks in: each mirror bounce adds a^k.
        let scene = enclosure(1.0, 0.5, MaterialType::Specular);
        let reference = PathIntegrator::new(200, u32::MAX, DEFAULT_SPLIT_DEPTH);
        let mut sampler = RandomSampler::new(1, 0);
        let ray = Ray3f::new(Vector3f::zeros(), Vector3f::new(0.2, 0.1, 1.0));
        let l = reference.radiance(&scene, &ray, 0, &mut sampler);
        assert!((l.x - 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_radiance_is_non_negative_and_finite() {
        let load_result = load_cornell_box(64, 48);
        let integrator = PathIntegrator::default();
        let mut sampler = RandomSampler::new(1, 77);
        for y in 0..48 {
            for x in 0..64 {
                let sample = CameraSample { p_film: Vector2f::new(x as Float + 0.5, y as Float + 0.5) };
                let ray = load_result.camera.sample_ray(&sample);
                let l = integrator.radiance(&load_result.scene, &ray, 0, &mut sampler);
                for c in 0..3 {
                    assert!(l[c] >= 0.0 && l[c].is_finite(), "pixel ({}, {}) -> {:?}", x, y, l);
                }
            }
        }
    }

    #[test]
    fn test_glass_enclosure_keeps_energy_bounded() {
        // Lossless glass surrounded by vacuum inside a closed emitter.
        let scene = Scene::new(vec![
            Sphere::new(20.0, Vector3f::zeros(), RGBSpectrum::repeat(1.0),
                        RGBSpectrum::repeat(0.5), MaterialType::Diffuse),
            Sphere::new(5.0, Vector3f::new(0.0, 0.0, 10.0), RGBSpectrum::zeros(),
                        RGBSpectrum::repeat(1.0), MaterialType::Refract),
        ]);
        let l = mean_radiance(&PathIntegrator::default(), &scene, 5_000, 3);
        for c in 0..3 {
            assert!((l[c] - 2.0).abs() < 0.05, "channel {} -> {}", c, l[c]);
        }
    }

    #[test]
    fn test_same_seed_same_radiance_sequence() {
        let load_result = load_cornell_box(32, 24);
        let integrator = PathIntegrator::default();
        let sample = CameraSample { p_film: Vector2f::new(16.5, 12.5) };
        let ray = load_result.camera.sample_ray(&sample);

        let run = |seed: u64| -> Vec<u64> {
            let mut sampler = RandomSampler::new(1, seed);
            (0..32).flat_map(|_| {
                let l = integrator.radiance(&load_result.scene, &ray, 0, &mut sampler);
                vec![l.x.to_bits(), l.y.to_bits(), l.z.to_bits()]
            }).collect()
        };
        assert_eq!(run(1234), run(1234));
        assert_ne!(run(1234), run(4321));
    }
}
