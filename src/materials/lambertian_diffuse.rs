// Copyright @yucwang 2023

use crate::math::constants::{ Float, INV_PI, Vector2f, Vector3f };
use crate::math::frame::Frame;
use crate::math::spectrum::RGBSpectrum;
use crate::math::warp::{ sample_cosine_hemisphere, sample_cosine_hemisphere_pdf };

/// Ideal Lambertian reflector, importance sampled with a cosine-weighted
/// hemisphere.
pub struct LambertianDiffuseBSDF {
    color: RGBSpectrum
}

impl LambertianDiffuseBSDF {
    pub fn new(rgb: RGBSpectrum) -> Self {
        Self {
            color: rgb,
        }
    }

    /// BRDF value, `R / pi`.
    pub fn eval(&self) -> RGBSpectrum {
        self.color * INV_PI
    }

    /// World-space direction in the hemisphere around `sh_normal`.
    pub fn sample(&self, u: &Vector2f, sh_normal: &Vector3f) -> Vector3f {
        let frame = Frame::from_normal(sh_normal);
        frame.from_local(&sample_cosine_hemisphere(u)).normalize()
    }

    pub fn pdf(&self, cos_theta: Float) -> Float {
        sample_cosine_hemisphere_pdf(cos_theta.abs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rng::Rng;

    #[test]
    fn test_samples_stay_in_hemisphere() {
        let bsdf = LambertianDiffuseBSDF::new(RGBSpectrum::repeat(0.75));
        let n = Vector3f::new(-0.2, 0.9, 0.1).normalize();
        let mut rng = Rng::new(3);
        for _ in 0..1000 {
            let wi = bsdf.sample(&rng.uniform_float2(), &n);
            assert!((wi.norm() - 1.0).abs() < 1e-9);
            assert!(wi.dot(&n) > 0.0);
        }
    }

    #[test]
    fn test_weight_cancels_to_albedo() {
        let albedo = RGBSpectrum::new(0.75, 0.25, 0.5);
        let bsdf = LambertianDiffuseBSDF::new(albedo);
        let n = Vector3f::new(0.0, 0.0, 1.0);
        let wi = bsdf.sample(&Vector2f::new(0.3, 0.6), &n);
        let cos_theta = n.dot(&wi).abs();
        let weight = bsdf.eval() * cos_theta / bsdf.pdf(cos_theta);
        assert!((weight - albedo).norm() < 1e-9);
    }

    #[test]
    fn test_mean_cosine_matches_cosine_density() {
        // E[cos] under p = cos/pi is 2/3.
        let bsdf = LambertianDiffuseBSDF::new(RGBSpectrum::repeat(1.0));
        let n = Vector3f::new(1.0, 0.0, 0.0);
        let mut rng = Rng::new(9);
        let count = 50_000;
        let mut sum = 0.0;
        for _ in 0..count {
            sum += bsdf.sample(&rng.uniform_float2(), &n).dot(&n);
        }
        assert!((sum / count as Float - 2.0 / 3.0).abs() < 0.01);
    }
}
