// Copyright @yucwang 2023

use crate::core::bsdf::MaterialType;
use crate::math::constants::{ EPSILON, Float, Vector3f };
use crate::math::ray::Ray3f;
use crate::math::spectrum::RGBSpectrum;

#[derive(Debug, Clone, PartialEq)]
pub struct Sphere {
    pub radius: Float,
    pub center: Vector3f,
    pub emission: RGBSpectrum,
    pub albedo: RGBSpectrum,
    pub material: MaterialType,
}

impl Sphere {
    pub fn new(radius: Float,
               center: Vector3f,
               emission: RGBSpectrum,
               albedo: RGBSpectrum,
               material: MaterialType) -> Self {
        debug_assert!(radius > 0.0, "sphere radius must be positive");
        Self { radius, center, emission, albedo, material }
    }

    /// Distance to the nearest hit further than `EPSILON` along the ray.
    ///
    /// With `oc = c - o` and a unit direction the quadratic reduces to
    /// `t = oc.d +/- sqrt((oc.d)^2 - oc.oc + r^2)`. The near root is
    /// dropped when it lies within `EPSILON` of the origin, which keeps
    /// secondary rays from re-hitting the surface they leave.
    pub fn ray_intersection_t(&self, ray: &Ray3f) -> Option<Float> {
        let oc = self.center - ray.origin();
        let neg_b = oc.dot(&ray.dir());
        let det = neg_b * neg_b - oc.dot(&oc) + self.radius * self.radius;

        if det < 0.0 {
            return None;
        }
        let det = det.sqrt();

        let t = neg_b - det;
        if t > EPSILON {
            return Some(t);
        }
        let t = neg_b + det;
        if t > EPSILON {
            return Some(t);
        }

        None
    }

    pub fn normal_at(&self, p: &Vector3f) -> Vector3f {
        (p - self.center).normalize()
    }

    pub fn is_emitter(&self) -> bool {
        !crate::math::spectrum::is_black(&self.emission)
    }
}
