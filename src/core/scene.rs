// Copyright @yucwang 2026

use crate::core::interaction::SurfaceIntersection;
use crate::math::constants::Float;
use crate::math::ray::Ray3f;
use crate::shapes::sphere::Sphere;

/// Fixed list of spheres, brute-force intersected. Read-only once built, so
/// it is shared between render workers without locking.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    objects: Vec<Sphere>,
}

impl Scene {
    pub fn new(objects: Vec<Sphere>) -> Self {
        Self { objects }
    }

    pub fn objects(&self) -> &[Sphere] {
        &self.objects
    }

    pub fn object(&self, index: usize) -> &Sphere {
        &self.objects[index]
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Nearest hit distance and the index of the sphere hit.
    pub fn nearest_hit(&self, ray: &Ray3f) -> Option<(Float, usize)> {
        let mut nearest: Option<(Float, usize)> = None;
        for (index, object) in self.objects.iter().enumerate() {
            let t = match object.ray_intersection_t(ray) {
                Some(t) => t,
                None => continue,
            };
            match nearest {
                Some((min_t, _)) if min_t <= t => {}
                _ => nearest = Some((t, index)),
            }
        }
        nearest
    }

    pub fn ray_intersection(&self, ray: &Ray3f) -> Option<SurfaceIntersection> {
        let (t, index) = self.nearest_hit(ray)?;
        let p = ray.at(t);
        let n = self.objects[index].normal_at(&p);
        Some(SurfaceIntersection::new(p, n, &ray.dir(), t, index))
    }
}
