// Copyright @yucwang 2023

use crate::math::constants::{ Float, Vector3f };

/// Nearest surface hit along a ray.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SurfaceIntersection {
    p: Vector3f,
    geo_normal: Vector3f,
    sh_normal: Vector3f,
    t: Float,
    object_index: usize,
}

impl SurfaceIntersection {
    /// `sh_normal` is the geometric normal flipped to face the incoming
    /// direction `ray_dir`.
    pub fn new(p: Vector3f, geo_normal: Vector3f, ray_dir: &Vector3f,
               t: Float, object_index: usize) -> Self {
        let sh_normal = if geo_normal.dot(ray_dir) < 0.0 { geo_normal } else { -geo_normal };
        Self { p, geo_normal, sh_normal, t, object_index }
    }

    pub fn t(&self) -> Float {
        self.t
    }

    pub fn p(&self) -> Vector3f {
        self.p
    }

    pub fn geo_normal(&self) -> Vector3f {
        self.geo_normal
    }

    pub fn sh_normal(&self) -> Vector3f {
        self.sh_normal
    }

    pub fn object_index(&self) -> usize {
        self.object_index
    }

    /// True when the ray arrives from the side the geometric normal points to.
    pub fn is_entering(&self) -> bool {
        self.geo_normal.dot(&self.sh_normal) > 0.0
    }
}
