// Copyright @yucwang 2023

use crate::math::constants::Vector3f;

/// Orthonormal shading basis with `z` along the surface normal.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Frame {
    pub x: Vector3f,
    pub y: Vector3f,
    pub z: Vector3f
}

impl Default for Frame {
    fn default() -> Self {
        Frame {
            x: Vector3f::new(1.0, 0.0, 0.0),
            y: Vector3f::new(0.0, 1.0, 0.0),
            z: Vector3f::new(0.0, 0.0, 1.0)
        }
    }
}

impl Frame {
    /// The tangent is seeded from whichever of the x/y axes is least
    /// parallel to `n`, so the cross product never degenerates.
    pub fn from_normal(n: &Vector3f) -> Frame {
        debug_assert!((n.norm() - 1.0).abs() < 1e-6, "frame normal must be unit length");
        let seed = if n.x.abs() > 0.1 {
            Vector3f::new(0.0, 1.0, 0.0)
        } else {
            Vector3f::new(1.0, 0.0, 0.0)
        };
        let x = seed.cross(n).normalize();
        let y = n.cross(&x);

        Frame { x, y, z: *n }
    }

    pub fn to_local(&self, v: &Vector3f) -> Vector3f {
        Vector3f::new(v.dot(&self.x), v.dot(&self.y), v.dot(&self.z))
    }

    pub fn from_local(&self, v: &Vector3f) -> Vector3f {
        v.x * self.x + v.y * self.y + v.z * self.z
    }
}
