// Copyright @yucwang 2023

use crate::math::constants::Vector3f;

/// Closed set of surface behaviors. Dispatch is a `match` in the
/// integrator; there is no per-material trait object.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MaterialType {
    Diffuse,
    Specular,
    Refract,
}

impl MaterialType {
    pub fn name(&self) -> &'static str {
        match self {
            MaterialType::Diffuse => "diffuse",
            MaterialType::Specular => "specular",
            MaterialType::Refract => "refract",
        }
    }
}

/// Mirror `d` about the plane with normal `n`. The sign of `n` does not
/// matter.
pub fn reflect(d: &Vector3f, n: &Vector3f) -> Vector3f {
    d - n * 2.0 * n.dot(d)
}
