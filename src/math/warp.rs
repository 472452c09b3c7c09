// Copyright @yucwang 2023

use super::constants::{ INV_PI, PI, Float, Vector2f, Vector3f };

/// Cosine-weighted direction in the local frame (z up).
pub fn sample_cosine_hemisphere(u: &Vector2f) -> Vector3f {
    let phi: Float = 2.0 * PI * u.x;
    let r: Float = u.y.sqrt();
    let (sin_phi, cos_phi) = phi.sin_cos();

    Vector3f::new(r * cos_phi, r * sin_phi, (1.0 - u.y).sqrt())
}

pub fn sample_cosine_hemisphere_pdf(cos_theta: Float) -> Float {
    cos_theta * INV_PI
}

/// Warps `u` in [0, 1) to the triangle distribution on [-1, 1) through the
/// inverse CDF.
pub fn sample_tent(u: Float) -> Float {
    let u = 2.0 * u;
    if u < 1.0 {
        u.sqrt() - 1.0
    } else {
        1.0 - (2.0 - u).sqrt()
    }
}
