// Copyright @yucwang 2026

use crate::math::constants::{Float, Vector3f};

pub const ETA_VACUUM: Float = 1.0;
pub const ETA_GLASS: Float = 1.5;

/// Refracted direction plus the Fresnel split between the two branches.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Transmission {
    pub dir: Vector3f,
    pub reflectance: Float,
    pub transmittance: Float,
}

/// Smooth dielectric interface between an outer medium `eta_i` and the
/// sphere interior `eta_t`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DielectricBSDF {
    eta_i: Float,
    eta_t: Float,
}

impl Default for DielectricBSDF {
    fn default() -> Self {
        Self::new(ETA_VACUUM, ETA_GLASS)
    }
}

impl DielectricBSDF {
    pub fn new(eta_i: Float, eta_t: Float) -> Self {
        Self { eta_i, eta_t }
    }

    /// Reflectance at normal incidence.
    pub fn r0(&self) -> Float {
        let a = self.eta_t - self.eta_i;
        let b = self.eta_t + self.eta_i;
        a * a / (b * b)
    }

    /// Relative index of refraction for the side the ray arrives from.
    pub fn relative_eta(&self, entering: bool) -> Float {
        if entering { self.eta_i / self.eta_t } else { self.eta_t / self.eta_i }
    }

    /// Snell transmission through the interface, with Schlick's Fresnel
    /// approximation. `n` is the outward geometric normal and `sh_normal`
    /// the normal facing `d`. Returns `None` on total internal reflection.
    pub fn sample_transmission(&self, d: &Vector3f, n: &Vector3f,
                               sh_normal: &Vector3f) -> Option<Transmission> {
        let entering = n.dot(sh_normal) > 0.0;
        let eta = self.relative_eta(entering);

        let cos_theta_i = d.dot(sh_normal);
        let cos_theta_t2 = 1.0 - eta * eta * (1.0 - cos_theta_i * cos_theta_i);
        if cos_theta_t2 < 0.0 {
            return None;
        }

        let sign = if entering { 1.0 } else { -1.0 };
        let dir = (d * eta - n * (sign * (cos_theta_i * eta + cos_theta_t2.sqrt()))).normalize();

        // Schlick uses the cosine on the less dense side of the interface.
        let r0 = self.r0();
        let c = 1.0 - if entering { -cos_theta_i } else { dir.dot(n) };
        let reflectance = r0 + (1.0 - r0) * c.powi(5);

        Some(Transmission { dir, reflectance, transmittance: 1.0 - reflectance })
    }
}

/// Probability of following the reflected branch when only one branch is
/// traced. Biased toward reflection but never 0 or 1.
pub fn reflection_probability(reflectance: Float) -> Float {
    0.25 + 0.5 * reflectance
}
