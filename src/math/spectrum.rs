// Copyright 2020 @TwoCookingMice

use super::constants::{Float, Vector3f};

/// Linear RGB triple. Shares the vector type; only `component_mul` is used
/// for tinting.
pub type RGBSpectrum = Vector3f;

pub fn is_black(rgb: &RGBSpectrum) -> bool {
    rgb.iter().all(|c| *c == 0.0)
}

pub fn max_component(rgb: &RGBSpectrum) -> Float {
    rgb.x.max(rgb.y).max(rgb.z)
}

pub fn clamp01(rgb: &RGBSpectrum) -> RGBSpectrum {
    rgb.map(|c| c.max(0.0).min(1.0))
}

// Rec. 709 weights.
pub fn luminance(rgb: &RGBSpectrum) -> Float {
    0.2126 * rgb.x + 0.7152 * rgb.y + 0.0722 * rgb.z
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spectrum_helpers() {
        let c = RGBSpectrum::new(0.75, 0.25, 0.25);
        assert_eq!(max_component(&c), 0.75);
        assert!(!is_black(&c));
        assert!(is_black(&RGBSpectrum::zeros()));

        let clamped = clamp01(&RGBSpectrum::new(-0.5, 0.5, 12.0));
        assert_eq!(clamped, RGBSpectrum::new(0.0, 0.5, 1.0));

        assert!((luminance(&RGBSpectrum::new(1.0, 1.0, 1.0)) - 1.0).abs() < 1e-12);
    }
}
