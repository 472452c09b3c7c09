// Copyright @yucwang 2026

use crate::core::sampler::CameraSample;
use crate::core::sensor::Sensor;
use crate::math::constants::{Float, Vector3f};
use crate::math::ray::Ray3f;

/// Film-plane half extent factor shared by both image axes.
pub const FOV_SCALE: Float = 0.5135;
/// Primary rays start this far along the unnormalized view direction,
/// which places them inside the box.
pub const NEAR_OFFSET: Float = 140.0;

/// Pinhole camera with a fixed, precomputed film basis.
///
/// `cx` spans the image width (scaled by the aspect ratio) and `cy` the
/// height. Film coordinates are in pixels with row 0 at the top.
pub struct PinholeCamera {
    origin: Vector3f,
    forward: Vector3f,
    cx: Vector3f,
    cy: Vector3f,
    width: usize,
    height: usize,
}

impl PinholeCamera {
    pub fn new(origin: Vector3f, forward: Vector3f, width: usize, height: usize) -> Self {
        let forward = forward.normalize();
        let cx = Vector3f::new(width as Float * FOV_SCALE / height as Float, 0.0, 0.0);
        let cy = cx.cross(&forward).normalize() * FOV_SCALE;

        Self { origin, forward, cx, cy, width, height }
    }

    pub fn origin(&self) -> Vector3f {
        self.origin
    }

    pub fn forward(&self) -> Vector3f {
        self.forward
    }
}

impl Sensor for PinholeCamera {
    fn sample_ray(&self, sample: &CameraSample) -> Ray3f {
        let u = sample.p_film.x / self.width as Float - 0.5;
        let v = 0.5 - sample.p_film.y / self.height as Float;
        let d = self.cx * u + self.cy * v + self.forward;

        Ray3f::new(self.origin + d * NEAR_OFFSET, d)
    }

    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn describe(&self) -> String {
        format!("PinholeCamera {}x{}\n  origin: {:?}\n  forward: {:?}\n  cx: {:?}\n  cy: {:?}",
                self.width, self.height,
                self.origin.as_slice(), self.forward.as_slice(),
                self.cx.as_slice(), self.cy.as_slice())
    }
}
