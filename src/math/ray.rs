// Copyright 2020 @TwoCookingMice

use super::constants::{Float, Vector3f};

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray3f {
    origin: Vector3f,
    dir: Vector3f,
}

impl Ray3f {
    /// Builds a ray and normalizes `d`. A zero-length direction is a
    /// contract violation.
    pub fn new(o: Vector3f, d: Vector3f) -> Self {
        debug_assert!(d.norm_squared() > 0.0, "ray direction must be non-zero");
        Self { origin: o, dir: d.normalize() }
    }

    pub fn origin(&self) -> Vector3f {
        self.origin
    }

    pub fn dir(&self) -> Vector3f {
        self.dir
    }

    pub fn at(&self, t: Float) -> Vector3f {
        self.origin + self.dir * t
    }
}

/* Tests for Ray */
