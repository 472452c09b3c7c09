/* Copyright 2020 @Yuchen Wong */

// Double precision is required: the box walls are spheres of radius 1e5.
pub type Float = f64;

pub type Vector2f = nalgebra::Vector2<Float>;
pub type Vector3f = nalgebra::Vector3<Float>;

pub const EPSILON: Float = 1e-4;
pub const PI: Float = std::f64::consts::PI;
pub const INV_PI: Float = std::f64::consts::FRAC_1_PI;
