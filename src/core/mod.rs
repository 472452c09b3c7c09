// Copyright @yucwang 2021

pub mod bsdf;
pub mod film;
pub mod integrator;
pub mod interaction;
pub mod rng;
pub mod sampler;
pub mod sensor;
pub mod scene;
pub mod scene_loader;
pub mod settings;
