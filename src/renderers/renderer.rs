// Copyright @yucwang 2021

use crate::core::film::Film;
use crate::core::scene::Scene;
use crate::core::sensor::Sensor;

pub trait Renderer {
    fn render(&self, scene: &Scene, sensor: &dyn Sensor) -> Film;
}
