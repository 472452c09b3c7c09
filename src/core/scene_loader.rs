// Copyright @yucwang 2026

use crate::core::bsdf::MaterialType;
use crate::core::scene::Scene;
use crate::math::constants::{Float, Vector3f};
use crate::math::spectrum::RGBSpectrum;
use crate::sensors::pinhole::PinholeCamera;
use crate::shapes::sphere::Sphere;

pub const CAMERA_ORIGIN: [Float; 3] = [50.0, 52.0, 295.6];
pub const CAMERA_FORWARD: [Float; 3] = [0.0, -0.042612, -1.0];

const WALL_RADIUS: Float = 1e5;

pub struct SceneLoadResult {
    pub scene: Scene,
    pub camera: PinholeCamera,
}

fn sphere(radius: Float, center: (Float, Float, Float), emission: RGBSpectrum,
          albedo: RGBSpectrum, material: MaterialType) -> Sphere {
    Sphere::new(radius, Vector3f::new(center.0, center.1, center.2), emission, albedo, material)
}

/// The classic box: four walls, floor and ceiling built from huge spheres,
/// a mirror ball, a glass ball and a spherical light cap poking through the
/// ceiling.
pub fn cornell_box_spheres() -> Vec<Sphere> {
    let black = RGBSpectrum::zeros();
    let grey = RGBSpectrum::repeat(0.75);
    let diffuse = MaterialType::Diffuse;

    vec![
        // Left
        sphere(WALL_RADIUS, (1e5 + 1.0, 40.8, 81.6), black, RGBSpectrum::new(0.75, 0.25, 0.25), diffuse),
        // Right
        sphere(WALL_RADIUS, (-1e5 + 99.0, 40.8, 81.6), black, RGBSpectrum::new(0.25, 0.25, 0.75), diffuse),
        // Back
        sphere(WALL_RADIUS, (50.0, 40.8, 1e5), black, grey, diffuse),
        // Front
        sphere(WALL_RADIUS, (50.0, 40.8, -1e5 + 170.0), black, black, diffuse),
        // Bottom
        sphere(WALL_RADIUS, (50.0, 1e5, 81.6), black, grey, diffuse),
        // Top
        sphere(WALL_RADIUS, (50.0, -1e5 + 81.6, 81.6), black, grey, diffuse),
        // Mirror
        sphere(16.5, (27.0, 16.5, 47.0), black, RGBSpectrum::repeat(0.999), MaterialType::Specular),
        // Glass
        sphere(16.5, (73.0, 16.5, 78.0), black, RGBSpectrum::repeat(0.999), MaterialType::Refract),
        // Light
        sphere(600.0, (50.0, 681.6 - 0.27, 81.6), RGBSpectrum::repeat(12.0), black, diffuse),
    ]
}

pub fn load_cornell_box(width: usize, height: usize) -> SceneLoadResult {
    let scene = Scene::new(cornell_box_spheres());
    let camera = PinholeCamera::new(Vector3f::from(CAMERA_ORIGIN), Vector3f::from(CAMERA_FORWARD),
                                    width, height);

    log::info!("Loaded Cornell box: {} spheres, {} emitter(s), camera {}x{}",
               scene.len(), scene.objects().iter().filter(|s| s.is_emitter()).count(),
               width, height);

    SceneLoadResult { scene, camera }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::sampler::CameraSample;
    use crate::core::sensor::Sensor;
    use crate::math::constants::Vector2f;

    #[test]
    fn test_cornell_box_contents() {
        let load_result = load_cornell_box(1024, 768);
        let scene = &load_result.scene;
        assert_eq!(scene.len(), 9);

        let emitters: Vec<&Sphere> = scene.objects().iter().filter(|s| s.is_emitter()).collect();
        assert_eq!(emitters.len(), 1);
        assert_eq!(emitters[0].radius, 600.0);
        assert_eq!(emitters[0].emission, RGBSpectrum::repeat(12.0));

        let mirrors = scene.objects().iter().filter(|s| s.material == MaterialType::Specular).count();
        let glass = scene.objects().iter().filter(|s| s.material == MaterialType::Refract).count();
        assert_eq!((mirrors, glass), (1, 1));
    }

    #[test]
    fn test_camera_sees_back_wall_at_center() {
        let load_result = load_cornell_box(1024, 768);
        let ray = load_result.camera.sample_ray(&CameraSample { p_film: Vector2f::new(512.0, 384.0) });
        let its = load_result.scene.ray_intersection(&ray).expect("center ray should hit");
        // Back wall is the third sphere.
        assert_eq!(its.object_index(), 2);
    }

    #[test]
    fn test_camera_starts_between_side_walls() {
        let load_result = load_cornell_box(64, 48);
        for &(x, y) in &[(0.0, 0.0), (64.0, 0.0), (0.0, 48.0), (64.0, 48.0), (32.0, 24.0)] {
            let ray = load_result.camera.sample_ray(&CameraSample { p_film: Vector2f::new(x, y) });
            let o = ray.origin();
            assert!(o.x > 1.0 && o.x < 99.0, "origin {:?}", o);
            assert!(o.z < 170.0, "origin {:?}", o);
        }
    }
}
