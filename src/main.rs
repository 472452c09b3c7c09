// Copyright 2020 TwoCookingMice

use smallpt::core::scene_loader::load_cornell_box;
use smallpt::core::sensor::Sensor;
use smallpt::core::settings::RenderSettings;
use smallpt::integrators::path::PathIntegrator;
use smallpt::io::bmp_utils;
use smallpt::renderers::simple::{Renderer, SimpleRenderer};

use console::style;
use std::env;
use std::time::Instant;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = RenderSettings::from_args(env::args().skip(1));
    log::info!("Rendering {}x{} with {} sampler, {} samples per pixel, seed {}.",
               settings.width, settings.height, settings.sampler.name(),
               settings.total_samples, settings.seed);

    let load_result = load_cornell_box(settings.width, settings.height);
    log::debug!("{}", load_result.camera.describe());

    let integrator = Box::new(PathIntegrator::default());
    let renderer = SimpleRenderer::new(integrator, settings.build_sampler(), settings.seed);
    log::info!("Using {} worker threads, {} samples per pixel after stratification.",
               renderer.thread_count(), renderer.samples_per_pixel());

    let start = Instant::now();
    let film = renderer.render(&load_result.scene, &load_result.camera);
    let elapsed = start.elapsed();
    log::info!("Rendering finished in {:.2?}.", elapsed);

    if let Err(e) = bmp_utils::write_bmp_to_file(&film, &settings.output) {
        log::error!("Failed to write {}: {}", settings.output, e);
        std::process::exit(1);
    }

    println!("{} {} ({}x{}, {} spp, mean luminance {:.4}) in {:.2?}",
             style("Wrote").green().bold(), style(&settings.output).cyan(),
             film.width(), film.height(), renderer.samples_per_pixel(),
             film.mean_luminance(), elapsed);
}
