// Copyright @yucwang 2021

use crate::core::film::Film;
use crate::core::integrator::Integrator;
use crate::core::sampler::Sampler;
use crate::core::scene::Scene;
use crate::core::sensor::Sensor;
use crate::math::constants::{Float, Vector2f};
use crate::math::spectrum::{clamp01, RGBSpectrum};
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{mpsc, Arc};
use std::thread;

pub use super::renderer::Renderer;

/// Scanline-parallel renderer. Workers pull row indices from a shared
/// counter; every row gets its own sampler seeded from the row index, so
/// the image does not depend on the worker count.
pub struct SimpleRenderer {
    integrator: Box<dyn Integrator>,
    sampler: Box<dyn Sampler>,
    seed: u64,
    thread_count: usize,
}

impl SimpleRenderer {
    pub fn new(integrator: Box<dyn Integrator>, sampler: Box<dyn Sampler>, seed: u64) -> Self {
        let thread_count = thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1);
        Self { integrator, sampler, seed, thread_count }
    }

    pub fn with_threads(mut self, thread_count: usize) -> Self {
        self.thread_count = thread_count.max(1);
        self
    }

    pub fn thread_count(&self) -> usize {
        self.thread_count
    }

    pub fn samples_per_pixel(&self) -> u32 {
        self.sampler.samples_per_pixel()
    }

    pub fn sampler(&self) -> &dyn Sampler {
        self.sampler.as_ref()
    }

    pub fn row_seed(&self, y: usize) -> u64 {
        ((self.seed & 0xFFFF_FFFF) << 32) | (y as u64 & 0xFFFF_FFFF)
    }

    /// Unclamped average of one pixel's samples, drawn from `sampler`.
    pub fn estimate_pixel(&self, scene: &Scene, sensor: &dyn Sensor, sampler: &mut dyn Sampler,
                          x: usize, y: usize) -> RGBSpectrum {
        let pixel = Vector2f::new(x as Float, y as Float);
        let inv_spp = 1.0 / sampler.samples_per_pixel() as Float;
        let mut color = RGBSpectrum::zeros();

        sampler.start_pixel();
        loop {
            let camera_sample = sampler.get_camera_sample(pixel);
            let ray = sensor.sample_ray(&camera_sample);
            color += self.integrator.radiance(scene, &ray, 0, sampler) * inv_spp;
            if !sampler.start_next_sample() {
                break;
            }
        }

        color
    }

    fn render_row(&self, scene: &Scene, sensor: &dyn Sensor, y: usize) -> Vec<RGBSpectrum> {
        let mut sampler = self.sampler.clone_seeded(self.row_seed(y));
        (0..sensor.width())
            .map(|x| clamp01(&self.estimate_pixel(scene, sensor, sampler.as_mut(), x, y)))
            .collect()
    }
}

impl Renderer for SimpleRenderer {
    fn render(&self, scene: &Scene, sensor: &dyn Sensor) -> Film {
        let (width, height) = (sensor.width(), sensor.height());
        let mut film = Film::new(width, height);
        if width == 0 || height == 0 {
            return film;
        }

        let progress = ProgressBar::new(height as u64);
        progress.set_style(
            ProgressStyle::with_template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} rows")
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );

        let next_row = Arc::new(AtomicUsize::new(0));
        let (tx, rx) = mpsc::channel::<(usize, Vec<RGBSpectrum>)>();

        thread::scope(|scope| {
            for worker in 0..self.thread_count {
                let next_row = Arc::clone(&next_row);
                let tx = tx.clone();
                scope.spawn(move || {
                    log::debug!("worker {} started", worker);
                    let mut rows_done = 0usize;
                    loop {
                        let y = next_row.fetch_add(1, Ordering::Relaxed);
                        if y >= height {
                            break;
                        }
                        let row = self.render_row(scene, sensor, y);
                        rows_done += 1;
                        if tx.send((y, row)).is_err() {
                            break;
                        }
                    }
                    log::debug!("worker {} finished after {} rows", worker, rows_done);
                });
            }

            drop(tx);
            for (y, row) in rx.iter() {
                for (x, color) in row.iter().enumerate() {
                    film.add_color(x, y, color);
                }
                progress.inc(1);
            }
        });
        progress.finish_and_clear();

        film
    }
}
