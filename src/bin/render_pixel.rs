use smallpt::core::scene_loader::load_cornell_box;
use smallpt::core::settings::RenderSettings;
use smallpt::integrators::path::PathIntegrator;
use smallpt::renderers::simple::SimpleRenderer;
use std::env;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 3 {
        eprintln!("Usage: {} <x> <y> [TOTAL_SAMPLES] [--seed N] [--sampler stratified|random]", args[0]);
        std::process::exit(1);
    }

    let (x, y) = match (args[1].parse::<usize>(), args[2].parse::<usize>()) {
        (Ok(x), Ok(y)) => (x, y),
        _ => {
            eprintln!("Invalid pixel coordinates: ({}, {})", args[1], args[2]);
            std::process::exit(1);
        }
    };

    let settings = RenderSettings::from_args(&args[3..]);
    if x >= settings.width || y >= settings.height {
        eprintln!("Pixel out of bounds: ({}, {}) for size {}x{}", x, y, settings.width, settings.height);
        std::process::exit(2);
    }

    let load_result = load_cornell_box(settings.width, settings.height);
    let renderer = SimpleRenderer::new(Box::new(PathIntegrator::default()), settings.build_sampler(), settings.seed);

    // Same sampler stream the renderer gives this row; only pixel 0 matches
    // the full render exactly, since earlier pixels of the row are skipped.
    let mut sampler = renderer.sampler().clone_seeded(renderer.row_seed(y));
    let avg = renderer.estimate_pixel(&load_result.scene, &load_result.camera, sampler.as_mut(), x, y);

    println!(
        "pixel ({}, {}) spp={} sampler={} -> R {:.6}, G {:.6}, B {:.6}",
        x, y, renderer.samples_per_pixel(), settings.sampler.name(), avg.x, avg.y, avg.z
    );
}
