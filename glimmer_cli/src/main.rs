use anyhow::{anyhow, Context};
use clap::Parser;
use glimmer_engine::core::image::Image;
use glimmer_engine::render::render_opts::RenderOpts;
use glimmer_engine::render::renderer::Renderer;
use glimmer_engine::scene::presets;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::path::PathBuf;
use tracing::info;

/// An offline Monte-Carlo path tracer
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Which built-in scene to render
    #[arg(short = 'n', long, default_value = "bouncing-spheres")]
    scene: String,

    /// Output image width, in pixels
    #[arg(short = 'W', long, default_value_t = 400)]
    width: usize,

    /// Output image height, in pixels
    #[arg(short = 'H', long, default_value_t = 225)]
    height: usize,

    /// Rays traced per pixel
    #[arg(short, long, default_value_t = 100)]
    samples: usize,

    /// Maximum bounces per ray
    #[arg(short, long, default_value_t = 50)]
    bounces: usize,

    /// RNG seed, for reproducible renders
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Where to write the rendered PNG
    #[arg(short, long, default_value = "render.png")]
    output: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let opts = RenderOpts::new(args.width, args.height, args.samples, args.bounces);

    let mut rng = SmallRng::seed_from_u64(args.seed);
    let preset = presets::load(&args.scene, opts.aspect_ratio(), &mut rng)
        .ok_or_else(|| {
            anyhow!(
                "unknown scene {:?} (available: {})",
                args.scene,
                presets::NAMES.join(", ")
            )
        })?
        .with_context(|| format!("failed to build scene {:?}", args.scene))?;

    let img = Renderer::new(opts).render(&preset.scene, &preset.camera, &mut rng);

    save_png(&img, &args.output).with_context(|| format!("failed to write {:?}", args.output))?;
    info!(target: "cli", path = ?args.output, "image written");
    Ok(())
}

/// Gamma-corrects (gamma 2.0) the linear image and writes it out as a PNG
fn save_png(img: &Image, path: &PathBuf) -> anyhow::Result<()> {
    let mut out = image::RgbImage::new(img.width() as u32, img.height() as u32);
    for (x, y, pixel) in out.enumerate_pixels_mut() {
        let col = img[(x as usize, y as usize)].sqrt().clamp(0., 1.);
        *pixel = image::Rgb([
            (col[0] * 255.999) as u8,
            (col[1] * 255.999) as u8,
            (col[2] * 255.999) as u8,
        ]);
    }
    out.save(path)?;
    Ok(())
}
