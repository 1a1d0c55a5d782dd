use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use log::info;

use reflines::prelude::*;

/// Draw a rotated, anti-aliased reflection line and write the result as PNG.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// JSON configuration file. Flags below override its values.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Edge length of the (square) surface in pixels
    #[arg(long)]
    size: Option<u32>,

    /// Line width in pixels
    #[arg(long)]
    width: Option<f32>,

    /// Starting angle in degrees
    #[arg(long, allow_hyphen_values = true)]
    angle: Option<f32>,

    /// Degrees per dial step
    #[arg(long)]
    step: Option<f32>,

    /// Dial steps to turn before drawing (negative turns left)
    #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
    turns: i32,

    /// Cube faces to draw on, e.g. `positive-y,-x`
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    faces: Vec<CubeFace>,

    /// `thick-aa` or `bresenham`
    #[arg(long)]
    rasterizer: Option<RasterizerType>,

    /// Draw on a single texture instead of a cube map
    #[arg(long)]
    texture: bool,

    /// With --texture: draw the unrotated full-height center line instead
    #[arg(long, requires = "texture")]
    center_line: bool,

    /// Output directory
    #[arg(long, default_value = "out")]
    out: PathBuf,
}

impl Args {
    fn into_config(self) -> anyhow::Result<(Config, Self)> {
        let mut config = match &self.config {
            Some(path) => Config::load(path)
                .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
            None => Config::default(),
        };

        if let Some(size) = self.size {
            config.surface_size = size;
        }
        if let Some(width) = self.width {
            config.line_width = width;
        }
        if let Some(angle) = self.angle {
            config.initial_angle = angle;
        }
        if let Some(step) = self.step {
            config.rotation_step = step;
        }
        if !self.faces.is_empty() {
            config.faces = self.faces.clone();
        }
        if let Some(rasterizer) = self.rasterizer {
            config.rasterizer = rasterizer;
        }

        config.validate().context("Invalid configuration")?;
        Ok((config, self))
    }
}

fn main() -> anyhow::Result<()> {
    // Default filter is "info" if RUST_LOG is not set.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let (config, args) = Args::parse().into_config()?;

    let mut engine = Engine::from_config(&config);
    for _ in 0..args.turns.unsigned_abs() {
        if args.turns < 0 {
            engine.rotate_left();
        } else {
            engine.rotate_right();
        }
    }
    info!(
        "drawing {} line at {} degrees, width {}",
        engine.rasterizer(),
        engine.angle(),
        engine.line_width()
    );

    std::fs::create_dir_all(&args.out)
        .with_context(|| format!("Failed to create {}", args.out.display()))?;

    if args.texture {
        let size = config.surface_size;
        let mut texture = Texture::filled(size, size, config.background);
        if args.center_line {
            draw_center_line(&mut texture, (), engine.line_width())
                .context("Failed to draw center line")?;
        } else {
            engine
                .update(&mut texture, &[()])
                .context("Failed to draw line on texture")?;
        }
        texture
            .save(args.out.join("texture.png"))
            .context("Failed to save texture")?;
    } else {
        let mut cube = CubeMap::filled(config.surface_size, config.background);
        engine
            .update(&mut cube, &config.faces)
            .context("Failed to draw line on cube map")?;
        cube.save_faces(&args.out)
            .context("Failed to save cube map faces")?;
    }

    info!("done, output in {}", args.out.display());
    Ok(())
}
