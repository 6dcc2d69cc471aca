//! Renders a procedural sky cubemap through `cubemap-render` and writes the
//! six faces as PNG files.
//!
//! Configuration is loaded from `config.ron` and can be overridden via CLI flags.
//! Run with `cargo run -p cubemap-demo -- --resolution 512 --output sky`.

mod error;
mod export;
mod sky;

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;
use cubemap_config::{CliArgs, Config, default_config_dir};
use cubemap_render::{CubemapFaceSet, CubemapRenderer};
use image::RgbaImage;
use tracing::{error, info};

use crate::error::DemoError;
use crate::sky::{SkyRenderer, SkyShader};

fn render_sky(config: &Config) -> Result<CubemapFaceSet<RgbaImage>, DemoError> {
    config.validate()?;

    let render = &config.render;
    let mut renderer = CubemapRenderer::new(render.resolution)?;
    let start = Instant::now();

    let set = if render.parallel {
        let shader = SkyShader::new(&config.sky, render.near, render.far)?;
        renderer.render_all_parallel(&shader, |params, shader| {
            Ok::<_, std::convert::Infallible>(shader.shade_face(params))
        })?
    } else {
        let mut sky = SkyRenderer::new(config.sky.clone(), render.near, render.far);
        renderer.render(&mut sky)?
    };

    info!(
        elapsed_ms = start.elapsed().as_millis() as u64,
        parallel = render.parallel,
        "Rendered six cubemap faces"
    );
    Ok(set)
}

fn run(config: &Config) -> Result<Vec<PathBuf>, DemoError> {
    let _span = tracing::info_span!("cubemap", resolution = config.render.resolution).entered();
    let set = render_sky(config)?;
    export::write_faces(&set, &config.output)
}

fn main() -> ExitCode {
    let args = CliArgs::parse();

    // Resolve config directory
    let config_dir = args
        .config
        .clone()
        .or_else(default_config_dir)
        .unwrap_or_else(|| PathBuf::from("."));

    // Load or create config, then apply CLI overrides
    let mut config = Config::load_or_create(&config_dir).unwrap_or_else(|e| {
        eprintln!("Failed to load config: {e}, using defaults");
        Config::default()
    });
    config.apply_cli_overrides(&args);

    let log_dir = config_dir.join("logs");
    cubemap_log::init_logging(Some(&log_dir), cfg!(debug_assertions), Some(&config));

    match run(&config) {
        Ok(paths) => {
            info!(
                files = paths.len(),
                directory = %config.output.directory.display(),
                "Cubemap written"
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Cubemap render failed: {e}");
            ExitCode::FAILURE
        }
    }
}
