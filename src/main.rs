//! Terminal raster demo (default binary).
//!
//! Animates a procedural radial field with a rotating, zooming checker sprite
//! on top, rendered through the console renderer to stdout.
//!
//! Usage: `term-raster [CONFIG.json]`. The config is a [`DemoConfig`]; every
//! field is optional. Set `RUST_LOG=debug` to see resize and probe logging on
//! stderr.

mod painter;

use std::fs;
use std::io::{self, Stdout, Write};
use std::path::Path;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::{cursor, QueueableCommand};
use log::info;
use serde::{Deserialize, Serialize};

use term_raster::render::{ConsoleGraphics, ConsoleRenderer, Renderer, ShapeFormat};
use term_raster::term::StyleConfig;

use painter::{checker_sprite, paint_radial};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub style: StyleConfig,
    /// Target frames per second.
    pub fps: u32,
    /// Stop after this many frames; run until interrupted when unset.
    pub frames: Option<u64>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            style: StyleConfig::default(),
            fps: 30,
            frames: None,
        }
    }
}

impl DemoConfig {
    fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        serde_json::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = match std::env::args_os().nth(1) {
        Some(path) => DemoConfig::load(Path::new(&path))?,
        None => DemoConfig::default(),
    };
    info!("demo config: {config:?}");

    let gfx = ConsoleGraphics::new();
    let mut renderer =
        ConsoleRenderer::from_config(io::stdout(), &config.style).context("invalid style")?;

    renderer.writer_mut().output_mut().queue(cursor::Hide)?;
    let result = run(&mut renderer, &gfx, &config);

    // Always try to restore the cursor.
    let out = renderer.writer_mut().output_mut();
    let _ = out.queue(cursor::Show);
    let _ = out.flush();
    result
}

fn run(
    renderer: &mut ConsoleRenderer<Stdout>,
    gfx: &ConsoleGraphics,
    config: &DemoConfig,
) -> Result<()> {
    let sprite = gfx.image_from_bitmap(checker_sprite(16, 4, 0xffff_ffff, 0xff20_2020));
    let frame_time = Duration::from_secs(1) / config.fps.max(1);
    let start = Instant::now();
    let mut frame: u64 = 0;

    loop {
        if config.frames.is_some_and(|n| frame >= n) {
            return Ok(());
        }
        let tick = Instant::now();
        let t_ms = start.elapsed().as_secs_f64() * 1000.0;

        renderer.fill(0x0000_0000);
        paint_radial(renderer.writer_mut().bitmap_mut(), t_ms);

        let (w, h) = renderer.resolution();
        let center = (w as f64 / 2.0, h as f64 / 2.0);
        let angle = t_ms * 0.0015;
        let zoom = 1.0 + 0.5 * (t_ms * 0.001).sin();
        renderer.draw_rect(
            (0.0, 0.0),
            (w as f64 - 1.0, h as f64 - 1.0),
            0xff00_88ff,
            ShapeFormat::OUTLINE,
        );
        renderer.draw_image(&sprite, center, angle, zoom);

        renderer.writer_mut().output_mut().queue(cursor::MoveTo(0, 0))?;
        renderer.update().context("writing frame")?;
        frame += 1;

        if let Some(rest) = frame_time.checked_sub(tick.elapsed()) {
            thread::sleep(rest);
        }
    }
}
