use crate::color::Color;
use crate::vec3::Vec3;

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Instant;

pub const EPSILON: f64 = 1e-12;

// Every cell is overwritten before serialization, so the initial fill is
// only visible if a render pass is skipped. Dark blue makes that obvious.
const PLACEHOLDER: Color = Color::new(0.0, 0.0, 100.0 / 255.0);

/// Render parameters. The observer sits at `observer` looking down +z at an
/// image plane `depth` world units away.
#[derive(Clone, Copy, Debug)]
pub struct RenderConfig {
    pub width: usize,
    pub height: usize,
    pub observer: Vec3,
    pub depth: f64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 250,
            height: 250,
            observer: Vec3::new(0.0, 0.0, 0.0),
            depth: 100.0,
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Pixel {
    pub x: usize,
    pub y: usize,
    pub color: Color,
}

/// Row-major pixel grid, heap backed, owned by the render pass.
pub struct Screen {
    width: usize,
    height: usize,
    pixels: Vec<Pixel>,
}

impl Screen {
    pub fn new(width: usize, height: usize) -> Self {
        let pixels = (0..width * height)
            .map(|i| Pixel {
                x: i % width,
                y: i / width,
                color: PLACEHOLDER,
            })
            .collect();
        Self {
            width,
            height,
            pixels,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    pub fn color_at(&self, x: usize, y: usize) -> Color {
        self.pixels[self.width * y + x].color
    }

    pub fn set_color(&mut self, x: usize, y: usize, color: Color) {
        self.pixels[self.width * y + x].color = color;
    }
}

/// Direction from the observer to the pixel at grid coordinate (x, y),
/// remapped from [-1,1] unit-vector components into [0,1] color factors.
fn direction_color(config: &RenderConfig, x: usize, y: usize) -> Color {
    let pixel_position = Vec3::new(
        x as f64 - config.width as f64 / 2.0,
        y as f64 - config.height as f64 / 2.0,
        config.depth,
    );
    let direction = (pixel_position - config.observer).normalized();
    (direction + Vec3::new(1.0, 1.0, 1.0)) / 2.0
}

pub fn render_direction_field(config: &RenderConfig) -> Screen {
    println!(
        "Rendering direction field ({}x{})...",
        config.width, config.height
    );
    let pb = ProgressBar::new(config.height as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos:>7}/{len:7} Lines {msg}")
            .unwrap()
            .progress_chars("=>-"),
    );

    let start_time = Instant::now();
    let mut screen = Screen::new(config.width, config.height);

    for y in 0..config.height {
        for x in 0..config.width {
            screen.set_color(x, y, direction_color(config, x, y));
        }
        pb.inc(1);
    }

    pb.finish_with_message("Render complete!");
    println!("Rendered in {:.3} seconds", start_time.elapsed().as_secs_f64());

    screen
}
