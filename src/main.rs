mod color;
mod ppm;
mod renderer;
mod vec3;

use anyhow::Result;

use crate::ppm::save_ppm;
use crate::renderer::{render_direction_field, RenderConfig};

const OUTPUT_PATH: &str = "output.ppm";

fn main() -> Result<()> {
    let config = RenderConfig::default();
    let screen = render_direction_field(&config);

    save_ppm(&screen, OUTPUT_PATH)?;
    println!("Image saved as '{}'", OUTPUT_PATH);

    Ok(())
}
