use crate::color::color_to_rgb;
use crate::renderer::Screen;

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Serialize the screen as plain-text P3: a three-line header, then one line
/// per row of space-separated RGB triplets in left-to-right column order.
pub fn write_ppm<W: Write>(out: &mut W, screen: &Screen) -> io::Result<()> {
    writeln!(out, "P3")?;
    writeln!(out, "{} {}", screen.width(), screen.height())?;
    writeln!(out, "255")?;

    for y in 0..screen.height() {
        for x in 0..screen.width() {
            let [r, g, b] = color_to_rgb(screen.color_at(x, y));
            if x > 0 {
                write!(out, " ")?;
            }
            write!(out, "{} {} {}", r, g, b)?;
        }
        writeln!(out)?;
    }
    Ok(())
}

pub fn save_ppm(screen: &Screen, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path)
        .with_context(|| format!("could not open {} for writing", path.display()))?;
    let mut out = BufWriter::new(file);
    write_ppm(&mut out, screen)
        .and_then(|_| out.flush())
        .with_context(|| format!("failed writing {}", path.display()))?;
    Ok(())
}
