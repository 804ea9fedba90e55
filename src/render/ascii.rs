//! ASCII map preview

use std::io::{self, Write};

use crossterm::queue;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};

use crate::world::{World, HEIGHT, WIDTH};

/// Write the map as `HEIGHT` lines of `WIDTH` glyphs
pub fn write_ascii(out: &mut impl Write, world: &World, color: bool) -> io::Result<()> {
    for y in 0..HEIGHT {
        let mut last = None;
        for x in 0..WIDTH {
            let tile = world.get(x, y);
            if color {
                let rgb = tile.fg_color();
                // Only emit an escape when the colour changes
                if last != Some(rgb) {
                    let (r, g, b) = rgb;
                    queue!(out, SetForegroundColor(Color::Rgb { r, g, b }))?;
                    last = Some(rgb);
                }
            }
            queue!(out, Print(tile.glyph()))?;
        }
        if color {
            queue!(out, ResetColor)?;
        }
        queue!(out, Print('\n'))?;
    }
    out.flush()
}

/// Uncoloured preview as a string
pub fn render_ascii(world: &World) -> String {
    let mut rows = String::with_capacity(((WIDTH + 1) * HEIGHT) as usize);
    for y in 0..HEIGHT {
        rows.extend((0..WIDTH).map(|x| world.get(x, y).glyph()));
        rows.push('\n');
    }
    rows
}
