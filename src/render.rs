//! Primitive rendering functions.
//!
//! The native drawing calls graph strategies issue against a [`Surface`].

use crate::color::Rgba;
use crate::surface::Surface;

/// Draw a line using Bresenham's algorithm.
///
/// # Arguments
///
/// * `surface` - Target surface
/// * `x0`, `y0` - Start coordinates
/// * `x1`, `y1` - End coordinates
/// * `color` - Line color
pub fn draw_line(surface: &mut Surface, x0: i32, y0: i32, x1: i32, y1: i32, color: Rgba) {
    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    let mut x = x0;
    let mut y = y0;

    loop {
        if x >= 0 && y >= 0 {
            surface.set_pixel(x as u32, y as u32, color);
        }

        if x == x1 && y == y1 {
            break;
        }

        let e2 = 2 * err;
        if e2 >= dy {
            if x == x1 {
                break;
            }
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            if y == y1 {
                break;
            }
            err += dx;
            y += sy;
        }
    }
}

/// Draw a filled rectangle.
pub fn draw_rect(surface: &mut Surface, x: i32, y: i32, width: u32, height: u32, color: Rgba) {
    let x = x.max(0) as u32;
    let y = y.max(0) as u32;
    surface.fill_rect(x, y, width, height, color);
}
