//! Image rendering for directional curve grids.
//!
//! The renderer walks every cell's arm offsets and draws a line from the
//! cell's center toward each neighbor's center. The splice construction
//! declares each junction from exactly one side, so every segment is
//! painted once.

use image::{Rgba, RgbaImage};
use quadcurve::Grid;

/// Colors used when rendering a curve image.
#[derive(Clone, Copy, Debug)]
pub struct Palette {
    /// Color for the curve strokes.
    pub foreground: Rgba<u8>,
    /// Background fill color.
    pub background: Rgba<u8>,
}

/// Stroke styling options for rendering.
#[derive(Clone, Copy, Debug)]
pub struct StrokeOptions {
    /// Stroke width in pixels.
    pub line_width: u32,
    /// Colors for foreground/background.
    pub palette: Palette,
}

/// Pixel margin kept around the drawn grid.
const MARGIN: u32 = 10;

/// Inner drawing width of a square image, after margins.
fn inner_width(size: u32, line_width: u32) -> f64 {
    let margin = MARGIN.saturating_add(line_width / 2);
    f64::from(size.saturating_sub(margin.saturating_mul(2))).max(1.0)
}

/// Pixel center of cell `(x, y)` for a given pitch, flipping the grid's
/// y-up convention into image coordinates.
fn cell_center(x: u32, y: u32, side: u32, pitch: f64, size: u32, line_width: u32) -> (i64, i64) {
    let margin = f64::from(MARGIN.saturating_add(line_width / 2));
    let span = inner_width(size, line_width);
    // Center the occupied pitch*side square inside the inner area.
    let offset = margin + (span - pitch * f64::from(side)) / 2.0;
    let px = offset + (f64::from(x) + 0.5) * pitch;
    let py = offset + (f64::from(side - 1 - y) + 0.5) * pitch;
    (px.round() as i64, py.round() as i64)
}

/// Put a pixel if the coordinates are inside the image bounds.
fn put_pixel_safe(img: &mut RgbaImage, x: i64, y: i64, col: Rgba<u8>) {
    let w = i64::from(img.width());
    let h = i64::from(img.height());
    if x >= 0 && y >= 0 && x < w && y < h {
        img.put_pixel(x as u32, y as u32, col);
    }
}

/// Stamp a filled square centered on `(cx, cy)` with a given side length.
fn stamp_square(img: &mut RgbaImage, cx: i64, cy: i64, size: u32, col: Rgba<u8>) {
    let radius = (i64::from(size) - 1) / 2;
    let extra = i64::from(size.is_multiple_of(2));
    for y in (cy - radius)..=(cy + radius + extra) {
        for x in (cx - radius)..=(cx + radius + extra) {
            put_pixel_safe(img, x, y, col);
        }
    }
}

/// Draw a 4-connected Bresenham line into `img` with color `col`.
fn draw_line(
    img: &mut RgbaImage,
    mut x0: i64,
    mut y0: i64,
    x1: i64,
    y1: i64,
    col: Rgba<u8>,
    line_width: u32,
) {
    let dx = (x1 - x0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let dy = -(y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;
    loop {
        stamp_square(img, x0, y0, line_width, col);
        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
}

/// Draw `grid` onto an existing image at the given cell pitch without
/// clearing it first.
pub fn draw_grid(img: &mut RgbaImage, grid: &Grid, pitch: f64, stroke: StrokeOptions) {
    let size = img.width();
    let side = grid.side();
    let width = stroke.line_width.max(1);
    for ((x, y), dir) in grid.iter() {
        let (x0, y0) = cell_center(x, y, side, pitch, size, width);
        for &(ax, ay) in dir.arm_offsets() {
            // Neighbor center computed from the offset; arms that would
            // leave the image are clipped pixel by pixel.
            let x1 = x0 + (ax as f64 * pitch).round() as i64;
            let y1 = y0 - (ay as f64 * pitch).round() as i64;
            draw_line(img, x0, y0, x1, y1, stroke.palette.foreground, width);
        }
    }
}

/// Render `grid` into a fresh square `size`×`size` image at the given cell
/// pitch.
pub fn render_grid_image(size: u32, grid: &Grid, pitch: f64, stroke: StrokeOptions) -> RgbaImage {
    let mut imgbuf: RgbaImage =
        image::ImageBuffer::from_pixel(size, size, stroke.palette.background);
    draw_grid(&mut imgbuf, grid, pitch, stroke);
    imgbuf
}

/// The pitch that fits `side` cells into a square image of `size` pixels.
pub fn fitting_pitch(size: u32, side: u32, line_width: u32) -> f64 {
    inner_width(size, line_width) / f64::from(side.max(1))
}

#[cfg(test)]
mod tests {
    use quadcurve::{Grid, grow};

    use super::*;

    fn test_stroke() -> StrokeOptions {
        StrokeOptions {
            line_width: 1,
            palette: Palette {
                foreground: Rgba([1, 2, 3, 255]),
                background: Rgba([0, 0, 0, 0]),
            },
        }
    }

    #[test]
    fn image_has_requested_dimensions() {
        let grid = grow(&Grid::seed());
        let pitch = fitting_pitch(64, grid.side(), 1);
        let img = render_grid_image(64, &grid, pitch, test_stroke());
        assert_eq!(img.width(), 64);
        assert_eq!(img.height(), 64);
    }

    #[test]
    fn curve_pixels_are_painted() {
        let stroke = test_stroke();
        let grid = grow(&Grid::seed());
        let pitch = fitting_pitch(64, grid.side(), 1);
        let img = render_grid_image(64, &grid, pitch, stroke);
        let painted = img
            .pixels()
            .filter(|p| **p == stroke.palette.foreground)
            .count();
        assert!(painted > 0, "no foreground pixels drawn");
    }

    #[test]
    fn seed_draws_its_three_segments() {
        // The seed's path spans the full 2x2 block: both columns and the
        // top row get stroked, the bottom row between the ends stays clear.
        let stroke = test_stroke();
        let grid = Grid::seed();
        let pitch = fitting_pitch(64, grid.side(), 1);
        let img = render_grid_image(64, &grid, pitch, stroke);

        let (lx, ty) = cell_center(0, 1, 2, pitch, 64, 1);
        let (rx, by) = cell_center(1, 0, 2, pitch, 64, 1);
        let mid = |a: i64, b: i64| ((a + b) / 2) as u32;

        // Top edge midpoint is on the path.
        assert_eq!(
            img.get_pixel(mid(lx, rx), ty as u32),
            &stroke.palette.foreground
        );
        // Bottom edge midpoint is not.
        assert_eq!(
            img.get_pixel(mid(lx, rx), by as u32),
            &stroke.palette.background
        );
    }
}
