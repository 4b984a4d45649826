//! Command handlers for the `qcurve` CLI.

use std::{fs::File, path::Path};

use anyhow::{Result, bail};
use gif::{Encoder, Frame, Repeat};
use quadcurve::{Grid, PathGraph, grow};

use crate::render::{StrokeOptions, fitting_pitch, render_grid_image};

/// Grow the seed `steps` times, then apply `turns` clockwise quarter-turns.
pub fn build_grid(steps: u32, turns: u32) -> Grid {
    let mut grid = Grid::seed();
    for _ in 0..steps {
        grid = grow(&grid);
    }
    for _ in 0..turns % 4 {
        grid = grid.rotate_clockwise();
    }
    grid
}

/// Render `grid` to a square PNG-ready image buffer.
pub fn map(grid: &Grid, size: u32, stroke: StrokeOptions) -> Result<image::RgbaImage> {
    if size < 32 {
        bail!("image size must be at least 32 pixels");
    }
    let pitch = fitting_pitch(size, grid.side(), stroke.line_width);
    Ok(render_grid_image(size, grid, pitch, stroke))
}

/// Parameters controlling growth-animation rendering.
pub struct AnimateOptions<'a> {
    /// Output image size in pixels.
    pub size: u32,
    /// Number of growth steps to animate (one frame per stage, seed
    /// included).
    pub steps: u32,
    /// Frames per second for the GIF.
    pub fps: u16,
    /// Stroke styling.
    pub stroke: StrokeOptions,
    /// Output GIF path.
    pub output: &'a Path,
    /// Whether to show a progress bar while frames are encoded.
    pub progress: bool,
}

/// Write an animated GIF of the curve growing from the seed.
///
/// The cell pitch starts at the final-order fit and the drawing scale is
/// halved after every growth step, mirroring how the interactive shell
/// shrinks its scale factor on each trigger; every stage therefore fits
/// the fixed canvas.
pub fn animate(options: AnimateOptions<'_>) -> Result<()> {
    let AnimateOptions {
        size,
        steps,
        fps,
        stroke,
        output,
        progress,
    } = options;

    if size < 32 {
        bail!("image size must be at least 32 pixels");
    }
    if size > u16::MAX as u32 {
        bail!("size {} exceeds GIF limits ({}).", size, u16::MAX);
    }

    let mut file = File::create(output)?;
    let mut encoder = Encoder::new(&mut file, size as u16, size as u16, &[])?;
    encoder.set_repeat(Repeat::Infinite)?;
    let frame_delay = frame_delay_from_fps(fps);

    let mut pb = progress.then(|| {
        let mut pb = pbr::ProgressBar::new(u64::from(steps) + 1);
        pb.format("╢▌▌░╟");
        pb
    });

    let mut grid = Grid::seed();
    // Seed pitch such that halving per step lands the final stage exactly
    // at the fitting pitch.
    let mut pitch = fitting_pitch(size, grid.side() << steps, stroke.line_width)
        * f64::from(1u32 << steps);

    for stage in 0..=steps {
        let frame_image = render_grid_image(size, &grid, pitch, stroke);
        let mut raw = frame_image.into_raw();
        let mut frame = Frame::from_rgba_speed(size as u16, size as u16, &mut raw, 10);
        frame.delay = frame_delay;
        encoder.write_frame(&frame)?;

        if let Some(pb) = pb.as_mut() {
            pb.inc();
        }
        if stage < steps {
            grid = grow(&grid);
            pitch /= 2.0;
        }
    }

    if let Some(pb) = pb.as_mut() {
        pb.finish();
    }
    Ok(())
}

/// Convert frames-per-second into a GIF frame delay (hundredths of a second).
fn frame_delay_from_fps(fps: u16) -> u16 {
    let fps = fps.max(1);
    ((100 + (fps / 2)) / fps).max(1)
}

/// Human-readable summary of a grid's shape and path structure.
pub fn summary(grid: &Grid) -> String {
    let graph = PathGraph::new(grid);
    let mut ends = graph.endpoints();
    ends.sort_unstable();
    let ends = ends
        .iter()
        .map(|(x, y)| format!("({x}, {y})"))
        .collect::<Vec<_>>()
        .join(" and ");
    format!(
        "order: {}\nside: {}\ncells: {}\ncontinuous path: {}\npath ends: {}",
        grid.order(),
        grid.side(),
        grid.len(),
        graph.is_single_path(),
        ends
    )
}
