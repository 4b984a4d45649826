//! Command-line entry point for the `qcurve` tool.
//!
//! Provides subcommands to render grown curves as PNG maps, animate the
//! growth as a GIF, and report grid statistics.

use std::{
    fmt::Display,
    path::{Path, PathBuf},
    process,
};

use clap::{Parser, Subcommand};
use colornames::Color;
use image::Rgba;

/// CLI command implementations.
mod cmd;
/// Image rendering helpers.
mod render;

use crate::render::{Palette, StrokeOptions};

/// Upper bound on growth steps accepted by the CLI; an order-13 grid is
/// already 8192×8192 cells and larger requests are almost certainly typos.
const MAX_STEPS: u32 = 12;

/// Parse a named or hex color into an `Rgba` value (alpha defaults to 0xff).
///
/// Supports CSS color names via `colornames` and hex RRGGBB/RRGGBBAA with
/// or without a leading `#`.
fn parse_rgba_color(input: &str) -> Result<Rgba<u8>, String> {
    fn parse_hex_rgba(hex: &str) -> Option<Rgba<u8>> {
        let raw = hex.trim_start_matches('#');
        if !raw.as_bytes().iter().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let pair = |at: usize| u8::from_str_radix(&raw[at..at + 2], 16).ok();
        match raw.len() {
            6 => Some(Rgba([pair(0)?, pair(2)?, pair(4)?, 0xff])),
            8 => Some(Rgba([pair(0)?, pair(2)?, pair(4)?, pair(6)?])),
            _ => None,
        }
    }

    let trimmed = input.trim();
    if let Some(rgba) = parse_hex_rgba(trimmed) {
        return Ok(rgba);
    }

    let color: Color = trimmed.try_into().map_err(|_| {
        format!("invalid color '{input}': use a named color or hex RRGGBB/RRGGBBAA ('#' optional)")
    })?;
    let (red, green, blue) = color.rgb();
    Ok(Rgba([red, green, blue, 0xff]))
}

#[derive(Parser)]
#[command(name = "qcurve")]
#[command(version = env!("CARGO_PKG_VERSION"))]
/// Top-level CLI options and subcommands.
struct Cli {
    /// Sets the level of verbosity (`-v`, `-vv`, ...).
    #[arg(short, action = clap::ArgAction::Count, help = "Sets the level of verbosity")]
    v: u8,

    /// Command to execute.
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
/// Subcommands supported by the `qcurve` tool.
enum Commands {
    #[command(about = "Render a grown curve to a PNG image")]
    /// Render a grown curve to a PNG image.
    Map {
        #[arg(
            short = 'n',
            long = "steps",
            default_value_t = 5,
            value_parser = clap::value_parser!(u32).range(0..=MAX_STEPS as i64),
            help = "Growth steps applied to the seed"
        )]
        /// Number of growth steps from the 2×2 seed.
        steps: u32,

        #[arg(
            short = 't',
            long = "turns",
            default_value_t = 0,
            help = "Clockwise quarter-turns applied after growing"
        )]
        /// Clockwise quarter-turns applied to the finished grid.
        turns: u32,

        #[arg(
            short = 's',
            long = "size",
            default_value_t = 512,
            help = "Square image size in pixels"
        )]
        /// Image size in pixels (square output).
        size: u32,

        #[arg(
            short = 'w',
            long = "line-width",
            value_name = "PIXELS",
            default_value_t = 1,
            value_parser = clap::value_parser!(u32).range(1..),
            help = "Line width in pixels for the curve stroke"
        )]
        /// Stroke width for the rendered curve.
        line_width: u32,

        #[arg(
            long = "fg",
            visible_alias = "foreground",
            value_parser = parse_rgba_color,
            default_value = "#8080ff",
            value_name = "COLOR",
            help = "Foreground color (name or hex RRGGBB, '#' optional)"
        )]
        /// Stroke color for the curve.
        foreground: Rgba<u8>,

        #[arg(
            long = "bg",
            visible_alias = "background",
            value_parser = parse_rgba_color,
            default_value = "#ffffff",
            value_name = "COLOR",
            help = "Background color (name or hex RRGGBB, '#' optional)"
        )]
        /// Background color for the map.
        background: Rgba<u8>,

        #[arg(help = "Output PNG file path")]
        /// Output image path.
        output: PathBuf,
    },

    #[command(about = "Animate curve growth as a GIF, one frame per step")]
    /// Animate curve growth as a GIF, one frame per step.
    Animate {
        #[arg(
            short = 'n',
            long = "steps",
            default_value_t = 5,
            value_parser = clap::value_parser!(u32).range(1..=MAX_STEPS as i64),
            help = "Growth steps to animate"
        )]
        /// Number of growth steps to animate.
        steps: u32,

        #[arg(
            short = 's',
            long = "size",
            default_value_t = 512,
            help = "Square image size in pixels"
        )]
        /// Image size in pixels (square output).
        size: u32,

        #[arg(
            long = "fps",
            default_value_t = 2,
            value_parser = clap::value_parser!(u16).range(1..=120),
            help = "Frames per second for the animated GIF"
        )]
        /// Frames per second for the animation (1-120).
        fps: u16,

        #[arg(
            short = 'w',
            long = "line-width",
            value_name = "PIXELS",
            default_value_t = 1,
            value_parser = clap::value_parser!(u32).range(1..),
            help = "Line width in pixels for the curve stroke"
        )]
        /// Stroke width for the rendered curve.
        line_width: u32,

        #[arg(
            long = "fg",
            visible_alias = "foreground",
            value_parser = parse_rgba_color,
            default_value = "#8080ff",
            value_name = "COLOR",
            help = "Foreground color (name or hex RRGGBB, '#' optional)"
        )]
        /// Stroke color for the curve.
        foreground: Rgba<u8>,

        #[arg(
            long = "bg",
            visible_alias = "background",
            value_parser = parse_rgba_color,
            default_value = "#ffffff",
            value_name = "COLOR",
            help = "Background color (name or hex RRGGBB, '#' optional)"
        )]
        /// Background color for the frames.
        background: Rgba<u8>,

        #[arg(help = "Output GIF file path")]
        /// Output GIF path.
        output: PathBuf,
    },

    #[command(about = "Print shape and path statistics for a grown curve")]
    /// Print shape and path statistics for a grown curve.
    Info {
        #[arg(
            short = 'n',
            long = "steps",
            default_value_t = 5,
            value_parser = clap::value_parser!(u32).range(0..=MAX_STEPS as i64),
            help = "Growth steps applied to the seed"
        )]
        /// Number of growth steps from the 2×2 seed.
        steps: u32,

        #[arg(
            short = 't',
            long = "turns",
            default_value_t = 0,
            help = "Clockwise quarter-turns applied after growing"
        )]
        /// Clockwise quarter-turns applied to the finished grid.
        turns: u32,
    },
}

/// Print a success message or exit with an error.
fn report_ok<E: Display>(result: Result<(), E>, ok_msg: &str) {
    match result {
        Ok(()) => println!("{ok_msg}"),
        Err(e) => {
            eprintln!("{e}");
            process::exit(1);
        }
    }
}

/// Bundle the stroke options from parsed color/width arguments.
fn stroke_options(line_width: u32, foreground: Rgba<u8>, background: Rgba<u8>) -> StrokeOptions {
    StrokeOptions {
        line_width,
        palette: Palette {
            foreground,
            background,
        },
    }
}

/// Handle the `map` subcommand.
fn handle_map(
    steps: u32,
    turns: u32,
    size: u32,
    stroke: StrokeOptions,
    output: &Path,
    verbose: bool,
) -> anyhow::Result<()> {
    let grid = cmd::build_grid(steps, turns);
    if verbose {
        eprintln!("{}", cmd::summary(&grid));
    }
    let image = cmd::map(&grid, size, stroke)?;
    image.save(output)?;
    Ok(())
}

/// Handle the `animate` subcommand.
fn handle_animate(
    steps: u32,
    size: u32,
    fps: u16,
    stroke: StrokeOptions,
    output: &Path,
    progress: bool,
) -> anyhow::Result<()> {
    cmd::animate(cmd::AnimateOptions {
        size,
        steps,
        fps,
        stroke,
        output,
        progress,
    })
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Map {
            steps,
            turns,
            size,
            line_width,
            foreground,
            background,
            output,
        } => report_ok(
            handle_map(
                steps,
                turns,
                size,
                stroke_options(line_width, foreground, background),
                &output,
                cli.v > 0,
            ),
            "OK!",
        ),
        Commands::Animate {
            steps,
            size,
            fps,
            line_width,
            foreground,
            background,
            output,
        } => report_ok(
            handle_animate(
                steps,
                size,
                fps,
                stroke_options(line_width, foreground, background),
                &output,
                cli.v > 0,
            ),
            "Saved growth GIF!",
        ),
        Commands::Info { steps, turns } => {
            println!("{}", cmd::summary(&cmd::build_grid(steps, turns)));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::parse_rgba_color;

    #[test]
    fn parses_hex_colors() {
        assert_eq!(parse_rgba_color("#102030").unwrap().0, [16, 32, 48, 255]);
        assert_eq!(parse_rgba_color("10203040").unwrap().0, [16, 32, 48, 64]);
    }

    #[test]
    fn parses_named_colors() {
        assert_eq!(parse_rgba_color("white").unwrap().0, [255, 255, 255, 255]);
    }

    #[test]
    fn rejects_invalid_colors() {
        assert!(parse_rgba_color("#12345").is_err());
        assert!(parse_rgba_color("not-a-color").is_err());
    }
}
