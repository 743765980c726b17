//! cornerfill: replace white corner backgrounds in an image file.
//!
//! Flood fills the bright background reachable from each of the four
//! image corners with a solid color, then writes the result back over
//! the input file. Handy for turning a white-background icon into one
//! on a dark backdrop.
//!
//! # Usage
//!
//! ```text
//! cargo run --release --bin cornerfill -- [OPTIONS] [IMAGE_PATH]
//! ```

#![allow(clippy::print_stdout)]

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use cornerfill_pipeline::{FillConfig, FillReport, SeedOutcome, color};

/// Replace the white background touching any image corner with a
/// solid fill color.
///
/// The image is overwritten in place unless `--output` is given.
#[derive(Parser)]
#[command(name = "cornerfill", version)]
struct Cli {
    /// Path to the image (PNG, BMP, WebP).
    #[arg(default_value = "assets/images/icon.png")]
    image_path: PathBuf,

    /// Write the result here instead of overwriting the input.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Fill color as "#RRGGBB".
    #[arg(long, value_name = "HEX", default_value_t = color::to_hex(FillConfig::DEFAULT_FILL_COLOR))]
    fill_color: String,

    /// Per-channel brightness threshold for background pixels.
    #[arg(long, default_value_t = FillConfig::DEFAULT_BRIGHTNESS_THRESHOLD)]
    threshold: u8,

    /// Full fill config as a JSON string.
    ///
    /// When provided, `--fill-color` and `--threshold` are ignored.
    #[arg(long)]
    config_json: Option<String>,

    /// Print the per-corner report as JSON on stdout.
    #[arg(long)]
    json: bool,

    /// Enable debug logging.
    #[arg(long)]
    debug: bool,
}

/// Build a [`FillConfig`] from CLI arguments.
///
/// If `--config-json` is provided it is parsed directly; otherwise the
/// config is assembled from the individual flags.
fn config_from_cli(cli: &Cli) -> Result<FillConfig, String> {
    if let Some(ref json) = cli.config_json {
        return serde_json::from_str(json).map_err(|e| format!("Error parsing --config-json: {e}"));
    }

    let fill_color =
        color::parse_hex_color(&cli.fill_color).map_err(|e| format!("--fill-color: {e}"))?;

    Ok(FillConfig {
        fill_color,
        brightness_threshold: cli.threshold,
    })
}

fn init_logging(debug: bool) {
    let level = if debug {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    // Logs go to stderr so `--json` output on stdout stays parseable.
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Log what each corner fill did.
fn log_report(report: &FillReport) {
    for entry in &report.corners {
        let seed = entry.seed;
        match entry.outcome {
            SeedOutcome::Skipped { color } => {
                tracing::info!("Corner {seed} is dark ({color:?}), skipping.");
            }
            SeedOutcome::Filled { original, pixels } => {
                tracing::info!("Filling from {seed} (color: {original:?})...");
                tracing::debug!(corner = ?entry.corner, pixels, "fill complete");
            }
            SeedOutcome::OutOfBounds => {
                tracing::warn!("Corner {seed} is outside the image, skipping.");
            }
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.debug);

    let config = match config_from_cli(&cli) {
        Ok(c) => c,
        Err(msg) => {
            tracing::error!("{msg}");
            return ExitCode::FAILURE;
        }
    };

    let image_bytes = match std::fs::read(&cli.image_path) {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::error!("Error reading {}: {e}", cli.image_path.display());
            return ExitCode::FAILURE;
        }
    };
    tracing::debug!(
        bytes = image_bytes.len(),
        ?config,
        "Loaded {}",
        cli.image_path.display()
    );

    let result = match cornerfill_pipeline::process(&image_bytes, &config) {
        Ok(result) => result,
        Err(e) => {
            tracing::error!("Error processing {}: {e}", cli.image_path.display());
            return ExitCode::FAILURE;
        }
    };
    log_report(&result.report);

    let output = cli.output.as_ref().unwrap_or(&cli.image_path);
    if let Err(e) = std::fs::write(output, &result.bytes) {
        tracing::error!("Error writing {}: {e}", output.display());
        return ExitCode::FAILURE;
    }

    if cli.json {
        match serde_json::to_string_pretty(&result.report) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                tracing::error!("Error serializing report: {e}");
                return ExitCode::FAILURE;
            }
        }
    }

    tracing::info!(
        filled = result.report.filled_pixels(),
        format = ?result.format,
        "Processed {}.",
        output.display()
    );
    ExitCode::SUCCESS
}
