use std::{fs, path::PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use ring_slider::{
    Handle, PointerGestures, RingSlider, RingSliderArgs, geometry::RingGeometry, glam::DVec2,
};
use tracing::{debug, info};

mod svg;

#[derive(Parser)]
#[command(name = "example")]
#[command(version, about = "Drive a ring slider with scripted drags and render it", long_about = None)]
struct Cli {
    /// Value shown at the end of the usable arc
    #[arg(long, default_value_t = 800.0)]
    max_value: f64,
    /// Outer radius of the ring
    #[arg(long, default_value_t = 200.0)]
    radius: f64,
    /// Stroke thickness of the ring
    #[arg(long, default_value_t = 40.0)]
    stroke: f64,
    /// Width of the closed gap, in percent of the circle
    #[arg(long, default_value_t = 10.0)]
    cut_off: f64,
    /// Start with smoothing off
    #[arg(long)]
    staggered: bool,
    /// Drag sample: `start:X,Y` / `end:X,Y` for a pointer position, or
    /// `start@P` / `end@P` to aim at raw percentage P. Runs a demo sweep
    /// when omitted.
    #[arg(long = "drag", value_parser = parse_drag)]
    drags: Vec<DragSample>,
    /// Flip smoothing before the sample with this index
    #[arg(long)]
    toggle_smooth_after: Option<usize>,
    /// Write the final frame as SVG
    #[arg(long)]
    svg: Option<PathBuf>,
    /// Print the final view as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Aim {
    Pointer(DVec2),
    Percentage(f64),
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct DragSample {
    handle: Handle,
    aim: Aim,
}

impl DragSample {
    fn pointer(&self, geometry: &RingGeometry) -> DVec2 {
        match self.aim {
            Aim::Pointer(pointer) => pointer,
            Aim::Percentage(raw) => geometry.pointer_for_percentage(raw),
        }
    }
}

fn parse_handle(name: &str) -> Result<Handle, String> {
    match name.trim() {
        "start" | "0" => Ok(Handle::Start),
        "end" | "1" => Ok(Handle::End),
        other => Err(format!("unknown handle `{other}`, expected `start` or `end`")),
    }
}

fn parse_number(text: &str) -> Result<f64, String> {
    text.trim()
        .parse()
        .map_err(|e| format!("invalid number `{text}`: {e}"))
}

fn parse_drag(text: &str) -> Result<DragSample, String> {
    if let Some((handle, raw)) = text.split_once('@') {
        return Ok(DragSample {
            handle: parse_handle(handle)?,
            aim: Aim::Percentage(parse_number(raw)?),
        });
    }
    let (handle, position) = text
        .split_once(':')
        .ok_or_else(|| format!("expected `handle:X,Y` or `handle@P`, got `{text}`"))?;
    let (x, y) = position
        .split_once(',')
        .ok_or_else(|| format!("expected `X,Y`, got `{position}`"))?;
    Ok(DragSample {
        handle: parse_handle(handle)?,
        aim: Aim::Pointer(DVec2::new(parse_number(x)?, parse_number(y)?)),
    })
}

/// Start handle walks forward, then the end handle walks back past the
/// start of the gap. Later samples of each walk get rejected.
fn demo_sweep() -> Vec<DragSample> {
    let start = (0..12).map(|step| DragSample {
        handle: Handle::Start,
        aim: Aim::Percentage(40.5 + step as f64 * 2.0),
    });
    let end = (0..14).map(|step| DragSample {
        handle: Handle::End,
        aim: Aim::Percentage((99.5 - step as f64 * 3.0).rem_euclid(100.0)),
    });
    start.chain(end).collect()
}

/// Filter used when `RUST_LOG` is unset or invalid.
const DEFAULT_FILTER: &str = "error,ring_slider=info,example=info";

fn init_tracing() {
    let filter = match tracing_subscriber::EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => match tracing_subscriber::EnvFilter::try_new(DEFAULT_FILTER) {
            Ok(filter) => filter,
            Err(_) => tracing_subscriber::EnvFilter::new("error"),
        },
    };

    let _ = tracing_subscriber::fmt()
        .pretty()
        .with_env_filter(filter)
        .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
        .try_init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let args = RingSliderArgs::default()
        .radius(cli.radius)
        .stroke(cli.stroke)
        .cut_off(cli.cut_off)
        .max_value(cli.max_value)
        .smooth(!cli.staggered);
    let slider = RingSlider::new(&args).context("invalid ring slider configuration")?;

    let samples = if cli.drags.is_empty() {
        demo_sweep()
    } else {
        cli.drags.clone()
    };

    let gestures = PointerGestures::new();
    let mounted = slider.mount(&gestures);
    for (index, sample) in samples.iter().enumerate() {
        if cli.toggle_smooth_after == Some(index) {
            let smooth = slider.toggle_smooth();
            info!("Smoothing toggled {}", if smooth { "on" } else { "off" });
        }
        let before = slider.range();
        gestures.drag(sample.handle, sample.pointer(&slider.geometry()));
        let after = slider.range();
        debug!(
            "Sample {index} ({} {:?}): {before:?} -> {after:?}",
            sample.handle, sample.aim
        );
    }
    mounted.unmount();

    let view = slider.view();
    let range = slider.range();
    println!(
        "From {} To {} (stored {:?}, smooth {})",
        view.label_min,
        view.label_max,
        range.to_array(),
        view.smooth
    );

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    }

    if let Some(path) = cli.svg {
        fs::write(&path, svg::render(&view))
            .with_context(|| format!("failed to write {}", path.display()))?;
        info!("Wrote {}", path.display());
    }

    Ok(())
}
