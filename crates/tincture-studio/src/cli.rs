use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use tincture_palette::prelude::*;

/// Build a multi-stop palette and render it as a gradient preview.
#[derive(Parser, Debug, Clone)]
#[command(name = "tincture-studio")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Number of stops, evenly spaced around the hue wheel (2-8)
    #[arg(short = 'n', long = "stops", default_value_t = 3)]
    pub stops: usize,

    /// Explicit stop hues in degrees (e.g. --hues 0,90,200); overrides --stops
    #[arg(long = "hues", value_delimiter = ',', num_args = 1..)]
    pub hues: Vec<f32>,

    /// Gradient mode: noise, linear, radial or angular (unknown values fall back to noise)
    #[arg(short = 'm', long = "mode", default_value = "noise")]
    pub mode: String,

    /// Global saturation in [0, 1]
    #[arg(short = 's', long = "saturation", default_value_t = 0.8)]
    pub saturation: f32,

    /// Global brightness in [0, 1]
    #[arg(short = 'b', long = "brightness", default_value_t = 0.8)]
    pub brightness: f32,

    /// Respace the stop hues evenly around the wheel, keeping their order
    #[arg(long = "distribute")]
    pub distribute: bool,

    /// Use each stop's own saturation/brightness instead of the global values
    #[arg(long = "per-stop")]
    pub per_stop: bool,

    /// Per-stop saturation/brightness as INDEX:S:B (repeatable)
    #[arg(long = "set", value_name = "INDEX:S:B", value_parser = parse_stop_values)]
    pub set: Vec<(usize, f32, f32)>,

    /// Side length of the square preview in pixels
    #[arg(long = "size", default_value_t = 300)]
    pub size: u32,

    /// Replay a marker drag on the hue track from one track x to another (e.g. 200:450)
    #[arg(long = "drag", value_name = "FROM:TO", value_parser = parse_drag)]
    pub drag: Option<(f32, f32)>,

    /// Output path of the gradient preview
    #[arg(short = 'o', long = "out", default_value = "gradient.png")]
    pub out: PathBuf,

    /// Also write the hue track to this path
    #[arg(long = "track-out")]
    pub track_out: Option<PathBuf>,

    /// Font for the marker index labels on the hue track (defaults to a system sans-serif)
    #[arg(long = "font", value_name = "PATH")]
    pub font: Option<PathBuf>,

    /// Log filter in env_logger syntax (defaults to RUST_LOG, then info)
    #[arg(long = "log", value_name = "FILTER")]
    pub log: Option<String>,

    /// Only log warnings and errors
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,
}

fn parse_pair(s: &str) -> Result<(f32, f32), String> {
    let (a, b) = s
        .split_once(':')
        .ok_or_else(|| format!("expected FROM:TO, got: {s}"))?;
    let a = a.trim().parse::<f32>().map_err(|e| format!("invalid FROM: {e}"))?;
    let b = b.trim().parse::<f32>().map_err(|e| format!("invalid TO: {e}"))?;
    Ok((a, b))
}

fn parse_drag(s: &str) -> Result<(f32, f32), String> {
    parse_pair(s)
}

fn parse_stop_values(s: &str) -> Result<(usize, f32, f32), String> {
    let (index, rest) = s
        .split_once(':')
        .ok_or_else(|| format!("expected INDEX:S:B, got: {s}"))?;
    let index = index.trim().parse::<usize>().map_err(|e| format!("invalid INDEX: {e}"))?;
    let (sat, bri) = parse_pair(rest).map_err(|_| format!("expected INDEX:S:B, got: {s}"))?;
    Ok((index, sat, bri))
}

impl Cli {
    /// Initial palette snapshot described by the flags (before any drag).
    pub fn palette(&self) -> Result<PaletteState> {
        let base = if self.hues.is_empty() {
            PaletteState::default()
        } else {
            let stops = self
                .hues
                .iter()
                .map(|h| ColorStop::new(*h, self.saturation, self.brightness));
            PaletteState::with_stops(StopList::from_stops(stops).context("invalid --hues")?)
        };

        let mut state = base.apply_all([
            Action::SetGlobalSaturation(self.saturation),
            Action::SetGlobalBrightness(self.brightness),
            Action::SetOverride(!self.per_stop),
            Action::SetMode(GradientMode::parse_or_default(&self.mode)),
            Action::SetSize(self.size),
        ]);

        // Regenerating after the globals are set lets new stops pick them up.
        if self.hues.is_empty() {
            state = state.apply(Action::SetStopCount(self.stops));
        }
        if self.distribute {
            state = state.apply(Action::DistributeEvenly);
        }

        for &(index, value_s, value_b) in &self.set {
            if index >= state.stops().len() {
                log::warn!("--set {index}: palette only has {} stops", state.stops().len());
                continue;
            }
            state = state.apply_all([
                Action::SetStopSaturation { index, value: value_s },
                Action::SetStopBrightness { index, value: value_b },
            ]);
        }

        Ok(state)
    }
}
