//! `tincture-studio`: builds a palette from command-line flags, optionally
//! replays a marker drag on the hue track, and writes the results as PNG.

mod cli;
mod drag;

use anyhow::{Context, Result};
use clap::Parser;

use tincture_engine::logging::{init_logging, LoggingConfig};
use tincture_palette::prelude::*;

use cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::default();
    if cli.quiet {
        logging = logging.quiet();
    }
    if let Some(filter) = &cli.log {
        logging = logging.filter(filter);
    }
    init_logging(logging);

    let style = TrackStyle::default();
    let mut state = cli.palette()?;
    let mut active = None;

    if let Some((from, to)) = cli.drag {
        (state, active) = drag::replay(&state, &style, from, to);
    }

    let preview = state
        .render()
        .with_context(|| format!("rendering {} preview", state.mode()))?;
    preview
        .save_png(&cli.out)
        .with_context(|| format!("writing {}", cli.out.display()))?;
    log::info!("wrote {}x{} {} preview to {}", preview.width(), preview.height(), state.mode(), cli.out.display());

    if let Some(path) = &cli.track_out {
        let font = match &cli.font {
            Some(font) => Some(LabelFont::load(font).with_context(|| format!("loading font {}", font.display()))?),
            None => LabelFont::system(),
        };
        let track = match &font {
            Some(font) => render_track_labeled(&state, active, &style, font),
            None => {
                log::info!("no label font found; track markers are unlabeled");
                render_track(&state, active, &style)
            }
        };
        track
            .save_png(path)
            .with_context(|| format!("writing {}", path.display()))?;
        log::info!("wrote hue track to {}", path.display());
    }

    println!();
    println!("  {} stops · {} · {}px", state.stops().len(), state.mode(), state.size());
    for swatch in state.swatches() {
        println!("  [{}] {:>3}°  {}", swatch.index, swatch.hue_degrees, swatch.hex);
    }
    println!();

    Ok(())
}
