//! Render the hue wheel and the four activity ramps to a PNG so the colour
//! models can be checked by eye.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use gonhue::{
    reference::{HUE_PERIOD, REFERENCE_LUMINOSITY, REFERENCE_SATURATION},
    ActivityColours, ActivityState, Colour, Component, Config,
};
use image::{Rgba, RgbaImage};
use tracing_subscriber::EnvFilter;

const HEIGHT_PER_ROW: u32 = 60;

#[derive(Debug, Parser)]
#[command(about = "Render hue wheel and activity colour swatches")]
struct Args {
    /// JSON activity colour configuration. Defaults are used when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Where to write the image.
    #[arg(long, default_value = "swatch.png")]
    output: PathBuf,

    /// Width of the image in pixels.
    #[arg(long, default_value_t = 800)]
    width: u32,
}

/// One horizontal strip of the image.
enum Row {
    HueWheel,
    Activity(ActivityState),
}

impl Row {
    fn colour(&self, colours: &ActivityColours, t: Component) -> Colour {
        match self {
            Row::HueWheel => Colour::from_hue(
                t * HUE_PERIOD,
                REFERENCE_LUMINOSITY,
                REFERENCE_SATURATION,
            ),
            Row::Activity(state) => colours.get(*state, t),
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => Config::from_path(path)
            .with_context(|| format!("loading configuration from {}", path.display()))?,
        None => Config::default(),
    };
    let colours = ActivityColours::new(&config).context("building activity colours")?;

    let rows: Vec<Row> = std::iter::once(Row::HueWheel)
        .chain(ActivityState::ALL.into_iter().map(Row::Activity))
        .collect();

    let width = args.width.max(2);
    let height = rows.len() as u32 * HEIGHT_PER_ROW;
    let mut img = RgbaImage::new(width, height);

    img.enumerate_rows_mut().for_each(|(_, pixels)| {
        for (x, y, pixel) in pixels {
            let t = Component::from(x) / Component::from(width - 1);
            let row = &rows[(y / HEIGHT_PER_ROW) as usize];
            *pixel = Rgba(row.colour(&colours, t).to_rgba());
        }
    });

    for state in ActivityState::ALL {
        tracing::info!(
            %state,
            hue = colours.state(state).hue(),
            filled = colours.state(state).table().filled(),
            "rendered activity ramp"
        );
    }

    img.save(&args.output)
        .with_context(|| format!("writing {}", args.output.display()))?;
    tracing::info!(output = %args.output.display(), "swatch written");

    Ok(())
}
