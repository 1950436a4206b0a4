//! Quicklook entrypoint: render the two-panel amplitude/phase image and the
//! annotated 3-band GeoTIFF for a complex interferogram raster.
//!
//! The output location honors the `OUTPUT_DIR` environment variable when
//! `--output` is not given.

use clap::Parser;
use std::path::{Path, PathBuf};

use insarviz::QuicklookParams;
use insarviz::api::quicklook_to_path;
use insarviz::error::Error;
use insarviz::types::{ColorbarOrientation, Interpolation};

/// Output root when neither --output nor OUTPUT_DIR is set
const DEFAULT_OUTPUT_ROOT: &str = "/app/visualize-outputs";

#[derive(Parser)]
#[command(
    name = "insarviz-quicklook",
    version,
    about = "Render amplitude/phase quicklooks for a complex interferogram raster"
)]
struct QuicklookArgs {
    /// Complex-valued interferogram raster (e.g. filt_topophase.flat.vrt)
    #[arg(short, long)]
    input: PathBuf,

    /// Output GeoTIFF path; the PNG sibling replaces its extension.
    /// Defaults to $OUTPUT_DIR (or the fixed output root) plus the input stem.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Reference raster (DEM) supplying georeferencing when the input has none
    #[arg(long)]
    reference: Option<PathBuf>,

    /// Plot title prefix
    #[arg(long, default_value = "")]
    title: String,

    /// Vertical exaggeration of the panels
    #[arg(long, default_value_t = 1.0)]
    aspect: f64,

    /// Fixed lower bound of the amplitude scale
    #[arg(long)]
    datamin: Option<f64>,

    /// Fixed upper bound of the amplitude scale
    #[arg(long)]
    datamax: Option<f64>,

    /// Sampling used when the panels are drawn
    #[arg(long, value_enum, default_value_t = Interpolation::Nearest)]
    interpolation: Interpolation,

    /// Draw a colorbar next to each panel
    #[arg(long, default_value_t = false)]
    colorbar: bool,

    /// Placement of the colorbar strip
    #[arg(long, value_enum, default_value_t = ColorbarOrientation::Horizontal)]
    colorbar_orientation: ColorbarOrientation,

    /// Enable logging
    #[arg(long, default_value_t = false)]
    log: bool,
}

fn default_output(input: &Path) -> PathBuf {
    let root =
        std::env::var("OUTPUT_DIR").unwrap_or_else(|_| DEFAULT_OUTPUT_ROOT.to_string());
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "quicklook".to_string());
    PathBuf::from(root).join(format!("{}.tif", stem))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = QuicklookArgs::parse();

    if args.log {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .init();
    }

    if !(args.aspect.is_finite() && args.aspect > 0.0) {
        return Err(Error::InvalidArgument {
            arg: "--aspect",
            value: args.aspect.to_string(),
        }
        .into());
    }
    if let (Some(lo), Some(hi)) = (args.datamin, args.datamax) {
        if lo >= hi {
            return Err(Error::InvalidArgument {
                arg: "--datamin/--datamax",
                value: format!("{}..{}", lo, hi),
            }
            .into());
        }
    }

    let output = args.output.clone().unwrap_or_else(|| default_output(&args.input));
    if let Some(parent) = output.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let params = QuicklookParams {
        title: args.title.clone(),
        aspect: args.aspect,
        datamin: args.datamin,
        datamax: args.datamax,
        interpolation: args.interpolation,
        draw_colorbar: args.colorbar,
        colorbar_orientation: args.colorbar_orientation,
    };

    quicklook_to_path(&args.input, &output, args.reference.as_deref(), &params)?;
    Ok(())
}
