//! High-level, ergonomic entry points: convert a scene directory to the
//! standard GeoTIFF set, or render quicklook artifacts for a complex raster.
//! Prefer these over the low-level processing modules when embedding.
use std::path::Path;
use tracing::{info, warn};

use crate::core::discover::{discover, validate};
use crate::core::outputs::OutputSet;
use crate::core::params::QuicklookParams;
use crate::core::processing::convert::convert_scene;
use crate::core::processing::save::save_quicklook;
use crate::error::{Error, Result};
use crate::io::gdal::RasterSource;
use crate::io::writers::report::write_report_sidecar;
use crate::types::InterferogramLayout;

pub use crate::core::processing::convert::{BatchReport, JobOutcome};

/// Convert one scene directory into the standard GeoTIFF set
/// (`{scene}_dem.tif`, `{scene}_interferogram.tif`, `{scene}_correlation.tif`)
/// under `output_root/{scene}/`, plus a JSON run report.
///
/// Discovery and validation failures are fatal; per-raster conversion
/// failures are recorded in the returned [`BatchReport`] instead.
pub fn convert_scene_to_path(
    input_dir: &Path,
    output_root: &Path,
    layout: InterferogramLayout,
) -> Result<BatchReport> {
    let files = discover(input_dir, layout)?;
    validate(&files)?;
    let outputs = OutputSet::build(output_root, input_dir)?;

    let report = convert_scene(&files, &outputs);
    write_report_sidecar(&outputs, &report).map_err(Error::external)?;
    info!(
        "scene {}: {} converted, {} failed",
        outputs.scene_name, report.converted, report.failed
    );
    Ok(report)
}

/// Read band 1 of `raster` as complex data and persist the quicklook
/// artifacts at `output` (3-band GeoTIFF) and its PNG sibling.
///
/// When the raster carries no georeferencing and `reference` is given, the
/// reference raster's referencing is used for the plot extent and the output.
pub fn quicklook_to_path(
    raster: &Path,
    output: &Path,
    reference: Option<&Path>,
    params: &QuicklookParams,
) -> Result<()> {
    let source = RasterSource::open(raster)?;
    let data = source.read_complex_band(1)?;
    let mut georef = source.georef().clone();
    // Release the source handle before any reference raster is opened
    drop(source);

    if georef.is_identity() {
        if let Some(reference) = reference {
            warn!(
                "input raster has no georeferencing, borrowing from {}",
                reference.display()
            );
            georef = RasterSource::open(reference)?.georef().clone();
        }
    }

    save_quicklook(data, &georef, output, params)
}
