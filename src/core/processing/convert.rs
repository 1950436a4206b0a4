use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::core::discover::SceneFiles;
use crate::core::outputs::OutputSet;
use crate::error::{Error, Result};
use crate::io::gdal::RasterSource;
use crate::io::writers::tiff::write_geotiff_f32;
use crate::types::Role;

/// Convert one band of `input` into a single-band Float32 GeoTIFF at `output`.
///
/// When `reference` is given and `input` is not itself a DEM product (judged
/// by its path, as the upstream tooling does), the output borrows the
/// reference raster's georeferencing. The pixel grid is never resampled, so
/// borrowing is refused unless the grids match exactly.
pub fn convert_raster(
    input: &Path,
    output: &Path,
    reference: Option<&Path>,
    band: usize,
) -> Result<()> {
    let source = RasterSource::open(input)?;
    let data = source.read_band(band)?;
    let (rows, cols) = data.dim();

    let georef = match reference {
        Some(reference) if !input.to_string_lossy().contains("dem") => {
            let reference_source = RasterSource::open(reference)?;
            let meta = reference_source.metadata();
            if (meta.size_x, meta.size_y) != (cols, rows) {
                return Err(Error::GridMismatch {
                    reference: reference.to_path_buf(),
                    expected: (cols, rows),
                    actual: (meta.size_x, meta.size_y),
                });
            }
            reference_source.georef().clone()
        }
        _ => source.georef().clone(),
    };

    let samples: Vec<f32> = data.iter().copied().collect();
    write_geotiff_f32(output, cols, rows, &samples, Some(&georef)).map_err(|e| Error::Write {
        path: output.to_path_buf(),
        message: e.to_string(),
    })?;
    Ok(())
}

/// Outcome of one conversion job inside a batch run
#[derive(Debug, Clone, Serialize)]
pub struct JobOutcome {
    pub role: Role,
    pub input: PathBuf,
    pub output: PathBuf,
    pub error: Option<String>,
}

/// Result of a best-effort batch conversion
#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchReport {
    pub converted: usize,
    pub failed: usize,
    pub jobs: Vec<JobOutcome>,
}

/// Run the three standard conversion jobs for a scene: the DEM under its own
/// referencing, then interferogram band 1 and band 2 (correlation) under the
/// DEM's referencing. A failing job is logged and recorded; the remaining
/// jobs still run.
pub fn convert_scene(files: &SceneFiles, outputs: &OutputSet) -> BatchReport {
    let jobs = [
        (Role::Dem, files.dem.clone(), None, 1),
        (
            Role::Interferogram,
            files.interferogram.clone(),
            Some(files.dem.clone()),
            1,
        ),
        (
            Role::Correlation,
            files.interferogram.clone(),
            Some(files.dem.clone()),
            2,
        ),
    ];

    let mut report = BatchReport::default();
    for (role, input, reference, band) in jobs {
        let output = outputs.path_for(role).to_path_buf();
        match convert_raster(&input, &output, reference.as_deref(), band) {
            Ok(()) => {
                info!("{} conversion completed: {}", role, output.display());
                report.converted += 1;
                report.jobs.push(JobOutcome {
                    role,
                    input,
                    output,
                    error: None,
                });
            }
            Err(e) => {
                warn!("{} conversion failed: {}", role, e);
                report.failed += 1;
                report.jobs.push(JobOutcome {
                    role,
                    input,
                    output,
                    error: Some(e.to_string()),
                });
            }
        }
    }
    report
}
