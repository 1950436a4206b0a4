use ndarray::Array2;
use num_complex::Complex;
use std::path::Path;
use tracing::info;

use crate::core::params::QuicklookParams;
use crate::core::processing::decompose::{decompose, mask_zeros};
use crate::error::{Error, Result};
use crate::io::gdal::RasterGeoref;
use crate::io::writers::quicklook::render_quicklook_png;
use crate::io::writers::tiff::write_quicklook_geotiff;

/// Render the quicklook image (PNG sibling of `output`) and persist the
/// annotated 3-band GeoTIFF at `output`. Unlike the batch converter, the two
/// writes are not isolated from each other; the first failure aborts the call.
pub fn save_quicklook(
    mut data: Array2<Complex<f32>>,
    georef: &RasterGeoref,
    output: &Path,
    params: &QuicklookParams,
) -> Result<()> {
    mask_zeros(&mut data);
    let (rows, cols) = data.dim();
    let extent = georef.bounds(cols, rows);

    let png_path = output.with_extension("png");
    render_quicklook_png(&png_path, &data, extent, params).map_err(|e| Error::Write {
        path: png_path.clone(),
        message: e.to_string(),
    })?;
    info!("quicklook image saved: {}", png_path.display());

    let parts = decompose(&data);
    let amplitude: Vec<f32> = parts.amplitude.iter().copied().collect();
    let phase: Vec<f32> = parts.phase.iter().copied().collect();
    let mask: Vec<f32> = parts.mask.iter().map(|&m| f32::from(m)).collect();
    write_quicklook_geotiff(output, cols, rows, &amplitude, &phase, &mask, Some(georef)).map_err(
        |e| Error::Write {
            path: output.to_path_buf(),
            message: e.to_string(),
        },
    )?;
    info!("quicklook raster saved: {}", output.display());

    Ok(())
}
