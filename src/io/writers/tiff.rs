use gdal::raster::Buffer;
use gdal::spatial_ref::SpatialRef;
use gdal::{Dataset, DriverManager, Metadata};
use std::path::Path;

use crate::io::gdal::RasterGeoref;

/// Band descriptions of the 3-band quicklook GeoTIFF, in band order.
pub const QUICKLOOK_BAND_DESCRIPTIONS: [&str; 3] = ["Amplitude", "Phase [rad]", "Valid data mask"];

fn apply_georef(
    ds: &mut Dataset,
    georef: Option<&RasterGeoref>,
    default_wgs84: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut have_projection = false;
    if let Some(georef) = georef {
        // An identity transform carries no information; leaving it unset
        // keeps the output recognizable as ungeoreferenced.
        if !georef.is_identity() {
            ds.set_geo_transform(&georef.geotransform)?;
        }
        if !georef.projection.is_empty() {
            ds.set_projection(&georef.projection)?;
            have_projection = true;
        }
    }
    if default_wgs84 && !have_projection {
        let srs = SpatialRef::from_epsg(4326)?;
        ds.set_spatial_ref(&srs)?;
    }
    Ok(())
}

/// Write a single-band Float32 GeoTIFF carrying the given referencing.
pub fn write_geotiff_f32(
    output: &Path,
    cols: usize,
    rows: usize,
    data: &[f32],
    georef: Option<&RasterGeoref>,
) -> Result<Dataset, Box<dyn std::error::Error>> {
    let driver = DriverManager::get_driver_by_name("GTiff")?;
    let mut ds = driver.create_with_band_type::<f32, _>(output, cols, rows, 1)?;
    apply_georef(&mut ds, georef, false)?;
    let mut buf = Buffer::new((cols, rows), data.to_vec());
    let mut band = ds.rasterband(1)?;
    band.write((0, 0), (cols, rows), &mut buf)?;
    Ok(ds)
}

/// Write the annotated 3-band Float32 quicklook GeoTIFF
/// (amplitude, phase in radians, validity mask).
///
/// Falls back to WGS84 when no projection is known, so downstream viewers
/// always get a coordinate system.
pub fn write_quicklook_geotiff(
    output: &Path,
    cols: usize,
    rows: usize,
    amplitude: &[f32],
    phase: &[f32],
    mask: &[f32],
    georef: Option<&RasterGeoref>,
) -> Result<Dataset, Box<dyn std::error::Error>> {
    let driver = DriverManager::get_driver_by_name("GTiff")?;
    let mut ds = driver.create_with_band_type::<f32, _>(output, cols, rows, 3)?;
    apply_georef(&mut ds, georef, true)?;

    let bands: [&[f32]; 3] = [amplitude, phase, mask];
    for (i, data) in bands.into_iter().enumerate() {
        let mut band = ds.rasterband(i + 1)?;
        band.set_description(QUICKLOOK_BAND_DESCRIPTIONS[i])?;
        let mut buf = Buffer::new((cols, rows), data.to_vec());
        band.write((0, 0), (cols, rows), &mut buf)?;
    }

    Ok(ds)
}
