#![allow(dead_code)]

use gdal::raster::Buffer;
use gdal::spatial_ref::SpatialRef;
use gdal::{Dataset, DriverManager};
use std::path::Path;

/// A small north-up WGS84-style geotransform for test rasters
pub const TEST_GT: [f64; 6] = [136.0, 0.001, 0.0, 38.0, 0.0, -0.001];
/// A second, clearly different geotransform
pub const OTHER_GT: [f64; 6] = [10.0, 0.5, 0.0, 50.0, 0.0, -0.5];

/// Write a Float32 GeoTIFF test raster. Band data is row-major, one Vec per
/// band. The projection is set to EPSG:4326 only when `srs` is true.
pub fn write_raster(
    path: &Path,
    cols: usize,
    rows: usize,
    bands: &[Vec<f32>],
    gt: Option<[f64; 6]>,
    srs: bool,
) {
    let driver = DriverManager::get_driver_by_name("GTiff").expect("GTiff driver");
    let mut ds = driver
        .create_with_band_type::<f32, _>(path, cols, rows, bands.len())
        .expect("create test raster");
    if let Some(gt) = gt {
        ds.set_geo_transform(&gt).expect("set geotransform");
    }
    if srs {
        let srs = SpatialRef::from_epsg(4326).expect("EPSG:4326");
        ds.set_spatial_ref(&srs).expect("set spatial ref");
    }
    for (i, data) in bands.iter().enumerate() {
        let mut buf = Buffer::new((cols, rows), data.clone());
        let mut band = ds.rasterband(i + 1).expect("band");
        band.write((0, 0), (cols, rows), &mut buf).expect("write band");
    }
}

/// Read one band of a raster back as (pixels, geotransform, projection, (cols, rows))
pub fn read_band_f32(path: &Path, band: usize) -> (Vec<f32>, [f64; 6], String, (usize, usize)) {
    let ds = Dataset::open(path).expect("open raster");
    let (cols, rows) = ds.raster_size();
    let b = ds.rasterband(band).expect("band");
    let buf = b
        .read_as::<f32>((0, 0), (cols, rows), (cols, rows), None)
        .expect("read band");
    let gt = ds
        .geo_transform()
        .unwrap_or([0.0, 1.0, 0.0, 0.0, 0.0, 1.0]);
    let projection = ds.projection();
    (buf.data().to_vec(), gt, projection, (cols, rows))
}

pub fn band_count(path: &Path) -> usize {
    Dataset::open(path).expect("open raster").raster_count() as usize
}
