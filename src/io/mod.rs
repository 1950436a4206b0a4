//! I/O layer for reading VRT-referenced rasters and writing output artifacts.
//! Provides the `gdal` source adapter and `writers` for GeoTIFF, quicklook
//! PNG, and the JSON run report.
pub mod gdal;
pub use gdal::{RasterError, RasterGeoref, RasterMetadata, RasterSource};

pub mod writers;
