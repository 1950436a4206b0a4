use gdal::{Dataset, errors::GdalError as GdalCrateError};
use ndarray::Array2;
use num_complex::Complex;
use std::ffi::{c_int, c_void};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors encountered in the GDAL-backed raster adapter
#[derive(Debug, Error)]
pub enum RasterError {
    #[error("GDAL error: {0}")]
    Gdal(#[from] GdalCrateError),
    #[error("Failed to open raster {}: {source}", path.display())]
    Open {
        path: PathBuf,
        source: GdalCrateError,
    },
    #[error("Band index {band} out of range (raster has {bands} bands)")]
    BandOutOfRange { band: usize, bands: usize },
    #[error("Dimension mismatch: expected {expected_x}x{expected_y}, got {len} samples")]
    DimensionMismatch {
        expected_x: usize,
        expected_y: usize,
        len: usize,
    },
    #[error("Raster I/O failed on band {band} of {}", path.display())]
    RasterIo { band: usize, path: PathBuf },
}

/// Geospatial referencing of a raster: affine geotransform plus projection.
///
/// The geotransform coefficients are GDAL's
/// `[origin_x, pixel_width, rot_x, origin_y, rot_y, pixel_height]`.
#[derive(Debug, Clone, PartialEq)]
pub struct RasterGeoref {
    pub geotransform: [f64; 6],
    pub projection: String,
}

impl RasterGeoref {
    /// An identity geotransform is GDAL's stand-in for "no georeferencing".
    pub fn is_identity(&self) -> bool {
        let gt = self.geotransform;
        gt[0] == 0.0 && gt[1] == 1.0 && gt[2] == 0.0 && gt[3] == 0.0 && gt[4] == 0.0 && gt[5] == 1.0
    }

    /// Geographic extent (xmin, xmax, ymin, ymax) of a `width` x `height` grid.
    pub fn bounds(&self, width: usize, height: usize) -> (f64, f64, f64, f64) {
        let gt = self.geotransform;
        let x0 = gt[0];
        let x1 = gt[0] + gt[1] * width as f64;
        let y0 = gt[3] + gt[5] * height as f64;
        let y1 = gt[3];
        (x0.min(x1), x0.max(x1), y0.min(y1), y0.max(y1))
    }
}

/// Metadata extracted from an opened raster
#[derive(Debug, Clone)]
pub struct RasterMetadata {
    /// Width (pixels) of the raster
    pub size_x: usize,
    /// Height (lines) of the raster
    pub size_y: usize,
    /// Number of raster bands
    pub bands: usize,
    pub georef: RasterGeoref,
}

/// Read-only raster source for GDAL-supported formats (VRT, GeoTIFF, ENVI).
///
/// The underlying dataset handle is released when the source is dropped, so
/// each open/read pair stays scoped to one operation.
pub struct RasterSource {
    dataset: Dataset,
    path: PathBuf,
    metadata: RasterMetadata,
}

impl RasterSource {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, RasterError> {
        let path = path.as_ref();
        let dataset = Dataset::open(path).map_err(|source| RasterError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        let (size_x, size_y) = dataset.raster_size();
        let bands = dataset.raster_count() as usize;
        let geotransform = match dataset.geo_transform() {
            Ok(gt) => gt,
            Err(_) => [0.0, 1.0, 0.0, 0.0, 0.0, 1.0],
        };
        let projection = dataset.projection();
        Ok(RasterSource {
            dataset,
            path: path.to_path_buf(),
            metadata: RasterMetadata {
                size_x,
                size_y,
                bands,
                georef: RasterGeoref {
                    geotransform,
                    projection,
                },
            },
        })
    }

    pub fn metadata(&self) -> &RasterMetadata {
        &self.metadata
    }

    pub fn georef(&self) -> &RasterGeoref {
        &self.metadata.georef
    }

    fn check_band(&self, index: usize) -> Result<(), RasterError> {
        if index == 0 || index > self.metadata.bands {
            return Err(RasterError::BandOutOfRange {
                band: index,
                bands: self.metadata.bands,
            });
        }
        Ok(())
    }

    /// Read a single band (1-based index) as an f32 ndarray of shape (height, width)
    pub fn read_band(&self, index: usize) -> Result<Array2<f32>, RasterError> {
        self.check_band(index)?;
        let band = self.dataset.rasterband(index)?;
        let window = (self.metadata.size_x, self.metadata.size_y);
        let buf = band.read_as::<f32>((0, 0), window, window, None)?;
        let data = buf.data().to_vec();
        let len = data.len();
        Array2::from_shape_vec((self.metadata.size_y, self.metadata.size_x), data).map_err(|_| {
            RasterError::DimensionMismatch {
                expected_x: self.metadata.size_x,
                expected_y: self.metadata.size_y,
                len,
            }
        })
    }

    /// Read a single band (1-based index) as complex f32, shape (height, width).
    ///
    /// The safe buffer types only cover real samples, so this goes through
    /// `GDALRasterIO` with a `GDT_CFloat32` buffer: complex-typed bands
    /// (CFloat32, CInt16, ...) arrive as interleaved re/im pairs, and GDAL
    /// zero-fills the imaginary half for real-typed bands.
    pub fn read_complex_band(&self, index: usize) -> Result<Array2<Complex<f32>>, RasterError> {
        self.check_band(index)?;
        let (width, height) = (self.metadata.size_x, self.metadata.size_y);
        let mut interleaved = vec![0f32; width * height * 2];
        let rv = unsafe {
            let c_band =
                gdal_sys::GDALGetRasterBand(self.dataset.c_dataset(), index as c_int);
            gdal_sys::GDALRasterIO(
                c_band,
                gdal_sys::GDALRWFlag::GF_Read,
                0,
                0,
                width as c_int,
                height as c_int,
                interleaved.as_mut_ptr() as *mut c_void,
                width as c_int,
                height as c_int,
                gdal_sys::GDALDataType::GDT_CFloat32,
                0,
                0,
            )
        };
        if rv != gdal_sys::CPLErr::CE_None {
            return Err(RasterError::RasterIo {
                band: index,
                path: self.path.clone(),
            });
        }
        let mut array = Array2::zeros((height, width));
        for row in 0..height {
            for col in 0..width {
                let idx = (row * width + col) * 2;
                array[[row, col]] = Complex::new(interleaved[idx], interleaved[idx + 1]);
            }
        }
        Ok(array)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn georef(gt: [f64; 6]) -> RasterGeoref {
        RasterGeoref {
            geotransform: gt,
            projection: String::new(),
        }
    }

    #[test]
    fn identity_geotransform_is_detected() {
        assert!(georef([0.0, 1.0, 0.0, 0.0, 0.0, 1.0]).is_identity());
        assert!(!georef([136.0, 0.001, 0.0, 38.0, 0.0, -0.001]).is_identity());
    }

    #[test]
    fn bounds_follow_a_north_up_transform() {
        let g = georef([136.0, 0.5, 0.0, 38.0, 0.0, -0.5]);
        let (xmin, xmax, ymin, ymax) = g.bounds(4, 2);
        assert_eq!(xmin, 136.0);
        assert_eq!(xmax, 138.0);
        assert_eq!(ymin, 37.0);
        assert_eq!(ymax, 38.0);
    }
}
