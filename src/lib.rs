#![doc = r#"
insarviz — convert ISCE2 InSAR results to GeoTIFF with quicklooks.

This crate locates the DEM and interferogram rasters of an ISCE2 scene
directory by their naming conventions, copies each into a standalone
single-band Float32 GeoTIFF (borrowing the DEM's georeferencing where the
interferogram products carry none), and renders complex interferogram data
as a two-panel amplitude/phase quicklook plus an annotated 3-band GeoTIFF.
It powers the `insarviz` and `insarviz-quicklook` binaries and can be
embedded in other Rust applications.

Requirements
------------
- GDAL development headers and runtime available on your system.
- Rust 2024 edition toolchain.

Quick start: convert a scene directory
--------------------------------------
```rust,no_run
use std::path::Path;
use insarviz::{convert_scene_to_path, InterferogramLayout};

fn main() -> insarviz::Result<()> {
    let report = convert_scene_to_path(
        Path::new("/data/SceneA"),
        Path::new("/out"),
        InterferogramLayout::Auto,
    )?;
    println!("converted={} failed={}", report.converted, report.failed);
    Ok(())
}
```

Quicklooks for a complex raster
-------------------------------
```rust,no_run
use std::path::Path;
use insarviz::{quicklook_to_path, QuicklookParams};

fn main() -> insarviz::Result<()> {
    let params = QuicklookParams {
        title: "MERGED FILT IFG".to_string(),
        datamin: Some(0.0),
        datamax: Some(10000.0),
        draw_colorbar: true,
        ..Default::default()
    };
    quicklook_to_path(
        Path::new("/data/SceneA/interferogram/filt_topophase.flat.vrt"),
        Path::new("/out/filt_topophase.flat.tif"),
        Some(Path::new("/data/SceneA/demLat_N36_N38_Lon_E136_E137.dem.wgs84.vrt")),
        &params,
    )
}
```

Error handling
--------------
All public functions return `insarviz::Result<T>`; match on `insarviz::Error`
to handle specific cases, e.g. discovery or raster adapter errors.

Useful modules
--------------
- [`api`] — high-level, ergonomic entry points.
- [`core`] — discovery, output paths, conversion and quicklook pipelines.
- [`io`] — GDAL raster adapter and output writers.
- [`types`] — enums and core types (e.g. `Role`, `InterferogramLayout`).
- [`error`] — crate-level `Error` and `Result`.
"#]

// Core modules (public)
pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Curated public API surface
// Types
pub use core::params::QuicklookParams;
pub use error::{Error, Result};
pub use types::{ColorbarOrientation, InterferogramLayout, Interpolation, Role};

// Raster adapter
pub use io::gdal::{RasterError, RasterGeoref, RasterMetadata, RasterSource};

// Discovery and output paths
pub use core::discover::{SceneFiles, discover, validate};
pub use core::outputs::OutputSet;

// High-level API re-exports
pub use api::{BatchReport, JobOutcome, convert_scene_to_path, quicklook_to_path};
