use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::error::{Error, Result};
use crate::types::{InterferogramLayout, Role};

/// DEM rasters are the WGS84 variant produced by the processor
pub const DEM_SUFFIX: &str = "dem.wgs84.vrt";
/// Interferogram raster directly under the scene directory (flat layout)
pub const FLAT_INTERFEROGRAM: &str = "filtPhase.cor.vrt";
/// Subdirectory holding the interferogram products (nested layout)
pub const INTERFEROGRAM_DIR: &str = "interferogram";
/// Unwrapped interferogram raster inside the subdirectory (nested layout)
pub const NESTED_INTERFEROGRAM: &str = "filt_topophase.unw.vrt";

/// Discovered role -> path mapping for one scene.
///
/// Invariant: exactly one path per role; `discover` fails rather than
/// returning a partial or ambiguous mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SceneFiles {
    pub dem: PathBuf,
    pub interferogram: PathBuf,
}

/// Locate the DEM and interferogram rasters inside a scene directory.
pub fn discover(base: &Path, layout: InterferogramLayout) -> Result<SceneFiles> {
    let dem = find_dem(base)?;
    info!("found dem raster: {}", dem.display());
    let interferogram = find_interferogram(base, layout)?;
    info!("found interferogram raster: {}", interferogram.display());
    Ok(SceneFiles { dem, interferogram })
}

fn find_dem(base: &Path) -> Result<PathBuf> {
    let mut matches = Vec::new();
    for entry in fs::read_dir(base)? {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        if entry.file_name().to_string_lossy().ends_with(DEM_SUFFIX) {
            matches.push(path);
        }
    }
    matches.sort();
    match matches.len() {
        0 => Err(Error::FileNotFound {
            role: Role::Dem,
            path: base.to_path_buf(),
        }),
        1 => Ok(matches.remove(0)),
        _ => Err(Error::DuplicateFile {
            role: Role::Dem,
            paths: matches,
        }),
    }
}

fn find_interferogram(base: &Path, layout: InterferogramLayout) -> Result<PathBuf> {
    let nested = match layout {
        InterferogramLayout::Flat => false,
        InterferogramLayout::Nested => true,
        InterferogramLayout::Auto => base.join(INTERFEROGRAM_DIR).is_dir(),
    };
    if nested {
        let dir = base.join(INTERFEROGRAM_DIR);
        if !dir.is_dir() {
            return Err(Error::DirectoryNotFound { path: dir });
        }
        let path = dir.join(NESTED_INTERFEROGRAM);
        if !path.is_file() {
            return Err(Error::FileNotFound {
                role: Role::Interferogram,
                path,
            });
        }
        Ok(path)
    } else {
        let path = base.join(FLAT_INTERFEROGRAM);
        if !path.is_file() {
            return Err(Error::FileNotFound {
                role: Role::Interferogram,
                path,
            });
        }
        Ok(path)
    }
}

/// Re-assert the naming contract on an already discovered mapping.
/// A path that reached the mapping through any other mechanism fails here.
pub fn validate(files: &SceneFiles) -> Result<()> {
    if !basename(&files.dem).ends_with(DEM_SUFFIX) {
        return Err(Error::InvalidFile {
            role: Role::Dem,
            path: files.dem.clone(),
        });
    }
    let igram = basename(&files.interferogram);
    if igram != FLAT_INTERFEROGRAM && igram != NESTED_INTERFEROGRAM {
        return Err(Error::InvalidFile {
            role: Role::Interferogram,
            path: files.interferogram.clone(),
        });
    }
    Ok(())
}

fn basename(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};
    use tempfile::tempdir;

    fn touch(path: &Path) {
        File::create(path).expect("create test file");
    }

    fn scene_with_nested_layout(base: &Path) {
        touch(&base.join("SceneA_dem.wgs84.vrt"));
        fs::create_dir(base.join(INTERFEROGRAM_DIR)).expect("create interferogram dir");
        touch(&base.join(INTERFEROGRAM_DIR).join(NESTED_INTERFEROGRAM));
    }

    #[test]
    fn discovers_nested_layout() {
        let dir = tempdir().expect("tempdir");
        scene_with_nested_layout(dir.path());

        let files = discover(dir.path(), InterferogramLayout::Nested).expect("discover");
        assert_eq!(files.dem, dir.path().join("SceneA_dem.wgs84.vrt"));
        assert_eq!(
            files.interferogram,
            dir.path().join(INTERFEROGRAM_DIR).join(NESTED_INTERFEROGRAM)
        );
        assert!(validate(&files).is_ok());
    }

    #[test]
    fn discovers_flat_layout() {
        let dir = tempdir().expect("tempdir");
        touch(&dir.path().join("demLat_N36_N38_Lon_E136_E137.dem.wgs84.vrt"));
        touch(&dir.path().join(FLAT_INTERFEROGRAM));

        let files = discover(dir.path(), InterferogramLayout::Flat).expect("discover");
        assert_eq!(files.interferogram, dir.path().join(FLAT_INTERFEROGRAM));
        assert!(validate(&files).is_ok());
    }

    #[test]
    fn auto_prefers_nested_when_subdirectory_exists() {
        let dir = tempdir().expect("tempdir");
        scene_with_nested_layout(dir.path());
        touch(&dir.path().join(FLAT_INTERFEROGRAM));

        let files = discover(dir.path(), InterferogramLayout::Auto).expect("discover");
        assert_eq!(
            files.interferogram,
            dir.path().join(INTERFEROGRAM_DIR).join(NESTED_INTERFEROGRAM)
        );
    }

    #[test]
    fn auto_falls_back_to_flat_layout() {
        let dir = tempdir().expect("tempdir");
        touch(&dir.path().join("SceneA_dem.wgs84.vrt"));
        touch(&dir.path().join(FLAT_INTERFEROGRAM));

        let files = discover(dir.path(), InterferogramLayout::Auto).expect("discover");
        assert_eq!(files.interferogram, dir.path().join(FLAT_INTERFEROGRAM));
    }

    #[test]
    fn missing_dem_is_reported() {
        let dir = tempdir().expect("tempdir");
        touch(&dir.path().join(FLAT_INTERFEROGRAM));

        match discover(dir.path(), InterferogramLayout::Flat) {
            Err(Error::FileNotFound { role: Role::Dem, .. }) => {}
            other => panic!("expected missing dem error, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn duplicate_dem_is_reported() {
        let dir = tempdir().expect("tempdir");
        touch(&dir.path().join("a_dem.wgs84.vrt"));
        touch(&dir.path().join("b_dem.wgs84.vrt"));
        touch(&dir.path().join(FLAT_INTERFEROGRAM));

        match discover(dir.path(), InterferogramLayout::Flat) {
            Err(Error::DuplicateFile {
                role: Role::Dem,
                paths,
            }) => assert_eq!(paths.len(), 2),
            other => panic!("expected duplicate dem error, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn missing_interferogram_subdirectory_is_distinct() {
        let dir = tempdir().expect("tempdir");
        touch(&dir.path().join("SceneA_dem.wgs84.vrt"));

        match discover(dir.path(), InterferogramLayout::Nested) {
            Err(Error::DirectoryNotFound { path }) => {
                assert_eq!(path, dir.path().join(INTERFEROGRAM_DIR));
            }
            other => panic!("expected missing directory error, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn missing_nested_interferogram_names_the_attempted_path() {
        let dir = tempdir().expect("tempdir");
        touch(&dir.path().join("SceneA_dem.wgs84.vrt"));
        fs::create_dir(dir.path().join(INTERFEROGRAM_DIR)).expect("create dir");

        match discover(dir.path(), InterferogramLayout::Nested) {
            Err(Error::FileNotFound {
                role: Role::Interferogram,
                path,
            }) => {
                assert_eq!(
                    path,
                    dir.path().join(INTERFEROGRAM_DIR).join(NESTED_INTERFEROGRAM)
                );
            }
            other => panic!("expected missing file error, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn validate_rejects_foreign_paths() {
        let files = SceneFiles {
            dem: PathBuf::from("/data/scene/elevation.tif"),
            interferogram: PathBuf::from("/data/scene/filtPhase.cor.vrt"),
        };
        match validate(&files) {
            Err(Error::InvalidFile {
                role: Role::Dem, ..
            }) => {}
            other => panic!("expected invalid dem error, got {:?}", other.map(|_| ())),
        }

        let files = SceneFiles {
            dem: PathBuf::from("/data/scene/x_dem.wgs84.vrt"),
            interferogram: PathBuf::from("/data/scene/topophase.flat.vrt"),
        };
        match validate(&files) {
            Err(Error::InvalidFile {
                role: Role::Interferogram,
                ..
            }) => {}
            other => panic!(
                "expected invalid interferogram error, got {:?}",
                other.map(|_| ())
            ),
        }
    }
}
