use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::types::Role;

/// Destination paths for one scene's converted rasters.
///
/// Paths are a pure function of the output root and the scene name, so
/// building the set twice yields identical paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputSet {
    pub scene_name: String,
    pub scene_dir: PathBuf,
    pub dem: PathBuf,
    pub interferogram: PathBuf,
    pub correlation: PathBuf,
}

impl OutputSet {
    /// Derive the per-scene output directory and file names, creating the
    /// directory if absent. Safe to call repeatedly.
    pub fn build(output_root: &Path, input_dir: &Path) -> Result<Self> {
        let scene_name = input_dir
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .ok_or_else(|| Error::InvalidArgument {
                arg: "input_dir",
                value: input_dir.display().to_string(),
            })?;
        let scene_dir = output_root.join(&scene_name);
        fs::create_dir_all(&scene_dir)?;

        let file_for = |role: Role| scene_dir.join(format!("{}_{}.tif", scene_name, role));
        Ok(OutputSet {
            dem: file_for(Role::Dem),
            interferogram: file_for(Role::Interferogram),
            correlation: file_for(Role::Correlation),
            scene_name,
            scene_dir,
        })
    }

    pub fn path_for(&self, role: Role) -> &Path {
        match role {
            Role::Dem => &self.dem,
            Role::Interferogram => &self.interferogram,
            Role::Correlation => &self.correlation,
        }
    }
}
