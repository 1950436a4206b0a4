//! Shared types and enums used across insarviz.
//! Includes the raster `Role`, the `InterferogramLayout` discovery strategy,
//! and the quicklook rendering options (`Interpolation`, `ColorbarOrientation`).
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Logical role of a raster within one scene's result set.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Dem,
    Interferogram,
    Correlation,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Dem => "dem",
            Role::Interferogram => "interferogram",
            Role::Correlation => "correlation",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Where the interferogram raster lives inside a scene directory.
///
/// ISCE2 runs come in two shapes: `filtPhase.cor.vrt` directly in the scene
/// directory, or `filt_topophase.unw.vrt` under an `interferogram/`
/// subdirectory. `Auto` picks the nested layout whenever the subdirectory
/// exists.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Serialize, Deserialize)]
pub enum InterferogramLayout {
    Auto,
    Flat,
    Nested,
}

impl std::fmt::Display for InterferogramLayout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            InterferogramLayout::Auto => "auto",
            InterferogramLayout::Flat => "flat",
            InterferogramLayout::Nested => "nested",
        };
        write!(f, "{}", s)
    }
}

/// Sampling used when the quicklook panels are drawn.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Serialize, Deserialize)]
pub enum Interpolation {
    Nearest,
    Bilinear,
}

/// Placement of the optional colorbar strip next to each quicklook panel.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Serialize, Deserialize)]
pub enum ColorbarOrientation {
    Horizontal,
    Vertical,
}
