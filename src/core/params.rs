use serde::{Deserialize, Serialize};

use crate::types::{ColorbarOrientation, Interpolation};

/// Quicklook rendering parameters suitable for CLI flags and presets
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuicklookParams {
    /// Title prefix; the panels append " (amplitude)" / " (phase [rad])"
    pub title: String,
    /// Vertical exaggeration of the panels; 1 keeps them square
    pub aspect: f64,
    /// Fixed lower bound of the amplitude scale; None uses the data minimum
    pub datamin: Option<f64>,
    /// Fixed upper bound of the amplitude scale; None uses the data maximum
    pub datamax: Option<f64>,
    pub interpolation: Interpolation,
    pub draw_colorbar: bool,
    pub colorbar_orientation: ColorbarOrientation,
}

impl Default for QuicklookParams {
    fn default() -> Self {
        Self {
            title: String::new(),
            aspect: 1.0,
            datamin: None,
            datamax: None,
            interpolation: Interpolation::Nearest,
            draw_colorbar: false,
            colorbar_orientation: ColorbarOrientation::Horizontal,
        }
    }
}
