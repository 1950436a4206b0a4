use clap::Parser;
use std::path::PathBuf;

use insarviz::types::InterferogramLayout;

/// Output root used when --output-dir is not given
pub const DEFAULT_OUTPUT_ROOT: &str = "/app/visualize-outputs";

#[derive(Parser)]
#[command(name = "insarviz", version, about = "Convert ISCE2 InSAR results to GeoTIFF")]
pub struct CliArgs {
    /// Scene results directory produced by the InSAR processor
    #[arg(long)]
    pub input_dir: PathBuf,

    /// Root directory for converted GeoTIFFs (one subdirectory per scene)
    #[arg(long, default_value = DEFAULT_OUTPUT_ROOT)]
    pub output_dir: PathBuf,

    /// Where the interferogram raster lives inside the scene directory
    #[arg(long, value_enum, default_value_t = InterferogramLayout::Auto)]
    pub layout: InterferogramLayout,

    /// Enable logging
    #[arg(long, default_value_t = false)]
    pub log: bool,
}
