use tracing::info;

use insarviz::api::convert_scene_to_path;

use super::args::CliArgs;
use super::errors::AppError;

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.log {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .init();
    }

    if !args.input_dir.is_dir() {
        return Err(AppError::InputDirNotFound {
            path: args.input_dir.display().to_string(),
        }
        .into());
    }

    info!("converting scene: {:?}", args.input_dir);
    info!("output root: {:?}", args.output_dir);
    info!("interferogram layout: {}", args.layout);

    // Discovery and validation failures propagate and exit non-zero;
    // per-raster failures are already absorbed into the report.
    let report = convert_scene_to_path(&args.input_dir, &args.output_dir, args.layout)?;

    info!("conversion complete!");
    info!("Converted: {}", report.converted);
    info!("Failed: {}", report.failed);

    Ok(())
}
