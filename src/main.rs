use anyhow::{Context, Result};
use clap::Parser;

use clearback::{strip_file, Cli};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();

    let options = cli.strip_options()?;
    let output_path = cli.output_path();

    log::debug!(
        "Threshold: {}, crop to content: {}",
        options.threshold.value(),
        options.crop_to_content
    );

    let report = strip_file(&cli.input, &output_path, options).with_context(|| {
        format!(
            "Failed to strip background: {:?} -> {:?}",
            cli.input, output_path
        )
    })?;

    log::info!("Saved transparent image: {:?}", output_path);
    log::info!(
        "Dimensions: {}x{} -> {}x{}",
        report.original.0,
        report.original.1,
        report.output.0,
        report.output.1
    );

    Ok(())
}
