use clap::{ArgGroup, Parser, ValueEnum};
use std::path::PathBuf;

use crate::error::{self, StripError};
use crate::mask::Threshold;
use crate::strip::StripOptions;

/// Named thresholds for common kinds of background
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Preset {
    /// Only pure or near-pure white (> 240)
    NearWhite,
    /// Off-white and light grey paper tones (> 200)
    OffWhite,
    /// Any light color (> 180)
    Aggressive,
}

impl Preset {
    pub fn threshold(self) -> Threshold {
        let value: u8 = match self {
            Preset::NearWhite => 240,
            Preset::OffWhite => 200,
            Preset::Aggressive => 180,
        };
        Threshold::from(value)
    }
}

#[derive(Parser, Debug)]
#[command(name = "clearback")]
#[command(version, about = "Make near-white image backgrounds transparent")]
#[command(group(ArgGroup::new("cutoff").required(true).args(["threshold", "preset"])))]
pub struct Cli {
    /// Input image path (PNG, WebP, JPEG, ...)
    #[arg(required = true)]
    pub input: PathBuf,

    /// Output path [default: input_transparent.png]
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Pixels with red, green and blue all above this value become transparent
    #[arg(short, long, value_parser = parse_threshold, allow_negative_numbers = true)]
    pub threshold: Option<Threshold>,

    /// Use a named threshold instead of a number
    #[arg(short, long, value_enum)]
    pub preset: Option<Preset>,

    /// Crop the result to its non-transparent content
    #[arg(long)]
    pub crop: bool,

    /// Show processing details
    #[arg(long)]
    pub verbose: bool,
}

impl Cli {
    pub fn output_path(&self) -> PathBuf {
        self.output.clone().unwrap_or_else(|| {
            let stem = self.input.file_stem().unwrap_or_default().to_string_lossy();
            let parent = self.input.parent().unwrap_or(std::path::Path::new("."));
            parent.join(format!("{}_transparent.png", stem))
        })
    }

    /// The explicit threshold, else the preset's
    pub fn threshold(&self) -> error::Result<Threshold> {
        self.threshold
            .or_else(|| self.preset.map(Preset::threshold))
            .ok_or_else(|| {
                StripError::InvalidArgument("either --threshold or --preset is required".to_string())
            })
    }

    pub fn strip_options(&self) -> error::Result<StripOptions> {
        Ok(StripOptions::new(self.threshold()?, self.crop))
    }
}

fn parse_threshold(s: &str) -> Result<Threshold, String> {
    let value: i64 = s
        .parse()
        .map_err(|_| format!("Invalid threshold '{}', expected an integer", s))?;

    Threshold::new(value).map_err(|e| e.to_string())
}
