use std::fs;
use std::io::{self, Cursor, Write};
use std::path::Path;

use image::{DynamicImage, ImageError, ImageFormat, RgbaImage};
use tempfile::NamedTempFile;

use crate::bounds::crop_to_content;
use crate::error::{Result, StripError};
use crate::mask::{apply_mask, background_mask, Threshold};

/// Parameters for one stripping pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StripOptions {
    pub threshold: Threshold,
    pub crop_to_content: bool,
}

impl StripOptions {
    pub fn new(threshold: Threshold, crop_to_content: bool) -> Self {
        Self {
            threshold,
            crop_to_content,
        }
    }
}

/// Dimensions before and after a file was stripped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StripReport {
    pub original: (u32, u32),
    pub output: (u32, u32),
}

/// Make background pixels transparent and optionally crop to what remains
pub fn strip(img: &DynamicImage, options: StripOptions) -> RgbaImage {
    let mut rgba = img.to_rgba8();

    let mask = background_mask(&rgba, options.threshold);
    let masked = apply_mask(&mut rgba, &mask);

    log::debug!(
        "Masked {} of {} pixels (threshold {})",
        masked,
        rgba.width() as u64 * rgba.height() as u64,
        options.threshold.value()
    );

    if options.crop_to_content {
        crop_to_content(&rgba)
    } else {
        rgba
    }
}

/// Decode an image, guessing the format from its content
pub fn decode(bytes: &[u8]) -> Result<DynamicImage> {
    image::load_from_memory(bytes).map_err(|e| StripError::Decode(None, e))
}

pub fn encode_png(img: &RgbaImage) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    img.write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)
        .map_err(|e| StripError::Encode(None, e))?;
    Ok(buf)
}

/// Decode, strip and re-encode as PNG entirely in memory
pub fn strip_bytes(bytes: &[u8], options: StripOptions) -> Result<Vec<u8>> {
    let img = decode(bytes)?;
    encode_png(&strip(&img, options))
}

/// Write `bytes` to a temporary file next to `output`, then rename it over `output`.
/// A failed write leaves whatever was at `output` untouched.
fn write_atomically(output: &Path, bytes: &[u8]) -> io::Result<()> {
    let parent = match output.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = NamedTempFile::new_in(parent)?;
    file.write_all(bytes)?;
    file.as_file().sync_all()?;
    file.persist(output).map_err(|e| e.error)?;
    Ok(())
}

/// Strip `input` and write the PNG to `output`.
/// Nothing is written unless decoding, stripping and encoding all succeed.
pub fn strip_file(input: &Path, output: &Path, options: StripOptions) -> Result<StripReport> {
    let bytes = fs::read(input)
        .map_err(|e| StripError::Decode(Some(input.to_path_buf()), ImageError::IoError(e)))?;
    let img = decode(&bytes).map_err(|e| e.with_path(input))?;
    log::debug!(
        "Loaded image: {:?} ({}x{}, {:?})",
        input,
        img.width(),
        img.height(),
        img.color()
    );

    let stripped = strip(&img, options);
    let encoded = encode_png(&stripped).map_err(|e| e.with_path(output))?;

    let is_png = output
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("png"));
    if !is_png {
        log::warn!("Output {:?} does not end in .png; writing PNG data anyway", output);
    }

    write_atomically(output, &encoded)
        .map_err(|e| StripError::Encode(Some(output.to_path_buf()), ImageError::IoError(e)))?;

    Ok(StripReport {
        original: (img.width(), img.height()),
        output: stripped.dimensions(),
    })
}
