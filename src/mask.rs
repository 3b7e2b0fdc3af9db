use image::{GrayImage, Luma, Rgba, RgbaImage};
use imageproc::map::map_colors;

use crate::error::{Result, StripError};

const BACKGROUND: Luma<u8> = Luma([255]);
const FOREGROUND: Luma<u8> = Luma([0]);

/// Brightness cutoff: a pixel is background when every color channel is above it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Threshold(u8);

impl Threshold {
    /// Validate an integer threshold, which must lie in [0, 255]
    pub fn new(value: i64) -> Result<Self> {
        u8::try_from(value).map(Threshold).map_err(|_| {
            StripError::InvalidArgument(format!(
                "threshold {} is outside the range 0..=255",
                value
            ))
        })
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Strict on all three channels; alpha is ignored
    pub fn is_background(self, pixel: Rgba<u8>) -> bool {
        let [r, g, b, _] = pixel.0;
        r > self.0 && g > self.0 && b > self.0
    }
}

impl From<u8> for Threshold {
    fn from(value: u8) -> Self {
        Threshold(value)
    }
}

/// Build a mask where 255 marks background pixels
pub fn background_mask(img: &RgbaImage, threshold: Threshold) -> GrayImage {
    map_colors(img, |pixel| {
        if threshold.is_background(pixel) {
            BACKGROUND
        } else {
            FOREGROUND
        }
    })
}

/// Zero the alpha of every masked pixel, leaving RGB untouched.
/// Returns the number of pixels that were masked.
pub fn apply_mask(img: &mut RgbaImage, mask: &GrayImage) -> usize {
    debug_assert_eq!(img.dimensions(), mask.dimensions());

    let mut masked = 0;
    for (pixel, flag) in img.pixels_mut().zip(mask.pixels()) {
        if *flag == BACKGROUND {
            pixel[3] = 0;
            masked += 1;
        }
    }

    masked
}
