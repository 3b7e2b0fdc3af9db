use image::imageops;
use image::RgbaImage;

/// Pixel rectangle; left/top inclusive, right/bottom exclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl BoundingBox {
    pub fn width(&self) -> u32 {
        self.right - self.left
    }

    pub fn height(&self) -> u32 {
        self.bottom - self.top
    }
}

/// Find the smallest box containing every pixel with non-zero alpha
pub fn find_content_bounds(img: &RgbaImage) -> Option<BoundingBox> {
    let mut bounds: Option<BoundingBox> = None;

    for (x, y, pixel) in img.enumerate_pixels() {
        if pixel[3] == 0 {
            continue;
        }
        let b = bounds.get_or_insert(BoundingBox {
            left: x,
            top: y,
            right: x + 1,
            bottom: y + 1,
        });
        b.left = b.left.min(x);
        b.right = b.right.max(x + 1);
        b.top = b.top.min(y);
        b.bottom = b.bottom.max(y + 1);
    }

    bounds
}

/// Crop image to its non-transparent content.
/// A fully transparent image is returned at its original size.
pub fn crop_to_content(img: &RgbaImage) -> RgbaImage {
    let bounds = match find_content_bounds(img) {
        Some(b) => b,
        None => {
            log::debug!("No opaque content, skipping crop");
            return img.clone();
        }
    };

    log::debug!("Content bounds: {:?}", bounds);

    imageops::crop_imm(img, bounds.left, bounds.top, bounds.width(), bounds.height()).to_image()
}
