pub mod bounds;
pub mod cli;
pub mod error;
pub mod mask;
pub mod strip;

pub use bounds::{crop_to_content, find_content_bounds, BoundingBox};
pub use cli::{Cli, Preset};
pub use error::{Result, StripError};
pub use mask::{apply_mask, background_mask, Threshold};
pub use strip::{decode, encode_png, strip, strip_bytes, strip_file, StripOptions, StripReport};
