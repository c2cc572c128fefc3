//! Rendering module: pixel rasters, stroke painting, trimming and encoding

pub mod encode;
pub mod paint;
pub mod raster;
pub mod trim;

pub use encode::{decode, decode_png, encode, encode_png, EncodedImage};
pub use paint::{PaintCommand, Pen};
pub use raster::{Raster, Rgba};
pub use trim::{bounding_box, trim, trim_with_bounds, BoundingBox};
