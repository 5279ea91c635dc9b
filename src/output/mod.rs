//! Quantization output types.

mod indexed_image;

pub use indexed_image::IndexedImage;
