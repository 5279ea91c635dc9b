//! High-level API: the [`PngReducer`] builder and unified [`ReduceError`].

mod builder;
mod error;

pub use builder::PngReducer;
pub use error::ReduceError;
