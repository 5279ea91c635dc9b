//! Unified error type for the public API.

use thiserror::Error;

use crate::encode::EncodeError;
use crate::quant::QuantizeError;

/// Unified error type wrapping every failure the high-level API can
/// produce, for convenient `?` propagation in application code.
#[derive(Debug, Error)]
pub enum ReduceError {
    /// Quantization configuration was rejected.
    #[error("quantize error: {0}")]
    Quantize(#[from] QuantizeError),

    /// PNG encoding failed.
    #[error("encode error: {0}")]
    Encode(#[from] EncodeError),
}
