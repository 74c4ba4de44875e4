// src/error.rs - Error types for the lab core

use thiserror::Error;

/// Errors raised at the boundaries of the lab core.
///
/// Aggregation, classification and rendering are total on well-formed
/// input; only the parsing and transport boundaries can fail.
#[derive(Debug, Error)]
pub enum LabError {
    /// A color string that is not `#` followed by exactly 6 hex digits.
    #[error("invalid color format {input:?} (expected #rrggbb)")]
    InvalidColorFormat { input: String },

    /// An addition volume below the 1 mL minimum.
    #[error("invalid addition volume {volume_ml} mL (minimum is 1 mL)")]
    InvalidVolume { volume_ml: u32 },

    /// PNG encoding failed on the transport path.
    #[error("image encoding failed: {0}")]
    ImageEncoding(String),
}

pub type LabResult<T> = Result<T, LabError>;
