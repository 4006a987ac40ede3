use barcode_core::BarcodeError;
use thiserror::Error;

/// Failures surfaced by this crate's SVG serializer, layered on top of
/// `barcode-core`'s encoding/validation errors.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SvgError {
    #[error("barcode error: {0}")]
    Barcode(#[from] BarcodeError),

    #[error("invalid render dimensions: {width}x{height}")]
    InvalidDimensions { width: f64, height: f64 },
}
