use thiserror::Error;

/// The uniform failure taxonomy surfaced by every fallible operation in this
/// crate. `InvalidArgument` is reserved for call sites that
/// want a `Result` rather than a panic for a programmer error; most
/// constructors here still `assert!` on out-of-range values (`Version::new`,
/// `Mask::new`, `ErrorCorrectionLevel`) since those are precondition
/// violations, not recoverable runtime conditions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum BarcodeError {
    /// The payload needs more bits than the chosen (or largest available)
    /// version/symbology can carry.
    #[error("data needs {have_bits} bits but the capacity is {capacity_bits} bits")]
    InputTooLong {
        have_bits: usize,
        capacity_bits: usize,
    },

    /// A payload byte falls outside the symbology's accepted code points.
    #[error("byte {byte:#04x} is not valid for {symbology_name}")]
    InvalidCharacter {
        byte: u8,
        symbology_name: &'static str,
    },

    /// Payload length falls outside `[min, max]` for the symbology.
    #[error("length {actual} is outside [{min}, {max}] for {symbology_name}")]
    InvalidLength {
        actual: usize,
        min: usize,
        max: usize,
        symbology_name: &'static str,
    },

    /// A mode, version, or error-correction ordinal was out of range.
    #[error("invalid argument")]
    InvalidArgument,

    /// Numeric-mode input contained a non-digit character.
    #[error("non-digit character in numeric input")]
    InvalidDigits,
}
