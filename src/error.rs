//! Error type shared by all transforms.
use thiserror::Error;

/// Errors returned by the transforms of this crate.
///
/// There is a single kind of failure: the input is not something a
/// Fourier transform is defined on. The wrapped [`InvalidInput`] names
/// the reason.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DftError {
    /// The signal, spectrum or array handed to a transform was rejected.
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInput),
}

/// Reason an input was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidInput {
    /// Zero-length signal or transform.
    #[error("signal is empty")]
    Empty,

    /// A sample is NaN or infinite.
    #[error("sample {index} is not finite")]
    NonFinite {
        /// Position of the first offending sample (flat, logical order).
        index: usize,
    },

    /// Lane length differs from the length the handler was built for.
    #[error("size mismatch, got {found} expected {expected}")]
    LengthMismatch {
        /// Length the handler was planned for.
        expected: usize,
        /// Length actually supplied.
        found: usize,
    },

    /// Input and output arrays differ outside the transformed axis.
    #[error("input and output arrays differ in shape outside the transform axis")]
    ShapeMismatch,

    /// Transform axis does not exist.
    #[error("axis {axis} out of bounds for array of dimension {ndim}")]
    AxisOutOfBounds {
        /// Requested axis.
        axis: usize,
        /// Dimensionality of the array.
        ndim: usize,
    },

    /// Radix-2 transforms need a power-of-two length.
    #[error("length {0} is not a power of two")]
    NotPowerOfTwo(usize),
}

impl DftError {
    /// Shorthand for `DftError::InvalidInput(InvalidInput::Empty)`.
    pub(crate) fn empty() -> Self {
        InvalidInput::Empty.into()
    }

    /// Returns the rejection reason.
    #[must_use]
    pub fn reason(&self) -> &InvalidInput {
        match self {
            DftError::InvalidInput(reason) => reason,
        }
    }
}
