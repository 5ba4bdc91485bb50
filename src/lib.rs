//! # ndrustdft: discrete Fourier transforms of signals and *n*-dimensional arrays
//!
//! This library evaluates the unscaled forward Discrete Fourier Transform
//!
//! ```text
//! X[k] = sum_{n=0}^{N-1} x[n] * exp(-2*pi*i*k*n/N)
//! ```
//!
//! of real or complex signals, its inverse, and the same transforms applied
//! lane by lane along one axis of an `ndarray` array.
//!
//! The [`DftHandler`] holds the transform plan of a given length. It can
//! evaluate the definition directly (O(N²), [`Backend::Direct`], the default)
//! or delegate to a `RustFFT` plan ([`Backend::Fast`]). Both backends
//! produce the same spectrum up to floating-point rounding.
//!
//! Besides the floating-point transforms, the [`fixed`] module contains a
//! radix-2 transform in Q7.8 fixed-point arithmetic, and [`report`] formats
//! signals and spectra for display.
//!
//! ## Parallel
//! With the `parallel` feature (default) every *n*-dimensional transform
//! has a `_par` version which leverages the parallel abilities of ndarray.
//!
//! ## Example
//! Spectrum of a sampled sine wave
//! ```
//! use ndrustdft::{Complex, Signal};
//!
//! let signal = Signal::<f64>::sine(8, 1).unwrap();
//! let spectrum = signal.spectrum();
//! assert!((spectrum[1] - Complex::new(0., -4.)).norm() < 1e-9);
//! assert!((spectrum[7] - Complex::new(0., 4.)).norm() < 1e-9);
//! ```
//!
//! 2-Dimensional real-to-complex transform along first axis
//! ```
//! use ndarray::{Array, Dim, Ix};
//! use ndrustdft::{ndrdft, Complex, DftHandler};
//!
//! let (nx, ny) = (6, 4);
//! let mut data = Array::<f64, Dim<[Ix; 2]>>::zeros((nx, ny));
//! let mut vhat = Array::<Complex<f64>, Dim<[Ix; 2]>>::zeros((nx / 2 + 1, ny));
//! for (i, v) in data.iter_mut().enumerate() {
//!     *v = i as f64;
//! }
//! let handler: DftHandler<f64> = DftHandler::new(nx).unwrap();
//! ndrdft(&data, &mut vhat, &handler, 0).unwrap();
//! ```
#![warn(missing_docs)]
extern crate ndarray;
extern crate rustfft;

pub mod dft;
pub mod error;
pub mod fixed;
pub mod handler;
pub mod report;
pub mod signal;

pub use dft::{dft, idft, rdft};
pub use error::{DftError, InvalidInput};
pub use handler::{ndidft, ndirdft, nddft, ndrdft, Backend, DftHandler, Normalization};
#[cfg(feature = "parallel")]
pub use handler::{nddft_par, ndidft_par, ndirdft_par, ndrdft_par};
pub use rustfft::num_complex::Complex;
pub use rustfft::num_traits::Zero;
pub use rustfft::FftNum;
pub use signal::{Signal, Spectrum};

use num_traits::Float;
use std::fmt::Display;

/// Sample type accepted by the floating-point transforms.
///
/// Implemented for every type that `RustFFT` can transform and that is a
/// displayable float, in practice `f32` and `f64`.
pub trait DftNum: FftNum + Float + Display {}

impl<T: FftNum + Float + Display> DftNum for T {}

/// Converts an `f64` constant (twiddle, scale factor) into the sample type.
pub(crate) fn from_f64<T: DftNum>(value: f64) -> T {
    T::from_f64(value).unwrap_or_else(T::nan)
}
