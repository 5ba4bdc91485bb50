//! Time-domain signals and their spectra.
use crate::dft::{check_samples, forward_direct, inverse_direct};
use crate::error::DftError;
use crate::{from_f64, Complex, DftNum};
use ndarray::Array1;
use std::f64::consts::PI;
use std::ops::Index;

/// Finite sequence of samples `x[0..N]`, `N >= 1`, all finite.
///
/// Samples are stored as complex numbers; a signal built with
/// [`Signal::from_real`] remembers that its imaginary parts are zero.
#[derive(Debug, Clone, PartialEq)]
pub struct Signal<T> {
    samples: Vec<Complex<T>>,
    real: bool,
}

#[allow(clippy::len_without_is_empty)]
impl<T: DftNum> Signal<T> {
    /// Creates a signal from complex samples.
    ///
    /// # Errors
    /// `InvalidInput` if `samples` is empty or holds a NaN or infinity.
    pub fn new(samples: Vec<Complex<T>>) -> Result<Self, DftError> {
        check_samples(&samples)?;
        Ok(Signal {
            samples,
            real: false,
        })
    }

    /// Creates a signal from real samples.
    ///
    /// # Errors
    /// `InvalidInput` if `samples` is empty or holds a NaN or infinity.
    pub fn from_real(samples: &[T]) -> Result<Self, DftError> {
        let samples: Vec<Complex<T>> = samples.iter().map(|x| Complex::new(*x, T::zero())).collect();
        check_samples(&samples)?;
        Ok(Signal {
            samples,
            real: true,
        })
    }

    /// Unit impulse of length `n`: `x[0] = 1`, all other samples zero.
    ///
    /// Its spectrum is one in every bin.
    ///
    /// # Errors
    /// `InvalidInput` if `n` is zero.
    pub fn impulse(n: usize) -> Result<Self, DftError> {
        let mut samples = vec![T::zero(); n];
        if let Some(first) = samples.first_mut() {
            *first = T::one();
        }
        Self::from_real(&samples)
    }

    /// `sin(2*pi*cycles*n/N)` sampled at `n` points.
    ///
    /// With `0 < cycles < n/2` only the bins `cycles` and `n - cycles`
    /// of its spectrum are non-zero, both with magnitude `n/2`.
    ///
    /// # Errors
    /// `InvalidInput` if `n` is zero.
    #[allow(clippy::cast_precision_loss)]
    pub fn sine(n: usize, cycles: usize) -> Result<Self, DftError> {
        let samples: Vec<T> = (0..n)
            .map(|i| from_f64((2. * PI * (((cycles % n) * i) % n) as f64 / n as f64).sin()))
            .collect();
        Self::from_real(&samples)
    }

    /// Number of samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether the signal was built from real samples.
    #[must_use]
    pub fn is_real(&self) -> bool {
        self.real
    }

    /// The samples.
    #[must_use]
    pub fn samples(&self) -> &[Complex<T>] {
        &self.samples
    }

    /// Real parts of the samples.
    #[must_use]
    pub fn re(&self) -> Array1<T> {
        self.samples.iter().map(|x| x.re).collect()
    }

    /// Imaginary parts of the samples.
    #[must_use]
    pub fn im(&self) -> Array1<T> {
        self.samples.iter().map(|x| x.im).collect()
    }

    /// Spectrum of the signal, by direct evaluation of the definition.
    ///
    /// For other backends see [`crate::DftHandler::process`].
    #[must_use]
    pub fn spectrum(&self) -> Spectrum<T> {
        Spectrum {
            coefficients: forward_direct(&self.samples),
        }
    }

    /// Consumes the signal and returns its samples.
    #[must_use]
    pub fn into_samples(self) -> Vec<Complex<T>> {
        self.samples
    }
}

impl<T> Index<usize> for Signal<T> {
    type Output = Complex<T>;

    fn index(&self, n: usize) -> &Complex<T> {
        &self.samples[n]
    }
}

/// Frequency-domain coefficients `X[0..N]` of a [`Signal`] of length `N`.
#[derive(Debug, Clone, PartialEq)]
pub struct Spectrum<T> {
    coefficients: Vec<Complex<T>>,
}

#[allow(clippy::len_without_is_empty)]
impl<T: DftNum> Spectrum<T> {
    /// Wraps coefficients obtained elsewhere, e.g. to invert them.
    ///
    /// # Errors
    /// `InvalidInput` if `coefficients` is empty or holds a NaN or infinity.
    pub fn from_coefficients(coefficients: Vec<Complex<T>>) -> Result<Self, DftError> {
        check_samples(&coefficients)?;
        Ok(Spectrum { coefficients })
    }

    /// Output of a transform on already validated data.
    pub(crate) fn from_raw(coefficients: Vec<Complex<T>>) -> Self {
        Spectrum { coefficients }
    }

    /// Number of coefficients; equals the length of the source signal.
    #[must_use]
    pub fn len(&self) -> usize {
        self.coefficients.len()
    }

    /// The coefficients.
    #[must_use]
    pub fn coefficients(&self) -> &[Complex<T>] {
        &self.coefficients
    }

    /// Iterator over the coefficients.
    pub fn iter(&self) -> std::slice::Iter<'_, Complex<T>> {
        self.coefficients.iter()
    }

    /// Coefficient `X[k]`, if `k < N`.
    #[must_use]
    pub fn get(&self, k: usize) -> Option<Complex<T>> {
        self.coefficients.get(k).copied()
    }

    /// Magnitude spectrum `|X[k]| = sqrt(re² + im²)`.
    #[must_use]
    pub fn magnitude(&self) -> Array1<T> {
        self.coefficients.iter().map(|c| c.norm()).collect()
    }

    /// Phase spectrum `atan2(im, re)` in radians.
    #[must_use]
    pub fn phase(&self) -> Array1<T> {
        self.coefficients.iter().map(|c| c.arg()).collect()
    }

    /// Real parts.
    #[must_use]
    pub fn re(&self) -> Array1<T> {
        self.coefficients.iter().map(|c| c.re).collect()
    }

    /// Imaginary parts.
    #[must_use]
    pub fn im(&self) -> Array1<T> {
        self.coefficients.iter().map(|c| c.im).collect()
    }

    /// Inverse transform back to the time domain (scaled by `1/N`).
    #[must_use]
    pub fn inverse(&self) -> Vec<Complex<T>> {
        inverse_direct(&self.coefficients)
    }

    /// Consumes the spectrum and returns its coefficients.
    #[must_use]
    pub fn into_coefficients(self) -> Vec<Complex<T>> {
        self.coefficients
    }
}

impl<T> Index<usize> for Spectrum<T> {
    type Output = Complex<T>;

    fn index(&self, k: usize) -> &Complex<T> {
        &self.coefficients[k]
    }
}
