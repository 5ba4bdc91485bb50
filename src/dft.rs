//! Direct evaluation of the DFT definition.
//!
//! The forward transform is unscaled:
//! `X[k] = sum_n x[n] * exp(-2*pi*i*k*n/N)`.
//! The inverse carries the `1/N` factor.
use crate::error::{DftError, InvalidInput};
use crate::signal::{Signal, Spectrum};
use crate::{from_f64, Complex, DftNum, Zero};
use std::f64::consts::PI;

/// Sign of the exponent of the transform kernel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Direction {
    Forward,
    Inverse,
}

/// Roots of unity `exp(∓2*pi*i*m/n)` for `m in 0..n`.
///
/// Cosine and sine are evaluated in `f64` regardless of `T`.
#[allow(clippy::cast_precision_loss)]
pub(crate) fn twiddles<T: DftNum>(n: usize, direction: Direction) -> Vec<Complex<T>> {
    let sign = match direction {
        Direction::Forward => -1.0,
        Direction::Inverse => 1.0,
    };
    (0..n)
        .map(|m| {
            let angle = sign * 2.0 * PI * m as f64 / n as f64;
            Complex::new(from_f64(angle.cos()), from_f64(angle.sin()))
        })
        .collect()
}

/// O(N²) summation of `data` against a twiddle table of the same length.
///
/// Only `out.len()` coefficients are computed, which lets real transforms
/// skip the redundant half.
pub(crate) fn sum_direct<T: DftNum>(
    data: &[Complex<T>],
    twiddles: &[Complex<T>],
    out: &mut [Complex<T>],
) {
    let n = data.len();
    for (k, o) in out.iter_mut().enumerate() {
        let mut acc = Complex::zero();
        // m tracks (k * j) mod n
        let mut m = 0;
        for x in data {
            acc = acc + *x * twiddles[m];
            m += k;
            if m >= n {
                m -= n;
            }
        }
        *o = acc;
    }
}

pub(crate) fn check_samples<T: DftNum>(samples: &[Complex<T>]) -> Result<(), DftError> {
    if samples.is_empty() {
        return Err(DftError::empty());
    }
    match samples
        .iter()
        .position(|x| !(x.re.is_finite() && x.im.is_finite()))
    {
        Some(index) => Err(InvalidInput::NonFinite { index }.into()),
        None => Ok(()),
    }
}

/// Forward transform of validated samples.
pub(crate) fn forward_direct<T: DftNum>(samples: &[Complex<T>]) -> Vec<Complex<T>> {
    let table = twiddles(samples.len(), Direction::Forward);
    let mut out = vec![Complex::zero(); samples.len()];
    sum_direct(samples, &table, &mut out);
    out
}

/// Inverse transform of validated coefficients, scaled by `1/N`.
#[allow(clippy::cast_precision_loss)]
pub(crate) fn inverse_direct<T: DftNum>(coefficients: &[Complex<T>]) -> Vec<Complex<T>> {
    let n = coefficients.len();
    let table = twiddles(n, Direction::Inverse);
    let mut out = vec![Complex::zero(); n];
    sum_direct(coefficients, &table, &mut out);
    let scale: T = from_f64(1. / n as f64);
    for x in &mut out {
        *x = *x * scale;
    }
    out
}

/// Discrete Fourier Transform of complex samples.
///
/// Direct evaluation of the definition.
///
/// # Errors
/// `InvalidInput` if `samples` is empty or holds a NaN or infinity.
///
/// # Example
/// ```
/// use ndrustdft::{dft, Complex};
///
/// let mut x = vec![Complex::new(0f64, 0.); 8];
/// x[0] = Complex::new(1., 0.);
/// let spectrum = dft(&x).unwrap();
/// for c in spectrum.iter() {
///     assert!((c - Complex::new(1., 0.)).norm() < 1e-12);
/// }
/// ```
pub fn dft<T: DftNum>(samples: &[Complex<T>]) -> Result<Spectrum<T>, DftError> {
    Ok(Signal::new(samples.to_vec())?.spectrum())
}

/// Discrete Fourier Transform of real samples.
///
/// Returns all `N` coefficients; for the non-redundant half see
/// [`crate::ndrdft`].
///
/// # Errors
/// `InvalidInput` if `samples` is empty or holds a NaN or infinity.
pub fn rdft<T: DftNum>(samples: &[T]) -> Result<Spectrum<T>, DftError> {
    Ok(Signal::from_real(samples)?.spectrum())
}

/// Inverse Discrete Fourier Transform, scaled by `1/N`.
///
/// # Errors
/// `InvalidInput` if `coefficients` is empty or holds a NaN or infinity.
pub fn idft<T: DftNum>(coefficients: &[Complex<T>]) -> Result<Vec<Complex<T>>, DftError> {
    check_samples(coefficients)?;
    Ok(inverse_direct(coefficients))
}


#[cfg(test)]
mod proptest_tests {
    use super::*;
    use proptest::prelude::*;

    fn complex_vec(len: std::ops::Range<usize>) -> impl Strategy<Value = Vec<Complex<f64>>> {
        proptest::collection::vec((-10.0f64..10.0, -10.0f64..10.0), len)
            .prop_map(|v| v.into_iter().map(|(re, im)| Complex::new(re, im)).collect())
    }

    proptest! {
        #[test]
        fn length_is_preserved(x in complex_vec(1..40)) {
            prop_assert_eq!(dft(&x).unwrap().len(), x.len());
        }

        #[test]
        fn transform_is_linear(
            pair in (1usize..32).prop_flat_map(|n| (complex_vec(n..n + 1), complex_vec(n..n + 1))),
            a in -3.0f64..3.0,
            b in -3.0f64..3.0,
        ) {
            let (x, y) = pair;
            let mixed: Vec<Complex<f64>> = x.iter().zip(&y).map(|(p, q)| *p * a + *q * b).collect();
            let lhs = dft(&mixed).unwrap();
            let (fx, fy) = (dft(&x).unwrap(), dft(&y).unwrap());
            for k in 0..x.len() {
                let rhs = fx[k] * a + fy[k] * b;
                prop_assert!((lhs[k] - rhs).norm() < 1e-9 * x.len() as f64, "k={} {} vs {}", k, lhs[k], rhs);
            }
        }

        #[test]
        fn real_input_is_conjugate_symmetric(x in proptest::collection::vec(-10.0f64..10.0, 1..40)) {
            let spectrum = rdft(&x).unwrap();
            let n = x.len();
            for k in 0..n {
                let mirror = spectrum[(n - k) % n].conj();
                prop_assert!((spectrum[k] - mirror).norm() < 1e-9, "k={}", k);
            }
        }

        #[test]
        fn inverse_round_trips(x in complex_vec(1..40)) {
            let back = idft(dft(&x).unwrap().coefficients()).unwrap();
            for (a, b) in x.iter().zip(&back) {
                prop_assert!((a - b).norm() < 1e-9);
            }
        }
    }
}
