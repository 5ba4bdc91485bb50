//! Fixed-point radix-2 transform for targets without a floating-point unit.
//!
//! Samples are Q7.8 numbers ([`Q8`]): 1 sign bit, 7 integer bits and
//! 8 fractional bits packed in an `i16`. The transform is an in-place
//! decimation-in-time FFT, so lengths must be powers of two. [`Q7`] is the
//! 8-bit Q0.7 format used to store samples in `[-1, 1)`.
use crate::error::{DftError, InvalidInput};
use crate::Complex;
use std::f64::consts::PI;
use std::ops::{Add, Mul, Sub};

/// Q7.8 signed fixed-point number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Q8(pub i16);

impl Q8 {
    /// Number of fractional bits.
    pub const FRAC_BITS: u32 = 8;
    /// 1.0
    pub const ONE: Q8 = Q8(0x0100);
    /// Smallest representable value as a float.
    pub const MIN_F32: f32 = -128.0;
    /// Largest representable value as a float.
    pub const MAX_F32: f32 = 127.996_093_75;

    /// Clamps `value` to the Q7.8 range and truncates toward zero.
    ///
    /// NaN maps to the lower bound.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_f32(value: f32) -> Self {
        Q8((value.max(Self::MIN_F32).min(Self::MAX_F32) * 256.0) as i16)
    }

    /// Value as a float.
    #[must_use]
    pub fn to_f32(self) -> f32 {
        f32::from(self.0) / 256.0
    }

    /// Raw two's-complement bit pattern.
    #[must_use]
    #[allow(clippy::cast_sign_loss)]
    pub fn bits(self) -> u16 {
        self.0 as u16
    }
}

impl Add for Q8 {
    type Output = Q8;

    fn add(self, rhs: Q8) -> Q8 {
        Q8(self.0.wrapping_add(rhs.0))
    }
}

impl Sub for Q8 {
    type Output = Q8;

    fn sub(self, rhs: Q8) -> Q8 {
        Q8(self.0.wrapping_sub(rhs.0))
    }
}

impl Mul for Q8 {
    type Output = Q8;

    #[allow(clippy::cast_possible_truncation)]
    fn mul(self, rhs: Q8) -> Q8 {
        Q8(((i32::from(self.0) * i32::from(rhs.0)) >> Q8::FRAC_BITS) as i16)
    }
}

/// Q0.7 signed fixed-point number, range `[-1, 127/128]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Q7(pub i8);

impl Q7 {
    /// Largest representable value as a float, `127/128`.
    pub const MAX_F32: f32 = 0.992_187_5;

    /// Saturates `value` to `[-1, 127/128]` and rounds to the nearest step,
    /// halves away from zero.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_f32(value: f32) -> Self {
        let mut value = value;
        if value >= 1.0 {
            value = Self::MAX_F32;
        }
        if value < -1.0 {
            value = -1.0;
        }
        Q7((value * 128.0).round() as i8)
    }

    /// Value as a float.
    #[must_use]
    pub fn to_f32(self) -> f32 {
        f32::from(self.0) / 128.0
    }

    /// Raw two's-complement bit pattern.
    #[must_use]
    #[allow(clippy::cast_sign_loss)]
    pub fn bits(self) -> u8 {
        self.0 as u8
    }
}

/// Quantizes a buffer of floats to Q0.7.
#[must_use]
pub fn to_q7(input: &[f32]) -> Vec<Q7> {
    input.iter().map(|v| Q7::from_f32(*v)).collect()
}

/// Restores a Q0.7 buffer to floats.
#[must_use]
pub fn from_q7(input: &[Q7]) -> Vec<f32> {
    input.iter().map(|q| q.to_f32()).collect()
}

/// Complex number with Q7.8 parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FixedComplex {
    /// Real part.
    pub re: Q8,
    /// Imaginary part.
    pub im: Q8,
}

impl FixedComplex {
    /// Creates a complex number from raw Q7.8 words.
    #[must_use]
    pub const fn from_bits(re: i16, im: i16) -> Self {
        FixedComplex {
            re: Q8(re),
            im: Q8(im),
        }
    }

    /// Quantizes both parts, see [`Q8::from_f32`].
    #[must_use]
    pub fn from_f32(re: f32, im: f32) -> Self {
        FixedComplex {
            re: Q8::from_f32(re),
            im: Q8::from_f32(im),
        }
    }

    /// Value as a floating-point complex number.
    #[must_use]
    pub fn to_complex(self) -> Complex<f32> {
        Complex::new(self.re.to_f32(), self.im.to_f32())
    }
}

impl Mul for FixedComplex {
    type Output = FixedComplex;

    /// Both cross products are summed at 32 bits before the shift.
    #[allow(clippy::cast_possible_truncation)]
    fn mul(self, rhs: FixedComplex) -> FixedComplex {
        let (a, b, c, d) = (
            i32::from(self.re.0),
            i32::from(self.im.0),
            i32::from(rhs.re.0),
            i32::from(rhs.im.0),
        );
        let re = a.wrapping_mul(c).wrapping_sub(b.wrapping_mul(d));
        let im = a.wrapping_mul(d).wrapping_add(b.wrapping_mul(c));
        FixedComplex {
            re: Q8((re >> Q8::FRAC_BITS) as i16),
            im: Q8((im >> Q8::FRAC_BITS) as i16),
        }
    }
}

/// Quantizes real samples into Q7.8 complex samples.
#[must_use]
pub fn fixed_signal(samples: &[f32]) -> Vec<FixedComplex> {
    samples
        .iter()
        .map(|x| FixedComplex::from_f32(*x, 0.))
        .collect()
}

/// Twiddle factors `exp(-2*pi*i*k/n)` for `k in 0..n/2`, in Q7.8.
///
/// For `n = 8` this is `{0x0100, 0}, {0x00B5, 0xFF4B}, {0, 0xFF00},
/// {0xFF4B, 0xFF4B}`.
#[must_use]
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
pub fn twiddles_q8(n: usize) -> Vec<FixedComplex> {
    (0..n / 2)
        .map(|k| {
            let angle = -2. * PI * k as f64 / n as f64;
            FixedComplex::from_f32(angle.cos() as f32, angle.sin() as f32)
        })
        .collect()
}

/// Reverses the lowest `bits` bits of `index`.
#[must_use]
pub fn bit_reverse(index: usize, bits: u32) -> usize {
    if bits == 0 {
        return 0;
    }
    index.reverse_bits() >> (usize::BITS - bits)
}

fn butterfly(a: FixedComplex, b: FixedComplex, w: FixedComplex) -> (FixedComplex, FixedComplex) {
    let wb = w * b;
    (
        FixedComplex {
            re: a.re + wb.re,
            im: a.im + wb.im,
        },
        FixedComplex {
            re: a.re - wb.re,
            im: a.im - wb.im,
        },
    )
}

/// Caller guarantees a power-of-two length.
fn radix2_in_place(data: &mut [FixedComplex]) {
    let n = data.len();
    let bits = n.trailing_zeros();
    for i in 0..n {
        let j = bit_reverse(i, bits);
        if j > i {
            data.swap(i, j);
        }
    }
    let twiddles = twiddles_q8(n);
    let mut len = 2;
    while len <= n {
        let half = len / 2;
        let step = n / len;
        for start in (0..n).step_by(len) {
            for j in 0..half {
                let (a, b) = butterfly(data[start + j], data[start + j + half], twiddles[j * step]);
                data[start + j] = a;
                data[start + j + half] = b;
            }
        }
        len <<= 1;
    }
}

/// In-place forward FFT of Q7.8 samples.
///
/// The transform is unscaled, so the output grows by up to a factor `n`
/// and wraps around on overflow like 16-bit hardware arithmetic.
///
/// # Errors
/// `InvalidInput` if `data` is empty or its length is not a power of two.
///
/// # Example
/// ```
/// use ndrustdft::fixed::{fft_radix2_q8, FixedComplex, Q8};
///
/// let mut x = [FixedComplex::default(); 4];
/// x[0].re = Q8::ONE;
/// fft_radix2_q8(&mut x).unwrap();
/// assert!(x.iter().all(|c| c.re == Q8::ONE && c.im == Q8(0)));
/// ```
pub fn fft_radix2_q8(data: &mut [FixedComplex]) -> Result<(), DftError> {
    let n = data.len();
    if n == 0 {
        return Err(DftError::empty());
    }
    if !n.is_power_of_two() {
        return Err(InvalidInput::NotPowerOfTwo(n).into());
    }
    radix2_in_place(data);
    Ok(())
}

/// 8-point forward FFT of Q7.8 samples.
#[must_use]
pub fn fft8_q8(input: &[FixedComplex; 8]) -> [FixedComplex; 8] {
    let mut out = *input;
    radix2_in_place(&mut out);
    out
}
