//! Reusable transform plans and *n*-dimensional transforms.
//!
//! A [`DftHandler`] is built once for a transform length and then applied
//! to any number of signals, or to every lane of an ndarray along a
//! chosen axis via [`nddft`], [`ndidft`], [`ndrdft`] and [`ndirdft`].
use crate::dft::{check_samples, sum_direct, twiddles, Direction};
use crate::error::{DftError, InvalidInput};
use crate::signal::{Signal, Spectrum};
use crate::{from_f64, Complex, DftNum, Zero};
use log::{debug, trace};
use ndarray::{ArrayBase, ArrayView1, ArrayViewMut1, Axis, Data, DataMut, Dimension, Zip};
use rustfft::{Fft, FftPlanner};
use std::fmt;
use std::sync::Arc;

/// Declare procedural macro which creates functions for the individual
/// transforms, i.e. dft, idft, rdft and irdft.
/// The transforms are applied for each lane along the specified axis.
macro_rules! create_transform {
    (
        $(#[$meta:meta])* $i: ident, $a: ty, $b: ty, $p: ident, $len_in: ident, $len_out: ident, $finite: ident
    ) => {
        $(#[$meta])*
        ///
        /// # Errors
        /// `InvalidInput` if `axis` does not exist, the lane lengths do not
        /// match the handler, the arrays differ in shape along the other
        /// axes, or `input` holds a NaN or infinity. Nothing is written to
        /// `output` in that case.
        pub fn $i<R, S, T, D>(
            input: &ArrayBase<R, D>,
            output: &mut ArrayBase<S, D>,
            handler: &DftHandler<T>,
            axis: usize,
        ) -> Result<(), DftError>
        where
            T: DftNum,
            R: Data<Elem = $a>,
            S: Data<Elem = $b> + DataMut,
            D: Dimension,
        {
            check_shapes(
                input.shape(),
                output.shape(),
                axis,
                handler.$len_in(),
                handler.$len_out(),
            )?;
            check_finite(input.iter(), $finite::<T>)?;
            trace!("{} along axis {} of {:?}", stringify!($i), axis, input.shape());
            Zip::from(input.lanes(Axis(axis)))
                .and(output.lanes_mut(Axis(axis)))
                .for_each(|x, y| handler.$p(x, y));
            Ok(())
        }
    };
}

/// Similar to create_transform, but supports parallel computation.
#[cfg(feature = "parallel")]
macro_rules! create_transform_par {
    (
        $(#[$meta:meta])* $i: ident, $a: ty, $b: ty, $p: ident, $len_in: ident, $len_out: ident, $finite: ident
    ) => {
        $(#[$meta])*
        ///
        /// # Errors
        /// Same as the serial version.
        pub fn $i<R, S, T, D>(
            input: &ArrayBase<R, D>,
            output: &mut ArrayBase<S, D>,
            handler: &DftHandler<T>,
            axis: usize,
        ) -> Result<(), DftError>
        where
            T: DftNum,
            R: Data<Elem = $a>,
            S: Data<Elem = $b> + DataMut,
            D: Dimension,
        {
            check_shapes(
                input.shape(),
                output.shape(),
                axis,
                handler.$len_in(),
                handler.$len_out(),
            )?;
            check_finite(input.iter(), $finite::<T>)?;
            trace!("{} along axis {} of {:?}", stringify!($i), axis, input.shape());
            Zip::from(input.lanes(Axis(axis)))
                .and(output.lanes_mut(Axis(axis)))
                .par_for_each(|x, y| handler.$p(x, y));
            Ok(())
        }
    };
}

/// Algorithm used to evaluate the transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Backend {
    /// Direct O(N²) summation of the definition.
    #[default]
    Direct,
    /// `RustFFT` plan, O(N log N).
    Fast,
}

/// Scaling applied by the inverse transforms. The forward transform is
/// never scaled.
pub enum Normalization<T> {
    /// No normalization.
    None,
    /// Multiply by `1/N`, so that the inverse undoes the forward transform.
    Default,
    /// Apply a user-defined function to each inverse-transformed lane.
    Custom(fn(&mut [T])),
}

impl<T> Clone for Normalization<T> {
    fn clone(&self) -> Self {
        match self {
            Normalization::None => Normalization::None,
            Normalization::Default => Normalization::Default,
            Normalization::Custom(f) => Normalization::Custom(*f),
        }
    }
}

impl<T> fmt::Debug for Normalization<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Normalization::None => f.write_str("None"),
            Normalization::Default => f.write_str("Default"),
            Normalization::Custom(_) => f.write_str("Custom"),
        }
    }
}

enum Engine<T> {
    Direct {
        fwd: Vec<Complex<T>>,
        bwd: Vec<Complex<T>>,
    },
    Fast {
        fwd: Arc<dyn Fft<T>>,
        bwd: Arc<dyn Fft<T>>,
    },
}

impl<T: DftNum> Engine<T> {
    fn new(n: usize, backend: Backend) -> Self {
        match backend {
            Backend::Direct => Engine::Direct {
                fwd: twiddles(n, Direction::Forward),
                bwd: twiddles(n, Direction::Inverse),
            },
            Backend::Fast => {
                let mut planner = FftPlanner::<T>::new();
                Engine::Fast {
                    fwd: planner.plan_fft_forward(n),
                    bwd: planner.plan_fft_inverse(n),
                }
            }
        }
    }
}

/// # Transform plan of a fixed length.
///
/// Transforms complex or real data of length *n*. Real input produces
/// *n/2+1* coefficients in the *n*-dimensional real transforms
/// ([`ndrdft`], [`ndirdft`]); the remaining ones follow from conjugate
/// symmetry.
///
/// The handler is immutable once built, so one handler can be shared
/// between threads.
///
/// # Example
/// ```
/// use ndrustdft::{Backend, DftHandler, Signal};
///
/// let signal = Signal::<f64>::impulse(8).unwrap();
/// let handler = DftHandler::new(8).unwrap().backend(Backend::Fast);
/// let spectrum = handler.process(&signal).unwrap();
/// assert_eq!(spectrum.len(), 8);
/// ```
pub struct DftHandler<T> {
    n: usize,
    m: usize,
    backend: Backend,
    engine: Engine<T>,
    norm: Normalization<Complex<T>>,
}

#[allow(clippy::len_without_is_empty)]
impl<T: DftNum> DftHandler<T> {
    /// Creates a new `DftHandler` using [`Backend::Direct`] and
    /// [`Normalization::Default`].
    ///
    /// # Arguments
    ///
    /// * `n` - Length of the signals, or of the array axis, to transform.
    ///
    /// # Errors
    /// `InvalidInput` if `n` is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use ndrustdft::DftHandler;
    /// let handler: DftHandler<f64> = DftHandler::new(10).unwrap();
    /// ```
    pub fn new(n: usize) -> Result<Self, DftError> {
        if n == 0 {
            return Err(DftError::empty());
        }
        let backend = Backend::default();
        debug!("planning {:?} dft of length {}", backend, n);
        Ok(DftHandler {
            n,
            m: n / 2 + 1,
            backend,
            engine: Engine::new(n, backend),
            norm: Normalization::Default,
        })
    }

    /// Selects the evaluation backend.
    #[must_use]
    pub fn backend(mut self, backend: Backend) -> Self {
        if backend != self.backend {
            debug!("replanning dft of length {} as {:?}", self.n, backend);
            self.engine = Engine::new(self.n, backend);
            self.backend = backend;
        }
        self
    }

    /// Selects the scaling of the inverse transforms.
    #[must_use]
    pub fn normalization(mut self, norm: Normalization<Complex<T>>) -> Self {
        self.norm = norm;
        self
    }

    /// Transform length.
    #[must_use]
    pub fn len(&self) -> usize {
        self.n
    }

    /// Number of coefficients of a real-to-complex transform, *n/2+1*.
    #[must_use]
    pub fn real_spectrum_len(&self) -> usize {
        self.m
    }

    /// Active backend.
    #[must_use]
    pub fn get_backend(&self) -> Backend {
        self.backend
    }

    /// Spectrum of `signal`.
    ///
    /// # Errors
    /// `InvalidInput` if the signal length differs from the handler length.
    pub fn process(&self, signal: &Signal<T>) -> Result<Spectrum<T>, DftError> {
        check_len(self.n, signal.len())?;
        let mut buffer = signal.samples().to_vec();
        self.forward(&mut buffer);
        Ok(Spectrum::from_raw(buffer))
    }

    /// Inverse transform of `spectrum`, normalized as configured.
    ///
    /// # Errors
    /// `InvalidInput` if the spectrum length differs from the handler length.
    pub fn inverse(&self, spectrum: &Spectrum<T>) -> Result<Vec<Complex<T>>, DftError> {
        check_len(self.n, spectrum.len())?;
        let mut buffer = spectrum.coefficients().to_vec();
        self.backward(&mut buffer);
        Ok(buffer)
    }

    /// Forward transform of `data` in place.
    ///
    /// # Errors
    /// `InvalidInput` on a length mismatch or a non-finite sample.
    pub fn process_in_place(&self, data: &mut [Complex<T>]) -> Result<(), DftError> {
        check_len(self.n, data.len())?;
        check_samples(data)?;
        self.forward(data);
        Ok(())
    }

    /// Inverse transform of `data` in place, normalized as configured.
    ///
    /// # Errors
    /// `InvalidInput` on a length mismatch or a non-finite sample.
    pub fn inverse_in_place(&self, data: &mut [Complex<T>]) -> Result<(), DftError> {
        check_len(self.n, data.len())?;
        check_samples(data)?;
        self.backward(data);
        Ok(())
    }

    fn forward(&self, buffer: &mut [Complex<T>]) {
        match &self.engine {
            Engine::Direct { fwd, .. } => {
                let data = buffer.to_vec();
                sum_direct(&data, fwd, buffer);
            }
            Engine::Fast { fwd, .. } => fwd.process(buffer),
        }
    }

    fn backward(&self, buffer: &mut [Complex<T>]) {
        match &self.engine {
            Engine::Direct { bwd, .. } => {
                let data = buffer.to_vec();
                sum_direct(&data, bwd, buffer);
            }
            Engine::Fast { bwd, .. } => bwd.process(buffer),
        }
        self.normalize(buffer);
    }

    #[allow(clippy::cast_precision_loss)]
    fn normalize(&self, buffer: &mut [Complex<T>]) {
        match self.norm {
            Normalization::None => (),
            Normalization::Default => {
                let scale: T = from_f64(1. / self.n as f64);
                for b in buffer.iter_mut() {
                    *b = *b * scale;
                }
            }
            Normalization::Custom(f) => f(buffer),
        }
    }

    fn dft_lane(&self, data: ArrayView1<Complex<T>>, mut out: ArrayViewMut1<Complex<T>>) {
        let mut buffer: Vec<Complex<T>> = data.iter().copied().collect();
        self.forward(&mut buffer);
        for (b, d) in out.iter_mut().zip(buffer.iter()) {
            *b = *d;
        }
    }

    fn idft_lane(&self, data: ArrayView1<Complex<T>>, mut out: ArrayViewMut1<Complex<T>>) {
        let mut buffer: Vec<Complex<T>> = data.iter().copied().collect();
        self.backward(&mut buffer);
        for (b, d) in out.iter_mut().zip(buffer.iter()) {
            *b = *d;
        }
    }

    fn rdft_lane(&self, data: ArrayView1<T>, mut out: ArrayViewMut1<Complex<T>>) {
        let mut buffer: Vec<Complex<T>> = data.iter().map(|d| Complex::new(*d, T::zero())).collect();
        match &self.engine {
            // the upper half follows from symmetry
            Engine::Direct { fwd, .. } => {
                let real = buffer.clone();
                sum_direct(&real, fwd, &mut buffer[..self.m]);
            }
            Engine::Fast { fwd, .. } => fwd.process(&mut buffer),
        }
        for (b, d) in out.iter_mut().zip(buffer[..self.m].iter()) {
            *b = *d;
        }
    }

    /// Rebuilds the Hermitian spectrum `X[n-k] = conj(X[k])` from the
    /// first *n/2+1* coefficients before the inverse transform.
    fn irdft_lane(&self, data: ArrayView1<Complex<T>>, mut out: ArrayViewMut1<T>) {
        let mut buffer = vec![Complex::zero(); self.n];
        for (b, d) in buffer.iter_mut().zip(data.iter()) {
            *b = *d;
        }
        for k in self.m..self.n {
            buffer[k] = data[self.n - k].conj();
        }
        self.backward(&mut buffer);
        for (b, d) in buffer.iter().zip(out.iter_mut()) {
            *d = b.re;
        }
    }
}

fn check_len(expected: usize, found: usize) -> Result<(), DftError> {
    if expected == found {
        Ok(())
    } else {
        Err(InvalidInput::LengthMismatch { expected, found }.into())
    }
}

fn check_shapes(
    input: &[usize],
    output: &[usize],
    axis: usize,
    n_in: usize,
    n_out: usize,
) -> Result<(), DftError> {
    let ndim = input.len();
    if axis >= ndim {
        return Err(InvalidInput::AxisOutOfBounds { axis, ndim }.into());
    }
    if output.len() != ndim {
        return Err(InvalidInput::ShapeMismatch.into());
    }
    check_len(n_in, input[axis])?;
    check_len(n_out, output[axis])?;
    let same_elsewhere = input
        .iter()
        .zip(output.iter())
        .enumerate()
        .all(|(i, (a, b))| i == axis || a == b);
    if same_elsewhere {
        Ok(())
    } else {
        Err(InvalidInput::ShapeMismatch.into())
    }
}

fn check_finite<'a, A: 'a>(
    mut values: impl Iterator<Item = &'a A>,
    finite: fn(&A) -> bool,
) -> Result<(), DftError> {
    match values.position(|v| !finite(v)) {
        Some(index) => Err(InvalidInput::NonFinite { index }.into()),
        None => Ok(()),
    }
}

fn finite_complex<T: DftNum>(v: &Complex<T>) -> bool {
    v.re.is_finite() && v.im.is_finite()
}

fn finite_real<T: DftNum>(v: &T) -> bool {
    v.is_finite()
}

create_transform!(
    /// Complex-to-complex Fourier Transform (serial).
    /// # Example
    /// ```
    /// use ndarray::{Array, Dim, Ix};
    /// use ndrustdft::{nddft, Complex, DftHandler};
    ///
    /// let (nx, ny) = (6, 4);
    /// let mut data = Array::<Complex<f64>, Dim<[Ix; 2]>>::zeros((nx, ny));
    /// let mut vhat = Array::<Complex<f64>, Dim<[Ix; 2]>>::zeros((nx, ny));
    /// for (i, v) in data.iter_mut().enumerate() {
    ///     v.re = i as f64;
    ///     v.im = -1.0*i as f64;
    /// }
    /// let handler: DftHandler<f64> = DftHandler::new(ny).unwrap();
    /// nddft(&data, &mut vhat, &handler, 1).unwrap();
    /// ```
    nddft,
    Complex<T>,
    Complex<T>,
    dft_lane,
    len,
    len,
    finite_complex
);

create_transform!(
    /// Complex-to-complex Inverse Fourier Transform (serial).
    /// # Example
    /// ```
    /// use ndarray::{Array, Dim, Ix};
    /// use ndrustdft::{nddft, ndidft, Complex, DftHandler};
    ///
    /// let (nx, ny) = (6, 4);
    /// let mut data = Array::<Complex<f64>, Dim<[Ix; 2]>>::zeros((nx, ny));
    /// let mut vhat = Array::<Complex<f64>, Dim<[Ix; 2]>>::zeros((nx, ny));
    /// for (i, v) in data.iter_mut().enumerate() {
    ///     v.re = i as f64;
    ///     v.im = -1.0*i as f64;
    /// }
    /// let handler: DftHandler<f64> = DftHandler::new(ny).unwrap();
    /// nddft(&data, &mut vhat, &handler, 1).unwrap();
    /// ndidft(&vhat, &mut data, &handler, 1).unwrap();
    /// ```
    ndidft,
    Complex<T>,
    Complex<T>,
    idft_lane,
    len,
    len,
    finite_complex
);

create_transform!(
    /// Real-to-complex Fourier Transform (serial).
    ///
    /// Lanes of length *n* map to *n/2+1* coefficients.
    /// # Example
    /// ```
    /// use ndarray::{Array, Dim, Ix};
    /// use ndrustdft::{ndrdft, Complex, DftHandler};
    ///
    /// let (nx, ny) = (6, 4);
    /// let mut data = Array::<f64, Dim<[Ix; 2]>>::zeros((nx, ny));
    /// let mut vhat = Array::<Complex<f64>, Dim<[Ix; 2]>>::zeros((nx / 2 + 1, ny));
    /// for (i, v) in data.iter_mut().enumerate() {
    ///     *v = i as f64;
    /// }
    /// let handler: DftHandler<f64> = DftHandler::new(nx).unwrap();
    /// ndrdft(&data, &mut vhat, &handler, 0).unwrap();
    /// ```
    ndrdft,
    T,
    Complex<T>,
    rdft_lane,
    len,
    real_spectrum_len,
    finite_real
);

create_transform!(
    /// Complex-to-real inverse Fourier Transform (serial).
    /// # Example
    /// ```
    /// use ndarray::{Array, Dim, Ix};
    /// use ndrustdft::{ndirdft, Complex, DftHandler};
    ///
    /// let (nx, ny) = (6, 4);
    /// let mut data = Array::<f64, Dim<[Ix; 2]>>::zeros((nx, ny));
    /// let mut vhat = Array::<Complex<f64>, Dim<[Ix; 2]>>::zeros((nx / 2 + 1, ny));
    /// for (i, v) in vhat.iter_mut().enumerate() {
    ///     v.re = i as f64;
    /// }
    /// let handler: DftHandler<f64> = DftHandler::new(nx).unwrap();
    /// ndirdft(&vhat, &mut data, &handler, 0).unwrap();
    /// ```
    ndirdft,
    Complex<T>,
    T,
    irdft_lane,
    real_spectrum_len,
    len,
    finite_complex
);

#[cfg(feature = "parallel")]
create_transform_par!(
    /// Complex-to-complex Fourier Transform (parallel).
    ///
    /// Further infos: see [`nddft`]
    nddft_par,
    Complex<T>,
    Complex<T>,
    dft_lane,
    len,
    len,
    finite_complex
);

#[cfg(feature = "parallel")]
create_transform_par!(
    /// Complex-to-complex inverse Fourier Transform (parallel).
    ///
    /// Further infos: see [`ndidft`]
    ndidft_par,
    Complex<T>,
    Complex<T>,
    idft_lane,
    len,
    len,
    finite_complex
);

#[cfg(feature = "parallel")]
create_transform_par!(
    /// Real-to-complex Fourier Transform (parallel).
    ///
    /// Further infos: see [`ndrdft`]
    ndrdft_par,
    T,
    Complex<T>,
    rdft_lane,
    len,
    real_spectrum_len,
    finite_real
);

#[cfg(feature = "parallel")]
create_transform_par!(
    /// Complex-to-real inverse Fourier Transform (parallel).
    ///
    /// Further infos: see [`ndirdft`]
    ndirdft_par,
    Complex<T>,
    T,
    irdft_lane,
    real_spectrum_len,
    len,
    finite_complex
);

/// Tests
#[cfg(test)]
mod test {
    use super::*;
    use ndarray::{array, Array, Array1, Dim, Ix};

    fn approx_eq(result: &[Complex<f64>], expected: &[Complex<f64>]) {
        let dif = 1e-6;
        for (a, b) in expected.iter().zip(result.iter()) {
            if (a.re - b.re).abs() > dif || (a.im - b.im).abs() > dif {
                panic!("Large difference of values, got {} expected {}.", b, a)
            }
        }
    }

    #[test]
    /// Successive forward and inverse transform
    fn test_dft() {
        for backend in [Backend::Direct, Backend::Fast] {
            let (nx, ny) = (6, 4);
            let mut data = Array::<Complex<f64>, Dim<[Ix; 2]>>::zeros((nx, ny));
            let mut vhat = Array::<Complex<f64>, Dim<[Ix; 2]>>::zeros((nx, ny));
            for (i, v) in data.iter_mut().enumerate() {
                v.re = i as f64;
                v.im = -1.0 * i as f64;
            }
            let handler: DftHandler<f64> = DftHandler::new(ny).unwrap().backend(backend);
            let expected = data.clone();
            nddft(&data, &mut vhat, &handler, 1).unwrap();
            ndidft(&vhat, &mut data, &handler, 1).unwrap();
            approx_eq(
                &data.iter().copied().collect::<Vec<_>>(),
                &expected.iter().copied().collect::<Vec<_>>(),
            );
        }
    }

    #[test]
    /// Transform along the first axis against numpy.fft.fft(v, axis=0)
    fn test_dft_axis0_against_numpy() {
        let v: Array<Complex<f64>, Dim<[Ix; 2]>> =
            array![[1., 2.], [3., 4.], [5., 6.]].mapv(|x| Complex::new(x, 0.));
        let mut vhat = Array::<Complex<f64>, Dim<[Ix; 2]>>::zeros((3, 2));
        let handler: DftHandler<f64> = DftHandler::new(3).unwrap();
        nddft(&v, &mut vhat, &handler, 0).unwrap();
        let expected = [
            Complex::new(9., 0.),
            Complex::new(12., 0.),
            Complex::new(-3., 1.73205081),
            Complex::new(-3., 1.73205081),
            Complex::new(-3., -1.73205081),
            Complex::new(-3., -1.73205081),
        ];
        approx_eq(&vhat.iter().copied().collect::<Vec<_>>(), &expected);
    }

    #[test]
    /// Successive forward and inverse transform
    fn test_rdft() {
        for backend in [Backend::Direct, Backend::Fast] {
            for ny in [4, 5, 6] {
                let nx = 3;
                let mut data = Array::<f64, Dim<[Ix; 2]>>::zeros((nx, ny));
                let mut vhat = Array::<Complex<f64>, Dim<[Ix; 2]>>::zeros((nx, ny / 2 + 1));
                for (i, v) in data.iter_mut().enumerate() {
                    *v = (i * i) as f64 - 2.;
                }
                let handler: DftHandler<f64> = DftHandler::new(ny).unwrap().backend(backend);
                let expected = data.clone();
                ndrdft(&data, &mut vhat, &handler, 1).unwrap();
                ndirdft(&vhat, &mut data, &handler, 1).unwrap();

                let dif = 1e-6;
                for (a, b) in expected.iter().zip(data.iter()) {
                    if (a - b).abs() > dif {
                        panic!("Large difference of values, got {} expected {}.", b, a)
                    }
                }
            }
        }
    }

    #[test]
    fn test_rdft_is_prefix_of_full_spectrum() {
        let x = array![1., -2., 3.5, 0.25, 7.];
        let handler: DftHandler<f64> = DftHandler::new(5).unwrap();
        let mut half = Array1::<Complex<f64>>::zeros(3);
        ndrdft(&x, &mut half, &handler, 0).unwrap();
        let full = crate::rdft(x.as_slice().unwrap()).unwrap();
        approx_eq(&half.to_vec(), &full.coefficients()[..3]);
    }

    #[test]
    fn test_backends_agree() {
        let n = 12;
        let signal = Signal::new(
            (0..n)
                .map(|i| Complex::new((i as f64).sin(), (3. * i as f64).cos()))
                .collect(),
        )
        .unwrap();
        let direct = DftHandler::new(n).unwrap();
        let fast = DftHandler::new(n).unwrap().backend(Backend::Fast);
        assert_eq!(fast.get_backend(), Backend::Fast);
        let a = direct.process(&signal).unwrap();
        let b = fast.process(&signal).unwrap();
        approx_eq(a.coefficients(), b.coefficients());
        let back = fast.inverse(&b).unwrap();
        approx_eq(&back, signal.samples());
    }

    #[test]
    fn test_normalization() {
        fn double(data: &mut [Complex<f64>]) {
            for d in data.iter_mut() {
                *d = *d * 2.;
            }
        }
        let mut data = vec![Complex::new(1., 0.), Complex::new(2., 0.)];
        let unscaled: DftHandler<f64> =
            DftHandler::new(2).unwrap().normalization(Normalization::None);
        unscaled.process_in_place(&mut data).unwrap();
        unscaled.inverse_in_place(&mut data).unwrap();
        approx_eq(&data, &[Complex::new(2., 0.), Complex::new(4., 0.)]);

        let custom: DftHandler<f64> = DftHandler::new(2)
            .unwrap()
            .normalization(Normalization::Custom(double));
        let mut data = vec![Complex::new(1., 0.), Complex::new(0., 0.)];
        custom.inverse_in_place(&mut data).unwrap();
        approx_eq(&data, &[Complex::new(2., 0.), Complex::new(2., 0.)]);
    }

    #[test]
    fn test_zero_length_handler_is_rejected() {
        let err = DftHandler::<f64>::new(0).err().unwrap();
        assert_eq!(err.reason(), &InvalidInput::Empty);
    }

    #[test]
    fn test_shape_errors() {
        let handler: DftHandler<f64> = DftHandler::new(4).unwrap();
        let data = Array::<Complex<f64>, Dim<[Ix; 2]>>::zeros((3, 4));

        let mut wrong_len = Array::<Complex<f64>, Dim<[Ix; 2]>>::zeros((3, 5));
        assert_eq!(
            nddft(&data, &mut wrong_len, &handler, 1).unwrap_err().reason(),
            &InvalidInput::LengthMismatch {
                expected: 4,
                found: 5
            }
        );

        let mut wrong_other = Array::<Complex<f64>, Dim<[Ix; 2]>>::zeros((2, 4));
        assert_eq!(
            nddft(&data, &mut wrong_other, &handler, 1).unwrap_err().reason(),
            &InvalidInput::ShapeMismatch
        );

        let mut out = Array::<Complex<f64>, Dim<[Ix; 2]>>::zeros((3, 4));
        assert_eq!(
            nddft(&data, &mut out, &handler, 2).unwrap_err().reason(),
            &InvalidInput::AxisOutOfBounds { axis: 2, ndim: 2 }
        );

        let signal = Signal::<f64>::impulse(8).unwrap();
        assert!(handler.process(&signal).is_err());
    }

    #[test]
    fn test_non_finite_lane_leaves_output_untouched() {
        let handler: DftHandler<f64> = DftHandler::new(3).unwrap();
        let data = array![[1., 2., 3.], [4., f64::NAN, 6.]];
        let mut vhat = Array::<Complex<f64>, Dim<[Ix; 2]>>::from_elem((2, 2), Complex::new(7., 7.));
        let err = ndrdft(&data, &mut vhat, &handler, 1).unwrap_err();
        assert_eq!(err.reason(), &InvalidInput::NonFinite { index: 4 });
        assert!(vhat.iter().all(|v| *v == Complex::new(7., 7.)));
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_dft_serial_vs_parallel() {
        let (nx, ny) = (6, 8);
        let mut data = Array::<Complex<f64>, Dim<[Ix; 2]>>::zeros((nx, ny));
        let mut vhat = Array::<Complex<f64>, Dim<[Ix; 2]>>::zeros((nx, ny));
        let mut vhat_par = Array::<Complex<f64>, Dim<[Ix; 2]>>::zeros((nx, ny));
        for (i, v) in data.iter_mut().enumerate() {
            v.re = i as f64;
            v.im = (i % 3) as f64;
        }
        let handler: DftHandler<f64> = DftHandler::new(nx).unwrap();
        nddft(&data, &mut vhat, &handler, 0).unwrap();
        nddft_par(&data, &mut vhat_par, &handler, 0).unwrap();
        approx_eq(
            &vhat.iter().copied().collect::<Vec<_>>(),
            &vhat_par.iter().copied().collect::<Vec<_>>(),
        );

        let mut back = Array::<Complex<f64>, Dim<[Ix; 2]>>::zeros((nx, ny));
        ndidft_par(&vhat_par, &mut back, &handler, 0).unwrap();
        approx_eq(
            &back.iter().copied().collect::<Vec<_>>(),
            &data.iter().copied().collect::<Vec<_>>(),
        );
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_rdft_serial_vs_parallel() {
        let (nx, ny) = (6, 4);
        let mut data = Array::<f64, Dim<[Ix; 2]>>::zeros((nx, ny));
        let mut vhat = Array::<Complex<f64>, Dim<[Ix; 2]>>::zeros((nx, ny / 2 + 1));
        let mut vhat_par = Array::<Complex<f64>, Dim<[Ix; 2]>>::zeros((nx, ny / 2 + 1));
        for (i, v) in data.iter_mut().enumerate() {
            *v = i as f64;
        }
        let handler: DftHandler<f64> = DftHandler::new(ny).unwrap().backend(Backend::Fast);
        ndrdft(&data, &mut vhat, &handler, 1).unwrap();
        ndrdft_par(&data, &mut vhat_par, &handler, 1).unwrap();
        approx_eq(
            &vhat.iter().copied().collect::<Vec<_>>(),
            &vhat_par.iter().copied().collect::<Vec<_>>(),
        );

        let mut back = Array::<f64, Dim<[Ix; 2]>>::zeros((nx, ny));
        ndirdft_par(&vhat_par, &mut back, &handler, 1).unwrap();
        for (a, b) in data.iter().zip(back.iter()) {
            assert!((a - b).abs() < 1e-9);
        }
    }
}
