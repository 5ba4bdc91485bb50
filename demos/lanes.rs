//! Batch of real signals, one per row, transformed along the last axis.
//! Prints the dominant frequency bin of each row.
//!
//! cargo run --example lanes
use ndarray::{Array2, Axis};
use ndrustdft::{ndirdft, ndrdft, Complex, DftError, DftHandler, Signal};
// // Use parallel transforms:
// use ndrustdft::{ndirdft_par as ndirdft, ndrdft_par as ndrdft};

fn main() -> Result<(), DftError> {
    let n = 24;
    let cycles = [1, 4, 7, 11];

    let mut signals = Array2::<f64>::zeros((cycles.len(), n));
    for (mut row, &c) in signals.axis_iter_mut(Axis(0)).zip(cycles.iter()) {
        let sine = Signal::<f64>::sine(n, c)?;
        row.assign(&sine.re());
    }

    let handler = DftHandler::<f64>::new(n)?;
    let mut spectra = Array2::<Complex<f64>>::zeros((cycles.len(), handler.real_spectrum_len()));
    ndrdft(&signals, &mut spectra, &handler, 1)?;

    for (row, &c) in spectra.axis_iter(Axis(0)).zip(cycles.iter()) {
        let (peak, magnitude) = row
            .iter()
            .map(|x| x.norm())
            .enumerate()
            .fold((0, 0.), |best, (k, m)| if m > best.1 { (k, m) } else { best });
        println!("{:2} cycles: peak at bin {:2}, |X| = {:.3}", c, peak, magnitude);
    }

    let mut restored = Array2::<f64>::zeros((cycles.len(), n));
    ndirdft(&spectra, &mut restored, &handler, 1)?;
    let error = (&restored - &signals).iter().fold(0f64, |acc, x| acc.max(x.abs()));
    println!("max round trip error: {:.3e}", error);
    Ok(())
}
