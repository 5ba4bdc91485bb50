//! Direct summation against the fast backend on a noisy complex signal.
//!
//! cargo run --example backends
use ndrustdft::{Backend, Complex, DftError, DftHandler, Signal};
use std::time::Instant;

// Linear congruential generator, uniform in [-1, 1)
fn noise(state: &mut u64) -> f64 {
    *state = state
        .wrapping_mul(6_364_136_223_846_793_005)
        .wrapping_add(1_442_695_040_888_963_407);
    (*state >> 11) as f64 / (1u64 << 52) as f64 - 1.
}

fn main() -> Result<(), DftError> {
    let mut state = 0x2545_f491_4f6c_dd1d;
    for n in [7, 64, 360, 1024] {
        let samples: Vec<Complex<f64>> = (0..n)
            .map(|_| Complex::new(noise(&mut state), noise(&mut state)))
            .collect();
        let signal = Signal::new(samples)?;

        let start = Instant::now();
        let direct = DftHandler::new(n)?.process(&signal)?;
        let t_direct = start.elapsed();

        let fast_handler = DftHandler::new(n)?.backend(Backend::Fast);
        let start = Instant::now();
        let fast = fast_handler.process(&signal)?;
        let t_fast = start.elapsed();

        let deviation = direct
            .iter()
            .zip(fast.iter())
            .map(|(a, b)| (a - b).norm())
            .fold(0., f64::max);
        println!(
            "N = {:5}: direct {:?}, fast {:?}, max |X_direct - X_fast| = {:.3e}",
            n, t_direct, t_fast, deviation
        );
    }
    Ok(())
}
