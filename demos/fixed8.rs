//! 8-point transform in Q7.8 fixed-point arithmetic.
//!
//! cargo run --example fixed8
use ndrustdft::fixed::{fft_radix2_q8, fixed_signal, from_q7, to_q7, FixedComplex, Q8};
use ndrustdft::report::FixedReport;
use ndrustdft::DftError;

fn main() -> Result<(), DftError> {
    // Impulse, expected: X[k] = 1.0 for all k
    let mut x = [FixedComplex::default(); 8];
    x[0].re = Q8::from_f32(1.0);
    fft_radix2_q8(&mut x)?;
    println!("Impulse:\n{}", FixedReport(&x));

    // sin(2pi*n/8), expected: X[1] = -4j, X[7] = +4j, all others ~ 0
    let s = 0.707_106_77;
    let mut x = fixed_signal(&[0., s, 1., s, 0., -s, -1., -s]);
    fft_radix2_q8(&mut x)?;
    println!("Sine:\n{}", FixedReport(&x));

    // Q0.7 storage of the same samples
    let samples = [0., 0.707, 1., 0.707, 0., -0.707, -1., -0.707];
    let fixed = to_q7(&samples);
    for ((original, q), restored) in samples.iter().zip(&fixed).zip(from_q7(&fixed)) {
        println!(
            "Original: {:9.6}, Fixed: {:4} (0x{:02X}), Restored: {:9.6}",
            original,
            q.0,
            q.bits(),
            restored
        );
    }
    Ok(())
}
