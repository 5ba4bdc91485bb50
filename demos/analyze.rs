//! Spectrum listing of the impulse and sine test signals.
//!
//! cargo run --example analyze
use ndrustdft::report::Report;
use ndrustdft::{DftError, DftHandler, Signal};
use std::time::Instant;

fn main() -> Result<(), DftError> {
    let n = 16;
    let fixtures = [
        ("impulse", Signal::<f64>::impulse(n)?),
        ("sine, 3 cycles", Signal::sine(n, 3)?),
    ];
    let handler = DftHandler::new(n)?;
    for (name, signal) in &fixtures {
        let start = Instant::now();
        let spectrum = handler.process(signal)?;
        let elapsed = start.elapsed();
        println!("== {} ==", name);
        println!("{}", Report::new(signal, &spectrum).elapsed(elapsed));
    }
    Ok(())
}
