use log::{debug, info};
use ndrustdft::fixed::{fft8_q8, fixed_signal, FixedComplex};
use ndrustdft::report::{FixedReport, PlotGrid, Report};
use ndrustdft::{DftError, DftHandler, Signal};
use std::time::Instant;

const N: usize = 8;

fn analyze(name: &str, signal: &Signal<f64>) -> Result<(), DftError> {
    let handler = DftHandler::new(signal.len())?;
    let start = Instant::now();
    let spectrum = handler.process(signal)?;
    let elapsed = start.elapsed();
    info!("{}: {}-point dft in {:?}", name, signal.len(), elapsed);
    println!("{}", Report::new(signal, &spectrum).elapsed(elapsed));

    let grid = PlotGrid::new(signal, &spectrum);
    for panel in grid.panels() {
        debug!("{}: panel '{}' with {} series", name, panel.title, panel.series.len());
    }
    Ok(())
}

fn analyze_fixed(name: &str, samples: &[f32]) -> Result<(), DftError> {
    let mut x = [FixedComplex::default(); N];
    let quantized = fixed_signal(samples);
    if quantized.len() != N {
        return Err(ndrustdft::InvalidInput::LengthMismatch {
            expected: N,
            found: quantized.len(),
        }
        .into());
    }
    x.copy_from_slice(&quantized);
    let start = Instant::now();
    let vhat = fft8_q8(&x);
    info!("{}: Q7.8 fft in {:?}", name, start.elapsed());
    println!("FFT Output:\n{}", FixedReport(&vhat));
    Ok(())
}

fn main() -> Result<(), DftError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Expected: X[k] = 1 for all k
    let impulse = Signal::impulse(N)?;
    analyze("impulse", &impulse)?;

    // sin(2*pi*n/8), expected: X[1] = -4j, X[7] = +4j, all others ~ 0
    let sine = Signal::sine(N, 1)?;
    analyze("sine", &sine)?;

    let impulse_f32: Vec<f32> = impulse.re().iter().map(|x| *x as f32).collect();
    analyze_fixed("impulse", &impulse_f32)?;
    let sine_f32: Vec<f32> = sine.re().iter().map(|x| *x as f32).collect();
    analyze_fixed("sine", &sine_f32)?;
    Ok(())
}
