//! Dump the four stem panels of a two-tone signal as columns of text,
//! ready to feed into any charting tool.
//!
//! cargo run --example plot_grid
use ndrustdft::report::PlotGrid;
use ndrustdft::{DftError, Signal};

fn main() -> Result<(), DftError> {
    let n = 32;
    let low = Signal::<f64>::sine(n, 2)?;
    let high = Signal::<f64>::sine(n, 5)?;
    let mixed: Vec<f64> = low
        .re()
        .iter()
        .zip(high.re().iter())
        .map(|(a, b)| a + 0.5 * b)
        .collect();
    let signal = Signal::from_real(&mixed)?;
    let spectrum = signal.spectrum();

    let grid = PlotGrid::new(&signal, &spectrum);
    for row in 0..2 {
        for col in 0..2 {
            let Some(panel) = grid.panel(row, col) else {
                continue;
            };
            println!("# [{}, {}] {} ({} vs {})", row, col, panel.title, panel.y_label, panel.x_label);
            let labels: Vec<&str> = panel.series.iter().map(|s| s.label).collect();
            println!("# n\t{}", labels.join("\t"));
            for i in 0..n {
                let values: Vec<String> =
                    panel.series.iter().map(|s| format!("{:.6}", s.values[i])).collect();
                println!("{}\t{}", i, values.join("\t"));
            }
            println!();
        }
    }
    Ok(())
}
