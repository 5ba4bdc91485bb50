//! Textual listings and plot data for signals and spectra.
//!
//! Nothing here validates or recomputes the transform; the types only
//! present values a transform already produced.
use crate::fixed::FixedComplex;
use crate::signal::{Signal, Spectrum};
use crate::{Complex, DftNum};
use ndarray::Array1;
use std::fmt;
use std::time::Duration;

/// Listing of a signal and its spectrum, six decimal places.
///
/// ```text
/// Input signal x[n]:
/// x[0] = 1.000000
/// ...
///
/// DFT coefficients X[k]:
/// X[0] = 1.000000+0.000000j
/// ...
/// ```
pub struct Report<'a, T> {
    signal: &'a Signal<T>,
    spectrum: &'a Spectrum<T>,
    elapsed: Option<Duration>,
}

impl<'a, T: DftNum> Report<'a, T> {
    /// Creates a listing of `signal` and `spectrum`.
    #[must_use]
    pub fn new(signal: &'a Signal<T>, spectrum: &'a Spectrum<T>) -> Self {
        Report {
            signal,
            spectrum,
            elapsed: None,
        }
    }

    /// Prefixes the listing with the time the transform took.
    #[must_use]
    pub fn elapsed(mut self, elapsed: Duration) -> Self {
        self.elapsed = Some(elapsed);
        self
    }
}

fn write_complex<T: DftNum>(f: &mut fmt::Formatter<'_>, c: &Complex<T>) -> fmt::Result {
    write!(f, "{:.6}{:+.6}j", c.re, c.im)
}

impl<'a, T: DftNum> fmt::Display for Report<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(elapsed) = self.elapsed {
            writeln!(f, "DFT computation time: {:.6} seconds", elapsed.as_secs_f64())?;
        }
        writeln!(f, "Input signal x[n]:")?;
        for (n, x) in self.signal.samples().iter().enumerate() {
            write!(f, "x[{}] = ", n)?;
            if self.signal.is_real() {
                write!(f, "{:.6}", x.re)?;
            } else {
                write_complex(f, x)?;
            }
            writeln!(f)?;
        }
        writeln!(f)?;
        writeln!(f, "DFT coefficients X[k]:")?;
        for (k, c) in self.spectrum.iter().enumerate() {
            write!(f, "X[{}] = ", k)?;
            write_complex(f, c)?;
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Listing of a Q7.8 spectrum: raw words and their values.
///
/// `X[1]: 0x0000 + 0xFC00j (0.000000 + -4.000000j)`
pub struct FixedReport<'a>(pub &'a [FixedComplex]);

impl fmt::Display for FixedReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, c) in self.0.iter().enumerate() {
            writeln!(
                f,
                "X[{}]: 0x{:04X} + 0x{:04X}j ({:.6} + {:.6}j)",
                i,
                c.re.bits(),
                c.im.bits(),
                c.re.to_f32(),
                c.im.to_f32()
            )?;
        }
        Ok(())
    }
}

/// One stem series of a panel.
#[derive(Debug, Clone, PartialEq)]
pub struct StemSeries<T> {
    /// Legend entry.
    pub label: &'static str,
    /// Value at each index `0..N`.
    pub values: Array1<T>,
}

/// One discrete stem plot.
#[derive(Debug, Clone, PartialEq)]
pub struct StemPanel<T> {
    /// Panel title.
    pub title: &'static str,
    /// Horizontal axis label.
    pub x_label: &'static str,
    /// Vertical axis label.
    pub y_label: &'static str,
    /// Overlaid series.
    pub series: Vec<StemSeries<T>>,
}

/// Data for a 2x2 grid of stem plots, ready for a charting library.
///
/// Panels in row-major order: input signal, magnitude, phase, real and
/// imaginary parts.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotGrid<T> {
    panels: [StemPanel<T>; 4],
}

impl<T: DftNum> PlotGrid<T> {
    /// Collects the plot data of `signal` and its `spectrum`.
    #[must_use]
    pub fn new(signal: &Signal<T>, spectrum: &Spectrum<T>) -> Self {
        let mut input = vec![StemSeries {
            label: "Real",
            values: signal.re(),
        }];
        if !signal.is_real() {
            input.push(StemSeries {
                label: "Imaginary",
                values: signal.im(),
            });
        }
        PlotGrid {
            panels: [
                StemPanel {
                    title: "Input Signal x[n]",
                    x_label: "n",
                    y_label: "x[n]",
                    series: input,
                },
                StemPanel {
                    title: "Magnitude Spectrum |X[k]|",
                    x_label: "k",
                    y_label: "|X[k]|",
                    series: vec![StemSeries {
                        label: "Magnitude",
                        values: spectrum.magnitude(),
                    }],
                },
                StemPanel {
                    title: "Phase Spectrum ∠X[k]",
                    x_label: "k",
                    y_label: "∠X[k] (radians)",
                    series: vec![StemSeries {
                        label: "Phase",
                        values: spectrum.phase(),
                    }],
                },
                StemPanel {
                    title: "DFT Real and Imaginary Parts",
                    x_label: "k",
                    y_label: "X[k]",
                    series: vec![
                        StemSeries {
                            label: "Real",
                            values: spectrum.re(),
                        },
                        StemSeries {
                            label: "Imaginary",
                            values: spectrum.im(),
                        },
                    ],
                },
            ],
        }
    }

    /// The four panels, row-major.
    #[must_use]
    pub fn panels(&self) -> &[StemPanel<T>; 4] {
        &self.panels
    }

    /// Panel at `row`, `col` of the grid.
    #[must_use]
    pub fn panel(&self, row: usize, col: usize) -> Option<&StemPanel<T>> {
        if row < 2 && col < 2 {
            self.panels.get(2 * row + col)
        } else {
            None
        }
    }
}

/// Tests
#[cfg(test)]
mod test {
    use super::*;
    use crate::fixed::{fft8_q8, Q8};

    #[test]
    fn test_report_of_impulse() {
        let signal = Signal::<f64>::impulse(4).unwrap();
        let spectrum = signal.spectrum();
        let text = Report::new(&signal, &spectrum).to_string();
        let expected = "Input signal x[n]:\n\
                        x[0] = 1.000000\n\
                        x[1] = 0.000000\n\
                        x[2] = 0.000000\n\
                        x[3] = 0.000000\n\
                        \n\
                        DFT coefficients X[k]:\n\
                        X[0] = 1.000000+0.000000j\n\
                        X[1] = 1.000000+0.000000j\n\
                        X[2] = 1.000000+0.000000j\n\
                        X[3] = 1.000000+0.000000j\n";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_report_of_complex_signal_and_timing() {
        let signal = Signal::new(vec![Complex::new(1f64, -2.)]).unwrap();
        let spectrum = signal.spectrum();
        let text = Report::new(&signal, &spectrum)
            .elapsed(Duration::from_micros(1500))
            .to_string();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("DFT computation time: 0.001500 seconds"));
        assert_eq!(lines.next(), Some("Input signal x[n]:"));
        assert_eq!(lines.next(), Some("x[0] = 1.000000-2.000000j"));
        assert!(text.ends_with("X[0] = 1.000000-2.000000j\n"));
    }

    #[test]
    fn test_fixed_report() {
        let mut x = [FixedComplex::default(); 8];
        x[0].re = Q8::ONE;
        let text = FixedReport(&fft8_q8(&x)).to_string();
        assert_eq!(text.lines().count(), 8);
        assert_eq!(
            text.lines().next(),
            Some("X[0]: 0x0100 + 0x0000j (1.000000 + 0.000000j)")
        );
        let sine = FixedReport(&[FixedComplex::from_bits(0, -1024)]).to_string();
        assert_eq!(sine, "X[0]: 0x0000 + 0xFC00j (0.000000 + -4.000000j)\n");
    }

    #[test]
    fn test_plot_grid() {
        let signal = Signal::<f64>::sine(8, 1).unwrap();
        let spectrum = signal.spectrum();
        let grid = PlotGrid::new(&signal, &spectrum);

        let input = grid.panel(0, 0).unwrap();
        assert_eq!(input.title, "Input Signal x[n]");
        assert_eq!(input.series.len(), 1);
        assert_eq!(input.series[0].values.len(), 8);

        let magnitude = grid.panel(0, 1).unwrap();
        assert!((magnitude.series[0].values[1] - 4.).abs() < 1e-9);

        let phase = grid.panel(1, 0).unwrap();
        assert_eq!(phase.y_label, "∠X[k] (radians)");

        let parts = grid.panel(1, 1).unwrap();
        assert_eq!(parts.series[1].label, "Imaginary");
        assert!((parts.series[1].values[7] - 4.).abs() < 1e-9);

        assert!(grid.panel(2, 0).is_none());
        assert_eq!(grid.panels().len(), 4);
    }
}
