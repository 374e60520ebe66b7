// src/visualisation.rs

use crate::spectrum::Spectrum;
use plotters::prelude::*;
use std::io;
use std::process::Command;

/// Widen a raw data range so curves are not glued to the frame, with
/// fallbacks for NaN-only or flat data.
fn padded_range(mut y_min: f64, mut y_max: f64) -> (f64, f64) {
    if !y_min.is_finite() || !y_max.is_finite() {
        return (-1.0, 1.0);
    }
    if (y_max - y_min).abs() < 1e-30 {
        // all values essentially identical; broaden the window
        let delta = if y_max.abs() < 1e-30 {
            1.0
        } else {
            0.1 * y_max.abs()
        };
        y_min -= delta;
        y_max += delta;
    } else {
        // add a 10% margin around the data range
        let margin = 0.1 * (y_max - y_min);
        y_min -= margin;
        y_max += margin;
    }
    (y_min, y_max)
}

fn finite_min_max<'a>(values: impl Iterator<Item = &'a f64>) -> (f64, f64) {
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for &v in values {
        if v.is_finite() {
            if v < lo {
                lo = v;
            }
            if v > hi {
                hi = v;
            }
        }
    }
    (lo, hi)
}

/// Save one field snapshot E(z) as a PNG line plot.
///
/// `y_range` fixes the vertical axis (used for movie frames so all frames
/// share one scale); `None` auto-scales to this snapshot.
pub fn save_field_plot(
    z: &[f64],
    field: &[f64],
    y_range: Option<(f64, f64)>,
    caption: &str,
    filename: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    if z.len() < 2 {
        return Ok(()); // nothing to plot
    }

    let (y_min, y_max) = match y_range {
        Some(r) => r,
        None => {
            let (lo, hi) = finite_min_max(field.iter());
            padded_range(lo, hi)
        }
    };

    let root = BitMapBackend::new(filename, (1100, 400)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption(caption, ("sans-serif", 24))
        .set_left_and_bottom_label_area_size(50)
        .build_cartesian_2d(z[0]..z[z.len() - 1], y_min..y_max)?;

    chart
        .configure_mesh()
        .x_desc("position z")
        .y_desc("field amplitude E(z)")
        .axis_desc_style(("sans-serif", 16))
        .draw()?;

    chart.draw_series(LineSeries::new(
        z.iter().zip(field.iter()).map(|(&zi, &e)| (zi, e)),
        &RGBColor(70, 130, 180), // steelblue
    ))?;

    root.present()?;
    Ok(())
}

/// Overlay a selection of individual spectral component waveforms.
///
/// Components are sampled from the central fifth-to-three-fifths of the
/// index range (where the Gaussian weight is large), about `n_plot` of them,
/// one colour per component.
pub fn save_components_plot(
    z: &[f64],
    components: &[Vec<f64>],
    n_plot: usize,
    filename: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    if z.len() < 2 || components.is_empty() {
        return Ok(());
    }

    let n = components.len();
    let lo = 2 * n / 5;
    let hi = 3 * n / 5;
    let spacing = ((hi - lo) / n_plot.max(1)).max(1);
    let selected: Vec<usize> = (lo..hi).step_by(spacing).collect();

    let mut y_min = f64::INFINITY;
    let mut y_max = f64::NEG_INFINITY;
    for &i in &selected {
        let (lo_i, hi_i) = finite_min_max(components[i].iter());
        y_min = y_min.min(lo_i);
        y_max = y_max.max(hi_i);
    }
    let (y_min, y_max) = padded_range(y_min, y_max);

    let root = BitMapBackend::new(filename, (1100, 400)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption("Spectral components", ("sans-serif", 24))
        .set_left_and_bottom_label_area_size(50)
        .build_cartesian_2d(z[0]..z[z.len() - 1], y_min..y_max)?;

    chart
        .configure_mesh()
        .x_desc("position z")
        .y_desc("component amplitude")
        .axis_desc_style(("sans-serif", 16))
        .draw()?;

    for (plot_idx, &i) in selected.iter().enumerate() {
        let color = Palette99::pick(plot_idx).mix(0.8);
        chart.draw_series(LineSeries::new(
            z.iter().zip(components[i].iter()).map(|(&zi, &e)| (zi, e)),
            &color,
        ))?;
    }

    root.present()?;
    Ok(())
}

/// Plot the spectral weights against frequency.
pub fn save_spectrum_plot(
    spectrum: &Spectrum,
    filename: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    if spectrum.len() < 2 {
        return Ok(());
    }

    let nu_min = spectrum.frequencies[0];
    let nu_max = spectrum.frequencies[spectrum.len() - 1];

    let root = BitMapBackend::new(filename, (600, 400)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption("Spectrum", ("sans-serif", 24))
        .set_left_and_bottom_label_area_size(50)
        .build_cartesian_2d(nu_min..nu_max, 0.0..1.1_f64)?;

    chart
        .configure_mesh()
        .x_desc("Frequency ν")
        .y_desc("Spectral amplitude S(ν)")
        .axis_desc_style(("sans-serif", 16))
        .draw()?;

    chart.draw_series(LineSeries::new(
        spectrum
            .frequencies
            .iter()
            .zip(spectrum.weights.iter())
            .map(|(&nu, &w)| (nu, w)),
        &BLACK,
    ))?;

    root.present()?;
    Ok(())
}

/// Plot peak amplitude, centroid position and rms width versus time.
pub fn save_metrics_plot(
    times: &[f64],
    peaks: &[f64],
    centroids: &[f64],
    widths: &[f64],
    filename: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    if times.is_empty() {
        return Ok(()); // nothing to plot
    }

    let t_min = *times.first().unwrap();
    let t_max = *times.last().unwrap();

    let (y_min, y_max) = {
        let (lo, hi) = finite_min_max(peaks.iter().chain(centroids).chain(widths));
        padded_range(lo, hi)
    };

    let root = BitMapBackend::new(filename, (1024, 768)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption("Pulse metrics vs time", ("sans-serif", 30))
        .set_left_and_bottom_label_area_size(60)
        .build_cartesian_2d(t_min..t_max, y_min..y_max)?;

    chart
        .configure_mesh()
        .x_desc("time t")
        .y_desc("metric (axis units)")
        .label_style(("sans-serif", 16))
        .axis_desc_style(("sans-serif", 18))
        .draw()?;

    chart
        .draw_series(LineSeries::new(
            times.iter().zip(peaks.iter()).map(|(&t, &v)| (t, v)),
            &RED,
        ))?
        .label("peak |E|")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &RED));

    chart
        .draw_series(LineSeries::new(
            times.iter().zip(centroids.iter()).map(|(&t, &v)| (t, v)),
            &BLUE,
        ))?
        .label("centroid z")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &BLUE));

    chart
        .draw_series(LineSeries::new(
            times.iter().zip(widths.iter()).map(|(&t, &v)| (t, v)),
            &GREEN,
        ))?
        .label("rms width")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &GREEN));

    chart
        .configure_series_labels()
        .border_style(&BLACK)
        .background_style(&WHITE.mix(0.8))
        .draw()?;

    root.present()?;
    Ok(())
}

/// Use `ffmpeg` to stitch all frames/pulse_*.png into an MP4 movie.
/// Assumes filenames like frames/pulse_000000.png, pulse_000001.png, ...
pub fn make_movie_with_ffmpeg(pattern: &str, output: &str, fps: u32) -> io::Result<()> {
    let status = Command::new("ffmpeg")
        .args(&[
            "-y", // overwrite output if it exists
            "-framerate",
            &fps.to_string(),
            "-pattern_type",
            "glob",
            "-i",
            pattern, // e.g. "frames/pulse_*.png"
            "-pix_fmt",
            "yuv420p",
            output, // e.g. "pulse_evolution.mp4"
        ])
        .status()?;

    if !status.success() {
        eprintln!("ffmpeg exited with status {:?}", status);
    }

    Ok(())
}
