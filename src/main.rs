// src/main.rs
//
// This binary provides a flexible CLI for exploratory runs
// (e.g. quick looks, movies, parameter sweeps).
//
// Outputs from this driver are written to `runs/` (or the directory
// specified via `out=`) and are not committed to version control.
//
// NOTE:
// Reproducible reference figures are implemented as dedicated
// executables under `src/bin/*`.
//
// Examples:
//
//   cargo run --release -- movie steps=200 k2=0.05
//       -> propagate the packet with group-velocity dispersion,
//          saving frames and assembling an MP4 movie.
//
//   cargo run --release -- snapshot nfreq=4000 width=200
//       -> static figures at t = t_start: spectral components,
//          the resulting pulse and the underlying spectrum.
//
//   cargo run --release -- tend=20 steps=400 save=4 out=runs
//       -> longer propagation, saving every 4th step as a frame.
//
// Typical outputs (per run directory):
//   runs/<run_id>/
//     ├── config.json
//     ├── pulse_metrics.csv
//     ├── field_final.csv
//     ├── spectrum.png
//     ├── pulse_metrics.png
//     ├── frames/pulse_*.png
//     └── pulse_evolution.mp4      (if `movie` is enabled)

use std::env;
use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use wavepacket_sim::config::{
    DispersionConfig, GridConfig, RunConfig, RunInfo, SpectrumConfig, TimeConfig,
};
use wavepacket_sim::diagnostics::pulse_metrics;
use wavepacket_sim::dispersion::KCoefficients;
use wavepacket_sim::grid::linspace;
use wavepacket_sim::params::SpectrumParams;
use wavepacket_sim::propagate::calc_pulses;
use wavepacket_sim::spectrum::Spectrum;
use wavepacket_sim::superposition::{spectral_components, sum_plane_waves};
use wavepacket_sim::visualisation::{
    make_movie_with_ffmpeg, save_components_plot, save_field_plot, save_metrics_plot,
    save_spectrum_plot,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    /// Time series of the propagating packet (frames, metrics, optional movie).
    Propagate,
    /// Static figures at t = t_start (components, resulting pulse, spectrum).
    Snapshot,
}

impl Mode {
    fn from_arg(s: &str) -> Option<Self> {
        match s {
            "propagate" => Some(Self::Propagate),
            "snapshot" => Some(Self::Snapshot),
            _ => None,
        }
    }

    fn as_str(&self) -> &'static str {
        match self {
            Self::Propagate => "propagate",
            Self::Snapshot => "snapshot",
        }
    }
}

fn print_usage() {
    eprintln!(
        r#"Usage:
  cargo run -- [propagate|snapshot] [movie]
             [nu=VAL] [numin=VAL] [nfreq=N] [width=VAL]
             [k0=VAL] [k1=VAL] [k2=VAL]
             [zmin=VAL] [zmax=VAL] [nz=N]
             [tstart=VAL] [tend=VAL] [steps=N] [save=N] [fps=N]
             [out=DIR] [run=RUN_ID]

Notes:
  - One CSV sample is logged per time step (peak, centroid, rms width).
  - Frames are saved every save_every steps; 'movie' stitches them with ffmpeg.
  - 'snapshot' ignores the time-stepping options and renders static figures.
"#
    );
}

fn sanitize_run_id(s: &str) -> String {
    s.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || c == '-' || c == '.' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

fn default_run_id(mode: Mode) -> String {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_else(|_| std::time::Duration::from_secs(0));
    let ts = format!("{}{:03}", now.as_secs(), now.subsec_millis());
    format!("{}_{}", ts, mode.as_str())
}

fn unique_run_dir(out_root: &str, run_id: &str) -> PathBuf {
    let base = PathBuf::from(out_root);
    let mut dir = base.join(run_id);
    if !dir.exists() {
        return dir;
    }
    for k in 1..1000 {
        let cand = base.join(format!("{}_{}", run_id, k));
        if !cand.exists() {
            dir = cand;
            break;
        }
    }
    dir
}

fn main() -> std::io::Result<()> {
    let argv: Vec<String> = env::args().collect();

    let mut mode = Mode::Propagate;
    let mut make_movie_flag = false;

    let mut spec_params = SpectrumParams::default();
    let mut k = KCoefficients::default();

    // Spatial axis
    let mut z_min = -10.0_f64;
    let mut z_max = 10.0_f64;
    let mut n_z: usize = 500;

    // Time stepping
    let mut t_start = 0.0_f64;
    let mut t_end = 10.0_f64;
    let mut n_steps: usize = 120;
    let mut save_every: usize = 1;
    let mut fps: u32 = 30;

    // Output controls
    let mut out_root_override: Option<String> = None;
    let mut run_id_override: Option<String> = None;

    for arg in argv.iter().skip(1) {
        if arg == "-h" || arg == "--help" || arg == "help" {
            print_usage();
            return Ok(());
        }

        if let Some(m) = Mode::from_arg(arg) {
            mode = m;
            continue;
        }
        if arg == "movie" {
            make_movie_flag = true;
            continue;
        }

        if let Some(v) = arg.strip_prefix("nu=") {
            match v.parse::<f64>() {
                Ok(val) => spec_params.nu_center = val,
                Err(_) => eprintln!("Warning: could not parse nu value '{v}', ignoring"),
            }
            continue;
        }
        if let Some(v) = arg.strip_prefix("numin=") {
            match v.parse::<f64>() {
                Ok(val) => spec_params.nu_min = val,
                Err(_) => eprintln!("Warning: could not parse numin value '{v}', ignoring"),
            }
            continue;
        }
        if let Some(v) = arg.strip_prefix("nfreq=") {
            match v.parse::<usize>() {
                Ok(val) => spec_params.n_frequencies = val,
                Err(_) => eprintln!("Warning: could not parse nfreq value '{v}', ignoring"),
            }
            continue;
        }
        if let Some(v) = arg.strip_prefix("width=") {
            match v.parse::<f64>() {
                Ok(val) => spec_params.spec_width = val,
                Err(_) => eprintln!("Warning: could not parse width value '{v}', ignoring"),
            }
            continue;
        }

        if let Some(v) = arg.strip_prefix("k0=") {
            if let Ok(val) = v.parse::<f64>() {
                k.k0 = val;
            }
            continue;
        }
        if let Some(v) = arg.strip_prefix("k1=") {
            if let Ok(val) = v.parse::<f64>() {
                k.k1 = val;
            }
            continue;
        }
        if let Some(v) = arg.strip_prefix("k2=") {
            if let Ok(val) = v.parse::<f64>() {
                k.k2 = val;
            }
            continue;
        }

        if let Some(v) = arg.strip_prefix("zmin=") {
            z_min = v.parse::<f64>().unwrap_or(z_min);
            continue;
        }
        if let Some(v) = arg.strip_prefix("zmax=") {
            z_max = v.parse::<f64>().unwrap_or(z_max);
            continue;
        }
        if let Some(v) = arg.strip_prefix("nz=") {
            n_z = v.parse::<usize>().unwrap_or(n_z);
            continue;
        }

        if let Some(v) = arg.strip_prefix("tstart=") {
            t_start = v.parse::<f64>().unwrap_or(t_start);
            continue;
        }
        if let Some(v) = arg.strip_prefix("tend=") {
            t_end = v.parse::<f64>().unwrap_or(t_end);
            continue;
        }
        if let Some(v) = arg.strip_prefix("steps=") {
            if let Ok(val) = v.parse::<usize>() {
                n_steps = val;
            }
            continue;
        }
        if let Some(v) = arg.strip_prefix("save=") {
            if let Ok(val) = v.parse::<usize>() {
                save_every = val.max(1);
            }
            continue;
        }
        if let Some(v) = arg.strip_prefix("fps=") {
            if let Ok(val) = v.parse::<u32>() {
                fps = val;
            }
            continue;
        }

        if let Some(v) = arg.strip_prefix("out=") {
            out_root_override = Some(v.to_string());
            continue;
        }
        if let Some(v) = arg.strip_prefix("run=") {
            run_id_override = Some(v.to_string());
            continue;
        }

        eprintln!("Warning: ignoring unknown argument '{arg}'");
    }

    // -------- output directory setup --------
    let out_root = out_root_override.unwrap_or_else(|| "runs".to_string());
    create_dir_all(&out_root)?;

    let mut run_id = run_id_override.unwrap_or_else(|| default_run_id(mode));
    run_id = sanitize_run_id(&run_id);

    let run_dir = unique_run_dir(&out_root, &run_id);
    create_dir_all(&run_dir)?;
    let frames_dir = run_dir.join("frames");
    create_dir_all(&frames_dir)?;

    let ffmpeg_pattern = frames_dir.join("pulse_*.png").to_string_lossy().to_string();

    // -------------------------------------------------
    // Write config.json
    // -------------------------------------------------
    let run_config = RunConfig {
        grid: GridConfig { z_min, z_max, n_z },
        spectrum: SpectrumConfig {
            nu_center: spec_params.nu_center,
            nu_min: spec_params.nu_min,
            n_frequencies: spec_params.n_frequencies,
            spec_width: spec_params.spec_width,
        },
        dispersion: DispersionConfig {
            k0: k.k0,
            k1: k.k1,
            k2: k.k2,
        },
        time: TimeConfig {
            t_start,
            t_end,
            n_steps,
        },
        run: RunInfo {
            binary: "wavepacket-sim".to_string(),
            run_id: run_id.clone(),
            git_commit: None,
            timestamp_utc: None,
        },
    };
    run_config.write_to_dir(&run_dir)?;

    println!("--- wavepacket-sim run config ---");
    println!("run_dir: {}", run_dir.to_string_lossy());
    println!("mode:   {}", mode.as_str());
    println!(
        "grid:   z in [{:.3}, {:.3}], nz={}",
        z_min, z_max, n_z
    );
    println!(
        "spec:   nu_center={:.4} nu_min={:.4} nfreq={} width={:.1}",
        spec_params.nu_center, spec_params.nu_min, spec_params.n_frequencies, spec_params.spec_width
    );
    println!("disp:   k0={:.4} k1={:.4} k2={:.4}", k.k0, k.k1, k.k2);
    println!(
        "time:   t in [{:.3}, {:.3}], steps={} save_every={} fps={}",
        t_start, t_end, n_steps, save_every, fps
    );
    println!("---------------------------------");

    let z = linspace(z_min, z_max, n_z);
    let spectrum = Spectrum::new(&spec_params);

    // The spectrum plot is independent of time; always emit it.
    save_spectrum_plot(&spectrum, run_dir.join("spectrum.png").to_str().unwrap())
        .expect("failed to save spectrum plot");

    if mode == Mode::Snapshot {
        let components = spectral_components(&z, t_start, &spectrum, spec_params.nu_center, &k);
        let field = sum_plane_waves(&z, t_start, &spectrum, spec_params.nu_center, &k);

        save_components_plot(
            &z,
            &components,
            20,
            run_dir.join("spectral_components.png").to_str().unwrap(),
        )
        .expect("failed to save components plot");

        save_field_plot(
            &z,
            &field,
            None,
            "Resulting pulse",
            run_dir.join("resulting_pulse.png").to_str().unwrap(),
        )
        .expect("failed to save pulse plot");

        println!("Done. Outputs in {}", run_dir.to_string_lossy());
        return Ok(());
    }

    // -------- propagate --------
    let series = calc_pulses(&z, t_start, t_end, n_steps, &spec_params, &k);
    let (rows, cols) = series.shape();
    println!("computed series: {} steps x {} samples", rows, cols);

    // Shared y-range over all frames so the movie does not rescale.
    let mut e_min = f64::INFINITY;
    let mut e_max = f64::NEG_INFINITY;
    for row in &series.fields {
        for &e in row {
            if e.is_finite() {
                e_min = e_min.min(e);
                e_max = e_max.max(e);
            }
        }
    }
    let frame_range = if e_min.is_finite() && e_max.is_finite() {
        Some((1.2 * e_min, 1.2 * e_max))
    } else {
        None
    };

    // CSV outputs
    let file_metrics: File = File::create(run_dir.join("pulse_metrics.csv"))?;
    let mut writer_metrics: BufWriter<File> = BufWriter::new(file_metrics);
    writeln!(writer_metrics, "t,peak,centroid,rms_width")?;

    // Keep frame ordering stable under glob
    let frame_pad: usize = 6;
    let mut frame_idx: usize = 0;

    let n_pts = series.times.len();
    let mut peaks: Vec<f64> = Vec::with_capacity(n_pts);
    let mut centroids: Vec<f64> = Vec::with_capacity(n_pts);
    let mut widths: Vec<f64> = Vec::with_capacity(n_pts);

    for (step, (&t, field)) in series.times.iter().zip(series.fields.iter()).enumerate() {
        let m = pulse_metrics(&z, field);
        peaks.push(m.peak);
        centroids.push(m.centroid);
        widths.push(m.rms_width);

        writeln!(
            writer_metrics,
            "{:.16e},{:.16e},{:.16e},{:.16e}",
            t, m.peak, m.centroid, m.rms_width
        )?;

        if step % save_every == 0 || step + 1 == n_pts {
            let fname =
                frames_dir.join(format!("pulse_{:0width$}.png", frame_idx, width = frame_pad));
            save_field_plot(
                &z,
                field,
                frame_range,
                &format!("t = {:.3}", t),
                fname.to_str().unwrap(),
            )
            .expect("failed to save pulse frame");
            frame_idx += 1;
        }
    }
    writer_metrics.flush()?;

    // Final field snapshot as CSV
    let file_field: File = File::create(run_dir.join("field_final.csv"))?;
    let mut writer_field: BufWriter<File> = BufWriter::new(file_field);
    writeln!(writer_field, "z,E")?;
    if let Some(last) = series.fields.last() {
        for (&zi, &e) in z.iter().zip(last.iter()) {
            writeln!(writer_field, "{:.16e},{:.16e}", zi, e)?;
        }
    }
    writer_field.flush()?;

    // Plots
    let _ = save_metrics_plot(
        &series.times,
        &peaks,
        &centroids,
        &widths,
        run_dir.join("pulse_metrics.png").to_str().unwrap(),
    );

    // Optional movie
    if make_movie_flag {
        let movie_path = run_dir.join("pulse_evolution.mp4");
        if let Err(e) = make_movie_with_ffmpeg(&ffmpeg_pattern, movie_path.to_str().unwrap(), fps) {
            eprintln!("Could not create movie with ffmpeg: {e}");
        } else {
            println!("Saved movie to {}", movie_path.to_string_lossy());
        }
    } else {
        println!("Movie generation skipped (no 'movie' flag).");
    }

    println!("Done. Outputs in {}", run_dir.to_string_lossy());
    Ok(())
}
