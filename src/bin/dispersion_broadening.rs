// src/bin/dispersion_broadening.rs
//
// Side-by-side propagation with and without group-velocity dispersion.
// The k2 = 0 packet translates rigidly at v_g = 1/k1; with k2 != 0 the
// rms width grows with time.
//
// Run:
//   cargo run --release --bin dispersion_broadening
//
// Output:
//   out/dispersion_broadening/
//     ├── config.json            (k2 != 0 case)
//     ├── width_vs_time.csv
//     ├── pulse_no_gvd_t*.png
//     └── pulse_gvd_t*.png

use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use wavepacket_sim::config::{
    DispersionConfig, GridConfig, RunConfig, RunInfo, SpectrumConfig, TimeConfig,
};
use wavepacket_sim::diagnostics::pulse_metrics;
use wavepacket_sim::dispersion::KCoefficients;
use wavepacket_sim::grid::linspace;
use wavepacket_sim::params::SpectrumParams;
use wavepacket_sim::propagate::calc_pulses;
use wavepacket_sim::visualisation::save_field_plot;

fn main() -> std::io::Result<()> {
    // --- scenario parameters ---
    let z_min = -10.0;
    let z_max = 50.0;
    let n_z: usize = 1200;

    let t_start = 0.0;
    let t_end = 120.0;
    let n_steps: usize = 5;

    let spec_params = SpectrumParams {
        nu_center: 1.0,
        nu_min: 0.001,
        n_frequencies: 4000,
        spec_width: 200.0,
    };

    let k_no_gvd = KCoefficients {
        k0: 1.0,
        k1: 5.0,
        k2: 0.0,
    };
    let k_gvd = KCoefficients {
        k0: 1.0,
        k1: 5.0,
        k2: 0.4,
    };
    // ---------------------------

    let out_dir = Path::new("out").join("dispersion_broadening");
    create_dir_all(&out_dir)?;

    let run_config = RunConfig {
        grid: GridConfig { z_min, z_max, n_z },
        spectrum: SpectrumConfig {
            nu_center: spec_params.nu_center,
            nu_min: spec_params.nu_min,
            n_frequencies: spec_params.n_frequencies,
            spec_width: spec_params.spec_width,
        },
        dispersion: DispersionConfig {
            k0: k_gvd.k0,
            k1: k_gvd.k1,
            k2: k_gvd.k2,
        },
        time: TimeConfig {
            t_start,
            t_end,
            n_steps,
        },
        run: RunInfo {
            binary: "dispersion_broadening".to_string(),
            run_id: "dispersion_broadening".to_string(),
            git_commit: None,
            timestamp_utc: None,
        },
    };
    run_config.write_to_dir(&out_dir)?;

    let z = linspace(z_min, z_max, n_z);

    println!("propagating without GVD (k2 = 0) ...");
    let series_no_gvd = calc_pulses(&z, t_start, t_end, n_steps, &spec_params, &k_no_gvd);
    println!("propagating with GVD (k2 = {}) ...", k_gvd.k2);
    let series_gvd = calc_pulses(&z, t_start, t_end, n_steps, &spec_params, &k_gvd);

    let file = File::create(out_dir.join("width_vs_time.csv"))?;
    let mut writer = BufWriter::new(file);
    writeln!(writer, "t,rms_width_no_gvd,rms_width_gvd")?;

    for (i, &t) in series_no_gvd.times.iter().enumerate() {
        let m0 = pulse_metrics(&z, &series_no_gvd.fields[i]);
        let m2 = pulse_metrics(&z, &series_gvd.fields[i]);
        writeln!(
            writer,
            "{:.16e},{:.16e},{:.16e}",
            t, m0.rms_width, m2.rms_width
        )?;
        println!(
            "t = {:8.3}: rms width {:.4} (k2=0)  vs  {:.4} (k2={})",
            t, m0.rms_width, m2.rms_width, k_gvd.k2
        );

        let fname0 = out_dir.join(format!("pulse_no_gvd_t{}.png", i));
        save_field_plot(
            &z,
            &series_no_gvd.fields[i],
            None,
            &format!("k2 = 0, t = {:.2}", t),
            fname0.to_str().unwrap(),
        )
        .expect("failed to save pulse plot");

        let fname2 = out_dir.join(format!("pulse_gvd_t{}.png", i));
        save_field_plot(
            &z,
            &series_gvd.fields[i],
            None,
            &format!("k2 = {}, t = {:.2}", k_gvd.k2, t),
            fname2.to_str().unwrap(),
        )
        .expect("failed to save pulse plot");
    }
    writer.flush()?;

    println!("Done. Outputs in {}", out_dir.to_string_lossy());
    Ok(())
}
