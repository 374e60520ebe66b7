// src/bin/pulse_snapshot.rs
//
// Reference static figures: spectral components, the resulting pulse and
// the underlying spectrum at t = 0 for the default parameter set.
//
// Run:
//   cargo run --bin pulse_snapshot
//
// Output:
//   out/pulse_snapshot/
//     ├── config.json
//     ├── spectral_components.png
//     ├── resulting_pulse.png
//     └── spectrum.png

use std::fs::create_dir_all;
use std::path::Path;

use wavepacket_sim::config::{
    DispersionConfig, GridConfig, RunConfig, RunInfo, SpectrumConfig, TimeConfig,
};
use wavepacket_sim::dispersion::KCoefficients;
use wavepacket_sim::grid::linspace;
use wavepacket_sim::params::SpectrumParams;
use wavepacket_sim::spectrum::Spectrum;
use wavepacket_sim::superposition::{spectral_components, sum_plane_waves};
use wavepacket_sim::visualisation::{
    save_components_plot, save_field_plot, save_spectrum_plot,
};

fn main() -> std::io::Result<()> {
    // --- reference parameters ---
    let z_min = -10.0;
    let z_max = 10.0;
    let n_z: usize = 500;
    let t = 0.0;

    let spec_params = SpectrumParams {
        nu_center: 1.0,
        nu_min: 0.001,
        n_frequencies: 4000,
        spec_width: 200.0,
    };
    let k = KCoefficients {
        k0: 1.0,
        k1: 5.0,
        k2: 0.0,
    };
    // ----------------------------

    let out_dir = Path::new("out").join("pulse_snapshot");
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
            k0: k.k0,
            k1: k.k1,
            k2: k.k2,
        },
        time: TimeConfig {
            t_start: t,
            t_end: t,
            n_steps: 1,
        },
        run: RunInfo {
            binary: "pulse_snapshot".to_string(),
            run_id: "pulse_snapshot".to_string(),
            git_commit: None,
            timestamp_utc: None,
        },
    };
    run_config.write_to_dir(&out_dir)?;

    let z = linspace(z_min, z_max, n_z);
    let spectrum = Spectrum::new(&spec_params);

    let components = spectral_components(&z, t, &spectrum, spec_params.nu_center, &k);
    let field = sum_plane_waves(&z, t, &spectrum, spec_params.nu_center, &k);

    save_components_plot(
        &z,
        &components,
        20,
        out_dir.join("spectral_components.png").to_str().unwrap(),
    )
    .expect("failed to save components plot");

    save_field_plot(
        &z,
        &field,
        None,
        "Resulting pulse",
        out_dir.join("resulting_pulse.png").to_str().unwrap(),
    )
    .expect("failed to save pulse plot");

    save_spectrum_plot(&spectrum, out_dir.join("spectrum.png").to_str().unwrap())
        .expect("failed to save spectrum plot");

    println!("Done. Outputs in {}", out_dir.to_string_lossy());
    Ok(())
}
