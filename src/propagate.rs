// src/propagate.rs

use crate::dispersion::KCoefficients;
use crate::grid::linspace;
use crate::params::SpectrumParams;
use crate::spectrum::Spectrum;
use crate::superposition::sum_plane_waves;

/// Spatial form of the pulse at a sequence of times.
///
/// Row i of `fields` is the field along the spatial axis at `times[i]`.
pub struct PulseSeries {
    pub times: Vec<f64>,
    pub fields: Vec<Vec<f64>>,
}

impl PulseSeries {
    /// (number of time steps, number of spatial samples).
    pub fn shape(&self) -> (usize, usize) {
        let m = self.fields.first().map_or(0, |row| row.len());
        (self.fields.len(), m)
    }
}

/// Calculate the spatial form of the pulse at `n_steps` times linearly
/// spaced over [t_start, t_end].
///
/// Each time value is an independent spectral summation over the same
/// spectrum; rows carry no state between them, so row i is exactly what a
/// direct call of [`sum_plane_waves`] at `times[i]` returns.
pub fn calc_pulses(
    z: &[f64],
    t_start: f64,
    t_end: f64,
    n_steps: usize,
    params: &SpectrumParams,
    k: &KCoefficients,
) -> PulseSeries {
    let times = linspace(t_start, t_end, n_steps);
    let spectrum = Spectrum::new(params);

    // Print about ~100 progress lines max
    let print_every = (n_steps / 100).max(10);

    let mut fields: Vec<Vec<f64>> = Vec::with_capacity(n_steps);
    for (step, &t) in times.iter().enumerate() {
        fields.push(sum_plane_waves(z, t, &spectrum, params.nu_center, k));

        if (step + 1) % print_every == 0 {
            println!("step {:6} / {}, t = {:.3e}", step + 1, n_steps, t);
        }
    }

    PulseSeries { times, fields }
}
