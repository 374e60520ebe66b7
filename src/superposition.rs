// src/superposition.rs

use rayon::prelude::*;
use std::f64::consts::PI;

use crate::dispersion::{wave_vector, KCoefficients};
use crate::spectrum::Spectrum;

/// Sum of plane waves (sinusoidal signals) over the given frequency spectrum:
///
///   E(z, t) = sum_i  w_i * sin(2 pi nu_i t - k(nu_i) z)
///
/// evaluated elementwise over the spatial axis `z`. Returns one field value
/// per axis sample.
///
/// The loop over spatial samples is parallelized; each element accumulates
/// its frequency sum in fixed index order, so the result is bit-identical
/// between runs and independent of the thread count.
pub fn sum_plane_waves(
    z: &[f64],
    t: f64,
    spectrum: &Spectrum,
    nu_center: f64,
    k: &KCoefficients,
) -> Vec<f64> {
    // Per-frequency quantities do not depend on z; hoist them out of the
    // dense loop.
    let terms: Vec<(f64, f64, f64)> = spectrum
        .frequencies
        .iter()
        .zip(spectrum.weights.iter())
        .map(|(&nu, &w)| (w, 2.0 * PI * nu * t, wave_vector(nu, nu_center, k)))
        .collect();

    z.par_iter()
        .map(|&zi| {
            let mut e = 0.0;
            for &(w, omega_t, k_nu) in &terms {
                e += w * (omega_t - k_nu * zi).sin();
            }
            e
        })
        .collect()
}

/// Individual spectral component waveforms at time `t`: row i is
/// w_i * sin(2 pi nu_i t - k(nu_i) z) over the spatial axis.
///
/// The aggregate field of [`sum_plane_waves`] is exactly the elementwise sum
/// of these rows. Intended for diagnostic plotting; the summation path does
/// not materialize this matrix.
pub fn spectral_components(
    z: &[f64],
    t: f64,
    spectrum: &Spectrum,
    nu_center: f64,
    k: &KCoefficients,
) -> Vec<Vec<f64>> {
    spectrum
        .frequencies
        .par_iter()
        .zip(spectrum.weights.par_iter())
        .map(|(&nu, &w)| {
            let omega_t = 2.0 * PI * nu * t;
            let k_nu = wave_vector(nu, nu_center, k);
            z.iter().map(|&zi| w * (omega_t - k_nu * zi).sin()).collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::linspace;
    use crate::params::SpectrumParams;

    fn small_params() -> SpectrumParams {
        SpectrumParams {
            nu_center: 1.0,
            nu_min: 0.001,
            n_frequencies: 64,
            spec_width: 8.0,
        }
    }

    #[test]
    fn aggregate_is_elementwise_sum_of_components() {
        let z = linspace(-5.0, 5.0, 41);
        let spec = Spectrum::new(&small_params());
        let k = KCoefficients::default();

        let e = sum_plane_waves(&z, 0.3, &spec, 1.0, &k);
        let comps = spectral_components(&z, 0.3, &spec, 1.0, &k);

        assert_eq!(comps.len(), spec.len());
        for row in &comps {
            assert_eq!(row.len(), z.len());
        }

        for (j, &ej) in e.iter().enumerate() {
            let summed: f64 = comps.iter().map(|row| row[j]).sum();
            assert!(
                (ej - summed).abs() < 1e-9,
                "aggregate mismatch at j={}: {} vs {}",
                j,
                ej,
                summed
            );
        }
    }

    #[test]
    fn identical_inputs_give_identical_output() {
        let z = linspace(-5.0, 5.0, 101);
        let spec = Spectrum::new(&small_params());
        let k = KCoefficients {
            k0: 1.0,
            k1: 5.0,
            k2: 0.2,
        };

        let a = sum_plane_waves(&z, 1.7, &spec, 1.0, &k);
        let b = sum_plane_waves(&z, 1.7, &spec, 1.0, &k);
        assert_eq!(a, b);
    }

    #[test]
    fn empty_axis_gives_empty_field() {
        let spec = Spectrum::new(&small_params());
        let e = sum_plane_waves(&[], 0.0, &spec, 1.0, &KCoefficients::default());
        assert!(e.is_empty());
    }
}
