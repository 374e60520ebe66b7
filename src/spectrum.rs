// src/spectrum.rs

use crate::grid::linspace;
use crate::params::SpectrumParams;

/// Discretized frequency spectrum with Gaussian weighting.
///
/// `frequencies` and `weights` are generated together and always have the
/// same length; index i of one corresponds to index i of the other.
pub struct Spectrum {
    pub frequencies: Vec<f64>,
    pub weights: Vec<f64>,
}

impl Spectrum {
    /// Build the spectrum: `n_frequencies` samples linearly spaced over
    /// [nu_min, 2 * nu_center], weighted by a symmetric Gaussian window over
    /// the sample-index range with standard deviation `spec_width`.
    ///
    /// The window is centred on the sample midpoint (N - 1) / 2, so the
    /// weighting coincides with nu_center only when the frequency grid is
    /// symmetric about it.
    pub fn new(params: &SpectrumParams) -> Self {
        let frequencies = linspace(
            params.nu_min,
            2.0 * params.nu_center,
            params.n_frequencies,
        );
        let weights = gaussian_window(frequencies.len(), params.spec_width);

        Self {
            frequencies,
            weights,
        }
    }

    /// Number of spectral components.
    pub fn len(&self) -> usize {
        self.frequencies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frequencies.is_empty()
    }

    /// Sum of all weights. Since |sin| <= 1, this bounds |E| at any point.
    pub fn weight_sum(&self) -> f64 {
        self.weights.iter().sum()
    }
}

/// Symmetric Gaussian window of length `n` with standard deviation `std`
/// (in sample units), centred on (n - 1) / 2:
///
///   w[i] = exp(-0.5 * ((i - (n-1)/2) / std)^2)
fn gaussian_window(n: usize, std: f64) -> Vec<f64> {
    let mid = (n as f64 - 1.0) / 2.0;
    (0..n)
        .map(|i| {
            let u = (i as f64 - mid) / std;
            (-0.5 * u * u).exp()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frequencies_and_weights_have_equal_length() {
        let spec = Spectrum::new(&SpectrumParams::default());
        assert_eq!(spec.frequencies.len(), spec.weights.len());
        assert_eq!(spec.len(), 4000);
    }

    #[test]
    fn grid_spans_nu_min_to_twice_nu_center() {
        let params = SpectrumParams {
            nu_center: 1.0,
            nu_min: 0.001,
            n_frequencies: 100,
            spec_width: 10.0,
        };
        let spec = Spectrum::new(&params);
        assert!((spec.frequencies[0] - 0.001).abs() < 1e-15);
        assert!((spec.frequencies[99] - 2.0).abs() < 1e-12);
    }

    #[test]
    fn window_is_symmetric_in_index_space_with_peak_at_midpoint() {
        let w = gaussian_window(101, 20.0);
        assert!((w[50] - 1.0).abs() < 1e-15);
        for i in 0..101 {
            assert!(
                (w[i] - w[100 - i]).abs() < 1e-15,
                "window asymmetric at i={}",
                i
            );
        }
        // monotone decay away from the centre
        assert!(w[0] < w[25] && w[25] < w[50]);
    }

    #[test]
    fn single_sample_spectrum_is_valid() {
        let params = SpectrumParams {
            n_frequencies: 1,
            ..SpectrumParams::default()
        };
        let spec = Spectrum::new(&params);
        assert_eq!(spec.len(), 1);
        assert!((spec.frequencies[0] - 0.001).abs() < 1e-15);
        // midpoint of a length-1 window is sample 0 itself
        assert!((spec.weights[0] - 1.0).abs() < 1e-15);
    }
}
