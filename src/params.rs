// src/params.rs

/// Parameters of the discretized frequency spectrum.
///
/// The spectrum covers [nu_min, 2 * nu_center] with `n_frequencies` samples.
/// `spec_width` is the standard deviation of the Gaussian weight window in
/// *sample-index* units, not physical frequency units: for a sharp peak with
/// n_frequencies = 4000 choose e.g. spec_width = 100.
#[derive(Debug, Clone, Copy)]
pub struct SpectrumParams {
    pub nu_center: f64,
    pub nu_min: f64,
    pub n_frequencies: usize,
    pub spec_width: f64,
}

impl Default for SpectrumParams {
    fn default() -> Self {
        Self {
            nu_center: 1.0,
            nu_min: 0.001,
            n_frequencies: 4000,
            spec_width: 200.0,
        }
    }
}
