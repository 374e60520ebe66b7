// src/diagnostics.rs

/// Scalar diagnostics of one field snapshot, computed from the intensity
/// E(z)^2 so sign oscillations of the carrier do not cancel:
///
///   peak     = max_z |E(z)|
///   centroid = sum(z E^2) / sum(E^2)
///   rms_width = sqrt( sum((z - centroid)^2 E^2) / sum(E^2) )
#[derive(Debug, Clone, Copy)]
pub struct PulseMetrics {
    pub peak: f64,
    pub centroid: f64,
    pub rms_width: f64,
}

/// Compute [`PulseMetrics`] for a field snapshot on the axis `z`.
///
/// An all-zero (or empty) field has no meaningful centroid; NaN falls out of
/// the 0/0 and is left to the caller, matching the no-validation policy of
/// the numeric kernels.
pub fn pulse_metrics(z: &[f64], field: &[f64]) -> PulseMetrics {
    let mut peak = 0.0_f64;
    let mut w_sum = 0.0_f64;
    let mut zw_sum = 0.0_f64;

    for (&zi, &e) in z.iter().zip(field.iter()) {
        let a = e.abs();
        if a > peak {
            peak = a;
        }
        let w = e * e;
        w_sum += w;
        zw_sum += zi * w;
    }

    let centroid = zw_sum / w_sum;

    let mut var_sum = 0.0_f64;
    for (&zi, &e) in z.iter().zip(field.iter()) {
        let d = zi - centroid;
        var_sum += d * d * e * e;
    }

    PulseMetrics {
        peak,
        centroid,
        rms_width: (var_sum / w_sum).sqrt(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::linspace;

    #[test]
    fn gaussian_envelope_metrics_match_analytics() {
        // E(z) = exp(-(z - 2)^2 / (2 s^2)) with s = 0.5:
        // intensity E^2 is Gaussian with std s/sqrt(2), centred at 2.
        let z = linspace(-10.0, 10.0, 4001);
        let s = 0.5;
        let field: Vec<f64> = z
            .iter()
            .map(|&zi| (-(zi - 2.0) * (zi - 2.0) / (2.0 * s * s)).exp())
            .collect();

        let m = pulse_metrics(&z, &field);
        assert!((m.peak - 1.0).abs() < 1e-6, "peak = {}", m.peak);
        assert!((m.centroid - 2.0).abs() < 1e-6, "centroid = {}", m.centroid);
        let expected_width = s / 2.0_f64.sqrt();
        assert!(
            (m.rms_width - expected_width).abs() < 1e-3,
            "rms_width = {}, expected {}",
            m.rms_width,
            expected_width
        );
    }

    #[test]
    fn centroid_tracks_translation() {
        let z = linspace(-10.0, 10.0, 2001);
        let envelope =
            |shift: f64| -> Vec<f64> { z.iter().map(|&zi| (-(zi - shift).powi(2)).exp()).collect() };

        let m0 = pulse_metrics(&z, &envelope(0.0));
        let m1 = pulse_metrics(&z, &envelope(3.0));

        assert!((m1.centroid - m0.centroid - 3.0).abs() < 1e-6);
        assert!((m1.rms_width - m0.rms_width).abs() < 1e-6);
    }
}
