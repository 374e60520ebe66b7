// src/dispersion.rs

use std::f64::consts::PI;

/// Taylor coefficients of the wave vector k(ω) expanded to second order
/// around the centre angular frequency ω0 = 2π ν_center.
///
/// - `k0`: constant term
/// - `k1`: dk/dω at ω0 (sets the group velocity, v_g = 1/k1)
/// - `k2`: d²k/dω² at ω0 (group-velocity dispersion; broadens the pulse)
#[derive(Debug, Clone, Copy)]
pub struct KCoefficients {
    pub k0: f64,
    pub k1: f64,
    pub k2: f64,
}

impl Default for KCoefficients {
    fn default() -> Self {
        Self {
            k0: 1.0,
            k1: 5.0,
            k2: 0.0,
        }
    }
}

/// Wave vector as a function of frequency:
///
///   k(ν) = k0 + k1 (ω − ω0) + k2 (ω − ω0)²,  ω = 2π ν, ω0 = 2π ν_center.
///
/// Pure and total; no error conditions.
pub fn wave_vector(nu: f64, nu_center: f64, k: &KCoefficients) -> f64 {
    let omega = 2.0 * PI * nu;
    let omega_0 = 2.0 * PI * nu_center;
    let d = omega - omega_0;

    k.k0 + k.k1 * d + k.k2 * d * d
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constant_when_higher_orders_vanish() {
        let k = KCoefficients {
            k0: 2.5,
            k1: 0.0,
            k2: 0.0,
        };
        for nu in [0.001, 0.5, 1.0, 7.3, 100.0] {
            assert_eq!(wave_vector(nu, 1.0, &k), 2.5);
        }
    }

    #[test]
    fn linear_in_nu_without_second_order() {
        let k = KCoefficients {
            k0: 1.0,
            k1: 5.0,
            k2: 0.0,
        };
        let nu_c = 1.0;
        // k(ν) − k(ν_c) should scale linearly with (ν − ν_c)
        let d1 = wave_vector(1.2, nu_c, &k) - wave_vector(1.0, nu_c, &k);
        let d2 = wave_vector(1.4, nu_c, &k) - wave_vector(1.0, nu_c, &k);
        assert!((d2 - 2.0 * d1).abs() < 1e-12, "d1={}, d2={}", d1, d2);
    }

    #[test]
    fn at_centre_frequency_reduces_to_k0() {
        let k = KCoefficients {
            k0: 0.7,
            k1: 3.0,
            k2: 11.0,
        };
        assert!((wave_vector(2.0, 2.0, &k) - 0.7).abs() < 1e-12);
    }
}
