use num::complex::Complex64;

use crate::error::{ConfigError, ConfigResult};

pub const DEGREES_TO_RADIANS: f64 = std::f64::consts::PI / 180.;

// amp * exp(i * phs), with the phase given in degrees.
pub fn phasor(amp: f64, phs_deg: f64) -> Complex64 {
    amp * Complex64::new(0., phs_deg * DEGREES_TO_RADIANS).exp()
}

pub fn ensure_same_len(
    first: &'static str,
    first_len: usize,
    second: &'static str,
    second_len: usize,
) -> ConfigResult<()> {
    if first_len != second_len {
        return Err(ConfigError::LengthMismatch {
            first,
            first_len,
            second,
            second_len,
        });
    }
    Ok(())
}

// Checks a per-pulse sequence against the declared pulse count.
pub fn ensure_pulse_count(field: &'static str, len: usize, pulses: usize) -> ConfigResult<()> {
    if len != pulses {
        return Err(ConfigError::CountMismatch {
            field,
            len,
            expected: pulses,
        });
    }
    Ok(())
}
