use ndarray::Array1;
use num::complex::Complex64;

use crate::{error::ConfigResult, helper::ensure_pulse_count};

use super::modulation_vector;

// Per-pulse complex weights: pulse_amp * exp(i * pulse_phs), one per pulse.
pub fn process_pulse_modulation(
    pulse_amp: &Array1<f64>,
    pulse_phs: &Array1<f64>,
    pulse_count: usize,
) -> ConfigResult<Array1<Complex64>> {
    ensure_pulse_count("pulse_amp", pulse_amp.len(), pulse_count)?;
    ensure_pulse_count("pulse_phs", pulse_phs.len(), pulse_count)?;

    Ok(modulation_vector(pulse_amp, pulse_phs))
}
