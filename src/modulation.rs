use ndarray::{Array1, Zip};
use num::complex::Complex64;

use crate::helper::phasor;

pub mod pulse;
pub mod waveform;

// Elementwise amp * exp(i * phs), phases in degrees. Callers check lengths.
pub fn modulation_vector(amp: &Array1<f64>, phs: &Array1<f64>) -> Array1<Complex64> {
    Zip::from(amp)
        .and(phs)
        .map_collect(|&amp, &phs| phasor(amp, phs))
}
