use ndarray::Array1;
use num::complex::Complex64;

use crate::{error::ConfigResult, helper::ensure_same_len, sequence::ScalarOrSeq};

use super::modulation_vector;

/// Intra-pulse modulation of one channel: a complex envelope `mod_var` sampled
/// at the times `mod_t`.
#[derive(Clone, Debug, PartialEq)]
pub enum WaveformModulation {
    Disabled,
    Enabled {
        mod_var: Array1<Complex64>,
        mod_t: Array1<f64>,
    },
}

impl WaveformModulation {
    pub fn enabled(&self) -> bool {
        matches!(self, WaveformModulation::Enabled { .. })
    }

    pub fn mod_var(&self) -> Option<&Array1<Complex64>> {
        match self {
            WaveformModulation::Disabled => None,
            WaveformModulation::Enabled { mod_var, .. } => Some(mod_var),
        }
    }

    pub fn mod_t(&self) -> Option<&Array1<f64>> {
        match self {
            WaveformModulation::Disabled => None,
            WaveformModulation::Enabled { mod_t, .. } => Some(mod_t),
        }
    }
}

// Fills in whichever of amplitude/phase is missing:
//
// | amp  | phs  | result                 |
// |------|------|------------------------|
// | none | none | none                   |
// | amp  | none | (amp, zeros_like(amp)) |
// | none | phs  | (ones_like(phs), phs)  |
// | amp  | phs  | (amp, phs)             |
pub fn default_amp_phs(
    amp: Option<&ScalarOrSeq<f64>>,
    phs: Option<&ScalarOrSeq<f64>>,
) -> Option<(ScalarOrSeq<f64>, ScalarOrSeq<f64>)> {
    match (amp, phs) {
        (None, None) => None,
        (Some(amp), None) => Some((amp.clone(), amp.fill_like(0.))),
        (None, Some(phs)) => Some((phs.fill_like(1.), phs.clone())),
        (Some(amp), Some(phs)) => Some((amp.clone(), phs.clone())),
    }
}

/// Builds the waveform modulation record for one channel.
///
/// Without a time axis, or without either of `amp`/`phs`, the channel is
/// simply unmodulated. Scalars expand the same way as the waveform itself:
/// `amp`/`phs` to a flat pair, `mod_t` to `[0, mod_t]`.
pub fn process_waveform_modulation(
    mod_t: Option<&ScalarOrSeq<f64>>,
    amp: Option<&ScalarOrSeq<f64>>,
    phs: Option<&ScalarOrSeq<f64>>,
) -> ConfigResult<WaveformModulation> {
    let (mod_t, (amp, phs)) = match (mod_t, default_amp_phs(amp, phs)) {
        (Some(mod_t), Some(amp_phs)) => (mod_t, amp_phs),
        _ => return Ok(WaveformModulation::Disabled),
    };

    let amp = amp.expand_pair();
    let phs = phs.expand_pair();
    let mod_t = mod_t.expand_span();

    ensure_same_len("amp", amp.len(), "phs", phs.len())?;
    let mod_var = modulation_vector(&amp, &phs);
    ensure_same_len("mod_t", mod_t.len(), "amp", mod_var.len())?;

    Ok(WaveformModulation::Enabled { mod_var, mod_t })
}
