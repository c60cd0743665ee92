use ndarray::Array1;

use crate::{
    error::{ConfigError, ConfigResult},
    helper::ensure_same_len,
};

// Oscillator phase noise, as paired offset-frequency / power-density samples.
#[derive(Clone, Debug, PartialEq)]
pub struct PhaseNoise {
    // Offset frequencies (Hz)
    pub freqs: Array1<f64>,
    // Power spectral density (dB/Hz)
    pub power: Array1<f64>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RfProperties {
    // Transmit power (dBm)
    pub tx_power: f64,
    pub phase_noise: Option<PhaseNoise>,
}

impl RfProperties {
    pub fn pn_freqs(&self) -> Option<&Array1<f64>> {
        self.phase_noise.as_ref().map(|pn| &pn.freqs)
    }

    pub fn pn_power(&self) -> Option<&Array1<f64>> {
        self.phase_noise.as_ref().map(|pn| &pn.power)
    }
}

/// Pairs up the phase-noise spectrum. Succeeds when both halves are absent, or
/// both are present with equal length; the values themselves are passed through.
pub fn validate_rf(
    tx_power: f64,
    pn_freqs: Option<&[f64]>,
    pn_power: Option<&[f64]>,
) -> ConfigResult<RfProperties> {
    let phase_noise = match (pn_freqs, pn_power) {
        (None, None) => None,
        (Some(freqs), Some(power)) => {
            ensure_same_len("pn_f", freqs.len(), "pn_power", power.len())?;
            Some(PhaseNoise {
                freqs: Array1::from(freqs.to_vec()),
                power: Array1::from(power.to_vec()),
            })
        }
        _ => {
            return Err(ConfigError::UnpairedFields {
                first: "pn_f",
                second: "pn_power",
            })
        }
    };

    Ok(RfProperties {
        tx_power,
        phase_noise,
    })
}
