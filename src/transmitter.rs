use std::fmt::{self, Display};

use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{
    channel::{ChannelConfig, ChannelProperties, ChannelSpec},
    error::ConfigResult,
    rf::{validate_rf, RfProperties},
    sequence::ScalarOrSeq,
    waveform::{normalize_waveform, WaveformProperties},
};

fn default_pulses() -> usize {
    1
}

/// Everything needed to describe a radar transmitter.
///
/// `f` may be a single tone, a `[start, stop]` sweep or an arbitrary
/// frequency profile sampled at the times in `t`. `t` may be a single pulse
/// duration or a time axis of the same length as `f`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransmitterSpec {
    // Frequency (Hz)
    pub f: ScalarOrSeq<f64>,
    // Time (s)
    pub t: ScalarOrSeq<f64>,
    // Transmit power (dBm)
    #[serde(default)]
    pub tx_power: f64,
    #[serde(default = "default_pulses")]
    pub pulses: usize,
    // Pulse repetition period (s), defaults to the pulse length
    #[serde(default)]
    pub prp: Option<ScalarOrSeq<f64>>,
    // Per-pulse frequency offset (Hz)
    #[serde(default)]
    pub f_offset: Option<ScalarOrSeq<f64>>,
    // Phase noise offset frequencies (Hz) and densities (dB/Hz)
    #[serde(default)]
    pub pn_f: Option<Vec<f64>>,
    #[serde(default)]
    pub pn_power: Option<Vec<f64>>,
    // A single channel at the origin when absent
    #[serde(default)]
    pub channels: Option<Vec<ChannelSpec>>,
}

impl TransmitterSpec {
    pub fn new(f: impl Into<ScalarOrSeq<f64>>, t: impl Into<ScalarOrSeq<f64>>) -> Self {
        TransmitterSpec {
            f: f.into(),
            t: t.into(),
            tx_power: 0.,
            pulses: default_pulses(),
            prp: None,
            f_offset: None,
            pn_f: None,
            pn_power: None,
            channels: None,
        }
    }

    pub fn with_tx_power(mut self, tx_power: f64) -> Self {
        self.tx_power = tx_power;
        self
    }

    pub fn with_pulses(mut self, pulses: usize) -> Self {
        self.pulses = pulses;
        self
    }

    pub fn with_prp(mut self, prp: impl Into<ScalarOrSeq<f64>>) -> Self {
        self.prp = Some(prp.into());
        self
    }

    pub fn with_f_offset(mut self, f_offset: impl Into<ScalarOrSeq<f64>>) -> Self {
        self.f_offset = Some(f_offset.into());
        self
    }

    pub fn with_phase_noise(
        mut self,
        pn_f: Option<Vec<f64>>,
        pn_power: Option<Vec<f64>>,
    ) -> Self {
        self.pn_f = pn_f;
        self.pn_power = pn_power;
        self
    }

    pub fn with_channels(mut self, channels: Vec<ChannelSpec>) -> Self {
        self.channels = Some(channels);
        self
    }

    pub fn build(&self) -> ConfigResult<Transmitter> {
        Transmitter::new(self)
    }
}

/// Canonical transmitter configuration consumed by the simulation engine.
///
/// Built in one pass from a [`TransmitterSpec`]: RF validation, waveform
/// normalization, then per-channel processing. Any failure aborts the whole
/// construction. There is no way to modify the result afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct Transmitter {
    rf: RfProperties,
    waveform: WaveformProperties,
    channels: ChannelProperties,
}

impl Transmitter {
    pub fn new(spec: &TransmitterSpec) -> ConfigResult<Transmitter> {
        let rf = validate_rf(spec.tx_power, spec.pn_f.as_deref(), spec.pn_power.as_deref())?;

        let waveform = normalize_waveform(
            &spec.f,
            &spec.t,
            spec.pulses,
            spec.f_offset.as_ref(),
            spec.prp.as_ref(),
        )?;

        let channels = match &spec.channels {
            Some(channels) => ChannelProperties::process(channels, waveform.pulse_count)?,
            None => ChannelProperties::process(
                &ChannelProperties::default_channels(),
                waveform.pulse_count,
            )?,
        };

        let tx = Transmitter {
            rf,
            waveform,
            channels,
        };
        info!(%tx, "transmitter configured");

        Ok(tx)
    }

    pub fn rf(&self) -> &RfProperties {
        &self.rf
    }

    pub fn waveform(&self) -> &WaveformProperties {
        &self.waveform
    }

    pub fn channels(&self) -> &ChannelProperties {
        &self.channels
    }

    pub fn frequency(&self) -> &Array1<f64> {
        &self.waveform.f
    }

    pub fn time(&self) -> &Array1<f64> {
        &self.waveform.t
    }

    pub fn bandwidth(&self) -> f64 {
        self.waveform.bandwidth
    }

    pub fn pulse_length(&self) -> f64 {
        self.waveform.pulse_length
    }

    pub fn num_pulses(&self) -> usize {
        self.waveform.pulse_count
    }

    pub fn num_channels(&self) -> usize {
        self.channels.len()
    }

    pub fn channel_locations(&self) -> &Array2<f64> {
        self.channels.locations()
    }

    pub fn channel(&self, index: usize) -> Option<&ChannelConfig> {
        self.channels.get(index)
    }
}

pub type TransmitterConfig = Transmitter;

impl Display for Transmitter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Transmitter(channels={}, pulses={}, bandwidth={:.3} GHz, pulse_length={:.1} μs)",
            self.num_channels(),
            self.num_pulses(),
            self.bandwidth() / 1e9,
            self.pulse_length() * 1e6
        )
    }
}
