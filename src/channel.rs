use nalgebra::Vector3;
use ndarray::{Array1, Array2};
use num::complex::Complex64;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    antenna::{
        AntennaPattern, PatternCut, DEFAULT_AZIMUTH_RANGE, DEFAULT_ELEVATION_RANGE,
        DEFAULT_PATTERN_DB,
    },
    error::{ConfigError, ConfigResult},
    modulation::{
        pulse::process_pulse_modulation,
        waveform::{process_waveform_modulation, WaveformModulation},
    },
    sequence::ScalarOrSeq,
};

pub const DEFAULT_GRID_SIZE: f64 = 1.;

// Vertical polarization
pub const DEFAULT_POLARIZATION: [Complex64; 3] = [
    Complex64::new(0., 0.),
    Complex64::new(0., 0.),
    Complex64::new(1., 0.),
];

fn default_grid() -> f64 {
    DEFAULT_GRID_SIZE
}
fn default_polarization() -> [Complex64; 3] {
    DEFAULT_POLARIZATION
}
fn default_azimuth_angle() -> Vec<f64> {
    DEFAULT_AZIMUTH_RANGE.to_vec()
}
fn default_elevation_angle() -> Vec<f64> {
    DEFAULT_ELEVATION_RANGE.to_vec()
}
fn default_pattern() -> Vec<f64> {
    DEFAULT_PATTERN_DB.to_vec()
}

/// Description of one transmit element as supplied by the caller.
///
/// Only `location` is required. Circular polarization is expressed with
/// complex components, e.g. `[0, 1, i]` for right-handed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChannelSpec {
    // Position relative to the radar (m)
    pub location: [f64; 3],
    #[serde(default = "default_polarization")]
    pub polarization: [Complex64; 3],
    // Transmit delay (s)
    #[serde(default)]
    pub delay: f64,
    // Ray tracing occupancy grid (deg)
    #[serde(default = "default_grid")]
    pub grid: f64,
    #[serde(default = "default_azimuth_angle")]
    pub azimuth_angle: Vec<f64>,
    #[serde(default = "default_pattern")]
    pub azimuth_pattern: Vec<f64>,
    #[serde(default = "default_elevation_angle")]
    pub elevation_angle: Vec<f64>,
    #[serde(default = "default_pattern")]
    pub elevation_pattern: Vec<f64>,
    // Per-pulse amplitude and phase code (deg)
    #[serde(default)]
    pub pulse_amp: Option<Vec<f64>>,
    #[serde(default)]
    pub pulse_phs: Option<Vec<f64>>,
    // Intra-pulse modulation schedule
    #[serde(default)]
    pub mod_t: Option<ScalarOrSeq<f64>>,
    #[serde(default)]
    pub amp: Option<ScalarOrSeq<f64>>,
    #[serde(default)]
    pub phs: Option<ScalarOrSeq<f64>>,
}

impl ChannelSpec {
    pub fn at(location: [f64; 3]) -> ChannelSpec {
        ChannelSpec {
            location,
            polarization: DEFAULT_POLARIZATION,
            delay: 0.,
            grid: DEFAULT_GRID_SIZE,
            azimuth_angle: default_azimuth_angle(),
            azimuth_pattern: default_pattern(),
            elevation_angle: default_elevation_angle(),
            elevation_pattern: default_pattern(),
            pulse_amp: None,
            pulse_phs: None,
            mod_t: None,
            amp: None,
            phs: None,
        }
    }

    pub fn with_polarization(mut self, polarization: [Complex64; 3]) -> Self {
        self.polarization = polarization;
        self
    }

    pub fn with_delay(mut self, delay: f64) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_grid(mut self, grid: f64) -> Self {
        self.grid = grid;
        self
    }

    pub fn with_azimuth(mut self, angle: Vec<f64>, pattern: Vec<f64>) -> Self {
        self.azimuth_angle = angle;
        self.azimuth_pattern = pattern;
        self
    }

    pub fn with_elevation(mut self, angle: Vec<f64>, pattern: Vec<f64>) -> Self {
        self.elevation_angle = angle;
        self.elevation_pattern = pattern;
        self
    }

    pub fn with_pulse_modulation(mut self, amp: Vec<f64>, phs: Vec<f64>) -> Self {
        self.pulse_amp = Some(amp);
        self.pulse_phs = Some(phs);
        self
    }

    pub fn with_waveform_modulation(
        mut self,
        mod_t: Option<ScalarOrSeq<f64>>,
        amp: Option<ScalarOrSeq<f64>>,
        phs: Option<ScalarOrSeq<f64>>,
    ) -> Self {
        self.mod_t = mod_t;
        self.amp = amp;
        self.phs = phs;
        self
    }
}

/// Fully processed properties of one transmit channel.
#[derive(Clone, Debug, PartialEq)]
pub struct ChannelConfig {
    pub delay: f64,
    pub grid: f64,
    pub location: Vector3<f64>,
    pub polarization: Vector3<Complex64>,
    pub waveform_modulation: WaveformModulation,
    // One complex weight per pulse
    pub pulse_modulation: Array1<Complex64>,
    pub azimuth: AntennaPattern,
    pub elevation: AntennaPattern,
    // Peak of the raw azimuth pattern (dB)
    pub antenna_peak_gain_db: f64,
}

impl ChannelConfig {
    pub fn from_spec(spec: &ChannelSpec, pulse_count: usize) -> ConfigResult<ChannelConfig> {
        let waveform_modulation = process_waveform_modulation(
            spec.mod_t.as_ref(),
            spec.amp.as_ref(),
            spec.phs.as_ref(),
        )?;

        let pulse_amp = match &spec.pulse_amp {
            Some(amp) => Array1::from(amp.clone()),
            None => Array1::ones(pulse_count),
        };
        let pulse_phs = match &spec.pulse_phs {
            Some(phs) => Array1::from(phs.clone()),
            None => Array1::zeros(pulse_count),
        };
        let pulse_modulation = process_pulse_modulation(&pulse_amp, &pulse_phs, pulse_count)?;

        // Only the azimuth peak is carried as the channel gain.
        let (azimuth, antenna_peak_gain_db) = AntennaPattern::normalized(
            PatternCut::Azimuth,
            &spec.azimuth_angle,
            &spec.azimuth_pattern,
        )?;
        let (elevation, _) = AntennaPattern::normalized(
            PatternCut::Elevation,
            &spec.elevation_angle,
            &spec.elevation_pattern,
        )?;

        let [x, y, z] = spec.location;
        let [px, py, pz] = spec.polarization;

        Ok(ChannelConfig {
            delay: spec.delay,
            grid: spec.grid,
            location: Vector3::new(x, y, z),
            polarization: Vector3::new(px, py, pz),
            waveform_modulation,
            pulse_modulation,
            azimuth,
            elevation,
            antenna_peak_gain_db,
        })
    }
}

/// All transmit channels, plus the per-channel scalars and vectors stacked
/// into dense arrays indexed by channel. Patterns stay per channel because
/// their lengths may differ.
#[derive(Clone, Debug, PartialEq)]
pub struct ChannelProperties {
    channels: Vec<ChannelConfig>,
    delay: Array1<f64>,
    grid: Array1<f64>,
    // N x 3
    locations: Array2<f64>,
    // N x 3
    polarization: Array2<Complex64>,
    // N x pulse_count
    pulse_modulation: Array2<Complex64>,
    antenna_gains: Array1<f64>,
}

impl ChannelProperties {
    pub fn default_channels() -> Vec<ChannelSpec> {
        vec![ChannelSpec::at([0., 0., 0.])]
    }

    /// Processes every channel descriptor in order. The first failing channel
    /// aborts the whole batch, and its error carries the channel index.
    pub fn process(specs: &[ChannelSpec], pulse_count: usize) -> ConfigResult<ChannelProperties> {
        if specs.is_empty() {
            return Err(ConfigError::EmptySequence("channels"));
        }

        let channels = specs
            .iter()
            .enumerate()
            .map(|(index, spec)| {
                debug!(index, "processing transmit channel");
                ChannelConfig::from_spec(spec, pulse_count).map_err(|e| e.in_channel(index))
            })
            .collect::<ConfigResult<Vec<_>>>()?;

        Ok(ChannelProperties::stack(channels, pulse_count))
    }

    fn stack(channels: Vec<ChannelConfig>, pulse_count: usize) -> ChannelProperties {
        let n = channels.len();

        let delay = channels.iter().map(|ch| ch.delay).collect();
        let grid = channels.iter().map(|ch| ch.grid).collect();
        let antenna_gains = channels.iter().map(|ch| ch.antenna_peak_gain_db).collect();
        let locations = Array2::from_shape_fn((n, 3), |(i, j)| channels[i].location[j]);
        let polarization = Array2::from_shape_fn((n, 3), |(i, j)| channels[i].polarization[j]);
        let pulse_modulation =
            Array2::from_shape_fn((n, pulse_count), |(i, j)| channels[i].pulse_modulation[j]);

        ChannelProperties {
            channels,
            delay,
            grid,
            locations,
            polarization,
            pulse_modulation,
            antenna_gains,
        }
    }

    pub fn len(&self) -> usize {
        self.channels.len()
    }

    pub fn get(&self, index: usize) -> Option<&ChannelConfig> {
        self.channels.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ChannelConfig> {
        self.channels.iter()
    }

    pub fn as_slice(&self) -> &[ChannelConfig] {
        &self.channels
    }

    pub fn delay(&self) -> &Array1<f64> {
        &self.delay
    }

    pub fn grid(&self) -> &Array1<f64> {
        &self.grid
    }

    pub fn locations(&self) -> &Array2<f64> {
        &self.locations
    }

    pub fn polarization(&self) -> &Array2<Complex64> {
        &self.polarization
    }

    pub fn pulse_modulation(&self) -> &Array2<Complex64> {
        &self.pulse_modulation
    }

    pub fn antenna_gains(&self) -> &Array1<f64> {
        &self.antenna_gains
    }

    pub fn waveform_modulations(&self) -> impl Iterator<Item = &WaveformModulation> {
        self.channels.iter().map(|ch| &ch.waveform_modulation)
    }
}
