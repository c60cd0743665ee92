use ndarray::Array1;

use crate::{array_ext::ArrayExt, error::ConfigResult, helper::ensure_same_len};

pub const DEFAULT_AZIMUTH_RANGE: [f64; 2] = [-90., 90.];
pub const DEFAULT_ELEVATION_RANGE: [f64; 2] = [-90., 90.];
pub const DEFAULT_PATTERN_DB: [f64; 2] = [0., 0.];

// Which principal-plane cut a pattern describes. Only used to name fields in
// validation errors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PatternCut {
    Azimuth,
    Elevation,
}

impl PatternCut {
    fn field_names(self) -> (&'static str, &'static str) {
        match self {
            PatternCut::Azimuth => ("azimuth_angle", "azimuth_pattern"),
            PatternCut::Elevation => ("elevation_angle", "elevation_pattern"),
        }
    }
}

// One principal-plane cut of an antenna pattern, stored relative to its own
// peak so that max(pattern_db) == 0.
#[derive(Clone, Debug, PartialEq)]
pub struct AntennaPattern {
    // Angles (deg)
    pub angles: Array1<f64>,
    // Gain relative to peak (dB)
    pub pattern_db: Array1<f64>,
}

impl AntennaPattern {
    /// Validates a raw angle/gain cut and peak-normalizes it. Returns the
    /// normalized cut together with the raw peak gain (dB).
    pub fn normalized(
        cut: PatternCut,
        angles: &[f64],
        pattern_db: &[f64],
    ) -> ConfigResult<(AntennaPattern, f64)> {
        let (angle_field, pattern_field) = cut.field_names();
        ensure_same_len(angle_field, angles.len(), pattern_field, pattern_db.len())?;

        let raw = Array1::from(pattern_db.to_vec());
        let peak = raw.peak(pattern_field)?;

        Ok((
            AntennaPattern {
                angles: Array1::from(angles.to_vec()),
                pattern_db: raw - peak,
            },
            peak,
        ))
    }

    pub fn len(&self) -> usize {
        self.angles.len()
    }
}
