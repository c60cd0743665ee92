use thiserror::Error;

pub type ConfigResult<T> = Result<T, ConfigError>;

// Raised while building a transmitter configuration. Every variant names the
// field or field pair whose invariant was violated.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Both `{first}` and `{second}` must be provided together or both omitted")]
    UnpairedFields {
        first: &'static str,
        second: &'static str,
    },

    #[error("Lengths of `{first}` ({first_len}) and `{second}` ({second_len}) should be the same")]
    LengthMismatch {
        first: &'static str,
        first_len: usize,
        second: &'static str,
        second_len: usize,
    },

    #[error("{field} length ({len}) must match pulses ({expected})")]
    CountMismatch {
        field: &'static str,
        len: usize,
        expected: usize,
    },

    #[error("All PRP values ({prp:.2e} s) must be >= pulse_length ({pulse_length:.2e} s)")]
    PrpTooShort { prp: f64, pulse_length: f64 },

    #[error("Number of pulses must be at least 1, got {0}")]
    InvalidPulseCount(usize),

    #[error("`{0}` must contain at least one value")]
    EmptySequence(&'static str),

    #[error("Channel {index}: {source}")]
    Channel {
        index: usize,
        #[source]
        source: Box<ConfigError>,
    },
}

impl ConfigError {
    pub fn in_channel(self, index: usize) -> ConfigError {
        ConfigError::Channel {
            index,
            source: Box::new(self),
        }
    }
}
