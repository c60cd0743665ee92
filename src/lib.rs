pub mod antenna;
pub mod array_ext;
pub mod channel;
pub mod error;
pub mod helper;
pub mod modulation;
pub mod rf;
pub mod sequence;
pub mod transmitter;
pub mod waveform;

pub use channel::{ChannelConfig, ChannelProperties, ChannelSpec};
pub use error::{ConfigError, ConfigResult};
pub use sequence::ScalarOrSeq;
pub use transmitter::{Transmitter, TransmitterConfig, TransmitterSpec};
