mod header;
pub use header::Header;

mod elevation_data_block;
pub use elevation_data_block::ElevationDataBlock;

mod channel_configuration;
pub use channel_configuration::ChannelConfiguration;

mod pattern_type;
pub use pattern_type::PatternType;

mod pulse_width;
pub use pulse_width::PulseWidth;

mod waveform_type;
pub use waveform_type::WaveformType;
