mod header;
pub use header::Header;

mod azimuth_segment_header;
pub use azimuth_segment_header::AzimuthSegmentHeader;

mod range_zone;
pub use range_zone::RangeZone;

mod definitions;
pub use definitions::OpCode;
