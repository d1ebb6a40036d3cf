//! Numeric display state
//!
//! The digit buffer holds what is shown; the segment module turns it into
//! the bytes a 7-segment driver expects.

pub mod digits;
pub mod segments;

pub use digits::DigitBuffer;
pub use segments::{compose_segments, segment_for, BLANK, DECIMAL_POINT, SEGMENT_TABLE};
