//! Character classes, line endings and caret-relative token scanning.
//!
//! Everything in here works on char offsets over a [`ropey::RopeSlice`] and
//! knows nothing about the values a token may hold.

pub mod chars;
pub mod line_ending;
pub mod scan;
