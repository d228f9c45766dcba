//! Planned replacements and their application.
//!
//! A shift is computed as a list of [`Change`]s before anything is written.
//! Changes are `(from, to, replacement)` char ranges, ascending and
//! non-overlapping, and are applied from the last one to the first so
//! earlier offsets stay valid.

use ropey::Rope;
use thiserror::Error;

use crate::{
  Tendril,
  host::EditorHost,
};

/// (from, to) replacement.
pub type Change = (usize, usize, Option<Tendril>);

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ChangeError {
  #[error("invalid change range: start {from} is after end {to}")]
  InvalidRange { from: usize, to: usize },
  #[error("change range {from}..{to} is out of bounds for document length {len}")]
  RangeOutOfBounds {
    from: usize,
    to:   usize,
    len:  usize,
  },
  #[error("change range {from}..{to} overlaps previous end {prev_end}")]
  OverlappingRange {
    prev_end: usize,
    from:     usize,
    to:       usize,
  },
}

pub type Result<T> = std::result::Result<T, ChangeError>;

fn validate_change_bounds(from: usize, to: usize, len: usize) -> Result<()> {
  if from > to {
    return Err(ChangeError::InvalidRange { from, to });
  }
  if to > len {
    return Err(ChangeError::RangeOutOfBounds { from, to, len });
  }
  Ok(())
}

/// Checks that `changes` are in bounds, ascending and non-overlapping.
pub fn validate(changes: &[Change], len: usize) -> Result<()> {
  let mut last = 0;
  for &(from, to, _) in changes {
    validate_change_bounds(from, to, len)?;
    if from < last {
      return Err(ChangeError::OverlappingRange {
        prev_end: last,
        from,
        to,
      });
    }
    last = to;
  }
  Ok(())
}

pub fn apply_to_rope(rope: &mut Rope, changes: &[Change]) -> Result<()> {
  validate(changes, rope.len_chars())?;
  for (from, to, text) in changes.iter().rev() {
    rope.remove(*from..*to);
    if let Some(text) = text {
      rope.insert(*from, text);
    }
  }
  Ok(())
}

pub fn apply_to_host<H: EditorHost + ?Sized>(host: &mut H, changes: &[Change]) -> Result<()> {
  validate(changes, host.read_text().len_chars())?;
  for (from, to, text) in changes.iter().rev() {
    host.replace_range(*from, *to, text.as_deref().unwrap_or(""))?;
  }
  Ok(())
}
