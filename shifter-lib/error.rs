use thiserror::Error;

use crate::change::ChangeError;

/// Why a shift request left the text alone.
///
/// [`ShiftError::UserCancelled`] and [`ShiftError::Change`] are worth
/// surfacing to a user; the other variants mean "nothing to do here" and
/// callers fall back to a coarser scope or give up silently.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ShiftError {
  #[error("no shiftable value found")]
  NotShiftable,
  #[error("block selection holds mixed values")]
  AmbiguousBlock,
  #[error("malformed number '{text}'")]
  MalformedNumber { text: String },
  #[error("shift cancelled")]
  UserCancelled,
  /// The host rejected a planned change.
  #[error(transparent)]
  Change(#[from] ChangeError),
}

impl ShiftError {
  pub fn is_silent(&self) -> bool {
    !matches!(self, Self::UserCancelled | Self::Change(_))
  }
}

pub type Result<T> = std::result::Result<T, ShiftError>;
