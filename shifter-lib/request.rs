//! Shift direction and repeat count of a single user action.

use crate::config::Config;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Direction {
  /// Successor, ascending order.
  Up,
  /// Predecessor, descending order.
  Down,
}

impl Direction {
  #[inline]
  pub const fn is_up(self) -> bool {
    matches!(self, Self::Up)
  }

  #[inline]
  pub const fn signum(self) -> i128 {
    match self {
      Self::Up => 1,
      Self::Down => -1,
    }
  }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ShiftRequest {
  pub direction: Direction,
  /// Cumulative "shift more" count; `None` is a single default-size shift.
  pub repeat:    Option<u32>,
}

impl ShiftRequest {
  pub const fn new(direction: Direction) -> Self {
    Self {
      direction,
      repeat: None,
    }
  }

  pub const fn up() -> Self {
    Self::new(Direction::Up)
  }

  pub const fn down() -> Self {
    Self::new(Direction::Down)
  }

  pub const fn repeated(direction: Direction, repeat: u32) -> Self {
    Self {
      direction,
      repeat: Some(repeat),
    }
  }

  /// A "shift more" request using the configured step size.
  pub fn more(direction: Direction, config: &Config) -> Self {
    Self::repeated(direction, config.shift_more_size)
  }

  /// Number of steps, at least one.
  #[inline]
  pub fn amount(&self) -> u32 {
    self.repeat.unwrap_or(1).max(1)
  }

  /// Steps with the sign of the direction applied.
  #[inline]
  pub fn delta(&self) -> i128 {
    self.direction.signum() * i128::from(self.amount())
  }
}
