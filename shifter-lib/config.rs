//! Immutable configuration snapshot consumed by every shift operation.
//!
//! The engine never writes configuration. Hosts deserialize a [`Config`]
//! from TOML (or build one in code) and hand it to
//! [`crate::ScopeResolver::new`]; picking up changed preferences means
//! building a new resolver.
//!
//! ```
//! use shifter_lib::config::{Config, SortCase};
//!
//! let config = Config::from_toml("sort-case = \"case-insensitive\"").unwrap();
//! assert_eq!(config.sort_case, SortCase::CaseInsensitive);
//! assert_eq!(config.shift_more_size, 10);
//! ```

use serde::Deserialize;
use thiserror::Error;

pub const DEFAULT_SHIFT_MORE_SIZE: u32 = 10;
pub const MIN_SHIFT_MORE_SIZE: u32 = 2;

#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("failed to parse config: {0}")]
  Parse(#[from] toml::de::Error),
  #[error("shift-more-size must be at least {MIN_SHIFT_MORE_SIZE}, got {0}")]
  InvalidShiftMoreSize(u32),
}

type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortCase {
  #[default]
  CaseSensitive,
  CaseInsensitive,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TimestampUnit {
  #[default]
  Seconds,
  Milliseconds,
}

impl TimestampUnit {
  /// Digit count of a present-day epoch value in this unit.
  pub const fn digits(self) -> usize {
    match self {
      Self::Seconds => 10,
      Self::Milliseconds => 13,
    }
  }

  pub const fn per_day(self) -> i128 {
    match self {
      Self::Seconds => 86_400,
      Self::Milliseconds => 86_400_000,
    }
  }
}

/// What happens when an unsigned number is shifted below zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NegativeNumbers {
  /// `0` shifts down to `-1`.
  #[default]
  Allow,
  /// `0` stays `0`.
  Clamp,
  /// `00` shifts down to `99`.
  Wrap,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct Config {
  pub sort_case:        SortCase,
  pub shift_more_size:  u32,
  pub timestamp_unit:   TimestampUnit,
  pub preserve_case:    bool,
  pub negative_numbers: NegativeNumbers,
  /// Newline-delimited user dictionary terms.
  pub dictionary:       String,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      sort_case:        SortCase::default(),
      shift_more_size:  DEFAULT_SHIFT_MORE_SIZE,
      timestamp_unit:   TimestampUnit::default(),
      preserve_case:    true,
      negative_numbers: NegativeNumbers::default(),
      dictionary:       String::new(),
    }
  }
}

impl Config {
  pub fn from_toml(source: &str) -> Result<Self> {
    let config: Config = toml::from_str(source)?;
    config.validate()
  }

  pub fn from_value(value: toml::Value) -> Result<Self> {
    let config: Config = value.try_into()?;
    config.validate()
  }

  fn validate(self) -> Result<Self> {
    if self.shift_more_size < MIN_SHIFT_MORE_SIZE {
      return Err(ConfigError::InvalidShiftMoreSize(self.shift_more_size));
    }
    Ok(self)
  }
}

#[cfg(test)]
mod test {
  use super::*;

  #[test]
  fn empty_source_is_default() {
    assert_eq!(Config::from_toml("").unwrap(), Config::default());
  }

  #[test]
  fn parses_every_key() {
    let config = Config::from_toml(
      r#"
        sort-case = "case-insensitive"
        shift-more-size = 5
        timestamp-unit = "milliseconds"
        preserve-case = false
        negative-numbers = "wrap"
        dictionary = "alpha\nbeta\n"
      "#,
    )
    .unwrap();

    assert_eq!(config.sort_case, SortCase::CaseInsensitive);
    assert_eq!(config.shift_more_size, 5);
    assert_eq!(config.timestamp_unit, TimestampUnit::Milliseconds);
    assert!(!config.preserve_case);
    assert_eq!(config.negative_numbers, NegativeNumbers::Wrap);
    assert_eq!(config.dictionary, "alpha\nbeta\n");
  }

  #[test]
  fn rejects_small_shift_more_size() {
    assert!(matches!(
      Config::from_toml("shift-more-size = 1"),
      Err(ConfigError::InvalidShiftMoreSize(1))
    ));
  }

  #[test]
  fn rejects_unknown_keys() {
    assert!(matches!(
      Config::from_toml("colour = 1"),
      Err(ConfigError::Parse(_))
    ));
  }

  #[test]
  fn timestamp_units() {
    assert_eq!(TimestampUnit::Seconds.digits(), 10);
    assert_eq!(TimestampUnit::Milliseconds.per_day(), 86_400_000);
  }
}
