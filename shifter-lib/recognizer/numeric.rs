//! Plain numbers and CSS lengths.
//!
//! Numbers are shifted in scaled integer arithmetic, so `0.1` shifted up
//! once is `1.1` rather than `1.1000000000000001`. The count of fraction
//! digits and a zero-padded integer width are kept.

use once_cell::sync::Lazy;
use regex::Regex;

use super::{
  Recognizer,
  is_timestamp,
};
use crate::{
  config::NegativeNumbers,
  engine::ShiftEngine,
  error::{
    Result,
    ShiftError,
  },
  fragment::{
    Probe,
    TypeTag,
  },
  request::ShiftRequest,
};

static NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^-?\d+(?:\.\d+)?$").unwrap());
static NUMBER_WITH_UNIT: Lazy<Regex> =
  Lazy::new(|| Regex::new(r"^(-?\d+(?:\.\d+)?)([A-Za-z]+|%)$").unwrap());

const CSS_UNITS: &[&str] = &[
  "px", "em", "rem", "%", "vh", "vw", "vmin", "vmax", "pt", "pc", "cm", "mm", "in", "ex", "ch",
  "fr", "deg", "rad", "turn", "s", "ms",
];

pub fn is_integer(text: &str) -> bool {
  let digits = text.strip_prefix('-').unwrap_or(text);
  !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Adds `delta` to the decimal number `text`.
///
/// A result below zero of a non-negative input obeys `policy`.
pub fn shift_number(text: &str, delta: i128, policy: NegativeNumbers) -> Result<String> {
  let malformed = || {
    ShiftError::MalformedNumber {
      text: text.to_owned(),
    }
  };

  let (negative, magnitude) = match text.strip_prefix('-') {
    Some(rest) => (true, rest),
    None => (false, text),
  };
  let (int, frac) = match magnitude.split_once('.') {
    Some((int, frac)) if !frac.is_empty() => (int, frac),
    Some(_) => return Err(malformed()),
    None => (magnitude, ""),
  };
  if int.is_empty() || !(int.bytes().chain(frac.bytes())).all(|b| b.is_ascii_digit()) {
    return Err(malformed());
  }

  let scale = u32::try_from(frac.len())
    .ok()
    .and_then(|digits| 10i128.checked_pow(digits))
    .ok_or_else(malformed)?;
  let digits: i128 = format!("{int}{frac}").parse().map_err(|_| malformed())?;
  let value = if negative { -digits } else { digits };

  let mut shifted = delta
    .checked_mul(scale)
    .and_then(|delta| value.checked_add(delta))
    .ok_or_else(malformed)?;

  if !negative && shifted < 0 {
    match policy {
      NegativeNumbers::Allow => {},
      NegativeNumbers::Clamp => shifted = 0,
      NegativeNumbers::Wrap => {
        let modulus = u32::try_from(int.len())
          .ok()
          .and_then(|width| 10i128.checked_pow(width))
          .and_then(|limit| limit.checked_mul(scale))
          .ok_or_else(malformed)?;
        shifted = shifted.rem_euclid(modulus);
      },
    }
  }

  let width = if int.len() > 1 && int.starts_with('0') {
    int.len()
  } else {
    1
  };
  Ok(format_scaled(shifted, scale, frac.len(), width))
}

fn format_scaled(value: i128, scale: i128, frac_digits: usize, width: usize) -> String {
  let magnitude = value.unsigned_abs();
  let scale = scale.unsigned_abs();
  let sign = if value < 0 { "-" } else { "" };
  let mut out = format!("{sign}{:0width$}", magnitude / scale);
  if frac_digits > 0 {
    out.push_str(&format!(".{:0frac_digits$}", magnitude % scale));
  }
  out
}

fn shift_logged(text: &str, request: ShiftRequest, cx: &ShiftEngine) -> Option<String> {
  match shift_number(text, request.delta(), cx.config.negative_numbers) {
    Ok(shifted) => Some(shifted),
    Err(err) => {
      tracing::warn!("{err}");
      None
    },
  }
}

pub struct Numeric;

impl Recognizer for Numeric {
  fn name(&self) -> &'static str {
    "numeric"
  }

  fn classify(&self, probe: &Probe, cx: &ShiftEngine) -> Option<TypeTag> {
    (NUMBER.is_match(probe.text) && !is_timestamp(probe.text, cx.config.timestamp_unit))
      .then_some(TypeTag::Numeric)
  }

  fn shift(&self, probe: &Probe, request: ShiftRequest, cx: &ShiftEngine) -> Option<String> {
    shift_logged(probe.text, request, cx)
  }
}

pub struct CssUnit;

fn split_unit(text: &str) -> Option<(&str, &str)> {
  let captures = NUMBER_WITH_UNIT.captures(text)?;
  let number = captures.get(1)?.as_str();
  let unit = captures.get(2)?.as_str();
  CSS_UNITS
    .contains(&unit.to_ascii_lowercase().as_str())
    .then_some((number, unit))
}

impl Recognizer for CssUnit {
  fn name(&self) -> &'static str {
    "css-unit"
  }

  fn classify(&self, probe: &Probe, _cx: &ShiftEngine) -> Option<TypeTag> {
    split_unit(probe.text).map(|_| TypeTag::CssUnit)
  }

  fn shift(&self, probe: &Probe, request: ShiftRequest, cx: &ShiftEngine) -> Option<String> {
    let (number, unit) = split_unit(probe.text)?;
    let shifted = shift_logged(number, request, cx)?;
    Some(format!("{shifted}{unit}"))
  }
}

#[cfg(test)]
mod test {
  use super::*;

  fn shift(text: &str, delta: i128) -> String {
    shift_number(text, delta, NegativeNumbers::Allow).unwrap()
  }

  #[test]
  fn integers() {
    assert_eq!(shift("41", 1), "42");
    assert_eq!(shift("1", -1), "0");
    assert_eq!(shift("0", -1), "-1");
    assert_eq!(shift("-5", 10), "5");
    assert_eq!(shift("99", 1), "100");
  }

  #[test]
  fn decimals_keep_their_scale() {
    assert_eq!(shift("0.1", 1), "1.1");
    assert_eq!(shift("1.50", -1), "0.50");
    assert_eq!(shift("-0.5", 1), "0.5");
    assert_eq!(shift("0.5", -1), "-0.5");
  }

  #[test]
  fn zero_padding_is_kept() {
    assert_eq!(shift("007", 1), "008");
    assert_eq!(shift("09", 1), "10");
    assert_eq!(shift("00", 1), "01");
    assert_eq!(shift("01", -2), "-01");
  }

  #[test]
  fn negative_policies() {
    assert_eq!(shift_number("0", -1, NegativeNumbers::Clamp).unwrap(), "0");
    assert_eq!(shift_number("-3", -1, NegativeNumbers::Clamp).unwrap(), "-4");
    assert_eq!(shift_number("00", -1, NegativeNumbers::Wrap).unwrap(), "99");
    assert_eq!(shift_number("0", -1, NegativeNumbers::Wrap).unwrap(), "9");
    assert_eq!(shift_number("0.0", -1, NegativeNumbers::Wrap).unwrap(), "9.0");
  }

  #[test]
  fn malformed_numbers() {
    for text in ["", "-", "1.", ".5", "1e3", "12a"] {
      assert_eq!(
        shift_number(text, 1, NegativeNumbers::Allow),
        Err(ShiftError::MalformedNumber {
          text: text.to_owned(),
        })
      );
    }
    let huge = "9".repeat(40);
    assert!(shift_number(&huge, 1, NegativeNumbers::Allow).is_err());
  }

  #[test]
  fn integer_shape() {
    assert!(is_integer("12"));
    assert!(is_integer("-12"));
    assert!(!is_integer("1.2"));
    assert!(!is_integer("-"));
  }

  #[test]
  fn units() {
    assert_eq!(split_unit("12px"), Some(("12", "px")));
    assert_eq!(split_unit("-1.5EM"), Some(("-1.5", "EM")));
    assert_eq!(split_unit("50%"), Some(("50", "%")));
    assert_eq!(split_unit("12apples"), None);
    assert_eq!(split_unit("px"), None);
  }

  quickcheck::quickcheck! {
    fn up_then_down_restores(value: i64, steps: u16) -> bool {
      let text = value.to_string();
      let delta = i128::from(steps);
      let up = shift_number(&text, delta, NegativeNumbers::Allow).unwrap();
      shift_number(&up, -delta, NegativeNumbers::Allow).unwrap() == text
    }

    fn decimals_round_trip(value: i64, frac_digits: u8, steps: u16) -> bool {
      let frac_digits = usize::from(frac_digits % 5);
      let scale = 10i128.pow(frac_digits as u32);
      let text = format_scaled(i128::from(value), scale, frac_digits, 1);
      let delta = i128::from(steps);
      let up = shift_number(&text, delta, NegativeNumbers::Allow).unwrap();
      shift_number(&up, -delta, NegativeNumbers::Allow).unwrap() == text
    }

    fn padded_round_trip(value: u32, width: u8, steps: u8) -> bool {
      let width = 2 + usize::from(width % 6);
      let limit = 10i128.pow(width as u32 - 1);
      let delta = 1 + i128::from(steps % 9);
      // stays below `limit`, so the shifted value still has a leading zero
      let value = i128::from(value) % (limit - delta);
      let text = format!("{value:0width$}");
      let up = shift_number(&text, delta, NegativeNumbers::Allow).unwrap();
      up.len() == width && shift_number(&up, -delta, NegativeNumbers::Allow).unwrap() == text
    }
  }
}
