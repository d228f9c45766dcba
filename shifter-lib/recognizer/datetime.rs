//! ISO dates, clock times and UNIX timestamps.

use chrono::{
  Duration,
  NaiveDate,
  NaiveTime,
};

use super::Recognizer;
use crate::{
  config::TimestampUnit,
  engine::ShiftEngine,
  fragment::{
    Probe,
    TypeTag,
  },
  request::ShiftRequest,
};

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M:%S";

/// An integer of exactly the digit count of a present-day epoch value.
pub fn is_timestamp(text: &str, unit: TimestampUnit) -> bool {
  text.len() == unit.digits() && !text.starts_with('0') && text.bytes().all(|b| b.is_ascii_digit())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Temporal {
  Date(NaiveDate),
  Time(NaiveTime),
  Timestamp(i128),
}

impl Temporal {
  fn parse(text: &str, unit: TimestampUnit) -> Option<Self> {
    // chrono accepts unpadded fields, the fixed lengths keep `2024-1-1` out
    match text.len() {
      10 if text.as_bytes()[4] == b'-' => {
        NaiveDate::parse_from_str(text, DATE_FORMAT)
          .ok()
          .map(Self::Date)
      },
      8 if text.as_bytes()[2] == b':' => {
        NaiveTime::parse_from_str(text, TIME_FORMAT)
          .ok()
          .map(Self::Time)
      },
      _ if is_timestamp(text, unit) => text.parse().ok().map(Self::Timestamp),
      _ => None,
    }
  }

  /// Dates move by days, times by seconds and timestamps by days in the
  /// configured unit.
  fn shift(self, delta: i64, unit: TimestampUnit) -> Option<String> {
    match self {
      Self::Date(date) => {
        let shifted = date.checked_add_signed(Duration::days(delta))?;
        Some(shifted.format(DATE_FORMAT).to_string())
      },
      Self::Time(time) => {
        let (shifted, _) = time.overflowing_add_signed(Duration::seconds(delta));
        Some(shifted.format(TIME_FORMAT).to_string())
      },
      Self::Timestamp(value) => {
        let shifted = value.checked_add(unit.per_day() * i128::from(delta))?;
        Some(shifted.to_string())
      },
    }
  }
}

pub struct DateOrTimestamp;

impl Recognizer for DateOrTimestamp {
  fn name(&self) -> &'static str {
    "date-or-timestamp"
  }

  fn classify(&self, probe: &Probe, cx: &ShiftEngine) -> Option<TypeTag> {
    Temporal::parse(probe.text, cx.config.timestamp_unit).map(|_| TypeTag::DateOrTimestamp)
  }

  fn shift(&self, probe: &Probe, request: ShiftRequest, cx: &ShiftEngine) -> Option<String> {
    let unit = cx.config.timestamp_unit;
    let delta = i64::try_from(request.delta()).ok()?;
    Temporal::parse(probe.text, unit)?.shift(delta, unit)
  }
}
