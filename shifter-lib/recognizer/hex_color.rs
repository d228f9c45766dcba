use once_cell::sync::Lazy;
use regex::Regex;

use super::Recognizer;
use crate::{
  engine::ShiftEngine,
  fragment::{
    Probe,
    TypeTag,
  },
  request::ShiftRequest,
};

static HEX_COLOR: Lazy<Regex> =
  Lazy::new(|| Regex::new(r"^#(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{6})$").unwrap());

/// `#rgb` and `#rrggbb` colors, shifted as one hex number that wraps at
/// its width.
pub struct HexColor;

impl Recognizer for HexColor {
  fn name(&self) -> &'static str {
    "hex-color"
  }

  fn classify(&self, probe: &Probe, _cx: &ShiftEngine) -> Option<TypeTag> {
    HEX_COLOR.is_match(probe.text).then_some(TypeTag::HexColor)
  }

  fn shift(&self, probe: &Probe, request: ShiftRequest, _cx: &ShiftEngine) -> Option<String> {
    let digits = probe.text.strip_prefix('#')?;
    let value = i64::from_str_radix(digits, 16).ok()?;
    let modulus = 16i64.pow(digits.len() as u32);
    let delta = i64::try_from(request.delta()).ok()?;
    let shifted = (value + delta).rem_euclid(modulus);

    let width = digits.len();
    let uppercase = digits.chars().any(|c| c.is_ascii_uppercase());
    Some(if uppercase {
      format!("#{shifted:0width$X}")
    } else {
      format!("#{shifted:0width$x}")
    })
  }
}
