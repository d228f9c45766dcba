use shifter_core::chars::char_is_quote;

use super::Recognizer;
use crate::{
  engine::ShiftEngine,
  fragment::{
    Probe,
    TypeTag,
  },
  request::ShiftRequest,
  text::swap_quotes,
};

fn is_quoted(text: &str) -> bool {
  let mut chars = text.chars();
  match (chars.next(), chars.next_back()) {
    (Some(open), Some(close)) => char_is_quote(open) && open == close,
    _ => false,
  }
}

/// Text wrapped in a matching pair of quotes. Shifting swaps single and
/// double quotes throughout.
pub struct QuotedString;

impl Recognizer for QuotedString {
  fn name(&self) -> &'static str {
    "quoted-string"
  }

  fn classify(&self, probe: &Probe, _cx: &ShiftEngine) -> Option<TypeTag> {
    is_quoted(probe.text).then_some(TypeTag::QuotedString)
  }

  fn shift(&self, probe: &Probe, _request: ShiftRequest, _cx: &ShiftEngine) -> Option<String> {
    Some(swap_quotes(probe.text))
  }
}

#[cfg(test)]
mod test {
  use super::*;

  #[test]
  fn quoted_shapes() {
    assert!(is_quoted("'foo'"));
    assert!(is_quoted("\"foo\""));
    assert!(is_quoted("`foo`"));
    assert!(is_quoted("''"));
    assert!(!is_quoted("'"));
    assert!(!is_quoted("'foo\""));
    assert!(!is_quoted("foo"));
  }
}
