//! Classification and shifting of single fragments.
//!
//! [`ShiftEngine`] is a borrowed view of everything recognizers may consult:
//! the configuration, the dictionaries and the text of the whole document.
//! It is cheap to build and holds no state of its own, so scope resolution
//! creates one per request.

use shifter_core::line_ending::{
  LineEnding,
  auto_detect_line_ending,
};

use crate::{
  config::Config,
  dictionary::Dictionaries,
  fragment::{
    Fragment,
    Probe,
    TypeTag,
  },
  recognizer::{
    self,
    PRIORITY,
  },
  request::ShiftRequest,
};

#[derive(Debug, Clone, Copy)]
pub struct ShiftEngine<'a> {
  pub config:       &'a Config,
  pub dictionaries: &'a Dictionaries,
  /// Full text of the edited document.
  pub document:     &'a str,
}

impl<'a> ShiftEngine<'a> {
  pub fn new(config: &'a Config, dictionaries: &'a Dictionaries) -> Self {
    Self {
      config,
      dictionaries,
      document: "",
    }
  }

  pub fn with_document(self, document: &'a str) -> Self {
    Self { document, ..self }
  }

  /// The document's line ending, LF for single-line documents.
  pub fn line_ending(&self) -> LineEnding {
    auto_detect_line_ending(self.document).unwrap_or(LineEnding::LF)
  }

  /// Tags the probe with the kind of the first recognizer claiming it.
  pub fn classify(&self, probe: &Probe) -> Fragment {
    let kind = PRIORITY
      .iter()
      .find_map(|recognizer| recognizer.classify(probe, self))
      .unwrap_or(TypeTag::PlainLine);
    tracing::trace!(text = probe.text, ?kind, "classified fragment");
    Fragment::new(probe, kind)
  }

  /// The shifted text, or `None` if the fragment has no shiftable kind or
  /// shifting leaves it as is.
  pub fn shift(&self, fragment: &Fragment, request: ShiftRequest) -> Option<String> {
    let recognizer = recognizer::for_tag(fragment.kind())?;
    let shifted = recognizer.shift(&fragment.probe(), request, self)?;
    if shifted == fragment.text() {
      return None;
    }
    tracing::debug!(
      recognizer = recognizer.name(),
      from = fragment.text(),
      to = shifted.as_str(),
      "shifted fragment"
    );
    Some(shifted)
  }

  /// Classifies and shifts in one go.
  pub fn shift_probe(&self, probe: &Probe, request: ShiftRequest) -> Option<(Fragment, String)> {
    let fragment = self.classify(probe);
    let shifted = self.shift(&fragment, request)?;
    Some((fragment, shifted))
  }
}

#[cfg(test)]
mod test {
  use super::*;
  use crate::request::Direction;

  fn shift(text: &str, request: ShiftRequest) -> Option<String> {
    let config = Config::default();
    let dictionaries = Dictionaries::load(&config);
    let engine = ShiftEngine::new(&config, &dictionaries);
    engine
      .shift_probe(&Probe::new(text), request)
      .map(|(_, shifted)| shifted)
  }

  #[test]
  fn shifts_by_kind() {
    assert_eq!(shift("9", ShiftRequest::up()).as_deref(), Some("10"));
    assert_eq!(shift("12px", ShiftRequest::down()).as_deref(), Some("11px"));
    assert_eq!(shift("#fff", ShiftRequest::up()).as_deref(), Some("#000"));
    assert_eq!(shift("True", ShiftRequest::up()).as_deref(), Some("False"));
    assert_eq!(shift("'a'", ShiftRequest::up()).as_deref(), Some("\"a\""));
    assert_eq!(shift("Friday", ShiftRequest::up()).as_deref(), Some("Saturday"));
    assert_eq!(shift("b, a, c", ShiftRequest::up()).as_deref(), Some("a, b, c"));
  }

  #[test]
  fn repeat_scales_the_step() {
    let more = ShiftRequest::repeated(Direction::Up, 10);
    assert_eq!(shift("5", more).as_deref(), Some("15"));
    assert_eq!(shift("2024-01-01", more).as_deref(), Some("2024-01-11"));
    // toggles ignore the repeat count
    assert_eq!(shift("on", more).as_deref(), Some("off"));
  }

  #[test]
  fn unchanged_results_are_not_shifts() {
    assert_eq!(shift("`tick`", ShiftRequest::up()), None);
    assert_eq!(shift("a, b, c", ShiftRequest::up()), None);
    assert_eq!(shift("plain words", ShiftRequest::up()), None);
  }

  #[test]
  fn clamped_zero_stays() {
    let config = Config {
      negative_numbers: crate::config::NegativeNumbers::Clamp,
      ..Config::default()
    };
    let dictionaries = Dictionaries::load(&config);
    let engine = ShiftEngine::new(&config, &dictionaries);
    assert!(engine.shift_probe(&Probe::new("0"), ShiftRequest::down()).is_none());
  }

  #[test]
  fn line_ending_follows_document() {
    let config = Config::default();
    let dictionaries = Dictionaries::builtin();
    let engine = ShiftEngine::new(&config, &dictionaries);
    assert_eq!(engine.line_ending(), LineEnding::LF);
    assert_eq!(
      engine.with_document("a\r\nb").line_ending(),
      LineEnding::Crlf
    );
  }
}
