use super::Recognizer;
use crate::{
  case::preserve_case,
  engine::ShiftEngine,
  fragment::{
    Probe,
    TypeTag,
  },
  request::ShiftRequest,
};

/// Two-valued keywords such as `true`/`false` and `on`/`off`.
pub struct Boolean;

impl Recognizer for Boolean {
  fn name(&self) -> &'static str {
    "boolean"
  }

  fn classify(&self, probe: &Probe, cx: &ShiftEngine) -> Option<TypeTag> {
    cx.dictionaries
      .find_boolean(probe.text)
      .map(|_| TypeTag::Boolean)
  }

  fn shift(&self, probe: &Probe, request: ShiftRequest, cx: &ShiftEngine) -> Option<String> {
    let pair = cx.dictionaries.find_boolean(probe.text)?;
    let toggled = pair.shift(probe.text, request.direction, 1)?;
    Some(preserve_case(probe.text, toggled).into())
  }
}

/// Terms of the built-in and user dictionaries.
pub struct DictionaryWord;

impl Recognizer for DictionaryWord {
  fn name(&self) -> &'static str {
    "dictionary-word"
  }

  fn classify(&self, probe: &Probe, cx: &ShiftEngine) -> Option<TypeTag> {
    cx.dictionaries
      .find_word(probe.text)
      .map(|dictionary| TypeTag::DictionaryWord(dictionary.id()))
  }

  fn shift(&self, probe: &Probe, request: ShiftRequest, cx: &ShiftEngine) -> Option<String> {
    let dictionary = cx.dictionaries.find_word(probe.text)?;
    let shifted = dictionary.shift(probe.text, request.direction, request.amount())?;
    Some(if cx.config.preserve_case {
      preserve_case(probe.text, shifted).into()
    } else {
      shifted.to_owned()
    })
  }
}

#[cfg(test)]
mod test {
  use super::*;
  use crate::{
    config::Config,
    dictionary::Dictionaries,
    request::Direction,
  };

  fn shift_word(config: &Config, text: &str, request: ShiftRequest) -> Option<String> {
    let dictionaries = Dictionaries::load(config);
    let cx = ShiftEngine::new(config, &dictionaries);
    DictionaryWord.shift(&Probe::new(text), request, &cx)
  }

  #[test]
  fn booleans_toggle_keeping_case() {
    let config = Config::default();
    let dictionaries = Dictionaries::builtin();
    let cx = ShiftEngine::new(&config, &dictionaries);
    let toggle = |text: &str| Boolean.shift(&Probe::new(text), ShiftRequest::up(), &cx);
    assert_eq!(toggle("true").as_deref(), Some("false"));
    assert_eq!(toggle("FALSE").as_deref(), Some("TRUE"));
    assert_eq!(toggle("Yes").as_deref(), Some("No"));
    assert_eq!(toggle("maybe"), None);
  }

  #[test]
  fn words_step_through_their_dictionary() {
    let config = Config::default();
    let up = ShiftRequest::up();
    assert_eq!(shift_word(&config, "Monday", up).as_deref(), Some("Tuesday"));
    assert_eq!(shift_word(&config, "SUN", up).as_deref(), Some("MON"));
    assert_eq!(
      shift_word(&config, "january", ShiftRequest::down()).as_deref(),
      Some("december")
    );
    assert_eq!(
      shift_word(&config, "monday", ShiftRequest::repeated(Direction::Up, 10)).as_deref(),
      Some("thursday")
    );
  }

  #[test]
  fn canonical_spelling_without_case_preservation() {
    let config = Config {
      preserve_case: false,
      ..Config::default()
    };
    assert_eq!(
      shift_word(&config, "MONDAY", ShiftRequest::up()).as_deref(),
      Some("tuesday")
    );
  }

  #[test]
  fn user_dictionary_terms() {
    let config = Config {
      dictionary: "|low|medium|high|\n".to_owned(),
      ..Config::default()
    };
    assert_eq!(
      shift_word(&config, "high", ShiftRequest::up()).as_deref(),
      Some("low")
    );
    assert_eq!(shift_word(&config, "High", ShiftRequest::up()), None);
  }
}
