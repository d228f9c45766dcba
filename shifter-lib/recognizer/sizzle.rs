use once_cell::sync::Lazy;
use regex::Regex;

use super::Recognizer;
use crate::{
  case::to_camel_case,
  engine::ShiftEngine,
  fragment::{
    Probe,
    TypeTag,
  },
  request::ShiftRequest,
};

static SIZZLE: Lazy<Regex> =
  Lazy::new(|| Regex::new(r#"^\$\(\s*['"]([^'"]+)['"]\s*\)$"#).unwrap());

/// A jQuery selector call `$('…')`, shifted into a variable declaration
/// named after the selector.
pub struct SizzleSelector;

impl Recognizer for SizzleSelector {
  fn name(&self) -> &'static str {
    "sizzle-selector"
  }

  fn classify(&self, probe: &Probe, _cx: &ShiftEngine) -> Option<TypeTag> {
    SIZZLE
      .is_match(probe.text.trim())
      .then_some(TypeTag::SizzleSelector)
  }

  fn shift(&self, probe: &Probe, _request: ShiftRequest, _cx: &ShiftEngine) -> Option<String> {
    let call = probe.text.trim();
    let selector = SIZZLE.captures(call)?.get(1)?.as_str();
    let name = to_camel_case(selector.chars());
    if name.is_empty() {
      return None;
    }
    Some(format!("var ${name} = {call};"))
  }
}

#[cfg(test)]
mod test {
  use super::*;
  use crate::{
    config::Config,
    dictionary::Dictionaries,
  };

  #[test]
  fn declares_a_variable() {
    let config = Config::default();
    let dictionaries = Dictionaries::builtin();
    let cx = ShiftEngine::new(&config, &dictionaries);
    let shift = |text: &str| SizzleSelector.shift(&Probe::new(text), ShiftRequest::up(), &cx);

    assert_eq!(
      shift("$('#main-menu')").as_deref(),
      Some("var $mainMenu = $('#main-menu');")
    );
    assert_eq!(
      shift("$( \".item a\" )").as_deref(),
      Some("var $itemA = $( \".item a\" );")
    );
    assert_eq!(shift("$('#')"), None);
  }

  #[test]
  fn selector_shapes() {
    assert!(SIZZLE.is_match("$('div')"));
    assert!(!SIZZLE.is_match("$('div').hide()"));
    assert!(!SIZZLE.is_match("jQuery('div')"));
  }
}
