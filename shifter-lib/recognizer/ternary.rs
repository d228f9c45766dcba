use super::Recognizer;
use crate::{
  engine::ShiftEngine,
  fragment::{
    Probe,
    TypeTag,
  },
  request::ShiftRequest,
};

/// `condition ? first : second`, split at the first `?` and the first
/// following `:`. Null coalescing, optional chaining and `::` paths are no
/// ternaries.
fn split(text: &str) -> Option<(&str, &str, &str)> {
  let question = text.find('?')?;
  let rest = &text[question + 1..];
  if text[..question].ends_with('?') || rest.starts_with(['?', '.', ':']) {
    return None;
  }
  let colon = rest.find(':')?;
  if rest[colon + 1..].starts_with(':') {
    return None;
  }
  let (first, second) = (&rest[..colon], &rest[colon + 1..]);
  if first.trim().is_empty() || second.trim_end_matches(';').trim().is_empty() {
    return None;
  }
  Some((&text[..=question], first, second))
}

fn trimmed_bounds(text: &str, trailing: impl Fn(char) -> bool) -> (usize, usize) {
  let start = text.len() - text.trim_start().len();
  let end = text.trim_end_matches(trailing).len();
  (start, end.max(start))
}

/// Swaps the alternatives, keeping the whitespace around each and a
/// trailing semicolon in place.
pub struct TernaryExpression;

impl Recognizer for TernaryExpression {
  fn name(&self) -> &'static str {
    "ternary-expression"
  }

  fn classify(&self, probe: &Probe, _cx: &ShiftEngine) -> Option<TypeTag> {
    split(probe.text).map(|_| TypeTag::TernaryExpression)
  }

  fn shift(&self, probe: &Probe, _request: ShiftRequest, _cx: &ShiftEngine) -> Option<String> {
    let (condition, first, second) = split(probe.text)?;
    let (first_start, first_end) = trimmed_bounds(first, char::is_whitespace);
    let (second_start, second_end) =
      trimmed_bounds(second, |c: char| c.is_whitespace() || c == ';');

    Some(format!(
      "{condition}{}{}{}:{}{}{}",
      &first[..first_start],
      &second[second_start..second_end],
      &first[first_end..],
      &second[..second_start],
      &first[first_start..first_end],
      &second[second_end..],
    ))
  }
}

#[cfg(test)]
mod test {
  use super::*;
  use crate::{
    config::Config,
    dictionary::Dictionaries,
  };

  fn swap(text: &str) -> Option<String> {
    let config = Config::default();
    let dictionaries = Dictionaries::builtin();
    let cx = ShiftEngine::new(&config, &dictionaries);
    let probe = Probe::new(text);
    TernaryExpression.classify(&probe, &cx)?;
    TernaryExpression.shift(&probe, ShiftRequest::up(), &cx)
  }

  #[test]
  fn swaps_alternatives() {
    assert_eq!(swap("a ? b : c").as_deref(), Some("a ? c : b"));
    assert_eq!(
      swap("x = isSet ? 'yes' : 'no';").as_deref(),
      Some("x = isSet ? 'no' : 'yes';")
    );
    assert_eq!(swap("c?1:2").as_deref(), Some("c?2:1"));
    assert_eq!(swap("? on : off").as_deref(), Some("? off : on"));
  }

  #[test]
  fn rejects_lookalikes() {
    assert_eq!(swap("a ?? b : c"), None);
    assert_eq!(swap("a?.b : c"), None);
    assert_eq!(swap("a ? Foo::bar : c"), None);
    assert_eq!(swap("a ? b"), None);
    assert_eq!(swap("a ? : c"), None);
    assert_eq!(swap("a ? b : ;"), None);
  }
}
