use once_cell::sync::Lazy;
use regex::{
  Captures,
  Regex,
};

use super::Recognizer;
use crate::{
  case::preserve_case,
  dictionary::shift_cyclic,
  engine::ShiftEngine,
  fragment::{
    Probe,
    TypeTag,
  },
  request::ShiftRequest,
};

const OPERATOR_GROUPS: &[&[char]] = &[&['+', '-'], &['*', '/', '%'], &['<', '>']];

static LOGICAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"&&|\|\||\b(?i:and|or)\b").unwrap());

fn single_char(text: &str) -> Option<char> {
  let mut chars = text.chars();
  let c = chars.next()?;
  chars.next().is_none().then_some(c)
}

/// Arithmetic and comparison operators standing alone between spaces.
pub struct Operator;

impl Recognizer for Operator {
  fn name(&self) -> &'static str {
    "operator"
  }

  fn classify(&self, probe: &Probe, _cx: &ShiftEngine) -> Option<TypeTag> {
    let c = single_char(probe.text)?;
    let spaced = probe.prefix_char == Some(' ') && probe.postfix_char == Some(' ');
    (spaced && OPERATOR_GROUPS.iter().any(|group| group.contains(&c))).then_some(TypeTag::Operator)
  }

  fn shift(&self, probe: &Probe, request: ShiftRequest, _cx: &ShiftEngine) -> Option<String> {
    let c = single_char(probe.text)?;
    let group = OPERATOR_GROUPS.iter().find(|group| group.contains(&c))?;
    let current = group.iter().position(|&op| op == c)?;
    let next = shift_cyclic(group.len(), current, request.direction);
    Some(group[next].to_string())
  }
}

/// `&&` / `||` and the keywords `and` / `or`.
pub struct LogicalOperator;

fn counterpart(operator: &str) -> String {
  match operator {
    "&&" => "||".to_owned(),
    "||" => "&&".to_owned(),
    word if word.eq_ignore_ascii_case("and") => preserve_case(word, "or").into(),
    word => preserve_case(word, "and").into(),
  }
}

impl Recognizer for LogicalOperator {
  fn name(&self) -> &'static str {
    "logical-operator"
  }

  fn classify(&self, probe: &Probe, _cx: &ShiftEngine) -> Option<TypeTag> {
    LOGICAL
      .is_match(probe.text)
      .then_some(TypeTag::LogicalOperator)
  }

  /// Every operator in the text flips; direction is irrelevant.
  fn shift(&self, probe: &Probe, _request: ShiftRequest, _cx: &ShiftEngine) -> Option<String> {
    let swapped = LOGICAL.replace_all(probe.text, |caps: &Captures| counterpart(&caps[0]));
    Some(swapped.into_owned())
  }
}
