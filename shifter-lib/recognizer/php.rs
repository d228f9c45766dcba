//! PHP variables and string concatenations.

use once_cell::sync::Lazy;
use regex::Regex;

use super::Recognizer;
use crate::{
  dictionary::shift_cyclic_by,
  engine::ShiftEngine,
  fragment::{
    Probe,
    TypeTag,
  },
  request::ShiftRequest,
};

static PHP_VARIABLE: Lazy<Regex> =
  Lazy::new(|| Regex::new(r"^\$[A-Za-z_][A-Za-z0-9_]*$").unwrap());
static PHP_VARIABLES: Lazy<Regex> =
  Lazy::new(|| Regex::new(r"\$[A-Za-z_][A-Za-z0-9_]*\b").unwrap());

/// `$name`, shifted to the neighbouring variable name of the document in
/// alphabetical order.
pub struct PhpVariable;

/// Distinct variables of `document`, sorted case-insensitively.
fn document_variables<'a>(document: &'a str, current: &'a str) -> Vec<&'a str> {
  let mut variables: Vec<&str> = PHP_VARIABLES
    .find_iter(document)
    .map(|m| m.as_str())
    .chain(std::iter::once(current))
    .collect();
  variables.sort_by(|a, b| {
    a.to_lowercase()
      .cmp(&b.to_lowercase())
      .then_with(|| a.cmp(b))
  });
  variables.dedup();
  variables
}

impl Recognizer for PhpVariable {
  fn name(&self) -> &'static str {
    "php-variable"
  }

  fn classify(&self, probe: &Probe, _cx: &ShiftEngine) -> Option<TypeTag> {
    PHP_VARIABLE.is_match(probe.text).then_some(TypeTag::PhpVariable)
  }

  fn shift(&self, probe: &Probe, request: ShiftRequest, cx: &ShiftEngine) -> Option<String> {
    let variables = document_variables(cx.document, probe.text);
    let current = variables.iter().position(|&var| var == probe.text)?;
    let next = shift_cyclic_by(variables.len(), current, request.direction, request.amount());
    Some(variables[next].to_owned())
  }
}

/// Byte offsets of the `.` operators outside string literals.
fn concatenation_dots(text: &str) -> Vec<usize> {
  let bytes = text.as_bytes();
  let mut dots = Vec::new();
  let mut quote: Option<u8> = None;
  let mut escaped = false;

  for (i, &b) in bytes.iter().enumerate() {
    if let Some(open) = quote {
      if escaped {
        escaped = false;
      } else if b == b'\\' {
        escaped = true;
      } else if b == open {
        quote = None;
      }
      continue;
    }
    match b {
      b'\'' | b'"' => quote = Some(b),
      b'.' => {
        let prev = i.checked_sub(1).map(|j| bytes[j]);
        let next = bytes.get(i + 1).copied();
        let decimal =
          prev.is_some_and(|p| p.is_ascii_digit()) && next.is_some_and(|n| n.is_ascii_digit());
        let compound = prev == Some(b'.') || matches!(next, Some(b'.' | b'='));
        if !decimal && !compound {
          dots.push(i);
        }
      },
      _ => {},
    }
  }
  dots
}

fn split_whitespace_edges(text: &str) -> (&str, &str, &str) {
  let core = text.trim();
  let lead = &text[..text.len() - text.trim_start().len()];
  let trail = &text[lead.len() + core.len()..];
  (lead, core, trail)
}

/// Swaps the two operands of `a . b`. Anything other than exactly one
/// concatenation outside of string literals is left alone.
pub fn shift_php_concatenation(text: &str) -> Option<String> {
  let dots = concatenation_dots(text);
  let [dot] = dots.as_slice() else {
    return None;
  };
  let (left_lead, left, left_trail) = split_whitespace_edges(&text[..*dot]);
  let (right_lead, right, right_trail) = split_whitespace_edges(&text[dot + 1..]);
  if left.is_empty() || right.is_empty() {
    return None;
  }
  Some(format!(
    "{left_lead}{right}{left_trail}.{right_lead}{left}{right_trail}"
  ))
}

#[cfg(test)]
mod test {
  use super::*;
  use crate::{
    config::Config,
    dictionary::Dictionaries,
  };

  #[test]
  fn variables_cycle_through_the_document() {
    let config = Config::default();
    let dictionaries = Dictionaries::builtin();
    let document = "<?php $zeta = $alpha + $Beta; echo $alpha;";
    let cx = ShiftEngine::new(&config, &dictionaries).with_document(document);
    let shift = |text: &str, request| PhpVariable.shift(&Probe::new(text), request, &cx);

    assert_eq!(shift("$alpha", ShiftRequest::up()).as_deref(), Some("$Beta"));
    assert_eq!(shift("$zeta", ShiftRequest::up()).as_deref(), Some("$alpha"));
    assert_eq!(shift("$alpha", ShiftRequest::down()).as_deref(), Some("$zeta"));
  }

  #[test]
  fn lonely_variable_stays() {
    let config = Config::default();
    let dictionaries = Dictionaries::builtin();
    let cx = ShiftEngine::new(&config, &dictionaries).with_document("$only");
    assert_eq!(
      PhpVariable
        .shift(&Probe::new("$only"), ShiftRequest::up(), &cx)
        .as_deref(),
      Some("$only")
    );
  }

  #[test]
  fn concatenation_swaps_operands() {
    assert_eq!(shift_php_concatenation("$a . $b").as_deref(), Some("$b . $a"));
    assert_eq!(
      shift_php_concatenation("'foo'.$bar").as_deref(),
      Some("$bar.'foo'")
    );
    assert_eq!(
      shift_php_concatenation("  $x . 'a.b'").as_deref(),
      Some("  'a.b' . $x")
    );
  }

  #[test]
  fn concatenation_needs_exactly_one_operator() {
    assert_eq!(shift_php_concatenation("$a . $b . $c"), None);
    assert_eq!(shift_php_concatenation("'a.b'"), None);
    assert_eq!(shift_php_concatenation("1.5"), None);
    assert_eq!(shift_php_concatenation("$a .= $b"), None);
    assert_eq!(shift_php_concatenation(". $b"), None);
  }
}
