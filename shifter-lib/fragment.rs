//! Text fragments and their classification.

use crate::dictionary::DictionaryId;

/// What kind of value a fragment holds. Set once, by the first recognizer
/// that claims the fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeTag {
  Numeric,
  CssUnit,
  HexColor,
  QuotedString,
  Operator,
  LogicalOperator,
  Boolean,
  DictionaryWord(DictionaryId),
  DateOrTimestamp,
  PhpVariable,
  JsVariableDeclarationList,
  SizzleSelector,
  TernaryExpression,
  TrailingComment,
  HtmlEncodable,
  CommaSeparatedList,
  /// Nothing claimed the fragment.
  PlainLine,
}

impl TypeTag {
  /// Shifts of these kinds already produce their final casing.
  pub fn defines_case(self) -> bool {
    matches!(
      self,
      Self::Boolean
        | Self::DictionaryWord(_)
        | Self::HexColor
        | Self::LogicalOperator
        | Self::PhpVariable
    )
  }

  /// The shifted text of these kinds replaces the whole source line rather
  /// than the fragment itself.
  pub fn replaces_line(self) -> bool {
    matches!(self, Self::TrailingComment)
  }
}

/// An unclassified fragment together with the context recognizers look at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Probe<'a> {
  pub text:         &'a str,
  pub prefix_char:  Option<char>,
  pub postfix_char: Option<char>,
  /// The line the fragment starts on, without line ending.
  pub line:         &'a str,
  pub extension:    Option<&'a str>,
}

impl<'a> Probe<'a> {
  /// A free-standing fragment without surroundings.
  pub fn new(text: &'a str) -> Self {
    Self {
      text,
      prefix_char: None,
      postfix_char: None,
      line: text,
      extension: None,
    }
  }

  pub fn with_text(self, text: &'a str) -> Self {
    Self { text, ..self }
  }

  pub fn with_extension(self, extension: Option<&'a str>) -> Self {
    Self { extension, ..self }
  }

  pub fn with_surroundings(self, prefix_char: Option<char>, postfix_char: Option<char>) -> Self {
    Self {
      prefix_char,
      postfix_char,
      ..self
    }
  }

  pub fn in_line(self, line: &'a str) -> Self {
    Self { line, ..self }
  }

  pub fn is_css(&self) -> bool {
    self
      .extension
      .is_some_and(|ext| ext.to_ascii_lowercase().ends_with("css"))
  }

  pub fn is_php(&self) -> bool {
    self.extension.is_some_and(|ext| {
      matches!(
        ext.to_ascii_lowercase().as_str(),
        "php" | "phtml" | "php3" | "php4" | "php5" | "inc"
      )
    })
  }
}

/// A classified fragment. Immutable: its kind never changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
  text:           String,
  kind:           TypeTag,
  prefix_char:    Option<char>,
  postfix_char:   Option<char>,
  source_line:    String,
  file_extension: Option<String>,
}

impl Fragment {
  pub(crate) fn new(probe: &Probe, kind: TypeTag) -> Self {
    Self {
      text: probe.text.to_owned(),
      kind,
      prefix_char: probe.prefix_char,
      postfix_char: probe.postfix_char,
      source_line: probe.line.to_owned(),
      file_extension: probe.extension.map(str::to_owned),
    }
  }

  pub fn text(&self) -> &str {
    &self.text
  }

  pub fn kind(&self) -> TypeTag {
    self.kind
  }

  pub fn prefix_char(&self) -> Option<char> {
    self.prefix_char
  }

  pub fn postfix_char(&self) -> Option<char> {
    self.postfix_char
  }

  pub fn source_line(&self) -> &str {
    &self.source_line
  }

  pub fn file_extension(&self) -> Option<&str> {
    self.file_extension.as_deref()
  }

  /// Borrows the fragment back as the probe it was classified from.
  pub fn probe(&self) -> Probe<'_> {
    Probe {
      text:         &self.text,
      prefix_char:  self.prefix_char,
      postfix_char: self.postfix_char,
      line:         &self.source_line,
      extension:    self.file_extension.as_deref(),
    }
  }
}

#[cfg(test)]
mod test {
  use super::*;

  #[test]
  fn extension_gates() {
    let probe = Probe::new("x");
    assert!(!probe.is_css());
    assert!(probe.with_extension(Some("scss")).is_css());
    assert!(probe.with_extension(Some("CSS")).is_css());
    assert!(probe.with_extension(Some("php")).is_php());
    assert!(!probe.with_extension(Some("js")).is_php());
  }

  #[test]
  fn fragment_round_trips_its_probe() {
    let probe = Probe::new("10px")
      .in_line("margin: 10px;")
      .with_surroundings(Some(' '), Some(';'))
      .with_extension(Some("css"));
    let fragment = Fragment::new(&probe, TypeTag::CssUnit);
    assert_eq!(fragment.probe(), probe);
    assert_eq!(fragment.kind(), TypeTag::CssUnit);
  }
}
