//! Value recognizers.
//!
//! Each recognizer decides whether a fragment is of its kind and computes the
//! successor or predecessor of such a fragment. [`PRIORITY`] fixes the order
//! in which the engine consults them: the first recognizer to claim a
//! fragment determines its [`TypeTag`] and later ones are never asked.
//!
//! The order matters in a few places:
//!
//! - operators come first since they are one char and word scanning would
//!   otherwise swallow them,
//! - plain numbers decline epoch-sized integers so they reach the date and
//!   timestamp recognizer,
//! - booleans come before the generic dictionaries,
//! - structural recognizers (PHP variables, declaration lists, selectors,
//!   ternaries, comments, HTML text) come last as they need the whole line
//!   or selection.

mod comma_list;
mod comment;
mod datetime;
mod hex_color;
mod html;
mod js_declarations;
mod numeric;
mod operator;
mod php;
mod quoted;
mod sizzle;
mod ternary;
mod word;

pub use comma_list::CommaSeparatedList;
pub use comment::TrailingComment;
pub use datetime::{
  DateOrTimestamp,
  is_timestamp,
};
pub use hex_color::HexColor;
pub use html::{
  HtmlEncodable,
  toggle_html_encoding,
};
pub use js_declarations::JsVariableDeclarations;
pub use numeric::{
  CssUnit,
  Numeric,
  is_integer,
  shift_number,
};
pub use operator::{
  LogicalOperator,
  Operator,
};
pub use php::{
  PhpVariable,
  shift_php_concatenation,
};
pub use quoted::QuotedString;
pub use sizzle::SizzleSelector;
pub use ternary::TernaryExpression;
pub use word::{
  Boolean,
  DictionaryWord,
};

use crate::{
  engine::ShiftEngine,
  fragment::{
    Probe,
    TypeTag,
  },
  request::ShiftRequest,
};

pub trait Recognizer: Sync {
  fn name(&self) -> &'static str;

  /// Claims the probe, or lets it fall through to the next recognizer.
  fn classify(&self, probe: &Probe, cx: &ShiftEngine) -> Option<TypeTag>;

  /// The shifted text of a probe this recognizer claimed. May equal the
  /// input, which the engine treats as not shiftable.
  fn shift(&self, probe: &Probe, request: ShiftRequest, cx: &ShiftEngine) -> Option<String>;
}

/// Recognizers in the order they are consulted.
pub static PRIORITY: &[&dyn Recognizer] = &[
  &Operator,
  &Numeric,
  &CssUnit,
  &HexColor,
  &QuotedString,
  &LogicalOperator,
  &Boolean,
  &DateOrTimestamp,
  &DictionaryWord,
  &PhpVariable,
  &JsVariableDeclarations,
  &SizzleSelector,
  &TernaryExpression,
  &TrailingComment,
  &HtmlEncodable,
  &CommaSeparatedList,
];

/// The recognizer that hands out `tag`.
pub fn for_tag(tag: TypeTag) -> Option<&'static dyn Recognizer> {
  let recognizer: &'static dyn Recognizer = match tag {
    TypeTag::Operator => &Operator,
    TypeTag::Numeric => &Numeric,
    TypeTag::CssUnit => &CssUnit,
    TypeTag::HexColor => &HexColor,
    TypeTag::QuotedString => &QuotedString,
    TypeTag::LogicalOperator => &LogicalOperator,
    TypeTag::Boolean => &Boolean,
    TypeTag::DateOrTimestamp => &DateOrTimestamp,
    TypeTag::DictionaryWord(_) => &DictionaryWord,
    TypeTag::PhpVariable => &PhpVariable,
    TypeTag::JsVariableDeclarationList => &JsVariableDeclarations,
    TypeTag::SizzleSelector => &SizzleSelector,
    TypeTag::TernaryExpression => &TernaryExpression,
    TypeTag::TrailingComment => &TrailingComment,
    TypeTag::HtmlEncodable => &HtmlEncodable,
    TypeTag::CommaSeparatedList => &CommaSeparatedList,
    TypeTag::PlainLine => return None,
  };
  Some(recognizer)
}

#[cfg(test)]
mod test {
  use super::*;
  use crate::{
    config::Config,
    dictionary::Dictionaries,
  };

  fn classify(text: &str) -> TypeTag {
    let config = Config::default();
    let dictionaries = Dictionaries::load(&config);
    let engine = ShiftEngine::new(&config, &dictionaries);
    engine.classify(&Probe::new(text)).kind()
  }

  #[test]
  fn priority_names_are_unique() {
    let mut names: Vec<_> = PRIORITY.iter().map(|r| r.name()).collect();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), PRIORITY.len());
  }

  #[test]
  fn every_tagged_recognizer_is_in_priority_order() {
    for recognizer in PRIORITY {
      let tag = match recognizer.name() {
        "operator" => TypeTag::Operator,
        "numeric" => TypeTag::Numeric,
        "css-unit" => TypeTag::CssUnit,
        "hex-color" => TypeTag::HexColor,
        "quoted-string" => TypeTag::QuotedString,
        "logical-operator" => TypeTag::LogicalOperator,
        "boolean" => TypeTag::Boolean,
        "date-or-timestamp" => TypeTag::DateOrTimestamp,
        "dictionary-word" => continue,
        "php-variable" => TypeTag::PhpVariable,
        "js-variable-declarations" => TypeTag::JsVariableDeclarationList,
        "sizzle-selector" => TypeTag::SizzleSelector,
        "ternary-expression" => TypeTag::TernaryExpression,
        "trailing-comment" => TypeTag::TrailingComment,
        "html-encodable" => TypeTag::HtmlEncodable,
        "comma-separated-list" => TypeTag::CommaSeparatedList,
        other => panic!("unexpected recognizer {other}"),
      };
      assert_eq!(for_tag(tag).map(|r| r.name()), Some(recognizer.name()));
    }
    assert!(for_tag(TypeTag::PlainLine).is_none());
  }

  #[test]
  fn first_match_wins() {
    assert_eq!(classify("42"), TypeTag::Numeric);
    assert_eq!(classify("-1.5"), TypeTag::Numeric);
    assert_eq!(classify("12px"), TypeTag::CssUnit);
    assert_eq!(classify("#fff"), TypeTag::HexColor);
    assert_eq!(classify("'true'"), TypeTag::QuotedString);
    assert_eq!(classify("&&"), TypeTag::LogicalOperator);
    assert_eq!(classify("true"), TypeTag::Boolean);
    assert_eq!(classify("2024-02-28"), TypeTag::DateOrTimestamp);
    assert_eq!(classify("1700000000"), TypeTag::DateOrTimestamp);
    assert!(matches!(classify("monday"), TypeTag::DictionaryWord(_)));
    assert_eq!(classify("$foo"), TypeTag::PhpVariable);
    assert_eq!(classify("$('#foo')"), TypeTag::SizzleSelector);
    assert_eq!(classify("a ? b : c"), TypeTag::TernaryExpression);
    assert_eq!(classify("a < b"), TypeTag::HtmlEncodable);
    assert_eq!(classify("pear,apple"), TypeTag::CommaSeparatedList);
    assert_eq!(classify("nothing to see"), TypeTag::PlainLine);
  }

  #[test]
  fn logical_operators_suppress_later_recognizers() {
    // contains a comma list, but the logical operator claims it first
    assert_eq!(classify("a && b, c"), TypeTag::LogicalOperator);
    // a bare operator char without spaces around is no operator
    assert_eq!(classify("+"), TypeTag::PlainLine);
  }
}
