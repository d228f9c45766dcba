//! Case patterns of shifted words.
//!
//! Shifting a word through a dictionary yields the dictionary's canonical
//! spelling. [`CasePattern`] captures how the original was cased so the
//! result can be re-cased the same way. Only all-upper, all-lower and
//! capitalized words are recognized; any other mix (camelCase included) is
//! left as the dictionary spells it.

use crate::Tendril;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CasePattern {
  Upper,
  Lower,
  Capitalized,
  Mixed,
}

impl CasePattern {
  pub fn of(text: &str) -> Self {
    let mut letters = text.chars().filter(|c| c.is_alphabetic());
    let Some(first) = letters.next() else {
      return Self::Mixed;
    };
    let rest: Vec<char> = letters.collect();

    if first.is_uppercase() {
      if rest.is_empty() || rest.iter().all(|c| c.is_lowercase()) {
        Self::Capitalized
      } else if rest.iter().all(|c| c.is_uppercase()) {
        Self::Upper
      } else {
        Self::Mixed
      }
    } else if rest.iter().all(|c| c.is_lowercase()) {
      Self::Lower
    } else {
      Self::Mixed
    }
  }

  pub fn apply(self, text: &str) -> Tendril {
    match self {
      Self::Upper => to_upper_case(text.chars()),
      Self::Lower => to_lower_case(text.chars()),
      Self::Capitalized => to_uc_first(text),
      Self::Mixed => text.into(),
    }
  }
}

/// Re-cases `shifted` the way `original` is cased.
pub fn preserve_case(original: &str, shifted: &str) -> Tendril {
  CasePattern::of(original).apply(shifted)
}

/// True if the text has letters and none of them is lowercase.
pub fn is_all_uppercase(text: &str) -> bool {
  text.chars().any(char::is_alphabetic) && !text.chars().any(char::is_lowercase)
}

/// True if the first char is not lowercase and no later char is uppercase.
/// The empty string counts as capitalized.
pub fn is_uc_first(text: &str) -> bool {
  let mut chars = text.chars();
  match chars.next() {
    None => true,
    Some(first) => !first.is_lowercase() && !chars.any(char::is_uppercase),
  }
}

/// `fooBar`: starts lowercase, has an uppercase letter later, no separators.
pub fn is_camel_case(text: &str) -> bool {
  let mut chars = text.chars();
  match chars.next() {
    Some(first) if first.is_lowercase() => {
      let rest = chars.as_str();
      rest.chars().all(char::is_alphanumeric) && rest.chars().any(char::is_uppercase)
    },
    _ => false,
  }
}

/// Uppercases the first char and lowercases the rest.
pub fn to_uc_first(text: &str) -> Tendril {
  let mut chars = text.chars();
  let Some(first) = chars.next() else {
    return Tendril::new();
  };
  let mut res = Tendril::new();
  res.extend(first.to_uppercase());
  res.extend(chars.flat_map(char::to_lowercase));
  res
}

/// Joins the alphanumeric runs of `text` as `firstSecondThird`.
pub fn to_camel_case(text: impl Iterator<Item = char>) -> Tendril {
  let mut res = Tendril::new();
  let mut at_word_start = false;
  for c in text {
    if !c.is_alphanumeric() {
      at_word_start = !res.is_empty();
    } else if at_word_start {
      res.extend(c.to_uppercase());
      at_word_start = false;
    } else {
      res.extend(c.to_lowercase());
    }
  }
  res
}

pub fn to_upper_case(text: impl Iterator<Item = char>) -> Tendril {
  let mut res = Tendril::new();
  res.extend(text.flat_map(char::to_uppercase));
  res
}

pub fn to_lower_case(text: impl Iterator<Item = char>) -> Tendril {
  let mut res = Tendril::new();
  res.extend(text.flat_map(char::to_lowercase));
  res
}
