//! Cyclic keyword dictionaries.
//!
//! A dictionary is an ordered list of unique terms; shifting a term moves to
//! its neighbour and wraps around at both ends. Built-in dictionaries (weekdays,
//! months, visibility modifiers, boolean pairs) match case-insensitively. User
//! dictionaries come from the newline-delimited `dictionary` config value and
//! match exactly.
//!
//! ```
//! use shifter_lib::{Direction, dictionary::Dictionaries};
//!
//! let dictionaries = Dictionaries::builtin();
//! let days = dictionaries.find_word("sunday").unwrap();
//! assert_eq!(days.shift("sunday", Direction::Up, 1), Some("monday"));
//! ```

use crate::{
  Tendril,
  config::Config,
  request::Direction,
};

const WEEKDAYS: &[&str] = &[
  "monday",
  "tuesday",
  "wednesday",
  "thursday",
  "friday",
  "saturday",
  "sunday",
];
const WEEKDAYS_SHORT: &[&str] = &["mon", "tue", "wed", "thu", "fri", "sat", "sun"];
const MONTHS: &[&str] = &[
  "january",
  "february",
  "march",
  "april",
  "may",
  "june",
  "july",
  "august",
  "september",
  "october",
  "november",
  "december",
];
const MONTHS_SHORT: &[&str] = &[
  "jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec",
];
const VISIBILITY: &[&str] = &["public", "protected", "private"];

const BOOLEAN_PAIRS: &[[&str; 2]] = &[
  ["true", "false"],
  ["yes", "no"],
  ["on", "off"],
  ["enable", "disable"],
  ["enabled", "disabled"],
  ["show", "hide"],
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DictionaryId(u16);

impl DictionaryId {
  pub const fn get(self) -> u16 {
    self.0
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DictionaryKind {
  /// Two-term toggles such as `true`/`false`.
  Boolean,
  Words,
}

/// Next index in a cyclic list of `len` entries.
pub fn shift_cyclic(len: usize, current: usize, direction: Direction) -> usize {
  shift_cyclic_by(len, current, direction, 1)
}

pub fn shift_cyclic_by(len: usize, current: usize, direction: Direction, steps: u32) -> usize {
  debug_assert!(len > 0 && current < len);
  let steps = steps as usize % len;
  match direction {
    Direction::Up => (current + steps) % len,
    Direction::Down => (current + len - steps) % len,
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderedDictionary {
  id:             DictionaryId,
  kind:           DictionaryKind,
  terms:          Vec<Tendril>,
  case_sensitive: bool,
}

impl OrderedDictionary {
  fn new<I, S>(id: DictionaryId, kind: DictionaryKind, terms: I, case_sensitive: bool) -> Self
  where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
  {
    let mut unique: Vec<Tendril> = Vec::new();
    for term in terms {
      let term = term.as_ref();
      if !term.is_empty() && !unique.iter().any(|t| t == term) {
        unique.push(term.into());
      }
    }
    Self {
      id,
      kind,
      terms: unique,
      case_sensitive,
    }
  }

  pub fn id(&self) -> DictionaryId {
    self.id
  }

  pub fn kind(&self) -> DictionaryKind {
    self.kind
  }

  pub fn terms(&self) -> &[Tendril] {
    &self.terms
  }

  pub fn len(&self) -> usize {
    self.terms.len()
  }

  pub fn is_empty(&self) -> bool {
    self.terms.is_empty()
  }

  pub fn position(&self, word: &str) -> Option<usize> {
    if self.case_sensitive {
      self.terms.iter().position(|term| term == word)
    } else {
      let word = word.to_lowercase();
      self
        .terms
        .iter()
        .position(|term| term.to_lowercase() == word)
    }
  }

  pub fn contains(&self, word: &str) -> bool {
    self.position(word).is_some()
  }

  /// The term `steps` entries away from `word`, in canonical spelling.
  pub fn shift(&self, word: &str, direction: Direction, steps: u32) -> Option<&str> {
    let current = self.position(word)?;
    let next = shift_cyclic_by(self.len(), current, direction, steps);
    Some(self.terms[next].as_str())
  }
}

/// Parses user dictionary text into term sets.
///
/// Every plain line is a term of the first set. A line of the form
/// `|a|b|c|` declares a set of its own. Blank lines are ignored.
pub fn parse_user_terms(source: &str) -> Vec<Vec<&str>> {
  let mut plain = Vec::new();
  let mut sets = Vec::new();

  for line in source.lines().map(str::trim).filter(|line| !line.is_empty()) {
    match line
      .strip_prefix('|')
      .and_then(|line| line.strip_suffix('|'))
    {
      Some(inner) => {
        let terms: Vec<&str> = inner
          .split('|')
          .map(str::trim)
          .filter(|term| !term.is_empty())
          .collect();
        if terms.len() > 1 {
          sets.push(terms);
        }
      },
      None => plain.push(line),
    }
  }

  if plain.len() > 1 {
    sets.insert(0, plain);
  }
  sets
}

/// The read-only dictionary set of one configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dictionaries {
  entries: Vec<OrderedDictionary>,
}

impl Default for Dictionaries {
  fn default() -> Self {
    Self::builtin()
  }
}

impl Dictionaries {
  pub fn builtin() -> Self {
    let mut dictionaries = Self {
      entries: Vec::new(),
    };
    for pair in BOOLEAN_PAIRS {
      dictionaries.push(DictionaryKind::Boolean, pair.iter(), false);
    }
    for terms in [WEEKDAYS, WEEKDAYS_SHORT, MONTHS, MONTHS_SHORT, VISIBILITY] {
      dictionaries.push(DictionaryKind::Words, terms.iter(), false);
    }
    dictionaries
  }

  /// Built-in dictionaries plus the user terms of `config`.
  pub fn load(config: &Config) -> Self {
    let dictionaries = Self::builtin().with_user_terms(&config.dictionary);
    tracing::debug!("loaded {} dictionaries", dictionaries.entries.len());
    dictionaries
  }

  /// User sets are consulted before the built-in ones.
  pub fn with_user_terms(mut self, source: &str) -> Self {
    let builtin = std::mem::take(&mut self.entries);
    for terms in parse_user_terms(source) {
      self.push(DictionaryKind::Words, terms, true);
    }
    for mut entry in builtin {
      entry.id = self.next_id();
      self.entries.push(entry);
    }
    self
  }

  fn next_id(&self) -> DictionaryId {
    DictionaryId(self.entries.len() as u16)
  }

  fn push<I, S>(&mut self, kind: DictionaryKind, terms: I, case_sensitive: bool)
  where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
  {
    let dictionary = OrderedDictionary::new(self.next_id(), kind, terms, case_sensitive);
    if dictionary.len() > 1 {
      self.entries.push(dictionary);
    }
  }

  pub fn get(&self, id: DictionaryId) -> Option<&OrderedDictionary> {
    self.entries.get(id.0 as usize)
  }

  pub fn iter(&self) -> impl Iterator<Item = &OrderedDictionary> {
    self.entries.iter()
  }

  fn find(&self, kind: DictionaryKind, word: &str) -> Option<&OrderedDictionary> {
    self
      .entries
      .iter()
      .find(|entry| entry.kind == kind && entry.contains(word))
  }

  pub fn find_boolean(&self, word: &str) -> Option<&OrderedDictionary> {
    self.find(DictionaryKind::Boolean, word)
  }

  pub fn find_word(&self, word: &str) -> Option<&OrderedDictionary> {
    self.find(DictionaryKind::Words, word)
  }
}
