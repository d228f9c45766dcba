//! Line and list sorting.
//!
//! Lines of a multi-line selection are sorted as whole strings. When every
//! line but the last ends with a `,` or `;` delimiter (an array literal or a
//! list of statements, say) the delimiters are taken off before sorting and
//! put back afterwards, so the line that ends up last stays undelimited.

use std::{
  cmp::Ordering,
  collections::HashSet,
};

use crate::{
  config::SortCase,
  request::Direction,
  text::split_comma_separated,
};

const DELIMITERS: &[char] = &[',', ';'];

pub fn compare(a: &str, b: &str, case: SortCase) -> Ordering {
  match case {
    SortCase::CaseSensitive => a.cmp(b),
    SortCase::CaseInsensitive => a.to_lowercase().cmp(&b.to_lowercase()),
  }
}

/// Stable ascending sort; [`Direction::Down`] is its exact reversal.
fn sort_strings(items: &mut [String], direction: Direction, case: SortCase) {
  items.sort_by(|a, b| compare(a, b, case));
  if direction == Direction::Down {
    items.reverse();
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortedLines {
  contents:     Vec<String>,
  delimiter:    Option<char>,
  delimit_last: bool,
}

impl SortedLines {
  /// Lines in sorted order, delimiters reattached.
  pub fn lines(&self) -> Vec<String> {
    let Some(delimiter) = self.delimiter else {
      return self.contents.clone();
    };
    let last = self.contents.len().saturating_sub(1);
    self
      .contents
      .iter()
      .enumerate()
      .map(|(i, content)| {
        if i < last || self.delimit_last {
          format!("{content}{delimiter}")
        } else {
          content.clone()
        }
      })
      .collect()
  }

  pub fn delimiter(&self) -> Option<char> {
    self.delimiter
  }

  pub fn has_duplicates(&self) -> bool {
    let mut seen = HashSet::new();
    !self.contents.iter().all(|line| seen.insert(line.as_str()))
  }

  /// Keeps the first of every run of equal lines.
  pub fn collapse_duplicates(&mut self) {
    let mut seen = HashSet::new();
    self.contents.retain(|line| seen.insert(line.clone()));
  }

  pub fn join(&self, line_ending: &str) -> String {
    self.lines().join(line_ending)
  }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineSorter {
  pub case: SortCase,
}

impl LineSorter {
  pub fn new(case: SortCase) -> Self {
    Self { case }
  }

  /// The delimiter every line but the last ends with, and whether the last
  /// one ends with it too.
  fn detect_delimiter(lines: &[&str]) -> Option<(char, bool)> {
    let (last, init) = lines.split_last()?;
    if init.is_empty() {
      return None;
    }
    DELIMITERS
      .iter()
      .copied()
      .find(|&d| init.iter().all(|line| line.trim_end().ends_with(d)))
      .map(|d| (d, last.trim_end().ends_with(d)))
  }

  /// Sorts `lines` (without line endings) ascending for [`Direction::Up`]
  /// and descending otherwise. The sort is stable.
  pub fn sort(&self, lines: &[&str], direction: Direction) -> SortedLines {
    let detected = Self::detect_delimiter(lines);
    let mut contents: Vec<String> = lines
      .iter()
      .map(|line| {
        match detected {
          Some((d, _)) => {
            let trimmed = line.trim_end();
            trimmed.strip_suffix(d).unwrap_or(trimmed).to_owned()
          },
          None => (*line).to_owned(),
        }
      })
      .collect();
    sort_strings(&mut contents, direction, self.case);

    tracing::debug!(
      lines = contents.len(),
      delimiter = ?detected.map(|(d, _)| d),
      "sorted lines"
    );
    SortedLines {
      contents,
      delimiter: detected.map(|(d, _)| d),
      delimit_last: detected.is_some_and(|(_, last)| last),
    }
  }
}

/// Sorts the items of a single-line list and rejoins them with `, `.
pub fn sort_comma_separated(text: &str, direction: Direction, case: SortCase) -> String {
  let mut items: Vec<String> = split_comma_separated(text)
    .into_iter()
    .map(str::to_owned)
    .collect();
  sort_strings(&mut items, direction, case);
  items.join(", ")
}
