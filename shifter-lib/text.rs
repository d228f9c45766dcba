//! Character-level swaps and shape checks on plain strings.

use once_cell::sync::Lazy;
use regex::Regex;
use shifter_core::chars::{
  char_is_slash,
  char_is_word,
};

static COMMA_SEPARATOR: Lazy<Regex> = Lazy::new(|| Regex::new(r",\s*").unwrap());

pub fn contains_any_quotes(text: &str) -> bool {
  text.contains(['\'', '"'])
}

/// Swaps single and double quotes, char by char.
pub fn swap_quotes(text: &str) -> String {
  text
    .chars()
    .map(|c| {
      match c {
        '\'' => '"',
        '"' => '\'',
        c => c,
      }
    })
    .collect()
}

pub fn contains_any_slashes(text: &str) -> bool {
  text.contains(char_is_slash)
}

/// Swaps slashes and backslashes, char by char.
pub fn swap_slashes(text: &str) -> String {
  text
    .chars()
    .map(|c| {
      match c {
        '/' => '\\',
        '\\' => '/',
        c => c,
      }
    })
    .collect()
}

/// A single line holding at least two non-empty, comma-separated items.
pub fn is_comma_separated_list(text: &str) -> bool {
  if text.contains(['\n', '\r']) || !text.contains(',') {
    return false;
  }
  let items = split_comma_separated(text);
  items.len() >= 2 && items.iter().all(|item| !item.trim().is_empty())
}

/// Splits on a comma plus any whitespace following it.
pub fn split_comma_separated(text: &str) -> Vec<&str> {
  COMMA_SEPARATOR.split(text).collect()
}

/// Byte ranges of `needle` in `haystack` that are not glued to word chars.
pub fn find_word_bounded<'a>(
  haystack: &'a str,
  needle: &'a str,
) -> impl Iterator<Item = (usize, usize)> + 'a {
  haystack.match_indices(needle).filter_map(move |(start, m)| {
    let end = start + m.len();
    let before = haystack[..start].chars().next_back();
    let after = haystack[end..].chars().next();
    let glued = before.is_some_and(char_is_word) || after.is_some_and(char_is_word);
    (!glued).then_some((start, end))
  })
}
