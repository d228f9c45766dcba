//! Token scanning around a caret offset.
//!
//! All offsets are char indices into the scanned slice. Spans are half-open
//! `start..end` ranges.

use std::ops::Range;

use ropey::RopeSlice;

use crate::{
  chars::{
    char_is_operator,
    char_is_word,
    char_is_word_hyphenated,
  },
  line_ending::line_end_char_index,
};

/// The char right before `offset`, if any.
#[inline]
pub fn char_before(text: RopeSlice, offset: usize) -> Option<char> {
  offset.checked_sub(1).and_then(|idx| text.get_char(idx))
}

/// The char at `offset`, i.e. right after a span ending at `offset`.
#[inline]
pub fn char_at(text: RopeSlice, offset: usize) -> Option<char> {
  text.get_char(offset)
}

/// Finds a single-char operator at `offset` that is flanked by exactly one
/// space on each side, e.g. the `+` in `1 + 2`.
pub fn operator_at(text: RopeSlice, offset: usize) -> Option<Range<usize>> {
  let ch = char_at(text, offset)?;
  if !char_is_operator(ch) {
    return None;
  }
  if char_before(text, offset) == Some(' ') && char_at(text, offset + 1) == Some(' ') {
    Some(offset..offset + 1)
  } else {
    None
  }
}

/// Finds the word touching `offset`. A caret sitting right after the last
/// char of a word still touches it.
pub fn word_at(text: RopeSlice, offset: usize, hyphenated: bool) -> Option<Range<usize>> {
  let is_word: fn(char) -> bool = if hyphenated {
    char_is_word_hyphenated
  } else {
    char_is_word
  };

  let pivot = match char_at(text, offset) {
    Some(ch) if is_word(ch) => offset,
    _ => match char_before(text, offset) {
      Some(ch) if is_word(ch) => offset - 1,
      _ => return None,
    },
  };

  let mut start = pivot;
  while start > 0 && text.get_char(start - 1).is_some_and(is_word) {
    start -= 1;
  }
  let mut end = pivot + 1;
  while text.get_char(end).is_some_and(is_word) {
    end += 1;
  }

  Some(start..end)
}

/// Char bounds of the line holding `offset`, without its line ending.
pub fn line_bounds(text: RopeSlice, offset: usize) -> Range<usize> {
  let offset = offset.min(text.len_chars());
  let line = text.char_to_line(offset);
  text.line_to_char(line)..line_end_char_index(&text, line)
}

/// Whitespace the given line starts with.
pub fn leading_whitespace(line: &str) -> &str {
  let trimmed = line.trim_start();
  &line[..line.len() - trimmed.len()]
}
