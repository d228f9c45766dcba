//! Seams to the embedding editor: buffer access and user prompts.

use std::ops::Range as CharRange;

use ropey::RopeSlice;
use shifter_core::scan;

use crate::{
  change::Result,
  request::Direction,
  selection::SelectionShape,
};

/// The editor buffer a shift operates on. All offsets are char indices.
pub trait EditorHost {
  fn read_text(&self) -> RopeSlice<'_>;

  fn caret_offset(&self) -> usize;

  fn selection_ranges(&self) -> SelectionShape;

  fn file_extension(&self) -> Option<&str>;

  fn replace_range(&mut self, from: usize, to: usize, text: &str) -> Result<()>;

  /// Bounds of the line holding `offset`, without its line ending.
  fn line_bounds(&self, offset: usize) -> CharRange<usize> {
    scan::line_bounds(self.read_text(), offset)
  }
}

/// How a block of numbers is rewritten.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericBlockMode {
  /// Replace the rows with `start, start + 1, ...`.
  Enumerate { start: i64 },
  /// Shift every row by one step on its own.
  ShiftEach,
}

/// Synchronous questions to the user. `None` means the user dismissed the
/// question, which cancels the whole operation.
pub trait Prompter {
  fn ask_choice(&mut self, prompt: &str, options: &[&str]) -> Option<usize>;

  fn numeric_block_mode(&mut self, first: i64, direction: Direction) -> Option<NumericBlockMode> {
    let enumerate = format!("Enumerate from {first}");
    let each = match direction {
      Direction::Up => "Increment each",
      Direction::Down => "Decrement each",
    };
    match self.ask_choice("Shift numeric block", &[enumerate.as_str(), each])? {
      0 => Some(NumericBlockMode::Enumerate { start: first }),
      1 => Some(NumericBlockMode::ShiftEach),
      _ => None,
    }
  }

  /// Whether to collapse duplicate lines after sorting.
  fn collapse_duplicates(&mut self) -> Option<bool> {
    match self.ask_choice("Duplicate lines found", &["Reduce", "Keep"])? {
      0 => Some(true),
      1 => Some(false),
      _ => None,
    }
  }
}

/// Dismisses every question.
#[derive(Debug, Default, Clone, Copy)]
pub struct Dismiss;

impl Prompter for Dismiss {
  fn ask_choice(&mut self, _prompt: &str, _options: &[&str]) -> Option<usize> {
    None
  }
}

#[cfg(test)]
mod test {
  use super::*;

  struct Always(usize);

  impl Prompter for Always {
    fn ask_choice(&mut self, _prompt: &str, options: &[&str]) -> Option<usize> {
      assert_eq!(options.len(), 2);
      Some(self.0)
    }
  }

  #[test]
  fn default_questions_map_choices() {
    assert_eq!(
      Always(0).numeric_block_mode(3, Direction::Up),
      Some(NumericBlockMode::Enumerate { start: 3 })
    );
    assert_eq!(
      Always(1).numeric_block_mode(3, Direction::Down),
      Some(NumericBlockMode::ShiftEach)
    );
    assert_eq!(Always(7).numeric_block_mode(3, Direction::Up), None);
    assert_eq!(Always(0).collapse_duplicates(), Some(true));
    assert_eq!(Always(1).collapse_duplicates(), Some(false));
  }

  #[test]
  fn dismiss_cancels() {
    assert_eq!(Dismiss.numeric_block_mode(1, Direction::Up), None);
    assert_eq!(Dismiss.collapse_duplicates(), None);
  }
}
