//! In-memory [`EditorHost`] backed by a [`Rope`].

use ropey::{
  Rope,
  RopeSlice,
};
use smallvec::SmallVec;

use crate::{
  change::{
    ChangeError,
    Result,
  },
  host::EditorHost,
  selection::{
    Range,
    SelectionShape,
  },
};

#[derive(Debug, Clone, Default)]
pub struct Buffer {
  text:      Rope,
  caret:     usize,
  ranges:    SmallVec<[Range; 1]>,
  extension: Option<String>,
}

impl Buffer {
  pub fn new(text: &str) -> Self {
    Self {
      text: Rope::from(text),
      ..Self::default()
    }
  }

  pub fn with_caret(mut self, caret: usize) -> Self {
    self.caret = caret;
    self.ranges.clear();
    self
  }

  /// One selected span; the caret goes to its head.
  pub fn with_selection(mut self, anchor: usize, head: usize) -> Self {
    self.caret = head;
    self.ranges = SmallVec::from_elem(Range::new(anchor, head), 1);
    self
  }

  /// Block selection rows.
  pub fn with_block<I>(mut self, rows: I) -> Self
  where
    I: IntoIterator<Item = (usize, usize)>,
  {
    self.ranges = rows
      .into_iter()
      .map(|(from, to)| Range::new(from, to))
      .collect();
    self.caret = self.ranges.last().map_or(self.caret, |range| range.head);
    self
  }

  pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
    self.extension = Some(extension.into());
    self
  }

  pub fn rope(&self) -> &Rope {
    &self.text
  }

  pub fn contents(&self) -> String {
    self.text.to_string()
  }
}

impl EditorHost for Buffer {
  fn read_text(&self) -> RopeSlice<'_> {
    self.text.slice(..)
  }

  fn caret_offset(&self) -> usize {
    self.caret.min(self.text.len_chars())
  }

  fn selection_ranges(&self) -> SelectionShape {
    SelectionShape::from_ranges(self.text.slice(..), &self.ranges)
  }

  fn file_extension(&self) -> Option<&str> {
    self.extension.as_deref()
  }

  fn replace_range(&mut self, from: usize, to: usize, text: &str) -> Result<()> {
    let len = self.text.len_chars();
    if from > to {
      return Err(ChangeError::InvalidRange { from, to });
    }
    if to > len {
      return Err(ChangeError::RangeOutOfBounds { from, to, len });
    }
    self.text.remove(from..to);
    self.text.insert(from, text);
    Ok(())
  }
}

#[cfg(test)]
mod test {
  use super::*;

  #[test]
  fn replaces_char_ranges() {
    let mut buffer = Buffer::new("grüße 10");
    buffer.replace_range(6, 8, "11").unwrap();
    assert_eq!(buffer.contents(), "grüße 11");
    assert!(buffer.replace_range(6, 20, "").is_err());
  }

  #[test]
  fn reports_selection_shape() {
    let buffer = Buffer::new("a\nb\n").with_selection(0, 3);
    assert_eq!(
      buffer.selection_ranges(),
      SelectionShape::MultiLineSpan(Range::new(0, 3))
    );
    assert_eq!(buffer.caret_offset(), 3);
    assert_eq!(buffer.line_bounds(3), 2..3);

    let buffer = Buffer::new("abc").with_caret(10);
    assert_eq!(buffer.caret_offset(), 3);
    assert_eq!(buffer.selection_ranges(), SelectionShape::None);
  }
}
