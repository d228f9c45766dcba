//! Carets, selected spans and the shape of a whole selection.
//!
//! A [`Range`] has an `anchor` and a `head` char offset, the head being where
//! the caret is drawn. `from()` and `to()` give the bounds regardless of
//! direction.
//!
//! ```text
//! anchor=3, head=8: "a =[ 1 + ]20"  forward
//! anchor=8, head=3: "a =] 1 + [20"  backward
//! anchor=4, head=4: "a = |1 + 20"   caret
//! ```
//!
//! [`SelectionShape`] is what scope resolution dispatches on. It is derived
//! from the ranges a host reports: no span at all, one span within a line,
//! one span across lines, or several spans forming a block selection.

use std::borrow::Cow;

use ropey::RopeSlice;
use shifter_core::chars::char_is_line_ending;
use smallvec::SmallVec;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Range {
  pub anchor: usize,
  pub head:   usize,
}

impl Range {
  pub fn new(anchor: usize, head: usize) -> Self {
    Self { anchor, head }
  }

  #[inline]
  pub fn point(head: usize) -> Self {
    Self::new(head, head)
  }

  /// Lower bound, whichever end it is.
  #[inline]
  #[must_use]
  pub fn from(&self) -> usize {
    std::cmp::min(self.anchor, self.head)
  }

  #[inline]
  #[must_use]
  pub fn to(&self) -> usize {
    std::cmp::max(self.anchor, self.head)
  }

  #[inline]
  #[must_use]
  pub fn len(&self) -> usize {
    self.to() - self.from()
  }

  /// A bare caret.
  #[inline]
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.anchor == self.head
  }

  #[inline]
  pub fn contains(&self, pos: usize) -> bool {
    self.from() <= pos && pos < self.to()
  }

  #[inline]
  pub fn slice<'a>(&self, text: RopeSlice<'a>) -> RopeSlice<'a> {
    text.slice(self.from()..self.to())
  }

  #[inline]
  pub fn fragment<'a>(&self, text: RopeSlice<'a>) -> Cow<'a, str> {
    self.slice(text).into()
  }

  /// The range without the line endings it ends on, clamped to `text`.
  pub fn trim_line_ending(&self, text: RopeSlice) -> Self {
    let from = self.from().min(text.len_chars());
    let mut to = self.to().min(text.len_chars());
    while to > from && text.get_char(to - 1).is_some_and(char_is_line_ending) {
      to -= 1;
    }
    Self::new(from, to)
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionShape {
  /// Only a caret.
  None,
  SingleLineSpan(Range),
  /// A span across lines. A span ending right at a line start does not
  /// cover that line.
  MultiLineSpan(Range),
  /// Block selection rows, ordered by position.
  ColumnarBlock(SmallVec<[Range; 2]>),
}

impl SelectionShape {
  /// Derives the shape from host ranges. Empty ranges are carets and do not
  /// count as spans.
  pub fn from_ranges(text: RopeSlice, ranges: &[Range]) -> Self {
    let mut spans: SmallVec<[Range; 2]> = ranges
      .iter()
      .filter(|range| !range.is_empty())
      .map(|range| Range::new(range.from(), range.to()))
      .collect();
    spans.sort_by_key(|range| range.from());

    match spans.as_slice() {
      [] => Self::None,
      [span] => {
        let trimmed = span.trim_line_ending(text);
        let first_line = text.char_to_line(trimmed.from());
        let last_line = text.char_to_line(trimmed.to());
        if trimmed.is_empty() {
          Self::None
        } else if first_line == last_line {
          Self::SingleLineSpan(trimmed)
        } else {
          Self::MultiLineSpan(trimmed)
        }
      },
      _ => Self::ColumnarBlock(spans),
    }
  }
}

#[cfg(test)]
mod test {
  use ropey::Rope;
  use smallvec::smallvec;

  use super::*;

  fn shape(text: &str, ranges: &[(usize, usize)]) -> SelectionShape {
    let rope = Rope::from(text);
    let ranges: Vec<Range> = ranges
      .iter()
      .map(|&(anchor, head)| Range::new(anchor, head))
      .collect();
    SelectionShape::from_ranges(rope.slice(..), &ranges)
  }

  #[test]
  fn range_bounds() {
    let range = Range::new(7, 2);
    assert_eq!((range.from(), range.to(), range.len()), (2, 7, 5));
    assert!(range.contains(2));
    assert!(!range.contains(7));
    assert!(Range::point(3).is_empty());

    let rope = Rope::from("hello world");
    assert_eq!(range.fragment(rope.slice(..)), "llo w");
  }

  #[test]
  fn carets_are_no_selection() {
    assert_eq!(shape("abc", &[]), SelectionShape::None);
    assert_eq!(shape("abc", &[(1, 1)]), SelectionShape::None);
    assert_eq!(shape("\n\n", &[(0, 2)]), SelectionShape::None);
  }

  #[test]
  fn single_and_multi_line_spans() {
    let text = "one\ntwo\nthree\n";
    assert_eq!(
      shape(text, &[(5, 1)]),
      SelectionShape::MultiLineSpan(Range::new(1, 5))
    );
    assert_eq!(
      shape(text, &[(4, 7)]),
      SelectionShape::SingleLineSpan(Range::new(4, 7))
    );
    // ending at the start of `two` does not cover it
    assert_eq!(
      shape(text, &[(0, 4)]),
      SelectionShape::SingleLineSpan(Range::new(0, 3))
    );
    assert_eq!(
      shape(text, &[(0, 14)]),
      SelectionShape::MultiLineSpan(Range::new(0, 13))
    );
  }

  #[test]
  fn several_spans_are_a_block() {
    let text = "a1\nb2\nc3\n";
    assert_eq!(
      shape(text, &[(7, 8), (1, 2), (4, 5), (0, 0)]),
      SelectionShape::ColumnarBlock(smallvec![
        Range::new(1, 2),
        Range::new(4, 5),
        Range::new(7, 8)
      ])
    );
  }
}
