use ropey::RopeSlice;

/// Line ending of a document, used when shifted text spans several lines.
#[derive(PartialEq, Eq, Copy, Clone, Debug, Default)]
pub enum LineEnding {
  Crlf,
  #[default]
  LF,
  CR,
}

impl LineEnding {
  #[inline]
  pub const fn len_chars(self) -> usize {
    self.as_str().len()
  }

  #[inline]
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Crlf => "\r\n",
      Self::LF => "\n",
      Self::CR => "\r",
    }
  }

  /// The single-char endings; `\r\n` is two chars.
  #[inline]
  pub const fn from_char(ch: char) -> Option<Self> {
    match ch {
      '\n' => Some(Self::LF),
      '\r' => Some(Self::CR),
      _ => None,
    }
  }

  /// The ending `line` finishes with, if any.
  pub fn of_line(line: &str) -> Option<Self> {
    if line.ends_with("\r\n") {
      Some(Self::Crlf)
    } else {
      line.chars().next_back().and_then(Self::from_char)
    }
  }
}

/// The ending of the first terminated line among the first hundred.
pub fn auto_detect_line_ending(text: &str) -> Option<LineEnding> {
  text
    .split_inclusive('\n')
    .take(100)
    .find_map(LineEnding::of_line)
}

/// Char index right before the ending of line `line`.
pub fn line_end_char_index(slice: &RopeSlice, line: usize) -> usize {
  let line_slice = slice.line(line);
  let mut end = line_slice.len_chars();
  if end > 0 && line_slice.char(end - 1) == '\n' {
    end -= 1;
  }
  if end > 0 && line_slice.char(end - 1) == '\r' {
    end -= 1;
  }
  slice.line_to_char(line) + end
}

#[cfg(test)]
mod test {
  use ropey::Rope;

  use super::*;

  #[test]
  fn line_ends_before_its_ending() {
    let text = Rope::from("ab\r\ncd\nef\rgh");
    let slice = text.slice(..);
    assert_eq!(line_end_char_index(&slice, 0), 2);
    assert_eq!(line_end_char_index(&slice, 1), 6);
    assert_eq!(line_end_char_index(&slice, 2), 9);
    assert_eq!(line_end_char_index(&slice, 3), 12);
  }

  #[test]
  fn detects_first_ending() {
    assert_eq!(auto_detect_line_ending("a\r\nb\n"), Some(LineEnding::Crlf));
    assert_eq!(auto_detect_line_ending("a\nb\r\n"), Some(LineEnding::LF));
    assert_eq!(auto_detect_line_ending("a\rb"), None);
    assert_eq!(auto_detect_line_ending("a"), None);
    assert_eq!(LineEnding::of_line("x\r"), Some(LineEnding::CR));
    assert_eq!(LineEnding::Crlf.len_chars(), 2);
  }
}
