use crate::line_ending::LineEnding;

#[inline]
pub fn char_is_line_ending(ch: char) -> bool {
  LineEnding::from_char(ch).is_some()
}

/// Letters, digits and `_`.
#[inline]
pub fn char_is_word(ch: char) -> bool {
  ch.is_alphanumeric() || ch == '_'
}

/// Word characters for stylesheets, where `margin-top` is a single word.
#[inline]
pub fn char_is_word_hyphenated(ch: char) -> bool {
  char_is_word(ch) || ch == '-'
}

/// Single-char arithmetic and comparison operators.
#[inline]
pub fn char_is_operator(ch: char) -> bool {
  matches!(ch, '+' | '-' | '*' | '/' | '%' | '<' | '>')
}

#[inline]
pub fn char_is_quote(ch: char) -> bool {
  matches!(ch, '\'' | '"' | '`')
}

#[inline]
pub fn char_is_slash(ch: char) -> bool {
  matches!(ch, '/' | '\\')
}

#[cfg(test)]
mod test {
  use super::*;

  #[test]
  fn classes() {
    assert!(char_is_word('é') && char_is_word('_') && char_is_word('7'));
    assert!(!char_is_word('$'));
    assert!(char_is_line_ending('\r') && !char_is_line_ending(' '));
    assert!(char_is_operator('%') && !char_is_operator('='));
    assert!(char_is_quote('`') && char_is_slash('\\'));
  }

  #[test]
  fn hyphen_only_joins_words_in_hyphenated_mode() {
    assert!(!char_is_word('-'));
    assert!(char_is_word_hyphenated('-'));
    assert!(char_is_word_hyphenated('x'));
  }
}
