use shifter_core::scan::leading_whitespace;

use super::Recognizer;
use crate::{
  engine::ShiftEngine,
  fragment::{
    Probe,
    TypeTag,
  },
  request::ShiftRequest,
};

fn is_comment(text: &str) -> bool {
  text.starts_with("//")
    || text.starts_with('#')
    || (text.starts_with("/*") && text.ends_with("*/"))
}

/// Splits `line` into code and the trailing `comment`.
fn split_line<'a>(line: &'a str, comment: &'a str) -> Option<(&'a str, &'a str)> {
  let comment = comment.trim();
  if comment.is_empty() || !is_comment(comment) {
    return None;
  }
  let line = line.trim_end();
  let code = line.strip_suffix(comment)?.trim();
  (!code.is_empty()).then_some((code, comment))
}

/// A comment after code on the same line. Shifting moves it onto its own
/// line above the code, at the same indentation.
pub struct TrailingComment;

impl Recognizer for TrailingComment {
  fn name(&self) -> &'static str {
    "trailing-comment"
  }

  fn classify(&self, probe: &Probe, _cx: &ShiftEngine) -> Option<TypeTag> {
    split_line(probe.line, probe.text).map(|_| TypeTag::TrailingComment)
  }

  /// The result replaces the whole source line, without its line ending.
  fn shift(&self, probe: &Probe, _request: ShiftRequest, cx: &ShiftEngine) -> Option<String> {
    let (code, comment) = split_line(probe.line, probe.text)?;
    let indent = leading_whitespace(probe.line);
    let line_ending = cx.line_ending().as_str();
    Some(format!("{indent}{comment}{line_ending}{indent}{code}"))
  }
}

#[cfg(test)]
mod test {
  use super::*;
  use crate::{
    config::Config,
    dictionary::Dictionaries,
  };

  fn lift(line: &str, comment: &str) -> Option<String> {
    let config = Config::default();
    let dictionaries = Dictionaries::builtin();
    let cx = ShiftEngine::new(&config, &dictionaries).with_document(line);
    let probe = Probe::new(comment).in_line(line);
    TrailingComment.classify(&probe, &cx)?;
    TrailingComment.shift(&probe, ShiftRequest::up(), &cx)
  }

  #[test]
  fn moves_comment_above() {
    assert_eq!(
      lift("    x = 1; // one", "// one").as_deref(),
      Some("    // one\n    x = 1;")
    );
    assert_eq!(
      lift("$a = 2; # two  ", "# two").as_deref(),
      Some("# two\n$a = 2;")
    );
    assert_eq!(
      lift("f(); /* three */", "/* three */").as_deref(),
      Some("/* three */\nf();")
    );
  }

  #[test]
  fn needs_code_before_the_comment() {
    assert_eq!(lift("  // alone", "// alone"), None);
    assert_eq!(lift("x = 1;", "x = 1;"), None);
    assert_eq!(lift("x = 1; // a", "// b"), None);
  }
}
