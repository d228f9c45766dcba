use once_cell::sync::Lazy;
use regex::Regex;
use shifter_core::line_ending::{
  LineEnding,
  auto_detect_line_ending,
};

use super::Recognizer;
use crate::{
  engine::ShiftEngine,
  fragment::{
    Probe,
    TypeTag,
  },
  request::ShiftRequest,
};

static DECLARATION: Lazy<Regex> =
  Lazy::new(|| Regex::new(r"^(var|let|const)\s+(.+?)\s*;$").unwrap());

struct Declarations<'a> {
  indent:   &'a str,
  keyword:  &'a str,
  bindings: Vec<&'a str>,
}

/// Two or more consecutive `var`/`let`/`const` statements using the same
/// keyword.
fn parse(text: &str) -> Option<Declarations<'_>> {
  let mut lines = text.lines().filter(|line| !line.trim().is_empty());
  let first = lines.next()?;
  let indent = &first[..first.len() - first.trim_start().len()];
  let captures = DECLARATION.captures(first.trim())?;
  let keyword = captures.get(1)?.as_str();
  let mut bindings = vec![captures.get(2)?.as_str()];

  for line in lines {
    let captures = DECLARATION.captures(line.trim())?;
    if captures.get(1)?.as_str() != keyword {
      return None;
    }
    bindings.push(captures.get(2)?.as_str());
  }

  (bindings.len() > 1).then_some(Declarations {
    indent,
    keyword,
    bindings,
  })
}

/// Merges the statements into one declaration with a binding per line.
pub struct JsVariableDeclarations;

impl Recognizer for JsVariableDeclarations {
  fn name(&self) -> &'static str {
    "js-variable-declarations"
  }

  fn classify(&self, probe: &Probe, _cx: &ShiftEngine) -> Option<TypeTag> {
    parse(probe.text).map(|_| TypeTag::JsVariableDeclarationList)
  }

  fn shift(&self, probe: &Probe, _request: ShiftRequest, _cx: &ShiftEngine) -> Option<String> {
    let Declarations {
      indent,
      keyword,
      bindings,
    } = parse(probe.text)?;
    let line_ending = auto_detect_line_ending(probe.text)
      .unwrap_or(LineEnding::LF)
      .as_str();
    let continuation = format!(",{line_ending}{indent}{}", " ".repeat(keyword.len() + 1));

    let mut merged = format!("{indent}{keyword} {}", bindings.join(&continuation));
    merged.push(';');
    if probe.text.ends_with(['\n', '\r']) {
      merged.push_str(line_ending);
    }
    Some(merged)
  }
}

#[cfg(test)]
mod test {
  use super::*;
  use crate::{
    config::Config,
    dictionary::Dictionaries,
  };

  fn merge(text: &str) -> Option<String> {
    let config = Config::default();
    let dictionaries = Dictionaries::builtin();
    let cx = ShiftEngine::new(&config, &dictionaries);
    let probe = Probe::new(text);
    JsVariableDeclarations.classify(&probe, &cx)?;
    JsVariableDeclarations.shift(&probe, ShiftRequest::up(), &cx)
  }

  #[test]
  fn merges_statements() {
    assert_eq!(
      merge("var a = 1;\nvar b = 2;\nvar c;\n").as_deref(),
      Some("var a = 1,\n    b = 2,\n    c;\n")
    );
    assert_eq!(
      merge("  let x = f(1, 2);\r\n  let y = 3;").as_deref(),
      Some("  let x = f(1, 2),\r\n      y = 3;")
    );
  }

  #[test]
  fn rejects_other_shapes() {
    assert_eq!(merge("var a = 1;"), None);
    assert_eq!(merge("var a = 1;\nlet b = 2;"), None);
    assert_eq!(merge("var a = 1;\nfoo();"), None);
    assert_eq!(merge("var a = 1\nvar b = 2"), None);
  }
}
