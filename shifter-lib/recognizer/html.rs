use super::Recognizer;
use crate::{
  engine::ShiftEngine,
  fragment::{
    Probe,
    TypeTag,
  },
  request::ShiftRequest,
};

/// Escaped chars and their entities. The apostrophe entity is only ever
/// decoded.
const ENTITIES: &[(char, &str)] = &[
  ('&', "&amp;"),
  ('<', "&lt;"),
  ('>', "&gt;"),
  ('"', "&quot;"),
  ('\'', "&#039;"),
];

const ENCODED: &[char] = &['&', '<', '>', '"'];

fn has_entities(text: &str) -> bool {
  ENTITIES.iter().any(|(_, entity)| text.contains(entity))
}

fn has_special_chars(text: &str) -> bool {
  text.contains(ENCODED)
}

fn encode(text: &str) -> String {
  let mut out = String::with_capacity(text.len());
  for c in text.chars() {
    match ENTITIES.iter().find(|&&(special, _)| special == c) {
      Some((_, entity)) if ENCODED.contains(&c) => out.push_str(entity),
      _ => out.push(c),
    }
  }
  out
}

fn decode(text: &str) -> String {
  let mut out = String::with_capacity(text.len());
  let mut rest = text;
  while let Some(amp) = rest.find('&') {
    out.push_str(&rest[..amp]);
    rest = &rest[amp..];
    match ENTITIES.iter().find(|(_, entity)| rest.starts_with(entity)) {
      Some(&(special, entity)) => {
        out.push(special);
        rest = &rest[entity.len()..];
      },
      None => {
        out.push('&');
        rest = &rest[1..];
      },
    }
  }
  out.push_str(rest);
  out
}

/// Decodes text holding any entity, encodes it otherwise.
pub fn toggle_html_encoding(text: &str) -> String {
  if has_entities(text) {
    decode(text)
  } else {
    encode(text)
  }
}

/// Text with HTML special chars or entities.
pub struct HtmlEncodable;

impl Recognizer for HtmlEncodable {
  fn name(&self) -> &'static str {
    "html-encodable"
  }

  fn classify(&self, probe: &Probe, _cx: &ShiftEngine) -> Option<TypeTag> {
    (has_entities(probe.text) || has_special_chars(probe.text)).then_some(TypeTag::HtmlEncodable)
  }

  fn shift(&self, probe: &Probe, _request: ShiftRequest, _cx: &ShiftEngine) -> Option<String> {
    Some(toggle_html_encoding(probe.text))
  }
}

#[cfg(test)]
mod test {
  use super::*;

  #[test]
  fn encodes_special_chars() {
    assert_eq!(
      toggle_html_encoding("<a href=\"x\">Tom & Jerry's</a>"),
      "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry's&lt;/a&gt;"
    );
  }

  #[test]
  fn decodes_entities() {
    assert_eq!(toggle_html_encoding("1 &lt; 2 &amp;&amp; 3"), "1 < 2 && 3");
    assert_eq!(toggle_html_encoding("&amp;lt;"), "&lt;");
    assert_eq!(toggle_html_encoding("a & b &gt; c"), "a & b > c");
    assert_eq!(toggle_html_encoding("Jerry&#039;s"), "Jerry's");
  }

  #[test]
  fn plain_text_is_unchanged() {
    assert_eq!(toggle_html_encoding("plain"), "plain");
  }

  quickcheck::quickcheck! {
    fn decode_inverts_encode(text: String) -> bool {
      decode(&encode(&text)) == text
    }
  }
}
