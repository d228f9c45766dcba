//! Scope resolution.
//!
//! [`ScopeResolver`] decides from the shape of the host's selection what a
//! shift operates on and turns the request into a [`Plan`] of changes:
//!
//! - **No selection**: the token at the caret. An operator at the caret is
//!   tried first, then a compound value covering the caret (date, time, hex
//!   color, PHP variable, number with unit), then the plain word. Each token
//!   is retried lower-cased before falling back to the line: the single
//!   shiftable word of the line, or the line's HTML encoding toggled.
//! - **Single-line selection**: an ordered list of selection transforms;
//!   the first one applicable wins, otherwise the selection is shifted as a
//!   fragment of its own.
//! - **Multi-line selection**: merges JS declarations or sorts the lines.
//! - **Block selection**: numeric rows are enumerated or shifted one by one,
//!   identical rows are shifted alike, anything else is left alone.
//!
//! Nothing touches the host before the plan is complete. A dismissed prompt
//! therefore leaves the buffer as it was.

use std::ops::Range as CharRange;

use once_cell::sync::Lazy;
use regex::Regex;
use ropey::RopeSlice;
use shifter_core::{
  chars::char_is_word,
  line_ending::auto_detect_line_ending,
  scan,
};
use smallvec::{
  SmallVec,
  smallvec,
};

use crate::{
  case::{
    is_all_uppercase,
    is_camel_case,
    is_uc_first,
    preserve_case,
    to_uc_first,
    to_upper_case,
  },
  change::{
    self,
    Change,
  },
  config::Config,
  dictionary::Dictionaries,
  engine::ShiftEngine,
  error::{
    Result,
    ShiftError,
  },
  fragment::{
    Fragment,
    Probe,
    TypeTag,
  },
  host::{
    EditorHost,
    NumericBlockMode,
    Prompter,
  },
  recognizer::{
    CommaSeparatedList,
    HtmlEncodable,
    JsVariableDeclarations,
    LogicalOperator,
    Recognizer,
    SizzleSelector,
    TernaryExpression,
    TrailingComment,
    is_integer,
    shift_number,
    shift_php_concatenation,
    toggle_html_encoding,
  },
  request::ShiftRequest,
  selection::{
    Range,
    SelectionShape,
  },
  sort::LineSorter,
  text::{
    contains_any_quotes,
    contains_any_slashes,
    swap_quotes,
    swap_slashes,
  },
};

/// Values spanning word boundaries that the word scan would split apart.
static COMPOUND_TOKEN: Lazy<Regex> = Lazy::new(|| {
  Regex::new(concat!(
    r"\d{4}-\d{2}-\d{2}",
    r"|\d{2}:\d{2}:\d{2}",
    r"|#(?:[0-9a-fA-F]{6}|[0-9a-fA-F]{3})",
    r"|\$[A-Za-z_][A-Za-z0-9_]*",
    r"|-?\d+(?:\.\d+)?(?:[A-Za-z]+|%)?",
  ))
  .unwrap()
});

/// Stripped off the words of a line before they are tried one by one.
const WORD_TRIM: &[char] = &[';', ',', ':', '(', ')', '[', ']', '{', '}'];

/// The granularity a shift ended up working on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
  Token,
  Line,
  SingleLineSelection,
  MultiLineSelection,
  ColumnarBlock,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
  pub scope:   Scope,
  pub changes: SmallVec<[Change; 1]>,
}

impl Plan {
  fn single(scope: Scope, change: Change) -> Self {
    Self {
      scope,
      changes: smallvec![change],
    }
  }
}

#[derive(Clone, Copy)]
enum Transform {
  Recognize(&'static dyn Recognizer),
  PhpConcatenation,
  QuoteSwap,
  SlashSwap,
}

/// Single-line selection transforms, in the order they are tried.
static SELECTION_TRANSFORMS: &[Transform] = &[
  // never matches one line; multi-line declarations merge in `shift_lines`
  Transform::Recognize(&JsVariableDeclarations),
  Transform::Recognize(&SizzleSelector),
  Transform::Recognize(&CommaSeparatedList),
  Transform::PhpConcatenation,
  Transform::Recognize(&TernaryExpression),
  Transform::Recognize(&TrailingComment),
  Transform::QuoteSwap,
  Transform::SlashSwap,
  Transform::Recognize(&LogicalOperator),
  Transform::Recognize(&HtmlEncodable),
];

impl Transform {
  fn name(self) -> &'static str {
    match self {
      Self::Recognize(recognizer) => recognizer.name(),
      Self::PhpConcatenation => "php-concatenation",
      Self::QuoteSwap => "quote-swap",
      Self::SlashSwap => "slash-swap",
    }
  }

  /// The transformed text and whether it replaces the whole line, or
  /// `None` if the transform does not apply.
  fn apply(
    self,
    probe: &Probe,
    request: ShiftRequest,
    engine: &ShiftEngine,
  ) -> Option<(String, bool)> {
    match self {
      Self::Recognize(recognizer) => {
        let kind = recognizer.classify(probe, engine)?;
        let shifted = recognizer.shift(probe, request, engine)?;
        Some((shifted, kind.replaces_line()))
      },
      Self::PhpConcatenation if probe.is_php() => {
        shift_php_concatenation(probe.text).map(|shifted| (shifted, false))
      },
      Self::PhpConcatenation => None,
      Self::QuoteSwap => contains_any_quotes(probe.text).then(|| (swap_quotes(probe.text), false)),
      Self::SlashSwap => {
        contains_any_slashes(probe.text).then(|| (swap_slashes(probe.text), false))
      },
    }
  }
}

/// Everything one request reads from the host.
struct Cx<'a> {
  host:      &'a dyn EditorHost,
  text:      RopeSlice<'a>,
  extension: Option<&'a str>,
  engine:    ShiftEngine<'a>,
}

impl<'a> Cx<'a> {
  fn slice(&self, range: CharRange<usize>) -> String {
    self.text.slice(range).to_string()
  }

  fn line(&self, offset: usize) -> (CharRange<usize>, String) {
    let bounds = self.host.line_bounds(offset);
    let line = self.slice(bounds.clone());
    (bounds, line)
  }

  fn probe<'p>(&self, text: &'p str, span: &CharRange<usize>, line: &'p str) -> Probe<'p>
  where
    'a: 'p,
  {
    Probe::new(text)
      .in_line(line)
      .with_surroundings(
        scan::char_before(self.text, span.start),
        scan::char_at(self.text, span.end),
      )
      .with_extension(self.extension)
  }

  /// Shifts `text` as if it stood at `span`.
  fn shift_span(
    &self,
    span: CharRange<usize>,
    text: &str,
    request: ShiftRequest,
  ) -> Option<(Fragment, Change)> {
    let (line_range, line) = self.line(span.start);
    let probe = self.probe(text, &span, &line);
    let (fragment, shifted) = self.engine.shift_probe(&probe, request)?;
    let change = replacement(fragment.kind(), span, line_range, shifted);
    Some((fragment, change))
  }
}

fn replacement(
  kind: TypeTag,
  span: CharRange<usize>,
  line: CharRange<usize>,
  shifted: String,
) -> Change {
  let CharRange { start, end } = if kind.replaces_line() { line } else { span };
  (start, end, Some(shifted.into()))
}

/// Re-cases the generic shift of a selection like the selection itself.
/// camelCase is not reconstructed; it comes out capitalized.
fn reapply_case(original: &str, shifted: String) -> String {
  if is_all_uppercase(original) {
    to_upper_case(shifted.chars()).to_string()
  } else if is_camel_case(original) || is_uc_first(original) {
    to_uc_first(&shifted).to_string()
  } else {
    shifted
  }
}

/// Char range, relative to `line`, of a compound value covering `column`.
fn compound_token_at(line: &str, column: usize) -> Option<CharRange<usize>> {
  let char_offset = |byte: usize| line[..byte].chars().count();

  COMPOUND_TOKEN.find_iter(line).find_map(|m| {
    let mut start = m.start();
    let before = line[..start].chars().next_back();
    if m.as_str().starts_with('-') && before.is_some_and(|c| char_is_word(c) || c == ')') {
      start += 1;
    }
    let before = line[..start].chars().next_back();
    let after = line[m.end()..].chars().next();
    let glued = |c: Option<char>| c.is_some_and(|c| char_is_word(c) || c == '.');
    if glued(before) || glued(after) {
      return None;
    }

    let span = char_offset(start)..char_offset(m.end());
    (span.start <= column && column <= span.end).then_some(span)
  })
}

/// Whitespace-separated words of `line` with their char offsets, trimmed of
/// brackets and separators. Words of up to two chars are skipped.
fn line_words(line: &str) -> Vec<(usize, &str)> {
  fn push<'l>(words: &mut Vec<(usize, &'l str)>, char_start: usize, word: &'l str) {
    let trimmed_start = word.trim_start_matches(WORD_TRIM);
    let lead = word.chars().count() - trimmed_start.chars().count();
    let trimmed = trimmed_start.trim_end_matches(WORD_TRIM);
    if trimmed.chars().count() > 2 {
      words.push((char_start + lead, trimmed));
    }
  }

  let mut words = Vec::new();
  let mut start: Option<(usize, usize)> = None;
  for (char_idx, (byte_idx, c)) in line.char_indices().enumerate() {
    if c.is_whitespace() {
      if let Some((char_start, byte_start)) = start.take() {
        push(&mut words, char_start, &line[byte_start..byte_idx]);
      }
    } else if start.is_none() {
      start = Some((char_idx, byte_idx));
    }
  }
  if let Some((char_start, byte_start)) = start {
    push(&mut words, char_start, &line[byte_start..]);
  }
  words
}

/// Turns requests into plans against one configuration snapshot.
#[derive(Debug, Clone)]
pub struct ScopeResolver {
  config:       Config,
  dictionaries: Dictionaries,
}

impl Default for ScopeResolver {
  fn default() -> Self {
    Self::new(Config::default())
  }
}

impl ScopeResolver {
  pub fn new(config: Config) -> Self {
    let dictionaries = Dictionaries::load(&config);
    Self {
      config,
      dictionaries,
    }
  }

  pub fn config(&self) -> &Config {
    &self.config
  }

  pub fn dictionaries(&self) -> &Dictionaries {
    &self.dictionaries
  }

  /// Computes the changes of one request without applying them.
  pub fn plan(
    &self,
    host: &dyn EditorHost,
    prompter: &mut dyn Prompter,
    request: ShiftRequest,
  ) -> Result<Plan> {
    let text = host.read_text();
    let document = text.to_string();
    let cx = Cx {
      host,
      text,
      extension: host.file_extension(),
      engine: ShiftEngine::new(&self.config, &self.dictionaries).with_document(&document),
    };

    let shape = host.selection_ranges();
    tracing::debug!(?shape, ?request, "resolving scope");
    let plan = match &shape {
      SelectionShape::None => self.shift_at_caret(&cx, host.caret_offset(), request),
      SelectionShape::SingleLineSpan(range) => {
        self.shift_selection(&cx, range.from()..range.to(), request)
      },
      SelectionShape::MultiLineSpan(range) => {
        self.shift_lines(&cx, range.from()..range.to(), prompter, request)
      },
      SelectionShape::ColumnarBlock(rows) => self.shift_block(&cx, rows, prompter, request),
    }?;
    tracing::debug!(scope = ?plan.scope, changes = plan.changes.len(), "planned shift");
    Ok(plan)
  }

  /// Plans the request and applies it to the host.
  pub fn perform(
    &self,
    host: &mut dyn EditorHost,
    prompter: &mut dyn Prompter,
    request: ShiftRequest,
  ) -> Result<Plan> {
    let plan = self.plan(&*host, prompter, request)?;
    change::apply_to_host(host, &plan.changes)?;
    Ok(plan)
  }

  fn shift_at_caret(&self, cx: &Cx, caret: usize, request: ShiftRequest) -> Result<Plan> {
    if let Some(span) = scan::operator_at(cx.text, caret) {
      let operator = cx.slice(span.clone());
      if let Some((_, change)) = cx.shift_span(span, &operator, request) {
        return Ok(Plan::single(Scope::Token, change));
      }
    }

    let (line_range, line) = cx.line(caret);
    let mut tokens: SmallVec<[CharRange<usize>; 2]> = SmallVec::new();
    if let Some(span) = compound_token_at(&line, caret - line_range.start) {
      tokens.push(line_range.start + span.start..line_range.start + span.end);
    }
    let hyphenated = Probe::new("").with_extension(cx.extension).is_css();
    if let Some(span) = scan::word_at(cx.text, caret, hyphenated) {
      if !tokens.contains(&span) {
        tokens.push(span);
      }
    }

    for span in &tokens {
      let token = cx.slice(span.clone());
      if let Some((_, change)) = cx.shift_span(span.clone(), &token, request) {
        return Ok(Plan::single(Scope::Token, change));
      }
    }

    for span in &tokens {
      let token = cx.slice(span.clone());
      let lower = token.to_lowercase();
      if lower == token {
        continue;
      }
      let shifted = cx.shift_span(span.clone(), &lower, request);
      if let Some((fragment, (from, to, Some(shifted)))) = shifted {
        let shifted = if self.config.preserve_case && !fragment.kind().replaces_line() {
          preserve_case(&token, &shifted)
        } else {
          shifted
        };
        return Ok(Plan::single(Scope::Token, (from, to, Some(shifted))));
      }
    }

    self
      .shift_line_words(cx, line_range, &line, request)
      .map(|change| Plan::single(Scope::Line, change))
      .ok_or(ShiftError::NotShiftable)
  }

  /// The line's only shiftable word, or else its HTML encoding toggled.
  fn shift_line_words(
    &self,
    cx: &Cx,
    line_range: CharRange<usize>,
    line: &str,
    request: ShiftRequest,
  ) -> Option<Change> {
    let mut shiftable = line_words(line).into_iter().filter_map(|(start, word)| {
      let start = line_range.start + start;
      let span = start..start + word.chars().count();
      cx.shift_span(span, word, request)
    });

    match (shiftable.next(), shiftable.next()) {
      (Some((fragment, change)), None) => {
        tracing::debug!(word = fragment.text(), "shifting only shiftable word of line");
        Some(change)
      },
      _ => {
        let toggled = toggle_html_encoding(line);
        (toggled != line).then(|| (line_range.start, line_range.end, Some(toggled.into())))
      },
    }
  }

  fn shift_selection(
    &self,
    cx: &Cx,
    span: CharRange<usize>,
    request: ShiftRequest,
  ) -> Result<Plan> {
    let selected = cx.slice(span.clone());
    let (line_range, line) = cx.line(span.start);
    let probe = cx.probe(&selected, &span, &line);
    let fragment = cx.engine.classify(&probe);

    // a selected variable shifts as is, its `$` would trip the transforms
    if fragment.kind() != TypeTag::PhpVariable {
      for &transform in SELECTION_TRANSFORMS {
        let Some((shifted, replaces_line)) = transform.apply(&probe, request, &cx.engine) else {
          continue;
        };
        tracing::debug!(transform = transform.name(), "transforming selection");
        if shifted == selected {
          return Err(ShiftError::NotShiftable);
        }
        let target = if replaces_line {
          line_range
        } else {
          span
        };
        return Ok(Plan::single(
          Scope::SingleLineSelection,
          (target.start, target.end, Some(shifted.into())),
        ));
      }
    }

    let shifted = cx
      .engine
      .shift(&fragment, request)
      .ok_or(ShiftError::NotShiftable)?;
    let shifted = if fragment.kind().defines_case() {
      shifted
    } else {
      reapply_case(&selected, shifted)
    };
    if shifted == selected {
      return Err(ShiftError::NotShiftable);
    }
    Ok(Plan::single(
      Scope::SingleLineSelection,
      replacement(fragment.kind(), span, line_range, shifted),
    ))
  }

  fn shift_lines(
    &self,
    cx: &Cx,
    span: CharRange<usize>,
    prompter: &mut dyn Prompter,
    request: ShiftRequest,
  ) -> Result<Plan> {
    let start = cx.host.line_bounds(span.start).start;
    let end = cx.host.line_bounds(span.end).end;
    let block = cx.slice(start..end);
    let changed = |text: String| {
      if text == block {
        Err(ShiftError::NotShiftable)
      } else {
        Ok(Plan::single(
          Scope::MultiLineSelection,
          (start, end, Some(text.into())),
        ))
      }
    };

    let probe = Probe::new(&block).with_extension(cx.extension);
    if JsVariableDeclarations.classify(&probe, &cx.engine).is_some() {
      let merged = JsVariableDeclarations
        .shift(&probe, request, &cx.engine)
        .ok_or(ShiftError::NotShiftable)?;
      tracing::debug!("merging variable declarations");
      return changed(merged);
    }

    let line_ending = auto_detect_line_ending(&block).unwrap_or_else(|| cx.engine.line_ending());
    let lines: Vec<&str> = block.lines().collect();
    let mut sorted = LineSorter::new(self.config.sort_case).sort(&lines, request.direction);
    if sorted.has_duplicates() {
      match prompter.collapse_duplicates() {
        Some(true) => sorted.collapse_duplicates(),
        Some(false) => {},
        None => return Err(ShiftError::UserCancelled),
      }
    }
    changed(sorted.join(line_ending.as_str()))
  }

  fn shift_block(
    &self,
    cx: &Cx,
    rows: &[Range],
    prompter: &mut dyn Prompter,
    request: ShiftRequest,
  ) -> Result<Plan> {
    let texts: Vec<String> = rows
      .iter()
      .map(|row| cx.slice(row.from()..row.to()))
      .collect();
    let first = texts.first().ok_or(ShiftError::NotShiftable)?;

    let replacements: Vec<String> = if texts.iter().all(|text| is_integer(text)) {
      let start: i64 = first.parse().map_err(|_| {
        ShiftError::MalformedNumber {
          text: first.clone(),
        }
      })?;
      let mode = prompter
        .numeric_block_mode(start, request.direction)
        .ok_or(ShiftError::UserCancelled)?;
      tracing::debug!(?mode, rows = rows.len(), "shifting numeric block");
      match mode {
        NumericBlockMode::Enumerate { start } => {
          (0..texts.len() as i64)
            .map(|i| start.saturating_add(i).to_string())
            .collect()
        },
        NumericBlockMode::ShiftEach => {
          let step = request.direction.signum();
          texts
            .iter()
            .map(|text| shift_number(text, step, self.config.negative_numbers))
            .collect::<Result<_>>()?
        },
      }
    } else if texts.iter().all(|text| text == first) {
      let row = rows[0];
      let span = row.from()..row.to();
      let (_, (_, _, shifted)) = cx
        .shift_span(span, first, request)
        .ok_or(ShiftError::NotShiftable)?;
      let shifted = shifted.map(|text| text.to_string()).unwrap_or_default();
      vec![shifted; texts.len()]
    } else {
      return Err(ShiftError::AmbiguousBlock);
    };

    let changes: SmallVec<[Change; 1]> = rows
      .iter()
      .zip(&texts)
      .zip(replacements)
      .filter(|((_, text), replacement)| *text != replacement)
      .map(|((row, _), replacement)| (row.from(), row.to(), Some(replacement.into())))
      .collect();
    if changes.is_empty() {
      return Err(ShiftError::NotShiftable);
    }
    Ok(Plan {
      scope: Scope::ColumnarBlock,
      changes,
    })
  }
}
