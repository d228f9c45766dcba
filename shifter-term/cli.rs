use std::path::PathBuf;

use anyhow::{
  Result,
  bail,
};
use clap::{
  ArgAction,
  Parser,
};
use shifter_lib::{
  Direction,
  buffer::Buffer,
  host::NumericBlockMode,
};

/// Where in the input the shift happens.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Target {
  Caret(usize),
  Selection { anchor: usize, head: usize },
  Block(Vec<(usize, usize)>),
}

impl Target {
  /// Places the target on `buffer`, rejecting offsets past its end.
  pub fn place(&self, buffer: Buffer) -> Result<Buffer> {
    let len = buffer.rope().len_chars();
    let check = |offset: usize| {
      if offset > len {
        bail!("offset {offset} is past the end of the input ({len} chars)");
      }
      Ok(())
    };

    Ok(match self {
      Self::Caret(caret) => {
        check(*caret)?;
        buffer.with_caret(*caret)
      },
      Self::Selection { anchor, head } => {
        check(*anchor)?;
        check(*head)?;
        buffer.with_selection(*anchor, *head)
      },
      Self::Block(rows) => {
        for &(from, to) in rows {
          check(from)?;
          check(to)?;
        }
        buffer.with_block(rows.iter().copied())
      },
    })
  }
}

/// Prompt answers given up front.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Answers {
  pub numeric_block: Option<NumericBlockMode>,
  pub duplicates:    Option<bool>,
}

#[derive(Clone, Debug)]
pub struct CliOptions {
  pub direction:   Direction,
  pub more:        bool,
  pub target:      Target,
  pub extension:   Option<String>,
  pub answers:     Answers,
  pub verbosity:   u8,
  pub log_file:    Option<PathBuf>,
  pub config_file: Option<PathBuf>,
  pub file:        Option<PathBuf>,
}

impl CliOptions {
  pub fn parse() -> Result<Self> {
    let raw = RawCli::parse();
    raw.try_into()
  }
}

#[derive(Parser, Debug)]
#[command(name = "shifter", about, long_about = None, version)]
struct RawCli {
  /// Shift down instead of up
  #[arg(short = 'd', long = "down")]
  down: bool,

  /// Shift by the configured shift-more-size steps
  #[arg(long = "more")]
  more: bool,

  /// Caret offset in chars
  #[arg(long = "caret", value_name = "N", conflicts_with_all = ["select", "block"])]
  caret: Option<usize>,

  /// Selected char range
  #[arg(
    long = "select",
    value_name = "FROM:TO",
    value_parser = parse_span,
    conflicts_with = "block"
  )]
  select: Option<(usize, usize)>,

  /// Block selection rows
  #[arg(
    long = "block",
    value_name = "FROM:TO,...",
    value_parser = parse_span,
    value_delimiter = ','
  )]
  block: Option<Vec<(usize, usize)>>,

  /// File extension deciding PHP and CSS specifics, defaults to FILE's
  #[arg(long = "ext", value_name = "EXT")]
  extension: Option<String>,

  /// Increase logging verbosity (repeat for more detail)
  #[arg(short = 'v', action = ArgAction::Count)]
  verbosity: u8,

  /// Save logs to a specific file
  #[arg(long = "log", value_name = "FILE")]
  log_file: Option<PathBuf>,

  /// Load configuration from a specific file
  #[arg(short = 'c', long = "config", value_name = "FILE")]
  config_file: Option<PathBuf>,

  /// Enumerate a numeric block starting at N
  #[arg(
    long = "enumerate-from",
    value_name = "N",
    allow_negative_numbers = true,
    conflicts_with = "each"
  )]
  enumerate_from: Option<i64>,

  /// Shift every row of a numeric block on its own
  #[arg(long = "each")]
  each: bool,

  /// Collapse duplicate lines after sorting
  #[arg(long = "collapse", conflicts_with = "keep_duplicates")]
  collapse: bool,

  /// Keep duplicate lines after sorting
  #[arg(long = "keep-duplicates")]
  keep_duplicates: bool,

  /// Input file, stdin if omitted
  #[arg(value_name = "FILE")]
  file: Option<PathBuf>,
}

impl TryFrom<RawCli> for CliOptions {
  type Error = anyhow::Error;

  fn try_from(raw: RawCli) -> Result<Self> {
    let target = match (raw.caret, raw.select, raw.block) {
      (_, Some((anchor, head)), _) => Target::Selection { anchor, head },
      (_, _, Some(rows)) if rows.len() > 1 => Target::Block(rows),
      (_, _, Some(_)) => bail!("a block needs at least two rows"),
      (caret, ..) => Target::Caret(caret.unwrap_or(0)),
    };

    let numeric_block = match (raw.enumerate_from, raw.each) {
      (Some(start), _) => Some(NumericBlockMode::Enumerate { start }),
      (None, true) => Some(NumericBlockMode::ShiftEach),
      (None, false) => None,
    };
    let duplicates = match (raw.collapse, raw.keep_duplicates) {
      (true, _) => Some(true),
      (false, true) => Some(false),
      (false, false) => None,
    };

    let extension = raw.extension.or_else(|| {
      raw
        .file
        .as_deref()
        .and_then(|file| file.extension())
        .map(|ext| ext.to_string_lossy().into_owned())
    });

    Ok(Self {
      direction: if raw.down {
        Direction::Down
      } else {
        Direction::Up
      },
      more: raw.more,
      target,
      extension,
      answers: Answers {
        numeric_block,
        duplicates,
      },
      verbosity: raw.verbosity,
      log_file: raw.log_file,
      config_file: raw.config_file,
      file: raw.file,
    })
  }
}

fn parse_span(value: &str) -> std::result::Result<(usize, usize), String> {
  let (from, to) = value
    .split_once(':')
    .ok_or_else(|| format!("expected FROM:TO, got '{value}'"))?;
  let offset = |part: &str| {
    part
      .trim()
      .parse::<usize>()
      .map_err(|err| format!("invalid offset '{part}': {err}"))
  };
  Ok((offset(from)?, offset(to)?))
}
