//! Command line host for shifter.
//!
//! Reads a file (or stdin), performs a single shift at the given caret or
//! selection and prints the resulting text to stdout.

mod cli;
mod logging;
mod prompt;

use std::{
  io::{
    Read,
    Write,
  },
  path::Path,
  process::ExitCode,
};

use anyhow::{
  Context,
  Result,
};
use shifter_lib::{
  ScopeResolver,
  ShiftRequest,
  buffer::Buffer,
};

use crate::{
  cli::CliOptions,
  prompt::FlagPrompter,
};

fn read_input(file: Option<&Path>) -> Result<String> {
  match file {
    Some(path) => {
      std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
    },
    None => {
      let mut text = String::new();
      std::io::stdin()
        .read_to_string(&mut text)
        .context("failed to read stdin")?;
      Ok(text)
    },
  }
}

fn main() -> Result<ExitCode> {
  let options = CliOptions::parse()?;
  logging::setup_logging(options.verbosity, options.log_file.as_deref())?;

  shifter_loader::initialize_config_file(options.config_file.clone());
  let config = shifter_loader::config::load_config()?;
  let resolver = ScopeResolver::new(config);

  let request = if options.more {
    ShiftRequest::more(options.direction, resolver.config())
  } else {
    ShiftRequest::new(options.direction)
  };

  let text = read_input(options.file.as_deref())?;
  let mut buffer = Buffer::new(&text);
  if let Some(extension) = &options.extension {
    buffer = buffer.with_extension(extension.as_str());
  }
  let mut buffer = options.target.place(buffer)?;

  let mut prompter = FlagPrompter::new(options.answers);
  match resolver.perform(&mut buffer, &mut prompter, request) {
    Ok(plan) => {
      log::info!("shifted {:?} with {} change(s)", plan.scope, plan.changes.len());
    },
    Err(err) if err.is_silent() => log::info!("left unchanged: {err}"),
    Err(err) => {
      log::error!("{err}");
      eprintln!("shifter: {err}");
      return Ok(ExitCode::FAILURE);
    },
  }

  let mut stdout = std::io::stdout().lock();
  stdout
    .write_all(buffer.contents().as_bytes())
    .and_then(|()| stdout.flush())
    .context("failed to write stdout")?;
  Ok(ExitCode::SUCCESS)
}
