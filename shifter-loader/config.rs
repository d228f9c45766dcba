use std::path::Path;

use anyhow::{
  Context,
  Result,
};
use shifter_lib::Config;
use toml::Value;

/// Global then workspace configuration, merged, with the user dictionary
/// file filling in an unset `dictionary`.
pub fn load_config() -> Result<Config> {
  load_config_from(
    &crate::config_file(),
    &crate::workspace_config_file(),
    &crate::dictionary_file(),
  )
}

pub fn load_config_from(global: &Path, workspace: &Path, dictionary: &Path) -> Result<Config> {
  let mut merged = [global, workspace]
    .into_iter()
    .filter_map(|file| {
      std::fs::read_to_string(file)
        .ok()
        .map(|source| (file, source))
    })
    .map(|(file, source)| {
      tracing::debug!("reading config from {}", file.display());
      toml::from_str::<Value>(&source)
        .with_context(|| format!("failed to parse {}", file.display()))
    })
    .collect::<Result<Vec<_>>>()?
    .into_iter()
    .fold(Value::Table(toml::Table::new()), |a, b| {
      crate::merge_toml_values(a, b, 3)
    });

  if let Value::Table(table) = &mut merged
    && !table.contains_key("dictionary")
    && let Ok(terms) = std::fs::read_to_string(dictionary)
  {
    tracing::debug!("reading dictionary from {}", dictionary.display());
    table.insert("dictionary".to_owned(), Value::String(terms));
  }

  Config::from_value(merged).context("invalid configuration")
}
