//! Where shifter finds its configuration on disk.
//!
//! - `config.toml` and `dictionary.txt` in the [`config_dir`]
//! - `.shifter/config.toml` in the enclosing workspace, see [`find_workspace`]

pub mod config;

use std::{
  path::{
    Path,
    PathBuf,
  },
  sync::OnceLock,
};

use etcetera::base_strategy::{
  BaseStrategy,
  choose_base_strategy,
};

/// Directory name under the platform config dir and inside a workspace.
const APP_DIR: &str = "shifter";
const WORKSPACE_DIR: &str = ".shifter";

static CONFIG_FILE: OnceLock<PathBuf> = OnceLock::new();

/// Pins the global config file, e.g. to a `--config` argument. Only the
/// first call has an effect.
pub fn initialize_config_file(specified_file: Option<PathBuf>) {
  let config_file = specified_file.unwrap_or_else(default_config_file);
  CONFIG_FILE.set(config_file).ok();
}

/// Expands a leading `~` to the home directory.
pub fn expand_tilde(path: &Path) -> PathBuf {
  let Ok(rest) = path.strip_prefix("~") else {
    return path.to_owned();
  };
  match etcetera::home_dir() {
    Ok(home) => home.join(rest),
    Err(_) => path.to_owned(),
  }
}

/// `SHIFTER_CONFIG_DIR` if set, otherwise the platform config directory.
pub fn config_dir() -> PathBuf {
  if let Ok(dir) = std::env::var("SHIFTER_CONFIG_DIR") {
    return expand_tilde(Path::new(&dir));
  }
  match choose_base_strategy() {
    Ok(strategy) => strategy.config_dir().join(APP_DIR),
    Err(err) => {
      tracing::warn!("no config directory available: {err}");
      PathBuf::from(WORKSPACE_DIR)
    },
  }
}

pub fn config_file() -> PathBuf {
  CONFIG_FILE.get_or_init(default_config_file).clone()
}

pub fn workspace_config_file() -> PathBuf {
  find_workspace().0.join(WORKSPACE_DIR).join("config.toml")
}

/// User dictionary terms, one per line.
pub fn dictionary_file() -> PathBuf {
  config_dir().join("dictionary.txt")
}

fn default_config_file() -> PathBuf {
  config_dir().join("config.toml")
}

/// Merges `right` onto `left`. Tables are merged key by key up to
/// `merge_depth` levels deep; everything else is replaced by `right`.
pub fn merge_toml_values(left: toml::Value, right: toml::Value, merge_depth: usize) -> toml::Value {
  use toml::Value;

  match (left, right) {
    (Value::Table(mut left_map), Value::Table(right_map)) if merge_depth > 0 => {
      for (rname, rvalue) in right_map {
        let merged = match left_map.remove(&rname) {
          Some(lvalue) => merge_toml_values(lvalue, rvalue, merge_depth - 1),
          None => rvalue,
        };
        left_map.insert(rname, merged);
      }
      Value::Table(left_map)
    },
    (_, value) => value,
  }
}

/// Searches upward from the current directory for one containing `.git`,
/// `.svn`, `.jj` or `.shifter`. Returns `(dir, true)` with the current
/// directory if none is found.
pub fn find_workspace() -> (PathBuf, bool) {
  match std::env::current_dir() {
    Ok(current_dir) => find_workspace_in(current_dir),
    Err(_) => (PathBuf::new(), true),
  }
}

pub fn find_workspace_in(dir: impl AsRef<Path>) -> (PathBuf, bool) {
  let dir = dir.as_ref();
  for ancestor in dir.ancestors() {
    if [".git", ".svn", ".jj", WORKSPACE_DIR]
      .iter()
      .any(|marker| ancestor.join(marker).exists())
    {
      return (ancestor.to_owned(), false);
    }
  }

  (dir.to_owned(), true)
}

#[cfg(test)]
mod test {
  use toml::Value;

  use super::*;

  #[test]
  fn workspace_wins_key_by_key() {
    let global: Value =
      toml::from_str("sort-case = \"case-insensitive\"\nshift-more-size = 4").unwrap();
    let workspace: Value = toml::from_str("shift-more-size = 8").unwrap();

    let merged = merge_toml_values(global, workspace, 3);
    assert_eq!(merged.get("shift-more-size").unwrap().as_integer(), Some(8));
    assert_eq!(
      merged.get("sort-case").unwrap().as_str(),
      Some("case-insensitive")
    );
  }

  #[test]
  fn zero_depth_replaces() {
    let left: Value = toml::from_str("a = 1").unwrap();
    let right: Value = toml::from_str("b = 2").unwrap();
    let merged = merge_toml_values(left, right, 0);
    assert!(merged.get("a").is_none());
  }

  #[test]
  fn finds_marked_ancestor() {
    let root = tempfile::tempdir().unwrap();
    let nested = root.path().join("src").join("deep");
    std::fs::create_dir_all(&nested).unwrap();
    std::fs::create_dir(root.path().join(".shifter")).unwrap();

    assert_eq!(find_workspace_in(&nested), (root.path().to_owned(), false));
  }

  #[test]
  fn tilde_is_home() {
    let expanded = expand_tilde(Path::new("~/conf"));
    assert!(expanded.ends_with("conf"));
    assert_eq!(expand_tilde(Path::new("/etc/x")), PathBuf::from("/etc/x"));
  }
}
