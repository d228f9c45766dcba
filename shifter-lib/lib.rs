//! Shifting of values in source text.
//!
//! Given a caret or selection in a buffer and a direction, the crate finds
//! out what kind of value is there (a number, a CSS length, a weekday, a
//! boolean, a quoted string, a list of lines...) and replaces it with its
//! successor or predecessor. See [`ScopeResolver`] for the entry point and
//! [`recognizer`] for the kinds of values understood.

use smartstring::{
  LazyCompact,
  SmartString,
};

pub mod buffer;
pub mod case;
pub mod change;
pub mod config;
pub mod dictionary;
pub mod engine;
pub mod error;
pub mod fragment;
pub mod host;
pub mod recognizer;
pub mod request;
pub mod scope;
pub mod selection;
pub mod sort;
pub mod text;

pub type Tendril = SmartString<LazyCompact>;

pub use config::Config;
pub use error::ShiftError;
pub use host::{
  EditorHost,
  Prompter,
};
pub use request::{
  Direction,
  ShiftRequest,
};
pub use scope::{
  Plan,
  Scope,
  ScopeResolver,
};
