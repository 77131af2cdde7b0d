//! Per-view settings.
//!
//! Settings load from TOML, fall back to defaults for missing keys, and can
//! be read or written by name with dynamically typed values the way the
//! `set_setting`/`toggle_setting` commands need. Known keys are type checked
//! on write. Unknown keys are kept as-is so callers can stash their own
//! values next to the editing ones.
//!
//! ```toml
//! tab_size = 2
//! translate_tabs_to_spaces = true
//! word_separators = "./\\()"
//! ```

use std::collections::BTreeMap;

use serde::{
  Deserialize,
  Serialize,
};
use serde_json::Value;
use the_core::chars::DEFAULT_WORD_SEPARATORS;
use thiserror::Error;

use crate::comment::DEFAULT_COMMENT_TOKEN;

pub type Result<T> = std::result::Result<T, SettingsError>;

#[derive(Debug, Error)]
pub enum SettingsError {
  #[error("failed to parse settings: {0}")]
  Parse(#[from] toml::de::Error),
  #[error("setting '{key}' expects {expected}, got {value}")]
  InvalidValue {
    key:      String,
    expected: &'static str,
    value:    Value,
  },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
  pub tab_size:                 usize,
  pub translate_tabs_to_spaces: bool,
  pub use_tab_stops:            bool,
  pub word_separators:          String,
  pub find_wrap:                bool,
  pub comment_token:            String,
  #[serde(flatten)]
  pub extra:                    BTreeMap<String, Value>,
}

impl Default for Settings {
  fn default() -> Self {
    Self {
      tab_size:                 4,
      translate_tabs_to_spaces: false,
      use_tab_stops:            true,
      word_separators:          DEFAULT_WORD_SEPARATORS.to_string(),
      find_wrap:                true,
      comment_token:            DEFAULT_COMMENT_TOKEN.to_string(),
      extra:                    BTreeMap::new(),
    }
  }
}

impl Settings {
  pub fn from_toml_str(input: &str) -> Result<Self> {
    let settings: Settings = toml::from_str(input)?;
    if settings.tab_size == 0 {
      return Err(invalid("tab_size", "a positive integer", Value::from(0)));
    }
    Ok(settings)
  }

  /// Current value of `key`, if it is set.
  pub fn get(&self, key: &str) -> Option<Value> {
    let value = match key {
      "tab_size" => Value::from(self.tab_size),
      "translate_tabs_to_spaces" => Value::from(self.translate_tabs_to_spaces),
      "use_tab_stops" => Value::from(self.use_tab_stops),
      "word_separators" => Value::from(self.word_separators.as_str()),
      "find_wrap" => Value::from(self.find_wrap),
      "comment_token" => Value::from(self.comment_token.as_str()),
      _ => return self.extra.get(key).cloned(),
    };
    Some(value)
  }

  pub fn get_bool(&self, key: &str) -> Option<bool> {
    self.get(key).and_then(|value| value.as_bool())
  }

  pub fn set(&mut self, key: &str, value: Value) -> Result<()> {
    match key {
      "tab_size" => {
        self.tab_size = value
          .as_u64()
          .filter(|&size| size > 0)
          .map(|size| size as usize)
          .ok_or_else(|| invalid(key, "a positive integer", value.clone()))?;
      },
      "translate_tabs_to_spaces" => self.translate_tabs_to_spaces = expect_bool(key, value)?,
      "use_tab_stops" => self.use_tab_stops = expect_bool(key, value)?,
      "find_wrap" => self.find_wrap = expect_bool(key, value)?,
      "word_separators" => self.word_separators = expect_string(key, value)?,
      "comment_token" => self.comment_token = expect_string(key, value)?,
      _ => {
        self.extra.insert(key.to_string(), value);
      },
    }
    tracing::trace!(key, "setting updated");
    Ok(())
  }

  /// Flips a boolean setting. Anything that is not currently `true` becomes
  /// `true`.
  pub fn toggle(&mut self, key: &str) -> Result<()> {
    let current = self.get_bool(key).unwrap_or(false);
    self.set(key, Value::Bool(!current))
  }

  /// Removes a custom key. Known keys go back to their defaults.
  pub fn erase(&mut self, key: &str) {
    if self.extra.remove(key).is_some() {
      return;
    }
    if let Some(value) = Settings::default().get(key) {
      // Defaults always pass their own validation.
      let _ = self.set(key, value);
    }
  }
}

fn invalid(key: &str, expected: &'static str, value: Value) -> SettingsError {
  SettingsError::InvalidValue {
    key: key.to_string(),
    expected,
    value,
  }
}

fn expect_bool(key: &str, value: Value) -> Result<bool> {
  value
    .as_bool()
    .ok_or_else(|| invalid(key, "a boolean", value.clone()))
}

fn expect_string(key: &str, value: Value) -> Result<String> {
  match value {
    Value::String(s) => Ok(s),
    other => Err(invalid(key, "a string", other)),
  }
}
