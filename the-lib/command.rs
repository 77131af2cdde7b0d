//! Command dispatch.
//!
//! Commands come in two kinds. Text commands act on one [`View`];
//! application commands only see the shared [`Context`]. Each kind has its
//! own table in the [`CommandRegistry`], keyed by name, so the same name can
//! exist in both (`nop` does).
//!
//! Arguments are named and dynamically typed. Typed getters on [`Args`]
//! validate them before a command touches the buffer, so a bad argument
//! fails the command without partial edits.
//!
//! A text command either runs inside an undo group ([`View::edit`]) or
//! bypasses undo entirely. Commands that change the history themselves
//! (`undo`, gluing) must bypass it.

use std::{
  collections::HashMap,
  fmt,
  str::FromStr,
  sync::Arc,
};

use serde::{
  Deserialize,
  Serialize,
};
use serde_json::{
  Map,
  Value,
};
use thiserror::Error;

use crate::{
  clipboard::{
    ClipboardError,
    ClipboardProvider,
    MemoryClipboard,
  },
  history::HistoryError,
  region::RegionError,
  search::SearchError,
  settings::SettingsError,
  view::View,
};

pub type Result<T> = std::result::Result<T, CommandError>;

#[derive(Debug, Error)]
pub enum CommandError {
  #[error("invalid value for argument '{name}': {value}")]
  InvalidArgument { name: String, value: String },
  #[error("missing required argument '{0}'")]
  MissingArgument(String),
  #[error("'{0}' not found")]
  NotFound(String),
  #[error("no undo mark in the current view")]
  NoMark,
  #[error("unknown command: {0}")]
  UnknownCommand(String),
  #[error(transparent)]
  Region(#[from] RegionError),
  #[error(transparent)]
  Clipboard(#[from] ClipboardError),
  #[error(transparent)]
  Settings(#[from] SettingsError),
  #[error(transparent)]
  History(#[from] HistoryError),
  #[error(transparent)]
  Search(#[from] SearchError),
}

impl CommandError {
  pub fn invalid(name: &str, value: impl fmt::Display) -> Self {
    Self::InvalidArgument {
      name:  name.to_string(),
      value: value.to_string(),
    }
  }
}

/// Named command arguments.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Args(Map<String, Value>);

impl Args {
  pub fn new() -> Self {
    Self::default()
  }

  /// Accepts a JSON object, or `null` for no arguments.
  pub fn from_value(value: Value) -> Result<Self> {
    match value {
      Value::Null => Ok(Self::new()),
      Value::Object(map) => Ok(Self(map)),
      other => Err(CommandError::invalid("args", other)),
    }
  }

  #[must_use]
  pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
    self.0.insert(key.to_string(), value.into());
    self
  }

  pub fn get(&self, key: &str) -> Option<&Value> {
    self.0.get(key)
  }

  pub fn required(&self, key: &str) -> Result<&Value> {
    self
      .get(key)
      .ok_or_else(|| CommandError::MissingArgument(key.to_string()))
  }

  pub fn bool_or(&self, key: &str, default: bool) -> Result<bool> {
    match self.get(key) {
      None | Some(Value::Null) => Ok(default),
      Some(Value::Bool(value)) => Ok(*value),
      Some(other) => Err(CommandError::invalid(key, other)),
    }
  }

  pub fn int_or(&self, key: &str, default: i64) -> Result<i64> {
    match self.get(key) {
      None | Some(Value::Null) => Ok(default),
      Some(value) => value.as_i64().ok_or_else(|| CommandError::invalid(key, value)),
    }
  }

  pub fn str(&self, key: &str) -> Result<Option<&str>> {
    match self.get(key) {
      None | Some(Value::Null) => Ok(None),
      Some(Value::String(value)) => Ok(Some(value)),
      Some(other) => Err(CommandError::invalid(key, other)),
    }
  }

  pub fn required_str(&self, key: &str) -> Result<&str> {
    self
      .str(key)?
      .ok_or_else(|| CommandError::MissingArgument(key.to_string()))
  }

  /// Parses a string argument into a closed set of values.
  pub fn parse<T>(&self, key: &str) -> Result<Option<T>>
  where
    T: FromStr<Err = CommandError>,
  {
    self.str(key)?.map(str::parse).transpose()
  }
}

impl From<Map<String, Value>> for Args {
  fn from(map: Map<String, Value>) -> Self {
    Self(map)
  }
}

/// State shared by every command run: the clipboard, the last search term
/// and the replacement text.
pub struct Context {
  pub clipboard:    Arc<dyn ClipboardProvider>,
  pub last_search:  Option<String>,
  pub replace_text: String,
}

impl Context {
  pub fn new(clipboard: Arc<dyn ClipboardProvider>) -> Self {
    Self {
      clipboard,
      last_search: None,
      replace_text: String::new(),
    }
  }
}

impl Default for Context {
  fn default() -> Self {
    Self::new(Arc::new(MemoryClipboard::new()))
  }
}

impl fmt::Debug for Context {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Context")
      .field("clipboard", &self.clipboard.name())
      .field("last_search", &self.last_search)
      .field("replace_text", &self.replace_text)
      .finish()
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UndoBehavior {
  RequiresUndoGroup,
  BypassesUndo,
}

pub type TextCommandFn = fn(&mut Context, &mut View, &Args) -> Result<()>;

pub type ApplicationCommandFn = fn(&mut Context, &Args) -> Result<()>;

#[derive(Debug, Clone)]
pub struct TextCommand {
  pub name: &'static str,
  pub doc:  &'static str,
  pub undo: UndoBehavior,
  pub fun:  TextCommandFn,
}

impl TextCommand {
  pub const fn new(
    name: &'static str,
    doc: &'static str,
    undo: UndoBehavior,
    fun: TextCommandFn,
  ) -> Self {
    Self {
      name,
      doc,
      undo,
      fun,
    }
  }

  pub fn execute(&self, ctx: &mut Context, view: &mut View, args: &Args) -> Result<()> {
    match self.undo {
      UndoBehavior::RequiresUndoGroup => view.edit(|view| (self.fun)(ctx, view, args)),
      UndoBehavior::BypassesUndo => (self.fun)(ctx, view, args),
    }
  }
}

#[derive(Debug, Clone)]
pub struct ApplicationCommand {
  pub name: &'static str,
  pub doc:  &'static str,
  pub fun:  ApplicationCommandFn,
}

impl ApplicationCommand {
  pub const fn new(name: &'static str, doc: &'static str, fun: ApplicationCommandFn) -> Self {
    Self { name, doc, fun }
  }

  pub fn execute(&self, ctx: &mut Context, args: &Args) -> Result<()> {
    (self.fun)(ctx, args)
  }
}

#[derive(Debug, Default)]
pub struct CommandRegistry {
  text:        HashMap<String, Arc<TextCommand>>,
  application: HashMap<String, Arc<ApplicationCommand>>,
}

impl CommandRegistry {
  /// A registry holding every built-in command.
  pub fn new() -> Self {
    let mut registry = Self::empty();
    crate::commands::register_builtin(&mut registry);
    registry
  }

  pub fn empty() -> Self {
    Self::default()
  }

  pub fn register_text(&mut self, command: TextCommand) {
    self
      .text
      .insert(command.name.to_string(), Arc::new(command));
  }

  pub fn register_application(&mut self, command: ApplicationCommand) {
    self
      .application
      .insert(command.name.to_string(), Arc::new(command));
  }

  pub fn get_text(&self, name: &str) -> Option<&TextCommand> {
    self.text.get(name).map(|cmd| cmd.as_ref())
  }

  pub fn get_application(&self, name: &str) -> Option<&ApplicationCommand> {
    self.application.get(name).map(|cmd| cmd.as_ref())
  }

  pub fn run_text(
    &self,
    ctx: &mut Context,
    view: &mut View,
    name: &str,
    args: &Args,
  ) -> Result<()> {
    let Some(command) = self.get_text(name) else {
      tracing::warn!(name, "unknown text command");
      return Err(CommandError::UnknownCommand(name.to_string()));
    };

    tracing::debug!(name, regions = view.selection().len(), "running text command");
    let result = command.execute(ctx, view, args);
    if let Err(err) = &result {
      tracing::warn!(name, %err, "text command failed");
    }
    result
  }

  pub fn run_application(&self, ctx: &mut Context, name: &str, args: &Args) -> Result<()> {
    let Some(command) = self.get_application(name) else {
      tracing::warn!(name, "unknown application command");
      return Err(CommandError::UnknownCommand(name.to_string()));
    };

    tracing::debug!(name, "running application command");
    let result = command.execute(ctx, args);
    if let Err(err) = &result {
      tracing::warn!(name, %err, "application command failed");
    }
    result
  }

  /// Names of every registered command, sorted, without duplicates.
  pub fn command_names(&self) -> Vec<&str> {
    let mut names: Vec<_> = self
      .text
      .values()
      .map(|cmd| cmd.name)
      .chain(self.application.values().map(|cmd| cmd.name))
      .collect();
    names.sort();
    names.dedup();
    names
  }
}
