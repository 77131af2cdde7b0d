//! A buffer together with its selection, settings, history and viewport.
//!
//! Commands operate on a [`View`]. Every buffer mutation goes through
//! [`View::insert`], [`View::erase`] or [`View::replace`], which record the
//! change in the undo history and map the selection across it, so regions
//! that have not been processed yet keep pointing at the same text.
//!
//! [`View::edit`] scopes a group of mutations into one undo step. Scopes
//! nest: a command run from inside another command joins the outer group.
//!
//! ```ignore
//! let mut view = View::new("hello world");
//! view.set_selection(RegionSet::single(Region::point(5)));
//! view.edit(|view| {
//!   view.insert(5, ",");
//! });
//! assert_eq!(view.text().to_string(), "hello, world");
//! assert_eq!(view.selection().regions(), &[Region::point(6)]);
//! ```

use std::borrow::Cow;

use ropey::{
  Rope,
  RopeSlice,
};
use the_core::chars::char_is_word;

use crate::{
  Tendril,
  classify::{
    self,
    CharClass,
  },
  history::{
    Edit,
    History,
    HistoryJump,
  },
  movement::Direction,
  position::{
    Position,
    char_idx_at_coords,
    coords_at_pos,
    line_content_end,
  },
  region::{
    Region,
    RegionSet,
  },
  search::{
    self,
    FindFlags,
    find_nth_next,
    find_nth_prev,
  },
  settings::Settings,
};

/// Rows assumed visible when the host never reported a size.
pub const DEFAULT_VIEWPORT_HEIGHT: usize = 24;

/// The rows of the buffer currently visible to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
  pub top_row: usize,
  pub height:  usize,
}

impl Default for Viewport {
  fn default() -> Self {
    Self {
      top_row: 0,
      height:  DEFAULT_VIEWPORT_HEIGHT,
    }
  }
}

impl Viewport {
  pub fn new(top_row: usize, height: usize) -> Self {
    Self {
      top_row,
      height: height.max(1),
    }
  }

  /// Last visible row.
  pub fn bottom_row(&self) -> usize {
    self.top_row + self.height - 1
  }

  /// Scrolls just enough for `row` to become visible.
  pub fn show_row(&mut self, row: usize) {
    if row < self.top_row {
      self.top_row = row;
    } else if row > self.bottom_row() {
      self.top_row = row + 1 - self.height;
    }
  }
}

#[derive(Debug)]
pub struct View {
  text:       Rope,
  selection:  RegionSet,
  settings:   Settings,
  history:    History,
  viewport:   Viewport,
  edit_depth: usize,
}

impl View {
  pub fn new(text: &str) -> Self {
    Self::with_settings(text, Settings::default())
  }

  pub fn with_settings(text: &str, settings: Settings) -> Self {
    Self {
      text: Rope::from_str(text),
      selection: RegionSet::single(Region::point(0)),
      settings,
      history: History::new(),
      viewport: Viewport::default(),
      edit_depth: 0,
    }
  }

  #[inline]
  pub fn text(&self) -> RopeSlice<'_> {
    self.text.slice(..)
  }

  #[inline]
  pub fn size(&self) -> usize {
    self.text.len_chars()
  }

  pub fn selection(&self) -> &RegionSet {
    &self.selection
  }

  pub fn selection_mut(&mut self) -> &mut RegionSet {
    &mut self.selection
  }

  /// Replaces the selection, clamping every region into the buffer.
  pub fn set_selection(&mut self, selection: RegionSet) {
    let size = self.size();
    self.selection = selection.iter().map(|r| r.clamp(size)).collect();
  }

  pub fn settings(&self) -> &Settings {
    &self.settings
  }

  pub fn settings_mut(&mut self) -> &mut Settings {
    &mut self.settings
  }

  pub fn history(&self) -> &History {
    &self.history
  }

  pub fn history_mut(&mut self) -> &mut History {
    &mut self.history
  }

  pub fn viewport(&self) -> Viewport {
    self.viewport
  }

  pub fn set_viewport(&mut self, viewport: Viewport) {
    self.viewport = viewport;
  }

  // Edit scopes.
  //

  /// Runs `f` inside one undo group. The group closes when `f` returns, on
  /// both the success and the error path.
  pub fn edit<T>(&mut self, f: impl FnOnce(&mut View) -> T) -> T {
    if self.edit_depth == 0 {
      self.history.begin(&self.selection);
    }
    self.edit_depth += 1;

    let result = f(self);

    self.edit_depth -= 1;
    if self.edit_depth == 0 && self.history.commit(&self.selection) {
      tracing::trace!(position = self.history.position(), "committed undo group");
    }
    result
  }

  pub fn in_edit(&self) -> bool {
    self.edit_depth > 0
  }

  // Buffer mutation.
  //

  /// Inserts `text` at `offset` and returns the number of chars inserted.
  pub fn insert(&mut self, offset: usize, text: &str) -> usize {
    let offset = offset.min(self.size());
    self.splice(offset, offset, text);
    text.chars().count()
  }

  pub fn erase(&mut self, region: Region) {
    let region = region.clamp(self.size());
    if !region.is_empty() {
      self.splice(region.from(), region.to(), "");
    }
  }

  /// Replaces the text of `region`. Cursors at the region end up after the
  /// new text.
  pub fn replace(&mut self, region: Region, text: &str) {
    let region = region.clamp(self.size());
    if region.is_empty() && text.is_empty() {
      return;
    }
    self.splice(region.from(), region.to(), text);
  }

  fn splice(&mut self, from: usize, to: usize, text: &str) {
    let erased = {
      let slice: Cow<str> = self.text.slice(from..to).into();
      Tendril::from(slice.as_ref())
    };
    let edit = Edit {
      offset: from,
      erased,
      inserted: Tendril::from(text),
    };

    self.edit(|view| {
      view.apply(&edit);
      view.history.record(edit);
    });
  }

  /// Applies an edit to the text and the selection without recording it.
  fn apply(&mut self, edit: &Edit) {
    let erased = edit.erased.chars().count();
    let inserted = edit.inserted.chars().count();
    let end = (edit.offset + erased).min(self.size());

    self.text.remove(edit.offset..end);
    self.text.insert(edit.offset, &edit.inserted);
    self.selection.adjust(edit.offset, end - edit.offset, inserted);
  }

  fn apply_jump(&mut self, jump: HistoryJump) -> bool {
    if self.history.apply_jump(&jump).is_err() {
      return false;
    }
    for edit in &jump.edits {
      self.apply(edit);
    }
    self.set_selection(jump.selection);
    true
  }

  /// Reverts the last undo group. Returns whether anything changed.
  pub fn undo(&mut self) -> bool {
    match self.history.undo() {
      Some(jump) => self.apply_jump(jump),
      None => false,
    }
  }

  /// Re-applies the last undone group. Returns whether anything changed.
  pub fn redo(&mut self) -> bool {
    match self.history.redo() {
      Some(jump) => self.apply_jump(jump),
      None => false,
    }
  }

  // Queries.
  //

  pub fn substr(&self, region: Region) -> String {
    let region = region.clamp(self.size());
    self.text.slice(region.from()..region.to()).to_string()
  }

  pub fn char_at(&self, offset: usize) -> Option<char> {
    (offset < self.size()).then(|| self.text.char(offset))
  }

  pub fn row_col(&self, offset: usize) -> Position {
    coords_at_pos(self.text(), offset)
  }

  pub fn text_point(&self, row: usize, col: usize) -> usize {
    char_idx_at_coords(self.text(), Position::new(row, col))
  }

  /// Number of rows, counting the empty row after a trailing newline.
  pub fn rows(&self) -> usize {
    self.text.len_lines()
  }

  /// The line containing `offset`, without its terminator.
  pub fn line(&self, offset: usize) -> Region {
    self.line_of_row(self.row_col(offset).row)
  }

  pub fn line_of_row(&self, row: usize) -> Region {
    let row = row.min(self.rows().saturating_sub(1));
    Region::new(
      self.text.line_to_char(row),
      line_content_end(self.text(), row),
    )
  }

  /// The line containing `offset`, including its terminator.
  pub fn full_line(&self, offset: usize) -> Region {
    let row = self.row_col(offset).row;
    let end = if row + 1 < self.rows() {
      self.text.line_to_char(row + 1)
    } else {
      self.size()
    };
    Region::new(self.text.line_to_char(row), end)
  }

  /// Every line `region` touches, without terminators.
  pub fn lines(&self, region: Region) -> Vec<Region> {
    let first = self.row_col(region.from()).row;
    let last = self.row_col(region.to()).row;
    (first..=last).map(|row| self.line_of_row(row)).collect()
  }

  /// The word around `offset`, or an empty region there when `offset` does
  /// not touch a word.
  pub fn word(&self, offset: usize) -> Region {
    let text = self.text();
    let offset = offset.min(self.size());
    let seps = self.settings.word_separators.as_str();
    let not_word = |ch: char| !char_is_word(ch, seps);

    let from = find_nth_prev(text, not_word, offset, 1).map_or(0, |idx| idx + 1);
    let to = find_nth_next(text, not_word, offset, 1).unwrap_or(self.size());
    Region::new(from, to)
  }

  pub fn classify(&self, offset: usize) -> CharClass {
    classify::classify(self.text(), offset, &self.settings.word_separators)
  }

  /// [`classify::find_by_class`] using the view's separators, unless
  /// `separators` overrides them for this call only.
  pub fn find_by_class(
    &self,
    point: usize,
    direction: Direction,
    mask: CharClass,
    separators: Option<&str>,
  ) -> usize {
    let separators = separators.unwrap_or(&self.settings.word_separators);
    classify::find_by_class(self.text(), point, direction, mask, separators)
  }

  pub fn find(
    &self,
    pattern: &str,
    start: usize,
    flags: FindFlags,
  ) -> search::Result<Option<Region>> {
    search::find(self.text(), pattern, start, flags)
  }

  // Viewport.
  //

  /// Scrolls the viewport so `offset` is visible.
  pub fn show(&mut self, offset: usize) {
    let row = self.row_col(offset).row;
    self.viewport.show_row(row);
  }

  /// Scrolls by `amount` rows; positive amounts reveal rows above.
  pub fn scroll_lines(&mut self, amount: isize) {
    let last_row = self.rows().saturating_sub(1);
    let target = if amount >= 0 {
      self.viewport.top_row.saturating_sub(amount as usize)
    } else {
      (self.viewport.bottom_row() + amount.unsigned_abs()).min(last_row)
    };
    self.viewport.show_row(target);
  }
}
