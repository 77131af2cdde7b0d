//! Undo history of a view.
//!
//! The history is a linear list of groups. A group holds every buffer edit
//! one command made, together with the selection before and after it.
//! Committing a group while some groups are undone drops the redo tail.
//!
//! Like the rest of the lib, navigation is two-phase: [`History::undo`] and
//! [`History::redo`] return a [`HistoryJump`] describing the edits to replay.
//! The caller applies them to its buffer and only then calls
//! [`History::apply_jump`], so history and buffer cannot diverge when
//! applying fails half way.
//!
//! Groups can be glued: [`History::set_mark`] remembers the current position
//! and [`History::glue_from`] later folds everything committed since then
//! into one group, so a burst of commands undoes in one step.

use thiserror::Error;

use crate::{
  Tendril,
  region::RegionSet,
};

/// Result type for history operations.
pub type Result<T> = std::result::Result<T, HistoryError>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum HistoryError {
  #[error("revision index {index} is out of bounds (max: {max})")]
  RevisionOutOfBounds { index: usize, max: usize },
  #[error("cannot navigate history while an edit group is open")]
  GroupOpen,
}

/// One buffer splice: `erased` was removed at `offset`, then `inserted` was
/// put there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edit {
  pub offset:   usize,
  pub erased:   Tendril,
  pub inserted: Tendril,
}

impl Edit {
  /// The edit that undoes this one.
  #[must_use]
  pub fn invert(&self) -> Self {
    Self {
      offset:   self.offset,
      erased:   self.inserted.clone(),
      inserted: self.erased.clone(),
    }
  }
}

#[derive(Debug, Clone)]
struct Group {
  edits:            Vec<Edit>,
  selection_before: RegionSet,
  selection_after:  RegionSet,
}

/// Edits to replay on the buffer and the selection to restore afterwards.
#[derive(Debug, Clone)]
pub struct HistoryJump {
  /// The edits to apply, in order.
  pub edits:     Vec<Edit>,
  pub selection: RegionSet,
  /// The history position after the jump.
  pub target:    usize,
}

#[derive(Debug, Default)]
pub struct History {
  groups:   Vec<Group>,
  /// Number of groups currently applied.
  position: usize,
  open:     Option<Group>,
  mark:     Option<usize>,
}

impl History {
  pub fn new() -> Self {
    Self::default()
  }

  #[inline]
  pub fn position(&self) -> usize {
    self.position
  }

  #[inline]
  pub fn len(&self) -> usize {
    self.groups.len()
  }

  #[inline]
  pub fn is_empty(&self) -> bool {
    self.groups.is_empty()
  }

  pub fn is_open(&self) -> bool {
    self.open.is_some()
  }

  /// Starts collecting edits into a new group.
  pub fn begin(&mut self, selection: &RegionSet) {
    if self.open.is_none() {
      self.open = Some(Group {
        edits:            Vec::new(),
        selection_before: selection.clone(),
        selection_after:  selection.clone(),
      });
    }
  }

  pub fn record(&mut self, edit: Edit) {
    if let Some(group) = self.open.as_mut() {
      group.edits.push(edit);
    }
  }

  /// Closes the open group. Groups without edits are dropped. Returns
  /// whether a group was committed.
  pub fn commit(&mut self, selection: &RegionSet) -> bool {
    let Some(mut group) = self.open.take() else {
      return false;
    };
    if group.edits.is_empty() {
      return false;
    }

    group.selection_after = selection.clone();
    self.groups.truncate(self.position);
    self.groups.push(group);
    self.position = self.groups.len();
    true
  }

  pub fn can_undo(&self) -> bool {
    self.position > 0
  }

  pub fn can_redo(&self) -> bool {
    self.position < self.groups.len()
  }

  pub fn undo(&self) -> Option<HistoryJump> {
    let group = self.groups.get(self.position.checked_sub(1)?)?;
    Some(HistoryJump {
      edits:     group.edits.iter().rev().map(Edit::invert).collect(),
      selection: group.selection_before.clone(),
      target:    self.position - 1,
    })
  }

  pub fn redo(&self) -> Option<HistoryJump> {
    let group = self.groups.get(self.position)?;
    Some(HistoryJump {
      edits:     group.edits.clone(),
      selection: group.selection_after.clone(),
      target:    self.position + 1,
    })
  }

  pub fn apply_jump(&mut self, jump: &HistoryJump) -> Result<()> {
    if self.open.is_some() {
      return Err(HistoryError::GroupOpen);
    }
    if jump.target > self.groups.len() {
      return Err(HistoryError::RevisionOutOfBounds {
        index: jump.target,
        max:   self.groups.len(),
      });
    }
    self.position = jump.target;
    Ok(())
  }

  pub fn mark(&self) -> Option<usize> {
    self.mark
  }

  pub fn set_mark(&mut self) {
    self.mark = Some(self.position);
  }

  pub fn clear_mark(&mut self) {
    self.mark = None;
  }

  /// Folds every group from `mark` up to the current position into one.
  /// The redo tail is dropped.
  pub fn glue_from(&mut self, mark: usize) -> Result<()> {
    if mark > self.position {
      return Err(HistoryError::RevisionOutOfBounds {
        index: mark,
        max:   self.position,
      });
    }
    if self.position - mark < 2 {
      return Ok(());
    }

    self.groups.truncate(self.position);
    let mut glued = self.groups.drain(mark..);
    let Some(mut group) = glued.next() else {
      return Ok(());
    };
    for next in glued {
      group.edits.extend(next.edits);
      group.selection_after = next.selection_after;
    }

    self.groups.push(group);
    self.position = self.groups.len();
    tracing::debug!(mark, position = self.position, "glued undo groups");
    Ok(())
  }
}
