//! Undo, redo and gluing of undo groups.
//!
//! Gluing folds every group recorded since a mark into one, so a burst of
//! commands (typing a snippet, a macro) undoes in a single step.

use crate::{
  command::{
    Args,
    CommandError,
    Context,
    Result,
  },
  view::View,
};

pub fn undo(_ctx: &mut Context, view: &mut View, _args: &Args) -> Result<()> {
  if !view.undo() {
    tracing::debug!("nothing to undo");
  }
  Ok(())
}

pub fn redo(_ctx: &mut Context, view: &mut View, _args: &Args) -> Result<()> {
  if !view.redo() {
    tracing::debug!("nothing to redo");
  }
  Ok(())
}

pub fn mark_undo_groups_for_gluing(
  _ctx: &mut Context,
  view: &mut View,
  _args: &Args,
) -> Result<()> {
  view.history_mut().set_mark();
  Ok(())
}

/// Like [`mark_undo_groups_for_gluing`], but an existing mark wins.
pub fn maybe_mark_undo_groups_for_gluing(
  _ctx: &mut Context,
  view: &mut View,
  _args: &Args,
) -> Result<()> {
  let history = view.history_mut();
  if history.mark().is_none() {
    history.set_mark();
  }
  Ok(())
}

pub fn unmark_undo_groups_for_gluing(
  _ctx: &mut Context,
  view: &mut View,
  _args: &Args,
) -> Result<()> {
  view.history_mut().clear_mark();
  Ok(())
}

/// Folds the groups recorded since the mark into one. The mark stays, so a
/// later glue folds from the same place again.
pub fn glue_marked_undo_groups(
  _ctx: &mut Context,
  view: &mut View,
  _args: &Args,
) -> Result<()> {
  let history = view.history_mut();
  let mark = history.mark().ok_or(CommandError::NoMark)?;
  if mark > history.position() {
    tracing::debug!(mark, position = history.position(), "glue mark ahead of history");
    return Ok(());
  }
  history.glue_from(mark)?;
  Ok(())
}
