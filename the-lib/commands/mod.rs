//! Built-in commands.
//!
//! Every command is a plain function registered under its name. Commands
//! that edit the buffer run inside one undo group; commands that only touch
//! history, settings or the viewport bypass undo.

mod clipboard;
mod find;
mod history;
mod indent;
mod insdel;
mod line;
mod motion;
mod select;
mod settings;
mod text;

pub use motion::{
  MoveBy,
  MoveTo,
};

use crate::{
  command::{
    ApplicationCommand,
    Args,
    CommandRegistry,
    Context,
    Result,
    TextCommand,
    UndoBehavior::{
      BypassesUndo,
      RequiresUndoGroup,
    },
  },
  view::View,
};

const TEXT_COMMANDS: &[TextCommand] = &[
  TextCommand::new("move", "Move every cursor by a unit", RequiresUndoGroup, motion::move_by),
  TextCommand::new("move_to", "Move every cursor to a place", RequiresUndoGroup, motion::move_to),
  TextCommand::new("scroll_lines", "Scroll the viewport", BypassesUndo, motion::scroll_lines),
  TextCommand::new("insert", "Insert text at every region", RequiresUndoGroup, insdel::insert),
  TextCommand::new(
    "left_delete",
    "Delete before each cursor",
    RequiresUndoGroup,
    insdel::left_delete,
  ),
  TextCommand::new(
    "right_delete",
    "Delete after each cursor",
    RequiresUndoGroup,
    insdel::right_delete,
  ),
  TextCommand::new(
    "delete_word",
    "Delete to the next word stop",
    RequiresUndoGroup,
    insdel::delete_word,
  ),
  TextCommand::new("copy", "Copy the selection", RequiresUndoGroup, clipboard::copy),
  TextCommand::new("cut", "Cut the selection", RequiresUndoGroup, clipboard::cut),
  TextCommand::new("paste", "Paste at every region", RequiresUndoGroup, clipboard::paste),
  TextCommand::new("join_lines", "Join lines", RequiresUndoGroup, line::join_lines),
  TextCommand::new(
    "swap_line_up",
    "Swap lines with the line above",
    RequiresUndoGroup,
    line::swap_line_up,
  ),
  TextCommand::new(
    "swap_line_down",
    "Swap lines with the line below",
    RequiresUndoGroup,
    line::swap_line_down,
  ),
  TextCommand::new(
    "select_lines",
    "Add a cursor on the next line",
    RequiresUndoGroup,
    line::select_lines,
  ),
  TextCommand::new(
    "split_selection_into_lines",
    "Split selections at line breaks",
    RequiresUndoGroup,
    line::split_selection_into_lines,
  ),
  TextCommand::new("indent", "Indent selected lines", RequiresUndoGroup, indent::indent),
  TextCommand::new("unindent", "Unindent selected lines", RequiresUndoGroup, indent::unindent),
  TextCommand::new(
    "toggle_comment",
    "Toggle line comments",
    RequiresUndoGroup,
    text::toggle_comment,
  ),
  TextCommand::new("title_case", "Title Case selections", RequiresUndoGroup, text::title_case),
  TextCommand::new("swap_case", "sWAP cASE selections", RequiresUndoGroup, text::swap_case),
  TextCommand::new("upper_case", "UPPERCASE selections", RequiresUndoGroup, text::upper_case),
  TextCommand::new("lower_case", "lowercase selections", RequiresUndoGroup, text::lower_case),
  TextCommand::new(
    "find_under_expand",
    "Select the word or next match",
    RequiresUndoGroup,
    find::find_under_expand,
  ),
  TextCommand::new("find_next", "Select the next match", RequiresUndoGroup, find::find_next),
  TextCommand::new("replace_next", "Replace the next match", RequiresUndoGroup, find::replace_next),
  TextCommand::new("find_all", "Select every match", RequiresUndoGroup, find::find_all),
  TextCommand::new("replace_all", "Replace every match", RequiresUndoGroup, find::replace_all),
  TextCommand::new(
    "single_selection",
    "Keep only the first region",
    RequiresUndoGroup,
    select::single_selection,
  ),
  TextCommand::new("select_all", "Select the whole buffer", RequiresUndoGroup, select::select_all),
  TextCommand::new("undo", "Undo the last group", BypassesUndo, history::undo),
  TextCommand::new("redo", "Redo the last undone group", BypassesUndo, history::redo),
  TextCommand::new(
    "mark_undo_groups_for_gluing",
    "Remember the history position",
    BypassesUndo,
    history::mark_undo_groups_for_gluing,
  ),
  TextCommand::new(
    "maybe_mark_undo_groups_for_gluing",
    "Remember the history position unless already marked",
    BypassesUndo,
    history::maybe_mark_undo_groups_for_gluing,
  ),
  TextCommand::new(
    "unmark_undo_groups_for_gluing",
    "Forget the history mark",
    BypassesUndo,
    history::unmark_undo_groups_for_gluing,
  ),
  TextCommand::new(
    "glue_marked_undo_groups",
    "Fold groups since the mark into one",
    BypassesUndo,
    history::glue_marked_undo_groups,
  ),
  TextCommand::new("set_setting", "Set a view setting", BypassesUndo, settings::set_setting),
  TextCommand::new(
    "toggle_setting",
    "Flip a boolean view setting",
    BypassesUndo,
    settings::toggle_setting,
  ),
  TextCommand::new("nop", "Do nothing", BypassesUndo, nop_text),
];

const APPLICATION_COMMANDS: &[ApplicationCommand] =
  &[ApplicationCommand::new("nop", "Do nothing", nop_application)];

pub(crate) fn register_builtin(registry: &mut CommandRegistry) {
  for command in TEXT_COMMANDS {
    registry.register_text(command.clone());
  }
  for command in APPLICATION_COMMANDS {
    registry.register_application(command.clone());
  }
}

fn nop_text(_ctx: &mut Context, _view: &mut View, _args: &Args) -> Result<()> {
  Ok(())
}

fn nop_application(_ctx: &mut Context, _args: &Args) -> Result<()> {
  Ok(())
}
