use std::collections::BTreeSet;

use crate::{
  command::{
    Args,
    Context,
    Result,
  },
  region::Region,
  view::View,
};

/// Every row touched by the selection, each once.
fn selected_rows(view: &View) -> BTreeSet<usize> {
  view
    .selection()
    .iter()
    .flat_map(|region| {
      let first = view.row_col(region.from()).row;
      let last = view.row_col(region.to()).row;
      first..=last
    })
    .collect()
}

pub fn indent(_ctx: &mut Context, view: &mut View, _args: &Args) -> Result<()> {
  let settings = view.settings();
  let unit = if settings.translate_tabs_to_spaces {
    " ".repeat(settings.tab_size)
  } else {
    "\t".to_string()
  };

  // Bottom rows first so row starts above stay put.
  for row in selected_rows(view).into_iter().rev() {
    let start = view.line_of_row(row).from();
    view.insert(start, &unit);
  }
  Ok(())
}

pub fn unindent(_ctx: &mut Context, view: &mut View, _args: &Args) -> Result<()> {
  let tab_size = view.settings().tab_size;

  for row in selected_rows(view).into_iter().rev() {
    let start = view.line_of_row(row).from();
    let mut head = view.text().chars_at(start).take(tab_size);
    let width = match head.next() {
      Some('\t') => 1,
      Some(' ') => 1 + head.take_while(|&ch| ch == ' ').count(),
      _ => 0,
    };
    if width > 0 {
      view.erase(Region::new(start, start + width));
    }
  }
  Ok(())
}
