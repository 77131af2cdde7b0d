//! Tab-aware column translation for vertical motions.
//!
//! Moving a cursor up or down has to land on the same *visual* column even
//! when the source and destination lines expand a different number of tabs.
//! The raw column of the source point is widened by its tabs, clamped against
//! the expanded destination line and narrowed back by the tabs it crosses
//! there.

use ropey::RopeSlice;

use crate::position::{
  coords_at_pos,
  line_content_end,
};

/// Raw char column on `dest_row` that is visually aligned with `point`.
///
/// A partially covered tab on the destination rounds to the far side of the
/// tab once more than half of it is covered.
pub fn translate_column(text: RopeSlice, point: usize, dest_row: usize, tab_size: usize) -> usize {
  let tab_size = tab_size.max(1);
  let point = point.min(text.len_chars());
  let source_start = point - coords_at_pos(text, point).col;

  let from_tabs = text
    .slice(source_start..point)
    .chars()
    .filter(|&ch| ch == '\t')
    .count();
  let visual = (point - source_start) + from_tabs * (tab_size - 1);

  let dest_start = text.line_to_char(dest_row);
  let dest = text.slice(dest_start..line_content_end(text, dest_row));
  let dest_len = dest.len_chars();
  let dest_tabs = dest.chars().filter(|&ch| ch == '\t').count();
  let visual = visual.min(dest_len + dest_tabs * (tab_size - 1));

  // Tab cells covered by the first `visual` cells of the expanded line.
  let mut cells = 0;
  let mut to_tabs = 0;
  for ch in dest.chars() {
    if cells >= visual {
      break;
    }
    let width = if ch == '\t' { tab_size } else { 1 };
    let covered = width.min(visual - cells);
    if ch == '\t' {
      to_tabs += covered;
    }
    cells += covered;
  }

  let whole = to_tabs / tab_size;
  let rem = to_tabs % tab_size;
  let mut raw = visual - whole * (tab_size - 1) - rem;
  if rem > tab_size / 2 {
    raw += 1;
  }

  raw.min(dest_len)
}

/// Offset reached by moving `point` by `rows` lines, keeping its visual
/// column. Moving above the first line lands on 0, below the last line on
/// the end of the buffer.
pub fn move_vertically(text: RopeSlice, point: usize, rows: isize, tab_size: usize) -> usize {
  let len = text.len_chars();
  let point = point.min(len);
  let row = coords_at_pos(text, point).row as isize;
  let dest_row = row + rows;

  if dest_row < 0 {
    return 0;
  }
  if dest_row as usize >= text.len_lines() {
    return len;
  }

  let dest_row = dest_row as usize;
  text.line_to_char(dest_row) + translate_column(text, point, dest_row, tab_size)
}

#[cfg(test)]
mod test {
  use ropey::Rope;

  use super::*;

  #[test]
  fn vertical_moves_keep_the_column() {
    let rope = Rope::from("Hello World!\nTest123123\nAbrakadabra\n");
    let text = rope.slice(..);

    assert_eq!(move_vertically(text, 34, -1, 4), 23);
    assert_eq!(move_vertically(text, 23, -1, 4), 10);
    assert_eq!(move_vertically(text, 100, -1, 4), 24);
    assert_eq!(move_vertically(text, 12, 1, 4), 23);
    assert_eq!(move_vertically(text, 35, -1, 4), 23);
  }

  #[test]
  fn vertical_moves_stop_at_the_edges() {
    let rope = Rope::from("Hello World!\nTest123123\nAbrakadabra\n");
    let text = rope.slice(..);

    assert_eq!(move_vertically(text, 0, -1, 4), 0);
    assert_eq!(move_vertically(text, 5, -1, 4), 0);
    assert_eq!(move_vertically(text, 36, 1, 4), 36);
  }

  #[test]
  fn tabs_are_expanded_on_both_lines() {
    let rope = Rope::from("\ttype qmlfrontend struct {\n\t\tstatus_message string");
    let text = rope.slice(..);

    assert_eq!(move_vertically(text, 35, -1, 4), 11);
    assert_eq!(move_vertically(text, 11, 1, 4), 35);
  }

  #[test]
  fn partial_tabs_round_to_nearest_side() {
    // "abc" ends at visual column 3; the tab on the next line spans 0..4.
    let rope = Rope::from("abc\n\tx");
    let text = rope.slice(..);
    assert_eq!(translate_column(text, 3, 1, 4), 1);

    // Visual column 1 covers a quarter of the tab.
    assert_eq!(translate_column(text, 1, 1, 4), 0);
  }
}
