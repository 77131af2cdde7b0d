use ropey::RopeSlice;

/// This is a single point in a text buffer.
/// 0-indexed as all things should be.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Position {
  pub row: usize,
  pub col: usize,
}

impl Position {
  pub fn new(row: usize, col: usize) -> Self {
    Self { row, col }
  }

  pub const fn zero() -> Self {
    Self { row: 0, col: 0 }
  }
}

impl From<(usize, usize)> for Position {
  fn from(value: (usize, usize)) -> Self {
    Position::new(value.0, value.1)
  }
}

/// Converts a character index into a `Position`.
///
/// Columns count `char`s from the start of the line. Offsets past the end
/// of the text are clamped.
pub fn coords_at_pos(text: RopeSlice, pos: usize) -> Position {
  let pos = pos.min(text.len_chars());
  let row = text.char_to_line(pos);
  Position::new(row, pos - text.line_to_char(row))
}

/// Convert a `(row, column)` to a character index.
///
/// If `row` exceeds the number of lines, the last line is used.
/// If `col` exceeds the length of the line, the line end (before its
/// terminator) is used.
pub fn char_idx_at_coords(text: RopeSlice, coords: Position) -> usize {
  let row = coords.row.min(text.len_lines().saturating_sub(1));
  let line_start = text.line_to_char(row);
  let line_end = line_content_end(text, row);
  (line_start + coords.col).min(line_end)
}

/// Char index just past the last non-terminator char of `row`.
pub fn line_content_end(text: RopeSlice, row: usize) -> usize {
  if row + 1 < text.len_lines() {
    text.line_to_char(row + 1) - 1
  } else {
    text.len_chars()
  }
}
