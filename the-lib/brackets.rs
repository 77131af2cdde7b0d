//! Matching of `()`, `[]` and `{}` pairs.
//!
//! [`match_bracket`] decides from the chars around a point which way to
//! scan:
//!
//! 1. an opening bracket right after the point: forward, landing after its
//!    closing pair;
//! 2. a closing bracket right before the point: backward, landing before its
//!    opening pair;
//! 3. a closing bracket right after the point: backward from one char
//!    earlier, landing after the opening pair;
//! 4. otherwise the nearest opening bracket before the point picks the
//!    bracket kind and the scan goes forward from the point, landing before
//!    the closing pair.
//!
//! Scans count nesting of the same bracket kind only. When the count never
//! drops to zero there is no match.

use ropey::RopeSlice;

use crate::search::find_nth_prev;

const PAIRS: [(char, char); 3] = [('(', ')'), ('[', ']'), ('{', '}')];

#[inline]
pub fn is_open_bracket(ch: char) -> bool {
  PAIRS.iter().any(|&(open, _)| open == ch)
}

#[inline]
pub fn is_close_bracket(ch: char) -> bool {
  PAIRS.iter().any(|&(_, close)| close == ch)
}

/// The other half of a bracket pair.
pub fn get_pair(ch: char) -> Option<char> {
  PAIRS.iter().find_map(|&(open, close)| {
    if open == ch {
      Some(close)
    } else if close == ch {
      Some(open)
    } else {
      None
    }
  })
}

/// Target offset for "move to brackets" from `point`, if there is one.
pub fn match_bracket(text: RopeSlice, point: usize) -> Option<usize> {
  let len = text.len_chars();
  let point = point.min(len);
  let next = (point < len).then(|| text.char(point));
  let prev = (point > 0).then(|| text.char(point - 1));

  if let Some(open) = next.filter(|&ch| is_open_bracket(ch)) {
    scan_forward(text, point + 1, open).map(|close| close + 1)
  } else if let Some(close) = prev.filter(|&ch| is_close_bracket(ch)) {
    scan_backward(text, point - 1, close)
  } else if let Some(close) = next.filter(|&ch| is_close_bracket(ch)) {
    // The char right before the point is skipped here.
    let end = point.checked_sub(1)?;
    scan_backward(text, end, close).map(|open| open + 1)
  } else {
    let open_at = find_nth_prev(text, is_open_bracket, point, 1)?;
    scan_forward(text, point, text.char(open_at))
  }
}

/// Index of the char closing `open`, scanning from `start` onward.
fn scan_forward(text: RopeSlice, start: usize, open: char) -> Option<usize> {
  let close = get_pair(open)?;
  let mut depth = 1usize;

  for (i, ch) in text.chars_at(start).enumerate() {
    if ch == open {
      depth += 1;
    } else if ch == close {
      depth -= 1;
      if depth == 0 {
        return Some(start + i);
      }
    }
  }

  None
}

/// Index of the char opening `close`, scanning the chars before `end`.
fn scan_backward(text: RopeSlice, end: usize, close: char) -> Option<usize> {
  let open = get_pair(close)?;
  let mut depth = 1usize;
  let mut pos = end;
  let mut chars = text.chars_at(end);

  while let Some(ch) = chars.prev() {
    pos -= 1;
    if ch == close {
      depth += 1;
    } else if ch == open {
      depth -= 1;
      if depth == 0 {
        return Some(pos);
      }
    }
  }

  None
}
