//! Searching buffer text.
//!
//! Two kinds of search live here:
//!
//! - character scans ([`find_nth_next`], [`find_nth_prev`]) that walk a rope
//!   slice one `char` at a time looking for a char or a predicate match;
//! - pattern search ([`find`]) used by the find/replace commands, backed by
//!   the `regex` crate, with [`FindFlags`] selecting literal and
//!   case-insensitive matching.
//!
//! All positions are character indices, never byte indices.
//!
//! ```ignore
//! use ropey::Rope;
//! use the_lib::search::{find, find_nth_prev, FindFlags};
//!
//! let text = Rope::from("Hello World!");
//! let slice = text.slice(..);
//!
//! assert_eq!(find_nth_prev(slice, 'o', 12, 1), Some(7));
//!
//! let found = find(slice, "WORLD", 0, FindFlags::IGNORE_CASE | FindFlags::LITERAL)?;
//! assert_eq!(found.map(|r| (r.from(), r.to())), Some((6, 11)));
//! ```

use bitflags::bitflags;
use regex::RegexBuilder;
use ropey::RopeSlice;
use thiserror::Error;

use crate::region::Region;

pub type Result<T> = std::result::Result<T, SearchError>;

#[derive(Debug, Error)]
pub enum SearchError {
  #[error("invalid search pattern: {0}")]
  InvalidPattern(#[from] regex::Error),
}

/// Trait for matching characters during search operations.
pub trait CharMatcher {
  fn char_match(&mut self, ch: char) -> bool;
}

impl CharMatcher for char {
  fn char_match(&mut self, ch: char) -> bool {
    *self == ch
  }
}

impl<F: FnMut(char) -> bool> CharMatcher for F {
  fn char_match(&mut self, ch: char) -> bool {
    (*self)(ch)
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchDirection {
  Next,
  Prev,
}

/// Find the nth match in the given direction starting from `pos`.
///
/// Forward scans consider the char at `pos` first, backward scans the char
/// before `pos`. `n` is 1-based; `n == 0` returns `None`.
pub fn find_nth<M: CharMatcher>(
  text: RopeSlice,
  mut char_matcher: M,
  mut pos: usize,
  n: usize,
  direction: SearchDirection,
) -> Option<usize> {
  if n == 0 || pos > text.len_chars() {
    return None;
  }

  let mut chars = text.chars_at(pos);
  for _ in 0..n {
    loop {
      let ch = match direction {
        SearchDirection::Next => {
          let ch = chars.next()?;
          pos += 1;
          ch
        },
        SearchDirection::Prev => {
          let ch = chars.prev()?;
          pos -= 1;
          ch
        },
      };
      if char_matcher.char_match(ch) {
        break;
      }
    }
  }

  match direction {
    SearchDirection::Next => Some(pos - 1),
    SearchDirection::Prev => Some(pos),
  }
}

/// Find the nth match forward from `pos`, including the character at `pos`.
pub fn find_nth_next<M: CharMatcher>(
  text: RopeSlice,
  char_matcher: M,
  pos: usize,
  n: usize,
) -> Option<usize> {
  find_nth(text, char_matcher, pos, n, SearchDirection::Next)
}

/// Find the nth match backward from `pos`, starting before `pos`.
pub fn find_nth_prev<M: CharMatcher>(
  text: RopeSlice,
  char_matcher: M,
  pos: usize,
  n: usize,
) -> Option<usize> {
  find_nth(text, char_matcher, pos, n, SearchDirection::Prev)
}

bitflags! {
  #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
  pub struct FindFlags: u8 {
    /// Match letters regardless of case.
    const IGNORE_CASE = 1 << 0;
    /// Treat the pattern as plain text instead of a regular expression.
    const LITERAL     = 1 << 1;
  }
}

/// Finds the first match of `pattern` starting at or after char `start`.
///
/// An empty pattern never matches.
pub fn find(
  text: RopeSlice,
  pattern: &str,
  start: usize,
  flags: FindFlags,
) -> Result<Option<Region>> {
  if pattern.is_empty() || start > text.len_chars() {
    return Ok(None);
  }

  let pattern = if flags.contains(FindFlags::LITERAL) {
    regex::escape(pattern)
  } else {
    pattern.to_owned()
  };
  let regex = RegexBuilder::new(&pattern)
    .case_insensitive(flags.contains(FindFlags::IGNORE_CASE))
    .multi_line(true)
    .build()?;

  let haystack = text.to_string();
  let found = regex
    .find_at(&haystack, text.char_to_byte(start))
    .filter(|m| !m.is_empty())
    .map(|m| Region::new(text.byte_to_char(m.start()), text.byte_to_char(m.end())));

  Ok(found)
}
