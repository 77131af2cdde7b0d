//! Boundary classification of buffer offsets.
//!
//! An offset sits between two characters. [`classify`] looks at the char
//! before it and the char at it and reports which boundaries the offset is
//! on: word edges, punctuation edges, sub-word edges (`camelCase` humps and
//! `snake_case` underscores) and line edges. Which characters count as
//! punctuation is decided by a separator set, usually the view's
//! `word_separators` setting.
//!
//! [`find_by_class`] walks from an offset until it reaches an offset whose
//! classification intersects a mask. Word and stop motions are built on it.

use bitflags::bitflags;
use ropey::RopeSlice;
use the_core::chars::{
  char_is_blank,
  char_is_separator,
  char_is_word,
};

use crate::movement::Direction;

bitflags! {
  #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
  pub struct CharClass: u16 {
    const WORD_START     = 1 << 0;
    const WORD_END       = 1 << 1;
    const PUNCT_START    = 1 << 2;
    const PUNCT_END      = 1 << 3;
    const SUB_WORD_START = 1 << 4;
    const SUB_WORD_END   = 1 << 5;
    const LINE_START     = 1 << 6;
    const LINE_END       = 1 << 7;
    const EMPTY_LINE     = 1 << 8;
  }
}

/// Classifies the boundary at `point` against `separators`.
pub fn classify(text: RopeSlice, point: usize, separators: &str) -> CharClass {
  let len = text.len_chars();
  if len == 0 {
    return CharClass::LINE_START | CharClass::LINE_END | CharClass::EMPTY_LINE;
  }

  let point = point.min(len);
  let a = (point > 0).then(|| text.char(point - 1));
  let b = (point < len).then(|| text.char(point));

  let is_sep = |c: Option<char>| c.is_some_and(|c| char_is_separator(c, separators));
  let is_word = |c: Option<char>| c.is_some_and(|c| char_is_word(c, separators));
  let is_upper = |c: Option<char>| c.is_some_and(char::is_uppercase);

  // Inside a run of the same separator there is nothing to report.
  if a.is_some() && a == b && is_sep(a) {
    return CharClass::empty();
  }

  let mut class = CharClass::empty();

  if is_upper(b) && !is_upper(a) {
    class |= CharClass::SUB_WORD_START | CharClass::SUB_WORD_END;
  }
  if a == Some('_') && b != Some('_') {
    class |= CharClass::SUB_WORD_START;
  }
  if b == Some('_') && a != Some('_') {
    class |= CharClass::SUB_WORD_END;
  }

  if !separators.is_empty() {
    let sep_or_edge = |c: Option<char>| c.is_none() || is_sep(c);
    if sep_or_edge(b) && !sep_or_edge(a) {
      class |= CharClass::PUNCT_START;
    }
    if sep_or_edge(a) && !sep_or_edge(b) {
      class |= CharClass::PUNCT_END;
    }
  }

  let is_gap =
    |c: Option<char>| c.is_none_or(|c| char_is_blank(c) || char_is_separator(c, separators));
  if is_word(b) && is_gap(a) {
    class |= CharClass::WORD_START;
  }
  if is_word(a) && is_gap(b) {
    class |= CharClass::WORD_END;
  }

  if a.is_none_or(|c| c == '\n') {
    class |= CharClass::LINE_START;
  }
  if b.is_none_or(|c| c == '\n') {
    class |= CharClass::LINE_END;
  }
  if class.contains(CharClass::LINE_START | CharClass::LINE_END) {
    class |= CharClass::EMPTY_LINE;
  }

  class
}

/// Returns the first offset past `point` in `direction` whose class
/// intersects `mask`, or the buffer edge if the walk reaches it first.
pub fn find_by_class(
  text: RopeSlice,
  point: usize,
  direction: Direction,
  mask: CharClass,
  separators: &str,
) -> usize {
  let len = text.len_chars();
  let mut pos = point.min(len);

  loop {
    match direction {
      Direction::Forward => {
        pos += 1;
        if pos >= len {
          return len;
        }
      },
      Direction::Backward => {
        if pos <= 1 {
          return 0;
        }
        pos -= 1;
      },
    }

    if classify(text, pos, separators).intersects(mask) {
      return pos;
    }
  }
}

#[cfg(test)]
mod test {
  use ropey::Rope;
  use the_core::chars::DEFAULT_WORD_SEPARATORS;

  use super::*;

  const SEPS: &str = DEFAULT_WORD_SEPARATORS;

  fn class_at(text: &str, point: usize) -> CharClass {
    classify(Rope::from(text).slice(..), point, SEPS)
  }

  #[test]
  fn empty_buffer_is_an_empty_line() {
    assert_eq!(
      class_at("", 0),
      CharClass::LINE_START | CharClass::LINE_END | CharClass::EMPTY_LINE
    );
  }

  #[test]
  fn word_boundaries() {
    let text = "Hello World!";
    assert!(class_at(text, 0).contains(CharClass::WORD_START | CharClass::LINE_START));
    assert!(class_at(text, 5).contains(CharClass::WORD_END));
    assert!(class_at(text, 6).contains(CharClass::WORD_START));
    assert!(class_at(text, 11).contains(CharClass::WORD_END | CharClass::PUNCT_START));
    assert_eq!(class_at(text, 12), CharClass::LINE_END);
    assert_eq!(class_at(text, 2), CharClass::empty());
  }

  #[test]
  fn sub_word_boundaries() {
    assert!(class_at("fooBar", 3).contains(CharClass::SUB_WORD_START | CharClass::SUB_WORD_END));
    assert!(class_at("foo_bar", 3).contains(CharClass::SUB_WORD_END));
    assert!(class_at("foo_bar", 4).contains(CharClass::SUB_WORD_START));
    assert_eq!(class_at("foo__bar", 4) & CharClass::SUB_WORD_START, CharClass::empty());
  }

  #[test]
  fn separator_runs_have_no_class() {
    assert_eq!(class_at("a((b", 2), CharClass::empty());
  }

  #[test]
  fn empty_line_between_newlines() {
    let text = "a\n\nb";
    assert!(class_at(text, 2).contains(CharClass::EMPTY_LINE));
    assert!(!class_at(text, 1).contains(CharClass::EMPTY_LINE));
  }

  #[test]
  fn empty_separator_set_disables_punctuation() {
    let rope = Rope::from("a.b");
    let class = classify(rope.slice(..), 1, "");
    assert_eq!(class & (CharClass::PUNCT_START | CharClass::PUNCT_END), CharClass::empty());
    assert_eq!(class & (CharClass::WORD_START | CharClass::WORD_END), CharClass::empty());
  }

  #[test]
  fn find_by_class_walks_to_stops() {
    let rope = Rope::from("Hello World!\nTest123123\nAbrakadabra\n");
    let text = rope.slice(..);
    let words = CharClass::WORD_START | CharClass::LINE_END | CharClass::LINE_START;

    assert_eq!(find_by_class(text, 1, Direction::Forward, words, SEPS), 6);
    assert_eq!(find_by_class(text, 6, Direction::Forward, words, SEPS), 12);
    assert_eq!(find_by_class(text, 13, Direction::Backward, words, SEPS), 12);
    assert_eq!(find_by_class(text, 5, Direction::Backward, words, SEPS), 0);
    assert_eq!(find_by_class(text, 35, Direction::Forward, words, SEPS), 36);
    assert_eq!(find_by_class(text, 100, Direction::Forward, words, SEPS), 36);
  }

  #[test]
  fn custom_separators_change_stops() {
    let rope = Rope::from("Hello WorLd!\nTest12312{\n\n3Stop (testing) tada}\n Abr_akad[abra");
    let text = rope.slice(..);

    assert_eq!(
      find_by_class(text, 45, Direction::Forward, CharClass::WORD_END, SEPS),
      56
    );
    assert_eq!(
      find_by_class(text, 45, Direction::Forward, CharClass::WORD_END, ""),
      46
    );
    assert_eq!(
      find_by_class(text, 0, Direction::Forward, CharClass::WORD_START, "l"),
      4
    );
    assert_eq!(
      find_by_class(text, 8, Direction::Forward, CharClass::EMPTY_LINE, SEPS),
      24
    );
    assert_eq!(
      find_by_class(text, 7, Direction::Forward, CharClass::PUNCT_END, SEPS),
      12
    );
  }
}
