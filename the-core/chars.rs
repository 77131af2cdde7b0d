//! Character classification shared by motions and boundary detection.
//!
//! Unlike a fixed notion of "punctuation", the word/punctuation split here is
//! driven by a separator set that each view may configure.

/// Separator characters used when a view does not configure its own.
pub const DEFAULT_WORD_SEPARATORS: &str = "./\\()\"'-:,.;<>~!@#$%^&*|+=[]{}`~?";

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum CharCategory {
  Whitespace,
  Eol,
  Word,
  Punctuation,
}

pub fn categorize_char(ch: char, separators: &str) -> CharCategory {
  match ch {
    c if char_is_line_ending(c) => CharCategory::Eol,
    c if char_is_whitespace(c) => CharCategory::Whitespace,
    c if char_is_separator(c, separators) => CharCategory::Punctuation,
    _ => CharCategory::Word,
  }
}

#[inline]
pub fn char_is_line_ending(ch: char) -> bool {
  ch == '\n'
}

#[inline]
pub fn char_is_whitespace(ch: char) -> bool {
  match ch {
      '\u{0009}' | // Character Tabulation
      '\u{000B}' | // Line Tabulation
      '\u{000C}' | // Form Feed
      '\u{000D}' | // Carriage Return, only a line break as part of CRLF
      '\u{0020}' | // Space
      '\u{0085}' | // Next Line
      '\u{00A0}' | // No-break Space
      '\u{180E}' | // Mongolian Vowel Separator
      '\u{2028}' | // Line Separator
      '\u{2029}' | // Paragraph Separator
      '\u{202F}' | // Narrow No-break Space
      '\u{205F}' | // Medium Mathematical Space
      '\u{3000}' | // Ideographic Space
      '\u{FEFF}'   // Zero Width No-break Space
      => true,

      // En Quad, Em Quad, En Space, Em Space, Three-per-em Space,
      // Four-per-em Space, Six-per-em Space, Figure Space,
      // Punctuation Space, Thin Space, Hair Space, Zero Width Space.
      ch if ('\u{2000}' ..= '\u{200B}').contains(&ch) => true,

      _ => false,
    }
}

/// Whitespace in the broad sense: blanks and line terminators.
#[inline]
pub fn char_is_blank(ch: char) -> bool {
  char_is_whitespace(ch) || char_is_line_ending(ch)
}

#[inline]
pub fn char_is_separator(ch: char, separators: &str) -> bool {
  separators.contains(ch)
}

/// A word character is anything that is neither blank nor a separator.
#[inline]
pub fn char_is_word(ch: char, separators: &str) -> bool {
  !char_is_blank(ch) && !char_is_separator(ch, separators)
}
