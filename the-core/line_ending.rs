//! Line terminators.
//!
//! Lines break on LF only. A CR directly before the LF belongs to the
//! terminator of a CRLF line but is otherwise an ordinary character.

#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub enum LineEnding {
  /// CarriageReturn followed by LineFeed.
  Crlf,

  /// U+000A -- LineFeed
  LF,
}

impl LineEnding {
  #[inline]
  pub const fn len_chars(&self) -> usize {
    match self {
      Self::Crlf => 2,
      Self::LF => 1,
    }
  }

  #[inline]
  pub const fn as_str(&self) -> &'static str {
    match self {
      Self::Crlf => "\r\n",
      Self::LF => "\n",
    }
  }
}

/// Returns the passed line's line ending, if any.
pub fn get_line_ending_of_str(line: &str) -> Option<LineEnding> {
  if line.ends_with("\r\n") {
    Some(LineEnding::Crlf)
  } else if line.ends_with('\n') {
    Some(LineEnding::LF)
  } else {
    None
  }
}

/// Strips a trailing line ending from `line`, if present.
pub fn trim_line_ending(line: &str) -> &str {
  match get_line_ending_of_str(line) {
    Some(ending) => &line[..line.len() - ending.as_str().len()],
    None => line,
  }
}
