//! Line comment toggling.
//!
//! A text counts as commented when, after its leading whitespace, it starts
//! with the comment token. Toggling removes the first token (and one space
//! after it) or puts the token and a space in front of the first
//! non-whitespace character. Indentation is left alone either way.

pub const DEFAULT_COMMENT_TOKEN: &str = "//";

/// Whether `text` starts with `token` after its indentation.
pub fn is_commented(text: &str, token: &str) -> bool {
  !token.is_empty() && text.trim_start().starts_with(token)
}

/// Comments or uncomments `text`. Returns `None` when nothing would change:
/// the token is empty or the text is blank.
pub fn toggle_line_comment(text: &str, token: &str) -> Option<String> {
  let body = text.trim_start();
  if token.is_empty() || body.is_empty() {
    return None;
  }

  let indent = &text[..text.len() - body.len()];
  let toggled = match body.strip_prefix(token) {
    Some(rest) => {
      let rest = rest.strip_prefix(' ').unwrap_or(rest);
      format!("{indent}{rest}")
    },
    None => format!("{indent}{token} {body}"),
  };
  Some(toggled)
}
