use crate::Tendril;

pub fn to_upper_case(text: impl Iterator<Item = char>) -> Tendril {
  let mut res = Tendril::new();
  to_upper_case_with(text, &mut res);
  res
}

pub fn to_upper_case_with(text: impl Iterator<Item = char>, buf: &mut Tendril) {
  text.for_each(|c| buf.extend(c.to_uppercase()));
}

pub fn to_lower_case(text: impl Iterator<Item = char>) -> Tendril {
  let mut res = Tendril::new();
  to_lower_case_with(text, &mut res);
  res
}

pub fn to_lower_case_with(text: impl Iterator<Item = char>, buf: &mut Tendril) {
  text.for_each(|c| buf.extend(c.to_lowercase()));
}

pub fn to_swap_case(text: impl Iterator<Item = char>) -> Tendril {
  let mut res = Tendril::new();
  to_swap_case_with(text, &mut res);
  res
}

pub fn to_swap_case_with(text: impl Iterator<Item = char>, buf: &mut Tendril) {
  text.for_each(|c| {
    if c.is_uppercase() {
      buf.extend(c.to_lowercase());
    } else {
      buf.extend(c.to_uppercase());
    }
  });
}

pub fn to_title_case(text: impl Iterator<Item = char>) -> Tendril {
  let mut res = Tendril::new();
  to_title_case_with(text, &mut res);
  res
}

/// Uppercases the first letter of every word and leaves the rest alone.
/// Underscores join words, anything else that is not alphanumeric splits
/// them.
pub fn to_title_case_with(text: impl Iterator<Item = char>, buf: &mut Tendril) {
  text.fold(true, |word_start, c| {
    if word_start && c.is_alphabetic() {
      buf.extend(c.to_uppercase());
    } else {
      buf.push(c);
    }
    !(c.is_alphanumeric() || c == '_')
  });
}
