//! Literal, case-insensitive search over the buffer.
//!
//! The term of the last search lives in the [`Context`], so `find_next` and
//! `replace_next` pick up whatever `find_under_expand` or `find_all` looked
//! for last.

use crate::{
  command::{
    Args,
    CommandError,
    Context,
    Result,
  },
  region::{
    Region,
    RegionSet,
  },
  search::FindFlags,
  view::View,
};

const FLAGS: FindFlags = FindFlags::IGNORE_CASE.union(FindFlags::LITERAL);

/// The first match of `term` after the selection, wrapping to the start of
/// the buffer when `find_wrap` is set.
fn next_selection(view: &View, term: &str) -> Result<Region> {
  let start = view.selection().iter().map(Region::to).max().unwrap_or(0);

  let mut found = view.find(term, start, FLAGS)?;
  if found.is_none() && view.settings().find_wrap {
    found = view.find(term, 0, FLAGS)?;
  }
  found.ok_or_else(|| CommandError::NotFound(term.to_string()))
}

/// Every non-overlapping match of `term`, ascending.
fn all_matches(view: &View, term: &str) -> Result<Vec<Region>> {
  let mut matches = Vec::new();
  let mut start = 0;
  while let Some(found) = view.find(term, start, FLAGS)? {
    start = found.to();
    matches.push(found);
  }
  Ok(matches)
}

/// Expands cursors to their word, or adds the next match of the last
/// region's text when everything is already selected.
pub fn find_under_expand(ctx: &mut Context, view: &mut View, _args: &Args) -> Result<()> {
  if view.selection().has_empty() {
    let expanded: RegionSet = view
      .selection()
      .iter()
      .map(|&region| {
        let word = view.word(region.anchor);
        if word.len() > region.len() { word } else { region }
      })
      .collect();
    ctx.last_search = expanded.last().map(|last| view.substr(last));
    view.set_selection(expanded);
    return Ok(());
  }

  let Some(last) = view.selection().last() else {
    return Ok(());
  };
  let term = view.substr(last);
  if let Some(found) = view.find(&term, last.to(), FLAGS)? {
    view.selection_mut().add(found);
  }
  ctx.last_search = Some(term);
  Ok(())
}

pub fn find_next(ctx: &mut Context, view: &mut View, _args: &Args) -> Result<()> {
  let Some(term) = ctx.last_search.as_deref().filter(|term| !term.is_empty()) else {
    return Ok(());
  };

  let found = next_selection(view, term)?;
  view.set_selection(RegionSet::single(found));
  view.show(found.head);
  Ok(())
}

/// Replaces the next match of the last search term with the replace text.
pub fn replace_next(ctx: &mut Context, view: &mut View, args: &Args) -> Result<()> {
  if let Some(replacement) = args.str("replace_text")? {
    ctx.replace_text = replacement.to_string();
  }
  let term = ctx.last_search.as_deref().unwrap_or_default();

  let found = next_selection(view, term)?;
  tracing::debug!(from = found.from(), to = found.to(), "replace next");
  view.erase(found);
  view.insert(found.from(), &ctx.replace_text);
  Ok(())
}

/// Selects every match of `search_text`, or of the last search term.
pub fn find_all(ctx: &mut Context, view: &mut View, args: &Args) -> Result<()> {
  let term = match args.str("search_text")? {
    Some(term) => term.to_string(),
    None => ctx.last_search.clone().unwrap_or_default(),
  };

  let matches = all_matches(view, &term)?;
  if matches.is_empty() {
    return Err(CommandError::NotFound(term));
  }

  view.set_selection(matches.into_iter().collect());
  ctx.last_search = Some(term);
  Ok(())
}

/// Replaces every match of `search_text` with `replace_text`, falling back
/// to the last search term and replace text.
pub fn replace_all(ctx: &mut Context, view: &mut View, args: &Args) -> Result<()> {
  let term = match args.str("search_text")? {
    Some(term) => term.to_string(),
    None => ctx.last_search.clone().unwrap_or_default(),
  };
  if let Some(replacement) = args.str("replace_text")? {
    ctx.replace_text = replacement.to_string();
  }

  let matches = all_matches(view, &term)?;
  if matches.is_empty() {
    return Err(CommandError::NotFound(term));
  }

  tracing::debug!(count = matches.len(), "replace all");
  for found in matches.iter().rev() {
    view.replace(*found, &ctx.replace_text);
  }
  ctx.last_search = Some(term);
  Ok(())
}

#[cfg(test)]
mod test {
  use super::*;
  use crate::{
    commands::test_util::{
      pairs,
      run,
      view_with,
    },
    settings::Settings,
  };

  const TEXT: &str = "Hello World!\nTest123123\nAbrakadabra\n";
  const REPLACE_TEXT: &str = "abc abc bac abc abc";

  fn view_wrapping(text: &str, regions: &[(usize, usize)], find_wrap: bool) -> View {
    let mut view = View::with_settings(text, Settings {
      find_wrap,
      ..Settings::default()
    });
    let selection = regions.iter().map(|&(anchor, head)| Region::new(anchor, head));
    view.set_selection(selection.collect());
    view
  }

  #[test]
  fn find_under_expand_selects_words_then_matches() {
    let cases: &[(&[(usize, usize)], &[(usize, usize)])] = &[
      (&[(0, 0)], &[(0, 5)]),
      (&[(19, 20)], &[(19, 20), (22, 23)]),
      (&[(17, 20)], &[(17, 20), (20, 23)]),
    ];

    for (input, expected) in cases {
      let mut ctx = Context::default();
      let mut view = view_with(TEXT, input);
      run(&mut ctx, &mut view, "find_under_expand", Args::new()).unwrap();
      assert_eq!(pairs(&view), expected.to_vec(), "{input:?}");
    }
  }

  #[test]
  fn insert_over_adjacent_matches() {
    let mut ctx = Context::default();
    let mut view = view_with(TEXT, &[(17, 20)]);
    run(&mut ctx, &mut view, "find_under_expand", Args::new()).unwrap();
    assert_eq!(pairs(&view), vec![(17, 20), (20, 23)]);

    run(&mut ctx, &mut view, "insert", Args::new().with("characters", "x")).unwrap();
    assert_eq!(view.text().to_string(), "Hello World!\nTestxx\nAbrakadabra\n");
    assert_eq!(pairs(&view), vec![(18, 18), (19, 19)]);
  }

  #[test]
  fn find_under_expand_remembers_the_term() {
    let mut ctx = Context::default();
    let mut view = view_with(TEXT, &[(2, 2)]);
    run(&mut ctx, &mut view, "find_under_expand", Args::new()).unwrap();
    assert_eq!(ctx.last_search.as_deref(), Some("Hello"));
  }

  #[test]
  fn find_next_after_expand() {
    let cases: &[(&[(usize, usize)], bool, &[(usize, usize)], bool)] = &[
      (&[(17, 20)], true, &[(17, 20)], true),
      (&[(21, 23)], true, &[(18, 20)], true),
      (&[(21, 23)], false, &[(21, 23)], false),
    ];

    for (input, wrap, expected, ok) in cases {
      let mut ctx = Context::default();
      let mut view = view_wrapping(TEXT, input, *wrap);
      run(&mut ctx, &mut view, "find_under_expand", Args::new()).unwrap();
      let result = run(&mut ctx, &mut view, "find_next", Args::new());
      assert_eq!(result.is_ok(), *ok, "{input:?} wrap={wrap}");
      assert_eq!(pairs(&view), expected.to_vec(), "{input:?} wrap={wrap}");
    }
  }

  #[test]
  fn find_next_without_a_term_does_nothing() {
    let mut ctx = Context::default();
    let mut view = view_with(TEXT, &[(3, 5)]);
    run(&mut ctx, &mut view, "find_next", Args::new()).unwrap();
    assert_eq!(pairs(&view), vec![(3, 5)]);
  }

  #[test]
  fn replace_next_after_expand() {
    let cases: &[(&[(usize, usize)], bool, &str)] = &[
      (&[(1, 1), (2, 2), (3, 3)], true, "abc f bac abc abc"),
      (&[(0, 0), (4, 4), (8, 8), (12, 13)], true, "abc abc bac abc f"),
      (&[(12, 13), (8, 8), (4, 4), (1, 0)], true, "abc abc bac abc f"),
      (&[(15, 15)], true, "abc abc bac abc f"),
      (&[(0, 0)], true, "abc f bac abc abc"),
      (&[(16, 19)], true, "f abc bac abc abc"),
      (&[(16, 19)], false, REPLACE_TEXT),
    ];

    for (input, wrap, expected) in cases {
      let mut ctx = Context::default();
      ctx.replace_text = "f".to_string();
      let mut view = view_wrapping(REPLACE_TEXT, input, *wrap);
      run(&mut ctx, &mut view, "find_under_expand", Args::new()).unwrap();
      let result = run(&mut ctx, &mut view, "replace_next", Args::new());
      assert_eq!(view.text().to_string(), *expected, "{input:?} wrap={wrap}");
      assert_eq!(result.is_ok(), *expected != REPLACE_TEXT);
    }
  }

  #[test]
  fn replace_next_without_a_term_is_not_found() {
    let mut ctx = Context::default();
    let mut view = view_with(REPLACE_TEXT, &[(0, 0)]);
    assert!(matches!(
      run(&mut ctx, &mut view, "replace_next", Args::new()),
      Err(CommandError::NotFound(_))
    ));
    assert_eq!(view.text().to_string(), REPLACE_TEXT);
  }

  #[test]
  fn find_all_selects_every_match() {
    let cases: &[(&str, &str, &[(usize, usize)])] = &[
      ("abc", "abc cde dce abc abc", &[(0, 3), (12, 15), (16, 19)]),
      (",\n", "abc,\nbca,\n,cde,\n", &[(3, 5), (8, 10), (14, 16)]),
    ];

    for (term, text, expected) in cases {
      let mut ctx = Context::default();
      let mut view = view_with(text, &[]);
      run(&mut ctx, &mut view, "find_all", Args::new().with("search_text", *term)).unwrap();
      assert_eq!(pairs(&view), expected.to_vec(), "{term:?}");
      assert_eq!(ctx.last_search.as_deref(), Some(*term));
    }

    let mut view = view_with("abc", &[(1, 1)]);
    assert!(matches!(
      run(&mut Context::default(), &mut view, "find_all", Args::new().with("search_text", "x")),
      Err(CommandError::NotFound(_))
    ));
    assert_eq!(pairs(&view), vec![(1, 1)]);
  }

  #[test]
  fn replace_all_rewrites_every_match() {
    let cases = [
      ("abc", "cba", "abc abc bac abc abc", "cba cba bac cba cba"),
      ("abc", "d", "abc agf bac ac abc", "d agf bac ac d"),
      ("//", "#", "//This is a comment //Test Comment", "#This is a comment #Test Comment"),
    ];

    for (term, replacement, text, expected) in cases {
      let mut ctx = Context::default();
      let mut view = view_wrapping(text, &[], false);
      let args = Args::new()
        .with("search_text", term)
        .with("replace_text", replacement);
      run(&mut ctx, &mut view, "replace_all", args).unwrap();
      assert_eq!(view.text().to_string(), expected);
      assert_eq!(view.history().len(), 1);
    }
  }
}
