//! Copy, cut and paste across every region of a selection.
//!
//! The lib only defines the provider interface and an in-memory provider.
//! Hosts bridge [`ClipboardProvider`] to the system clipboard.
//!
//! When nothing is selected, copy and cut work on the whole lines under the
//! cursors. The payload then remembers that it was auto-expanded, and paste
//! puts it back above the cursor's line instead of at the cursor.

use std::borrow::Cow;

use parking_lot::Mutex;
use thiserror::Error;

use crate::{
  edit::{
    erase_regions,
    for_each_region,
  },
  region::RegionSet,
  view::View,
};

#[derive(Debug, Error)]
pub enum ClipboardError {
  #[error("clipboard provider does not support reading")]
  ReadingNotSupported,
  #[error("clipboard error: {0}")]
  Platform(String),
}

pub type Result<T> = std::result::Result<T, ClipboardError>;

/// Text on the clipboard and whether it was taken from whole lines because
/// nothing was selected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClipboardContents {
  pub text:          String,
  pub auto_expanded: bool,
}

impl ClipboardContents {
  pub fn new(text: impl Into<String>, auto_expanded: bool) -> Self {
    Self {
      text: text.into(),
      auto_expanded,
    }
  }
}

pub trait ClipboardProvider: Send + Sync {
  fn name(&self) -> Cow<'_, str>;
  fn get_contents(&self) -> Result<ClipboardContents>;
  fn set_contents(&self, contents: ClipboardContents) -> Result<()>;
}

#[derive(Debug, Default)]
pub struct NoClipboard;

impl ClipboardProvider for NoClipboard {
  fn name(&self) -> Cow<'_, str> {
    "none".into()
  }

  fn get_contents(&self) -> Result<ClipboardContents> {
    Err(ClipboardError::ReadingNotSupported)
  }

  fn set_contents(&self, _contents: ClipboardContents) -> Result<()> {
    Ok(())
  }
}

/// Process-local clipboard.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
  contents: Mutex<ClipboardContents>,
}

impl MemoryClipboard {
  pub fn new() -> Self {
    Self::default()
  }
}

impl ClipboardProvider for MemoryClipboard {
  fn name(&self) -> Cow<'_, str> {
    "memory".into()
  }

  fn get_contents(&self) -> Result<ClipboardContents> {
    Ok(self.contents.lock().clone())
  }

  fn set_contents(&self, contents: ClipboardContents) -> Result<()> {
    *self.contents.lock() = contents;
    Ok(())
  }
}

/// Regions whose text goes to the clipboard. Cursors become their full line
/// when nothing is selected, or always when `cut` is set. Otherwise cursors
/// are dropped.
fn target_regions(view: &View, cut: bool) -> RegionSet {
  let selection = view.selection();
  let expand = cut || !selection.has_non_empty();

  selection
    .iter()
    .filter_map(|region| {
      if !region.is_empty() {
        Some(*region)
      } else if expand {
        Some(view.full_line(region.from()))
      } else {
        None
      }
    })
    .collect()
}

/// What copying the current selection would put on the clipboard.
pub fn compose_copy(view: &View) -> ClipboardContents {
  let selection = view.selection();
  let auto_expanded = !selection.is_empty() && !selection.has_non_empty();

  let texts: Vec<String> = target_regions(view, false)
    .iter()
    .map(|region| {
      let mut text = view.substr(*region);
      if auto_expanded && !text.ends_with('\n') {
        text.push('\n');
      }
      text
    })
    .collect();

  ClipboardContents::new(texts.join("\n"), auto_expanded)
}

pub fn copy(view: &View, clipboard: &dyn ClipboardProvider) -> Result<()> {
  let contents = compose_copy(view);
  tracing::trace!(
    regions = view.selection().len(),
    auto_expanded = contents.auto_expanded,
    "copy"
  );
  clipboard.set_contents(contents)
}

/// Copies the selection, then erases it. Cursors always take their whole
/// line with them.
pub fn cut(view: &mut View, clipboard: &dyn ClipboardProvider) -> Result<()> {
  let contents = compose_copy(view);
  let plan = target_regions(view, true);
  tracing::trace!(regions = plan.len(), "cut");

  erase_regions(view, &plan);
  clipboard.set_contents(contents)
}

pub fn paste(view: &mut View, clipboard: &dyn ClipboardProvider) -> Result<()> {
  let contents = clipboard.get_contents()?;
  paste_contents(view, &contents)
}

/// Pastes `contents` at every region.
///
/// Auto-expanded text goes in front of each region's line. Otherwise, when
/// the text has exactly one line per region, region `i` receives line `i`;
/// failing that every region receives the whole text.
pub fn paste_contents(view: &mut View, contents: &ClipboardContents) -> Result<()> {
  let lines: Vec<&str> = contents.text.split('\n').collect();
  let split = !contents.auto_expanded && lines.len() == view.selection().len();
  tracing::trace!(
    regions = view.selection().len(),
    split,
    auto_expanded = contents.auto_expanded,
    "paste"
  );

  for_each_region(view, |view, index, region| -> Result<()> {
    if contents.auto_expanded {
      let start = view.full_line(region.from()).from();
      view.insert(start, &contents.text);
    } else if split {
      view.replace(region, lines.get(index).copied().unwrap_or_default());
    } else {
      view.replace(region, &contents.text);
    }
    Ok(())
  })
}

#[cfg(test)]
mod test {
  use super::*;
  use crate::region::Region;

  struct Case {
    buf:      &'static str,
    clip:     ClipboardContents,
    regions:  &'static [(usize, usize)],
    exp_clip: ClipboardContents,
    exp_buf:  &'static str,
  }

  fn empty() -> ClipboardContents {
    ClipboardContents::default()
  }

  fn plain(text: &str) -> ClipboardContents {
    ClipboardContents::new(text, false)
  }

  fn expanded(text: &str) -> ClipboardContents {
    ClipboardContents::new(text, true)
  }

  fn run(command: fn(&mut View, &dyn ClipboardProvider) -> Result<()>, cases: Vec<Case>) {
    for (i, case) in cases.into_iter().enumerate() {
      let clipboard = MemoryClipboard::new();
      clipboard.set_contents(case.clip).unwrap();

      let mut view = View::new(case.buf);
      let selection = case.regions.iter().map(|&(anchor, head)| Region::new(anchor, head));
      view.set_selection(selection.collect());
      view.edit(|view| command(view, &clipboard)).unwrap();

      assert_eq!(clipboard.get_contents().unwrap(), case.exp_clip, "case {i}");
      assert_eq!(view.text().to_string(), case.exp_buf, "case {i}");
    }
  }

  fn copy_command(view: &mut View, clipboard: &dyn ClipboardProvider) -> Result<()> {
    copy(view, clipboard)
  }

  #[test]
  fn copy_selections() {
    let case = |buf: &'static str, regions: &'static [(usize, usize)], exp_clip| {
      Case {
        buf,
        clip: empty(),
        regions,
        exp_clip,
        exp_buf: buf,
      }
    };

    run(copy_command, vec![
      case("test string", &[(1, 3)], plain("es")),
      case("test\nstring", &[(3, 6)], plain("t\ns")),
      case("test string", &[(3, 3)], expanded("test string\n")),
      case("test string", &[(1, 3), (5, 6)], plain("es\ns")),
      case("test\nstring", &[(1, 3), (5, 6)], plain("es\ns")),
      case("test\nstring", &[(1, 1), (7, 7)], expanded("test\n\nstring\n")),
      case("test\nstring", &[(3, 6), (9, 10)], plain("t\ns\nn")),
      case("test string", &[(5, 6), (1, 3)], plain("es\ns")),
      case("test string", &[(1, 1), (6, 7)], plain("t")),
      case("test string\n", &[(0, 12)], plain("test string\n")),
      case("test\nstring\n", &[(0, 5), (6, 12)], plain("test\n\ntring\n")),
      case("test\n\nstring\n", &[(0, 6), (7, 13)], plain("test\n\n\ntring\n")),
    ]);
  }

  #[test]
  fn cut_selections() {
    let case = |buf: &'static str,
                regions: &'static [(usize, usize)],
                exp_clip,
                exp_buf: &'static str| {
      Case {
        buf,
        clip: empty(),
        regions,
        exp_clip,
        exp_buf,
      }
    };

    run(cut, vec![
      case("test string", &[(1, 3)], plain("es"), "tt string"),
      case("test\nstring", &[(3, 6)], plain("t\ns"), "testring"),
      case("test string", &[(3, 3)], expanded("test string\n"), ""),
      case("test string", &[(5, 6), (1, 3)], plain("es\ns"), "tt tring"),
      case("test\nstring", &[(1, 3), (5, 6)], plain("es\ns"), "tt\ntring"),
      case("test\nstring", &[(1, 1), (7, 7)], expanded("test\n\nstring\n"), ""),
      case("test\nstring", &[(3, 6), (9, 10)], plain("t\ns\nn"), "testrig"),
      case("test string", &[(6, 7), (1, 1)], plain("t"), ""),
      case("test\nstring", &[(1, 1), (6, 7)], plain("t"), "sring"),
      case("test\nstring\n", &[(0, 12)], plain("test\nstring\n"), ""),
      case("test\nstring\n", &[(0, 5), (6, 12)], plain("test\n\ntring\n"), "s"),
      case("test\n\nstring\n", &[(0, 6), (7, 13)], plain("test\n\n\ntring\n"), "s"),
    ]);
  }

  #[test]
  fn paste_contents_into_regions() {
    let case = |clip: ClipboardContents,
                regions: &'static [(usize, usize)],
                exp_buf: &'static str| {
      Case {
        buf: "test",
        clip: clip.clone(),
        regions,
        exp_clip: clip,
        exp_buf,
      }
    };

    run(paste, vec![
      case(plain("test"), &[(1, 1)], "ttestest"),
      case(plain("test"), &[(1, 3)], "ttestt"),
      case(expanded("abc\n"), &[(1, 1)], "abc\ntest"),
      case(expanded("abc\n"), &[(1, 2), (3, 4)], "abc\nabc\ntest"),
      case(expanded("abc\n\ndef\n"), &[(1, 2)], "abc\n\ndef\ntest"),
      case(
        expanded("abc\n\ndef\n"),
        &[(1, 1), (3, 3)],
        "abc\n\ndef\nabc\n\ndef\ntest",
      ),
      case(plain("abc\ndef"), &[(1, 1)], "tabc\ndefest"),
      case(plain("abc\ndef"), &[(1, 2)], "tabc\ndefst"),
      case(plain("abc\ndef"), &[(1, 1), (3, 3)], "tabcesdeft"),
      case(plain("abc\ndef"), &[(1, 2), (3, 4)], "tabcsdef"),
      case(plain("1\n2"), &[(0, 2), (2, 4)], "12"),
      case(
        plain("abc\ndef"),
        &[(1, 1), (3, 3), (4, 4)],
        "tabc\ndefesabc\ndeftabc\ndef",
      ),
    ]);
  }

  #[test]
  fn paste_spans_lines() {
    run(paste, vec![
      Case {
        buf:      "test\nstring",
        clip:     plain("test"),
        regions:  &[(9, 10), (3, 6)],
        exp_clip: plain("test"),
        exp_buf:  "testesttritestg",
      },
      Case {
        buf:      "test\nstring",
        clip:     plain("test"),
        regions:  &[(1, 3), (5, 6)],
        exp_clip: plain("test"),
        exp_buf:  "ttestt\ntesttring",
      },
    ]);
  }

  #[test]
  fn cut_is_one_undo_step() {
    let clipboard = MemoryClipboard::new();
    let mut view = View::new("a\nb\nc\n");
    view.set_selection([Region::point(0), Region::point(4)].into_iter().collect());

    view.edit(|view| cut(view, &clipboard)).unwrap();
    assert_eq!(view.text().to_string(), "b\n");
    assert_eq!(clipboard.get_contents().unwrap(), expanded("a\n\nc\n"));

    assert!(view.undo());
    assert_eq!(view.text().to_string(), "a\nb\nc\n");
  }

  #[test]
  fn no_clipboard_cannot_be_read() {
    let mut view = View::new("abc");
    assert!(copy(&view, &NoClipboard).is_ok());
    assert!(matches!(
      paste(&mut view, &NoClipboard),
      Err(ClipboardError::ReadingNotSupported)
    ));
  }
}
