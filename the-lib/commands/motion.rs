use std::str::FromStr;

use crate::{
  brackets::match_bracket,
  classify::CharClass,
  column::move_vertically,
  command::{
    Args,
    CommandError,
    Context,
    Result,
  },
  movement::Direction,
  transform::transform_heads,
  view::View,
};

/// Unit of the `move` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveBy {
  Characters,
  Stops,
  Lines,
  Words,
  WordEnds,
  SubWords,
  SubWordEnds,
  Pages,
}

impl FromStr for MoveBy {
  type Err = CommandError;

  fn from_str(s: &str) -> Result<Self> {
    match s {
      "characters" => Ok(Self::Characters),
      "stops" => Ok(Self::Stops),
      "lines" => Ok(Self::Lines),
      "words" => Ok(Self::Words),
      "word_ends" => Ok(Self::WordEnds),
      "subwords" => Ok(Self::SubWords),
      "subword_ends" => Ok(Self::SubWordEnds),
      "pages" => Ok(Self::Pages),
      other => Err(CommandError::invalid("by", other)),
    }
  }
}

/// Target of the `move_to` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveTo {
  Bol,
  Eol,
  Bof,
  Eof,
  Brackets,
}

impl FromStr for MoveTo {
  type Err = CommandError;

  fn from_str(s: &str) -> Result<Self> {
    match s {
      "bol" => Ok(Self::Bol),
      "eol" => Ok(Self::Eol),
      "bof" => Ok(Self::Bof),
      "eof" => Ok(Self::Eof),
      "brackets" => Ok(Self::Brackets),
      other => Err(CommandError::invalid("to", other)),
    }
  }
}

impl MoveBy {
  /// Boundaries a word-wise move stops at. Empty for the other units.
  fn class_mask(self) -> CharClass {
    match self {
      Self::Words => CharClass::WORD_START | CharClass::LINE_END | CharClass::LINE_START,
      Self::WordEnds => CharClass::WORD_END | CharClass::LINE_END | CharClass::LINE_START,
      Self::SubWords => {
        CharClass::SUB_WORD_START
          | CharClass::WORD_START
          | CharClass::PUNCT_START
          | CharClass::LINE_END
          | CharClass::LINE_START
      },
      Self::SubWordEnds => {
        CharClass::SUB_WORD_END
          | CharClass::WORD_END
          | CharClass::PUNCT_END
          | CharClass::LINE_END
          | CharClass::LINE_START
      },
      _ => CharClass::empty(),
    }
  }
}

fn stops_mask(args: &Args) -> Result<CharClass> {
  let flags = [
    ("word_begin", CharClass::WORD_START),
    ("word_end", CharClass::WORD_END),
    ("punct_begin", CharClass::PUNCT_START),
    ("punct_end", CharClass::PUNCT_END),
    ("empty_line", CharClass::EMPTY_LINE),
  ];

  let mut mask = CharClass::empty();
  for (key, class) in flags {
    if args.bool_or(key, false)? {
      mask |= class;
    }
  }
  Ok(mask)
}

pub fn move_by(_ctx: &mut Context, view: &mut View, args: &Args) -> Result<()> {
  let by: MoveBy = args
    .parse("by")?
    .ok_or_else(|| CommandError::MissingArgument("by".to_string()))?;
  let forward = args.bool_or("forward", true)?;
  let extend = args.bool_or("extend", false)?;
  let direction = Direction::from_forward(forward);

  match by {
    MoveBy::Characters => {
      transform_heads(view, extend, |_, r| {
        if forward {
          r.head + 1
        } else {
          r.head.saturating_sub(1)
        }
      });
    },
    MoveBy::Stops => {
      let mask = stops_mask(args)?;
      // Only this call sees the override; the view's separators stay put.
      let separators = args.str("separators")?.map(str::to_owned);
      transform_heads(view, extend, |view, r| {
        view.find_by_class(r.head, direction, mask, separators.as_deref())
      });
    },
    MoveBy::Lines | MoveBy::Pages => {
      let rows = if by == MoveBy::Lines {
        1
      } else {
        view.viewport().height as isize
      };
      let rows = if forward { rows } else { -rows };
      let tab_size = view.settings().tab_size;
      transform_heads(view, extend, |view, r| {
        move_vertically(view.text(), r.head, rows, tab_size)
      });
    },
    MoveBy::Words | MoveBy::WordEnds | MoveBy::SubWords | MoveBy::SubWordEnds => {
      let mask = by.class_mask();
      transform_heads(view, extend, |view, r| {
        view.find_by_class(r.head, direction, mask, None)
      });
    },
  }

  Ok(())
}

pub fn move_to(_ctx: &mut Context, view: &mut View, args: &Args) -> Result<()> {
  let to: MoveTo = args
    .parse("to")?
    .ok_or_else(|| CommandError::MissingArgument("to".to_string()))?;
  let extend = args.bool_or("extend", false)?;

  match to {
    MoveTo::Bol => transform_heads(view, extend, |view, r| view.line(r.head).from()),
    MoveTo::Eol => transform_heads(view, extend, |view, r| view.line(r.head).to()),
    MoveTo::Bof => transform_heads(view, extend, |_, _| 0),
    MoveTo::Eof => transform_heads(view, extend, |view, _| view.size()),
    MoveTo::Brackets => {
      transform_heads(view, extend, |view, r| {
        match_bracket(view.text(), r.head).unwrap_or(r.head)
      })
    },
  }

  Ok(())
}

pub fn scroll_lines(_ctx: &mut Context, view: &mut View, args: &Args) -> Result<()> {
  let amount = args.int_or("amount", 0)?;
  let amount = isize::try_from(amount).map_err(|_| CommandError::invalid("amount", amount))?;
  view.scroll_lines(amount);
  Ok(())
}
