use crate::{
  classify::CharClass,
  command::{
    Args,
    Context,
    Result,
  },
  edit::for_each_region,
  movement::Direction,
  region::{
    Region,
    RegionSet,
  },
  view::View,
};

pub fn insert(_ctx: &mut Context, view: &mut View, args: &Args) -> Result<()> {
  let characters = args.required_str("characters")?;

  for_each_region(view, |view, _, region| -> Result<()> {
    if region.is_empty() {
      view.insert(region.head, characters);
    } else {
      view.replace(region, characters);
    }
    Ok(())
  })
}

/// Start of the space run before `offset` that reaches back at most to the
/// previous tab stop.
fn tab_stop_start(view: &View, offset: usize, tab_size: usize) -> usize {
  let col = view.row_col(offset).col;
  if col == 0 {
    return offset;
  }

  let stop = offset - col + ((col - 1) / tab_size) * tab_size;
  let mut start = offset;
  while start > stop && view.char_at(start - 1) == Some(' ') {
    start -= 1;
  }
  start
}

pub fn left_delete(_ctx: &mut Context, view: &mut View, _args: &Args) -> Result<()> {
  let settings = view.settings();
  let trim_spaces = settings.translate_tabs_to_spaces && settings.use_tab_stops;
  let tab_size = settings.tab_size.max(1);
  let only_cursors = !view.selection().has_non_empty();

  for_each_region(view, |view, _, region| -> Result<()> {
    let mut region = region;
    if region.is_empty() && only_cursors {
      let end = region.head;
      let mut start = if trim_spaces {
        tab_stop_start(view, end, tab_size)
      } else {
        end
      };
      if start == end {
        start = end.saturating_sub(1);
      }
      region = Region::new(start, end);
    }
    view.erase(region);
    Ok(())
  })
}

pub fn right_delete(_ctx: &mut Context, view: &mut View, _args: &Args) -> Result<()> {
  let only_cursors = !view.selection().has_non_empty();

  for_each_region(view, |view, _, region| -> Result<()> {
    let region = if region.is_empty() && only_cursors {
      Region::new(region.head, region.head + 1)
    } else {
      region
    };
    view.erase(region);
    Ok(())
  })
}

/// Where deleting a word from `point` stops.
///
/// Right next to a mix of tabs and spaces the stop flips to the other edge
/// of words, so the whole run of whitespace goes in one delete.
fn word_stop(view: &View, point: usize, forward: bool) -> usize {
  let (direction, near) = if forward {
    (Direction::Forward, Region::new(point, point + 2))
  } else {
    (Direction::Backward, Region::new(point.saturating_sub(2), point))
  };

  let near = view.substr(near);
  let mixed = near.contains('\t') && near.contains(' ');

  let mask = match (forward, mixed) {
    (true, false) => CharClass::WORD_END | CharClass::PUNCT_END | CharClass::LINE_START,
    (true, true) => CharClass::WORD_START | CharClass::PUNCT_START | CharClass::LINE_END,
    (false, false) => {
      CharClass::WORD_START | CharClass::PUNCT_START | CharClass::LINE_END | CharClass::LINE_START
    },
    (false, true) => CharClass::WORD_END | CharClass::PUNCT_END | CharClass::LINE_START,
  };

  view.find_by_class(point, direction, mask, None)
}

pub fn delete_word(ctx: &mut Context, view: &mut View, args: &Args) -> Result<()> {
  let forward = args.bool_or("forward", true)?;

  let expanded: RegionSet = view
    .selection()
    .iter()
    .map(|&region| {
      if !region.is_empty() {
        return region;
      }
      let stop = word_stop(view, region.head, forward);
      if forward {
        Region::new(region.head, stop)
      } else {
        Region::new(stop, region.head)
      }
    })
    .collect();
  view.set_selection(expanded);

  if forward {
    right_delete(ctx, view, &Args::new())
  } else {
    left_delete(ctx, view, &Args::new())
  }
}
