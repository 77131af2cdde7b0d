//! Commands working on whole lines.

use the_core::line_ending::{
  get_line_ending_of_str,
  trim_line_ending,
};

use crate::{
  command::{
    Args,
    Context,
    Result,
  },
  edit::for_each_region,
  region::{
    Region,
    RegionSet,
  },
  view::View,
};

/// Joins the lines inside each region, and the line holding its end with
/// the one after. Indentation of joined lines collapses into one space.
pub fn join_lines(_ctx: &mut Context, view: &mut View, _args: &Args) -> Result<()> {
  for_each_region(view, |view, _, region| -> Result<()> {
    let text = view.substr(region).replace('\r', "\n");
    let mut pieces = text.split('\n');
    let mut joined = pieces.next().unwrap_or_default().to_string();
    for piece in pieces {
      joined.push(' ');
      joined.push_str(piece.trim_start_matches([' ', '\t']));
    }
    view.replace(region, &joined);

    let liner = view.full_line(region.from() + joined.chars().count());
    let line_text = view.substr(liner);
    let line = trim_line_ending(&line_text)
      .replace('\r', "")
      .trim_end_matches([' ', '\t'])
      .to_string();

    if get_line_ending_of_str(&line_text).is_some() {
      let next = view.full_line(liner.to());
      let next_text = view.substr(next);
      if !next_text.is_empty() {
        let trimmed = format!(" {}", next_text.trim_start_matches([' ', '\t']));
        view.replace(next, &trimmed);
      }
    }
    if line != view.substr(liner) {
      view.replace(liner, &line);
    }
    Ok(())
  })
}

/// Row spans covered by the selection, ascending, and the span owning each
/// region. Regions sharing a row share a span.
fn row_blocks(view: &View) -> (Vec<(usize, usize)>, Vec<usize>) {
  let mut blocks: Vec<(usize, usize)> = Vec::new();
  let mut owners = Vec::with_capacity(view.selection().len());

  for region in view.selection() {
    let first = view.row_col(region.from()).row;
    let last = view.row_col(region.to()).row;
    match blocks.last_mut() {
      Some(block) if first <= block.1 => block.1 = block.1.max(last),
      _ => blocks.push((first, last)),
    }
    owners.push(blocks.len() - 1);
  }
  (blocks, owners)
}

/// `regions` moved by the shift of the span owning each.
fn shifted(regions: &[Region], owners: &[usize], shifts: &[isize]) -> RegionSet {
  regions
    .iter()
    .zip(owners)
    .map(|(region, &owner)| {
      let shift = shifts[owner];
      Region::new(
        region.anchor.saturating_add_signed(shift),
        region.head.saturating_add_signed(shift),
      )
    })
    .collect()
}

fn block_span(view: &View, (first, last): (usize, usize)) -> Region {
  Region::new(
    view.line_of_row(first).from(),
    view.line_of_row(last).to(),
  )
}

pub fn swap_line_up(_ctx: &mut Context, view: &mut View, _args: &Args) -> Result<()> {
  let (blocks, owners) = row_blocks(view);
  if blocks.iter().any(|&(first, _)| first == 0) {
    return Ok(());
  }
  let regions: Vec<Region> = view.selection().iter().copied().collect();

  let mut shifts = Vec::with_capacity(blocks.len());
  for &block in &blocks {
    let above = view.line_of_row(block.0 - 1);
    let span = block_span(view, block);
    let swapped = format!("{}\n{}", view.substr(span), view.substr(above));
    view.replace(Region::new(above.from(), span.to()), &swapped);
    shifts.push(-((above.len() + 1) as isize));
  }

  // Swaps keep the text length, so offsets taken before them still hold.
  view.set_selection(shifted(&regions, &owners, &shifts));
  Ok(())
}

pub fn swap_line_down(_ctx: &mut Context, view: &mut View, _args: &Args) -> Result<()> {
  let (blocks, owners) = row_blocks(view);
  let last_row = view.rows().saturating_sub(1);
  if blocks.iter().any(|&(_, last)| last >= last_row) {
    return Ok(());
  }
  let regions: Vec<Region> = view.selection().iter().copied().collect();

  let mut shifts = vec![0; blocks.len()];
  for (i, &block) in blocks.iter().enumerate().rev() {
    let below = view.line_of_row(block.1 + 1);
    let span = block_span(view, block);
    let swapped = format!("{}\n{}", view.substr(below), view.substr(span));
    view.replace(Region::new(span.from(), below.to()), &swapped);
    shifts[i] = (below.len() + 1) as isize;
  }

  view.set_selection(shifted(&regions, &owners, &shifts));
  Ok(())
}

/// Adds a cursor on the next (or previous) line of each region, keeping the
/// column where the line is long enough.
pub fn select_lines(_ctx: &mut Context, view: &mut View, args: &Args) -> Result<()> {
  let forward = args.bool_or("forward", true)?;

  let added: Vec<Region> = view
    .selection()
    .iter()
    .filter_map(|region| {
      let (target, distance) = if forward {
        let line = view.full_line(region.to());
        if line.to() == view.line(region.to()).to() {
          return None;
        }
        (view.line(line.to()), region.to() - line.from())
      } else {
        let line = view.full_line(region.from());
        if line.from() == 0 {
          return None;
        }
        (view.line(line.from() - 1), region.from() - line.from())
      };

      let offset = if target.len() < distance {
        target.to()
      } else {
        target.from() + distance
      };
      Some(Region::point(offset))
    })
    .collect();

  view.selection_mut().add_all(added);
  Ok(())
}

/// Replaces each region with its parts on separate lines.
pub fn split_selection_into_lines(_ctx: &mut Context, view: &mut View, _args: &Args) -> Result<()> {
  let mut pieces = Vec::new();

  for &region in view.selection() {
    let before = pieces.len();
    for line in view.lines(region) {
      let from = line.from().max(region.from());
      let to = line.to().min(region.to());
      if from > to || (from == to && !region.is_empty()) {
        continue;
      }
      pieces.push(Region::new(from, to));
    }
    if pieces.len() == before {
      pieces.push(region);
    }
  }

  view.set_selection(pieces.into_iter().collect());
  Ok(())
}

#[cfg(test)]
mod test {
  use super::*;
  use crate::commands::test_util::{
    pairs,
    run_simple,
    view_with,
  };

  const SWAP_TEXT: &str = "Testing swap line up\ncommand whit multiple\nregions \
                           selected\nTesting swap line up\ncommand whit multiple\nregions \
                           selected";

  fn text_of(view: &View) -> String {
    view.text().to_string()
  }

  #[test]
  fn join_lines_cases() {
    let cases: &[(&str, &[(usize, usize)], &str)] = &[
      ("a\n\t  bc", &[(1, 1)], "a bc"),
      ("abc\r\n\tde", &[(0, 0)], "abc de"),
      ("testing \t\t\n join", &[(9, 8)], "testing join"),
      (
        "test\n join\n command\n whith\n multiple\n regions",
        &[(2, 17), (34, 40)],
        "test join command whith\n multiple regions",
      ),
      ("last line", &[(2, 2)], "last line"),
    ];

    for (text, regions, expected) in cases {
      let mut view = view_with(text, regions);
      run_simple(&mut view, "join_lines", Args::new()).unwrap();
      assert_eq!(text_of(&view), *expected, "{text:?}");
    }
  }

  #[test]
  fn swap_line_up_single() {
    let mut view = view_with("a\nb", &[(2, 2)]);
    run_simple(&mut view, "swap_line_up", Args::new()).unwrap();
    assert_eq!(text_of(&view), "b\na");
    assert_eq!(pairs(&view), vec![(0, 0)]);
  }

  #[test]
  fn swap_line_down_single() {
    let mut view = view_with("a\nb", &[(1, 1)]);
    run_simple(&mut view, "swap_line_down", Args::new()).unwrap();
    assert_eq!(text_of(&view), "b\na");
    assert_eq!(pairs(&view), vec![(3, 3)]);
  }

  #[test]
  fn swap_lines_round_trip() {
    let mut view = view_with("a\nb", &[(2, 2)]);
    run_simple(&mut view, "swap_line_up", Args::new()).unwrap();
    run_simple(&mut view, "swap_line_down", Args::new()).unwrap();
    assert_eq!(text_of(&view), "a\nb");
    assert_eq!(pairs(&view), vec![(2, 2)]);
  }

  #[test]
  fn swap_lines_with_multiple_regions() {
    let mut view = view_with(SWAP_TEXT, &[(25, 53), (86, 95)]);
    run_simple(&mut view, "swap_line_up", Args::new()).unwrap();
    assert_eq!(
      text_of(&view),
      "command whit multiple\nregions selected\nTesting swap line up\ncommand whit \
       multiple\nTesting swap line up\nregions selected"
    );
    assert_eq!(pairs(&view), vec![(4, 32), (65, 74)]);

    let mut view = view_with(SWAP_TEXT, &[(25, 53), (86, 95)]);
    run_simple(&mut view, "swap_line_down", Args::new()).unwrap();
    assert_eq!(
      text_of(&view),
      "Testing swap line up\nTesting swap line up\ncommand whit multiple\nregions \
       selected\nregions selected\ncommand whit multiple"
    );
    assert_eq!(pairs(&view), vec![(46, 74), (103, 112)]);
  }

  #[test]
  fn swap_lines_stop_at_the_edges() {
    let mut view = view_with("a\nb\nc", &[(0, 0), (4, 4)]);
    run_simple(&mut view, "swap_line_up", Args::new()).unwrap();
    assert_eq!(text_of(&view), "a\nb\nc");

    run_simple(&mut view, "swap_line_down", Args::new()).unwrap();
    assert_eq!(text_of(&view), "a\nb\nc");
    assert_eq!(pairs(&view), vec![(0, 0), (4, 4)]);
  }

  #[test]
  fn select_lines_forward() {
    let cases: &[(&str, &[(usize, usize)], &[(usize, usize)])] = &[
      ("abc\ndefg", &[(1, 1)], &[(1, 1), (5, 5)]),
      ("abcde\nfg", &[(4, 4)], &[(4, 4), (8, 8)]),
      (
        "Testing select lines command\nin\nlime text",
        &[(8, 14), (30, 30)],
        &[(8, 14), (30, 30), (31, 31), (33, 33)],
      ),
      ("abc\ndefg", &[(5, 5)], &[(5, 5)]),
    ];

    for (text, regions, expected) in cases {
      let mut view = view_with(text, regions);
      run_simple(&mut view, "select_lines", Args::new().with("forward", true)).unwrap();
      assert_eq!(pairs(&view), expected.to_vec(), "{text:?}");
    }
  }

  #[test]
  fn select_lines_backward() {
    let cases: &[(&str, &[(usize, usize)], &[(usize, usize)])] = &[
      ("abc\n\ndefg", &[(6, 6)], &[(4, 4), (6, 6)]),
      (
        "Testing select lines command\nin\nlime text",
        &[(29, 29), (30, 36)],
        &[(0, 0), (1, 1), (29, 29), (30, 36)],
      ),
      ("abc\ndefg", &[(1, 1)], &[(1, 1)]),
    ];

    for (text, regions, expected) in cases {
      let mut view = view_with(text, regions);
      run_simple(&mut view, "select_lines", Args::new().with("forward", false)).unwrap();
      assert_eq!(pairs(&view), expected.to_vec(), "{text:?}");
    }
  }

  #[test]
  fn split_selection_into_lines_cases() {
    let cases: &[(&[(usize, usize)], &[(usize, usize)])] = &[
      (&[(4, 7)], &[(4, 5), (6, 7)]),
      (&[(0, 8)], &[(0, 2), (3, 5), (6, 8)]),
      (&[(0, 4), (4, 7)], &[(0, 2), (3, 4), (4, 5), (6, 7)]),
      (&[(1, 1)], &[(1, 1)]),
      (&[(2, 3)], &[(2, 3)]),
    ];

    for (regions, expected) in cases {
      let mut view = view_with("ab\ncd\nef", regions);
      run_simple(&mut view, "split_selection_into_lines", Args::new()).unwrap();
      assert_eq!(pairs(&view), expected.to_vec(), "{regions:?}");
    }
  }
}
