use crate::{
  Tendril,
  case_convention::{
    to_lower_case,
    to_swap_case,
    to_title_case,
    to_upper_case,
  },
  command::{
    Args,
    Context,
    Result,
  },
  comment::toggle_line_comment,
  edit::for_each_region,
  region::Region,
  view::View,
};

/// Toggles the comment token on each region. A cursor works on its line.
pub fn toggle_comment(_ctx: &mut Context, view: &mut View, _args: &Args) -> Result<()> {
  let token = view.settings().comment_token.clone();

  for_each_region(view, |view, _, region| -> Result<()> {
    let target = if region.is_empty() {
      view.line(region.head)
    } else {
      region
    };
    if let Some(toggled) = toggle_line_comment(&view.substr(target), &token) {
      view.replace(target, &toggled);
    }
    Ok(())
  })
}

/// Replaces the text of every non-empty region with `convert` of it. The
/// regions stay selected over the new text.
fn convert_selections<F>(view: &mut View, convert: F) -> Result<()>
where
  F: Fn(std::str::Chars<'_>) -> Tendril,
{
  for_each_region(view, |view, _, region| -> Result<()> {
    if region.is_empty() {
      return Ok(());
    }
    let converted = convert(view.substr(region).chars());
    view.replace(region, &converted);

    // The replace left a cursor after the new text, which this absorbs.
    let end = region.from() + converted.chars().count();
    let restored = Region::new(region.from(), end).with_direction(region.direction());
    view.selection_mut().add(restored);
    Ok(())
  })
}

pub fn title_case(_ctx: &mut Context, view: &mut View, _args: &Args) -> Result<()> {
  convert_selections(view, |text| to_title_case(text))
}

pub fn swap_case(_ctx: &mut Context, view: &mut View, _args: &Args) -> Result<()> {
  convert_selections(view, |text| to_swap_case(text))
}

pub fn upper_case(_ctx: &mut Context, view: &mut View, _args: &Args) -> Result<()> {
  convert_selections(view, |text| to_upper_case(text))
}

pub fn lower_case(_ctx: &mut Context, view: &mut View, _args: &Args) -> Result<()> {
  convert_selections(view, |text| to_lower_case(text))
}
