use crate::{
  command::{
    Args,
    Context,
    Result,
  },
  region::{
    Region,
    RegionSet,
  },
  view::View,
};

pub fn single_selection(_ctx: &mut Context, view: &mut View, _args: &Args) -> Result<()> {
  let first = view.selection().get(0)?;
  view.set_selection(RegionSet::single(first));
  Ok(())
}

pub fn select_all(_ctx: &mut Context, view: &mut View, _args: &Args) -> Result<()> {
  let all = Region::new(0, view.size());
  view.set_selection(RegionSet::single(all));
  Ok(())
}
