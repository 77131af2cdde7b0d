use crate::{
  command::{
    Args,
    Context,
    Result,
  },
  view::View,
};

pub fn set_setting(_ctx: &mut Context, view: &mut View, args: &Args) -> Result<()> {
  let key = args.required_str("setting")?;
  let value = args.required("value")?.clone();
  view.settings_mut().set(key, value)?;
  Ok(())
}

pub fn toggle_setting(_ctx: &mut Context, view: &mut View, args: &Args) -> Result<()> {
  let key = args.required_str("setting")?;
  view.settings_mut().toggle(key)?;
  Ok(())
}
