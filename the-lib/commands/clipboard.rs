use crate::{
  clipboard,
  command::{
    Args,
    Context,
    Result,
  },
  view::View,
};

pub fn copy(ctx: &mut Context, view: &mut View, _args: &Args) -> Result<()> {
  clipboard::copy(view, ctx.clipboard.as_ref())?;
  Ok(())
}

pub fn cut(ctx: &mut Context, view: &mut View, _args: &Args) -> Result<()> {
  clipboard::cut(view, ctx.clipboard.as_ref())?;
  Ok(())
}

pub fn paste(ctx: &mut Context, view: &mut View, _args: &Args) -> Result<()> {
  clipboard::paste(view, ctx.clipboard.as_ref())?;
  Ok(())
}
