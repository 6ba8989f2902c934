use crate::config::Config;
use crate::context::ExecutionContext;
use crate::error::Error;
use crate::presentation::presenters::{present_config, present_config_init, present_config_path};
use anyhow::Result;

pub fn handle_init(ctx: &ExecutionContext, force: bool) -> Result<()> {
    let path = ctx.config_path();
    let exists = path.exists();

    if exists && !force {
        return Err(Error::AlreadyExists(path.display().to_string()).into());
    }

    Config::default().save_to(path)?;
    tracing::info!(path = %path.display(), overwritten = exists, "wrote config");

    ctx.render(present_config_init(path, exists))
}

pub fn handle_show(ctx: &ExecutionContext) -> Result<()> {
    let config = ctx.config()?;
    if !ctx.config_path().exists() {
        tracing::warn!(path = %ctx.config_path().display(), "config file not found, showing defaults");
    }
    ctx.render(present_config(ctx.config_path(), config))
}

pub fn handle_path(ctx: &ExecutionContext) -> Result<()> {
    ctx.render(present_config_path(ctx.config_path()))
}
