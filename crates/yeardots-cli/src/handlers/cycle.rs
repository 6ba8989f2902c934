use crate::context::ExecutionContext;
use crate::presentation::presenters::present_cycle;
use anyhow::Result;
use yeardots_types::Granularity;

pub fn handle(ctx: &ExecutionContext, from: Option<Granularity>, steps: u16) -> Result<()> {
    let display = &ctx.config()?.display;
    let from = from.unwrap_or(display.initial_granularity);
    let reference = ctx.clock().today();

    tracing::debug!(%from, steps, %reference, "walking granularity cycle");

    ctx.render(present_cycle(reference, from, steps, display.remaining_mode))
}
