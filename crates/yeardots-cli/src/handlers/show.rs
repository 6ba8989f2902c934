use crate::context::ExecutionContext;
use crate::presentation::presenters::present_year_view;
use crate::presentation::view_models::CommandResultViewModel;
use anyhow::Result;
use terminal_size::{Width, terminal_size};
use yeardots_engine::ViewSession;
use yeardots_types::{Granularity, RemainingMode};

pub fn handle(
    ctx: &ExecutionContext,
    granularity: Option<Granularity>,
    remaining: Option<RemainingMode>,
) -> Result<()> {
    let display = &ctx.config()?.display;

    let session = ViewSession::start(ctx.clock())
        .with_granularity(granularity.unwrap_or(display.initial_granularity))
        .with_remaining_mode(remaining.unwrap_or(display.remaining_mode));
    let snapshot = session.snapshot();

    tracing::debug!(
        granularity = %snapshot.granularity,
        reference = %snapshot.reference,
        days = snapshot.cells.len(),
        "rendering view"
    );

    // Dots are separated by one space, so `n` dots need `2n - 1` cells.
    let max_columns = if ctx.json_mode() {
        None
    } else {
        terminal_size().map(|(Width(w), _)| (usize::from(w) + 1) / 2)
    };

    let view_model = present_year_view(&snapshot, display, max_columns);
    ctx.render(CommandResultViewModel::new(view_model))
}
