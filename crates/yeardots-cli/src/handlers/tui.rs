use crate::context::ExecutionContext;
use crate::presentation::TuiRenderer;
use anyhow::Result;
use is_terminal::IsTerminal;
use yeardots_engine::ViewSession;

pub fn handle(ctx: &ExecutionContext) -> Result<()> {
    if ctx.json_mode() || !std::io::stdout().is_terminal() {
        tracing::warn!("stdout is not an interactive terminal, printing a single view instead");
        return super::show::handle(ctx, None, None);
    }

    let display = ctx.config()?.display.clone();
    let session = ViewSession::start(ctx.clock())
        .with_granularity(display.initial_granularity)
        .with_remaining_mode(display.remaining_mode);

    tracing::debug!(now = %session.now(), "starting interactive view");

    TuiRenderer::new(session, display).run()
}
