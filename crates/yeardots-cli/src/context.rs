use crate::config::{ColorChoice, Config, resolve_config_path};
use crate::presentation::view_models::{ColorMode, CommandResultViewModel, CreateView};
use crate::presentation::{ConsoleRenderer, Renderer};
use crate::types::OutputFormat;
use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use once_cell::sync::OnceCell;
use serde::Serialize;
use std::path::{Path, PathBuf};
use yeardots_types::{Clock, FixedClock, SystemClock};

pub struct ExecutionContext {
    config_path: PathBuf,
    config: OnceCell<Config>,
    clock: Box<dyn Clock>,
    pub format: OutputFormat,
}

impl ExecutionContext {
    pub fn new(
        config_path: Option<String>,
        now: Option<String>,
        format: OutputFormat,
    ) -> Result<Self> {
        let config_path = resolve_config_path(config_path.as_deref())?;

        let clock: Box<dyn Clock> = match now {
            Some(instant) => {
                let fixed: FixedClock = instant.parse()?;
                tracing::debug!(now = %fixed.now(), "clock pinned");
                Box::new(fixed)
            }
            None => Box::new(SystemClock),
        };

        Ok(Self {
            config_path,
            config: OnceCell::new(),
            clock,
            format,
        })
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn config(&self) -> Result<&Config> {
        self.config.get_or_try_init(|| {
            if !self.config_path.exists() {
                tracing::debug!(path = %self.config_path.display(), "no config file, using defaults");
            }
            Config::load_from(&self.config_path)
                .with_context(|| format!("failed to load {}", self.config_path.display()))
        })
    }

    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }

    pub fn json_mode(&self) -> bool {
        self.format == OutputFormat::Json
    }

    /// Whether console output should carry ANSI colors.
    pub fn use_color(&self) -> Result<bool> {
        let choice = self.config()?.display.color;
        Ok(match choice {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => {
                std::env::var_os("NO_COLOR").is_none() && std::io::stdout().is_terminal()
            }
        })
    }

    /// Render a view model using the configured format and color choice
    pub fn render<T>(&self, view_model: CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + CreateView,
    {
        let use_color = !self.json_mode()
            && self.use_color().unwrap_or_else(|e| {
                tracing::warn!("falling back to plain output: {:#}", e);
                false
            });
        let mode = ColorMode::from_flag(use_color);
        ConsoleRenderer::new(self.json_mode(), mode).render(view_model)
    }
}
