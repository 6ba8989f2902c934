use anyhow::Result;
use owo_colors::OwoColorize;
use serde::Serialize;

use super::traits::Renderer;
use crate::presentation::view_models::{ColorMode, CommandResultViewModel, CreateView};

pub struct ConsoleRenderer {
    json_mode: bool,
    mode: ColorMode,
}

impl ConsoleRenderer {
    pub fn new(json_mode: bool, mode: ColorMode) -> Self {
        Self { json_mode, mode }
    }
}

impl Renderer for ConsoleRenderer {
    fn render<T>(&self, result: CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + CreateView,
    {
        if self.json_mode {
            println!("{}", serde_json::to_string_pretty(&result)?);
            return Ok(());
        }

        if let Some(badge) = &result.badge {
            match self.mode {
                ColorMode::Plain => println!("{} {}", badge.icon(), badge.label),
                ColorMode::Ansi => println!("{} {}", badge.icon(), badge.label.bold()),
            }
            println!();
        }

        print!("{}", result.content.create_view(self.mode));

        if !result.suggestions.is_empty() {
            match self.mode {
                ColorMode::Plain => println!("\nTips:"),
                ColorMode::Ansi => println!("\n{}", "💡 Tips:".yellow().bold()),
            }
            for tip in &result.suggestions {
                print!("  • {}", tip.description);
                if let Some(cmd) = &tip.command {
                    match self.mode {
                        ColorMode::Plain => print!(": {}", cmd),
                        ColorMode::Ansi => print!(": {}", cmd.cyan()),
                    }
                }
                println!();
            }
        }

        Ok(())
    }
}
