use owo_colors::OwoColorize;
use std::fmt;

use crate::presentation::view_models::{
    ColorMode, ConfigInitViewModel, ConfigPathViewModel, ConfigViewModel,
};

pub struct ConfigView<'a> {
    data: &'a ConfigViewModel,
    mode: ColorMode,
}

impl<'a> ConfigView<'a> {
    pub fn new(data: &'a ConfigViewModel, mode: ColorMode) -> Self {
        Self { data, mode }
    }
}

impl<'a> fmt::Display for ConfigView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let status = if self.data.exists { "" } else { " (not found)" };
        match self.mode {
            ColorMode::Plain => writeln!(f, "Config file: {}{}", self.data.path, status)?,
            ColorMode::Ansi => writeln!(
                f,
                "Config file: {}{}",
                self.data.path.cyan(),
                status.yellow()
            )?,
        }
        writeln!(f)?;

        let body = toml::to_string_pretty(&self.data.config).map_err(|_| fmt::Error)?;
        write!(f, "{}", body)
    }
}

pub struct ConfigInitView<'a> {
    data: &'a ConfigInitViewModel,
}

impl<'a> ConfigInitView<'a> {
    pub fn new(data: &'a ConfigInitViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for ConfigInitView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Edit {} to change the defaults.", self.data.path)
    }
}

pub struct ConfigPathView<'a> {
    data: &'a ConfigPathViewModel,
}

impl<'a> ConfigPathView<'a> {
    pub fn new(data: &'a ConfigPathViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for ConfigPathView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}", self.data.path)
    }
}
