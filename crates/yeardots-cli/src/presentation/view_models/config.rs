use serde::Serialize;

use super::{ColorMode, CreateView};
use crate::config::Config;

#[derive(Debug, Serialize)]
pub struct ConfigViewModel {
    pub path: String,
    pub exists: bool,
    pub config: Config,
}

#[derive(Debug, Serialize)]
pub struct ConfigInitViewModel {
    pub path: String,
    pub overwritten: bool,
}

#[derive(Debug, Serialize)]
pub struct ConfigPathViewModel {
    pub path: String,
}

impl CreateView for ConfigViewModel {
    fn create_view<'a>(&'a self, mode: ColorMode) -> Box<dyn std::fmt::Display + 'a> {
        use crate::presentation::views::ConfigView;
        Box::new(ConfigView::new(self, mode))
    }
}

impl CreateView for ConfigInitViewModel {
    fn create_view<'a>(&'a self, _mode: ColorMode) -> Box<dyn std::fmt::Display + 'a> {
        use crate::presentation::views::ConfigInitView;
        Box::new(ConfigInitView::new(self))
    }
}

impl CreateView for ConfigPathViewModel {
    fn create_view<'a>(&'a self, _mode: ColorMode) -> Box<dyn std::fmt::Display + 'a> {
        use crate::presentation::views::ConfigPathView;
        Box::new(ConfigPathView::new(self))
    }
}
