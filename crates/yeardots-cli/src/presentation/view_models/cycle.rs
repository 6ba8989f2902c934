use serde::Serialize;
use yeardots_engine::Heading;
use yeardots_types::Granularity;

use super::{ColorMode, CreateView, RemainingViewModel};

#[derive(Debug, Serialize)]
pub struct CycleViewModel {
    pub steps: Vec<CycleStepViewModel>,
}

#[derive(Debug, Serialize)]
pub struct CycleStepViewModel {
    pub step: u16,
    pub granularity: Granularity,
    pub heading: Heading,
    pub remaining: RemainingViewModel,
}

impl CreateView for CycleViewModel {
    fn create_view<'a>(&'a self, mode: ColorMode) -> Box<dyn std::fmt::Display + 'a> {
        use crate::presentation::views::CycleView;
        Box::new(CycleView::new(self, mode))
    }
}
