use std::path::Path;

use crate::config::Config;
use crate::presentation::view_models::{
    CommandResultViewModel, ConfigInitViewModel, ConfigPathViewModel, ConfigViewModel, Guidance,
    StatusBadge,
};

pub fn present_config(path: &Path, config: &Config) -> CommandResultViewModel<ConfigViewModel> {
    let exists = path.exists();
    let result = CommandResultViewModel::new(ConfigViewModel {
        path: path.display().to_string(),
        exists,
        config: config.clone(),
    });

    if exists {
        result
    } else {
        result
            .with_badge(StatusBadge::info("No config file found, showing defaults"))
            .with_suggestion(
                Guidance::new("Write the defaults to disk to customise them")
                    .with_command("yeardots config init"),
            )
    }
}

pub fn present_config_init(
    path: &Path,
    overwritten: bool,
) -> CommandResultViewModel<ConfigInitViewModel> {
    let label = if overwritten {
        format!("Overwrote config at {}", path.display())
    } else {
        format!("Wrote config to {}", path.display())
    };

    CommandResultViewModel::new(ConfigInitViewModel {
        path: path.display().to_string(),
        overwritten,
    })
    .with_badge(StatusBadge::success(label))
    .with_suggestion(
        Guidance::new("Open the interactive view").with_command("yeardots tui"),
    )
}

pub fn present_config_path(path: &Path) -> CommandResultViewModel<ConfigPathViewModel> {
    CommandResultViewModel::new(ConfigPathViewModel {
        path: path.display().to_string(),
    })
}
