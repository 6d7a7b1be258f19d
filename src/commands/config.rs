use std::path::Path;

use crate::commands::{CmdMessage, CmdResult};
use crate::config::BlogConfig;
use crate::error::Result;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    Set(String, String),
}

/// Show or change session defaults. Changes are written to disk and take
/// effect when the next session starts.
pub fn run(config_dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    match action {
        ConfigAction::ShowAll => {
            let config = BlogConfig::load(config_dir)?;
            Ok(CmdResult::default().with_config(config))
        }
        ConfigAction::Set(key, value) => {
            let mut result = CmdResult::default();
            let mut config = BlogConfig::load(config_dir)?;

            let parsed: usize = match value.parse() {
                Ok(n) => n,
                Err(_) => {
                    result.add_message(CmdMessage::warning(format!(
                        "Not a number: {}",
                        value
                    )));
                    return Ok(result);
                }
            };

            match key.as_str() {
                "seed-posts" => config.seed_posts = parsed,
                "archive-posts" => config.archive_posts = parsed,
                other => {
                    result.add_message(CmdMessage::warning(format!(
                        "Unknown config key: {}",
                        other
                    )));
                    return Ok(result);
                }
            }

            config.save(config_dir)?;
            result.add_message(CmdMessage::success(format!(
                "{} = {} (takes effect next session)",
                key, parsed
            )));
            Ok(result.with_config(config))
        }
    }
}
