use crate::commands::{CmdMessage, CmdResult};
use crate::config::KnowhowConfig;
use crate::error::Result;
use std::path::Path;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(config_dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    match action {
        ConfigAction::ShowAll => {
            let config = KnowhowConfig::load(config_dir)?;
            Ok(CmdResult::default().with_config(config))
        }
        ConfigAction::ShowKey(key) => {
            let config = KnowhowConfig::load(config_dir)?;
            let mut result = CmdResult::default();
            match key.as_str() {
                "data-file" => result.add_message(CmdMessage::info(config.get_data_file())),
                other => {
                    result.add_message(CmdMessage::error(format!("Unknown config key: {}", other)))
                }
            }
            Ok(result)
        }
        ConfigAction::Set(key, value) => {
            let mut config = KnowhowConfig::load(config_dir)?;
            let mut result = CmdResult::default();
            match key.as_str() {
                "data-file" => {
                    config.set_data_file(&value);
                    config.save(config_dir)?;
                    result.add_message(CmdMessage::success(format!(
                        "data-file set to {}",
                        config.get_data_file()
                    )));
                    result.config = Some(config);
                }
                other => {
                    result.add_message(CmdMessage::error(format!("Unknown config key: {}", other)))
                }
            }
            Ok(result)
        }
    }
}
