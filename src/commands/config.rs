use crate::cli::ConfigActions;
use crate::config::{get_config_path, Config};
use anyhow::Result;
use std::path::Path;

pub fn handle_config_command(action: &ConfigActions, explicit: Option<&Path>) -> Result<()> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => get_config_path()?,
    };

    match action {
        ConfigActions::Show => {
            let config = match explicit {
                Some(path) => Config::load_from(path)?,
                None => Config::load()?,
            };
            println!("# {}", path.display());
            print!("{}", toml::to_string_pretty(&config)?);
        }
        ConfigActions::Path => println!("{}", path.display()),
    }
    Ok(())
}
