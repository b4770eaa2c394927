use super::prompts;
use crate::output::{mask_secret, Output};
use crate::ConfigCommands;
use cinelist_config::{Config, PathManager, API_KEY_ENV};
use color_eyre::eyre::eyre;
use color_eyre::Result;
use comfy_table::{modifiers, presets, Attribute, Cell, Color, Table};
use serde_json::json;

pub fn run_config(cmd: ConfigCommands, output: &Output) -> Result<()> {
    match cmd {
        ConfigCommands::Show { full } => show_config(full, output),
        ConfigCommands::SetKey { key } => set_api_key(key, output),
        ConfigCommands::Path => show_paths(output),
    }
}

fn show_config(full: bool, output: &Output) -> Result<()> {
    let path_manager = PathManager::default();
    let config_file = path_manager.config_file();
    let config = super::load_config(&path_manager)?;

    let key_display = if full {
        config.omdb.api_key.clone()
    } else {
        mask_secret(&config.omdb.api_key)
    };
    let key_source = if std::env::var(API_KEY_ENV).map(|v| !v.trim().is_empty()).unwrap_or(false) {
        API_KEY_ENV.to_string()
    } else if config_file.exists() {
        "config file".to_string()
    } else {
        "not set".to_string()
    };
    let data_dir = config.data_dir(&path_manager);

    if !output.is_human() {
        output.json(&json!({
            "config_file": config_file.display().to_string(),
            "omdb": {
                "api_key": key_display,
                "api_key_source": key_source,
                "base_url": config.omdb.base_url,
            },
            "display": { "placeholder_poster": config.display.placeholder_poster },
            "storage": { "data_dir": data_dir.display().to_string() },
        }));
        return Ok(());
    }
    if output.is_quiet() {
        return Ok(());
    }

    if !config_file.exists() {
        output.warn(format!("Configuration file not found at: {} (using defaults)", config_file.display()));
    }

    let mut table = Table::new();
    table.set_header(vec![
        Cell::new("Setting").fg(Color::Cyan).add_attribute(Attribute::Bold),
        Cell::new("Value").fg(Color::Cyan).add_attribute(Attribute::Bold),
    ]);
    table.add_row(vec![Cell::new("Config file"), Cell::new(config_file.display())]);
    table.add_row(vec![Cell::new("OMDb api key"), Cell::new(format!("{} ({})", key_display, key_source))]);
    table.add_row(vec![Cell::new("OMDb base url"), Cell::new(&config.omdb.base_url)]);
    table.add_row(vec![Cell::new("Placeholder poster"), Cell::new(&config.display.placeholder_poster)]);
    table.add_row(vec![Cell::new("Data directory"), Cell::new(data_dir.display())]);
    table.load_preset(presets::UTF8_FULL);
    table.apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    println!("{}", table);

    if !config.is_api_key_configured() {
        output.warn("No api key configured. Run 'cinelist config set-key' to add one.");
    }
    Ok(())
}

fn set_api_key(key_arg: Option<String>, output: &Output) -> Result<()> {
    let path_manager = PathManager::default();
    path_manager
        .ensure_directories()
        .map_err(|e| eyre!("Failed to create configuration directories: {}", e))?;

    let config_file = path_manager.config_file();
    // Read the file itself, not the env-overridden view, so the env key is never written out
    let mut config = if config_file.exists() {
        Config::load_from_file(&config_file)
            .map_err(|e| eyre!("Failed to load config from {}: {}", config_file.display(), e))?
    } else {
        Config::default()
    };

    let key = match key_arg {
        Some(key) => key,
        None => {
            output.info("Get a free OMDb api key at https://www.omdbapi.com/apikey.aspx");
            prompts::prompt_secret("OMDb api key")?
        }
    };
    let key = key.trim().to_string();
    if key.is_empty() {
        return Err(eyre!("Api key cannot be empty"));
    }

    config.omdb.api_key = key;
    config
        .save_to_file(&config_file)
        .map_err(|e| eyre!("Failed to save config to {}: {}", config_file.display(), e))?;

    output.success(format!("Saved api key to {}", config_file.display()));
    Ok(())
}

fn show_paths(output: &Output) -> Result<()> {
    let path_manager = PathManager::default();
    let config = super::load_config(&path_manager)?;

    if output.is_human() {
        output.info(format!("config: {}", path_manager.config_file().display()));
        output.info(format!("data:   {}", config.data_dir(&path_manager).display()));
        output.info(format!("logs:   {}", path_manager.log_file().display()));
    } else {
        output.json(&json!({
            "config": path_manager.config_file().display().to_string(),
            "data": config.data_dir(&path_manager).display().to_string(),
            "logs": path_manager.log_file().display().to_string(),
        }));
    }
    Ok(())
}
