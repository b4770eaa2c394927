pub mod config;
pub mod details;
pub mod prompts;
pub mod search;
pub mod shell;
pub mod watchlist;

use color_eyre::eyre::eyre;
use color_eyre::Result;
use cinelist_catalog::OmdbClient;
use cinelist_config::{Config, PathManager};
use cinelist_core::{Controller, Directory, FileBackend, WatchlistStore};

/// Load the config file (or defaults) with the env override applied
pub fn load_config(path_manager: &PathManager) -> Result<Config> {
    let config_file = path_manager.config_file();
    Config::load_or_default(&config_file)
        .map_err(|e| eyre!("Failed to load config from {}: {}", config_file.display(), e))
}

pub fn open_store(config: &Config, path_manager: &PathManager) -> Result<WatchlistStore<FileBackend>> {
    let data_dir = config.data_dir(path_manager);
    tracing::debug!("Opening watchlist in {}", data_dir.display());
    WatchlistStore::load(FileBackend::new(data_dir))
        .map_err(|e| eyre!("Failed to load watchlist: {}", e))
}

pub fn open_directory(config: &Config) -> Result<Directory<OmdbClient>> {
    config.validate().map_err(|e| eyre!("{}", e))?;
    let client = OmdbClient::from_config(&config.omdb).map_err(|e| eyre!("{}", e))?;
    Ok(Directory::new(client))
}

pub fn build_controller() -> Result<(Controller<OmdbClient, FileBackend>, Config)> {
    let path_manager = PathManager::default();
    let config = load_config(&path_manager)?;
    let directory = open_directory(&config)?;
    let store = open_store(&config, &path_manager)?;
    let controller = Controller::new(directory, store, config.display.placeholder_poster.clone());
    Ok((controller, config))
}
