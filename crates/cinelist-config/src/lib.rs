pub mod config;
pub mod paths;

pub use config::{Config, DisplayConfig, OmdbConfig, StorageConfig, API_KEY_ENV, DEFAULT_OMDB_URL, DEFAULT_PLACEHOLDER_POSTER};
pub use paths::{PathManager, base_path_override};
