use serde::Deserialize;
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    /// Directory holding the persisted collections
    /// (`questa_quizzes.json`, `questa_responses.json`).
    pub data_dir: PathBuf,
}

impl StoreConfig {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        StoreConfig {
            data_dir: data_dir.into(),
        }
    }

    pub fn load() -> Result<Self, config::ConfigError> {
        dotenvy::dotenv().ok();

        // Determine environment (defaults to dev)
        let env = env::var("QUESTA_ENV").unwrap_or_else(|_| "dev".to_string());

        // Build configuration from config/*.toml + ENV overrides
        let config_builder = config::Config::builder()
            // Load base config from TOML file
            .add_source(
                config::File::with_name(&format!("config/{}", env)).required(false), // Allow missing config file, fallback to ENV
            )
            // Override with environment variables (prefix: QUESTA_)
            .add_source(config::Environment::with_prefix("QUESTA").separator("__"));

        let settings = config_builder.build()?;

        // Extract values with fallbacks to ENV or defaults
        let data_dir = settings
            .get_string("storage.data_dir")
            .or_else(|_| env::var("QUESTA_DATA_DIR"))
            .unwrap_or_else(|_| "./data".to_string());

        Ok(StoreConfig {
            data_dir: PathBuf::from(data_dir),
        })
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig {
            data_dir: PathBuf::from("./data"),
        }
    }
}
