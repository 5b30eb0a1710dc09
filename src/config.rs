use dotenvy::dotenv;
use serde::Deserialize;
use std::env;
use std::path::PathBuf;

#[derive(Deserialize, Debug, Clone)]
pub struct Config {
    pub app_name: String,
    pub deployment: String,
    pub data_dir: PathBuf,
    pub bind_addr: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok(); // Load from .env file if available

        Config {
            app_name: env::var("APP_NAME").unwrap_or_else(|_| "Cuca Fresca".to_string()),
            deployment: env::var("DEPLOYMENT").unwrap_or_else(|_| "local".to_string()),
            data_dir: env::var("DATA_DIR").map_or_else(|_| PathBuf::from("."), PathBuf::from),
            bind_addr: env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string()),
        }
    }

    #[cfg(test)]
    pub fn for_tests() -> Self {
        Config {
            app_name: "nursery-stock-api-test".to_string(),
            deployment: "test".to_string(),
            data_dir: PathBuf::from("."),
            bind_addr: "127.0.0.1:0".to_string(),
        }
    }
}
