use serde::Deserialize;
use std::env;

// Container for all runtime settings
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub app: AppConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub environment: String,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Self {
        Config {
            app: AppConfig {
                host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: env::var("PORT")
                    .unwrap_or_else(|_| "8000".to_string())
                    .parse()
                    .expect("PORT must be a valid number"),
                environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
                rust_log: env::var("RUST_LOG")
                    .unwrap_or_else(|_| "movie_booking=debug,tower_http=debug".to_string()),
            },
        }
    }
}
