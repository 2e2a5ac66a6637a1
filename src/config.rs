use reqwest::Url;

use crate::errors::AppError;

pub const DEFAULT_CATALOG_URL: &str = "https://mockend.up.railway.app/api/products";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub catalog_url: Url,
}

impl AppConfig {
    /// Reads `HOST`, `PORT` and `CATALOG_URL` from the process environment.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string());
        let port = lookup("PORT")
            .unwrap_or_else(|| "8080".to_string())
            .parse::<u16>()
            .map_err(|e| AppError::Config(format!("Invalid PORT: {}", e)))?;
        let raw_url = lookup("CATALOG_URL").unwrap_or_else(|| DEFAULT_CATALOG_URL.to_string());
        let catalog_url = Url::parse(&raw_url)
            .map_err(|e| AppError::Config(format!("Invalid CATALOG_URL '{}': {}", raw_url, e)))?;

        Ok(Self {
            host,
            port,
            catalog_url,
        })
    }
}
