use crate::error::{config::ConfigError, DataError};

pub struct Config {
    pub database_url: String,
}

impl Config {
    /// Loads configuration from the environment.
    ///
    /// Reads a `.env` file if one is present, then requires `DATABASE_URL`
    /// to be set.
    pub fn from_env() -> Result<Self, DataError> {
        dotenvy::dotenv().ok();

        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
        })
    }
}
