use std::path::PathBuf;

const DEFAULT_PORT: u16 = 2022;
const DEFAULT_DATABASE_PATH: &str = "data/transit.db";

/// Runtime configuration, sourced from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub database_path: PathBuf,
}

impl Config {
    /// Reads `PORT` and `DATABASE_PATH`, falling back to defaults when a
    /// variable is unset or unparseable.
    pub fn from_env() -> Self {
        let port = std::env::var("PORT")
            .ok()
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        let database_path = std::env::var("DATABASE_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_DATABASE_PATH));

        Self {
            port,
            database_path,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            database_path: PathBuf::from(DEFAULT_DATABASE_PATH),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_points_at_local_database() {
        let config = Config::default();
        assert_eq!(config.port, 2022);
        assert_eq!(config.database_path, PathBuf::from("data/transit.db"));
    }
}
