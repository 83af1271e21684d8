use anyhow::{Result, anyhow};
use shared::config::Config;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub database_url: String,
    pub max_connections: u32,
    pub run_migrations: bool,
    pub shutdown_timeout: Duration,
}

impl ServerConfig {
    pub fn from_config(config: &Config) -> Result<Self> {
        if config.db_max_connections == 0 {
            return Err(anyhow!("DB_MAX_CONNECTIONS must be greater than 0"));
        }

        Ok(Self {
            database_url: config.database_url.clone(),
            max_connections: config.db_max_connections,
            run_migrations: config.run_migrations,
            shutdown_timeout: Duration::from_secs(config.card.shutdown_timeout_secs),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::config::ServiceConfig;

    fn config(db_max_connections: u32) -> Config {
        Config {
            database_url: "postgres://localhost/cards".into(),
            run_migrations: true,
            db_max_connections,
            card: ServiceConfig {
                shutdown_timeout_secs: 12,
            },
        }
    }

    #[test]
    fn derives_server_settings() {
        let server = ServerConfig::from_config(&config(8)).unwrap();

        assert_eq!(server.max_connections, 8);
        assert!(server.run_migrations);
        assert_eq!(server.shutdown_timeout, Duration::from_secs(12));
    }

    #[test]
    fn rejects_empty_pool() {
        assert!(ServerConfig::from_config(&config(0)).is_err());
    }
}
