use anyhow::{Context, Result, anyhow};

const DEFAULT_MAX_CONNECTIONS: u32 = 10;
const DEFAULT_SHUTDOWN_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub run_migrations: bool,
    pub db_max_connections: u32,
    pub card: ServiceConfig,
}

impl Config {
    pub fn init() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup; `init` uses the
    /// process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").context("Missing env: DATABASE_URL")?;
        let run_migrations_str =
            lookup("RUN_MIGRATIONS").context("Missing env: RUN_MIGRATIONS")?;

        let run_migrations = match run_migrations_str.as_str() {
            "true" => true,
            "false" => false,
            other => {
                return Err(anyhow!(
                    "RUN_MIGRATIONS must be 'true' or 'false', got '{other}'",
                ));
            }
        };

        let db_max_connections = match lookup("DB_MAX_CONNECTIONS") {
            Some(value) => value
                .parse::<u32>()
                .context("DB_MAX_CONNECTIONS must be a valid u32 integer")?,
            None => DEFAULT_MAX_CONNECTIONS,
        };

        Ok(Self {
            database_url,
            run_migrations,
            db_max_connections,
            card: ServiceConfig::from_lookup("CARD", &lookup)?,
        })
    }
}

#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub shutdown_timeout_secs: u64,
}

impl ServiceConfig {
    fn from_lookup<F>(prefix: &str, lookup: &F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let key = format!("{prefix}_SHUTDOWN_TIMEOUT_SECS");

        let shutdown_timeout_secs = match lookup(&key) {
            Some(value) => value
                .parse::<u64>()
                .context(format!("{key} must be a valid u64 integer"))?,
            None => DEFAULT_SHUTDOWN_TIMEOUT_SECS,
        };

        Ok(Self {
            shutdown_timeout_secs,
        })
    }
}
