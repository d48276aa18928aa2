use anyhow::anyhow;
use dotenv::dotenv;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Key-value backend the journal persists into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    Memory,
    File,
    Redis,
}

impl FromStr for StorageBackend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "memory" => Ok(StorageBackend::Memory),
            "file" => Ok(StorageBackend::File),
            "redis" => Ok(StorageBackend::Redis),
            other => Err(anyhow!("Unknown storage backend: {}", other)),
        }
    }
}

impl fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StorageBackend::Memory => "memory",
            StorageBackend::File => "file",
            StorageBackend::Redis => "redis",
        };
        write!(f, "{}", name)
    }
}

pub struct Config {
    pub storage_backend: StorageBackend,
    pub storage_dir: PathBuf,
    pub redis_url: String,
    pub storage_namespace: String,
    pub default_account_balance: f64,
}

impl Config {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenv().ok();

        Self::from_vars(|key| std::env::var(key).ok())
    }

    fn from_vars<F>(var: F) -> Result<Self, anyhow::Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let storage_backend = match var("STORAGE_BACKEND") {
            Some(value) => value.parse()?,
            None => StorageBackend::File,
        };

        let default_account_balance = match var("DEFAULT_ACCOUNT_BALANCE") {
            Some(value) => {
                let balance: f64 = value
                    .trim()
                    .parse()
                    .map_err(|e| anyhow!("Invalid DEFAULT_ACCOUNT_BALANCE {:?}: {}", value, e))?;
                if !balance.is_finite() || balance < 0.0 {
                    return Err(anyhow!(
                        "DEFAULT_ACCOUNT_BALANCE must be a non-negative number, got {}",
                        balance
                    ));
                }
                balance
            }
            None => 10_000.0,
        };

        let config = Config {
            storage_backend,
            storage_dir: var("STORAGE_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("./tradeos_data")),
            redis_url: var("REDIS_URL").unwrap_or_else(|| "redis://localhost:6379".to_string()),
            storage_namespace: var("STORAGE_NAMESPACE").unwrap_or_else(|| "tradeos".to_string()),
            default_account_balance,
        };

        tracing::debug!(
            backend = %config.storage_backend,
            namespace = %config.storage_namespace,
            "Loaded journal configuration"
        );

        Ok(config)
    }
}
