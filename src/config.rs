use std::{env, path::PathBuf, time::Duration};

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Directory holding the persisted blobs. `None` keeps state in memory.
    pub store_dir: Option<PathBuf>,
    pub base_path: String,
    pub checkpoint_interval: Option<Duration>,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(3000);
        let store_dir = env::var("STORE_DIR")
            .ok()
            .filter(|dir| !dir.is_empty())
            .map(PathBuf::from);
        let base_path = normalize_base_path(&env::var("BASE_PATH").unwrap_or_default());
        let checkpoint_interval = match env::var("CHECKPOINT_SECS") {
            Ok(raw) => {
                let secs: u64 = raw
                    .parse()
                    .map_err(|e| anyhow::anyhow!("invalid CHECKPOINT_SECS {raw:?}: {e}"))?;
                (secs > 0).then(|| Duration::from_secs(secs))
            }
            Err(_) => None,
        };
        Ok(Self {
            host,
            port,
            store_dir,
            base_path,
            checkpoint_interval,
        })
    }
}

/// Turns `""`, `"/"`, `"shop/"` and `"/shop"` into `"/"` or `"/shop"`.
pub fn normalize_base_path(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        format!("/{trimmed}")
    }
}
