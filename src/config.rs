use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use url::Url;

pub const DEFAULT_API_URL: &str = "http://localhost:8000";

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the analysis API, without the `/api/v1/...` suffix.
    pub api_url: Option<String>,
}

fn config_dir() -> Result<PathBuf> {
    Ok(dirs::config_dir()
        .ok_or_else(|| anyhow!("no config dir available"))?
        .join("mail_insights"))
}

pub fn config_path() -> Result<PathBuf> {
    let mut p = config_dir()?;
    fs::create_dir_all(&p)?;
    p.push("config.toml");
    Ok(p)
}

pub fn load_config() -> Result<Config> {
    load_config_from(&config_path()?)
}

/// Reads `path`, writing a template there first if it does not exist.
pub fn load_config_from(path: &Path) -> Result<Config> {
    if !path.exists() {
        let sample = Config {
            api_url: Some(DEFAULT_API_URL.to_string()),
        };
        let tom = toml::to_string_pretty(&sample)?;
        fs::write(path, tom)
            .with_context(|| format!("writing template config to {}", path.display()))?;
        log::info!("Created template config at {}", path.display());
        return Ok(sample);
    }
    let s = fs::read_to_string(path)?;
    let cfg: Config =
        toml::from_str(&s).with_context(|| format!("parsing {}", path.display()))?;
    Ok(cfg)
}

/// Picks the API base URL: explicit override (flag or `NEXT_PUBLIC_API_URL`),
/// then the config file, then [`DEFAULT_API_URL`].
pub fn resolve_api_url(cfg: &Config, override_url: Option<&str>) -> Result<String> {
    let raw = override_url
        .filter(|s| !s.trim().is_empty())
        .or(cfg.api_url.as_deref())
        .unwrap_or(DEFAULT_API_URL)
        .trim();

    let parsed = Url::parse(raw).map_err(|e| anyhow!("Invalid api_url '{raw}': {e}"))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(anyhow!("api_url must be http or https: {raw}"));
    }

    Ok(raw.trim_end_matches('/').to_string())
}
