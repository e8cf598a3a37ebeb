use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Global configuration loaded from `~/.config/shipdex/config.toml`.
///
/// Every field has a default, so a partial file only overrides what it names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShipdexConfig {
    /// First page of the paginated starship list.
    pub catalog_url: String,
    /// MediaWiki `api.php` endpoint used for page images and full-text search.
    pub wiki_api_url: String,
    /// Databank content base; a slug is appended to form the page URL.
    pub databank_base_url: String,
    /// Where `shipdex resolve` writes the name -> image mapping.
    pub output_path: PathBuf,
    /// User-Agent sent with every request.
    pub user_agent: String,
    /// Connect timeout per request, in seconds.
    pub connect_timeout_secs: u64,
    /// Total timeout per request, in seconds.
    pub request_timeout_secs: u64,
    /// Results taken from each wiki search query.
    pub search_limit: usize,
    /// Requested thumbnail width for wiki page images.
    pub thumb_size: u32,
    /// Entities resolved concurrently (1 = strictly sequential).
    pub jobs: usize,
}

impl Default for ShipdexConfig {
    fn default() -> Self {
        Self {
            catalog_url: "https://swapi.dev/api/starships/".to_string(),
            wiki_api_url: "https://starwars.fandom.com/api.php".to_string(),
            databank_base_url: "https://www.starwars.com/databank/".to_string(),
            output_path: PathBuf::from("public/starship-images.json"),
            user_agent: format!("shipdex/{} (image-mapper)", env!("CARGO_PKG_VERSION")),
            connect_timeout_secs: 15,
            request_timeout_secs: 30,
            search_limit: 5,
            thumb_size: 900,
            jobs: 1,
        }
    }
}

impl ShipdexConfig {
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("shipdex")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<ShipdexConfig> {
    load_or_init_at(&config_path()?)
}

/// Same as [`load_or_init`] but at an explicit path.
pub fn load_or_init_at(path: &Path) -> Result<ShipdexConfig> {
    if !path.exists() {
        let default_cfg = ShipdexConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml).with_context(|| format!("write config: {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data =
        fs::read_to_string(path).with_context(|| format!("read config: {}", path.display()))?;
    let cfg: ShipdexConfig =
        toml::from_str(&data).with_context(|| format!("parse config: {}", path.display()))?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = ShipdexConfig::default();
        assert_eq!(cfg.catalog_url, "https://swapi.dev/api/starships/");
        assert_eq!(cfg.search_limit, 5);
        assert_eq!(cfg.thumb_size, 900);
        assert_eq!(cfg.jobs, 1);
        assert_eq!(cfg.request_timeout(), Duration::from_secs(30));
        assert!(cfg.user_agent.starts_with("shipdex/"));
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = ShipdexConfig::default();
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: ShipdexConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed, cfg);
    }

    #[test]
    fn config_toml_partial_fills_defaults() {
        let toml = r#"
            jobs = 4
            search_limit = 3
            output_path = "out/images.json"
        "#;
        let cfg: ShipdexConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.jobs, 4);
        assert_eq!(cfg.search_limit, 3);
        assert_eq!(cfg.output_path, PathBuf::from("out/images.json"));
        assert_eq!(cfg.wiki_api_url, ShipdexConfig::default().wiki_api_url);
        assert_eq!(cfg.connect_timeout_secs, 15);
    }

    #[test]
    fn load_or_init_creates_then_reads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let created = load_or_init_at(&path).unwrap();
        assert!(path.exists());
        assert_eq!(created, ShipdexConfig::default());

        std::fs::write(&path, "request_timeout_secs = 5\n").unwrap();
        let loaded = load_or_init_at(&path).unwrap();
        assert_eq!(loaded.request_timeout(), Duration::from_secs(5));
    }

    #[test]
    fn load_rejects_invalid_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "jobs = \"many\"").unwrap();
        assert!(load_or_init_at(&path).is_err());
    }
}
