use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::info;

use crate::error::{Result, SiteError};

const DEFAULT_CONFIG_FILE: &str = "site.toml";

/// Site-wide settings. Built once at startup and shared read-only.
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct Config {
    pub site_url: String,
    pub site_name: String,
    pub contact_email: String,
    pub feed_email: String,
    pub content_dir: PathBuf,
    pub port: u16,
    pub default_image: String,
    pub cache_max_age_secs: u32,
    pub is_development: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            site_url: "https://www.mccaigs.ai".to_string(),
            site_name: "McCaigs AI".to_string(),
            contact_email: "info@mccaigs.ai".to_string(),
            feed_email: "hello@mccaigs.ai".to_string(),
            content_dir: PathBuf::from("content"),
            port: 8080,
            default_image: "/assets/hero-dna-binary-light.svg".to_string(),
            cache_max_age_secs: 3600,
            is_development: false,
        }
    }
}

impl Config {
    /// Reads `SITE_CONFIG` (or `site.toml` when present), then applies the
    /// `SITE_URL`, `CONTENT_DIR`, `PORT` and `RUST_ENV` overrides.
    pub fn load() -> Result<Config> {
        let path = std::env::var("SITE_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_FILE.into());
        let mut config = Config::from_file(Path::new(&path))?;
        config.apply_env(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Config> {
        if !path.exists() {
            info!(path = %path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }
        let raw = std::fs::read_to_string(path).map_err(|source| SiteError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Config::from_toml(&raw)
    }

    pub fn from_toml(raw: &str) -> Result<Config> {
        toml::from_str(raw).map_err(|e| SiteError::Config(e.to_string()))
    }

    fn apply_env(&mut self, var: impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(url) = var("SITE_URL") {
            self.site_url = url;
        }
        if let Some(dir) = var("CONTENT_DIR") {
            self.content_dir = PathBuf::from(dir);
        }
        if let Some(port) = var("PORT") {
            self.port = port
                .parse()
                .map_err(|_| SiteError::Config(format!("PORT must be a port number, got {port:?}")))?;
        }
        if let Some(env) = var("RUST_ENV") {
            self.is_development = env == "development";
        }
        Ok(())
    }

    pub fn absolute_url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.site_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    pub fn posts_dir(&self) -> PathBuf {
        self.content_dir.join("blog")
    }

    pub fn legal_dir(&self) -> PathBuf {
        self.content_dir.join("legal")
    }

    pub fn static_dir(&self) -> PathBuf {
        self.content_dir.join("static")
    }

    pub fn cache_control(&self) -> String {
        format!(
            "public, max-age={0}, s-maxage={0}",
            self.cache_max_age_secs
        )
    }
}
