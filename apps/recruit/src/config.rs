use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{bail, Context, Result};

pub const DEFAULT_API_URL: &str = "http://localhost:8000/api";

/// Which `RecruitmentApi` implementation the front-end talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendKind {
    Http,
    Fake,
}

impl FromStr for BackendKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "http" => Ok(BackendKind::Http),
            "fake" => Ok(BackendKind::Fake),
            other => bail!("unknown backend '{other}', expected 'http' or 'fake'"),
        }
    }
}

/// Application configuration loaded from environment variables.
/// Every setting has a default; only malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_url: String,
    pub backend: BackendKind,
    pub export_dir: PathBuf,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let backend = lookup("RECRUIT_BACKEND")
            .map(|v| v.parse::<BackendKind>())
            .transpose()
            .context("RECRUIT_BACKEND must be 'http' or 'fake'")?
            .unwrap_or(BackendKind::Http);

        Ok(Config {
            api_url: lookup("RECRUIT_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            backend,
            export_dir: lookup("RECRUIT_EXPORT_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(".")),
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}
