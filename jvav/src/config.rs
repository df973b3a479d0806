use anyhow::Context;
use directories::ProjectDirs;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "repl.toml";

/// REPL settings read from TOML. Every key is optional.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReplConfig {
    pub prompt: String,
    /// Shown while a submission spans several lines.
    pub continuation_prompt: String,
    pub show_tree: bool,
    pub show_program: bool,
    /// `tracing` filter directives, used when `JVAV_LOG` is unset.
    pub log_filter: Option<String>,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            prompt: "» ".to_string(),
            continuation_prompt: "· ".to_string(),
            show_tree: false,
            show_program: false,
            log_filter: None,
        }
    }
}

impl ReplConfig {
    /// Reads `path`, or the per-user config file when no path is given.
    /// Only the per-user file may be absent.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        if let Some(path) = path {
            return Self::read(path);
        }

        match Self::default_path() {
            Some(path) if path.exists() => Self::read(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("dev", "Jvav", "jvav").map(|dirs| dirs.config_dir().join(CONFIG_FILE))
    }

    fn read(path: &Path) -> anyhow::Result<Self> {
        let data = fs::read_to_string(path)
            .with_context(|| format!("reading configuration from {}", path.display()))?;

        Self::from_toml(&data).with_context(|| format!("parsing configuration {}", path.display()))
    }

    pub fn from_toml(data: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(data)?)
    }
}
