use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

/// Site layout and rendering settings, read from `mdsite.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Markdown sources; each `.md` file becomes one page.
    pub content_path: PathBuf,
    /// Assets copied verbatim into the output directory.
    pub static_path: PathBuf,
    /// Generated site. Wiped and rebuilt on every build.
    pub output_path: PathBuf,
    /// HTML template with `{{ Title }}` and `{{ Content }}` placeholders.
    pub template_path: PathBuf,
    /// Escape attribute values when rendering.
    pub escape_attributes: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            content_path: PathBuf::from("content"),
            static_path: PathBuf::from("static"),
            output_path: PathBuf::from("public"),
            template_path: PathBuf::from("template.html"),
            escape_attributes: false,
        }
    }
}

impl Config {
    pub const FILE_NAME: &'static str = "mdsite.toml";

    /// Loads the config at `config_path`; `Ok(None)` if the file is absent.
    ///
    /// Paths are shell-expanded, then relative ones are resolved against the
    /// directory containing the config file.
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        let base = config_path.parent().unwrap_or(Path::new(""));
        Ok(Some(config.resolve_paths(base)))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        Self::load_from_path(Self::config_path())
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        PathBuf::from(Self::FILE_NAME)
    }

    /// Expands every path and anchors relative ones at `base`.
    pub fn resolve_paths(self, base: &Path) -> Self {
        let resolve = |path: PathBuf| {
            let expanded = Self::expand_path(&path).unwrap_or(path);
            if expanded.is_relative() {
                base.join(expanded)
            } else {
                expanded
            }
        };
        Self {
            content_path: resolve(self.content_path),
            static_path: resolve(self.static_path),
            output_path: resolve(self.output_path),
            template_path: resolve(self.template_path),
            escape_attributes: self.escape_attributes,
        }
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}
