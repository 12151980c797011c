//! Optional `nbgraph.toml` overrides for resource paths and transitions.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::graph::GraphRenderer;
use crate::transition::Transition;

pub const CONFIG_FILE_NAME: &str = "nbgraph.toml";

/// Errors that can occur while loading configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {0}: {1}")]
    ConfigReadError(PathBuf, std::io::Error),

    #[error("Failed to parse config file {0}: {1}")]
    ConfigParseError(PathBuf, toml::de::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub resources: ResourcesConfig,
    pub transition: TransitionConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ResourcesConfig {
    pub script: Option<PathBuf>,
    pub stylesheet: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TransitionConfig {
    pub target: Option<String>,
    pub duration_ms: Option<u64>,
}

impl Config {
    /// Load configuration from an explicit path; the file must exist
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::ConfigReadError(path.to_path_buf(), e))?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| ConfigError::ConfigParseError(path.to_path_buf(), e))?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load `nbgraph.toml` from `dir` if present, otherwise use defaults
    pub fn discover(dir: &Path) -> Result<Self, ConfigError> {
        let path = dir.join(CONFIG_FILE_NAME);
        if !path.exists() {
            log::debug!("No {} in {}, using defaults", CONFIG_FILE_NAME, dir.display());
            return Ok(Self::default());
        }
        Self::load(&path)
    }

    /// Graph renderer with configured paths, falling back to the defaults
    pub fn graph_renderer(&self) -> GraphRenderer {
        let defaults = GraphRenderer::default();
        GraphRenderer::new(
            self.resources
                .script
                .clone()
                .unwrap_or_else(|| defaults.script_path().to_path_buf()),
            self.resources
                .stylesheet
                .clone()
                .unwrap_or_else(|| defaults.stylesheet_path().to_path_buf()),
        )
    }

    pub fn transition(&self) -> Transition {
        let mut transition = Transition::new();
        if let Some(target) = &self.transition.target {
            transition = transition.with_target(target.clone());
        }
        if let Some(duration_ms) = self.transition.duration_ms {
            transition = transition.with_duration(duration_ms);
        }
        transition
    }
}
