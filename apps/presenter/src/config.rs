use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context;
use serde::Deserialize;

pub const DEFAULT_CONFIG_FILE: &str = "presenter.toml";
const ENV_PREFIX: &str = "PRESENTER__";

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub deck_path: Option<PathBuf>,
    pub start_slide: usize,
    pub window_width: f32,
    pub window_height: f32,
    pub transition_ms: u64,
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            deck_path: None,
            start_slide: 0,
            window_width: 1280.0,
            window_height: 800.0,
            transition_ms: 500,
            log_filter: "info".into(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileSettings {
    deck_path: Option<PathBuf>,
    start_slide: Option<usize>,
    window_width: Option<f32>,
    window_height: Option<f32>,
    transition_ms: Option<u64>,
    log_filter: Option<String>,
}

impl Settings {
    pub fn apply_file(&mut self, raw: &str) -> anyhow::Result<()> {
        let file: FileSettings = toml::from_str(raw).context("invalid presenter config")?;

        if let Some(v) = file.deck_path {
            self.deck_path = Some(v);
        }
        if let Some(v) = file.start_slide {
            self.start_slide = v;
        }
        if let Some(v) = file.window_width {
            self.window_width = v;
        }
        if let Some(v) = file.window_height {
            self.window_height = v;
        }
        if let Some(v) = file.transition_ms {
            self.transition_ms = v;
        }
        if let Some(v) = file.log_filter {
            self.log_filter = v;
        }

        Ok(())
    }

    /// Applies `PRESENTER__*` overrides. Unparsable numbers keep the current value.
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let var = |key: &str| {
            lookup(&format!("{ENV_PREFIX}{key}")).filter(|value| !value.trim().is_empty())
        };

        if let Some(v) = var("DECK_PATH") {
            self.deck_path = Some(PathBuf::from(v));
        }
        if let Some(v) = var("START_SLIDE") {
            if let Ok(parsed) = v.trim().parse::<usize>() {
                self.start_slide = parsed;
            }
        }
        if let Some(v) = var("TRANSITION_MS") {
            if let Ok(parsed) = v.trim().parse::<u64>() {
                self.transition_ms = parsed;
            }
        }
        if let Some(v) = var("LOG_FILTER") {
            self.log_filter = v;
        }
    }

    pub fn window_size(&self) -> [f32; 2] {
        [self.window_width.max(640.0), self.window_height.max(480.0)]
    }
}

/// Defaults, then the config file, then the environment.
///
/// An explicit `config_path` must exist; the default `presenter.toml` is optional.
pub fn load_settings(config_path: Option<&Path>) -> anyhow::Result<Settings> {
    let mut settings = Settings::default();

    let (path, required) = match config_path {
        Some(path) => (path.to_path_buf(), true),
        None => (PathBuf::from(DEFAULT_CONFIG_FILE), false),
    };

    match fs::read_to_string(&path) {
        Ok(raw) => settings
            .apply_file(&raw)
            .with_context(|| format!("failed to load config '{}'", path.display()))?,
        Err(err) if required => {
            return Err(err).with_context(|| format!("failed to read config '{}'", path.display()));
        }
        Err(_) => {}
    }

    settings.apply_env(|name| std::env::var(name).ok());
    Ok(settings)
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
