use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::editor::DEFAULT_BRUSH_WIDTH;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ConfigPathError {
    MissingHomeDirectory,
}

const APP_DIR: &str = "sketchpad";
const APP_CONFIG_FILE: &str = "config.json";

const DEFAULT_CANVAS_WIDTH: u32 = 1280;
const DEFAULT_CANVAS_HEIGHT: u32 = 720;

/// Application-level settings from `config.json`. Every field is optional;
/// anything missing or unparseable falls back to the built-in defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct AppConfig {
    #[serde(default)]
    pub(crate) canvas_width: Option<u32>,
    #[serde(default)]
    pub(crate) canvas_height: Option<u32>,
    #[serde(default)]
    pub(crate) brush_width: Option<u32>,
}

impl AppConfig {
    pub(crate) fn canvas_width(&self) -> u32 {
        self.canvas_width.unwrap_or(DEFAULT_CANVAS_WIDTH)
    }

    pub(crate) fn canvas_height(&self) -> u32 {
        self.canvas_height.unwrap_or(DEFAULT_CANVAS_HEIGHT)
    }

    pub(crate) fn brush_width(&self) -> u32 {
        match self.brush_width {
            Some(width) if width > 0 => width,
            _ => DEFAULT_BRUSH_WIDTH,
        }
    }
}

pub(crate) fn load_app_config() -> AppConfig {
    let (xdg_config_home, home) = config_env_dirs();
    load_app_config_with(xdg_config_home.as_deref(), home.as_deref())
}

fn load_app_config_with(xdg_config_home: Option<&Path>, home: Option<&Path>) -> AppConfig {
    let path = match app_config_path(APP_DIR, APP_CONFIG_FILE, xdg_config_home, home) {
        Ok(p) => p,
        Err(_) => return AppConfig::default(),
    };
    if !path.exists() {
        return AppConfig::default();
    }
    match std::fs::read_to_string(&path) {
        Ok(contents) => serde_json::from_str(&contents).unwrap_or_else(|err| {
            tracing::warn!(?err, ?path, "failed to parse config.json; using defaults");
            AppConfig::default()
        }),
        Err(err) => {
            tracing::warn!(?err, ?path, "failed to read config.json; using defaults");
            AppConfig::default()
        }
    }
}

pub(crate) fn config_env_dirs() -> (Option<PathBuf>, Option<PathBuf>) {
    (
        std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from),
        std::env::var_os("HOME").map(PathBuf::from),
    )
}

pub(crate) fn app_config_path(
    app_dir: &str,
    file_name: &str,
    xdg_config_home: Option<&Path>,
    home: Option<&Path>,
) -> Result<PathBuf, ConfigPathError> {
    let mut path = config_root(xdg_config_home, home)?;
    path.push(app_dir);
    path.push(file_name);
    Ok(path)
}

fn config_root(
    xdg_config_home: Option<&Path>,
    home: Option<&Path>,
) -> Result<PathBuf, ConfigPathError> {
    if let Some(xdg) = xdg_config_home.filter(|path| !path.as_os_str().is_empty()) {
        return Ok(xdg.to_path_buf());
    }

    let home = home.ok_or(ConfigPathError::MissingHomeDirectory)?;
    Ok(home.join(".config"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_config_path_prefers_xdg_config_home() {
        let path = app_config_path(
            "sketchpad",
            "config.json",
            Some(Path::new("/tmp/config-root")),
            Some(Path::new("/tmp/home")),
        )
        .expect("path should resolve");

        assert_eq!(path, PathBuf::from("/tmp/config-root/sketchpad/config.json"));
    }

    #[test]
    fn app_config_path_falls_back_to_home_dot_config() {
        let path = app_config_path("sketchpad", "config.json", None, Some(Path::new("/tmp/home")))
            .expect("path should resolve");

        assert_eq!(path, PathBuf::from("/tmp/home/.config/sketchpad/config.json"));
    }

    #[test]
    fn app_config_path_errors_when_home_missing_and_xdg_unset() {
        let error = app_config_path("sketchpad", "config.json", None, None).unwrap_err();
        assert_eq!(error, ConfigPathError::MissingHomeDirectory);
    }

    #[test]
    fn missing_fields_resolve_to_builtin_canvas_defaults() {
        let config: AppConfig = serde_json::from_str("{}").expect("empty object parses");
        assert_eq!(config.canvas_width(), 1280);
        assert_eq!(config.canvas_height(), 720);
        assert_eq!(config.brush_width(), DEFAULT_BRUSH_WIDTH);
    }

    #[test]
    fn explicit_fields_override_defaults_and_zero_brush_width_is_rejected() {
        let config: AppConfig = serde_json::from_str(
            r#"{"canvas_width": 800, "canvas_height": 600, "brush_width": 0}"#,
        )
        .expect("valid json parses");
        assert_eq!(config.canvas_width(), 800);
        assert_eq!(config.canvas_height(), 600);
        assert_eq!(config.brush_width(), DEFAULT_BRUSH_WIDTH);
    }
}
