use std::path::PathBuf;

use serde::Deserialize;

use crate::markers::MarkerSettings;

const DEFAULT_CONFIG: &str = include_str!("../config.toml");

#[derive(Deserialize, Default)]
struct ConfigFile {
    #[serde(default)]
    markers: MarkersConfig,
}

#[derive(Deserialize, Default)]
struct MarkersConfig {
    seek_epsilon: Option<u32>,
    chunk_total: Option<usize>,
    history_depth: Option<usize>,
}

pub struct Config {
    markers: MarkersConfig,
}

impl Config {
    pub fn load() -> Self {
        let mut config = Self::embedded();

        if let Some(path) = user_config_path() {
            if path.exists() {
                match std::fs::read_to_string(&path) {
                    Ok(contents) => config.apply_user(&contents, &path),
                    Err(e) => {
                        log::warn!(target: "config", "could not read config {}: {}", path.display(), e)
                    }
                }
            }
        }

        config
    }

    fn embedded() -> Self {
        let base: ConfigFile =
            toml::from_str(DEFAULT_CONFIG).expect("Failed to parse embedded config.toml");
        Config {
            markers: base.markers,
        }
    }

    fn apply_user(&mut self, contents: &str, path: &std::path::Path) {
        match toml::from_str::<ConfigFile>(contents) {
            Ok(user) => merge_markers(&mut self.markers, user.markers),
            Err(e) => {
                log::warn!(target: "config", "ignoring malformed config {}: {}", path.display(), e)
            }
        }
    }

    pub fn marker_settings(&self) -> MarkerSettings {
        let fallback = MarkerSettings::default();
        MarkerSettings {
            seek_epsilon: self.markers.seek_epsilon.unwrap_or(fallback.seek_epsilon),
            chunk_total: self
                .markers
                .chunk_total
                .filter(|&n| n > 0)
                .unwrap_or(fallback.chunk_total),
            history_depth: self
                .markers
                .history_depth
                .filter(|&n| n > 0)
                .unwrap_or(fallback.history_depth),
        }
    }
}

fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("narration").join("config.toml"))
}

fn merge_markers(base: &mut MarkersConfig, user: MarkersConfig) {
    if user.seek_epsilon.is_some() {
        base.seek_epsilon = user.seek_epsilon;
    }
    if user.chunk_total.is_some() {
        base.chunk_total = user.chunk_total;
    }
    if user.history_depth.is_some() {
        base.history_depth = user.history_depth;
    }
}
