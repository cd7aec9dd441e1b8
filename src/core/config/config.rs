use bevy::prelude::*;
use serde::Deserialize;
use std::{fs, path::Path};

/// Window presentation knobs. Canvas size is fixed by the engine config, not here.
#[derive(Debug, Deserialize, Resource, Clone, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    #[serde(rename = "autoClose")]
    pub auto_close: f32,
}
impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Sample Game".into(),
            auto_close: 0.0,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct AssetsConfig {
    /// Root the asset server resolves scene asset paths against.
    pub base_path: String,
}
impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            base_path: "assets".into(),
        }
    }
}

/// Title scene tuning: particle trail and the bouncing logo.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct TitleSceneConfig {
    pub particle_speed: f32,
    pub particle_lifespan: f32,
    /// Seconds between emissions; 0 emits once per frame.
    pub particle_frequency: f32,
    /// Screen-space (y-down) launch velocity of the logo.
    pub logo_velocity: (f32, f32),
    pub logo_bounce: f32,
}
impl Default for TitleSceneConfig {
    fn default() -> Self {
        Self {
            particle_speed: 100.0,
            particle_lifespan: 1.0,
            particle_frequency: 0.0,
            logo_velocity: (100.0, 200.0),
            logo_bounce: 1.0,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct AuthConfig {
    /// Origin the login endpoint path is joined onto.
    pub base_url: String,
}
impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8080".into(),
        }
    }
}

#[derive(Debug, Deserialize, Resource, Clone, PartialEq, Default)]
#[serde(default)]
pub struct GameConfig {
    pub window: WindowConfig,
    pub assets: AssetsConfig,
    pub title: TitleSceneConfig,
    pub auth: AuthConfig,
    /// Forces the Rapier debug renderer on even if the engine config leaves it off.
    pub physics_debug: bool,
}

/// Base config every binary starts from.
pub const BASE_CONFIG: &str = "assets/config/game.ron";
/// Per-machine overlay; optional, so its absence is not an error.
pub const LOCAL_OVERLAY: &str = "assets/config/game.local.ron";

/// The layers worth handing to `GameConfig::load_layered`: every path in order, except
/// `optional` when that file is not on disk. A missing explicit layer is still passed
/// through so the loader reports it.
pub fn present_layers<'a>(paths: &'a [String], optional: &str) -> Vec<&'a str> {
    paths
        .iter()
        .map(String::as_str)
        .filter(|p| *p != optional || Path::new(p).exists())
        .collect()
}

impl GameConfig {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, String> {
        let data = fs::read_to_string(&path).map_err(|e| format!("read config: {e}"))?;
        ron::from_str(&data).map_err(|e| format!("parse RON: {e}"))
    }

    pub fn load_or_default(path: impl AsRef<Path>) -> (Self, Option<String>) {
        match Self::load_from_file(&path) {
            Ok(cfg) => (cfg, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }

    /// Deep-merges every readable RON file in order (later files win per key) and
    /// deserializes the result. Returns the config, the paths used, and any errors.
    pub fn load_layered<P, I>(paths: I) -> (Self, Vec<String>, Vec<String>)
    where
        P: AsRef<Path>,
        I: IntoIterator<Item = P>,
    {
        use ron::value::Value;
        let mut merged: Option<Value> = None;
        let mut used = Vec::new();
        let mut errors = Vec::new();
        fn merge_value(base: &mut ron::value::Value, overlay: ron::value::Value) {
            use ron::value::Value;
            match (base, overlay) {
                (Value::Map(bm), Value::Map(om)) => {
                    for (k, v) in om.into_iter() {
                        let existing = bm.iter_mut().find(|(ek, _)| **ek == k).map(|(_, ev)| ev);
                        if let Some(ev) = existing {
                            merge_value(ev, v);
                        } else {
                            bm.insert(k, v);
                        }
                    }
                }
                (b, o) => *b = o,
            }
        }
        for p in paths {
            let path_ref = p.as_ref();
            match fs::read_to_string(path_ref) {
                Ok(txt) => match ron::from_str::<Value>(&txt) {
                    Ok(val) => {
                        match &mut merged {
                            Some(cur) => merge_value(cur, val),
                            None => merged = Some(val),
                        }
                        used.push(path_ref.to_string_lossy().to_string());
                    }
                    Err(e) => errors.push(format!("{}: parse error: {e}", path_ref.display())),
                },
                Err(e) => errors.push(format!("{}: read error: {e}", path_ref.display())),
            }
        }
        let Some(val) = merged else {
            return (GameConfig::default(), used, errors);
        };
        match val.into_rust::<GameConfig>() {
            Ok(cfg) => (cfg, used, errors),
            Err(e) => {
                errors.push(format!(
                    "failed to deserialize merged config; using defaults: {e}"
                ));
                (GameConfig::default(), used, errors)
            }
        }
    }

    pub fn validate(&self) -> Vec<String> {
        let mut w = Vec::new();
        if self.window.auto_close < 0.0 {
            w.push(format!(
                "window.autoClose {} negative -> treated as disabled (should be >= 0)",
                self.window.auto_close
            ));
        } else if self.window.auto_close > 0.0 && self.window.auto_close < 0.01 {
            w.push(format!(
                "window.autoClose {} very small; closes almost immediately",
                self.window.auto_close
            ));
        }
        if self.assets.base_path.trim().is_empty() {
            w.push("assets.base_path is empty; assets resolve against the working directory".into());
        }
        if self.title.particle_speed < 0.0 {
            w.push(format!(
                "title.particle_speed {} negative; particles travel backwards",
                self.title.particle_speed
            ));
        }
        if self.title.particle_lifespan <= 0.0 {
            w.push("title.particle_lifespan must be > 0; no particles will be visible".into());
        }
        if self.title.particle_frequency < 0.0 {
            w.push("title.particle_frequency negative -> treated as every frame".into());
        } else if self.title.particle_frequency > 0.0 && self.title.particle_frequency < 0.001 {
            w.push(format!(
                "title.particle_frequency {} very small; emission is capped per frame",
                self.title.particle_frequency
            ));
        }
        if !(0.0..=1.5).contains(&self.title.logo_bounce) {
            w.push(format!(
                "title.logo_bounce {} outside recommended 0..1.5",
                self.title.logo_bounce
            ));
        }
        if !(self.auth.base_url.starts_with("http://") || self.auth.base_url.starts_with("https://")) {
            w.push(format!(
                "auth.base_url '{}' is not an http(s) origin; login requests will fail",
                self.auth.base_url
            ));
        }
        w
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate_clean() {
        let cfg = GameConfig::default();
        assert!(cfg.validate().is_empty(), "{:?}", cfg.validate());
        assert_eq!(cfg.title.particle_speed, 100.0);
        assert_eq!(cfg.title.logo_velocity, (100.0, 200.0));
    }

    #[test]
    fn partial_ron_keeps_other_defaults() {
        let cfg: GameConfig = ron::from_str("(window: (title: \"Custom\"))").unwrap();
        assert_eq!(cfg.window.title, "Custom");
        assert_eq!(cfg.window.auto_close, 0.0);
        assert_eq!(cfg.assets, AssetsConfig::default());
    }

    #[test]
    fn validate_flags_bad_values() {
        let mut cfg = GameConfig::default();
        cfg.window.auto_close = -1.0;
        cfg.title.particle_lifespan = 0.0;
        cfg.auth.base_url = "ftp://nope".into();
        let warns = cfg.validate();
        assert_eq!(warns.len(), 3, "{warns:?}");
    }

    #[test]
    fn tiny_particle_frequency_warns() {
        let mut cfg = GameConfig::default();
        cfg.title.particle_frequency = 1e-7;
        let warns = cfg.validate();
        assert_eq!(warns.len(), 1, "{warns:?}");
        assert!(warns[0].contains("particle_frequency"));
        cfg.title.particle_frequency = 0.05;
        assert!(cfg.validate().is_empty());
    }
}
