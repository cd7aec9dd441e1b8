//! The two demo scenes. Each registers its assets on `OnEnter(SceneLifecycle::Preload)`
//! and builds its objects on `OnEnter(SceneLifecycle::Running)` while it is the
//! active scene.
pub mod level;
pub mod title;

use bevy::prelude::*;

use crate::app::engine_config::EngineConfig;
use crate::core::assets::AssetRegistry;

/// Size the engine substitutes for an image that never loaded.
pub const MISSING_TEXTURE_SIZE: UVec2 = UVec2::new(32, 32);

/// Handle and native size for `key`, falling back to the missing-texture size.
pub(crate) fn texture(registry: &AssetRegistry, images: &Assets<Image>, key: &str) -> (Handle<Image>, Vec2) {
    let handle = registry.image(key).cloned().unwrap_or_default();
    let size = registry
        .image_size(key, images)
        .unwrap_or(MISSING_TEXTURE_SIZE)
        .as_vec2();
    (handle, size)
}

/// Logical size of the primary window; the configured canvas when there is none
/// (headless runs).
pub(crate) fn camera_size(window: Option<&Window>, engine: &EngineConfig) -> Vec2 {
    window.map_or_else(|| engine.canvas_size(), |w| Vec2::new(w.width(), w.height()))
}
