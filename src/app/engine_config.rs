//! Engine startup parameters and the `App` they produce.
//!
//! `create_engine_config` is a pure factory: whatever scene list and mount point it is
//! handed end up in the config verbatim. `EngineConfig::build_app` turns that into a
//! Bevy `App` with windowing, Rapier, the widget plugin and the scene plugins wired up.
use bevy::prelude::*;
use bevy::render::settings::{Backends, WgpuSettings};
use bevy::render::RenderPlugin;
use bevy_rapier2d::prelude::*;

use super::game::GamePlugin;
use super::state::{ActiveScene, SceneKey};
use crate::core::config::GameConfig;
use crate::widgets::WidgetsPlugin;

pub const CANVAS_WIDTH: u32 = 800;
pub const CANVAS_HEIGHT: u32 = 600;
/// Registration key and scene mapping of the widget plugin.
pub const WIDGETS_PLUGIN_KEY: &str = "widgets";

/// Which graphics backend the renderer may pick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RendererMode {
    /// Let wgpu choose (honours `WGPU_BACKEND`).
    #[default]
    Auto,
    Vulkan,
    Metal,
    Dx12,
    WebGpu,
}

impl RendererMode {
    pub fn backends(self) -> Option<Backends> {
        match self {
            RendererMode::Auto => None,
            RendererMode::Vulkan => Some(Backends::VULKAN),
            RendererMode::Metal => Some(Backends::METAL),
            RendererMode::Dx12 => Some(Backends::DX12),
            RendererMode::WebGpu => Some(Backends::BROWSER_WEBGPU),
        }
    }
}

/// Arcade-style physics defaults. Gravity is in screen space (y grows downward).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcadePhysics {
    pub gravity: Vec2,
    pub debug: bool,
}

/// A scene-scoped plugin registration: `key` names the plugin, `mapping` is the
/// name scenes reach it under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScenePluginEntry {
    pub key: String,
    pub mapping: String,
}

#[derive(Resource, Debug, Clone, PartialEq)]
pub struct EngineConfig {
    pub renderer: RendererMode,
    pub width: u32,
    pub height: u32,
    /// Scenes in boot order; the first one starts automatically.
    pub scene: Vec<SceneKey>,
    /// DOM id of the element the canvas mounts into (web builds).
    pub parent: String,
    pub physics: ArcadePhysics,
    pub plugins: Vec<ScenePluginEntry>,
}

pub fn create_engine_config(
    scenes: impl Into<Vec<SceneKey>>,
    parent: impl Into<String>,
) -> EngineConfig {
    EngineConfig {
        renderer: RendererMode::Auto,
        width: CANVAS_WIDTH,
        height: CANVAS_HEIGHT,
        scene: scenes.into(),
        parent: parent.into(),
        physics: ArcadePhysics {
            gravity: Vec2::new(0.0, 200.0),
            debug: false,
        },
        plugins: vec![ScenePluginEntry {
            key: WIDGETS_PLUGIN_KEY.into(),
            mapping: WIDGETS_PLUGIN_KEY.into(),
        }],
    }
}

/// Converts top-left origin, y-down canvas coordinates into the centred, y-up world.
pub fn screen_to_world(point: Vec2, canvas: Vec2) -> Vec2 {
    Vec2::new(point.x - canvas.x * 0.5, canvas.y * 0.5 - point.y)
}

impl EngineConfig {
    pub fn canvas_size(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }

    /// CSS selector for the mount element, if a parent id was given.
    pub fn canvas_selector(&self) -> Option<String> {
        let id = self.parent.trim_start_matches('#');
        (!id.is_empty()).then(|| format!("#{id}"))
    }

    /// Gravity in Rapier's y-up world.
    pub fn world_gravity(&self) -> Vec2 {
        Vec2::new(self.physics.gravity.x, -self.physics.gravity.y)
    }

    pub fn boot_scene(&self) -> Option<SceneKey> {
        self.scene.first().copied()
    }

    pub fn build_app(&self, settings: &GameConfig) -> App {
        let mut wgpu = WgpuSettings::default();
        if let Some(backends) = self.renderer.backends() {
            wgpu.backends = Some(backends);
        }

        let mut app = App::new();
        app.add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: settings.window.title.clone(),
                        resolution: (self.width as f32, self.height as f32).into(),
                        canvas: self.canvas_selector(),
                        resizable: false,
                        ..default()
                    }),
                    ..default()
                })
                .set(AssetPlugin {
                    file_path: settings.assets.base_path.clone(),
                    ..default()
                })
                .set(RenderPlugin {
                    render_creation: wgpu.into(),
                    ..default()
                }),
        );
        self.configure_app(&mut app, settings);
        app
    }

    /// Everything `build_app` adds on top of the platform plugins.
    pub fn configure_app(&self, app: &mut App, settings: &GameConfig) {
        app.insert_resource(self.clone())
            .insert_resource(settings.clone());

        for entry in &self.plugins {
            if entry.key == WIDGETS_PLUGIN_KEY {
                app.add_plugins(WidgetsPlugin {
                    mapping: entry.mapping.clone(),
                });
            } else {
                warn!(target: "scene", "unknown scene plugin '{}' ignored", entry.key);
            }
        }

        if self.physics.debug || settings.physics_debug || cfg!(feature = "debug") {
            app.add_plugins(RapierDebugRenderPlugin::default());
        }

        match self.boot_scene() {
            Some(key) => {
                app.insert_resource(ActiveScene(key));
            }
            None => warn!(target: "scene", "engine config lists no scenes; nothing will start"),
        }

        app.add_plugins(GamePlugin);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factory_preserves_scene_order_and_parent() {
        let cfg = create_engine_config([SceneKey::Title, SceneKey::Level], "app");
        assert_eq!(cfg.scene, vec![SceneKey::Title, SceneKey::Level]);
        assert_eq!(cfg.parent, "app");
        assert_eq!(cfg.renderer, RendererMode::Auto);
        assert_eq!((cfg.width, cfg.height), (800, 600));
        assert_eq!(cfg.physics.gravity, Vec2::new(0.0, 200.0));
        assert!(!cfg.physics.debug);
        assert_eq!(cfg.plugins.len(), 1);
        assert_eq!(cfg.plugins[0].key, "widgets");
        assert_eq!(cfg.plugins[0].mapping, "widgets");
    }

    #[test]
    fn factory_passes_inputs_through_unvalidated() {
        let cfg = create_engine_config(Vec::<SceneKey>::new(), "");
        assert!(cfg.scene.is_empty());
        assert_eq!(cfg.boot_scene(), None);
        assert_eq!(cfg.canvas_selector(), None);
    }

    #[test]
    fn gravity_flips_into_y_up_world() {
        let cfg = create_engine_config([SceneKey::Title], "app");
        assert_eq!(cfg.world_gravity(), Vec2::new(0.0, -200.0));
        assert_eq!(cfg.canvas_selector().as_deref(), Some("#app"));
    }

    #[test]
    fn screen_corners_map_to_world() {
        let canvas = Vec2::new(800.0, 600.0);
        assert_eq!(screen_to_world(Vec2::new(400.0, 300.0), canvas), Vec2::ZERO);
        assert_eq!(screen_to_world(Vec2::ZERO, canvas), Vec2::new(-400.0, 300.0));
        assert_eq!(screen_to_world(Vec2::new(800.0, 600.0), canvas), Vec2::new(400.0, -300.0));
    }

    #[test]
    fn auto_renderer_leaves_backends_to_wgpu() {
        assert_eq!(RendererMode::Auto.backends(), None);
        assert_eq!(RendererMode::Vulkan.backends(), Some(Backends::VULKAN));
    }
}
