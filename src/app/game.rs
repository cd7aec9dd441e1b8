use bevy::prelude::*;

use super::scene_manager::SceneManagerPlugin;
use crate::interaction::session::auto_close::AutoClosePlugin;
use crate::physics::rapier_physics::PhysicsSetupPlugin;
use crate::rendering::camera::CameraPlugin;
use crate::rendering::particles::ParticlesPlugin;
use crate::scenes::level::LevelScenePlugin;
use crate::scenes::title::TitleScenePlugin;
use crate::widgets::WidgetsPlugin;

pub struct GamePlugin;

impl Plugin for GamePlugin {
    fn build(&self, app: &mut App) {
        // Scenes take `Res<UiKit>`; the handle must exist before any of them runs.
        if !app.is_plugin_added::<WidgetsPlugin>() {
            warn!(target: "scene", "widgets plugin not registered by engine config; adding default mapping");
            app.add_plugins(WidgetsPlugin::default());
        }
        app.add_plugins((
            CameraPlugin,
            PhysicsSetupPlugin,
            SceneManagerPlugin,
            ParticlesPlugin,
            TitleScenePlugin,
            LevelScenePlugin,
            AutoClosePlugin,
        ));
    }
}
