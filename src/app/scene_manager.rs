use bevy::prelude::*;

use super::state::{ActiveScene, SceneLifecycle, StartScene};
use crate::core::assets::preload::poll_preload;
use crate::core::assets::{AssetRegistry, PreloadQueue};
use crate::core::components::SceneEntity;

/// Drives scene lifecycles: `OnEnter(Preload)` is where scenes register assets,
/// `OnEnter(Running)` where they build objects. Scenes hook in with `scene_active`.
pub struct SceneManagerPlugin;

impl Plugin for SceneManagerPlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<SceneLifecycle>()
            .add_event::<StartScene>()
            .init_resource::<AssetRegistry>()
            .init_resource::<PreloadQueue>()
            .add_systems(
                Update,
                (
                    apply_start_scene,
                    poll_preload.run_if(in_state(SceneLifecycle::Preload)),
                ),
            )
            .add_systems(OnExit(SceneLifecycle::Running), teardown_scene);
    }
}

/// Last request in a frame wins.
fn apply_start_scene(
    mut requests: EventReader<StartScene>,
    mut active: Option<ResMut<ActiveScene>>,
    mut commands: Commands,
    mut next: ResMut<NextState<SceneLifecycle>>,
) {
    let Some(StartScene(key)) = requests.read().last().copied() else {
        return;
    };
    info!(target: "scene", "starting scene {}", key.name());
    match active.as_deref_mut() {
        Some(active) => active.0 = key,
        None => commands.insert_resource(ActiveScene(key)),
    }
    next.set(SceneLifecycle::Preload);
}

fn teardown_scene(
    mut commands: Commands,
    q_roots: Query<Entity, (With<SceneEntity>, Without<ChildOf>)>,
    mut queue: ResMut<PreloadQueue>,
) {
    let mut count = 0usize;
    for e in &q_roots {
        commands.entity(e).despawn();
        count += 1;
    }
    queue.clear();
    debug!(target: "scene", "teardown despawned {count} scene roots");
}
