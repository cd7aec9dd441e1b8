use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use crate::app::engine_config::EngineConfig;
use crate::core::components::{SceneEntity, WorldBound};

pub struct PhysicsSetupPlugin; // our wrapper to configure Rapier & world bounds

impl Plugin for PhysicsSetupPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(RapierPhysicsPlugin::<NoUserData>::default())
            .add_systems(Update, configure_gravity);
    }
}

/// The Rapier context is spawned by the plugin; apply gravity as soon as it appears.
fn configure_gravity(
    mut q_cfg: Query<&mut RapierConfiguration, Added<RapierConfiguration>>,
    engine: Option<Res<EngineConfig>>,
) {
    let Some(engine) = engine else { return };
    for mut cfg in &mut q_cfg {
        cfg.gravity = engine.world_gravity();
        info!(target: "scene", "rapier gravity set to {:?}", cfg.gravity);
    }
}

const WALL_NAME: [&str; 4] = ["BoundBottom", "BoundTop", "BoundLeft", "BoundRight"];

/// Centre and half extents of the four walls that fence a canvas of `size`.
pub fn world_bound_walls(size: Vec2, thickness: f32) -> [(Vec2, Vec2); 4] {
    let half = size * 0.5;
    [
        (Vec2::new(0.0, -half.y - thickness), Vec2::new(half.x + thickness * 2.0, thickness)),
        (Vec2::new(0.0, half.y + thickness), Vec2::new(half.x + thickness * 2.0, thickness)),
        (Vec2::new(-half.x - thickness, 0.0), Vec2::new(thickness, half.y + thickness * 2.0)),
        (Vec2::new(half.x + thickness, 0.0), Vec2::new(thickness, half.y + thickness * 2.0)),
    ]
}

/// Spawns invisible fixed colliders just outside the canvas edges.
pub fn spawn_world_bounds(commands: &mut Commands, size: Vec2) {
    let thickness = 50.0;
    for (index, (centre, half_extents)) in world_bound_walls(size, thickness).into_iter().enumerate() {
        commands.spawn((
            Name::new(WALL_NAME[index]),
            WorldBound,
            SceneEntity,
            RigidBody::Fixed,
            Collider::cuboid(half_extents.x, half_extents.y),
            Friction::coefficient(0.0),
            Transform::from_translation(centre.extend(0.0)),
        ));
    }
}
