use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use bevy_rapier2d::prelude::*;

use super::{camera_size, texture};
use crate::app::engine_config::{screen_to_world, EngineConfig};
use crate::app::state::{scene_active, SceneKey, SceneLifecycle};
use crate::core::assets::{AssetRegistry, SceneLoader, SpriteFrame};
use crate::core::components::{Platform, PlatformGroup, SceneEntity};

pub struct LevelScenePlugin;

impl Plugin for LevelScenePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            OnEnter(SceneLifecycle::Preload),
            preload_level.run_if(scene_active(SceneKey::Level)),
        )
        .add_systems(
            OnEnter(SceneLifecycle::Running),
            create_level.run_if(scene_active(SceneKey::Level)),
        );
    }
}

/// Where a platform goes, in canvas coordinates, and how much it is scaled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlatformPlacement {
    pub position: Vec2,
    pub scale: f32,
}

/// The four hand-placed platforms for a camera of `camera` size and a ground
/// texture of `ground` size. The first one is the doubled floor.
pub fn platform_layout(camera: Vec2, ground: Vec2) -> [PlatformPlacement; 4] {
    let center_x = camera.x / 2.0;
    let base = camera.y - ground.y;
    [
        PlatformPlacement { position: Vec2::new(center_x, base), scale: 2.0 },
        PlatformPlacement { position: Vec2::new(center_x + ground.x / 2.0, base - 150.0), scale: 1.0 },
        PlatformPlacement { position: Vec2::new(50.0, base - 300.0), scale: 1.0 },
        PlatformPlacement { position: Vec2::new(750.0, base - 380.0), scale: 1.0 },
    ]
}

fn preload_level(mut loader: SceneLoader) {
    loader.image("sky", "sky.png");
    loader.image("ground", "platform.png");
    loader.image("star", "star.png");
    loader.image("bomb", "bomb.png");
    loader.spritesheet("dude", "dude.png", SpriteFrame { width: 32, height: 48 });
}

fn create_level(
    mut commands: Commands,
    registry: Res<AssetRegistry>,
    images: Res<Assets<Image>>,
    engine: Res<EngineConfig>,
    q_window: Query<&Window, With<PrimaryWindow>>,
) {
    let camera = camera_size(q_window.single().ok(), &engine);
    let center = camera / 2.0;

    let (sky, _) = texture(&registry, &images, "sky");
    commands.spawn((
        Name::new("Sky"),
        SceneEntity,
        Sprite::from_image(sky),
        Transform::from_translation(screen_to_world(center, camera).extend(0.0)),
    ));

    let (ground, ground_size) = texture(&registry, &images, "ground");
    commands
        .spawn((
            Name::new("Platforms"),
            PlatformGroup,
            SceneEntity,
            Transform::default(),
            Visibility::default(),
        ))
        .with_children(|group| {
            for placement in platform_layout(camera, ground_size) {
                // Collider is sized from the scaled sprite, not the source texture.
                let size = ground_size * placement.scale;
                group.spawn((
                    Platform { size },
                    Sprite {
                        image: ground.clone(),
                        custom_size: Some(size),
                        ..default()
                    },
                    Transform::from_translation(screen_to_world(placement.position, camera).extend(1.0)),
                    RigidBody::Fixed,
                    Collider::cuboid(size.x * 0.5, size.y * 0.5),
                ));
            }
        });

    info!(target: "scene", "{} created", SceneKey::Level.name());
}
