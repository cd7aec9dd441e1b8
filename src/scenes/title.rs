use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use super::texture;
use crate::app::engine_config::{screen_to_world, EngineConfig};
use crate::app::state::{scene_active, SceneKey, SceneLifecycle, StartScene};
use crate::core::assets::{AssetRegistry, SceneLoader};
use crate::core::components::{Logo, SceneEntity};
use crate::core::config::GameConfig;
use crate::physics::rapier_physics::spawn_world_bounds;
use crate::rendering::particles::{BlendMode, FollowTarget, ParticleEmitter};
use crate::widgets::{create_button, hex_color, spawn_button_row, ButtonAction, ButtonClicked, ButtonRow, Orientation, UiKit};

pub struct TitleScenePlugin;

impl Plugin for TitleScenePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            OnEnter(SceneLifecycle::Preload),
            preload_title.run_if(scene_active(SceneKey::Title)),
        )
        .add_systems(
            OnEnter(SceneLifecycle::Running),
            create_title.run_if(scene_active(SceneKey::Title)),
        )
        .add_systems(
            Update,
            handle_title_buttons
                .run_if(in_state(SceneLifecycle::Running).and(scene_active(SceneKey::Title))),
        );
    }
}

fn preload_title(mut loader: SceneLoader) {
    loader.image("space", "space3.png");
    loader.image("logo", "phaser3-logo.png");
    loader.image("red", "red.png");
}

fn create_title(
    mut commands: Commands,
    registry: Res<AssetRegistry>,
    images: Res<Assets<Image>>,
    engine: Res<EngineConfig>,
    settings: Option<Res<GameConfig>>,
    ui: Res<UiKit>,
) {
    let canvas = engine.canvas_size();
    let tuning = settings.map(|s| s.title.clone()).unwrap_or_default();

    let (space, _) = texture(&registry, &images, "space");
    commands.spawn((
        Name::new("Background"),
        SceneEntity,
        Sprite::from_image(space),
        Transform::from_translation(screen_to_world(Vec2::new(400.0, 300.0), canvas).extend(0.0)),
    ));

    let (logo_image, logo_size) = texture(&registry, &images, "logo");
    let (vx, vy) = tuning.logo_velocity;
    let logo = commands
        .spawn((
            Name::new("Logo"),
            Logo,
            SceneEntity,
            Sprite::from_image(logo_image),
            Transform::from_translation(screen_to_world(Vec2::new(400.0, 100.0), canvas).extend(2.0)),
            RigidBody::Dynamic,
            Collider::cuboid(logo_size.x * 0.5, logo_size.y * 0.5),
            Velocity::linear(Vec2::new(vx, -vy)),
            Restitution {
                coefficient: tuning.logo_bounce,
                combine_rule: CoefficientCombineRule::Max,
            },
            Friction {
                coefficient: 0.0,
                combine_rule: CoefficientCombineRule::Min,
            },
            Damping {
                linear_damping: 0.0,
                angular_damping: 0.0,
            },
            LockedAxes::ROTATION_LOCKED,
        ))
        .id();
    spawn_world_bounds(&mut commands, canvas);

    let (red, _) = texture(&registry, &images, "red");
    let mut emitter = ParticleEmitter::new(red);
    emitter.speed = tuning.particle_speed;
    emitter.lifespan = tuning.particle_lifespan;
    emitter.frequency = tuning.particle_frequency.max(0.0);
    emitter.scale_start = 1.0;
    emitter.scale_end = 0.0;
    emitter.blend = BlendMode::Add;
    commands.spawn((
        Name::new("LogoTrail"),
        SceneEntity,
        emitter,
        FollowTarget(logo),
        Transform::from_xyz(0.0, 0.0, 1.0),
    ));

    let row = ButtonRow {
        x: 400.0,
        y: 500.0,
        width: 300.0,
        orientation: Orientation::Horizontal,
        buttons: vec![create_button(&ui, "Start Game", ButtonAction::StartGame)],
    };
    spawn_button_row(&mut commands, &row, Some(hex_color(0xff0000)));

    info!(target: "scene", "{} created", SceneKey::Title.name());
}

fn handle_title_buttons(mut clicks: EventReader<ButtonClicked>, mut start: EventWriter<StartScene>) {
    for ButtonClicked(action) in clicks.read() {
        match action {
            ButtonAction::StartGame => {
                start.write(StartScene(SceneKey::Level));
            }
        }
    }
}
