use std::path::Path;
use std::time::Duration;

use bevy::ecs::query::QueryFilter;
use bevy::prelude::*;
use bevy::state::app::StatesPlugin;
use bevy_rapier2d::prelude::{Friction, Restitution, RigidBody, Velocity};
use sample_game::app::scene_manager::SceneManagerPlugin;
use sample_game::core::assets::{AssetRegistry, PreloadQueue};
use sample_game::core::components::{Logo, Platform, PlatformGroup, SceneEntity, WorldBound};
use sample_game::rendering::particles::{FollowTarget, Particle, ParticleEmitter, ParticlesPlugin};
use sample_game::scenes::level::{platform_layout, LevelScenePlugin};
use sample_game::scenes::title::TitleScenePlugin;
use sample_game::widgets::{ButtonAction, ButtonRowRoot, WidgetsPlugin};
use sample_game::{create_engine_config, screen_to_world, ActiveScene, SceneKey, SceneLifecycle};

/// Headless app with every scene plugin. The asset folder is empty, so every load
/// fails and the preload gate has to move on regardless.
fn demo_app(asset_dir: &Path, boot: Option<SceneKey>) -> App {
    let mut app = App::new();
    app.add_plugins((
        MinimalPlugins,
        StatesPlugin,
        AssetPlugin {
            file_path: asset_dir.to_string_lossy().into_owned(),
            ..default()
        },
    ))
    .init_asset::<Image>()
    .init_asset::<TextureAtlasLayout>()
    .insert_resource(create_engine_config([SceneKey::Title, SceneKey::Level], "app"));
    if let Some(key) = boot {
        app.insert_resource(ActiveScene(key));
    }
    app.add_plugins((
        WidgetsPlugin::default(),
        SceneManagerPlugin,
        ParticlesPlugin,
        TitleScenePlugin,
        LevelScenePlugin,
    ));
    app
}

fn run_until(app: &mut App, mut done: impl FnMut(&mut App) -> bool) -> bool {
    for _ in 0..500 {
        app.update();
        if done(app) {
            return true;
        }
        std::thread::sleep(Duration::from_millis(2));
    }
    false
}

fn lifecycle(app: &App) -> SceneLifecycle {
    *app.world().resource::<State<SceneLifecycle>>().get()
}

fn count<F: QueryFilter>(app: &mut App) -> usize {
    let world = app.world_mut();
    world.query_filtered::<Entity, F>().iter(world).count()
}

fn running(app: &mut App) -> bool {
    lifecycle(app) == SceneLifecycle::Running
}

#[test]
fn title_preloads_then_builds_its_objects() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = demo_app(dir.path(), Some(SceneKey::Title));
    assert!(run_until(&mut app, running), "title never left preload");

    let registry = app.world().resource::<AssetRegistry>();
    for key in ["space", "logo", "red"] {
        assert!(registry.image(key).is_some(), "missing registry key {key}");
    }
    assert_eq!(app.world().resource::<PreloadQueue>().failed(), 3);

    assert_eq!(count::<With<Logo>>(&mut app), 1);
    assert_eq!(count::<With<WorldBound>>(&mut app), 4);
    assert_eq!(count::<(With<ParticleEmitter>, With<FollowTarget>)>(&mut app), 1);
    assert_eq!(count::<With<ButtonRowRoot>>(&mut app), 1);

    // Screen-space (100, 200) points downward; the y-up world sees (100, -200).
    let world = app.world_mut();
    let (velocity, restitution, friction, body) = world
        .query_filtered::<(&Velocity, &Restitution, &Friction, &RigidBody), With<Logo>>()
        .single(world)
        .expect("one logo");
    assert_eq!(velocity.linvel, Vec2::new(100.0, -200.0));
    assert_eq!(restitution.coefficient, 1.0);
    assert_eq!(friction.coefficient, 0.0);
    assert_eq!(*body, RigidBody::Dynamic);

    let world = app.world_mut();
    let buttons: Vec<(ButtonAction, String)> = world
        .query::<(&ButtonAction, &Name)>()
        .iter(world)
        .map(|(a, n)| (*a, n.as_str().to_owned()))
        .collect();
    assert_eq!(buttons, vec![(ButtonAction::StartGame, "Start Game".to_owned())]);
}

#[test]
fn start_game_click_swaps_to_level() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = demo_app(dir.path(), Some(SceneKey::Title));
    assert!(run_until(&mut app, running), "title never left preload");

    let world = app.world_mut();
    let button = world
        .query_filtered::<Entity, With<ButtonAction>>()
        .single(world)
        .expect("one start button");
    world.entity_mut(button).insert(Interaction::Pressed);

    let reached_level = run_until(&mut app, |app| {
        app.world().resource::<ActiveScene>().0 == SceneKey::Level
            && lifecycle(app) == SceneLifecycle::Running
    });
    assert!(reached_level, "level never started");

    // Title objects are gone, level geometry is in place.
    assert_eq!(count::<With<Logo>>(&mut app), 0);
    assert_eq!(count::<With<WorldBound>>(&mut app), 0);
    assert_eq!(count::<With<ButtonRowRoot>>(&mut app), 0);
    assert_eq!(count::<With<ParticleEmitter>>(&mut app), 0);
    assert_eq!(count::<With<Particle>>(&mut app), 0);
    assert_eq!(count::<(With<PlatformGroup>, With<SceneEntity>)>(&mut app), 1);
    assert_eq!(count::<With<Platform>>(&mut app), 4);

    let registry = app.world().resource::<AssetRegistry>();
    for key in ["sky", "ground", "star", "bomb", "dude"] {
        assert!(registry.image(key).is_some(), "missing registry key {key}");
    }
    // dude.png never loaded, so no frames could be cut.
    assert!(registry.atlas("dude").is_none());

    // Missing ground texture falls back to 32x32; the floor is doubled. No window,
    // so the camera is the 800x600 canvas.
    let canvas = Vec2::new(800.0, 600.0);
    let ground = Vec2::new(32.0, 32.0);
    let world = app.world_mut();
    let platforms: Vec<(Vec2, Vec2)> = world
        .query::<(&Platform, &Transform)>()
        .iter(world)
        .map(|(p, tf)| (p.size, tf.translation.truncate()))
        .collect();
    for placement in platform_layout(canvas, ground) {
        let expected = (ground * placement.scale, screen_to_world(placement.position, canvas));
        assert!(
            platforms.contains(&expected),
            "no platform {expected:?} in {platforms:?}"
        );
    }
    // Floor at (400, 568) on screen sits 268 below the world origin.
    assert!(platforms.contains(&(Vec2::new(64.0, 64.0), Vec2::new(0.0, -268.0))));
}

#[test]
fn no_active_scene_settles_without_objects() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = demo_app(dir.path(), None);
    assert!(run_until(&mut app, running));
    assert_eq!(count::<With<SceneEntity>>(&mut app), 0);
    assert_eq!(app.world().resource::<AssetRegistry>().image_count(), 0);
}
