use bevy::prelude::*;

/// Tags everything a scene spawns so it can be torn down when the scene stops.
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct SceneEntity;

/// The physics-driven logo on the title screen.
#[derive(Component, Debug, Default)]
pub struct Logo;

/// Fixed level geometry; children carry the actual colliders.
#[derive(Component, Debug, Default)]
pub struct PlatformGroup;

#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Platform {
    /// Native texture size multiplied by the platform's scale.
    pub size: Vec2,
}

/// One of the four static colliders fencing the canvas.
#[derive(Component, Debug, Default)]
pub struct WorldBound;
