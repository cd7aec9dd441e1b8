//! Sprite particle trail. Emitters spawn short-lived sprites that drift outward at a
//! fixed speed and shrink over their lifespan; an emitter can follow another entity.
use bevy::prelude::*;
use rand::Rng;

use crate::core::components::SceneEntity;

pub struct ParticlesPlugin;

impl Plugin for ParticlesPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (follow_targets, emit_particles, update_particles).chain(),
        );
    }
}

/// Upper bound on emission bursts in a single frame.
pub const MAX_BURSTS_PER_FRAME: u32 = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlendMode {
    #[default]
    Normal,
    /// Brightens what is underneath. Sprites have no additive pipeline, so this is
    /// approximated with a translucent tint drawn above the emitter's layer.
    Add,
}

#[derive(Component, Debug, Clone)]
pub struct ParticleEmitter {
    pub texture: Handle<Image>,
    /// Pixels per second, direction picked uniformly at random.
    pub speed: f32,
    pub scale_start: f32,
    pub scale_end: f32,
    /// Seconds each particle lives.
    pub lifespan: f32,
    /// Seconds between emissions; 0 emits every frame.
    pub frequency: f32,
    pub quantity: u32,
    pub blend: BlendMode,
    accumulator: f32,
}

impl ParticleEmitter {
    pub fn new(texture: Handle<Image>) -> Self {
        Self {
            texture,
            speed: 100.0,
            scale_start: 1.0,
            scale_end: 0.0,
            lifespan: 1.0,
            frequency: 0.0,
            quantity: 1,
            blend: BlendMode::Normal,
            accumulator: 0.0,
        }
    }

    /// How many particles to release this frame.
    pub fn emission_count(&mut self, dt: f32) -> u32 {
        if self.frequency <= 0.0 {
            return self.quantity;
        }
        self.accumulator += dt;
        let due = (self.accumulator / self.frequency).floor();
        if due > MAX_BURSTS_PER_FRAME as f32 {
            // Backlog beyond the cap is dropped, not carried into later frames.
            self.accumulator = 0.0;
            return MAX_BURSTS_PER_FRAME * self.quantity;
        }
        let bursts = due as u32;
        self.accumulator -= bursts as f32 * self.frequency;
        bursts * self.quantity
    }
}

/// Keeps this entity's position glued to another entity.
#[derive(Component, Debug, Clone, Copy)]
pub struct FollowTarget(pub Entity);

#[derive(Component, Debug, Clone)]
pub struct Particle {
    pub velocity: Vec2,
    pub age: f32,
    pub lifespan: f32,
    pub scale_start: f32,
    pub scale_end: f32,
}

impl Particle {
    pub fn scale(&self) -> f32 {
        let t = (self.age / self.lifespan).clamp(0.0, 1.0);
        self.scale_start + (self.scale_end - self.scale_start) * t
    }

    pub fn expired(&self) -> bool {
        self.age >= self.lifespan
    }
}

fn follow_targets(
    mut commands: Commands,
    mut q_followers: Query<(Entity, &FollowTarget, &mut Transform), With<ParticleEmitter>>,
    q_targets: Query<&Transform, Without<ParticleEmitter>>,
) {
    for (entity, follow, mut tf) in &mut q_followers {
        match q_targets.get(follow.0) {
            Ok(target) => {
                tf.translation.x = target.translation.x;
                tf.translation.y = target.translation.y;
            }
            Err(_) => {
                commands.entity(entity).remove::<FollowTarget>();
            }
        }
    }
}

fn emit_particles(
    mut commands: Commands,
    time: Res<Time>,
    mut q_emitters: Query<(&mut ParticleEmitter, &Transform)>,
) {
    let dt = time.delta_secs();
    let mut rng = rand::thread_rng();
    for (mut emitter, tf) in &mut q_emitters {
        let count = emitter.emission_count(dt);
        let (color, z) = match emitter.blend {
            BlendMode::Normal => (Color::WHITE, tf.translation.z),
            BlendMode::Add => (Color::srgba(1.0, 1.0, 1.0, 0.6), tf.translation.z + 0.5),
        };
        for _ in 0..count {
            let angle = rng.gen_range(0.0..std::f32::consts::TAU);
            let velocity = Vec2::from_angle(angle) * emitter.speed;
            commands.spawn((
                Sprite {
                    image: emitter.texture.clone(),
                    color,
                    ..default()
                },
                Transform::from_xyz(tf.translation.x, tf.translation.y, z)
                    .with_scale(Vec3::splat(emitter.scale_start)),
                Particle {
                    velocity,
                    age: 0.0,
                    lifespan: emitter.lifespan,
                    scale_start: emitter.scale_start,
                    scale_end: emitter.scale_end,
                },
                SceneEntity,
            ));
        }
    }
}

fn update_particles(
    mut commands: Commands,
    time: Res<Time>,
    mut q_particles: Query<(Entity, &mut Particle, &mut Transform)>,
) {
    let dt = time.delta_secs();
    for (entity, mut particle, mut tf) in &mut q_particles {
        particle.age += dt;
        if particle.expired() {
            commands.entity(entity).despawn();
            continue;
        }
        tf.translation += particle.velocity.extend(0.0) * dt;
        tf.scale = Vec3::splat(particle.scale());
    }
}
