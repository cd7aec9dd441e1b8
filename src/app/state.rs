use bevy::prelude::*;

/// Lifecycle of whichever scene is active.
/// Preload -> Running -> (StartScene) -> Preload ...
#[derive(States, Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub enum SceneLifecycle {
    /// Scene has registered its assets; waiting for them to settle.
    #[default]
    Preload,
    /// Scene objects are constructed and live.
    Running,
}

/// Every scene the demo knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SceneKey {
    Title,
    Level,
}

impl SceneKey {
    pub fn name(self) -> &'static str {
        match self {
            SceneKey::Title => "SampleGameTitle",
            SceneKey::Level => "SampleGameLevel1",
        }
    }
}

#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveScene(pub SceneKey);

/// Request to stop the current scene and boot another one.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct StartScene(pub SceneKey);

/// Run condition: true while `key` is the active scene.
pub fn scene_active(key: SceneKey) -> impl FnMut(Option<Res<ActiveScene>>) -> bool + Clone {
    move |active: Option<Res<ActiveScene>>| active.is_some_and(|a| a.0 == key)
}
