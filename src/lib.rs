pub mod app;
pub mod auth;
pub mod core;
pub mod interaction;
pub mod physics;
pub mod rendering;
pub mod scenes;
pub mod widgets;

// Curated re-exports
pub use app::engine_config::{create_engine_config, screen_to_world, EngineConfig};
pub use app::state::{ActiveScene, SceneKey, SceneLifecycle};
pub use auth::{AuthError, AuthState, AuthStore, HttpLoginTransport, LoginTransport};
pub use core::config::{config::GameConfig, config::WindowConfig};
pub use widgets::{create_button, ButtonAction, LabelButton, UiKit};
