pub mod engine_config;
pub mod game;
pub mod scene_manager;
pub mod state;
