pub mod config;

pub use config::{present_layers, AssetsConfig, AuthConfig, GameConfig, TitleSceneConfig, WindowConfig, BASE_CONFIG, LOCAL_OVERLAY};
