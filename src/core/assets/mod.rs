//! Keyed asset registry plus the preload gate that holds a scene in
//! `SceneLifecycle::Preload` until every image it asked for has either loaded or failed.
pub mod preload;
pub mod registry;

pub use preload::{PendingSheet, PreloadQueue, SceneLoader, Settle, SpriteFrame};
pub use registry::AssetRegistry;
