use bevy::prelude::*;
use std::collections::HashMap;

/// String keys to loaded handles. Shared by every scene; registering a key that
/// already exists replaces the old handle.
#[derive(Resource, Debug, Default)]
pub struct AssetRegistry {
    images: HashMap<String, Handle<Image>>,
    atlases: HashMap<String, Handle<TextureAtlasLayout>>,
}

impl AssetRegistry {
    /// Returns the handle previously stored under `key`, if any.
    pub fn insert_image(&mut self, key: impl Into<String>, handle: Handle<Image>) -> Option<Handle<Image>> {
        let key = key.into();
        let previous = self.images.insert(key.clone(), handle);
        if previous.is_some() {
            debug!(target: "assets", "image key '{key}' re-registered; newest handle wins");
        }
        previous
    }

    pub fn image(&self, key: &str) -> Option<&Handle<Image>> {
        self.images.get(key)
    }

    pub fn insert_atlas(&mut self, key: impl Into<String>, layout: Handle<TextureAtlasLayout>) {
        self.atlases.insert(key.into(), layout);
    }

    pub fn atlas(&self, key: &str) -> Option<&Handle<TextureAtlasLayout>> {
        self.atlases.get(key)
    }

    pub fn image_count(&self) -> usize {
        self.images.len()
    }

    /// Native pixel size of a registered image once its data is in `images`.
    pub fn image_size(&self, key: &str, images: &Assets<Image>) -> Option<UVec2> {
        self.image(key).and_then(|h| images.get(h)).map(|img| img.size())
    }
}
