use bevy::asset::LoadState;
use bevy::ecs::system::SystemParam;
use bevy::prelude::*;

use super::registry::AssetRegistry;
use crate::app::state::{ActiveScene, SceneLifecycle};

/// Fixed frame geometry for a spritesheet. Column/row counts are derived from
/// the image once it has loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpriteFrame {
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone)]
pub struct PendingSheet {
    pub key: String,
    pub frame: SpriteFrame,
}

/// Outcome of probing one tracked handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settle {
    Pending,
    Loaded,
    Failed,
}

/// Handles requested by the active scene's preload that have not settled yet.
#[derive(Resource, Debug, Default)]
pub struct PreloadQueue {
    pending: Vec<(String, Handle<Image>)>,
    sheets: Vec<PendingSheet>,
    failed: usize,
}

impl PreloadQueue {
    pub fn track(&mut self, key: impl Into<String>, handle: Handle<Image>) {
        self.pending.push((key.into(), handle));
    }

    pub fn track_sheet(&mut self, sheet: PendingSheet) {
        self.sheets.push(sheet);
    }

    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    pub fn failed(&self) -> usize {
        self.failed
    }

    pub fn is_settled(&self) -> bool {
        self.pending.is_empty()
    }

    /// Drops every handle `check` reports as settled and counts the failures.
    pub fn retain_pending(&mut self, mut check: impl FnMut(&Handle<Image>) -> Settle) {
        let mut failed = 0;
        self.pending.retain(|(key, handle)| match check(handle) {
            Settle::Pending => true,
            Settle::Loaded => false,
            Settle::Failed => {
                warn!(target: "assets", "asset '{key}' failed to load; scene continues without it");
                failed += 1;
                false
            }
        });
        self.failed += failed;
    }

    /// Takes the spritesheets waiting on their source image.
    pub fn drain_sheets(&mut self) -> Vec<PendingSheet> {
        std::mem::take(&mut self.sheets)
    }

    pub fn clear(&mut self) {
        self.pending.clear();
        self.sheets.clear();
        self.failed = 0;
    }
}

/// The scene-facing loader: registers keyed assets and tracks them for the gate.
#[derive(SystemParam)]
pub struct SceneLoader<'w> {
    server: Res<'w, AssetServer>,
    registry: ResMut<'w, AssetRegistry>,
    queue: ResMut<'w, PreloadQueue>,
}

impl SceneLoader<'_> {
    pub fn image(&mut self, key: &str, path: &str) -> Handle<Image> {
        let handle: Handle<Image> = self.server.load(path.to_owned());
        self.registry.insert_image(key, handle.clone());
        self.queue.track(key, handle.clone());
        handle
    }

    /// Registers the sheet's image now; its atlas layout is built when the gate settles.
    pub fn spritesheet(&mut self, key: &str, path: &str, frame: SpriteFrame) -> Handle<Image> {
        let handle = self.image(key, path);
        self.queue.track_sheet(PendingSheet {
            key: key.to_owned(),
            frame,
        });
        handle
    }
}

/// Grid layout for a sheet of `image_size` cut into `frame`-sized cells.
/// `None` when the image is smaller than a single frame.
pub fn sheet_layout(image_size: UVec2, frame: SpriteFrame) -> Option<TextureAtlasLayout> {
    if frame.width == 0 || frame.height == 0 {
        return None;
    }
    let columns = image_size.x / frame.width;
    let rows = image_size.y / frame.height;
    if columns == 0 || rows == 0 {
        return None;
    }
    Some(TextureAtlasLayout::from_grid(
        UVec2::new(frame.width, frame.height),
        columns,
        rows,
        None,
        None,
    ))
}

/// Moves the lifecycle on to `Running` once every tracked image has settled.
pub fn poll_preload(
    server: Res<AssetServer>,
    images: Res<Assets<Image>>,
    mut layouts: ResMut<Assets<TextureAtlasLayout>>,
    mut registry: ResMut<AssetRegistry>,
    mut queue: ResMut<PreloadQueue>,
    active: Option<Res<ActiveScene>>,
    mut next: ResMut<NextState<SceneLifecycle>>,
) {
    queue.retain_pending(|handle| {
        if images.contains(handle) {
            return Settle::Loaded;
        }
        match server.load_state(handle.id()) {
            LoadState::Failed(_) => Settle::Failed,
            _ => Settle::Pending,
        }
    });
    if !queue.is_settled() {
        return;
    }

    for sheet in queue.drain_sheets() {
        let Some(size) = registry.image_size(&sheet.key, &images) else {
            warn!(target: "assets", "spritesheet '{}' has no image data; no frames registered", sheet.key);
            continue;
        };
        match sheet_layout(size, sheet.frame) {
            Some(layout) => {
                let handle = layouts.add(layout);
                registry.insert_atlas(sheet.key, handle);
            }
            None => warn!(
                target: "assets",
                "spritesheet '{}' ({}x{}) smaller than one {}x{} frame",
                sheet.key, size.x, size.y, sheet.frame.width, sheet.frame.height
            ),
        }
    }

    let name = active.map(|a| a.0.name()).unwrap_or("<none>");
    info!(target: "scene", "{name}: preload settled ({} failed)", queue.failed());
    next.set(SceneLifecycle::Running);
}
