//! Scene-scoped widget kit: styled label buttons laid out in rows on top of `bevy_ui`.
//!
//! `WidgetsPlugin` inserts the `UiKit` handle during `build`, before any schedule
//! runs, so scene systems can take `Res<UiKit>` without a presence check.
pub mod button;

pub use button::{
    create_button, spawn_button_row, ButtonRow, ButtonRowRoot, LabelButton, LabelStyle, Orientation,
};

use bevy::prelude::*;

use crate::app::engine_config::WIDGETS_PLUGIN_KEY;
use crate::interaction::buttons::{button_hover_feedback, dispatch_button_clicks};

/// What a button does when clicked. Attached to the button entity and carried by
/// `ButtonClicked`; the label text plays no part in dispatch.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonAction {
    StartGame,
}

#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonClicked(pub ButtonAction);

/// The widget handle scenes build buttons from.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct UiKit {
    /// Name the kit was registered under in the engine config.
    pub mapping: String,
    pub style: LabelStyle,
}

pub struct WidgetsPlugin {
    pub mapping: String,
}

impl Default for WidgetsPlugin {
    fn default() -> Self {
        Self {
            mapping: WIDGETS_PLUGIN_KEY.into(),
        }
    }
}

impl Plugin for WidgetsPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(UiKit {
            mapping: self.mapping.clone(),
            style: LabelStyle::default(),
        })
        .add_event::<ButtonClicked>()
        .add_systems(Update, (dispatch_button_clicks, button_hover_feedback));
    }
}

/// `0xRRGGBB` to an sRGB colour.
pub fn hex_color(rgb: u32) -> Color {
    Color::srgb_u8((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
}
