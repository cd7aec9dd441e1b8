use bevy::color::Luminance;
use bevy::prelude::*;

use crate::widgets::{hex_color, ButtonAction, ButtonClicked, UiKit};

/// Forwards presses on action-tagged buttons as `ButtonClicked` events.
pub fn dispatch_button_clicks(
    q_buttons: Query<(&Interaction, &ButtonAction, Option<&Name>), Changed<Interaction>>,
    mut clicked: EventWriter<ButtonClicked>,
) {
    for (interaction, action, name) in &q_buttons {
        if *interaction == Interaction::Pressed {
            debug!(target: "ui", "button {:?} pressed ({:?})", name.map(Name::as_str), action);
            clicked.write(ButtonClicked(*action));
        }
    }
}

pub fn button_hover_feedback(
    kit: Res<UiKit>,
    mut q_buttons: Query<(&Interaction, &mut BackgroundColor), (Changed<Interaction>, With<ButtonAction>)>,
) {
    let base = hex_color(kit.style.background);
    for (interaction, mut bg) in &mut q_buttons {
        bg.0 = match interaction {
            Interaction::Pressed => base.darker(0.15),
            Interaction::Hovered => base.lighter(0.1),
            Interaction::None => base,
        };
    }
}
