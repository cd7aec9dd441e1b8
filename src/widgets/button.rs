use bevy::prelude::*;

use super::{hex_color, ButtonAction, UiKit};
use crate::core::components::SceneEntity;

/// Look shared by every label button the kit produces.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelStyle {
    pub min_size: Vec2,
    pub corner_radius: f32,
    pub background: u32,
    pub font_size: f32,
    /// Left, right, top, bottom.
    pub padding: [f32; 4],
}

impl Default for LabelStyle {
    fn default() -> Self {
        Self {
            min_size: Vec2::new(40.0, 30.0),
            corner_radius: 20.0,
            background: 0x5e92f3,
            font_size: 20.0,
            padding: [10.0; 4],
        }
    }
}

/// A button description; spawned by `spawn_button_row`.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelButton {
    /// Equal to the display text. Informational only; dispatch uses `action`.
    pub name: String,
    pub text: String,
    pub action: ButtonAction,
    pub style: LabelStyle,
}

impl LabelButton {
    /// Smallest box the label can occupy: text line plus padding, never below `min_size`.
    pub fn min_extent(&self) -> Vec2 {
        let [left, right, top, bottom] = self.style.padding;
        Vec2::new(
            self.style.min_size.x.max(left + right),
            self.style.min_size.y.max(self.style.font_size + top + bottom),
        )
    }
}

pub fn create_button(ui: &UiKit, text: &str, action: ButtonAction) -> LabelButton {
    LabelButton {
        name: text.to_owned(),
        text: text.to_owned(),
        action,
        style: ui.style.clone(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

/// A row (or column) of buttons centred on `(x, y)` in canvas coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct ButtonRow {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub orientation: Orientation,
    pub buttons: Vec<LabelButton>,
}

impl ButtonRow {
    /// Canvas-space bounds (top-left origin, y down).
    pub fn layout_rect(&self) -> Rect {
        let extents = self.buttons.iter().map(LabelButton::min_extent);
        let height = match self.orientation {
            Orientation::Horizontal => extents.fold(0.0_f32, |h, e| h.max(e.y)),
            Orientation::Vertical => extents.map(|e| e.y).sum(),
        };
        let width = match self.orientation {
            Orientation::Horizontal => {
                let natural: f32 = self.buttons.iter().map(|b| b.min_extent().x).sum();
                self.width.max(natural)
            }
            Orientation::Vertical => self
                .buttons
                .iter()
                .map(|b| b.min_extent().x)
                .fold(self.width, f32::max),
        };
        Rect::from_center_size(Vec2::new(self.x, self.y), Vec2::new(width, height))
    }
}

#[derive(Component, Debug)]
pub struct ButtonRowRoot;

/// Spawns the row as an absolutely positioned UI node. `bounds` draws an outline
/// around the row's layout rect.
pub fn spawn_button_row(commands: &mut Commands, row: &ButtonRow, bounds: Option<Color>) -> Entity {
    let rect = row.layout_rect();
    let mut root = commands.spawn((
        Name::new("ButtonRow"),
        ButtonRowRoot,
        SceneEntity,
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(rect.min.x),
            top: Val::Px(rect.min.y),
            width: Val::Px(rect.width()),
            height: Val::Px(rect.height()),
            flex_direction: match row.orientation {
                Orientation::Horizontal => FlexDirection::Row,
                Orientation::Vertical => FlexDirection::Column,
            },
            justify_content: JustifyContent::SpaceEvenly,
            align_items: AlignItems::Center,
            ..default()
        },
    ));
    if let Some(color) = bounds {
        root.insert(Outline::new(Val::Px(1.0), Val::ZERO, color));
    }
    root.with_children(|parent| {
        for button in &row.buttons {
            let [left, right, top, bottom] = button.style.padding;
            parent
                .spawn((
                    Button,
                    Name::new(button.name.clone()),
                    button.action,
                    Node {
                        min_width: Val::Px(button.style.min_size.x),
                        min_height: Val::Px(button.style.min_size.y),
                        padding: UiRect {
                            left: Val::Px(left),
                            right: Val::Px(right),
                            top: Val::Px(top),
                            bottom: Val::Px(bottom),
                        },
                        justify_content: JustifyContent::Center,
                        align_items: AlignItems::Center,
                        ..default()
                    },
                    BorderRadius::all(Val::Px(button.style.corner_radius)),
                    BackgroundColor(hex_color(button.style.background)),
                ))
                .with_children(|label| {
                    label.spawn((
                        Text::new(button.text.clone()),
                        TextFont {
                            font_size: button.style.font_size,
                            ..default()
                        },
                        TextColor(Color::WHITE),
                        TextLayout::new_with_justify(JustifyText::Center),
                    ));
                });
        }
    });
    root.id()
}
