// src/ui/helpers.rs
use crate::view_models::{OptionRow, OptionStatus};
use egui::{Button, Color32, RichText, Stroke, Ui, Vec2};

const CORRECT: Color32 = Color32::from_rgb(46, 160, 67);
const INCORRECT: Color32 = Color32::from_rgb(207, 34, 46);

pub fn accent(rgb: Option<[u8; 3]>) -> Color32 {
    rgb.map(|[r, g, b]| Color32::from_rgb(r, g, b))
        .unwrap_or(Color32::LIGHT_BLUE)
}

/// One answer option. Disabled once the question is revealed.
pub fn option_button(ui: &mut Ui, row: &OptionRow, width: f32, enabled: bool) -> bool {
    let text = match row.status {
        OptionStatus::Correct => RichText::new(row.label()).color(CORRECT),
        OptionStatus::Incorrect => RichText::new(row.label()).color(INCORRECT),
        OptionStatus::Neutral => RichText::new(row.label()),
    };
    let mut button = Button::new(text)
        .min_size(Vec2::new(width, 36.0))
        .selected(row.selected)
        .wrap();
    button = match row.status {
        OptionStatus::Correct => button.stroke(Stroke::new(2.0, CORRECT)),
        OptionStatus::Incorrect => button.stroke(Stroke::new(2.0, INCORRECT)),
        OptionStatus::Neutral => button,
    };
    ui.add_enabled(enabled, button).clicked()
}

pub fn verdict_text(correct: bool, label: &str) -> RichText {
    RichText::new(label)
        .heading()
        .color(if correct { CORRECT } else { INCORRECT })
}
