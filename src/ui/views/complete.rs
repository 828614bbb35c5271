use crate::MockTestApp;
use crate::ui::layout::{action_row, centered_card};
use crate::view_models::ScoreSummary;
use egui::{Context, RichText};

pub fn ui_complete(app: &mut MockTestApp, ctx: &Context) {
    let Some(summary) = app.runner.as_ref().map(|r| ScoreSummary::of(r.session())) else {
        return;
    };
    let mut clicked = None;

    centered_card(ctx, 320.0, 460.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.heading("Quiz Complete! 🎉");
            ui.add_space(16.0);
            ui.label("Your Score");
            ui.label(RichText::new(summary.label()).size(40.0).strong());
            ui.label(RichText::new(format!("{}%", summary.percentage())).size(22.0));
            ui.add_space(24.0);
        });
        clicked = action_row(ui, &["Take Quiz Again", "Back to Certifications"]);
    });

    match clicked {
        Some(0) => app.retake_quiz(),
        Some(_) => app.back_to_landing(),
        None => {}
    }
}
