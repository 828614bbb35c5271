use crate::MockTestApp;
use egui::{Button, CentralPanel, Context, Frame, Ui};

pub fn top_panel(app: &mut MockTestApp, ctx: &Context, in_quiz: bool) {
    egui::TopBottomPanel::top("menu_panel").show(ctx, |ui| {
        ui.horizontal_centered(|ui| {
            if in_quiz {
                if ui.button("← Back to Certifications").clicked() {
                    app.back_to_landing();
                    ctx.request_repaint();
                }
            } else {
                ui.strong("MockTest");
            }

            let can_explain = app.runner.as_ref().is_some_and(|r| !r.is_completed());
            if in_quiz && can_explain {
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui
                        .button("✨ Explain")
                        .on_hover_text("Ask Gemini to explain this question")
                        .clicked()
                    {
                        app.open_explain();
                    }
                });
            }
        });
    });
}

pub fn bottom_panel(app: &mut MockTestApp, ctx: &Context) {
    egui::TopBottomPanel::bottom("bottom_panel").show(ctx, |ui| {
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("🌙 Dark mode").clicked() {
                app.prefs.dark_mode = true;
            }
            if ui.button("☀ Light mode").clicked() {
                app.prefs.dark_mode = false;
            }
        });
    });
}

/// Width every view lays its content out in: a little inside the panel,
/// never wider than `max`.
pub fn content_width(ui: &Ui, max: f32) -> f32 {
    (ui.available_width() * 0.97).min(max)
}

/// A card in the middle of the central panel, used by the screens that
/// bracket a quiz (loading and results).
pub fn centered_card(ctx: &Context, est_height: f32, max_width: f32, inner: impl FnOnce(&mut Ui)) {
    CentralPanel::default().show(ctx, |ui| {
        let width = content_width(ui, max_width);
        ui.add_space(((ui.available_height() - est_height) / 2.0).max(0.0));
        ui.vertical_centered(|ui| {
            Frame::group(ui.style())
                .fill(ui.visuals().extreme_bg_color)
                .inner_margin(egui::Margin::same(20))
                .show(ui, |ui| {
                    ui.set_width(width);
                    inner(ui);
                });
        });
    });
}

/// Buttons of equal width sharing one row. Returns the clicked one, if any.
pub fn action_row(ui: &mut Ui, labels: &[&str]) -> Option<usize> {
    let gap = ui.spacing().item_spacing.x;
    let count = labels.len().max(1) as f32;
    let button_width = (ui.available_width() - gap * (count - 1.0)) / count;
    let mut clicked = None;
    ui.horizontal(|ui| {
        for (i, label) in labels.iter().enumerate() {
            if ui.add_sized([button_width, 36.0], Button::new(*label)).clicked() {
                clicked = Some(i);
            }
        }
    });
    clicked
}
