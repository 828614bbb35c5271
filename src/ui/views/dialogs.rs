use crate::MockTestApp;
use egui::{Align2, Context, RichText};

pub fn ui_coming_soon(app: &mut MockTestApp, ctx: &Context) {
    let Some(cert) = &app.coming_soon else {
        return;
    };
    let mut close = false;

    egui::Window::new("⏳ Coming Soon!")
        .collapsible(false)
        .resizable(false)
        .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.strong(format!("{} - {}", cert.name, cert.full_name));
            ui.add_space(6.0);
            ui.label(
                "We're working hard to bring you practice tests for this certification. \
                 Stay tuned for updates on MockTest!",
            );
            ui.add_space(6.0);
            ui.label("📝 Comprehensive Question Bank");
            ui.label("🎯 Exam-Style Questions");
            ui.add_space(10.0);
            if ui.button("Got it!").clicked() {
                close = true;
            }
        });

    if close {
        app.close_coming_soon();
    }
}

/// Shown on the landing page after a proctored session was ended.
pub fn ui_notice(app: &mut MockTestApp, ctx: &Context) {
    if !app.show_notice {
        return;
    }
    let mut close = false;

    egui::Window::new("Test ended")
        .collapsible(false)
        .resizable(false)
        .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label(
                RichText::new(format!(
                    "Your proctored test was ended because you left the window more than {} times. \
                     Its progress has been cleared.",
                    app.config.distraction_threshold
                ))
                .color(egui::Color32::YELLOW),
            );
            ui.add_space(10.0);
            if ui.button("OK").clicked() {
                close = true;
            }
        });

    if close {
        app.dismiss_notice();
    }
}
