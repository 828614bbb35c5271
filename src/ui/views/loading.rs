use crate::MockTestApp;
use crate::ui::layout::centered_card;
use egui::{Context, RichText, Spinner};

/// Stays up while the resource is fetched, and after a failed fetch.
pub fn ui_loading(app: &mut MockTestApp, ctx: &Context) {
    centered_card(ctx, 200.0, 420.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(40.0);
            ui.add(Spinner::new().size(32.0));
            ui.add_space(12.0);
            ui.label(RichText::new("Loading questions...").heading());
            if let Some(err) = &app.load_error {
                ui.add_space(10.0);
                ui.label(RichText::new(err).small().weak());
            }
        });
    });
}
