use crate::MockTestApp;
use egui::{Align2, Context, RichText, ScrollArea, Spinner, TextEdit};
use egui_commonmark::CommonMarkViewer;

enum DialogAction {
    SaveKey,
    Explain,
    Close,
}

pub fn ui_explain(app: &mut MockTestApp, ctx: &Context) {
    let question = match (&app.explain, &app.runner) {
        (Some(dialog), Some(runner)) => runner
            .questions()
            .get(dialog.question_index)
            .map(|q| q.question.clone())
            .unwrap_or_default(),
        _ => return,
    };
    let mut open = true;
    let mut action = None;

    let MockTestApp { explain, cm_cache, .. } = &mut *app;
    let Some(dialog) = explain.as_mut() else {
        return;
    };

    egui::Window::new("✨ Gemini Explain")
        .open(&mut open)
        .collapsible(false)
        .resizable(true)
        .default_width(440.0)
        .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            if dialog.awaiting_key {
                ui.label(RichText::new("Enter Gemini API Key:").strong());
                let input = ui.add(
                    TextEdit::singleline(&mut dialog.key_input)
                        .password(true)
                        .hint_text("API key")
                        .desired_width(f32::INFINITY),
                );
                let entered = input.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                if let Some(err) = &dialog.error {
                    ui.label(RichText::new(err).color(egui::Color32::RED));
                }
                ui.add_space(8.0);
                if ui.button("Save & Continue").clicked() || entered {
                    action = Some(DialogAction::SaveKey);
                }
                return;
            }

            ui.label(RichText::new(format!("Question: {question}")));
            ui.add_space(8.0);

            egui::Frame::group(ui.style()).show(ui, |ui| {
                ui.set_min_height(48.0);
                ui.set_width(ui.available_width());
                ScrollArea::vertical().max_height(260.0).show(ui, |ui| {
                    if dialog.is_loading() {
                        ui.horizontal(|ui| {
                            ui.add(Spinner::new());
                            ui.label("Loading explanation...");
                        });
                    } else if let Some(err) = &dialog.error {
                        ui.label(RichText::new(err).color(egui::Color32::RED));
                    } else if let Some(text) =
                        dialog.response.as_deref().filter(|t| !t.trim().is_empty())
                    {
                        CommonMarkViewer::new().show(ui, cm_cache, text);
                    } else {
                        ui.label(RichText::new("No explanation available.").weak());
                    }
                });
            });

            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if ui
                    .add_enabled(!dialog.is_loading(), egui::Button::new("Re-Explain"))
                    .clicked()
                {
                    action = Some(DialogAction::Explain);
                }
                if ui.button("Close").clicked() {
                    action = Some(DialogAction::Close);
                }
            });
        });

    if !open {
        action = Some(DialogAction::Close);
    }
    match action {
        Some(DialogAction::SaveKey) => app.save_api_key(),
        Some(DialogAction::Explain) => app.request_explanation(),
        Some(DialogAction::Close) => app.close_explain(),
        None => {}
    }
}
