use crate::MockTestApp;
use crate::data::find_certification;
use crate::ui::helpers::accent;
use crate::ui::layout::content_width;
use egui::{Align, Button, CentralPanel, Context, RichText, ScrollArea, TextEdit};

enum CardAction {
    Open(String),
    Proctored(String, bool),
}

pub fn ui_landing(app: &mut MockTestApp, ctx: &Context) {
    let cards = app.certification_cards();
    let threshold = app.config.distraction_threshold;
    let mut action = None;

    CentralPanel::default().show(ctx, |ui| {
        let width = content_width(ui, 640.0);

        ScrollArea::vertical().show(ui, |ui| {
            ui.with_layout(egui::Layout::top_down(Align::Center), |ui| {
                ui.set_width(width);
                ui.add_space(16.0);
                ui.heading(RichText::new("MockTest").size(32.0));
                ui.label("Master AWS certifications with interactive practice tests on MockTest");
                ui.add_space(18.0);
                ui.heading("Choose Your Certification Path");
                ui.label("Select a certification below to start practicing with MCQ tests.");
                ui.add_space(12.0);

                ui.add(
                    TextEdit::singleline(&mut app.prefs.search)
                        .hint_text("Search certifications...")
                        .desired_width(width),
                );
                ui.add_space(12.0);

                if cards.is_empty() {
                    ui.label(RichText::new("No certifications match your search.").weak());
                }

                for card in &cards {
                    let color = find_certification(&app.catalog, &card.id)
                        .and_then(|c| c.accent_rgb());
                    egui::Frame::group(ui.style())
                        .stroke(egui::Stroke::new(1.5, accent(color)))
                        .inner_margin(egui::Margin::symmetric(14, 10))
                        .show(ui, |ui| {
                            ui.set_width(width - 32.0);
                            ui.horizontal(|ui| {
                                ui.label(RichText::new(&card.icon).size(28.0));
                                ui.vertical(|ui| {
                                    ui.strong(&card.name);
                                    ui.label(RichText::new(&card.full_name).weak());
                                });
                                ui.with_layout(egui::Layout::right_to_left(Align::Center), |ui| {
                                    if let Some(url) = &card.external {
                                        ui.hyperlink_to("🔗", url)
                                            .on_hover_text("Go to the certification page");
                                    }
                                });
                            });
                            ui.horizontal(|ui| {
                                let button = Button::new(card.action_label())
                                    .min_size([160.0, 30.0].into());
                                if ui.add(button).clicked() {
                                    action = Some(CardAction::Open(card.id.clone()));
                                }
                                if card.available {
                                    let mut proctored = card.proctored;
                                    if ui
                                        .checkbox(&mut proctored, "Proctored mode")
                                        .on_hover_text(format!(
                                            "Leaving the window more than {threshold} times \
                                             ends the test"
                                        ))
                                        .changed()
                                    {
                                        action = Some(CardAction::Proctored(
                                            card.id.clone(),
                                            proctored,
                                        ));
                                    }
                                }
                            });
                        });
                    ui.add_space(8.0);
                }

                ui.add_space(16.0);
                ui.label(
                    RichText::new(
                        "Ready to ace your AWS certification? \
                         Choose a path and start practicing today!",
                    )
                    .weak(),
                );
            });
        });
    });

    match action {
        Some(CardAction::Open(id)) => app.open_certification(&id),
        Some(CardAction::Proctored(id, enabled)) => app.set_proctored(&id, enabled),
        None => {}
    }
}
