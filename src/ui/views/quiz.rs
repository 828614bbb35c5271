use crate::MockTestApp;
use crate::ui::helpers::{option_button, verdict_text};
use crate::ui::layout::content_width;
use crate::view_models::{ProgressInfo, ResultInfo, option_rows};
use egui::{Align, Button, CentralPanel, Context, ProgressBar, RichText, ScrollArea};

enum QuizAction {
    Select(usize),
    Submit,
    Next,
}

pub fn ui_quiz(app: &mut MockTestApp, ctx: &Context) {
    let Some(runner) = app.runner.as_ref() else {
        return;
    };
    let index = runner.current_index();
    let Some(question) = runner.current_question() else {
        return;
    };
    let session = runner.session();
    let progress = ProgressInfo::of(session);
    let rows = option_rows(session, index, question);
    let result = ResultInfo::of(session, index, question);
    let has_selection = session.selection(index).is_some_and(|s| !s.is_empty());
    let prompt = question.question.clone();
    let multi = question.is_multi_answer();
    let warning = app.proctor_warning.clone();

    let mut action = None;

    CentralPanel::default().show(ctx, |ui| {
        let panel_width = content_width(ui, 680.0);

        ScrollArea::vertical().show(ui, |ui| {
            ui.with_layout(egui::Layout::top_down(Align::Center), |ui| {
                ui.set_width(panel_width);

                ui.horizontal(|ui| {
                    ui.label(progress.counter_label());
                    ui.with_layout(egui::Layout::right_to_left(Align::Center), |ui| {
                        ui.label(progress.score_label());
                    });
                });
                ui.add(ProgressBar::new(progress.fraction()).desired_width(panel_width));
                if let Some(warning) = &warning {
                    ui.label(RichText::new(warning).color(egui::Color32::YELLOW));
                }
                ui.add_space(12.0);

                ui.label(RichText::new(&prompt).heading());
                if multi {
                    ui.label(RichText::new("Select all that apply.").italics().weak());
                }
                ui.add_space(10.0);

                let revealed = result.is_some();
                for (position, row) in rows.iter().enumerate() {
                    if option_button(ui, row, panel_width, !revealed) {
                        action = Some(QuizAction::Select(position));
                    }
                    ui.add_space(4.0);
                }
                ui.add_space(12.0);

                match &result {
                    None => {
                        let submit = Button::new("Submit Answer").min_size([200.0, 36.0].into());
                        if ui.add_enabled(has_selection, submit).clicked() {
                            action = Some(QuizAction::Submit);
                        }
                    }
                    Some(result) => {
                        ui.label(verdict_text(result.correct, result.banner()));
                        ui.add_space(6.0);
                        if ui
                            .add(Button::new("Next Question").min_size([200.0, 36.0].into()))
                            .clicked()
                        {
                            action = Some(QuizAction::Next);
                        }
                        ui.add_space(10.0);
                        ui.label(RichText::new(result.answers_label()).strong());
                    }
                }
            });
        });
    });

    match action {
        Some(QuizAction::Select(position)) => app.select_option(position),
        Some(QuizAction::Submit) => {
            app.submit_answer();
        }
        Some(QuizAction::Next) => app.next_question(),
        None => {}
    }
}
