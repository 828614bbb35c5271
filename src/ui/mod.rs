mod helpers;
pub mod layout;
pub mod views;

use std::time::Duration;

use crate::app::MockTestApp;
use crate::model::AppState;
use eframe::{APP_KEY, App, Frame, set_value};
use egui::{Context, Visuals};
use layout::{bottom_panel, top_panel};

impl App for MockTestApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        #[cfg(target_arch = "wasm32")]
        self.follow_route(crate::routes::current_route());

        if self.tick() {
            ctx.request_repaint();
        }
        if self.is_busy() {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
        self.observe_focus(ctx.input(|i| i.focused));

        ctx.set_visuals(if self.prefs.dark_mode {
            Visuals::dark()
        } else {
            Visuals::light()
        });

        let in_quiz = self.state == AppState::Quiz;
        top_panel(self, ctx, in_quiz);
        bottom_panel(self, ctx);

        match self.state {
            AppState::Landing => views::landing::ui_landing(self, ctx),
            AppState::Quiz => match self.runner.as_ref().map(|r| r.is_completed()) {
                None => views::loading::ui_loading(self, ctx),
                Some(false) => views::quiz::ui_quiz(self, ctx),
                Some(true) => views::complete::ui_complete(self, ctx),
            },
        }

        views::dialogs::ui_coming_soon(self, ctx);
        views::dialogs::ui_notice(self, ctx);
        views::explain::ui_explain(self, ctx);
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        set_value(storage, APP_KEY, &self.prefs);
    }
}
