use super::*;
use crate::data::{find_certification, resource_url};

impl MockTestApp {
    /// Follows a route that came from outside the UI (start-up argument or
    /// browser history). Leaving a quiz this way keeps its saved record.
    pub fn follow_route(&mut self, route: Route) {
        if route == self.route {
            return;
        }
        match route {
            Route::Landing => self.show_landing(),
            Route::Quiz { cert_id, resource } => self.start_quiz(&cert_id, resource.as_deref()),
        }
    }

    /// Card click: available certifications start, others get the
    /// "Coming Soon" dialog.
    pub fn open_certification(&mut self, cert_id: &str) {
        let Some(cert) = find_certification(&self.catalog, cert_id).cloned() else {
            log::warn!("unknown certification {cert_id}");
            return;
        };
        if cert.available {
            self.start_quiz(&cert.id, None);
        } else {
            self.coming_soon = Some(cert);
        }
    }

    pub fn close_coming_soon(&mut self) {
        self.coming_soon = None;
    }

    /// Resolves the question resource and starts fetching it. Route
    /// override first, then the catalog entry, then `questions/<id>.json`.
    pub fn start_quiz(&mut self, cert_id: &str, resource: Option<&str>) {
        self.drop_quiz();

        let path = resource
            .map(str::to_string)
            .or_else(|| find_certification(&self.catalog, cert_id).and_then(|c| c.resource.clone()))
            .unwrap_or_else(|| format!("questions/{cert_id}.json"));
        let url = resource_url(&self.config.public_base, &path);
        log::info!("loading {cert_id} from {url}");

        self.loading = Some(PendingLoad {
            cert_id: cert_id.to_string(),
            url: url.clone(),
            task: Some(crate::loader::start_loading(url)),
        });
        self.state = AppState::Quiz;
        self.set_route(Route::Quiz {
            cert_id: cert_id.to_string(),
            resource: resource.map(str::to_string),
        });
    }

    /// The quiz's back button: the saved record goes with it.
    pub fn back_to_landing(&mut self) {
        self.end_proctoring();
        if let Some(runner) = self.runner.take() {
            let _leave = runner.abandon(self.store.as_mut());
        }
        self.show_landing();
    }

    pub fn show_landing(&mut self) {
        self.drop_quiz();
        self.state = AppState::Landing;
        if proctor::take_notice(self.store.as_mut()) {
            self.show_notice = true;
        }
        self.set_route(Route::Landing);
    }

    pub fn dismiss_notice(&mut self) {
        self.show_notice = false;
    }

    /// Forgets everything tied to the current quiz view. In-flight loads and
    /// explanations are discarded with their tasks.
    fn drop_quiz(&mut self) {
        self.runner = None;
        self.loading = None;
        self.load_error = None;
        self.monitor = None;
        self.proctor_warning = None;
        self.explain = None;
        self.last_focused = None;
    }

    fn set_route(&mut self, route: Route) {
        if self.route != route {
            routes::publish(&route);
            self.route = route;
        }
    }
}
