//! Hash routes: `#/` for the certification list and
//! `#/quiz/<certId>[?path=<resource>]` for a quiz.

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Landing,
    Quiz {
        cert_id: String,
        resource: Option<String>,
    },
}

impl Route {
    pub fn quiz(cert_id: &str) -> Self {
        Route::Quiz {
            cert_id: cert_id.to_string(),
            resource: None,
        }
    }

    /// Anything unrecognised routes to the landing page.
    pub fn parse(fragment: &str) -> Self {
        let fragment = fragment.trim();
        let fragment = fragment.strip_prefix('#').unwrap_or(fragment);
        let (path, query) = match fragment.split_once('?') {
            Some((path, query)) => (path, Some(query)),
            None => (fragment, None),
        };

        let mut segments = path.split('/').filter(|s| !s.is_empty());
        match (segments.next(), segments.next(), segments.next()) {
            (Some("quiz"), Some(cert_id), None) => Route::Quiz {
                cert_id: cert_id.to_string(),
                resource: query.and_then(|q| query_param(q, "path")),
            },
            _ => Route::Landing,
        }
    }

    pub fn to_fragment(&self) -> String {
        match self {
            Route::Landing => "#/".to_string(),
            Route::Quiz {
                cert_id,
                resource: None,
            } => format!("#/quiz/{cert_id}"),
            Route::Quiz {
                cert_id,
                resource: Some(path),
            } => format!("#/quiz/{cert_id}?path={path}"),
        }
    }
}

fn query_param(query: &str, name: &str) -> Option<String> {
    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.to_string())
        .filter(|value| !value.is_empty())
}

/// The location hash on the web, read every frame so browser history works.
/// On native it is the first command-line argument.
#[cfg(target_arch = "wasm32")]
pub fn current_route() -> Route {
    web_sys::window()
        .and_then(|w| w.location().hash().ok())
        .map(|hash| Route::parse(&hash))
        .unwrap_or_default()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn current_route() -> Route {
    std::env::args()
        .nth(1)
        .map(|arg| Route::parse(&arg))
        .unwrap_or_default()
}

/// Mirrors the current view into the address bar.
#[cfg(target_arch = "wasm32")]
pub fn publish(route: &Route) {
    if let Some(window) = web_sys::window() {
        if let Err(err) = window.location().set_hash(&route.to_fragment()) {
            log::warn!("could not update location hash: {err:?}");
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn publish(route: &Route) {
    log::debug!("route {}", route.to_fragment());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_quiz_routes() {
        assert_eq!(Route::parse("#/quiz/dva-c02"), Route::quiz("dva-c02"));
        assert_eq!(
            Route::parse("#/quiz/dva-c02?path=questions/alt.json"),
            Route::Quiz {
                cert_id: "dva-c02".into(),
                resource: Some("questions/alt.json".into()),
            }
        );
        assert_eq!(Route::parse("/quiz/x/"), Route::quiz("x"));
    }

    #[test]
    fn unknown_fragments_land() {
        for fragment in ["", "#", "#/", "#/quiz", "#/quiz/a/b", "#/settings"] {
            assert_eq!(Route::parse(fragment), Route::Landing, "{fragment}");
        }
    }

    #[test]
    fn fragments_round_trip() {
        let route = Route::Quiz {
            cert_id: "saa-c03".into(),
            resource: Some("q.json".into()),
        };
        assert_eq!(route.to_fragment(), "#/quiz/saa-c03?path=q.json");
        assert_eq!(Route::parse(&route.to_fragment()), route);
        assert_eq!(Route::Landing.to_fragment(), "#/");
    }
}
