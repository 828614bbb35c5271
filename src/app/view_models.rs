use super::*;
use crate::view_models::CertificationCard;

impl MockTestApp {
    /// Catalog entries matching the search box, in catalog order.
    pub fn certification_cards(&self) -> Vec<CertificationCard> {
        self.catalog
            .iter()
            .filter(|cert| cert.matches(&self.prefs.search))
            .map(|cert| CertificationCard::new(cert, self.is_proctored(&cert.id)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use crate::app::test_support::test_app;

    #[test]
    fn search_filters_by_name_and_full_name() {
        let mut app = test_app();
        assert_eq!(app.certification_cards().len(), app.catalog.len());

        app.prefs.search = "  developer ".into();
        let ids: Vec<String> = app.certification_cards().into_iter().map(|c| c.id).collect();
        assert_eq!(ids, vec!["dva-c02".to_string()]);

        app.prefs.search = "SOA-C02".into();
        assert_eq!(app.certification_cards().len(), 1);

        app.prefs.search = "gcp".into();
        assert!(app.certification_cards().is_empty());
    }

    #[test]
    fn cards_reflect_proctored_flag() {
        let mut app = test_app();
        app.set_proctored("dva-c02", true);
        let card = app
            .certification_cards()
            .into_iter()
            .find(|c| c.id == "dva-c02")
            .unwrap();
        assert!(card.proctored);
    }
}
