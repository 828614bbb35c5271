// src/data.rs

use crate::error::ResourceLoadError;
use crate::model::{Certification, Question};

/// Loads the certification catalog embedded at build time.
pub fn read_catalog_embedded() -> Vec<Certification> {
    let file_content = include_str!("data/catalog.yaml");
    match serde_yaml::from_str(file_content) {
        Ok(catalog) => catalog,
        Err(err) => {
            log::error!("embedded catalog is invalid: {err}");
            Vec::new()
        }
    }
}

pub fn find_certification<'a>(catalog: &'a [Certification], id: &str) -> Option<&'a Certification> {
    catalog.iter().find(|c| c.id == id)
}

/// Parses a question resource and checks every record's answer key.
pub fn parse_questions(json: &str) -> Result<Vec<Question>, ResourceLoadError> {
    let questions: Vec<Question> = serde_json::from_str(json)?;
    for (index, q) in questions.iter().enumerate() {
        q.validate()
            .map_err(|source| ResourceLoadError::InvalidQuestion { index, source })?;
    }
    Ok(questions)
}

/// Joins the public base and a resource path with exactly one slash.
pub fn resource_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    if base.is_empty() {
        path.to_string()
    } else {
        format!("{base}/{path}")
    }
}
