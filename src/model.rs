use serde::{Deserialize, Serialize};

use crate::error::QuestionError;

/// One multiple-choice record from a question resource.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub question: String,
    pub options: Vec<String>,
    pub answer: Vec<usize>, // 1-based, into the unshuffled options
}

impl Question {
    pub fn validate(&self) -> Result<(), QuestionError> {
        if self.options.is_empty() {
            return Err(QuestionError::NoOptions);
        }
        if self.answer.is_empty() {
            return Err(QuestionError::NoAnswer);
        }
        if let Some(&bad) = self
            .answer
            .iter()
            .find(|&&a| a == 0 || a > self.options.len())
        {
            return Err(QuestionError::AnswerOutOfRange {
                answer: bad,
                options: self.options.len(),
            });
        }
        Ok(())
    }

    /// Answer key as 0-based original indices, deduplicated. A `0` key has
    /// no option and is skipped.
    pub fn answer_indices(&self) -> std::collections::BTreeSet<usize> {
        self.answer.iter().filter_map(|a| a.checked_sub(1)).collect()
    }

    pub fn is_multi_answer(&self) -> bool {
        self.answer_indices().len() > 1
    }
}

/// Entry of the embedded certification catalog.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Certification {
    pub id: String,
    pub name: String,
    pub full_name: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub color: Option<String>, // "#rrggbb"
    #[serde(default)]
    pub available: bool,
    #[serde(default)]
    pub external: Option<String>,
    #[serde(default)]
    pub resource: Option<String>,
}

impl Certification {
    pub fn matches(&self, query: &str) -> bool {
        let q = query.trim().to_lowercase();
        self.name.to_lowercase().contains(&q) || self.full_name.to_lowercase().contains(&q)
    }

    pub fn accent_rgb(&self) -> Option<[u8; 3]> {
        let hex = self.color.as_deref()?.strip_prefix('#')?;
        if hex.len() != 6 {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        Some([channel(0)?, channel(2)?, channel(4)?])
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub enum AppState {
    Landing,
    Quiz,
}

impl Default for AppState {
    fn default() -> Self {
        AppState::Landing
    }
}
