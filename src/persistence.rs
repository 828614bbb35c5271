//! Saving and restoring a [`QuizSession`] through a [`KeyValueStore`].
//!
//! Restoring never trusts the stored JSON: every field is checked on its own
//! and a field that does not fit the loaded questions falls back to its
//! default. Only a record that is not a JSON object, or that names a
//! different question count, is dropped as a whole.

use std::collections::BTreeSet;

use rand::Rng;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::model::Question;
use crate::quiz::QuizSession;
use crate::shuffle::{ShuffleMapping, shuffle_options};
use crate::storage::KeyValueStore;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Snapshot<'a> {
    question_count: usize,
    current_question_index: usize,
    selected_options: &'a [BTreeSet<usize>],
    show_result: &'a [bool],
    option_index_map: Vec<&'a [usize]>,
    shuffled_options: Vec<&'a [String]>,
    score: usize,
}

pub fn save_session(store: &mut dyn KeyValueStore, key: &str, session: &QuizSession) {
    let snapshot = Snapshot {
        question_count: session.len(),
        current_question_index: session.current_question_index,
        selected_options: &session.selections,
        show_result: &session.revealed,
        option_index_map: session
            .shuffle_mappings
            .iter()
            .map(|m| m.original_index_map.as_slice())
            .collect(),
        shuffled_options: session
            .shuffle_mappings
            .iter()
            .map(|m| m.shuffled_options.as_slice())
            .collect(),
        score: session.score,
    };
    match serde_json::to_string(&snapshot) {
        Ok(json) => store.set(key, &json),
        Err(err) => log::warn!("could not serialize quiz state for {key}: {err}"),
    }
}

pub fn clear_session(store: &mut dyn KeyValueStore, key: &str) {
    store.remove(key);
}

/// Restores a saved session, or `None` when nothing usable is stored.
pub fn load_session<R: Rng + ?Sized>(
    store: &dyn KeyValueStore,
    key: &str,
    questions: &[Question],
    rng: &mut R,
) -> Option<QuizSession> {
    let raw = store.get(key)?;
    let record = match serde_json::from_str::<Value>(&raw) {
        Ok(Value::Object(record)) => record,
        Ok(_) => {
            log::warn!("saved quiz state {key} is not an object; discarding");
            return None;
        }
        Err(err) => {
            log::warn!("saved quiz state {key} is not JSON ({err}); discarding");
            return None;
        }
    };

    let n = questions.len();
    if let Some(count) = record.get("questionCount") {
        if count.as_u64() != Some(n as u64) {
            log::warn!("saved quiz state {key} is for {count} questions, loaded {n}; discarding");
            return None;
        }
    }

    let current_question_index = restore_field(&record, "currentQuestionIndex", |v| {
        as_index(v).filter(|&i| i < n)
    })
    .unwrap_or(0);

    let maps = restore_field(&record, "optionIndexMap", |v| per_question(v, n));
    let texts = restore_field(&record, "shuffledOptions", |v| per_question(v, n));
    let selections = restore_field(&record, "selectedOptions", |v| per_question(v, n));
    let revealed = restore_field(&record, "showResult", |v| per_question(v, n));

    let mut session_mappings = Vec::with_capacity(n);
    let mut session_selections = Vec::with_capacity(n);
    let mut session_revealed = Vec::with_capacity(n);

    for (i, question) in questions.iter().enumerate() {
        let restored = maps
            .and_then(|m| index_list(&m[i]))
            .zip(texts.and_then(|t| string_list(&t[i])))
            .and_then(|(map, shuffled)| ShuffleMapping::restore(&question.options, map, shuffled));

        let Some(mapping) = restored else {
            if maps.is_some() || texts.is_some() {
                log::warn!("saved shuffle for question {i} does not fit; reshuffling it");
            }
            session_mappings.push(shuffle_options(&question.options, rng));
            session_selections.push(BTreeSet::new());
            session_revealed.push(false);
            continue;
        };

        let selection = selections
            .and_then(|s| selection_set(&s[i], mapping.len()))
            .unwrap_or_default();
        let shown = revealed
            .and_then(|r| r[i].as_bool())
            .unwrap_or(false)
            && !selection.is_empty();

        session_mappings.push(mapping);
        session_selections.push(selection);
        session_revealed.push(shown);
    }

    let session = QuizSession::from_parts(
        questions,
        current_question_index,
        session_selections,
        session_revealed,
        session_mappings,
    );

    if let Some(stored) = record.get("score") {
        if stored.as_u64() != Some(session.score() as u64) {
            log::warn!(
                "saved score {stored} disagrees with restored answers; using {}",
                session.score()
            );
        }
    }

    Some(session)
}

/// Restored session if one fits, otherwise a freshly shuffled one.
pub fn open_session<R: Rng + ?Sized>(
    store: &dyn KeyValueStore,
    key: &str,
    questions: &[Question],
    rng: &mut R,
) -> QuizSession {
    match load_session(store, key, questions, rng) {
        Some(session) => {
            log::info!(
                "restored {key} at question {} with score {}",
                session.current_question_index(),
                session.score()
            );
            session
        }
        None => {
            log::info!("starting {key} fresh with {} questions", questions.len());
            QuizSession::new(questions, rng)
        }
    }
}

fn restore_field<'a, T>(
    record: &'a Map<String, Value>,
    name: &str,
    parse: impl FnOnce(&'a Value) -> Option<T>,
) -> Option<T> {
    let value = record.get(name)?;
    let parsed = parse(value);
    if parsed.is_none() {
        log::warn!("discarding invalid `{name}` in saved quiz state");
    }
    parsed
}

fn per_question(value: &Value, n: usize) -> Option<&Vec<Value>> {
    value.as_array().filter(|a| a.len() == n)
}

fn index_list(value: &Value) -> Option<Vec<usize>> {
    value
        .as_array()?
        .iter()
        .map(as_index)
        .collect()
}

fn as_index(value: &Value) -> Option<usize> {
    value.as_u64().and_then(|i| usize::try_from(i).ok())
}

fn string_list(value: &Value) -> Option<Vec<String>> {
    value
        .as_array()?
        .iter()
        .map(|v| v.as_str().map(str::to_string))
        .collect()
}

fn selection_set(value: &Value, option_count: usize) -> Option<BTreeSet<usize>> {
    let indices = index_list(value)?;
    indices
        .iter()
        .all(|&i| i < option_count)
        .then(|| indices.into_iter().collect())
}
