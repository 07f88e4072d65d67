use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::types::QuestionId;

pub const LIKERT_MIN: i64 = 1;
pub const LIKERT_MAX: i64 = 5;

/// Sparse respondent answers keyed by question id.
///
/// Values are stored as given; scoring clamps them into
/// [`LIKERT_MIN`]..=[`LIKERT_MAX`]. Serializes as a JSON object keyed by id.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerMap {
    inner: BTreeMap<QuestionId, i64>,
}

impl AnswerMap {
    pub fn new() -> Self {
        AnswerMap {
            inner: BTreeMap::new(),
        }
    }

    /// Record or overwrite an answer, returning the previous value.
    pub fn record(&mut self, id: QuestionId, value: i64) -> Option<i64> {
        self.inner.insert(id, value)
    }

    pub fn remove(&mut self, id: QuestionId) -> Option<i64> {
        self.inner.remove(&id)
    }

    pub fn get(&self, id: QuestionId) -> Option<i64> {
        self.inner.get(&id).copied()
    }

    pub fn contains(&self, id: QuestionId) -> bool {
        self.inner.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn clear(&mut self) {
        self.inner.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (QuestionId, i64)> + '_ {
        self.inner.iter().map(|(id, value)| (*id, *value))
    }
}

impl FromIterator<(QuestionId, i64)> for AnswerMap {
    fn from_iter<I: IntoIterator<Item = (QuestionId, i64)>>(iter: I) -> Self {
        AnswerMap {
            inner: iter.into_iter().collect(),
        }
    }
}

/// Clamp a raw answer into the Likert range.
pub fn clamp_value(raw: i64) -> u32 {
    raw.clamp(LIKERT_MIN, LIKERT_MAX) as u32
}
