pub mod answers;
pub mod code;
pub mod profile;

use tracing::debug;

use crate::catalog::QuestionItem;
use crate::types::{Axis, AxisBreakdown, AxisScoreTable, ScoreReport};
pub use answers::{clamp_value, AnswerMap, LIKERT_MAX, LIKERT_MIN};
pub use code::{derive_code, TypeCode};
pub use profile::{known_codes, resolve_profile, ProfileEntry};

/// Complement base: an answer `v` gives `v` to the target letter and
/// `LIKERT_COMPLEMENT - v` to its opposite.
pub const LIKERT_COMPLEMENT: u32 = (LIKERT_MAX + LIKERT_MIN) as u32;

/// Sum the evidence of every answered item into per-axis letter totals.
///
/// Recomputed from scratch on every call. Unanswered items and answer ids
/// with no matching item contribute nothing. Order of `items` does not
/// affect the result.
pub fn score(items: &[QuestionItem], answers: &AnswerMap) -> AxisScoreTable {
    let mut table = AxisScoreTable::default();

    for item in items {
        let Some(raw) = answers.get(item.id) else {
            continue;
        };

        let value = clamp_value(raw);
        if i64::from(value) != raw {
            debug!("Clamped answer for question {} from {} to {}", item.id, raw, value);
        }

        table.add(item.target, value);
        table.add(item.opposite(), LIKERT_COMPLEMENT - value);
    }

    table
}

/// Number of `items` that have an answer.
pub fn answered_count(items: &[QuestionItem], answers: &AnswerMap) -> usize {
    items.iter().filter(|item| answers.contains(item.id)).count()
}

impl ScoreReport {
    /// Score, classify and describe one answer set.
    pub fn build(items: &[QuestionItem], answers: &AnswerMap) -> Self {
        let table = score(items, answers);
        let code = derive_code(&table);
        let profile = resolve_profile(code.as_str());

        let axes = Axis::ALL
            .iter()
            .map(|axis| AxisBreakdown::new(*axis, table.axis(*axis)))
            .collect();

        ScoreReport {
            code,
            profile,
            axes,
            answered: answered_count(items, answers),
            total: items.len(),
        }
    }
}
