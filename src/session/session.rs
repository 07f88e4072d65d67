use chrono::Utc;
use tracing::{debug, warn};

use crate::catalog::{self, QuestionItem};
use crate::ordering::shuffle;
use crate::scoring::{answered_count, AnswerMap};
use crate::session::config::{ConfigError, ReshufflePolicy, SessionConfig};
use crate::types::{QuestionId, ScoreReport};

/// One respondent's pass through the questionnaire.
///
/// Owns the seed and answers explicitly; the engine functions it calls stay
/// pure. The ordered question list is derived from the seed and rebuilt
/// whenever the seed changes.
#[derive(Debug, Clone)]
pub struct Session {
    config: SessionConfig,
    seed: u64,
    questions: Vec<QuestionItem>,
    answers: AnswerMap,
    current_page: usize,
}

/// Wall-clock milliseconds, the seed source for fresh sessions.
pub fn clock_seed() -> u64 {
    u64::try_from(Utc::now().timestamp_millis()).unwrap_or_default()
}

impl Session {
    /// Start a session seeded from the clock. Fails on an invalid config.
    pub fn new(config: SessionConfig) -> Result<Self, ConfigError> {
        Self::with_seed(config, clock_seed())
    }

    pub fn with_seed(config: SessionConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::with_answers(config, seed, AnswerMap::new())
    }

    pub(crate) fn with_answers(
        config: SessionConfig,
        seed: u64,
        answers: AnswerMap,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        debug!("Starting session with seed {}", seed);
        Ok(Self {
            config,
            seed,
            questions: shuffle(catalog::all(), seed),
            answers,
            current_page: 0,
        })
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// All items in this session's order.
    pub fn questions(&self) -> &[QuestionItem] {
        &self.questions
    }

    pub fn answers(&self) -> &AnswerMap {
        &self.answers
    }

    /// Record an answer. Ids outside the catalog are ignored and reported as
    /// not recorded; values are kept raw and clamped when scored.
    pub fn set_answer(&mut self, id: QuestionId, value: i64) -> bool {
        if !catalog::contains(id) {
            warn!("Ignoring answer for unknown question {}", id);
            return false;
        }
        self.answers.record(id, value);
        true
    }

    pub fn clear_answer(&mut self, id: QuestionId) -> Option<i64> {
        self.answers.remove(id)
    }

    /// Clear every answer and return to the first page. The order is kept.
    pub fn reset(&mut self) {
        self.answers.clear();
        self.current_page = 0;
    }

    /// Draw a new order from the clock. The new seed always differs from
    /// the current one.
    pub fn reshuffle(&mut self) -> u64 {
        let mut seed = clock_seed();
        if seed == self.seed {
            seed = seed.wrapping_add(1);
        }
        self.reshuffle_with_seed(seed);
        seed
    }

    pub fn reshuffle_with_seed(&mut self, seed: u64) {
        debug!(
            "Reshuffling session: seed {} -> {} ({:?})",
            self.seed, seed, self.config.reshuffle_policy
        );
        self.seed = seed;
        self.questions = shuffle(catalog::all(), seed);
        match self.config.reshuffle_policy {
            ReshufflePolicy::Restart => self.reset(),
            ReshufflePolicy::KeepAnswers => self.current_page = 0,
        }
    }

    pub fn page_count(&self) -> usize {
        self.questions.len().div_ceil(self.config.page_size)
    }

    /// Items of page `index`; empty past the last page.
    pub fn page(&self, index: usize) -> &[QuestionItem] {
        let size = self.config.page_size;
        let start = index.saturating_mul(size).min(self.questions.len());
        let end = start.saturating_add(size).min(self.questions.len());
        &self.questions[start..end]
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn current_questions(&self) -> &[QuestionItem] {
        self.page(self.current_page)
    }

    /// Move to `index`, clamped to the last page.
    pub fn go_to_page(&mut self, index: usize) -> usize {
        self.current_page = index.min(self.page_count().saturating_sub(1));
        self.current_page
    }

    pub fn next_page(&mut self) -> usize {
        self.go_to_page(self.current_page.saturating_add(1))
    }

    pub fn prev_page(&mut self) -> usize {
        self.go_to_page(self.current_page.saturating_sub(1))
    }

    pub fn answered_count(&self) -> usize {
        answered_count(&self.questions, &self.answers)
    }

    /// Answered share as a rounded integer percent.
    pub fn progress_percent(&self) -> u8 {
        let total = self.questions.len();
        if total == 0 {
            return 0;
        }
        ((200 * self.answered_count() + total) / (2 * total)) as u8
    }

    pub fn is_complete(&self) -> bool {
        self.answered_count() == self.questions.len()
    }

    /// Provisional or final result for the answers given so far.
    pub fn report(&self) -> ScoreReport {
        ScoreReport::build(&self.questions, &self.answers)
    }
}
