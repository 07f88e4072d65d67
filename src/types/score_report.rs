use serde::{Deserialize, Serialize};

use crate::scoring::{ProfileEntry, TypeCode};
use crate::types::axis::{Axis, Letter};

/// Running totals for the two poles of one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AxisScore {
    /// Total for the first-listed pole (I, S, R, D).
    pub first: u32,
    /// Total for the second pole (E, T, X, C).
    pub second: u32,
}

impl AxisScore {
    pub fn total(&self) -> u32 {
        self.first + self.second
    }

    /// Integer share of each pole, first share rounded half-up, second the
    /// complement to 100. An axis with no evidence gives the first pole 0,
    /// so it reports `(0, 100)`.
    pub fn percentages(&self) -> (u8, u8) {
        let total = u64::from(self.total());
        let first = if total == 0 {
            0
        } else {
            ((200 * u64::from(self.first) + total) / (2 * total)) as u8
        };
        (first, 100 - first)
    }

    /// Ties resolve toward the first pole.
    pub fn first_wins(&self) -> bool {
        self.first >= self.second
    }
}

/// Letter totals for all four axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AxisScoreTable {
    pub energy: AxisScore,
    pub action: AxisScore,
    pub cognition: AxisScore,
    pub control: AxisScore,
}

impl AxisScoreTable {
    pub fn axis(&self, axis: Axis) -> &AxisScore {
        match axis {
            Axis::Energy => &self.energy,
            Axis::Action => &self.action,
            Axis::Cognition => &self.cognition,
            Axis::Control => &self.control,
        }
    }

    fn axis_mut(&mut self, axis: Axis) -> &mut AxisScore {
        match axis {
            Axis::Energy => &mut self.energy,
            Axis::Action => &mut self.action,
            Axis::Cognition => &mut self.cognition,
            Axis::Control => &mut self.control,
        }
    }

    pub fn total(&self, letter: Letter) -> u32 {
        let score = self.axis(letter.axis());
        if letter.is_first() {
            score.first
        } else {
            score.second
        }
    }

    pub(crate) fn add(&mut self, letter: Letter, amount: u32) {
        let is_first = letter.is_first();
        let score = self.axis_mut(letter.axis());
        if is_first {
            score.first += amount;
        } else {
            score.second += amount;
        }
    }
}

/// Display-ready view of one axis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisBreakdown {
    pub axis: Axis,
    pub first_letter: Letter,
    pub first_total: u32,
    pub first_percent: u8,
    pub second_letter: Letter,
    pub second_total: u32,
    pub second_percent: u8,
}

impl AxisBreakdown {
    pub fn new(axis: Axis, score: &AxisScore) -> Self {
        let (first_letter, second_letter) = axis.letters();
        let (first_percent, second_percent) = score.percentages();
        Self {
            axis,
            first_letter,
            first_total: score.first,
            first_percent,
            second_letter,
            second_total: score.second,
            second_percent,
        }
    }
}

/// The full outcome of scoring one answer set.
/// Fully self-contained and serializable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreReport {
    pub code: TypeCode,
    pub profile: ProfileEntry,
    pub axes: Vec<AxisBreakdown>,

    pub answered: usize,
    pub total: usize,
}
