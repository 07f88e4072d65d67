use serde::Serialize;

use crate::types::{Axis, Letter, QuestionId};

/// One Likert statement of the bank.
///
/// A higher answer is agreement with `target`; the axis partner of `target`
/// receives the complement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuestionItem {
    pub id: QuestionId,
    /// Display wording only; never consulted by scoring.
    pub text: &'static str,
    pub axis: Axis,
    pub target: Letter,
}

impl QuestionItem {
    /// The pole that receives `6 - v` when this item is answered `v`.
    pub fn opposite(&self) -> Letter {
        self.target.opposite()
    }
}
