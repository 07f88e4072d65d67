use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::AxisScoreTable;

/// A 4-character classification code such as `SIRD`.
///
/// Letter order is action, energy, cognition, control. The action position
/// reads `S` or `O`, not the `S`/`T` used for scoring: the profile table is
/// keyed on that convention.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeCode(String);

impl TypeCode {
    /// Wrap an arbitrary string, e.g. a code read back from storage.
    /// No validation: unknown codes resolve to the fallback profile.
    pub fn from_raw(raw: impl Into<String>) -> Self {
        TypeCode(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TypeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Pick the winning letter on each axis. Ties go to the first-listed letter.
pub fn derive_code(table: &AxisScoreTable) -> TypeCode {
    let action = if table.action.first_wins() { 'S' } else { 'O' };
    let energy = if table.energy.first_wins() { 'I' } else { 'E' };
    let cognition = if table.cognition.first_wins() { 'R' } else { 'X' };
    let control = if table.control.first_wins() { 'D' } else { 'C' };

    TypeCode([action, energy, cognition, control].iter().collect())
}
