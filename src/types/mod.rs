pub mod axis;
pub mod identifiers;
pub mod score_report;

pub use axis::{Axis, Letter};
pub use identifiers::{CatalogVersion, QuestionId};
pub use score_report::{AxisBreakdown, AxisScore, AxisScoreTable, ScoreReport};
