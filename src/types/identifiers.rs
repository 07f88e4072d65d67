use std::fmt;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::catalog::QuestionItem;

/// Identifier of a catalog statement. Bank ids run 1..=120, but answer maps
/// may carry arbitrary ids from the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionId(u32);

impl QuestionId {
    pub const fn new(raw: u32) -> Self {
        QuestionId(raw)
    }

    pub const fn get(self) -> u32 {
        self.0
    }
}

impl From<u32> for QuestionId {
    fn from(raw: u32) -> Self {
        QuestionId(raw)
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Content hash of the scoring-relevant shape of a question bank.
///
/// Each item contributes one `id:axis:target\n` line in the given order.
/// Text is excluded: rewording a statement does not change how it scores.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CatalogVersion(String);

impl CatalogVersion {
    pub fn from_items(items: &[QuestionItem]) -> Self {
        let mut hasher = Sha256::new();
        for item in items {
            let line = format!("{}:{}:{}\n", item.id.get(), item.axis.as_str(), item.target);
            hasher.update(line.as_bytes());
        }

        let hash = hasher.finalize();
        let hex = hex::encode(hash);

        CatalogVersion(format!("sha256:{hex}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CatalogVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
