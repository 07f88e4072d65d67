// Read-only surface:
// no constructors for callers
// no mutation
// ordering and scoring always work on copies

mod bank;
pub mod question;

use std::sync::OnceLock;

pub use question::QuestionItem;

use crate::types::{Axis, CatalogVersion, QuestionId};

pub const CATALOG_SIZE: usize = 120;
pub const ITEMS_PER_AXIS: usize = 30;
/// Items targeting each pole of an axis. The bank is balanced 15/15.
pub const ITEMS_PER_LETTER: usize = 15;

/// All items in canonical authoring order.
pub fn all() -> &'static [QuestionItem] {
    &bank::BANK
}

/// Look up an item by id. Ids are 1..=120 and stored in order.
pub fn get(id: QuestionId) -> Option<&'static QuestionItem> {
    let index = (id.get() as usize).checked_sub(1)?;
    bank::BANK.get(index).filter(|item| item.id == id)
}

pub fn contains(id: QuestionId) -> bool {
    get(id).is_some()
}

/// The 30 items of one axis, in canonical order.
pub fn by_axis(axis: Axis) -> impl Iterator<Item = &'static QuestionItem> {
    bank::BANK.iter().filter(move |item| item.axis == axis)
}

/// Version of the built-in bank, computed once per process.
pub fn version() -> &'static CatalogVersion {
    static VERSION: OnceLock<CatalogVersion> = OnceLock::new();
    VERSION.get_or_init(|| CatalogVersion::from_items(all()))
}
