//! The built-in question banks, embedded at compile time.

mod loader;

pub use loader::{LoadError, parse_questions};

use crate::models::Question;
use crate::scenario::{FsLayout, JsonDocument};

const JQ_BANK: &str = include_str!("../../questions/jq.json");
const FIND_BANK: &str = include_str!("../../questions/find.json");

pub fn jq_questions() -> Result<Vec<Question<JsonDocument>>, LoadError> {
    parse_questions("jq", JQ_BANK)
}

pub fn find_questions() -> Result<Vec<Question<FsLayout>>, LoadError> {
    parse_questions("find", FIND_BANK)
}
