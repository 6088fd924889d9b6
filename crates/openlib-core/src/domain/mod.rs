//! Typed records for Open Library entities
//!
//! Records are plain data: missing strings decode as `""`, missing counts
//! as `-1`, missing lists as empty. Keys without a named field land in the
//! record's [`ExtensionData`] bag.

pub mod author;
pub mod books;
pub mod edition;
pub mod extension;
pub mod list;
pub mod partner;
pub mod reading_log;
pub mod recent_changes;
pub mod search;
pub mod subject;
pub mod work;

pub use author::*;
pub use books::*;
pub use edition::*;
pub use extension::*;
pub use list::*;
pub use partner::*;
pub use reading_log::*;
pub use recent_changes::*;
pub use search::*;
pub use subject::*;
pub use work::*;

/// Sentinel for counts and years the API left out
pub(crate) fn unknown() -> i64 {
    -1
}
