//! From tokens to a submittable task.
//!
//! [`reduce`] folds the authoritative token sequence into a [`TaskRecord`];
//! [`TaskPayload`] projects the record onto the submission API's shape.

mod payload;
mod record;
mod reducer;

pub use payload::TaskPayload;
pub use record::{Priority, TaskRecord, PLACEHOLDER_CONTENT};
pub use reducer::reduce;
