//! taskforge-core: extract structured task records from free-form text and
//! normalize due-date expressions into one of three canonical forms — a
//! weekday name, a vague relative phrase, or a timezone-qualified ISO instant.
//!
//! The completion capability does the language work; this crate owns prompt
//! assembly, the single outbound call, and the deterministic due-date policy
//! that runs on everything the model returns.

mod bridge;
mod config;
mod error;
mod extractor;
mod normalize;
mod resolve;
mod task;
pub mod classify;
pub mod prompts;

pub use bridge::CompletionBridge;
pub use config::CoreConfig;
pub use error::{ExtractError, NormalizeError, NormalizeResult};
pub use extractor::{task_from_response, tasks_from_response, ParseOutcome, TaskExtractor};
pub use normalize::{capitalize_phrase, normalize_batch, normalize_due_date};
pub use resolve::{reference_now, resolve_timestamp, tz_offset, TZ_NAME, TZ_OFFSET_SUFFIX};
pub use task::{Priority, TaskRecord};
