//! Prompt templates for the task-extraction completion calls.

pub mod task_parsing;
pub mod transcript;

pub use task_parsing::{
    format_reference, single_task_system, single_task_user, TASK_PARSING_GUIDELINES_TEMPLATE,
};
pub use transcript::{transcript_system, transcript_user, TRANSCRIPT_CONTRACT};
