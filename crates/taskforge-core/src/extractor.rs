//! Extraction orchestrator: one completion call per extraction, then every
//! returned record goes through the due-date normalizer.
//!
//! Failure policy: per-record resolver failures degrade that record's field to
//! null inside the normalizer; per-call failures (malformed response, upstream
//! error or timeout) abort the call and come back as a uniform
//! `{success:false, error:...}` envelope. Underlying detail is logged, never
//! exposed to the caller.

use chrono::{DateTime, FixedOffset};
use serde::Serialize;
use serde_json::Value;
use tracing::{error, warn};

use crate::bridge::CompletionBridge;
use crate::error::ExtractError;
use crate::normalize::{normalize_batch, normalize_due_date};
use crate::prompts;
use crate::resolve::reference_now;
use crate::task::TaskRecord;

/// Uniform result envelope returned to transport callers.
#[derive(Debug, Clone, Serialize)]
pub struct ParseOutcome<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ParseOutcome<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn fail(message: &str) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.to_string()),
        }
    }
}

/// Decode a single-task completion payload leniently and normalize its due
/// date against the source text.
pub fn task_from_response(
    payload: &str,
    source_text: &str,
    reference: DateTime<FixedOffset>,
) -> Result<TaskRecord, ExtractError> {
    let value: Value = serde_json::from_str(payload)
        .map_err(|e| ExtractError::MalformedResponse(e.to_string()))?;
    if !value.is_object() {
        return Err(ExtractError::MalformedResponse(
            "expected a JSON object".to_string(),
        ));
    }
    let task: TaskRecord = serde_json::from_value(value)
        .map_err(|e| ExtractError::MalformedResponse(e.to_string()))?;
    Ok(normalize_due_date(task, source_text, reference))
}

/// Decode a transcript completion payload. The `tasks` array is a hard
/// contract: absent or non-array fails the call. Individual non-object
/// elements are skipped with a warning so one bad record never aborts its
/// siblings.
pub fn tasks_from_response(
    payload: &str,
    source_text: &str,
    reference: DateTime<FixedOffset>,
) -> Result<Vec<TaskRecord>, ExtractError> {
    let value: Value = serde_json::from_str(payload)
        .map_err(|e| ExtractError::MalformedResponse(e.to_string()))?;
    let items = value
        .get("tasks")
        .and_then(Value::as_array)
        .ok_or_else(|| ExtractError::MalformedResponse("missing tasks array".to_string()))?;

    let records: Vec<TaskRecord> = items
        .iter()
        .filter_map(|item| match serde_json::from_value(item.clone()) {
            Ok(task) => Some(task),
            Err(e) => {
                warn!(%e, "skipping undecodable task record");
                None
            }
        })
        .collect();

    Ok(normalize_batch(records, source_text, reference))
}

/// Orchestrates prompt assembly, the completion call, and normalization.
pub struct TaskExtractor {
    bridge: CompletionBridge,
}

impl TaskExtractor {
    pub fn new(bridge: CompletionBridge) -> Self {
        Self { bridge }
    }

    /// Build from the environment; `None` when no API key is configured.
    pub fn from_env() -> Option<Self> {
        CompletionBridge::from_env().map(Self::new)
    }

    /// Extract a single task, returning the uniform envelope.
    pub async fn parse_task(&self, task_text: &str) -> ParseOutcome<TaskRecord> {
        match self.parse_task_at(task_text, reference_now()).await {
            Ok(task) => ParseOutcome::ok(task),
            Err(err) => {
                error!(%err, "task parsing failed");
                ParseOutcome::fail("Failed to parse task")
            }
        }
    }

    /// Extract every task from a meeting transcript, returning the uniform
    /// envelope.
    pub async fn parse_transcript(&self, transcript: &str) -> ParseOutcome<Vec<TaskRecord>> {
        match self.parse_transcript_at(transcript, reference_now()).await {
            Ok(tasks) => ParseOutcome::ok(tasks),
            Err(err) => {
                error!(%err, "transcript parsing failed");
                ParseOutcome::fail("Failed to parse transcript")
            }
        }
    }

    /// Single-task extraction against an explicit reference instant. The same
    /// instant feeds the prompt's stated "current time" and the resolver, so
    /// the two can never diverge within one call.
    pub async fn parse_task_at(
        &self,
        task_text: &str,
        reference: DateTime<FixedOffset>,
    ) -> Result<TaskRecord, ExtractError> {
        let system = prompts::single_task_system(reference);
        let user = prompts::single_task_user(reference, task_text);
        let payload = self.bridge.complete_json(&system, &user).await?;
        task_from_response(&payload, task_text, reference)
    }

    /// Transcript extraction against an explicit reference instant.
    pub async fn parse_transcript_at(
        &self,
        transcript: &str,
        reference: DateTime<FixedOffset>,
    ) -> Result<Vec<TaskRecord>, ExtractError> {
        let system = prompts::transcript_system(reference);
        let user = prompts::transcript_user(reference, transcript);
        let payload = self.bridge.complete_json(&system, &user).await?;
        tasks_from_response(&payload, transcript, reference)
    }
}
