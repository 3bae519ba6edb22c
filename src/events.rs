//! Build event log for osbconfig.
//!
//! Artifact registration is recorded as an append-only NDJSON log (one JSON
//! object per line) at `<workRoot>/events.ndjson`, so a surrounding build
//! can pick up what a run produced.
//!
//! Each event carries:
//! - `ts`: RFC3339 timestamp
//! - `action`: the action performed
//! - `actor`: the owner string (e.g., `user@HOST`)
//! - `details`: freeform object with action-specific details

use crate::error::{OsbConfigError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Actions that can be logged as events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventAction {
    /// A configuration jar was packaged and its artifact path registered.
    Package,
}

impl std::fmt::Display for EventAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventAction::Package => write!(f, "package"),
        }
    }
}

/// An event record for the build log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    /// RFC3339 timestamp when the event occurred.
    pub ts: DateTime<Utc>,

    /// The action that was performed.
    pub action: EventAction,

    /// The actor who performed the action (e.g., `user@HOST`).
    pub actor: String,

    /// Freeform details object with action-specific information.
    pub details: Value,
}

impl Event {
    /// Create a new event with the given action, stamped now, with the
    /// actor taken from the environment (USER@HOSTNAME).
    pub fn new(action: EventAction) -> Self {
        Self {
            ts: Utc::now(),
            action,
            actor: get_actor_string(),
            details: Value::Object(serde_json::Map::new()),
        }
    }

    /// Set the details object for this event.
    pub fn with_details(mut self, details: Value) -> Self {
        self.details = details;
        self
    }

    /// Serialize the event to a single-line JSON string.
    pub fn to_ndjson_line(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| {
            OsbConfigError::UserError(format!("failed to serialize event to JSON: {}", e))
        })
    }
}

/// Get the actor string for event metadata.
fn get_actor_string() -> String {
    let user = std::env::var("USER")
        .or_else(|_| std::env::var("USERNAME"))
        .unwrap_or_else(|_| "unknown".to_string());

    let host = hostname::get()
        .map(|h| h.to_string_lossy().to_string())
        .unwrap_or_else(|_| "unknown".to_string());

    format!("{}@{}", user, host)
}

/// Get the path to the events file under the work root.
pub fn events_file_path(work_root: &Path) -> PathBuf {
    work_root.join("events.ndjson")
}

/// Append an event to the build log, creating the work root and the file
/// as needed. Each append results in one line with a trailing newline.
pub fn append_event(work_root: &Path, event: &Event) -> Result<()> {
    let json_line = event.to_ndjson_line()?;

    if !work_root.exists() {
        std::fs::create_dir_all(work_root).map_err(|e| {
            OsbConfigError::UserError(format!(
                "failed to create work root '{}': {}",
                work_root.display(),
                e
            ))
        })?;
    }

    let events_file = events_file_path(work_root);
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&events_file)
        .map_err(|e| {
            OsbConfigError::UserError(format!(
                "failed to open events file '{}': {}",
                events_file.display(),
                e
            ))
        })?;

    writeln!(file, "{}", json_line).map_err(|e| {
        OsbConfigError::UserError(format!(
            "failed to write event to '{}': {}",
            events_file.display(),
            e
        ))
    })?;

    Ok(())
}
