//! Shared wire DTOs for the client/backend boundary.
//!
//! DESIGN
//! ======
//! These types mirror the backend's REST payloads so serde round-trips stay
//! lossless. The backend is owned by another team; numeric fields are decoded
//! tolerantly because its JSON layer emits both integers and floats.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// An authenticated user as returned by `/auth/me` and `/users`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier (UUID string).
    pub id: String,
    /// Display name.
    pub name: String,
    /// Login email address.
    pub email: String,
    /// Name of the assigned role, if any.
    pub role: Option<String>,
    /// Avatar image URL, if available.
    pub avatar_url: Option<String>,
    /// Whether the account is active; inactive users cannot sign in.
    #[serde(default = "default_true")]
    pub active: bool,
}

fn default_true() -> bool {
    true
}

/// A role grouping a set of permission names.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Role {
    /// Unique role identifier (UUID string).
    pub id: String,
    /// Role name (e.g. `"admin"`, `"employee"`).
    pub name: String,
    /// Permission names granted to this role.
    #[serde(default)]
    pub permissions: Vec<String>,
}

/// A grantable permission, named `resource:action` (e.g. `"projects:create"`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Permission {
    /// Unique permission identifier (UUID string).
    pub id: String,
    /// Namespaced permission name.
    pub name: String,
}

/// A client project with delivery tracking metadata.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// Unique project identifier (UUID string).
    pub id: String,
    /// Project display name.
    pub name: String,
    /// Client or account the project is delivered for, if recorded.
    pub client_name: Option<String>,
    /// Workflow status (e.g. `"planned"`, `"active"`, `"done"`).
    pub status: String,
    /// Free-form project description.
    pub description: Option<String>,
}

/// A project milestone.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Milestone {
    /// Unique milestone identifier (UUID string).
    pub id: String,
    /// Project this milestone belongs to (UUID string).
    pub project_id: String,
    /// Milestone title.
    pub title: String,
    /// ISO 8601 due date, if set.
    pub due_date: Option<String>,
    /// Whether the milestone has been reached.
    #[serde(default)]
    pub completed: bool,
}

/// A unit of work inside a project, optionally attached to a milestone.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TaskItem {
    /// Unique task identifier (UUID string).
    pub id: String,
    /// Project this task belongs to (UUID string).
    pub project_id: String,
    /// Milestone this task is scheduled under, if any (UUID string).
    pub milestone_id: Option<String>,
    /// Task title.
    pub title: String,
    /// User the task is assigned to, if any (UUID string).
    pub assignee_id: Option<String>,
    /// Workflow status (e.g. `"todo"`, `"doing"`, `"done"`).
    pub status: String,
}

/// A billable service offered on the marketing site and admin screens.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Service {
    /// Unique service identifier (UUID string).
    pub id: String,
    /// Service name.
    pub name: String,
    /// Short description shown on the website.
    pub description: Option<String>,
    /// Hourly or fixed rate, if published.
    pub rate: Option<f64>,
}

/// A chat conversation; the client holds an eventually-consistent cached copy.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Conversation {
    /// Unique conversation identifier (UUID string).
    pub id: String,
    /// `"direct"` for two-party threads, `"group"` otherwise.
    pub kind: String,
    /// Display title; derived server-side for direct conversations.
    pub title: Option<String>,
    /// Participant user identifiers (UUID strings).
    #[serde(default)]
    pub participant_ids: Vec<String>,
    /// Project this conversation is scoped to, if any (UUID string).
    pub project_id: Option<String>,
    /// ISO 8601 timestamp of the most recent message, if any.
    pub last_activity: Option<String>,
}

/// A single chat message inside a conversation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Unique message identifier (UUID string).
    pub id: String,
    /// Conversation this message belongs to (UUID string).
    pub conversation_id: String,
    /// Author user identifier (UUID string).
    pub author_id: String,
    /// Author display name as sent by the backend.
    pub author_name: String,
    /// Message body; empty when `deleted` is set.
    pub content: String,
    /// Whether the message was edited after sending.
    #[serde(default)]
    pub edited: bool,
    /// Whether the message was deleted; deleted messages render a placeholder.
    #[serde(default)]
    pub deleted: bool,
    /// Milliseconds since the Unix epoch.
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub timestamp: i64,
}

/// One participant's online flag inside a `conversation:initial-status` event.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipantStatus {
    /// Participant user identifier (UUID string).
    pub user_id: String,
    /// Last known online state.
    pub online: bool,
}

fn deserialize_i64_from_number<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                return Ok(int);
            }
            #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
            if let Some(float) = number.as_f64()
                && float.is_finite()
                && float.fract() == 0.0
                && float >= i64::MIN as f64
                && float <= i64::MAX as f64
            {
                return Ok(float as i64);
            }
            Err(D::Error::custom("expected integer-compatible number"))
        }
        _ => Err(D::Error::custom("expected number")),
    }
}
