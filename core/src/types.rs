//! Domain DTOs for the todo API.
//!
//! # Design
//! These types mirror the remote resource's JSON schema but are defined
//! independently of the stub server; integration tests catch any schema
//! drift between the two crates. Date-times are local date-times without an
//! offset, which is exactly how chrono serializes `NaiveDateTime`.

use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A single todo item returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: i64,
    pub description: String,
    pub completed: bool,
    pub deadline: NaiveDateTime,
    pub created_at: NaiveDateTime,
}

/// Payload for creating or updating a todo.
///
/// A `None` completion flag is left out of the JSON entirely. Whatever the
/// remote does with a missing flag is its own business; the client never
/// fills in a default.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TodoRequest {
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
    pub deadline: NaiveDateTime,
}

impl TodoRequest {
    pub fn new(description: impl Into<String>, deadline: NaiveDateTime) -> Self {
        Self {
            description: description.into(),
            completed: None,
            deadline,
        }
    }

    pub fn with_completed(mut self, completed: bool) -> Self {
        self.completed = Some(completed);
        self
    }
}

/// Location of a newly created todo, taken verbatim from the `Location`
/// response header.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourceLocator(String);

impl ResourceLocator {
    pub fn new(location: impl Into<String>) -> Self {
        Self(location.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for ResourceLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<&str> for ResourceLocator {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
