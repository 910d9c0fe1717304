//! Offline `TodoClient` returning fixed data.
//!
//! Used for local runs without a live todo service. Output never depends on
//! the arguments: every search returns the same two todos, every lookup the
//! same todo, every create the same location, and mutations do nothing.

use chrono::{NaiveDate, NaiveDateTime};
use tracing::debug;

use crate::client::TodoClient;
use crate::error::ApiError;
use crate::types::{ResourceLocator, Todo, TodoRequest};

/// Location handed out by every `create` call.
pub const MOCK_LOCATION: &str = "/api/todos/4";

#[derive(Debug, Clone, Copy, Default)]
pub struct MockTodoClient;

impl MockTodoClient {
    pub fn new() -> Self {
        Self
    }
}

/// Fixture dates are fixed literals, so the epoch fallback is unreachable.
fn noon(year: i32, month: u32, day: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(12, 0, 0))
        .unwrap_or_default()
}

fn example_1() -> Todo {
    Todo {
        id: 1,
        description: "Example 1".to_string(),
        completed: true,
        deadline: noon(2025, 10, 1),
        created_at: noon(2025, 9, 1),
    }
}

fn example_2() -> Todo {
    Todo {
        id: 2,
        description: "Example 2".to_string(),
        completed: false,
        deadline: noon(2025, 10, 2),
        created_at: noon(2025, 9, 2),
    }
}

impl TodoClient for MockTodoClient {
    fn list_by_keyword(&self, keyword: &str) -> Result<Vec<Todo>, ApiError> {
        debug!(keyword, "mock todo search");
        Ok(vec![example_2(), example_1()])
    }

    fn get_by_id(&self, id: i64) -> Result<Option<Todo>, ApiError> {
        debug!(id, "mock todo lookup");
        Ok(Some(example_1()))
    }

    fn create(&self, request: &TodoRequest) -> Result<ResourceLocator, ApiError> {
        debug!(description = %request.description, "mock todo create ignored");
        Ok(ResourceLocator::new(MOCK_LOCATION))
    }

    fn update(&self, id: i64, _request: &TodoRequest) -> Result<(), ApiError> {
        debug!(id, "mock todo update ignored");
        Ok(())
    }

    fn delete(&self, id: i64) -> Result<(), ApiError> {
        debug!(id, "mock todo delete ignored");
        Ok(())
    }
}
