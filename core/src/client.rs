//! The `TodoClient` contract shared by every backend.

use crate::error::ApiError;
use crate::types::{ResourceLocator, Todo, TodoRequest};

/// Operations on the remote todo resource.
///
/// Reads degrade to absence: a keyword with no matches yields an empty list
/// and an unknown id yields `None`. Mutations against a missing todo fail
/// with `ApiError::NotFound`. Any other failure is passed through as-is.
pub trait TodoClient: Send + Sync {
    /// Todos whose content matches `keyword`, in the order the remote
    /// returned them.
    fn list_by_keyword(&self, keyword: &str) -> Result<Vec<Todo>, ApiError>;

    fn get_by_id(&self, id: i64) -> Result<Option<Todo>, ApiError>;

    /// Create a todo and return the location of the new resource.
    fn create(&self, request: &TodoRequest) -> Result<ResourceLocator, ApiError>;

    fn update(&self, id: i64, request: &TodoRequest) -> Result<(), ApiError>;

    fn delete(&self, id: i64) -> Result<(), ApiError>;
}

impl<C: TodoClient + ?Sized> TodoClient for Box<C> {
    fn list_by_keyword(&self, keyword: &str) -> Result<Vec<Todo>, ApiError> {
        (**self).list_by_keyword(keyword)
    }

    fn get_by_id(&self, id: i64) -> Result<Option<Todo>, ApiError> {
        (**self).get_by_id(id)
    }

    fn create(&self, request: &TodoRequest) -> Result<ResourceLocator, ApiError> {
        (**self).create(request)
    }

    fn update(&self, id: i64, request: &TodoRequest) -> Result<(), ApiError> {
        (**self).update(id, request)
    }

    fn delete(&self, id: i64) -> Result<(), ApiError> {
        (**self).delete(id)
    }
}
