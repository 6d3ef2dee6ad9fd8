//! Turning request data into a viewer.

use crate::viewer::User;
use crate::{Result, ViewerError};
use async_trait::async_trait;
use serde::Deserialize;
use std::collections::HashMap;

/// Query parameters consulted when resolving a viewer.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ViewerQuery {
    pub name: Option<String>,
}

impl ViewerQuery {
    /// The `name` parameter, ignoring blank values.
    pub fn name(&self) -> Option<&str> {
        self.name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }
}

/// Resolves the viewer of an inbound request.
#[async_trait]
pub trait ViewerResolver: Send + Sync + 'static {
    /// Short name used in spans.
    fn name(&self) -> &'static str;

    /// `Ok(None)` means the request is anonymous.
    async fn resolve(&self, query: &ViewerQuery) -> Result<Option<User>>;
}

/// Trusts the `name` query parameter as-is.
#[derive(Debug, Clone, Default)]
pub struct QueryNameResolver;

#[async_trait]
impl ViewerResolver for QueryNameResolver {
    fn name(&self) -> &'static str {
        "query_name"
    }

    async fn resolve(&self, query: &ViewerQuery) -> Result<Option<User>> {
        Ok(query.name().map(|name| User::new("1", name)))
    }
}

/// Looks the `name` query parameter up in a fixed set of known users.
///
/// Unknown names are rejected rather than treated as anonymous.
#[derive(Debug, Clone, Default)]
pub struct DirectoryResolver {
    users: HashMap<String, User>,
}

impl DirectoryResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user(mut self, user: User) -> Self {
        self.users.insert(user.name.clone(), user);
        self
    }
}

#[async_trait]
impl ViewerResolver for DirectoryResolver {
    fn name(&self) -> &'static str {
        "directory"
    }

    async fn resolve(&self, query: &ViewerQuery) -> Result<Option<User>> {
        let Some(name) = query.name() else {
            return Ok(None);
        };
        self.users
            .get(name)
            .cloned()
            .map(Some)
            .ok_or_else(|| ViewerError::Resolve(format!("unknown viewer '{name}'")))
    }
}
