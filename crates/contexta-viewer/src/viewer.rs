use contexta_core::{Context, use_context};
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// The user a request is made on behalf of.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
}

impl User {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Viewer of the request being handled, `None` for anonymous requests.
pub static VIEWER: LazyLock<Context<Option<User>>> =
    LazyLock::new(|| Context::named("viewer", None));

pub fn use_viewer() -> Option<User> {
    use_context(&VIEWER)
}
