//! Fixtures and helpers shared by the workspace's integration tests.

pub mod common;
pub mod support;
