//! Shared fixtures.

use contexta_viewer::User;
use rand::Rng;
use std::time::Duration;

pub fn user(id: &str, name: &str) -> User {
    User::new(id, name)
}

/// A random delay of at most `max_ms` milliseconds.
pub fn jitter(max_ms: u64) -> Duration {
    Duration::from_millis(rand::thread_rng().gen_range(0..=max_ms))
}
