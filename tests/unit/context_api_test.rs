//! The facade's context API, as a consumer sees it.

use contexta::{Context, create_context, use_context};
use contexta_viewer::User;
use std::time::Duration;
use test_support::common::user;

#[test]
fn test_default_value_when_nothing_is_bound() {
    let user_context: Context<Option<User>> = create_context(None);
    assert_eq!(use_context(&user_context), None);
}

#[test]
fn test_value_provided_within_run() {
    let user_context = create_context(None);
    user_context.run(Some(user("1", "Alice")), || {
        assert_eq!(use_context(&user_context), Some(user("1", "Alice")));
    });
    assert_eq!(use_context(&user_context), None);
}

#[test]
fn test_theme_context_alongside_user_context() {
    let user_context = create_context(None);
    let theme_context = create_context("light");

    user_context.run(Some(user("8", "Heidi")), || {
        theme_context.run("dark", || {
            assert_eq!(use_context(&user_context), Some(user("8", "Heidi")));
            assert_eq!(use_context(&theme_context), "dark");
        });

        assert_eq!(use_context(&user_context), Some(user("8", "Heidi")));
        assert_eq!(use_context(&theme_context), "light");
    });
}

#[tokio::test]
async fn test_context_maintained_across_timer() {
    let user_context: Context<Option<User>> = create_context(None);

    user_context
        .scope(Some(user("9", "Ivan")), async {
            assert_eq!(use_context(&user_context), Some(user("9", "Ivan")));
            tokio::time::sleep(Duration::from_millis(100)).await;
            assert_eq!(use_context(&user_context), Some(user("9", "Ivan")));
        })
        .await;

    assert_eq!(use_context(&user_context), None);
}

#[tokio::test]
async fn test_facade_spawn_carries_binding() {
    let ctx = std::sync::Arc::new(create_context(0_u32));
    let child_ctx = std::sync::Arc::clone(&ctx);
    let seen = ctx
        .scope(11, async move {
            contexta::spawn(async move { child_ctx.get() }).await
        })
        .await
        .expect("task panicked");
    assert_eq!(seen, 11);
}
