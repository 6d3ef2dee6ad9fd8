//! Many overlapping scopes, across tasks and runtimes.

use contexta::{Context, spawn};
use futures::future::join_all;
use std::sync::{Arc, LazyLock};
use test_support::common::{jitter, user};
use tokio::task::JoinSet;

static USER: LazyLock<Context<Option<contexta_viewer::User>>> =
    LazyLock::new(|| Context::named("user", None));

static REQUEST: LazyLock<Context<u64>> = LazyLock::new(|| Context::named("request", 0));

async fn handle() -> (u64, Option<String>) {
    tokio::time::sleep(jitter(10)).await;
    let name = USER.with(|user| user.as_ref().map(|u| u.name.clone()));
    tokio::task::yield_now().await;
    (REQUEST.get(), name)
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_parallel_runs_do_not_leak() {
    let values = vec![Some(user("10", "Judy")), None, Some(user("11", "Karl"))];

    let runs = values.iter().cloned().map(|value| {
        USER.scope(value, async {
            tokio::time::sleep(jitter(100)).await;
            USER.get()
        })
    });
    let results = join_all(runs).await;

    assert_eq!(results, values);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_nested_contexts_under_join_set() {
    let mut set = JoinSet::new();
    for request in 1..=50_u64 {
        let name = format!("user-{request}");
        set.spawn(REQUEST.scope(
            request,
            USER.scope(Some(user(&request.to_string(), &name)), handle()),
        ));
    }

    let mut seen = Vec::new();
    while let Some(result) = set.join_next().await {
        let (request, name) = result.expect("task panicked");
        assert_eq!(name, Some(format!("user-{request}")));
        seen.push(request);
    }
    seen.sort_unstable();
    assert_eq!(seen, (1..=50).collect::<Vec<_>>());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_fan_out_inside_one_scope() {
    let results = REQUEST
        .scope(99, async {
            let handles: Vec<_> = (0..16)
                .map(|_| {
                    spawn(async {
                        tokio::time::sleep(jitter(5)).await;
                        REQUEST.get()
                    })
                })
                .collect();
            join_all(handles).await
        })
        .await;

    assert!(results.into_iter().all(|r| r.expect("task panicked") == 99));
    assert_eq!(REQUEST.get(), 0);
}

#[tokio::test]
async fn test_shared_context_instance_behind_arc() {
    let ctx = Arc::new(Context::new("idle"));
    let tasks = ["a", "b", "c"].map(|label| {
        let ctx = Arc::clone(&ctx);
        tokio::spawn(async move {
            ctx.scope(label, async {
                tokio::time::sleep(jitter(15)).await;
                ctx.get()
            })
            .await
        })
    });

    let mut seen = Vec::new();
    for task in tasks {
        seen.push(task.await.expect("task panicked"));
    }
    assert_eq!(seen, ["a", "b", "c"]);
    assert_eq!(ctx.get(), "idle");
}
