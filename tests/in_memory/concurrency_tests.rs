//! Concurrent dispatch against shared adapters.

use std::collections::BTreeSet;

use crate::in_memory::helpers::{
    dispatcher_with, interaction, moderator, publisher, runtime,
};
use marquee::{
    config::OverlayConfig,
    overlay::{
        adapters::memory::RecordingOverlayPublisher,
        domain::{CommandCaller, OverlayValue},
    },
};
use rstest::rstest;
use tokio::runtime::Runtime;

#[rstest]
fn concurrent_invocations_each_publish_once(
    runtime: std::io::Result<Runtime>,
    publisher: RecordingOverlayPublisher,
    moderator: CommandCaller,
) {
    let rt = runtime.expect("runtime should build");
    let dispatcher = dispatcher_with(publisher.clone(), &OverlayConfig::default());

    rt.block_on(async {
        let handles: Vec<_> = (0..32_i64)
            .map(|duration| {
                let dispatcher = dispatcher.clone();
                let request =
                    interaction(&moderator, &format!("/overlay timer duration={duration}"));
                tokio::spawn(async move { dispatcher.dispatch(&request).await })
            })
            .collect();

        for handle in handles {
            handle
                .await
                .expect("task should not panic")
                .expect("dispatch should succeed");
        }
    });

    let durations: BTreeSet<i64> = publisher
        .published()
        .expect("recorded")
        .iter()
        .filter_map(|patch| match patch.get("timer") {
            Some(OverlayValue::Integer(duration)) => Some(*duration),
            _ => None,
        })
        .collect();
    assert_eq!(durations, (0..32).collect::<BTreeSet<i64>>());
}

#[rstest]
fn refused_callers_do_not_disturb_concurrent_moderators(
    runtime: std::io::Result<Runtime>,
    publisher: RecordingOverlayPublisher,
    moderator: CommandCaller,
) {
    let rt = runtime.expect("runtime should build");
    let dispatcher = dispatcher_with(publisher.clone(), &OverlayConfig::default());
    let viewer = CommandCaller::new("200", "viewer").in_guild("guild-1");

    let outcomes = rt.block_on(async {
        let handles: Vec<_> = [&moderator, &viewer]
            .into_iter()
            .cycle()
            .take(16)
            .map(|caller| {
                let dispatcher = dispatcher.clone();
                let request = interaction(caller, "/overlay toggle switch=on");
                tokio::spawn(async move { dispatcher.dispatch(&request).await.is_ok() })
            })
            .collect();

        let mut outcomes = Vec::new();
        for handle in handles {
            outcomes.push(handle.await.expect("task should not panic"));
        }
        outcomes
    });

    assert_eq!(outcomes.iter().filter(|accepted| **accepted).count(), 8);
    assert_eq!(publisher.published().expect("recorded").len(), 8);
}
