//! End-to-end command flows against the in-memory adapters.

use std::sync::Arc;

use crate::in_memory::helpers::{
    dispatcher_with, interaction, moderator, publisher, runtime,
};
use marquee::{
    config::OverlayConfig,
    overlay::{
        adapters::{BroadcastOverlayPublisher, memory::RecordingOverlayPublisher},
        domain::{CommandCaller, OverlayPatch, OverlayValue},
    },
};
use mockable::DefaultClock;
use rstest::rstest;
use serde_json::json;
use tokio::runtime::Runtime;

#[rstest]
fn every_command_publishes_one_patch_in_order(
    runtime: std::io::Result<Runtime>,
    publisher: RecordingOverlayPublisher,
    moderator: CommandCaller,
) {
    let rt = runtime.expect("runtime should build");
    let dispatcher = dispatcher_with(publisher.clone(), &OverlayConfig::default());
    let commands = [
        r#"/overlay set_text field=title text="Grand Finals""#,
        "/overlay set_media field=headerIcon media_url=https://cdn.example/icon.png",
        "/overlay timer duration=300",
        "/overlay toggle switch=on",
        "/overlay clear_field field=scrollingText",
    ];

    for command in commands {
        rt.block_on(dispatcher.dispatch(&interaction(&moderator, command)))
            .expect("moderator command should succeed");
    }

    let published = publisher.published().expect("patches should be recorded");
    let encoded: Vec<_> = published.iter().map(OverlayPatch::to_json).collect();
    assert_eq!(
        encoded,
        [
            json!({ "title": "Grand Finals" }),
            json!({ "headerIcon": "https://cdn.example/icon.png" }),
            json!({ "timer": 300 }),
            json!({ "display": true }),
            json!({ "scrollingText": null }),
        ]
    );
}

#[rstest]
fn configure_publishes_nothing(
    runtime: std::io::Result<Runtime>,
    publisher: RecordingOverlayPublisher,
    moderator: CommandCaller,
) {
    let rt = runtime.expect("runtime should build");
    let dispatcher = dispatcher_with(publisher.clone(), &OverlayConfig::default());

    let reply = rt
        .block_on(dispatcher.dispatch(&interaction(&moderator, "/overlay configure")))
        .expect("configure should succeed");

    assert!(reply.content().is_none());
    assert!(publisher.published().expect("recorded").is_empty());
}

#[rstest]
fn publisher_recovery_restores_publishing(
    runtime: std::io::Result<Runtime>,
    publisher: RecordingOverlayPublisher,
    moderator: CommandCaller,
) {
    let rt = runtime.expect("runtime should build");
    let dispatcher = dispatcher_with(publisher.clone(), &OverlayConfig::default());
    publisher.fail_with("socket closed").expect("inject failure");

    let failed = rt.block_on(
        dispatcher.dispatch(&interaction(&moderator, "/overlay timer duration=5")),
    );
    publisher.recover().expect("clear failure");
    let recovered = rt.block_on(
        dispatcher.dispatch(&interaction(&moderator, "/overlay timer duration=6")),
    );

    assert!(failed.is_err());
    assert!(recovered.is_ok());
    assert_eq!(
        publisher.published().expect("recorded"),
        [OverlayPatch::single("timer", 6_i64)]
    );
}

#[rstest]
fn custom_moderator_role_is_enforced(
    runtime: std::io::Result<Runtime>,
    publisher: RecordingOverlayPublisher,
    moderator: CommandCaller,
) {
    let rt = runtime.expect("runtime should build");
    let config = OverlayConfig {
        moderator_role: "Stage Crew".to_owned(),
        ..OverlayConfig::default()
    };
    let dispatcher = dispatcher_with(publisher.clone(), &config);
    let crew = CommandCaller::new("300", "crew")
        .with_role("Stage Crew")
        .in_guild("guild-1");

    let refused = rt.block_on(
        dispatcher.dispatch(&interaction(&moderator, "/overlay toggle switch=off")),
    );
    let accepted =
        rt.block_on(dispatcher.dispatch(&interaction(&crew, "/overlay toggle switch=off")));

    assert!(refused.is_err_and(|error| error.is_authorization()));
    assert!(accepted.is_ok());
    assert_eq!(publisher.published().expect("recorded").len(), 1);
}

#[rstest]
fn broadcast_subscribers_receive_dispatched_updates(
    runtime: std::io::Result<Runtime>,
    moderator: CommandCaller,
) {
    let rt = runtime.expect("runtime should build");
    let broadcast = BroadcastOverlayPublisher::new(16, Arc::new(DefaultClock));
    let mut overlay = broadcast.subscribe();
    let dispatcher = dispatcher_with(broadcast, &OverlayConfig::default());

    rt.block_on(dispatcher.dispatch(&interaction(
        &moderator,
        "/overlay set_text field=sideBannerTextOne text=Welcome",
    )))
    .expect("dispatch should succeed");
    let update = rt
        .block_on(overlay.recv())
        .expect("overlay should receive the update");

    assert_eq!(
        update.patch.get("sideBannerTextOne"),
        Some(&OverlayValue::Text("Welcome".to_owned()))
    );
}
