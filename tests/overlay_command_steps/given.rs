//! Given steps for overlay command BDD scenarios.

use super::world::OverlayWorld;
use marquee::overlay::domain::{CommandCaller, MissingMediaPolicy};
use rstest_bdd_macros::given;

#[given(r#"an overlay command group guarded by the "{role}" role"#)]
fn overlay_group_with_role(world: &mut OverlayWorld, role: String) {
    world.config.moderator_role = role;
}

#[given("missing media sources are rejected")]
fn missing_media_rejected(world: &mut OverlayWorld) {
    world.config.missing_media = MissingMediaPolicy::Reject;
}

#[given(r#"a caller holding the "{role}" role in a guild"#)]
fn caller_in_guild(world: &mut OverlayWorld, role: String) {
    world.caller = Some(
        CommandCaller::new("4242", "scenario-caller")
            .with_role(role)
            .in_guild("guild-1"),
    );
}

#[given(r#"a caller holding the "{role}" role outside any guild"#)]
fn caller_in_direct_message(world: &mut OverlayWorld, role: String) {
    world.caller = Some(CommandCaller::new("4242", "scenario-caller").with_role(role));
}

#[given("the overlay controller is unavailable")]
fn controller_unavailable(world: &mut OverlayWorld) -> Result<(), eyre::Report> {
    world.publisher.fail_with("controller offline")?;
    Ok(())
}
