//! When steps for overlay command BDD scenarios.

use super::world::{OverlayWorld, run_async};
use marquee::overlay::domain::{
    CONFIGURATION_INPUT_ID, CONFIGURATION_MODAL_ID, CommandInteraction, ModalSubmission,
    SlashCommandInvocation,
};
use rstest_bdd_macros::when;

#[when(r#"the caller runs "{input}""#)]
fn caller_runs(world: &mut OverlayWorld, input: String) -> Result<(), eyre::Report> {
    let invocation = SlashCommandInvocation::parse(&input)?;
    let interaction = CommandInteraction::new(world.caller()?, invocation);
    let dispatcher = world.dispatcher()?;

    world.last_result = Some(run_async(dispatcher.dispatch(&interaction)));
    Ok(())
}

#[when("the caller submits the configuration '{raw}'")]
fn caller_submits_configuration(world: &mut OverlayWorld, raw: String) -> Result<(), eyre::Report> {
    let submission = ModalSubmission::new(world.caller()?, CONFIGURATION_MODAL_ID)
        .with_value(CONFIGURATION_INPUT_ID, raw);
    let dispatcher = world.dispatcher()?;

    world.last_result = Some(run_async(dispatcher.submit_modal(&submission)));
    Ok(())
}
