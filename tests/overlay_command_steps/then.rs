//! Then steps for overlay command BDD scenarios.

use super::world::OverlayWorld;
use marquee::overlay::{
    domain::{OverlayResponse, OverlayValue, SlashCommandError},
    services::OverlayCommandError,
};
use rstest_bdd_macros::then;

fn response(world: &OverlayWorld) -> Result<&OverlayResponse, eyre::Report> {
    match world.last_result.as_ref() {
        Some(Ok(reply)) => Ok(reply),
        Some(Err(error)) => Err(eyre::eyre!("command failed: {error}")),
        None => Err(eyre::eyre!("no command was run")),
    }
}

fn failure(world: &OverlayWorld) -> Result<&OverlayCommandError, eyre::Report> {
    match world.last_result.as_ref() {
        Some(Err(error)) => Ok(error),
        Some(Ok(reply)) => Err(eyre::eyre!("expected a failure, got {reply:?}")),
        None => Err(eyre::eyre!("no command was run")),
    }
}

fn published_value(world: &OverlayWorld, field: &str) -> Result<OverlayValue, eyre::Report> {
    let published = world.published()?;
    let patch = published
        .last()
        .ok_or_else(|| eyre::eyre!("nothing was published"))?;
    patch
        .get(field)
        .cloned()
        .ok_or_else(|| eyre::eyre!("field '{field}' missing from {patch:?}"))
}

#[then(r#"the reply is "{message}""#)]
fn reply_is(world: &OverlayWorld, message: String) -> Result<(), eyre::Report> {
    let reply = response(world)?;
    if reply.content() != Some(message.as_str()) || !reply.is_ephemeral() {
        return Err(eyre::eyre!("expected ephemeral '{message}', got {reply:?}"));
    }
    Ok(())
}

#[then("exactly one patch was published")]
fn one_patch_published(world: &OverlayWorld) -> Result<(), eyre::Report> {
    let count = world.published()?.len();
    if count != 1 {
        return Err(eyre::eyre!("expected one patch, found {count}"));
    }
    Ok(())
}

#[then("nothing was published")]
fn nothing_published(world: &OverlayWorld) -> Result<(), eyre::Report> {
    let published = world.published()?;
    if !published.is_empty() {
        return Err(eyre::eyre!("expected no patches, found {published:?}"));
    }
    Ok(())
}

#[then(r#"the published field "{field}" is "{text}""#)]
fn published_text(world: &OverlayWorld, field: String, text: String) -> Result<(), eyre::Report> {
    let value = published_value(world, &field)?;
    if value != OverlayValue::Text(text.clone()) {
        return Err(eyre::eyre!("expected '{text}' for {field}, got {value:?}"));
    }
    Ok(())
}

#[then(r#"the published field "{field}" is null"#)]
fn published_null(world: &OverlayWorld, field: String) -> Result<(), eyre::Report> {
    let value = published_value(world, &field)?;
    if !value.is_null() {
        return Err(eyre::eyre!("expected null for {field}, got {value:?}"));
    }
    Ok(())
}

#[then(r#"the published flag "{field}" is "{flag}""#)]
fn published_flag(world: &OverlayWorld, field: String, flag: String) -> Result<(), eyre::Report> {
    let expected: bool = flag.parse()?;
    let value = published_value(world, &field)?;
    if value != OverlayValue::Boolean(expected) {
        return Err(eyre::eyre!("expected {expected} for {field}, got {value:?}"));
    }
    Ok(())
}

#[then(r#"the published number "{field}" is "{number}""#)]
fn published_number(
    world: &OverlayWorld,
    field: String,
    number: String,
) -> Result<(), eyre::Report> {
    let expected: i64 = number.parse()?;
    let value = published_value(world, &field)?;
    if value != OverlayValue::Integer(expected) {
        return Err(eyre::eyre!("expected {expected} for {field}, got {value:?}"));
    }
    Ok(())
}

#[then(r#"the command is refused for missing the "{role}" role"#)]
fn refused_for_role(world: &OverlayWorld, role: String) -> Result<(), eyre::Report> {
    match failure(world)? {
        OverlayCommandError::MissingRole { role: required, .. } if *required == role => Ok(()),
        other => Err(eyre::eyre!("expected missing role '{role}', got {other}")),
    }
}

#[then("the command is refused as guild-only")]
fn refused_as_guild_only(world: &OverlayWorld) -> Result<(), eyre::Report> {
    match failure(world)? {
        OverlayCommandError::GuildOnly { .. } => Ok(()),
        other => Err(eyre::eyre!("expected guild-only refusal, got {other}")),
    }
}

#[then(r#"the command fails validation for parameter "{parameter}""#)]
fn fails_validation(world: &OverlayWorld, parameter: String) -> Result<(), eyre::Report> {
    match failure(world)? {
        OverlayCommandError::Command(SlashCommandError::InvalidParameterValue {
            parameter: rejected,
            ..
        }) if *rejected == parameter => Ok(()),
        other => Err(eyre::eyre!(
            "expected invalid value for '{parameter}', got {other}"
        )),
    }
}

#[then("the command fails for a missing media source")]
fn fails_for_missing_media(world: &OverlayWorld) -> Result<(), eyre::Report> {
    match failure(world)? {
        OverlayCommandError::MissingMediaSource { .. } => Ok(()),
        other => Err(eyre::eyre!("expected missing media source, got {other}")),
    }
}

#[then(r#"the caller is told "{message}""#)]
fn caller_is_told(world: &OverlayWorld, message: String) -> Result<(), eyre::Report> {
    let shown = failure(world)?.user_message();
    if shown != message {
        return Err(eyre::eyre!("expected '{message}', got '{shown}'"));
    }
    Ok(())
}
