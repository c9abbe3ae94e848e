//! Unit tests for console input handling.

use super::{ConsoleInput, ConsoleSettings, console_caller, parse_line};
use marquee::overlay::domain::SlashCommandError;
use rstest::rstest;
use std::collections::HashMap;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let values: HashMap<String, String> = pairs
        .iter()
        .map(|(key, value)| ((*key).to_owned(), (*value).to_owned()))
        .collect();
    move |key: &str| values.get(key).cloned()
}

#[rstest]
#[case("")]
#[case("   ")]
fn blank_lines_are_skipped(#[case] line: &str) {
    assert_eq!(parse_line(line), Ok(ConsoleInput::Blank));
}

#[rstest]
fn slash_commands_are_parsed() {
    let input = parse_line("/overlay timer duration=60").expect("command should parse");

    let ConsoleInput::Command(invocation) = input else {
        panic!("expected a command, got {input:?}");
    };
    assert_eq!(invocation.qualified_name(), "overlay timer");
}

#[rstest]
fn configure_prefix_carries_raw_json() {
    let input = parse_line(r#":configure {"display": false}"#).expect("prefix should parse");

    assert_eq!(
        input,
        ConsoleInput::Configuration(r#"{"display": false}"#.to_owned())
    );
}

#[rstest]
fn malformed_commands_surface_parse_errors() {
    assert_eq!(
        parse_line("overlay toggle switch=on"),
        Err(SlashCommandError::MissingLeadingSlash)
    );
}

#[rstest]
fn console_caller_defaults_to_moderator_role() {
    let caller = console_caller("Mod", None);

    assert!(caller.has_role("Mod"));
    assert_eq!(caller.guild_id.as_deref(), Some("console"));
}

#[rstest]
fn console_caller_uses_listed_roles() {
    let caller = console_caller("Mod", Some(" Viewer , ,Stage Crew"));

    assert!(!caller.has_role("Mod"));
    assert!(caller.has_role("Viewer"));
    assert!(caller.has_role("Stage Crew"));
}

#[rstest]
fn settings_read_roles_through_the_lookup() {
    let settings = ConsoleSettings::from_lookup(lookup_from(&[
        ("OVERLAY_MODERATOR_ROLE", "Producer"),
        ("OVERLAY_CONSOLE_ROLES", "Producer,Viewer"),
    ]))
    .expect("settings should load");

    let caller = settings.caller();

    assert_eq!(settings.config.moderator_role, "Producer");
    assert!(caller.has_role("Producer"));
    assert!(caller.has_role("Viewer"));
}

#[rstest]
fn settings_without_roles_grant_the_moderator_role() {
    let settings = ConsoleSettings::from_lookup(lookup_from(&[("OVERLAY_MODERATOR_ROLE", "Crew")]))
        .expect("settings should load");

    assert!(settings.roles.is_none());
    assert!(settings.caller().has_role("Crew"));
}
