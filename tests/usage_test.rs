//! Tests for the usage renderer.

use cmdtree::{Command, Opt};

#[test]
fn given_options_with_aliases_when_rendering_then_synopsis_brackets_both() {
    // Arrange
    let mut cmd = Command::new("tool");
    cmd.add_option("url", Opt::new("u", "remote url"));
    cmd.add_option("local", Opt::flag("l", "local only"));

    // Act
    let usage = cmd.usage_string();

    // Assert: options sorted by name
    assert!(usage.starts_with("Usage: tool [--local|-l] [--url|-u]"));
}

#[test]
fn given_option_without_alias_when_rendering_then_only_long_form_appears() {
    // Arrange
    let mut cmd = Command::new("tool");
    cmd.add_option("quiet", Opt::flag("", "suppress output"));

    // Act
    let usage = cmd.usage_string();

    // Assert
    assert!(usage.starts_with("Usage: tool [--quiet]"));
    assert!(!usage.contains("|-"));
}

#[test]
fn given_alias_only_option_when_rendering_then_short_form_appears() {
    // Arrange
    let mut cmd = Command::new("tool");
    cmd.add_option("", Opt::flag("x", "mystery switch"));

    // Act
    let usage = cmd.usage_string();

    // Assert
    assert!(usage.starts_with("Usage: tool [-x]"));
}

#[test]
fn given_option_with_no_name_and_no_alias_when_rendering_then_no_bracket_token() {
    // Arrange
    let mut cmd = Command::new("tool");
    cmd.add_option("url", Opt::new("u", "remote url"));
    cmd.add_option("", Opt::new("", "unaddressable"));

    // Act
    let usage = cmd.usage_string();

    // Assert: the nameless, aliasless option contributes nothing to the
    // synopsis
    let synopsis = usage.lines().next().unwrap();
    assert_eq!(synopsis, "Usage: tool [--url|-u]");
}

#[test]
fn given_children_when_rendering_then_names_joined_in_declaration_order() {
    // Arrange
    let mut cmd = Command::new("tool");
    cmd.add_command(Command::new("zeta"));
    cmd.add_command(Command::new("alpha"));

    // Act
    let usage = cmd.usage_string();

    // Assert: declaration order, not sorted
    assert!(usage.contains(" [zeta|alpha]"));
}

#[test]
fn given_empty_named_child_when_rendering_then_it_is_omitted() {
    // Arrange
    let mut cmd = Command::new("tool");
    cmd.add_command(Command::new("list"));
    cmd.add_command(Command::new(""));
    cmd.add_command(Command::new("push"));

    // Act
    let usage = cmd.usage_string();

    // Assert
    assert!(usage.contains(" [list|push]"));
}

#[test]
fn given_only_empty_named_children_when_rendering_then_no_bracket_list() {
    // Arrange
    let mut cmd = Command::new("tool");
    cmd.add_command(Command::new(""));

    // Act
    let usage = cmd.usage_string();

    // Assert
    let synopsis = usage.lines().next().unwrap();
    assert_eq!(synopsis, "Usage: tool");
}

#[test]
fn given_options_when_rendering_then_descriptions_align_to_longest_name() {
    // Arrange
    let mut cmd = Command::new("tool");
    cmd.add_option("url", Opt::new("u", "remote url"));
    cmd.add_option("verbose", Opt::flag("V", "say more"));

    // Act
    let usage = cmd.usage_string();

    // Assert: "verbose:" is the widest label (8 chars); both description
    // columns start at the same offset
    assert!(usage.contains("\n\nOptions:\n"));
    assert!(usage.contains("  url:     remote url\n"));
    assert!(usage.contains("  verbose: say more\n"));
}

#[test]
fn given_no_options_when_rendering_then_options_section_is_empty() {
    // Arrange
    let cmd = Command::new("bare");

    // Act
    let usage = cmd.usage_string();

    // Assert
    assert_eq!(usage, "Usage: bare\n\nOptions:\n");
}
