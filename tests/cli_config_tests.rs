//! End-to-end tests for `palette-sync config` commands.

use std::fs;

mod fixtures;
use fixtures::*;

// ============================================================================
// Show Command Tests
// ============================================================================

#[test]
fn test_config_show_default() {
    let env = TestEnv::new();

    let output = env.run(&["config", "show"]);

    assert_eq!(
        output.status.code(),
        Some(0),
        "Show config should succeed. stderr: {}",
        stderr(&output)
    );
    let stdout = stdout(&output);
    assert!(stdout.contains("Enabled:    true"));
    assert!(stdout.contains("Auto-apply: false"));
    assert!(stdout.contains("alacritty"));
}

#[test]
fn test_config_show_json_schema() {
    let env = TestEnv::new();

    let output = env.run(&["config", "show", "--json"]);
    assert_eq!(output.status.code(), Some(0));

    let result: serde_json::Value =
        serde_json::from_str(&stdout(&output)).expect("Should parse JSON output");

    assert_eq!(result["sync"]["enabled"], true);
    assert_eq!(result["sync"]["auto_apply"], false);
    assert_eq!(result["sync"]["applications"].as_array().unwrap().len(), 5);
    assert!(result["paths"]["template_dir"]
        .as_str()
        .unwrap()
        .ends_with("templates"));
    assert_eq!(result["paths"]["theme_dirs"].as_array().unwrap().len(), 3);
}

// ============================================================================
// Set Command Tests
// ============================================================================

#[test]
fn test_config_set_persists() {
    let env = TestEnv::new();

    let output = env.run(&["config", "set", "--auto-apply", "true"]);
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));

    let toml = read(&env.config_dir().join("config.toml"));
    assert!(toml.contains("auto_apply = true"));

    let output = env.run(&["config", "show", "--json"]);
    let result: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(result["sync"]["auto_apply"], true);
    assert_eq!(result["sync"]["enabled"], true);
}

#[test]
fn test_config_set_requires_option() {
    let env = TestEnv::new();

    let output = env.run(&["config", "set"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("At least one configuration option"));
}

#[test]
fn test_config_set_rejects_non_bool() {
    let env = TestEnv::new();
    let output = env.run(&["config", "set", "--enabled", "maybe"]);
    assert_ne!(output.status.code(), Some(0));
    assert!(!env.config_dir().join("config.toml").exists());
}

// ============================================================================
// App Command Tests
// ============================================================================

#[test]
fn test_config_app_disable_and_enable() {
    let env = TestEnv::new();
    env.add_theme("Nordic", DARK_THEME_CSS);

    let output = env.run(&["config", "app", "kitty", "--disable"]);
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));

    assert_eq!(env.run(&["apply", "Nordic"]).status.code(), Some(0));
    assert!(!env.home_file(".config/kitty/theme.conf").exists());
    assert!(env.home_file(".config/rofi/colors.rasi").exists());

    let output = env.run(&["config", "app", "kitty", "--enable"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(env.run(&["apply", "Nordic"]).status.code(), Some(0));
    assert!(env.home_file(".config/kitty/theme.conf").exists());
}

#[test]
fn test_config_app_unknown_application() {
    let env = TestEnv::new();

    let output = env.run(&["config", "app", "xterm", "--enable"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Unknown application 'xterm'"));
}

#[test]
fn test_config_app_requires_switch() {
    let env = TestEnv::new();
    let output = env.run(&["config", "app", "kitty"]);
    assert_ne!(output.status.code(), Some(0));
}

#[test]
fn test_invalid_config_file_is_validation_error() {
    let env = TestEnv::new();
    fs::write(env.config_dir().join("config.toml"), "[sync\nenabled =").unwrap();

    let output = env.run(&["status"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Failed to load configuration"));
}
