//! End-to-end tests for `palette-sync templates` commands.

use std::fs;

mod fixtures;
use fixtures::*;

#[test]
fn test_templates_list_json() {
    let env = TestEnv::new();

    let output = env.run(&["templates", "list", "--json"]);
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));

    let templates: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    let templates = templates.as_array().unwrap();
    assert_eq!(templates.len(), 5);
    assert_eq!(templates[0]["app"], "alacritty");
    assert_eq!(templates[0]["exists"], false);
    assert!(templates[0]["destination"]
        .as_str()
        .unwrap()
        .ends_with(".config/alacritty/colors.yml"));
}

#[test]
fn test_templates_reset_all_then_check() {
    let env = TestEnv::new();

    let output = env.run(&["templates", "reset"]);
    assert_eq!(output.status.code(), Some(0));
    for file in [
        "alacritty.yml",
        "waybar-colors.css",
        "kitty.conf",
        "rofi-colors.rasi",
        "dunst.conf",
    ] {
        assert!(env.template_file(file).is_file(), "{file} not written");
    }

    let output = env.run(&["templates", "check"]);
    assert_eq!(output.status.code(), Some(0), "stdout: {}", stdout(&output));
}

#[test]
fn test_templates_check_reports_unknown_placeholder() {
    let env = TestEnv::new();
    assert_eq!(env.run(&["templates", "reset"]).status.code(), Some(0));
    fs::write(env.template_file("kitty.conf"), "background {bg}\n").unwrap();

    let output = env.run(&["templates", "check", "--json"]);

    assert_eq!(output.status.code(), Some(1));
    let results: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    let kitty = results
        .as_array()
        .unwrap()
        .iter()
        .find(|r| r["app"] == "kitty")
        .unwrap()
        .clone();
    assert_eq!(kitty["status"], "invalid");
    assert!(kitty["error"].as_str().unwrap().contains("{bg}"));
}

#[test]
fn test_templates_reset_single_restores_default() {
    let env = TestEnv::new();
    assert_eq!(env.run(&["templates", "reset"]).status.code(), Some(0));
    fs::write(env.template_file("dunst.conf"), "edited").unwrap();

    let output = env.run(&["templates", "reset", "dunst"]);
    assert_eq!(output.status.code(), Some(0));
    assert!(read(&env.template_file("dunst.conf")).contains("[urgency_critical]"));
}

#[test]
fn test_templates_show_falls_back_to_builtin() {
    let env = TestEnv::new();

    let output = env.run(&["templates", "show", "kitty"]);

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("background {background}"));
}

#[test]
fn test_templates_unknown_app() {
    let env = TestEnv::new();
    let output = env.run(&["templates", "show", "xterm"]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_templates_render_theme() {
    let env = TestEnv::new();
    env.add_theme("Nordic", DARK_THEME_CSS);

    let output = env.run(&["templates", "render", "kitty", "Nordic"]);

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("background #2e3440"));
    assert!(!env.home_file(".config/kitty/theme.conf").exists());
}

#[test]
fn test_templates_render_default_palette() {
    let env = TestEnv::new();

    let output = env.run(&["templates", "render", "kitty"]);

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("background #1e1e1e"));
}
