//! Shared test fixtures for integration tests.
#![allow(dead_code)] // Not every test binary uses every fixture

use palette_sync::config::Config;
use palette_sync::services::ColorSync;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Stylesheet resembling a dark GTK theme.
pub const DARK_THEME_CSS: &str = "\
/* Dark theme */
@define-color theme_bg_color #2e3440;
@define-color theme_fg_color #eceff4;
@define-color theme_base_color @theme_bg_color;
@define-color theme_text_color @theme_fg_color;
@define-color theme_selected_bg_color rgb(94, 129, 172);
@define-color theme_selected_fg_color #ffffff;
@define-color warning_color #ebcb8b;
@define-color error_color rgba(191, 97, 106, 0.9);
@define-color success_color #a3be8c;
@define-color borders #1b1f26;

window { background-color: @theme_bg_color; }
";

/// Path to the compiled binary.
pub fn palette_sync_bin() -> &'static str {
    env!("CARGO_BIN_EXE_palette-sync")
}

/// An isolated home directory and config directory.
pub struct TestEnv {
    root: TempDir,
}

impl TestEnv {
    /// Creates empty `home/` and `config/` directories in a fresh temp dir.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp dir");
        fs::create_dir_all(root.path().join("home")).expect("Failed to create home");
        fs::create_dir_all(root.path().join("config")).expect("Failed to create config dir");
        Self { root }
    }

    /// Fake `$HOME`.
    pub fn home(&self) -> PathBuf {
        self.root.path().join("home")
    }

    /// Isolated config directory.
    pub fn config_dir(&self) -> PathBuf {
        self.root.path().join("config")
    }

    /// Installs a theme under `$HOME/.themes` and returns its stylesheet path.
    pub fn add_theme(&self, name: &str, css: &str) -> PathBuf {
        let dir = self.home().join(".themes").join(name).join("gtk-3.0");
        fs::create_dir_all(&dir).expect("Failed to create theme dir");
        let stylesheet = dir.join("gtk.css");
        fs::write(&stylesheet, css).expect("Failed to write stylesheet");
        stylesheet
    }

    /// Writes `config.toml` into the config directory.
    pub fn write_config(&self, toml: &str) {
        fs::write(self.config_dir().join("config.toml"), toml).expect("Failed to write config");
    }

    /// Path of a generated file relative to the fake home.
    pub fn home_file(&self, relative: &str) -> PathBuf {
        self.home().join(relative)
    }

    /// Path of a template file in the default template directory.
    pub fn template_file(&self, file_name: &str) -> PathBuf {
        self.config_dir().join("templates").join(file_name)
    }

    /// Sync manager using default config rooted in this environment.
    pub fn sync(&self) -> ColorSync {
        self.sync_with(Config::new())
    }

    /// Sync manager with the given config rooted in this environment.
    ///
    /// Only the fake home's theme directory is searched.
    pub fn sync_with(&self, mut config: Config) -> ColorSync {
        if config.paths.theme_dirs.is_empty() {
            config.paths.theme_dirs = vec![self.home().join(".themes")];
        }
        ColorSync::new(config, self.config_dir(), self.home())
    }

    /// Command for the binary with `HOME` and the config dir isolated.
    pub fn command(&self, args: &[&str]) -> Command {
        let mut cmd = Command::new(palette_sync_bin());
        cmd.env("HOME", self.home())
            .env("PALETTE_SYNC_CONFIG_DIR", self.config_dir())
            .env_remove("RUST_LOG")
            .args(args);
        cmd
    }

    /// Runs the binary and returns its output.
    pub fn run(&self, args: &[&str]) -> Output {
        self.command(args)
            .output()
            .expect("Failed to execute command")
    }
}

/// Reads a file to string, panicking with the path on failure.
pub fn read(path: &Path) -> String {
    fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {}: {e}", path.display()))
}

/// Stdout as a string.
pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Stderr as a string.
pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}
