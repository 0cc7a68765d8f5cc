//! GTK theme discovery.
//!
//! A theme named `Foo` is usable when one of the search directories contains
//! `Foo/gtk-3.0/`; its colors come from `Foo/gtk-3.0/gtk.css`.

use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Sub-directory of a theme holding the GTK 3 stylesheet.
pub const GTK3_DIR: &str = "gtk-3.0";

/// Stylesheet file name inside [`GTK3_DIR`].
pub const STYLESHEET_FILE: &str = "gtk.css";

/// Theme search directories in priority order for the given home directory.
///
/// - `~/.themes`
/// - `~/.local/share/themes`
/// - `/usr/share/themes`
#[must_use]
pub fn default_theme_dirs(home: &Path) -> Vec<PathBuf> {
    vec![
        home.join(".themes"),
        home.join(".local/share/themes"),
        PathBuf::from("/usr/share/themes"),
    ]
}

/// An installed theme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeEntry {
    /// Theme name (directory name)
    pub name: String,
    /// Path to the theme's `gtk-3.0` directory
    pub gtk3_dir: PathBuf,
    /// Whether `gtk.css` exists in it
    pub has_stylesheet: bool,
}

/// Locates themes across an ordered list of search directories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeLocator {
    search_dirs: Vec<PathBuf>,
}

impl ThemeLocator {
    /// Creates a locator over `search_dirs` (earlier directories win).
    #[must_use]
    pub fn new(search_dirs: Vec<PathBuf>) -> Self {
        Self { search_dirs }
    }

    /// The directories searched, in priority order.
    #[must_use]
    pub fn search_dirs(&self) -> &[PathBuf] {
        &self.search_dirs
    }

    /// Finds the `gtk-3.0` directory of `theme_name`.
    #[must_use]
    pub fn find_theme(&self, theme_name: &str) -> Option<PathBuf> {
        if matches!(theme_name, "" | "." | "..") || theme_name.contains(&['/', '\\'][..]) {
            return None;
        }

        self.search_dirs
            .iter()
            .map(|base| base.join(theme_name).join(GTK3_DIR))
            .find(|path| path.is_dir())
    }

    /// Lists installed themes that have a `gtk-3.0` directory, sorted by name.
    ///
    /// A theme present in several search directories is reported once, from
    /// the highest-priority directory. Unreadable directories are skipped.
    #[must_use]
    pub fn list_themes(&self) -> Vec<ThemeEntry> {
        let mut themes: BTreeMap<String, ThemeEntry> = BTreeMap::new();

        for base in &self.search_dirs {
            let Ok(entries) = fs::read_dir(base) else {
                continue;
            };

            for entry in entries.flatten() {
                let gtk3_dir = entry.path().join(GTK3_DIR);
                if !gtk3_dir.is_dir() {
                    continue;
                }
                let Some(name) = entry.file_name().to_str().map(str::to_string) else {
                    continue;
                };

                themes.entry(name.clone()).or_insert_with(|| ThemeEntry {
                    name,
                    has_stylesheet: gtk3_dir.join(STYLESHEET_FILE).is_file(),
                    gtk3_dir,
                });
            }
        }

        themes.into_values().collect()
    }
}

/// Reads a stylesheet, replacing invalid UTF-8 sequences.
pub fn read_stylesheet(path: &Path) -> Result<String> {
    let bytes =
        fs::read(path).with_context(|| format!("Failed to read stylesheet: {}", path.display()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn make_theme(base: &Path, name: &str, css: Option<&str>) -> PathBuf {
        let dir = base.join(name).join(GTK3_DIR);
        fs::create_dir_all(&dir).unwrap();
        if let Some(css) = css {
            fs::write(dir.join(STYLESHEET_FILE), css).unwrap();
        }
        dir
    }

    #[test]
    fn test_default_theme_dirs_order() {
        let dirs = default_theme_dirs(Path::new("/home/user"));
        assert_eq!(dirs[0], PathBuf::from("/home/user/.themes"));
        assert_eq!(dirs[1], PathBuf::from("/home/user/.local/share/themes"));
        assert_eq!(dirs[2], PathBuf::from("/usr/share/themes"));
    }

    #[test]
    fn test_find_theme_prefers_earlier_dir() {
        let temp_dir = TempDir::new().unwrap();
        let first = temp_dir.path().join("first");
        let second = temp_dir.path().join("second");
        make_theme(&second, "Arc", Some(""));
        let expected = make_theme(&first, "Arc", Some(""));

        let locator = ThemeLocator::new(vec![first, second]);
        assert_eq!(locator.find_theme("Arc"), Some(expected));
    }

    #[test]
    fn test_find_theme_requires_gtk3_dir() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir_all(temp_dir.path().join("Gtk2Only").join("gtk-2.0")).unwrap();

        let locator = ThemeLocator::new(vec![temp_dir.path().to_path_buf()]);
        assert_eq!(locator.find_theme("Gtk2Only"), None);
        assert_eq!(locator.find_theme("Missing"), None);
    }

    #[test]
    fn test_find_theme_rejects_paths() {
        let temp_dir = TempDir::new().unwrap();
        make_theme(temp_dir.path(), "Arc", Some(""));

        let locator = ThemeLocator::new(vec![temp_dir.path().join("sub")]);
        assert_eq!(locator.find_theme("../Arc"), None);
        assert_eq!(locator.find_theme(""), None);
    }

    #[test]
    fn test_list_themes() {
        let temp_dir = TempDir::new().unwrap();
        let user = temp_dir.path().join("user");
        let system = temp_dir.path().join("system");
        make_theme(&system, "Adwaita", Some("@define-color a #000;"));
        make_theme(&system, "Arc", None);
        make_theme(&user, "Arc", Some(""));
        fs::create_dir_all(system.join("NotATheme")).unwrap();

        let locator = ThemeLocator::new(vec![user.clone(), system, temp_dir.path().join("nope")]);
        let themes = locator.list_themes();

        let names: Vec<&str> = themes.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["Adwaita", "Arc"]);
        assert!(themes[1].has_stylesheet);
        assert!(themes[1].gtk3_dir.starts_with(&user));
    }

    #[test]
    fn test_read_stylesheet_is_lossy() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(STYLESHEET_FILE);
        fs::write(&path, b"@define-color a #fff;\xff\xfe\n").unwrap();

        let content = read_stylesheet(&path).unwrap();
        assert!(content.starts_with("@define-color a #fff;"));
        assert!(content.contains('\u{FFFD}'));
    }

    #[test]
    fn test_read_stylesheet_missing() {
        let temp_dir = TempDir::new().unwrap();
        assert!(read_stylesheet(&temp_dir.path().join("gtk.css")).is_err());
    }
}
