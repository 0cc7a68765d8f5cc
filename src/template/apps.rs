//! Known application profiles and their built-in templates.

use std::path::{Path, PathBuf};

/// A target application whose config receives the palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppProfile {
    /// Short application name (used for enable flags and CLI arguments)
    pub name: &'static str,
    /// Template file name inside the template directory
    pub template_file: &'static str,
    /// Destination of the filled template, relative to the home directory
    pub destination: &'static str,
    /// Compiled-in template seeded on first run
    pub default_template: &'static str,
    /// How to pull the generated file into the application's own config
    pub include_hint: &'static str,
}

impl AppProfile {
    /// Resolves the destination path against `home`.
    #[must_use]
    pub fn destination_in(&self, home: &Path) -> PathBuf {
        home.join(self.destination)
    }
}

/// All known applications, in apply order.
pub static APP_PROFILES: [AppProfile; 5] = [
    AppProfile {
        name: "alacritty",
        template_file: "alacritty.yml",
        destination: ".config/alacritty/colors.yml",
        default_template: ALACRITTY_TEMPLATE,
        include_hint: "import: - ~/.config/alacritty/colors.yml",
    },
    AppProfile {
        name: "waybar",
        template_file: "waybar-colors.css",
        destination: ".config/waybar/colors.css",
        default_template: WAYBAR_TEMPLATE,
        include_hint: "@import \"colors.css\";",
    },
    AppProfile {
        name: "kitty",
        template_file: "kitty.conf",
        destination: ".config/kitty/theme.conf",
        default_template: KITTY_TEMPLATE,
        include_hint: "include ./theme.conf",
    },
    AppProfile {
        name: "rofi",
        template_file: "rofi-colors.rasi",
        destination: ".config/rofi/colors.rasi",
        default_template: ROFI_TEMPLATE,
        include_hint: "@import \"colors.rasi\"",
    },
    AppProfile {
        name: "dunst",
        template_file: "dunst.conf",
        destination: ".config/dunst/dunstrc-colors",
        default_template: DUNST_TEMPLATE,
        include_hint: "copy the [urgency_*] sections into dunstrc",
    },
];

/// Looks up a profile by application name.
#[must_use]
pub fn find_app(name: &str) -> Option<&'static AppProfile> {
    APP_PROFILES.iter().find(|app| app.name == name)
}

/// Names of all known applications.
#[must_use]
pub fn app_names() -> Vec<&'static str> {
    APP_PROFILES.iter().map(|app| app.name).collect()
}

const ALACRITTY_TEMPLATE: &str = "# Alacritty colors - Generated by palette-sync
colors:
  primary:
    background: '{background}'
    foreground: '{foreground}'
  cursor:
    text: '{background}'
    cursor: '{cursor}'
  normal:
    black:   '{color0}'
    red:     '{color1}'
    green:   '{color2}'
    yellow:  '{color3}'
    blue:    '{color4}'
    magenta: '{color5}'
    cyan:    '{color6}'
    white:   '{color7}'
  bright:
    black:   '{color8}'
    red:     '{color9}'
    green:   '{color10}'
    yellow:  '{color11}'
    blue:    '{color12}'
    magenta: '{color13}'
    cyan:    '{color14}'
    white:   '{color15}'
";

const WAYBAR_TEMPLATE: &str = "/* Waybar colors - Generated by palette-sync */
@define-color background {background};
@define-color foreground {foreground};
@define-color color0 {color0};
@define-color color1 {color1};
@define-color color2 {color2};
@define-color color3 {color3};
@define-color color4 {color4};
@define-color color5 {color5};
@define-color color6 {color6};
@define-color color7 {color7};
@define-color color8 {color8};

window#waybar {
    background-color: @background;
    color: @foreground;
}
";

const KITTY_TEMPLATE: &str = "# Kitty colors - Generated by palette-sync
foreground {foreground}
background {background}
cursor {cursor}

color0 {color0}
color1 {color1}
color2 {color2}
color3 {color3}
color4 {color4}
color5 {color5}
color6 {color6}
color7 {color7}
color8 {color8}
color9 {color9}
color10 {color10}
color11 {color11}
color12 {color12}
color13 {color13}
color14 {color14}
color15 {color15}
";

const ROFI_TEMPLATE: &str = "/* Rofi colors - Generated by palette-sync */
* {
    background: {background};
    foreground: {foreground};
    selected: {color4};
    active: {color2};
    urgent: {color1};
}
";

const DUNST_TEMPLATE: &str = "# Dunst colors - Generated by palette-sync
[global]
    background = \"{background}\"
    foreground = \"{foreground}\"

[urgency_low]
    background = \"{background}\"
    foreground = \"{foreground}\"

[urgency_normal]
    background = \"{color4}\"
    foreground = \"{foreground}\"

[urgency_critical]
    background = \"{color1}\"
    foreground = \"{foreground}\"
";
