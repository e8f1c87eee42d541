use crossterm::style::Color;

use crate::config::ThemeConfig;

/// Design tokens for the note browser.
///
/// All icons and borders used on screen come from this module.
pub mod icons {
    /// Header title decoration
    pub const PEN: &str = "✍️";

    // Tree expansion.
    pub const EXPANDED: &str = "▼";
    pub const COLLAPSED: &str = "▶";

    // Note branches.
    pub const BRANCH: &str = "├─";
    pub const LAST_BRANCH: &str = "└─";

    pub const SEPARATOR: &str = "•";
    pub const UP_DOWN: &str = "↑/k,↓/j";
}

pub mod icons_ascii {
    pub const PEN: &str = "";

    pub const EXPANDED: &str = "v";
    pub const COLLAPSED: &str = ">";

    pub const BRANCH: &str = "|-";
    pub const LAST_BRANCH: &str = "`-";

    pub const SEPARATOR: &str = "-";
    pub const UP_DOWN: &str = "up/k,down/j";
}

pub mod borders {
    pub const TOP_LEFT: &str = "╭";
    pub const TOP_RIGHT: &str = "╮";
    pub const BOTTOM_LEFT: &str = "╰";
    pub const BOTTOM_RIGHT: &str = "╯";
    pub const HORIZONTAL: &str = "─";
    pub const VERTICAL: &str = "│";
}

pub mod borders_ascii {
    pub const TOP_LEFT: &str = "+";
    pub const TOP_RIGHT: &str = "+";
    pub const BOTTOM_LEFT: &str = "+";
    pub const BOTTOM_RIGHT: &str = "+";
    pub const HORIZONTAL: &str = "-";
    pub const VERTICAL: &str = "|";
}

/// Icon set for one terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyphs {
    pub pen: &'static str,
    pub expanded: &'static str,
    pub collapsed: &'static str,
    pub branch: &'static str,
    pub last_branch: &'static str,
    pub separator: &'static str,
    pub up_down: &'static str,
    pub top_left: &'static str,
    pub top_right: &'static str,
    pub bottom_left: &'static str,
    pub bottom_right: &'static str,
    pub horizontal: &'static str,
    pub vertical: &'static str,
}

impl Glyphs {
    pub fn new(supports_unicode: bool) -> Self {
        if supports_unicode {
            Self {
                pen: icons::PEN,
                expanded: icons::EXPANDED,
                collapsed: icons::COLLAPSED,
                branch: icons::BRANCH,
                last_branch: icons::LAST_BRANCH,
                separator: icons::SEPARATOR,
                up_down: icons::UP_DOWN,
                top_left: borders::TOP_LEFT,
                top_right: borders::TOP_RIGHT,
                bottom_left: borders::BOTTOM_LEFT,
                bottom_right: borders::BOTTOM_RIGHT,
                horizontal: borders::HORIZONTAL,
                vertical: borders::VERTICAL,
            }
        } else {
            Self {
                pen: icons_ascii::PEN,
                expanded: icons_ascii::EXPANDED,
                collapsed: icons_ascii::COLLAPSED,
                branch: icons_ascii::BRANCH,
                last_branch: icons_ascii::LAST_BRANCH,
                separator: icons_ascii::SEPARATOR,
                up_down: icons_ascii::UP_DOWN,
                top_left: borders_ascii::TOP_LEFT,
                top_right: borders_ascii::TOP_RIGHT,
                bottom_left: borders_ascii::BOTTOM_LEFT,
                bottom_right: borders_ascii::BOTTOM_RIGHT,
                horizontal: borders_ascii::HORIZONTAL,
                vertical: borders_ascii::VERTICAL,
            }
        }
    }
}

/// Colors resolved from the `[theme]` config table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub highlight: Color,
    pub muted: Color,
}

impl Palette {
    /// Invalid hex strings fall back to named colors.
    pub fn from_config(theme: &ThemeConfig) -> Self {
        Self {
            highlight: parse_hex(&theme.highlight).unwrap_or(Color::Magenta),
            muted: parse_hex(&theme.muted).unwrap_or(Color::DarkGrey),
        }
    }
}

/// `#RRGGBB` to an RGB color
pub fn parse_hex(hex: &str) -> Option<Color> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 || !digits.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
    Some(Color::Rgb {
        r: channel(0)?,
        g: channel(2)?,
        b: channel(4)?,
    })
}
