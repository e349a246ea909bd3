use colored::Color;

/// Palette used to style a rendered comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub added: Color,
    pub removed: Color,
    pub modified: Color,
    pub removed_highlight: Color,
    pub added_highlight: Color,
    pub line_number: Color,
    pub heading: Color,
}

pub const DEFAULT_THEME: &str = "light";

pub const THEMES: phf::Map<&'static str, Theme> = phf::phf_map! {
    "light" => Theme {
        added: Color::Green,
        removed: Color::Red,
        modified: Color::Yellow,
        removed_highlight: Color::Red,
        added_highlight: Color::Green,
        line_number: Color::BrightBlack,
        heading: Color::Blue,
    },
    "dark" => Theme {
        added: Color::BrightGreen,
        removed: Color::BrightRed,
        modified: Color::BrightYellow,
        removed_highlight: Color::Magenta,
        added_highlight: Color::Cyan,
        line_number: Color::White,
        heading: Color::BrightBlue,
    },
};

impl Theme {
    pub fn by_name(name: &str) -> anyhow::Result<Theme> {
        THEMES.get(name).copied().ok_or_else(|| {
            let mut known = THEMES.keys().copied().collect::<Vec<_>>();
            known.sort_unstable();
            anyhow::anyhow!("unknown theme {name}, expected one of: {}", known.join(", "))
        })
    }
}

impl Default for Theme {
    fn default() -> Self {
        THEMES[DEFAULT_THEME]
    }
}
