//! Centralized theme configuration for all UI components.
//!
//! All colors and styles are defined here. Render files use
//! `theme::module::CONSTANT` and do not hardcode `Color::*` values.
//!
//! Theme: Galaxy - Purple/pink accents with deep space blue background

use ratatui::style::{Color, Modifier, Style};

/// Shared styles
pub mod palette {
    use super::*;

    pub const CURSOR: Style = Style::new().add_modifier(Modifier::REVERSED);
}

/// Page pane (list and detail share it)
pub mod page {
    use super::*;

    pub const BORDER: Color = Color::Rgb(0, 217, 255);
    pub const BACKGROUND: Color = Color::Rgb(26, 26, 46);
    pub const TITLE: Style = Style::new()
        .fg(Color::Rgb(0, 217, 255))
        .add_modifier(Modifier::BOLD);
    pub const LOADING: Color = Color::Rgb(130, 133, 158);
}

/// Contributor list (grid cards and list rows)
pub mod directory {
    use super::*;

    pub const HEADING: Style = Style::new()
        .fg(Color::Rgb(255, 107, 157))
        .add_modifier(Modifier::BOLD);
    pub const SUMMARY: Color = Color::Rgb(130, 133, 158);
    pub const FILTER_LABEL: Color = Color::Rgb(90, 92, 119);
    pub const FILTER_VALUE: Color = Color::Rgb(255, 217, 61);
    pub const EMPTY: Color = Color::Rgb(224, 108, 117);

    pub const CARD_BORDER: Color = Color::Rgb(90, 92, 119);
    pub const CARD_BORDER_SELECTED: Color = Color::Rgb(255, 107, 157);

    pub const RANK: Color = Color::Rgb(255, 184, 108);
    pub const USERNAME: Style = Style::new()
        .fg(Color::Rgb(0, 217, 255))
        .add_modifier(Modifier::BOLD);
    pub const NAME: Color = Color::Rgb(236, 236, 244);
    pub const POINTS: Color = Color::Rgb(107, 203, 119);
    pub const ROLE: Color = Color::Rgb(189, 147, 249);

    pub const COLUMN_HEADER: Style = Style::new()
        .fg(Color::Rgb(130, 133, 158))
        .add_modifier(Modifier::UNDERLINED);
    pub const ROW_SELECTED_BG: Color = Color::Rgb(45, 45, 72);
    pub const ROW_SELECTED_INDICATOR: Color = Color::Rgb(255, 107, 157);
}

/// Contributor detail view
pub mod detail {
    use super::*;

    pub const USERNAME: Style = Style::new()
        .fg(Color::Rgb(0, 217, 255))
        .add_modifier(Modifier::BOLD);
    pub const NAME: Color = Color::Rgb(236, 236, 244);
    pub const SECTION: Style = Style::new()
        .fg(Color::Rgb(255, 107, 157))
        .add_modifier(Modifier::BOLD);
    pub const LABEL: Color = Color::Rgb(130, 133, 158);
    pub const VALUE: Color = Color::Rgb(236, 236, 244);
    pub const POINTS: Color = Color::Rgb(107, 203, 119);
    pub const LINK: Style = Style::new()
        .fg(Color::Rgb(0, 217, 255))
        .add_modifier(Modifier::UNDERLINED);
    pub const MUTED: Color = Color::Rgb(90, 92, 119);
}

/// Activity heatmap cells, indexed by intensity level 0..=4
pub mod heatmap {
    use super::*;

    pub const LEVELS: [Color; 5] = [
        Color::Rgb(45, 45, 72),
        Color::Rgb(14, 68, 41),
        Color::Rgb(0, 109, 50),
        Color::Rgb(38, 166, 65),
        Color::Rgb(57, 211, 83),
    ];
    pub const LABEL: Color = Color::Rgb(90, 92, 119);
}

/// Search bar styles
pub mod search {
    use super::*;

    pub const BORDER_ACTIVE: Color = Color::Rgb(255, 107, 157);
    pub const BORDER_INACTIVE: Color = Color::Rgb(90, 92, 119);
    pub const BACKGROUND: Color = Color::Rgb(26, 26, 46);
    pub const TEXT_ACTIVE: Color = Color::Rgb(236, 236, 244);
    pub const TEXT_INACTIVE: Color = Color::Rgb(130, 133, 158);
    pub const PLACEHOLDER: Color = Color::Rgb(90, 92, 119);
    pub const MATCH_COUNT: Color = Color::Rgb(130, 133, 158);
}

/// Help popup styles
pub mod help {
    use super::*;

    pub const BORDER: Color = Color::Rgb(0, 217, 255);
    pub const BACKGROUND: Color = Color::Rgb(26, 26, 46);
    pub const TITLE: Style = Style::new()
        .fg(Color::Rgb(0, 217, 255))
        .add_modifier(Modifier::BOLD);
    pub const SECTION_HEADER: Style = Style::new()
        .fg(Color::Rgb(0, 217, 255))
        .add_modifier(Modifier::BOLD);
    pub const KEY: Style = Style::new()
        .fg(Color::Rgb(255, 217, 61))
        .add_modifier(Modifier::BOLD);
    pub const DESCRIPTION: Color = Color::Rgb(236, 236, 244);
    pub const FOOTER: Color = Color::Rgb(90, 92, 119);
}

/// Notification styles
pub mod notification {
    use super::*;

    pub struct NotificationColors {
        pub fg: Color,
        pub bg: Color,
        pub border: Color,
    }

    pub const INFO: NotificationColors = NotificationColors {
        fg: Color::Rgb(236, 236, 244),
        bg: Color::Rgb(55, 55, 85),
        border: Color::Rgb(130, 133, 158),
    };

    pub const WARNING: NotificationColors = NotificationColors {
        fg: Color::Rgb(26, 26, 46),
        bg: Color::Rgb(255, 217, 61),
        border: Color::Rgb(255, 217, 61),
    };

    pub const ERROR: NotificationColors = NotificationColors {
        fg: Color::Rgb(236, 236, 244),
        bg: Color::Rgb(224, 108, 117),
        border: Color::Rgb(255, 135, 145),
    };
}

/// Help line (bottom status bar) styles
pub mod help_line {
    use super::*;

    pub const KEY: Color = Color::Rgb(130, 133, 158);
    pub const DESCRIPTION: Color = Color::Rgb(90, 92, 119);
    pub const SEPARATOR: Color = Color::Rgb(90, 92, 119);
}
