pub struct HelpSection {
    pub title: &'static str,
    pub entries: &'static [(&'static str, &'static str)],
}

pub const HELP_SECTIONS: &[HelpSection] = &[
    HelpSection {
        title: "GLOBAL",
        entries: &[
            ("F1 or ?", "Toggle this help"),
            ("q", "Quit"),
            ("Ctrl+C", "Quit"),
            ("Mouse wheel", "Scroll the page"),
        ],
    },
    HelpSection {
        title: "PEOPLE",
        entries: &[
            ("/", "Search by username or name"),
            ("Enter", "Open profile"),
            ("h/j/k/l/arrows", "Move selection"),
            ("g/G", "First/last person"),
            ("s", "Cycle sort: points, name, activity"),
            ("S", "Reverse sort order"),
            ("r", "Cycle role filter"),
            ("p", "Cycle period filter"),
            ("c", "Clear search and filters"),
            ("v", "Toggle grid/list layout"),
            ("PageDown/Up", "Scroll half a page"),
            ("Ctrl+D/U", "Scroll half a page"),
            ("Esc", "Dismiss message"),
        ],
    },
    HelpSection {
        title: "SEARCH",
        entries: &[
            ("Type", "Filter as you type"),
            ("Enter/Esc", "Back to the list, keep the query"),
        ],
    },
    HelpSection {
        title: "PROFILE",
        entries: &[
            ("Esc/Backspace/h/←", "Back to people"),
            ("y", "Copy profile URL"),
            ("j/k/↑/↓", "Scroll line by line"),
            ("g/G", "Jump to top/bottom"),
            ("PageDown/Up", "Scroll half a page"),
        ],
    },
];

pub const HELP_FOOTER: &str = "j/k: scroll | g/G: top/bottom | q/Esc: close";

#[cfg(test)]
mod tests {
    use super::*;

    fn all_keys() -> Vec<&'static str> {
        HELP_SECTIONS
            .iter()
            .flat_map(|s| s.entries.iter().map(|(k, _)| *k))
            .collect()
    }

    #[test]
    fn test_every_section_has_entries() {
        assert!(HELP_SECTIONS.iter().all(|s| !s.entries.is_empty()));
    }

    #[test]
    fn test_lists_list_view_keys() {
        let keys = all_keys();
        for expected in ["/", "Enter", "s", "S", "r", "p", "c", "v"] {
            assert!(keys.contains(&expected), "missing {}", expected);
        }
    }

    #[test]
    fn test_lists_profile_keys() {
        let keys = all_keys();
        assert!(keys.contains(&"y"));
        assert!(keys.iter().any(|k| k.contains("Esc")));
    }
}
