/// Username fragments that mark automation accounts
const BUILTIN_BOT_PATTERNS: &[&str] = &["bot", "[bot]", "dependabot", "renovate", "github-actions"];

/// Case-insensitive substring filter for bot-like usernames
#[derive(Debug, Clone)]
pub struct BotFilter {
    patterns: Vec<String>,
}

impl Default for BotFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl BotFilter {
    pub fn new() -> Self {
        Self {
            patterns: BUILTIN_BOT_PATTERNS.iter().map(|p| p.to_string()).collect(),
        }
    }

    /// Built-in patterns plus `extra`; blank extras are ignored
    pub fn with_extra_patterns<I, S>(extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut filter = Self::new();
        for pattern in extra {
            let pattern = pattern.as_ref().trim().to_lowercase();
            if !pattern.is_empty() && !filter.patterns.contains(&pattern) {
                filter.patterns.push(pattern);
            }
        }
        filter
    }

    pub fn is_bot(&self, username: &str) -> bool {
        let username = username.to_lowercase();
        self.patterns
            .iter()
            .any(|pattern| username.contains(pattern.as_str()))
    }
}
