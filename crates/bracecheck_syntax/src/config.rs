//! Scanner configuration
//!
//! Comment delimiters (`//`, `/* */`) and braces are fixed; the literal delimiters and the escape marker depend on
//! the language being checked.

/// Quote characters recognised by default: double quote, single quote, backtick.
pub const DEFAULT_QUOTES: [char; 3] = ['"', '\'', '`'];

/// Escape marker recognised by default.
pub const DEFAULT_ESCAPE: char = '\\';

/// Lexical rules for quoted literals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanConfig {
    /// Characters that open a literal; the same character closes it
    pub quotes: Vec<char>,
    /// Inside a literal, this character and the one after it are consumed as a pair
    pub escape: char,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            quotes: DEFAULT_QUOTES.to_vec(),
            escape: DEFAULT_ESCAPE,
        }
    }
}

impl ScanConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the set of quote delimiters
    pub fn with_quotes(mut self, quotes: impl IntoIterator<Item = char>) -> Self {
        self.quotes = quotes.into_iter().collect();
        self
    }

    /// Set the escape marker
    pub fn with_escape(mut self, escape: char) -> Self {
        self.escape = escape;
        self
    }

    pub fn is_quote(&self, c: char) -> bool {
        self.quotes.contains(&c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_quotes() {
        let config = ScanConfig::default();
        assert!(config.is_quote('"'));
        assert!(config.is_quote('\''));
        assert!(config.is_quote('`'));
        assert!(!config.is_quote('/'));
    }

    #[test]
    fn test_default_escape() {
        assert_eq!(ScanConfig::default().escape, '\\');
    }

    #[test]
    fn test_new_equals_default() {
        assert_eq!(ScanConfig::new(), ScanConfig::default());
    }

    #[test]
    fn test_with_quotes_replaces_set() {
        let config = ScanConfig::new().with_quotes(['"']);
        assert!(config.is_quote('"'));
        assert!(!config.is_quote('\''));
        assert!(!config.is_quote('`'));
    }

    #[test]
    fn test_with_quotes_empty() {
        let config = ScanConfig::new().with_quotes([]);
        assert!(config.quotes.is_empty());
    }

    #[test]
    fn test_builder_chain() {
        let config = ScanConfig::new().with_quotes("'".chars()).with_escape('^');
        assert_eq!(config.quotes, vec!['\'']);
        assert_eq!(config.escape, '^');
    }
}
