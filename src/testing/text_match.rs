use regex::Regex;
use std::fmt;

/// How a query compares a node's text.
#[derive(Debug, Clone)]
pub enum TextMatch {
    /// Whole text, after trimming and collapsing whitespace.
    Exact(String),
    /// Case-insensitive substring.
    Contains(String),
    Regex(Regex),
}

impl TextMatch {
    pub fn exact(text: impl Into<String>) -> Self {
        TextMatch::Exact(text.into())
    }

    pub fn contains(text: impl Into<String>) -> Self {
        TextMatch::Contains(text.into())
    }

    pub fn regex(pattern: &str) -> Result<Self, regex::Error> {
        Ok(TextMatch::Regex(Regex::new(pattern)?))
    }

    pub fn matches(&self, text: &str) -> bool {
        match self {
            TextMatch::Exact(expected) => normalize(text) == normalize(expected),
            TextMatch::Contains(needle) => text.to_lowercase().contains(&needle.to_lowercase()),
            TextMatch::Regex(re) => re.is_match(text),
        }
    }
}

fn normalize(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

impl From<&str> for TextMatch {
    fn from(value: &str) -> Self {
        TextMatch::exact(value)
    }
}

impl From<String> for TextMatch {
    fn from(value: String) -> Self {
        TextMatch::Exact(value)
    }
}

impl From<Regex> for TextMatch {
    fn from(value: Regex) -> Self {
        TextMatch::Regex(value)
    }
}

impl fmt::Display for TextMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TextMatch::Exact(text) => write!(f, "{text:?}"),
            TextMatch::Contains(text) => write!(f, "*{text:?}*"),
            TextMatch::Regex(re) => write!(f, "/{}/", re.as_str()),
        }
    }
}
