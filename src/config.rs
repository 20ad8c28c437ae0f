use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const DEFAULT_HEADER: &str = "Contact Form";
pub const DEFAULT_FIRST_NAME_MIN_LENGTH: usize = 5;
pub const DEFAULT_EMAIL_PATTERN: &str = r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormConfig {
    pub header: String,
    pub first_name_min_length: usize,
    pub email_pattern: String,
    pub hint: Option<String>,
}

impl FormConfig {
    pub fn from_yaml(source: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(source)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let source = fs::read_to_string(path)?;
        Self::from_yaml(&source)
    }
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            header: DEFAULT_HEADER.to_string(),
            first_name_min_length: DEFAULT_FIRST_NAME_MIN_LENGTH,
            email_pattern: DEFAULT_EMAIL_PATTERN.to_string(),
            hint: Some("Tab/Shift+Tab to move, Enter on Submit or Ctrl+S to submit, Esc to exit".to_string()),
        }
    }
}
