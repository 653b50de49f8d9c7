//! Input schema: one scraped tool page and its argument records.
use serde::Deserialize;

/// Default literal meaning "no default".
pub const NO_DEFAULT: &str = "NA";

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ToolDoc {
    pub name: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub arguments: Vec<ArgumentRecord>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Required {
    Yes,
    No,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ArgumentRecord {
    pub name: String,
    #[serde(rename = "type")]
    pub type_: String,
    pub required: Required,
    #[serde(rename = "defaultValue", default = "no_default")]
    pub default_value: String,
    #[serde(default)]
    pub options: Vec<OptionRecord>,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub fulltext: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OptionRecord {
    pub name: String,
    #[serde(default)]
    pub summary: String,
}

fn no_default() -> String { NO_DEFAULT.to_string() }

impl ArgumentRecord {
    pub fn is_optional(&self) -> bool { self.required == Required::No }

    /// The raw default literal, or `None` for the `NA` sentinel.
    pub fn default_literal(&self) -> Option<&str> {
        (self.default_value != NO_DEFAULT).then_some(self.default_value.as_str())
    }

    /// Identifier form of the name: every leading dash removed.
    pub fn bare_name(&self) -> &str {
        self.name.trim_start_matches('-')
    }

    /// Command-line prefix: only the first dash removed.
    pub fn binding_prefix(&self) -> &str {
        self.name.strip_prefix('-').unwrap_or(&self.name)
    }
}
