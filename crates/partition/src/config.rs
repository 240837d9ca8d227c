use serde::Deserialize;

use crate::error::PartitionError;

pub const DEFAULT_LEFT_COLUMN: &str = "LEFT_SIDE";
pub const DEFAULT_RIGHT_COLUMN: &str = "RIGHT_SIDE";
pub const DEFAULT_SEPARATOR: &str = "|";
pub const DEFAULT_UNKNOWN_SOURCE: &str = "UNKNOWN";
pub const DEFAULT_OUTPUT_PATH: &str = "connected_components_output.csv";

// ---------------------------------------------------------------------------
// Top-level config
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LinkConfig {
    #[serde(default)]
    pub columns: ColumnConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

// ---------------------------------------------------------------------------
// Columns
// ---------------------------------------------------------------------------

/// Names of the two input columns holding each side of a link.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ColumnConfig {
    #[serde(default = "default_left")]
    pub left: String,
    #[serde(default = "default_right")]
    pub right: String,
}

fn default_left() -> String {
    DEFAULT_LEFT_COLUMN.into()
}

fn default_right() -> String {
    DEFAULT_RIGHT_COLUMN.into()
}

impl Default for ColumnConfig {
    fn default() -> Self {
        Self {
            left: default_left(),
            right: default_right(),
        }
    }
}

// ---------------------------------------------------------------------------
// Output
// ---------------------------------------------------------------------------

/// How node identifiers are split into source and local id, and where rows go.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    #[serde(default = "default_separator")]
    pub separator: String,
    /// Source assigned to identifiers that contain no separator.
    #[serde(default = "default_unknown_source")]
    pub unknown_source: String,
    #[serde(default)]
    pub path: Option<String>,
}

fn default_separator() -> String {
    DEFAULT_SEPARATOR.into()
}

fn default_unknown_source() -> String {
    DEFAULT_UNKNOWN_SOURCE.into()
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            separator: default_separator(),
            unknown_source: default_unknown_source(),
            path: None,
        }
    }
}

impl OutputConfig {
    pub fn path_or_default(&self) -> &str {
        self.path.as_deref().unwrap_or(DEFAULT_OUTPUT_PATH)
    }
}

// ---------------------------------------------------------------------------
// Parse + Validate
// ---------------------------------------------------------------------------

impl LinkConfig {
    pub fn from_toml(input: &str) -> Result<Self, PartitionError> {
        let config: LinkConfig =
            toml::from_str(input).map_err(|e| PartitionError::ConfigParse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), PartitionError> {
        if self.columns.left.trim().is_empty() || self.columns.right.trim().is_empty() {
            return Err(PartitionError::ConfigValidation(
                "column names must not be blank".into(),
            ));
        }

        if self.columns.left == self.columns.right {
            return Err(PartitionError::ConfigValidation(format!(
                "left and right columns must differ, both are '{}'",
                self.columns.left
            )));
        }

        if self.output.separator.is_empty() {
            return Err(PartitionError::ConfigValidation(
                "separator must not be empty".into(),
            ));
        }

        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
