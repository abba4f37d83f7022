use crate::core::encoder::{FilenameEncoder, DEFAULT_EXTENSION};
use crate::core::finder::FinderKind;
use crate::core::table::{DEFAULT_TABLE_SIZE, MAX_TABLE_SIZE, MIN_TABLE_SIZE};
use crate::utils::error::{CardError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Optional settings file shared by both binaries. Every section may be omitted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    #[serde(default)]
    pub image: ImageConfig,
    #[serde(default)]
    pub table: TableConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ImageConfig {
    pub extension: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TableConfig {
    pub cards: Option<usize>,
    pub algorithm: Option<FinderKind>,
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub json: Option<bool>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        tracing::debug!(path = %path.as_ref().display(), "loaded config file");
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| CardError::ConfigParseError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unknown variables are left as-is.
    fn substitute_env_vars(content: &str) -> String {
        let re = Regex::new(r"\$\{([^}]+)\}").expect("static regex is valid");

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .into_owned()
    }

    pub fn extension(&self) -> &str {
        self.image.extension.as_deref().unwrap_or(DEFAULT_EXTENSION)
    }

    pub fn encoder(&self) -> FilenameEncoder {
        FilenameEncoder::with_extension(self.extension())
    }

    pub fn table_size(&self) -> usize {
        self.table.cards.unwrap_or(DEFAULT_TABLE_SIZE)
    }

    pub fn algorithm(&self) -> FinderKind {
        self.table.algorithm.unwrap_or_default()
    }

    pub fn seed(&self) -> Option<u64> {
        self.table.seed
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging.level.as_deref()
    }

    pub fn json_logs(&self) -> bool {
        self.logging.json.unwrap_or(false)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_extension("image.extension", self.extension())?;
        validation::validate_range(
            "table.cards",
            self.table_size(),
            MIN_TABLE_SIZE,
            MAX_TABLE_SIZE,
        )?;

        if let Some(level) = self.log_level() {
            let valid_levels = ["trace", "debug", "info", "warn", "error"];
            if !valid_levels.contains(&level) {
                return Err(CardError::InvalidConfigValueError {
                    field: "logging.level".to_string(),
                    value: level.to_string(),
                    reason: format!("Valid levels: {}", valid_levels.join(", ")),
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_toml_config() {
        let toml_content = r#"
[image]
extension = "webp"

[table]
cards = 15
algorithm = "gnt-mod"
seed = 42

[logging]
level = "debug"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.extension(), "webp");
        assert_eq!(config.table_size(), 15);
        assert_eq!(config.algorithm(), FinderKind::GntMod);
        assert_eq!(config.seed(), Some(42));
        assert_eq!(config.log_level(), Some("debug"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert_eq!(config, TomlConfig::default());
        assert_eq!(config.extension(), "png");
        assert_eq!(config.table_size(), 12);
        assert_eq!(config.algorithm(), FinderKind::Fast);
        assert_eq!(config.seed(), None);
        assert!(!config.json_logs());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("SETCARD_TEST_EXTENSION", "jpg");

        let toml_content = r#"
[image]
extension = "${SETCARD_TEST_EXTENSION}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.extension(), "jpg");

        std::env::remove_var("SETCARD_TEST_EXTENSION");
    }

    #[test]
    fn test_json_logging_flag() {
        let config =
            TomlConfig::from_toml_str("[logging]\njson = true\nlevel = \"warn\"\n").unwrap();
        assert!(config.json_logs());
        assert_eq!(config.log_level(), Some("warn"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_unknown_keys_are_rejected() {
        let result = TomlConfig::from_toml_str("[image]\nformat = \"png\"\n");
        assert!(matches!(result, Err(CardError::ConfigParseError { .. })));
    }

    #[test]
    fn test_config_validation() {
        let bad_size = TomlConfig::from_toml_str("[table]\ncards = 2\n").unwrap();
        assert!(bad_size.validate().is_err());

        let bad_extension = TomlConfig::from_toml_str("[image]\nextension = \".png\"\n").unwrap();
        assert!(bad_extension.validate().is_err());

        let bad_level = TomlConfig::from_toml_str("[logging]\nlevel = \"loud\"\n").unwrap();
        assert!(bad_level.validate().is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[table]\nalgorithm = \"simple\"\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.algorithm(), FinderKind::Simple);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = TomlConfig::from_file("/definitely/not/here/setcard.toml");
        assert!(matches!(result, Err(CardError::IoError(_))));
    }
}
