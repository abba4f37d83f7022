use thiserror::Error;

#[derive(Error, Debug)]
pub enum CardError {
    #[error("Spec string must be exactly 4 characters, got {len}: {spec:?}")]
    InvalidSpecLength { spec: String, len: usize },

    #[error("Unknown {attribute} symbol {symbol:?} at position {position} (expected one of {alphabet:?})")]
    UnknownSymbol {
        attribute: &'static str,
        symbol: char,
        position: usize,
        alphabet: &'static str,
    },

    #[error("Attribute value {value} out of range for {attribute} (expected 0, 1 or 2)")]
    InvalidAttributeValue { attribute: &'static str, value: u8 },

    #[error("Card {spec} appears more than once on the table")]
    DuplicateCard { spec: String },

    #[error("Table size {size} out of range (expected 3..=81)")]
    InvalidTableSize { size: usize },

    #[error("Invalid config value for {field}: {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Config parsing error: {message}")]
    ConfigParseError { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    System,
}

impl CardError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            CardError::InvalidSpecLength { .. }
            | CardError::UnknownSymbol { .. }
            | CardError::InvalidAttributeValue { .. }
            | CardError::DuplicateCard { .. }
            | CardError::InvalidTableSize { .. } => ErrorCategory::Input,
            CardError::InvalidConfigValueError { .. } | CardError::ConfigParseError { .. } => {
                ErrorCategory::Configuration
            }
            CardError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            CardError::InvalidSpecLength { spec, .. } => {
                format!("'{}' is not a card: a spec string has 4 characters", spec)
            }
            CardError::UnknownSymbol {
                attribute, symbol, ..
            } => format!("'{}' is not a valid {}", symbol, attribute),
            CardError::IoError(e) => format!("Could not read file: {}", e),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            CardError::InvalidSpecLength { .. } | CardError::UnknownSymbol { .. } => {
                "Write number, shape, color, shading in that order, e.g. 2dgh (number 123, shape sdo, color rpg, shading fhe)".to_string()
            }
            CardError::InvalidAttributeValue { .. } => {
                "Attribute values are 0, 1 or 2".to_string()
            }
            CardError::DuplicateCard { .. } => "Remove the repeated card".to_string(),
            CardError::InvalidTableSize { .. } => {
                "Pick a table size between 3 and 81".to_string()
            }
            CardError::InvalidConfigValueError { field, .. } => {
                format!("Check the '{}' setting in the config file", field)
            }
            CardError::ConfigParseError { .. } => {
                "Make sure the config file is valid TOML".to_string()
            }
            CardError::IoError(_) => "Check the file path and permissions".to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CardError>;
