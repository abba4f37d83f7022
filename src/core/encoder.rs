use crate::domain::model::Card;
use crate::utils::error::Result;

pub const DEFAULT_EXTENSION: &str = "png";

/// Maps spec strings to image filenames such as `44.png`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilenameEncoder {
    extension: String,
}

impl Default for FilenameEncoder {
    fn default() -> Self {
        Self::with_extension(DEFAULT_EXTENSION)
    }
}

impl FilenameEncoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_extension(extension: impl Into<String>) -> Self {
        Self {
            extension: extension.into(),
        }
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    pub fn encode(&self, spec: &str) -> Result<String> {
        let card = Card::from_spec(spec)?;
        let filename = self.filename(&card);
        tracing::debug!(spec, index = card.image_index(), %filename, "encoded card");
        Ok(filename)
    }

    pub fn filename(&self, card: &Card) -> String {
        format!("{}.{}", card.image_index(), self.extension)
    }
}

/// Filename for `spec` with the default `png` extension.
pub fn image_filename(spec: &str) -> Result<String> {
    FilenameEncoder::default().encode(spec)
}
