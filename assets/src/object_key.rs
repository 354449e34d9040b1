//! Object keys for newly uploaded media

use std::fmt;

use crate::{identifier, media_type, types::AssetResult};

/// Key under which an uploaded file is stored: `<identifier>.<extension>`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ObjectKey {
    identifier: String,
    extension: String,
}

impl ObjectKey {
    /// Creates a key from its parts
    #[must_use]
    pub fn new(identifier: impl Into<String>, extension: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            extension: extension.into(),
        }
    }

    /// Creates a key with a fresh random identifier and the extension for `content_type`
    ///
    /// # Errors
    ///
    /// Returns `AssetError::RandomSource` if no identifier could be generated
    pub fn generate(content_type: &str) -> AssetResult<Self> {
        let identifier = identifier::generate()?;
        Ok(Self::new(identifier, media_type::extension(content_type)))
    }

    /// Random part of the key
    #[must_use]
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Extension without the leading dot
    #[must_use]
    pub fn extension(&self) -> &str {
        &self.extension
    }
}

impl fmt::Display for ObjectKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.identifier, self.extension)
    }
}
