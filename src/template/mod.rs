mod merge;
mod variant;

use std::path::Path;

use serde_yaml::Value;
use thiserror::Error;

pub use self::merge::MergeError;
pub use self::variant::Variant;

use crate::{
    fetch::{FetchError, FetchFile},
    registry::ProviderRecord,
};

pub const DNS_SECTION: &str = "dns";

/// A parsed client config template. It is never mutated; every merge works
/// on its own deep copy.
#[derive(Debug, Clone, PartialEq)]
pub struct Template {
    document: Value,
}

#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("FetchError: {0}")]
    Fetch(#[from] FetchError),

    #[error("YamlError: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("template is empty")]
    Empty,

    #[error("template root is not a mapping")]
    NotAMapping,

    #[error("template has no `dns` mapping")]
    MissingDnsSection,
}

impl Template {
    pub fn parse(content: &str) -> Result<Self, TemplateError> {
        if content.trim().is_empty() {
            return Err(TemplateError::Empty);
        }

        let mut document: Value = serde_yaml::from_str(content)?;
        document.apply_merge()?;

        match &document {
            Value::Null => return Err(TemplateError::Empty),
            Value::Mapping(root) if root.is_empty() => return Err(TemplateError::Empty),
            Value::Mapping(_) => {}
            _ => return Err(TemplateError::NotAMapping),
        }

        if !document.get(DNS_SECTION).is_some_and(Value::is_mapping) {
            return Err(TemplateError::MissingDnsSection);
        }

        Ok(Self { document })
    }

    pub fn load(path: &Path) -> Result<Self, TemplateError> {
        let content = FetchFile::from(path).fetch()?;
        let template = Self::parse(&content)?;
        tracing::info!("loaded template from {}", path.display());

        Ok(template)
    }

    pub fn document(&self) -> &Value {
        &self.document
    }

    pub fn merge(
        &self,
        record: &ProviderRecord,
        variant: Variant,
        default_fallback: &[String],
    ) -> Result<Value, MergeError> {
        merge::merge(self.document(), record, variant, default_fallback)
    }

    /// Merges and serializes in one step.
    pub fn render(
        &self,
        record: &ProviderRecord,
        variant: Variant,
        default_fallback: &[String],
    ) -> Result<String, MergeError> {
        let document = self.merge(record, variant, default_fallback)?;
        Ok(serde_yaml::to_string(&document)?)
    }
}
