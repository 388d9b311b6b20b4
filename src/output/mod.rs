mod sanitize;
mod write;

use std::{
    collections::HashMap,
    path::{Path, PathBuf},
};

use thiserror::Error;

pub use self::sanitize::sanitize_stem;
pub use self::write::write_atomic;

use crate::{registry::ProviderRegistry, template::Variant};

#[derive(Error, Debug)]
pub enum OutputError {
    #[error("providers `{first}` and `{second}` both map to file name `{stem}`")]
    NameCollision {
        stem: String,
        first: String,
        second: String,
    },

    #[error("could not write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// One generated file, remembering which provider display name it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub provider: String,
    pub stem: String,
    pub variant: Variant,
    pub path: PathBuf,
}

impl Artifact {
    pub fn file_name(&self) -> String {
        file_name(&self.stem, self.variant)
    }

    pub fn remove(&self) {
        if let Err(err) = std::fs::remove_file(&self.path) {
            tracing::warn!("could not remove {}: {err}", self.path.display());
        }
    }

    pub fn write(&self, contents: &str) -> Result<(), OutputError> {
        write_atomic(&self.path, contents).map_err(|source| OutputError::Write {
            path: self.path.clone(),
            source,
        })
    }
}

fn file_name(stem: &str, variant: Variant) -> String {
    format!("{stem}_{}.yml", variant.label())
}

/// Output file names for every provider, fixed before anything is written.
#[derive(Debug, Clone)]
pub struct ArtifactPlan {
    output_dir: PathBuf,
    stems: HashMap<String, String>,
}

impl ArtifactPlan {
    /// Providers without any list entries are left out. Two providers that
    /// sanitize to the same stem are rejected.
    pub fn build(registry: &ProviderRegistry, output_dir: &Path) -> Result<Self, OutputError> {
        let mut stems: HashMap<String, String> = HashMap::new();
        let mut owners: HashMap<String, String> = HashMap::new();

        for (provider, record) in registry.iter() {
            if record.is_empty() {
                continue;
            }

            let Some(stem) = sanitize_stem(provider) else {
                tracing::warn!("provider `{provider}` has no usable file name characters, skipping");
                continue;
            };

            if let Some(first) = owners.get(&stem) {
                return Err(OutputError::NameCollision {
                    stem,
                    first: first.clone(),
                    second: provider.to_string(),
                });
            }

            owners.insert(stem.clone(), provider.to_string());
            stems.insert(provider.to_string(), stem);
        }

        Ok(Self {
            output_dir: output_dir.to_path_buf(),
            stems,
        })
    }

    pub fn stem(&self, provider: &str) -> Option<&str> {
        self.stems.get(provider).map(String::as_str)
    }

    pub fn artifact(&self, provider: &str, variant: Variant) -> Option<Artifact> {
        let stem = self.stem(provider)?;

        Some(Artifact {
            provider: provider.to_string(),
            stem: stem.to_string(),
            variant,
            path: self.output_dir.join(file_name(stem, variant)),
        })
    }

    pub fn len(&self) -> usize {
        self.stems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stems.is_empty()
    }
}
