use std::path::{Component, Path, PathBuf};

use thiserror::Error;
use url::Url;

use crate::{
    output::{write_atomic, Artifact},
    registry::ProviderRegistry,
    template::Variant,
};

const RAW_BASE_URL: &str = "https://raw.githubusercontent.com/";
const README_FILE: &str = "README.md";

#[derive(Error, Debug)]
pub enum SummaryError {
    #[error("InvalidUrl: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("CannotBeABase: {0}")]
    CannotBeABase(String),

    #[error("could not write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

fn is_repo_relative(path: &Path) -> bool {
    path.components()
        .all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
}

/// Builds raw-content links to generated files, e.g.
/// `https://raw.githubusercontent.com/OWNER/REPO/main/Generated/Files/A_Normal.yml`.
#[derive(Debug, Clone)]
pub struct RawLinks {
    base: Url,
}

impl RawLinks {
    /// `repository` and `branch` are used verbatim, `/` included.
    /// `output_dir` should be relative to the repository root.
    pub fn new(repository: &str, branch: &str, output_dir: &Path) -> Result<Self, SummaryError> {
        if !is_repo_relative(output_dir) {
            tracing::warn!(
                "output dir {} is not relative to the repository root, summary links may be wrong",
                output_dir.display()
            );
        }

        let mut base = Url::parse(RAW_BASE_URL)?;

        {
            let mut segments = base
                .path_segments_mut()
                .map_err(|_| SummaryError::CannotBeABase(RAW_BASE_URL.to_string()))?;
            segments.pop_if_empty();
            segments.extend(repository.split('/').filter(|s| !s.is_empty()));
            segments.extend(branch.split('/').filter(|s| !s.is_empty()));
            for component in output_dir.components() {
                if let Component::Normal(part) = component {
                    segments.push(&part.to_string_lossy());
                }
            }
        }

        Ok(Self { base })
    }

    pub fn link(&self, file_name: &str) -> Url {
        let mut url = self.base.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.push(file_name);
        }
        url
    }
}

/// Renders the markdown overview table. Rows follow the order in which
/// providers first appear in `artifacts`.
pub fn render(
    registry: &ProviderRegistry,
    artifacts: &[Artifact],
    links: &RawLinks,
    default_fallback: &[String],
) -> String {
    let mut lines = vec![
        "# 📂 Generated DNS Configs".to_string(),
        String::new(),
        "| Provider | Country | Normal | Strict | Fallback DNS |".to_string(),
        "|----------|---------|--------|--------|--------------|".to_string(),
    ];

    let mut providers: Vec<&str> = Vec::new();
    for artifact in artifacts {
        if !providers.contains(&artifact.provider.as_str()) {
            providers.push(&artifact.provider);
        }
    }

    for provider in providers {
        let record = registry.get(provider);
        let country = record
            .and_then(|r| r.country.as_deref())
            .unwrap_or("N/A");
        let fallback = match record {
            Some(r) => r.effective_fallback(default_fallback),
            None => default_fallback.to_vec(),
        };

        let link_for = |variant: Variant| {
            artifacts
                .iter()
                .find(|a| a.provider == provider && a.variant == variant)
                .map(|a| format!("[Link]({})", links.link(&a.file_name())))
                .unwrap_or_else(|| "N/A".to_string())
        };

        lines.push(format!(
            "| {provider} | {country} | {} | {} | `{}` |",
            link_for(Variant::Normal),
            link_for(Variant::Strict),
            fallback.join(", ")
        ));
    }

    let mut content = lines.join("\n");
    content.push('\n');
    content
}

pub fn write(readme_dir: &Path, content: &str) -> Result<PathBuf, SummaryError> {
    let path = readme_dir.join(README_FILE);
    write_atomic(&path, content).map_err(|source| SummaryError::Write {
        path: path.clone(),
        source,
    })?;

    Ok(path)
}
