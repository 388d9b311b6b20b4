use std::path::PathBuf;

use thiserror::Error;

use crate::{
    config::Config,
    fetch::FetchError,
    output::{Artifact, ArtifactPlan, OutputError},
    registry::{ProviderRecord, ProviderRegistry},
    summary::{self, RawLinks, SummaryError},
    template::{MergeError, Template, TemplateError, Variant},
};

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("could not read input: {0}")]
    Input(#[source] FetchError),

    #[error("could not load template: {0}")]
    Template(#[from] TemplateError),

    #[error("{0}")]
    Output(#[from] OutputError),

    #[error("could not write summary: {0}")]
    Summary(#[from] SummaryError),
}

/// Failures that cost one provider its output but let the run continue.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("MergeError: {0}")]
    Merge(#[from] MergeError),

    #[error("{0}")]
    Output(#[from] OutputError),
}

#[derive(Debug, Default)]
pub struct Report {
    pub written: Vec<Artifact>,
    pub skipped: Vec<String>,
    pub failed: Vec<String>,
    pub summary: Option<PathBuf>,
}

#[derive(Debug)]
pub struct Generator {
    config: Config,
}

impl Generator {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn run(&self) -> Result<Report, GenerateError> {
        let registry = ProviderRegistry::load(&self.config.input).map_err(GenerateError::Input)?;
        let template = Template::load(&self.config.template)?;
        if registry.is_empty() {
            tracing::warn!("input lists no providers");
        }

        let plan = ArtifactPlan::build(&registry, &self.config.output_dir)?;
        if plan.is_empty() {
            tracing::warn!("no provider has any entries, nothing to generate");
        } else {
            tracing::info!("{} providers to generate", plan.len());
        }

        let mut report = Report::default();
        for (provider, record) in registry.iter() {
            if record.is_empty() {
                tracing::warn!("provider `{provider}` has no entries, skipping");
                report.skipped.push(provider.to_string());
                continue;
            }

            if plan.stem(provider).is_none() {
                report.skipped.push(provider.to_string());
                continue;
            }

            tracing::info!("generating configs for provider: {provider}");
            match self.generate_provider(&template, &plan, provider, record) {
                Ok(artifacts) => report.written.extend(artifacts),
                Err(err) => {
                    tracing::warn!("provider `{provider}` failed: {err}");
                    report.failed.push(provider.to_string());
                }
            }
        }

        let links = RawLinks::new(
            &self.config.repository,
            &self.config.branch,
            &self.config.output_dir,
        )?;
        let content = summary::render(
            &registry,
            &report.written,
            &links,
            &self.config.default_fallback,
        );
        let path = summary::write(&self.config.readme_dir, &content)?;
        tracing::info!("summary written: {}", path.display());
        report.summary = Some(path);

        Ok(report)
    }

    /// Renders both variants before writing either, and removes what was
    /// already written if a later write fails, so a failed provider leaves
    /// nothing on disk.
    fn generate_provider(
        &self,
        template: &Template,
        plan: &ArtifactPlan,
        provider: &str,
        record: &ProviderRecord,
    ) -> Result<Vec<Artifact>, ProviderError> {
        let mut rendered: Vec<(Artifact, String)> = Vec::new();
        for variant in Variant::ALL {
            let Some(artifact) = plan.artifact(provider, variant) else {
                continue;
            };
            let content = template.render(record, variant, &self.config.default_fallback)?;
            rendered.push((artifact, content));
        }

        let mut written = Vec::new();
        for (artifact, content) in rendered {
            if let Err(err) = artifact.write(&content) {
                written.iter().for_each(Artifact::remove);
                return Err(err.into());
            }
            tracing::info!("{} config saved: {}", artifact.variant, artifact.path.display());
            written.push(artifact);
        }

        Ok(written)
    }
}
