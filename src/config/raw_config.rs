use std::path::PathBuf;

/// One layer of generator settings. Every field is optional so that the
/// config file and the command line can each supply only what they change.
#[derive(serde::Deserialize, Debug, Clone, Default, PartialEq)]
pub struct RawConfig {
    pub input: Option<PathBuf>,
    pub template: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
    pub readme_dir: Option<PathBuf>,
    pub repository: Option<String>,
    pub branch: Option<String>,
    pub default_fallback: Option<Vec<String>>,
}

impl RawConfig {
    /// Fills every unset field of `self` from `lower`.
    pub fn layer_over(self, lower: RawConfig) -> RawConfig {
        RawConfig {
            input: self.input.or(lower.input),
            template: self.template.or(lower.template),
            output_dir: self.output_dir.or(lower.output_dir),
            readme_dir: self.readme_dir.or(lower.readme_dir),
            repository: self.repository.or(lower.repository),
            branch: self.branch.or(lower.branch),
            default_fallback: self.default_fallback.or(lower.default_fallback),
        }
    }
}
