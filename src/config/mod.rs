mod raw_config;

use std::path::{Path, PathBuf};

use thiserror::Error;

pub use self::raw_config::RawConfig;

use crate::fetch::{FetchError, FetchFile};

pub const DEFAULT_INPUT: &str = "dns_list.txt";
pub const DEFAULT_TEMPLATE: &str = "DNS_for_Clash.meta_Template.yml";
pub const DEFAULT_OUTPUT_DIR: &str = "Generated/Files";
pub const DEFAULT_README_DIR: &str = "Generated";
pub const DEFAULT_REPOSITORY: &str = "OWNER/REPO";
pub const DEFAULT_BRANCH: &str = "main";

pub const DEFAULT_FALLBACK: [&str; 6] = [
    "8.8.8.8",
    "1.1.1.1",
    "9.9.9.9",
    "94.140.14.14",
    "2606:4700:4700::1111",
    "2001:4860:4860::8888",
];

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub input: PathBuf,
    pub template: PathBuf,
    pub output_dir: PathBuf,
    pub readme_dir: PathBuf,
    pub repository: String,
    pub branch: String,
    pub default_fallback: Vec<String>,
}

#[derive(Error, Debug)]
pub enum LoadConfigError {
    #[error("FetchError: {0}")]
    Fetch(#[from] FetchError),

    #[error("YamlError: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl Config {
    pub fn parse_raw(content: &str) -> Result<RawConfig, LoadConfigError> {
        if content.trim().is_empty() {
            return Ok(RawConfig::default());
        }

        Ok(serde_yaml::from_str(content)?)
    }

    pub fn load_raw(path: &Path) -> Result<RawConfig, LoadConfigError> {
        let content = FetchFile::from(path).fetch()?;
        Self::parse_raw(&content)
    }

    /// Resolves the final settings. `overrides` wins over `file`, which wins
    /// over the built-in defaults.
    pub fn resolve(overrides: RawConfig, file: RawConfig) -> Self {
        let raw = overrides.layer_over(file);

        let default_fallback: Vec<String> = raw
            .default_fallback
            .unwrap_or_default()
            .iter()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();
        let default_fallback = if default_fallback.is_empty() {
            DEFAULT_FALLBACK.iter().map(|s| s.to_string()).collect()
        } else {
            default_fallback
        };

        Self {
            input: raw.input.unwrap_or_else(|| DEFAULT_INPUT.into()),
            template: raw.template.unwrap_or_else(|| DEFAULT_TEMPLATE.into()),
            output_dir: raw.output_dir.unwrap_or_else(|| DEFAULT_OUTPUT_DIR.into()),
            readme_dir: raw.readme_dir.unwrap_or_else(|| DEFAULT_README_DIR.into()),
            repository: raw
                .repository
                .unwrap_or_else(|| DEFAULT_REPOSITORY.to_string()),
            branch: raw.branch.unwrap_or_else(|| DEFAULT_BRANCH.to_string()),
            default_fallback,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::resolve(RawConfig::default(), RawConfig::default())
    }
}
