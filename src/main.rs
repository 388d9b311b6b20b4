mod config;
mod fetch;
mod generator;
mod output;
mod registry;
mod summary;
mod template;

use std::path::PathBuf;

use clap::Parser;
use config::{Config, RawConfig};
use generator::Generator;

#[derive(Parser, Debug)]
#[command(name = "DNS Confgen")]
#[command(version)]
#[command(about)]
struct Args {
    /// Sets a generator config file (YAML)
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Sets the provider list, one `provider | type | value` per line
    #[arg(short, long, value_name = "INPUT")]
    input: Option<PathBuf>,

    /// Sets the client config template
    #[arg(short, long, value_name = "TEMPLATE")]
    template: Option<PathBuf>,

    /// Sets the directory generated configs are written to
    #[arg(short, long, value_name = "OUTPUT_DIR")]
    output_dir: Option<PathBuf>,

    /// Sets the directory the summary README is written to
    #[arg(short, long, value_name = "README_DIR")]
    readme_dir: Option<PathBuf>,

    /// Sets the repository used in summary links
    #[arg(long, value_name = "OWNER/REPO", env = "GITHUB_REPOSITORY")]
    repository: Option<String>,

    /// Sets the branch used in summary links
    #[arg(long, value_name = "BRANCH", env = "GITHUB_REF_NAME")]
    branch: Option<String>,

    /// Sets the fallback resolvers used when a provider lists none
    #[arg(long, value_name = "FALLBACK", value_delimiter = ',')]
    default_fallback: Option<Vec<String>>,
}

impl From<Args> for RawConfig {
    fn from(args: Args) -> Self {
        Self {
            input: args.input,
            template: args.template,
            output_dir: args.output_dir,
            readme_dir: args.readme_dir,
            repository: args.repository,
            branch: args.branch,
            default_fallback: args.default_fallback,
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    let file = match &args.config {
        Some(path) => {
            tracing::info!("config: {}", path.display());
            Config::load_raw(path)?
        }
        None => RawConfig::default(),
    };
    let config = Config::resolve(args.into(), file);

    tracing::info!("input: {}", config.input.display());
    tracing::info!("template: {}", config.template.display());
    tracing::info!("output_dir: {}", config.output_dir.display());
    tracing::info!("readme_dir: {}", config.readme_dir.display());
    tracing::info!("repository: {}", &config.repository);
    tracing::info!("default_fallback: [{}]", config.default_fallback.join(", "));

    let report = Generator::new(config).run()?;
    tracing::info!(
        "done: {} files written, {} providers skipped",
        report.written.len(),
        report.skipped.len()
    );

    if !report.failed.is_empty() {
        anyhow::bail!("generation failed for: {}", report.failed.join(", "));
    }

    Ok(())
}
