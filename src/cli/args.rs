//! Command-line interface definitions.

use crate::config::Flavor;
use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// pagefarm static guide page generator CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (optional; defaults apply when absent)
    #[arg(short = 'C', long, default_value = "pagefarm.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Generate a batch of articles and rebuild the site
    #[command(visible_alias = "g")]
    Generate {
        #[command(flatten)]
        site_args: SiteArgs,

        #[command(flatten)]
        generate_args: GenerateArgs,
    },

    /// Rebuild homepage, sitemap and feed from the publication store
    #[command(visible_alias = "r")]
    Rebuild {
        #[command(flatten)]
        site_args: SiteArgs,
    },
}

/// Site settings shared by all commands. Each one overrides `pagefarm.toml`.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct SiteArgs {
    /// Destination URL every call-to-action points to
    #[arg(short = 't', long = "target-url", env = "TARGET_URL", value_hint = clap::ValueHint::Url)]
    pub target_url: Option<String>,

    /// Brand name shown in titles
    #[arg(short, long, env = "BRAND_NAME")]
    pub brand: Option<String>,

    /// Contact email used as feed author
    #[arg(short, long, env = "CONTACT_EMAIL")]
    pub email: Option<String>,

    /// Repository identifier (`owner/repo`) used to derive the public base URL
    #[arg(short, long, env = "GITHUB_REPOSITORY")]
    pub repository: Option<String>,

    /// Public base URL; takes precedence over the repository-derived one
    #[arg(short = 'U', long = "site-url", value_hint = clap::ValueHint::Url)]
    pub site_url: Option<String>,

    /// Site root on disk
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub output: Option<PathBuf>,

    /// Indexing service key, published as `<key>.txt`
    #[arg(long = "indexing-key", env = "INDEXNOW_KEY", hide_env_values = true)]
    pub indexing_key: Option<String>,

    /// Minify sitemap and feed XML
    #[arg(short, long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub minify: Option<bool>,

    /// Enable verbose output for debugging
    #[arg(short = 'V', long)]
    pub verbose: bool,
}

/// Arguments for the `generate` command.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct GenerateArgs {
    /// Articles to generate in this run
    #[arg(short = 'n', long)]
    pub batch: Option<usize>,

    /// Rendering profile
    #[arg(short, long, value_enum)]
    pub flavor: Option<Flavor>,

    /// Seed for fragment selection (reproducible runs)
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Start from an empty store when the existing one cannot be parsed
    #[arg(long)]
    pub reset_store: bool,
}

impl Cli {
    pub fn site_args(&self) -> &SiteArgs {
        match &self.command {
            Commands::Generate { site_args, .. } | Commands::Rebuild { site_args } => site_args,
        }
    }
}
