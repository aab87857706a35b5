use clap::Parser;
use std::path::PathBuf;

use crate::application::dto::OutputFormat;
use crate::config::ConfigFile;
use crate::shared::error::RestoreError;
use crate::shared::Result;

/// Audit resolved restore graphs against vulnerability advisories
#[derive(Parser, Debug)]
#[command(name = "restore-audit")]
#[command(version)]
#[command(about = "Audit resolved restore graphs against vulnerability advisories", long_about = None)]
pub struct Args {
    /// Target graph file produced by the resolver (JSON)
    #[arg(short, long, value_name = "FILE")]
    pub graphs: PathBuf,

    /// Advisory file to audit against; can be specified multiple times
    #[arg(short, long = "advisories", value_name = "FILE")]
    pub advisories: Vec<PathBuf>,

    /// Minimum severity to report: low, moderate, high or critical
    #[arg(long, value_name = "LEVEL")]
    pub audit_level: Option<String>,

    /// Which packages to audit: direct or all
    #[arg(long, value_name = "MODE")]
    pub audit_mode: Option<String>,

    /// Project file the findings are attributed to (defaults to the graph file)
    #[arg(short, long, value_name = "PATH")]
    pub project_path: Option<String>,

    /// Configuration file (defaults to restore-audit.config.yml next to the graph file)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output format: text or json
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// No-op cache file; an unchanged audit is replayed from it
    #[arg(long, value_name = "FILE")]
    pub cache: Option<PathBuf>,

    /// Cancel the advisory fetch after this many seconds
    #[arg(long, value_name = "SECONDS")]
    pub timeout_secs: Option<u64>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

/// Settings after merging the command line over the configuration file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditSettings {
    pub graphs: PathBuf,
    pub advisories: Vec<PathBuf>,
    pub audit_level: Option<String>,
    pub audit_mode: Option<String>,
    pub project_path: String,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub cache: Option<PathBuf>,
    pub timeout_secs: Option<u64>,
    pub quiet: bool,
}

impl AuditSettings {
    /// Merges `args` over `config`; command line values win
    pub fn resolve(args: Args, config: Option<ConfigFile>) -> Result<Self> {
        let config = config.unwrap_or_default();

        let format = match (args.format, config.format.as_deref()) {
            (Some(format), _) => format,
            (None, Some(value)) => value
                .parse()
                .map_err(|message| RestoreError::Validation { message })?,
            (None, None) => OutputFormat::default(),
        };

        let advisories = if args.advisories.is_empty() {
            config.advisory_files.unwrap_or_default()
        } else {
            args.advisories
        };

        let project_path = args
            .project_path
            .or(config.project_path)
            .unwrap_or_else(|| args.graphs.display().to_string());

        Ok(Self {
            advisories,
            audit_level: args.audit_level.or(config.audit_level),
            audit_mode: args.audit_mode.or(config.audit_mode),
            project_path,
            format,
            graphs: args.graphs,
            output: args.output,
            cache: args.cache,
            timeout_secs: args.timeout_secs,
            quiet: args.quiet,
        })
    }
}
