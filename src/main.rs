use clap::Parser;
use restore_core::adapters::outbound::console::{ConsoleRestoreLogger, StderrProgressReporter};
use restore_core::adapters::outbound::filesystem::{
    FileSystemNoOpCache, FileSystemReader, VulnerabilityFileProvider,
};
use restore_core::adapters::outbound::memory::{CollectingRestoreLogger, TeeRestoreLogger};
use restore_core::application::dto::{AuditReport, AuditRequest};
use restore_core::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use restore_core::application::use_cases::{
    AggregateVulnerabilityDataUseCase, CheckPackageVulnerabilitiesUseCase,
};
use restore_core::cli::{Args, AuditSettings};
use restore_core::config::{discover_config, load_config_from_path};
use restore_core::ports::outbound::{
    parse_target_graphs, CachedAuditResult, NoOpCache, ProgressReporter, RestoreLogger,
    TargetGraphReader, VulnerabilityInformationProvider,
};
use restore_core::shared::error::ExitCode;
use restore_core::shared::fingerprint::InputFingerprint;
use restore_core::shared::security::read_checked_file;
use restore_core::shared::Result;
use std::io::IsTerminal;
use std::path::Path;
use std::process;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

#[tokio::main]
async fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let code = if e.use_stderr() {
                ExitCode::InvalidArguments
            } else {
                ExitCode::Success
            };
            let _ = e.print();
            process::exit(code.as_i32());
        }
    };

    match run(args).await {
        Ok(code) => process::exit(code.as_i32()),
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            let mut source = e.source();
            while let Some(err) = source {
                eprintln!("\nCaused by: {}", err);
                source = err.source();
            }

            eprintln!();
            process::exit(ExitCode::ApplicationError.as_i32());
        }
    }
}

async fn run(args: Args) -> Result<ExitCode> {
    let config = match &args.config {
        Some(path) => Some(load_config_from_path(path)?),
        None => discover_config(config_dir(&args.graphs))?,
    };
    let settings = AuditSettings::resolve(args, config)?;

    let progress_reporter = if settings.quiet {
        StderrProgressReporter::quiet()
    } else {
        StderrProgressReporter::new()
    };

    progress_reporter.report(&format!(
        "📖 Loading target graphs from: {}",
        settings.graphs.display()
    ));
    let graph_content = FileSystemReader::new().read_graph_file(&settings.graphs)?;
    let graphs = parse_target_graphs(&graph_content, &settings.graphs)?;
    progress_reporter.report(&format!("✅ Loaded {} target graph(s)", graphs.len()));

    let cache = settings.cache.clone().map(FileSystemNoOpCache::new);
    let fingerprint = cache
        .as_ref()
        .map(|_| input_fingerprint(&settings, &graph_content));

    if let (Some(cache), Some(fingerprint)) = (&cache, &fingerprint) {
        if let Some(cached) = cache.lookup(fingerprint)? {
            progress_reporter.report("♻️  Inputs unchanged, replaying previous audit");
            if settings.output.is_some() {
                let console = ConsoleRestoreLogger::new(std::io::stderr().is_terminal());
                for message in &cached.messages {
                    console.log(message.clone());
                }
            }
            let report = AuditReport::new(
                settings.project_path.clone(),
                true,
                cached.summary,
                cached.messages,
            );
            return present(&settings, &report);
        }
    }

    let token = CancellationToken::new();
    if let Some(seconds) = settings.timeout_secs {
        let timeout_token = token.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_secs(seconds)).await;
            timeout_token.cancel();
        });
    }

    let providers: Vec<Box<dyn VulnerabilityInformationProvider>> = settings
        .advisories
        .iter()
        .map(|path| {
            Box::new(VulnerabilityFileProvider::new(path.clone()))
                as Box<dyn VulnerabilityInformationProvider>
        })
        .collect();
    if !providers.is_empty() {
        progress_reporter.report(&format!(
            "🔎 Querying {} advisory source(s)",
            providers.len()
        ));
    }

    let use_case =
        CheckPackageVulnerabilitiesUseCase::new(AggregateVulnerabilityDataUseCase::new(providers));
    let request = AuditRequest::new(settings.project_path.clone())
        .with_audit_level(settings.audit_level.clone())
        .with_audit_mode(settings.audit_mode.clone());

    let collector = CollectingRestoreLogger::new();
    let console = ConsoleRestoreLogger::new(std::io::stderr().is_terminal());
    let tee = TeeRestoreLogger::new(&collector, &console);
    // Findings already reach stdout when the report is not written to a file
    let logger: &dyn RestoreLogger = if settings.output.is_some() {
        &tee
    } else {
        &collector
    };

    let summary = use_case
        .execute_with_progress(&graphs, &request, logger, &progress_reporter, &token)
        .await?;
    let messages = collector.into_messages();

    if summary.fetch_failures > 0 {
        progress_reporter.report_error(&format!(
            "⚠️  {} advisory source failure(s), findings may be incomplete",
            summary.fetch_failures
        ));
    }
    if summary.audit_ran {
        progress_reporter.report_completion("✅ Audit complete");
    } else {
        progress_reporter.report_completion("ℹ️  No vulnerability data available, audit skipped");
    }

    if let (Some(cache), Some(fingerprint)) = (&cache, fingerprint) {
        cache.store(&CachedAuditResult {
            fingerprint,
            summary,
            messages: messages.clone(),
        })?;
    }

    let report = AuditReport::new(settings.project_path.clone(), false, summary, messages);
    present(&settings, &report)
}

/// Directory searched for a configuration file when none is given
fn config_dir(graphs: &Path) -> &Path {
    match graphs.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

/// Fingerprint over every input that can change the findings
fn input_fingerprint(settings: &AuditSettings, graph_content: &str) -> String {
    let mut fingerprint = InputFingerprint::new();
    fingerprint.add("graphs", graph_content.as_bytes());
    for path in &settings.advisories {
        let content = read_checked_file(path, "advisory file").ok();
        fingerprint.add("advisory_path", path.display().to_string().as_bytes());
        fingerprint.add_optional("advisory", content.as_deref());
    }
    fingerprint
        .add_optional("audit_level", settings.audit_level.as_deref())
        .add_optional("audit_mode", settings.audit_mode.as_deref())
        .add("project_path", settings.project_path.as_bytes());
    fingerprint.finish()
}

fn present(settings: &AuditSettings, report: &AuditReport) -> Result<ExitCode> {
    let content = FormatterFactory::create(settings.format).format(report)?;
    PresenterFactory::create(PresenterType::from(settings.output.clone())).present(&content)?;

    if report.has_vulnerabilities() {
        Ok(ExitCode::VulnerabilitiesDetected)
    } else {
        Ok(ExitCode::Success)
    }
}
