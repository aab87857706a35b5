/// Integration tests for the application layer
mod test_utilities;

use restore_core::prelude::*;
use restore_core::shared::error::RestoreError;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use test_utilities::mocks::*;
use tokio_util::sync::CancellationToken;
use url::Url;

fn project() -> LibraryIdentity {
    LibraryIdentity::project("App", PackageVersion::new(1, 0, 0))
}

fn package(name: &str, version: &str) -> LibraryIdentity {
    LibraryIdentity::package(name, PackageVersion::parse(version).unwrap())
}

fn graph(name: &str, edges: Vec<(LibraryIdentity, LibraryIdentity)>) -> RestoreTargetGraph {
    RestoreTargetGraph::new(
        name,
        Some(project()),
        edges
            .into_iter()
            .map(|(parent, child)| ResolvedDependencyKey::new(parent, child))
            .collect(),
    )
}

fn advisory(url: &str, severity: i32, range: &str) -> PackageVulnerabilityInfo {
    PackageVulnerabilityInfo::new(
        Url::parse(url).unwrap(),
        severity,
        VersionRange::parse(range).unwrap(),
    )
}

fn advisory_file(entries: Vec<(&str, PackageVulnerabilityInfo)>) -> AdvisoryFile {
    let mut file = AdvisoryFile::new();
    for (name, info) in entries {
        file.entry(name.to_string()).or_default().push(info);
    }
    file
}

fn use_case(providers: Vec<MockVulnerabilityProvider>) -> CheckPackageVulnerabilitiesUseCase {
    let providers: Vec<Box<dyn VulnerabilityInformationProvider>> = providers
        .into_iter()
        .map(|p| Box::new(p) as Box<dyn VulnerabilityInformationProvider>)
        .collect();
    CheckPackageVulnerabilitiesUseCase::new(AggregateVulnerabilityDataUseCase::new(providers))
}

fn single_package_graphs() -> Vec<RestoreTargetGraph> {
    vec![graph("net8.0", vec![(project(), package("Pkg", "1.0.0"))])]
}

fn single_advisory() -> AdvisoryFile {
    advisory_file(vec![("Pkg", advisory("https://a/1", 3, "[1.0.0]"))])
}

#[tokio::test]
async fn test_default_settings_report_one_warning() {
    let logger = MockRestoreLogger::new();
    let summary = use_case(vec![MockVulnerabilityProvider::returning(
        "nuget",
        vec![single_advisory()],
    )])
    .execute(
        &single_package_graphs(),
        &AuditRequest::new("src/App/App.csproj"),
        &logger,
        &CancellationToken::new(),
    )
    .await
    .unwrap();

    assert!(summary.audit_ran);
    assert_eq!(summary.vulnerability_warnings, 1);

    let messages = logger.get_messages();
    assert_eq!(messages.len(), 1);
    let warning = &messages[0];
    assert_eq!(warning.code, LogCode::NU1903);
    assert_eq!(warning.level, LogLevel::Warning);
    assert!(warning.message.contains("Pkg"));
    assert!(warning.message.contains("1.0.0"));
    assert!(warning.message.contains("https://a/1"));
    assert_eq!(warning.library_id.as_deref(), Some("Pkg"));
    assert_eq!(
        warning.target_graphs.as_deref(),
        Some(&["net8.0".to_string()][..])
    );
    assert!(warning.is_vulnerability());
}

#[tokio::test]
async fn test_critical_level_filters_high_severity() {
    let logger = MockRestoreLogger::new();
    let summary = use_case(vec![MockVulnerabilityProvider::returning(
        "nuget",
        vec![single_advisory()],
    )])
    .execute(
        &single_package_graphs(),
        &AuditRequest::new("src/App/App.csproj").with_audit_level(Some("critical".to_string())),
        &logger,
        &CancellationToken::new(),
    )
    .await
    .unwrap();

    assert!(summary.audit_ran);
    assert!(!summary.has_vulnerabilities());
    assert_eq!(logger.message_count(), 0);
}

#[tokio::test]
async fn test_failing_provider_does_not_block_the_others() {
    let logger = MockRestoreLogger::new();
    let summary = use_case(vec![
        MockVulnerabilityProvider::failing("broken", "connection refused"),
        MockVulnerabilityProvider::returning("nuget", vec![single_advisory()]),
    ])
    .execute(
        &single_package_graphs(),
        &AuditRequest::new("src/App/App.csproj"),
        &logger,
        &CancellationToken::new(),
    )
    .await
    .unwrap();

    assert_eq!(summary.fetch_failures, 1);
    assert_eq!(summary.vulnerability_warnings, 1);

    let messages = logger.get_messages();
    let failure = messages
        .iter()
        .find(|m| m.code == LogCode::NU1900)
        .expect("fetch failure should be reported");
    assert_eq!(failure.level, LogLevel::Error);
    assert!(failure.message.contains("connection refused"));
    assert!(!failure.is_vulnerability());
    assert!(messages.iter().any(|m| m.code == LogCode::NU1903));
}

#[tokio::test]
async fn test_in_result_failures_are_reported() {
    let logger = MockRestoreLogger::new();
    let mut result = VulnerabilityInfoResult::with_vulnerabilities(vec![single_advisory()]);
    result.exceptions = Some(vec![
        VulnerabilityFetchError::new("first page timed out"),
        VulnerabilityFetchError::new("second page timed out"),
    ]);

    let summary = use_case(vec![MockVulnerabilityProvider::returning_result(
        "paged", result,
    )])
    .execute(
        &single_package_graphs(),
        &AuditRequest::new("app.csproj"),
        &logger,
        &CancellationToken::new(),
    )
    .await
    .unwrap();

    assert_eq!(summary.fetch_failures, 2);
    assert_eq!(
        logger.codes(),
        vec![LogCode::NU1900, LogCode::NU1900, LogCode::NU1903]
    );
}

#[tokio::test]
async fn test_no_data_from_any_provider_skips_audit() {
    let logger = MockRestoreLogger::new();
    let summary = use_case(vec![
        MockVulnerabilityProvider::empty("first"),
        MockVulnerabilityProvider::empty("second"),
    ])
    .execute(
        &single_package_graphs(),
        &AuditRequest::new("app.csproj").with_audit_mode(Some("nonsense".to_string())),
        &logger,
        &CancellationToken::new(),
    )
    .await
    .unwrap();

    assert!(!summary.audit_ran);
    assert_eq!(logger.message_count(), 0);
}

#[tokio::test]
async fn test_no_providers_skips_audit() {
    let logger = MockRestoreLogger::new();
    let summary = use_case(Vec::new())
        .execute(
            &single_package_graphs(),
            &AuditRequest::new("app.csproj"),
            &logger,
            &CancellationToken::new(),
        )
        .await
        .unwrap();

    assert_eq!(summary, AuditSummary::skipped());
}

#[tokio::test]
async fn test_findings_are_deterministic_under_out_of_order_completion() {
    let graphs = vec![
        graph(
            "net8.0",
            vec![
                (project(), package("Zeta", "2.0.0")),
                (project(), package("Alpha", "1.0.0")),
            ],
        ),
        graph("net472", vec![(project(), package("Alpha", "1.0.0"))]),
    ];
    let primary_file = advisory_file(vec![
        ("Zeta", advisory("https://z/1", 4, "[2.0.0]")),
        ("Alpha", advisory("https://a/2", 2, "[1.0.0, 2.0.0)")),
    ]);
    let secondary_file = advisory_file(vec![("Alpha", advisory("https://a/1", 1, "1.0.0"))]);

    let run = |primary_first: bool| {
        let graphs = graphs.clone();
        let primary_file = primary_file.clone();
        let secondary_file = secondary_file.clone();
        async move {
            let completions = Arc::new(Mutex::new(Vec::new()));
            let (primary_delay, secondary_delay) = if primary_first {
                (Duration::from_millis(5), Duration::from_millis(60))
            } else {
                (Duration::from_millis(60), Duration::from_millis(5))
            };
            let providers = vec![
                MockVulnerabilityProvider::returning("primary", vec![primary_file])
                    .with_delay(primary_delay)
                    .with_completions(completions.clone()),
                MockVulnerabilityProvider::returning("secondary", vec![secondary_file])
                    .with_delay(secondary_delay)
                    .with_completions(completions.clone()),
            ];

            let logger = MockRestoreLogger::new();
            use_case(providers)
                .execute(
                    &graphs,
                    &AuditRequest::new("app.csproj").with_audit_level(Some("low".to_string())),
                    &logger,
                    &CancellationToken::new(),
                )
                .await
                .unwrap();

            let order = completions.lock().unwrap().clone();
            (order, logger.get_messages())
        }
    };

    let (first_order, first) = run(true).await;
    let (second_order, second) = run(false).await;

    assert_ne!(first_order, second_order);
    assert_eq!(first, second);

    let rendered: Vec<String> = first.iter().map(|m| m.to_string()).collect();
    let second_rendered: Vec<String> = second.iter().map(|m| m.to_string()).collect();
    assert_eq!(rendered, second_rendered);

    let ids: Vec<(&str, &str)> = first
        .iter()
        .map(|m| (m.library_id.as_deref().unwrap(), m.code.as_str()))
        .collect();
    assert_eq!(
        ids,
        vec![("Alpha", "NU1901"), ("Alpha", "NU1902"), ("Zeta", "NU1904")]
    );
    assert_eq!(
        first[0].target_graphs.as_deref(),
        Some(&["net472".to_string(), "net8.0".to_string()][..])
    );
}

#[tokio::test]
async fn test_fetch_progress_follows_completion_order() {
    let providers = vec![
        MockVulnerabilityProvider::returning("slow", vec![single_advisory()])
            .with_delay(Duration::from_millis(60)),
        MockVulnerabilityProvider::failing("fast", "offline").with_delay(Duration::from_millis(5)),
    ];

    let logger = MockRestoreLogger::new();
    let progress = MockProgressReporter::new();
    let summary = use_case(providers)
        .execute_with_progress(
            &single_package_graphs(),
            &AuditRequest::new("app.csproj"),
            &logger,
            &progress,
            &CancellationToken::new(),
        )
        .await
        .unwrap();

    assert_eq!(
        progress.get_messages(),
        vec!["Progress: 1/2 - fast", "Progress: 2/2 - slow"]
    );
    assert_eq!(summary.fetch_failures, 1);
    assert_eq!(logger.codes(), vec![LogCode::NU1900, LogCode::NU1903]);
}

#[tokio::test]
async fn test_cancelled_fetch_still_counts_toward_progress() {
    let token = CancellationToken::new();
    token.cancel();
    let progress = MockProgressReporter::new();

    let err = use_case(vec![MockVulnerabilityProvider::returning(
        "nuget",
        vec![single_advisory()],
    )])
    .execute_with_progress(
        &single_package_graphs(),
        &AuditRequest::new("app.csproj"),
        &MockRestoreLogger::new(),
        &progress,
        &token,
    )
    .await
    .unwrap_err();

    assert!(RestoreError::is_cancellation(&err));
    assert_eq!(progress.get_messages(), vec!["Progress: 1/1 - nuget"]);
}

#[tokio::test]
async fn test_same_advisory_from_two_sources_and_graphs_reported_once() {
    let pkg = package("Pkg", "1.0.0");
    let graphs = vec![
        graph(
            "net8.0",
            vec![
                (project(), pkg.clone()),
                (package("Other", "1.0.0"), pkg.clone()),
            ],
        ),
        graph("net472", vec![(project(), pkg.clone())]),
    ];
    let logger = MockRestoreLogger::new();

    let summary = use_case(vec![
        MockVulnerabilityProvider::returning("first", vec![single_advisory()]),
        MockVulnerabilityProvider::returning("second", vec![single_advisory()]),
    ])
    .execute(
        &graphs,
        &AuditRequest::new("app.csproj").with_audit_mode(Some("all".to_string())),
        &logger,
        &CancellationToken::new(),
    )
    .await
    .unwrap();

    assert_eq!(summary.vulnerable_packages, 1);
    assert_eq!(summary.vulnerability_warnings, 1);

    let messages = logger.get_messages();
    assert_eq!(messages.len(), 1);
    assert_eq!(
        messages[0].target_graphs.as_deref(),
        Some(&["net472".to_string(), "net8.0".to_string()][..])
    );
}

#[tokio::test]
async fn test_direct_mode_ignores_transitive_packages() {
    let graphs = vec![graph(
        "net8.0",
        vec![
            (project(), package("Direct", "1.0.0")),
            (package("Direct", "1.0.0"), package("Pkg", "1.0.0")),
        ],
    )];

    let run = |mode: &'static str| {
        let graphs = graphs.clone();
        async move {
            let logger = MockRestoreLogger::new();
            use_case(vec![MockVulnerabilityProvider::returning(
                "nuget",
                vec![single_advisory()],
            )])
            .execute(
                &graphs,
                &AuditRequest::new("app.csproj").with_audit_mode(Some(mode.to_string())),
                &logger,
                &CancellationToken::new(),
            )
            .await
            .unwrap();
            logger.message_count()
        }
    };

    assert_eq!(run("direct").await, 0);
    assert_eq!(run("all").await, 1);
}

#[tokio::test]
async fn test_cancellation_is_returned_as_error() {
    let token = CancellationToken::new();
    let logger = MockRestoreLogger::new();
    let audit = use_case(vec![MockVulnerabilityProvider::returning(
        "slow",
        vec![single_advisory()],
    )
    .with_delay(Duration::from_secs(30))]);

    let canceller = token.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(20)).await;
        canceller.cancel();
    });

    let err = audit
        .execute(
            &single_package_graphs(),
            &AuditRequest::new("app.csproj"),
            &logger,
            &token,
        )
        .await
        .unwrap_err();

    assert!(RestoreError::is_cancellation(&err));
    assert_eq!(logger.message_count(), 0);
}

#[tokio::test]
async fn test_already_cancelled_token_fails() {
    let token = CancellationToken::new();
    token.cancel();
    let logger = MockRestoreLogger::new();

    let err = use_case(vec![MockVulnerabilityProvider::empty("idle")])
        .execute(
            &single_package_graphs(),
            &AuditRequest::new("app.csproj"),
            &logger,
            &token,
        )
        .await
        .unwrap_err();

    assert!(RestoreError::is_cancellation(&err));
}

#[tokio::test]
async fn test_aggregate_merges_all_providers() {
    let aggregator = AggregateVulnerabilityDataUseCase::new(vec![
        Box::new(MockVulnerabilityProvider::returning(
            "first",
            vec![single_advisory()],
        )),
        Box::new(MockVulnerabilityProvider::failing("second", "boom")),
        Box::new(MockVulnerabilityProvider::returning(
            "third",
            vec![single_advisory(), AdvisoryFile::new()],
        )),
    ]);

    let merged = aggregator
        .execute(&CancellationToken::new())
        .await
        .unwrap()
        .unwrap();

    assert_eq!(merged.advisory_files().len(), 3);
    assert_eq!(merged.failures().len(), 1);
    assert!(merged.failures()[0].message.contains("boom"));
}

#[test]
fn test_central_versions_applied_to_unversioned_edges() {
    let central: CentralPackageVersions = [
        CentralPackageVersion::new("Newtonsoft.Json", VersionRange::parse("13.0.1").unwrap()),
        CentralPackageVersion::new("Serilog", VersionRange::parse("[3.0.0]").unwrap()),
    ]
    .into_iter()
    .collect();

    let mut pinned = LibraryDependency::new(LibraryRange::new(
        "Serilog",
        Some(VersionRange::parse("2.0.0").unwrap()),
        LibraryDependencyTarget::PACKAGE,
    ));
    pinned.set_reference_type(LibraryDependencyReferenceType::DIRECT);

    let mut overridden = LibraryDependency::new(LibraryRange::unversioned("Serilog"));
    overridden.version_override = Some(VersionRange::parse("[4.0.0]").unwrap());

    let mut implicit = LibraryDependency::new(LibraryRange::unversioned("Implicit.Sdk"));
    implicit.set_auto_referenced(true);

    let mut dependencies = vec![
        LibraryDependency::new(LibraryRange::unversioned("newtonsoft.json")),
        LibraryDependency::new(LibraryRange::unversioned("Missing")),
        pinned,
        overridden,
        implicit,
    ];

    apply_central_version_information(&mut dependencies, &central);

    assert_eq!(
        dependencies[0].library_range.version_range,
        Some(VersionRange::parse("13.0.1").unwrap())
    );
    assert!(dependencies[0].version_centrally_managed());

    assert!(dependencies[1].library_range.version_range.is_none());
    assert!(dependencies[1].version_centrally_managed());

    assert_eq!(
        dependencies[2].library_range.version_range,
        Some(VersionRange::parse("2.0.0").unwrap())
    );
    assert!(!dependencies[2].version_centrally_managed());

    assert_eq!(
        dependencies[3].library_range.version_range,
        Some(VersionRange::parse("[4.0.0]").unwrap())
    );
    assert!(!dependencies[3].version_centrally_managed());

    assert!(dependencies[4].library_range.version_range.is_none());
    assert!(!dependencies[4].version_centrally_managed());
}

#[test]
fn test_dependencies_to_audit_by_mode() {
    let graph = graph(
        "net8.0",
        vec![
            (project(), package("Direct", "1.0.0")),
            (package("Direct", "1.0.0"), package("Transitive", "1.0.0")),
            (project(), LibraryIdentity::project("Lib", PackageVersion::new(1, 0, 0))),
        ],
    );

    let direct: Vec<&str> = dependencies_to_audit(&graph, AuditMode::Direct)
        .map(|edge| edge.child.name.as_str())
        .collect();
    let all: Vec<&str> = dependencies_to_audit(&graph, AuditMode::All)
        .map(|edge| edge.child.name.as_str())
        .collect();

    assert_eq!(direct, vec!["Direct"]);
    assert_eq!(all, vec!["Direct", "Transitive"]);
}
