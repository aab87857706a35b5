mod audit_policy;
mod audit_selection;
mod central_version_merge;
mod vulnerability_matcher;

pub use audit_policy::{parse_audit_level, parse_audit_mode, AuditMode, ParsedSetting};
pub use audit_selection::dependencies_to_audit;
pub use central_version_merge::apply_central_version_information;
pub use vulnerability_matcher::{
    create_vulnerability_warnings, severity_label, severity_log_code, AdvisoryOccurrence,
    AuditedPackage, VulnerabilityMatcher,
};
