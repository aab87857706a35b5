/// Data Transfer Objects for application layer
///
/// DTOs carry requests and results between the adapters and the use cases,
/// keeping the domain layer isolated.
mod audit_report;
mod audit_request;
mod audit_summary;
mod output_format;

pub use audit_report::AuditReport;
pub use audit_request::AuditRequest;
pub use audit_summary::AuditSummary;
pub use output_format::OutputFormat;
