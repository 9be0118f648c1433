/// Formatter adapters for the SBOM wire format and issue bodies
mod cyclonedx_formatter;
mod issue_markdown_formatter;

pub use cyclonedx_formatter::CycloneDxFormatter;
pub use issue_markdown_formatter::IssueMarkdownFormatter;
