use crate::onboarding::domain::AuditIssue;
use crate::ports::outbound::IssueFormatter;
use crate::shared::security::read_regular_file;
use crate::shared::Result;
use std::path::Path;

/// IssueMarkdownFormatter adapter for rendering onboarding issue bodies
///
/// Without a template a built-in Markdown body is produced. A template may use
/// the placeholders `{{ .IqServerUrl }}`, `{{ .AuditReportUrl }}`,
/// `{{ .ReleaseReportUrl }}`, `{{ .PackageReportUrl }}`, `{{ .Repository }}`,
/// `{{ .Contact }}` and `{{ .NameWithOwner }}`, with or without the inner
/// spaces. Substituted values are HTML-escaped; missing report URLs render as
/// empty strings.
pub struct IssueMarkdownFormatter {
    template: Option<String>,
}

impl IssueMarkdownFormatter {
    pub fn new() -> Self {
        Self { template: None }
    }

    pub fn with_template(template: String) -> Self {
        Self {
            template: Some(template),
        }
    }

    /// Loads the issue template from disk.
    pub fn from_template_file(path: &Path) -> Result<Self> {
        let template = read_regular_file(path, "issue template")?;
        Ok(Self::with_template(template))
    }

    fn placeholders(issue: &AuditIssue) -> [(&'static str, &str); 7] {
        [
            ("IqServerUrl", issue.iq_server_url.as_str()),
            (
                "AuditReportUrl",
                issue.audit_report_url.as_deref().unwrap_or_default(),
            ),
            (
                "ReleaseReportUrl",
                issue.release_report_url.as_deref().unwrap_or_default(),
            ),
            (
                "PackageReportUrl",
                issue.package_report_url.as_deref().unwrap_or_default(),
            ),
            ("Repository", issue.repository.as_str()),
            ("Contact", issue.contact.as_str()),
            ("NameWithOwner", issue.name_with_owner.as_str()),
        ]
    }

    /// Escapes text the way Go's `html/template` does for HTML text.
    fn escape_html(value: &str) -> String {
        let mut escaped = String::with_capacity(value.len());
        for c in value.chars() {
            match c {
                '&' => escaped.push_str("&amp;"),
                '<' => escaped.push_str("&lt;"),
                '>' => escaped.push_str("&gt;"),
                '"' => escaped.push_str("&#34;"),
                '\'' => escaped.push_str("&#39;"),
                '+' => escaped.push_str("&#43;"),
                '\0' => escaped.push('\u{FFFD}'),
                _ => escaped.push(c),
            }
        }
        escaped
    }

    fn render_template(template: &str, issue: &AuditIssue) -> String {
        let mut rendered = template.to_string();
        for (field, value) in Self::placeholders(issue) {
            let value = Self::escape_html(value);
            rendered = rendered
                .replace(&format!("{{{{ .{} }}}}", field), &value)
                .replace(&format!("{{{{.{}}}}}", field), &value);
        }
        rendered
    }

    /// Joins a server-relative report path onto the server URL.
    fn report_link(iq_server_url: &str, report_url: &str) -> String {
        if report_url.starts_with("http://") || report_url.starts_with("https://") {
            report_url.to_string()
        } else {
            format!(
                "{}/{}",
                iq_server_url.trim_end_matches('/'),
                report_url.trim_start_matches('/')
            )
        }
    }

    fn render_default(issue: &AuditIssue) -> String {
        let mut output = String::new();
        output.push_str("## Nexus IQ onboarding\n\n");
        output.push_str(&format!(
            "`{}` has been registered as application **{}** on [Nexus IQ]({}).\n\n",
            issue.name_with_owner, issue.repository, issue.iq_server_url
        ));

        let reports = [
            ("Dependency audit", &issue.audit_report_url),
            ("Latest release evaluation", &issue.release_report_url),
            ("Latest package evaluation", &issue.package_report_url),
        ];
        if reports.iter().any(|(_, url)| url.is_some()) {
            output.push_str("### Reports\n\n");
            for (label, url) in reports {
                if let Some(url) = url {
                    output.push_str(&format!(
                        "- [{}]({})\n",
                        label,
                        Self::report_link(&issue.iq_server_url, url)
                    ));
                }
            }
            output.push('\n');
        }

        output.push_str("### Next steps\n\n");
        output.push_str("- Review the policy violations listed in the reports above.\n");
        output.push_str(
            "- Add a Nexus IQ evaluation to this repository's CI pipeline to keep the reports current.\n\n",
        );
        output.push_str(&format!(
            "Contact {} for access to Nexus IQ.\n",
            issue.contact
        ));
        output
    }
}

impl Default for IssueMarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl IssueFormatter for IssueMarkdownFormatter {
    fn format(&self, issue: &AuditIssue) -> Result<String> {
        Ok(match &self.template {
            Some(template) => Self::render_template(template, issue),
            None => Self::render_default(issue),
        })
    }
}
