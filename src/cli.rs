use clap::Parser;
use std::path::PathBuf;

/// Onboard GitHub repositories to Nexus IQ
///
/// Every repository matching the search query gets an IQ application, an SBOM
/// scan of its dependency graph, policy evaluations of its latest release and
/// package, and a tracking issue linking the reports.
#[derive(Parser, Debug, Default)]
#[command(name = "iq-scm-audit")]
#[command(version)]
#[command(about = "Onboard GitHub repositories to Nexus IQ", long_about = None)]
pub struct Args {
    /// GitHub Token
    #[arg(long = "gitHubToken", env = "GITHUB_TOKEN", hide_env_values = true)]
    pub github_token: Option<String>,

    /// Query String for GitHub graphql repository search
    #[arg(long = "gitHubQuery", env = "GITHUB_QUERY")]
    pub github_query: Option<String>,

    /// Nexus IQ Server Url
    #[arg(long = "iqServerUrl", env = "IQ_SERVER_URL")]
    pub iq_server_url: Option<String>,

    /// Nexus IQ Username
    #[arg(long = "iqUsername", env = "IQ_USERNAME")]
    pub iq_username: Option<String>,

    /// Nexus IQ Password
    #[arg(long = "iqPassword", env = "IQ_PASSWORD", hide_env_values = true)]
    pub iq_password: Option<String>,

    /// Organization to create new applications
    #[arg(long = "iqOrganization", env = "IQ_ORGANIZATION")]
    pub iq_organization: Option<String>,

    /// Email of person to contact for access to Nexus IQ
    #[arg(long = "iqContact", alias = "iqcontact", env = "IQ_CONTACT")]
    pub iq_contact: Option<String>,

    /// Skip GitHub Issue Creation
    #[arg(long = "skipIssueCreation")]
    pub skip_issue_creation: bool,

    /// Skip Audit and Evaluation against existing applications
    #[arg(long = "skipExistingApplications")]
    pub skip_existing_applications: bool,

    /// Skip IQ Evaluations against latest Release or Package assets
    #[arg(long = "skipIQEvaluations")]
    pub skip_iq_evaluations: bool,

    /// Path to a config file (defaults to iq-scm-audit.config.yml in the current directory)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Path to the Nexus IQ CLI jar used for evaluations
    #[arg(long = "iqCliJar", env = "IQ_CLI_JAR", value_name = "PATH")]
    pub iq_cli_jar: Option<PathBuf>,

    /// Markdown template for the tracking issue body
    #[arg(long = "issueTemplate", value_name = "PATH")]
    pub issue_template: Option<PathBuf>,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("iq-scm-audit").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_parse_camel_case_flags() {
        let args = parse(&[
            "--gitHubToken",
            "ghp_token",
            "--gitHubQuery",
            "org:octo",
            "--iqServerUrl",
            "https://iq.example.com",
            "--iqUsername",
            "admin",
            "--iqPassword",
            "secret",
            "--iqOrganization",
            "GitHub",
            "--iqContact",
            "security@example.com",
        ]);

        assert_eq!(args.github_token.as_deref(), Some("ghp_token"));
        assert_eq!(args.github_query.as_deref(), Some("org:octo"));
        assert_eq!(args.iq_server_url.as_deref(), Some("https://iq.example.com"));
        assert_eq!(args.iq_username.as_deref(), Some("admin"));
        assert_eq!(args.iq_password.as_deref(), Some("secret"));
        assert_eq!(args.iq_organization.as_deref(), Some("GitHub"));
        assert_eq!(args.iq_contact.as_deref(), Some("security@example.com"));
        assert!(!args.skip_issue_creation);
        assert!(!args.skip_existing_applications);
        assert!(!args.skip_iq_evaluations);
    }

    #[test]
    fn test_parse_skip_flags() {
        let args = parse(&[
            "--skipIssueCreation",
            "--skipExistingApplications",
            "--skipIQEvaluations",
        ]);
        assert!(args.skip_issue_creation);
        assert!(args.skip_existing_applications);
        assert!(args.skip_iq_evaluations);
    }

    #[test]
    fn test_parse_lowercase_contact_alias() {
        let args = parse(&["--iqcontact", "security@example.com"]);
        assert_eq!(args.iq_contact.as_deref(), Some("security@example.com"));
    }

    #[test]
    fn test_parse_paths() {
        let args = parse(&[
            "--config",
            "audit.yml",
            "--iqCliJar",
            "/opt/iq/cli.jar",
            "--issueTemplate",
            "github-issue.md",
        ]);
        assert_eq!(args.config, Some(PathBuf::from("audit.yml")));
        assert_eq!(args.iq_cli_jar, Some(PathBuf::from("/opt/iq/cli.jar")));
        assert_eq!(args.issue_template, Some(PathBuf::from("github-issue.md")));
    }

    #[test]
    fn test_unknown_flag_is_rejected() {
        let result = Args::try_parse_from(["iq-scm-audit", "--format", "json"]);
        assert!(result.is_err());
    }
}
