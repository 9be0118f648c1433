//! Configuration for iq-scm-audit.
//!
//! Values come from command-line flags (or their environment variables), an
//! optional `iq-scm-audit.config.yml` file, and built-in defaults, in that
//! order of precedence. Credentials are only accepted from flags or the
//! environment.

use anyhow::{bail, Context};
use iq_scm_audit::adapters::outbound::process::IqCliEvaluator;
use iq_scm_audit::application::dto::AuditRequest;
use iq_scm_audit::shared::error::AuditError;
use iq_scm_audit::shared::Result;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::cli::Args;

pub const CONFIG_FILENAME: &str = "iq-scm-audit.config.yml";
pub const ISSUE_TEMPLATE_FILENAME: &str = "github-issue.md";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub github_query: Option<String>,
    pub iq_server_url: Option<String>,
    pub iq_username: Option<String>,
    pub iq_organization: Option<String>,
    pub iq_contact: Option<String>,
    pub skip_issue_creation: Option<bool>,
    pub skip_existing_applications: Option<bool>,
    pub skip_iq_evaluations: Option<bool>,
    pub iq_cli_jar: Option<PathBuf>,
    pub issue_template: Option<PathBuf>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Looks for a `github-issue.md` template in the given directory.
pub fn discover_issue_template(dir: &Path) -> Option<PathBuf> {
    let template_path = dir.join(ISSUE_TEMPLATE_FILENAME);
    template_path.exists().then_some(template_path)
}

fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref url) = config.iq_server_url {
        if !url.starts_with("http://") && !url.starts_with("https://") {
            bail!(
                "Invalid config: iq_server_url '{}' is not an http(s) URL.\n\n\
                 💡 Hint: Use the full server address, e.g. \"https://iq.example.com\".",
                url
            );
        }
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        if key == "github_token" || key == "iq_password" {
            eprintln!(
                "⚠️  Warning: Config field '{}' is ignored; supply credentials via flags or environment variables.",
                key
            );
        } else {
            eprintln!("⚠️  Warning: Unknown config field '{}' will be ignored.", key);
        }
    }
}

/// Fully resolved settings of one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditConfiguration {
    pub github_token: String,
    pub github_query: String,
    pub iq_server_url: String,
    pub iq_username: String,
    pub iq_password: String,
    pub iq_organization: String,
    pub iq_contact: String,
    pub skip_issue_creation: bool,
    pub skip_existing_applications: bool,
    pub skip_iq_evaluations: bool,
    pub iq_cli_jar: PathBuf,
    pub issue_template: Option<PathBuf>,
}

impl AuditConfiguration {
    /// Merges flags over the config file.
    ///
    /// Required values are checked in a fixed order so the first missing one
    /// is reported. Empty strings count as missing.
    pub fn resolve(args: Args, config: ConfigFile) -> Result<Self> {
        let github_token = required(
            args.github_token,
            None,
            "GitHub Token",
            "gitHubToken",
            "GITHUB_TOKEN",
        )?;
        let github_query = required(
            args.github_query,
            config.github_query,
            "Query String for GitHub graphql repository search",
            "gitHubQuery",
            "GITHUB_QUERY",
        )?;
        let iq_server_url = required(
            args.iq_server_url,
            config.iq_server_url,
            "Nexus IQ Server Url",
            "iqServerUrl",
            "IQ_SERVER_URL",
        )?;
        let iq_username = required(
            args.iq_username,
            config.iq_username,
            "Nexus IQ Username",
            "iqUsername",
            "IQ_USERNAME",
        )?;
        let iq_password = required(
            args.iq_password,
            None,
            "Nexus IQ Password",
            "iqPassword",
            "IQ_PASSWORD",
        )?;
        let iq_organization = required(
            args.iq_organization,
            config.iq_organization,
            "Organization to create new applications",
            "iqOrganization",
            "IQ_ORGANIZATION",
        )?;
        let iq_contact = required(
            args.iq_contact,
            config.iq_contact,
            "Email of person to contact for access to Nexus IQ",
            "iqContact",
            "IQ_CONTACT",
        )?;

        Ok(Self {
            github_token,
            github_query,
            iq_server_url,
            iq_username,
            iq_password,
            iq_organization,
            iq_contact,
            skip_issue_creation: args.skip_issue_creation
                || config.skip_issue_creation.unwrap_or(false),
            skip_existing_applications: args.skip_existing_applications
                || config.skip_existing_applications.unwrap_or(false),
            skip_iq_evaluations: args.skip_iq_evaluations
                || config.skip_iq_evaluations.unwrap_or(false),
            iq_cli_jar: args
                .iq_cli_jar
                .or(config.iq_cli_jar)
                .unwrap_or_else(|| PathBuf::from(IqCliEvaluator::DEFAULT_JAR)),
            issue_template: args.issue_template.or(config.issue_template),
        })
    }

    pub fn to_request(&self) -> AuditRequest {
        AuditRequest {
            query: self.github_query.clone(),
            source_host_token: self.github_token.clone(),
            iq_server_url: self.iq_server_url.clone(),
            organization: self.iq_organization.clone(),
            contact: self.iq_contact.clone(),
            skip_issue_creation: self.skip_issue_creation,
            skip_existing_applications: self.skip_existing_applications,
            skip_evaluations: self.skip_iq_evaluations,
        }
    }
}

fn required(
    flag_value: Option<String>,
    config_value: Option<String>,
    description: &str,
    flag: &str,
    env_var: &str,
) -> Result<String> {
    flag_value
        .filter(|value| !value.is_empty())
        .or(config_value.filter(|value| !value.is_empty()))
        .ok_or_else(|| {
            AuditError::MissingConfiguration {
                description: description.to_string(),
                flag: flag.to_string(),
                env_var: env_var.to_string(),
            }
            .into()
        })
}
