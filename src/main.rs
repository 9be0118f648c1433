mod cli;
mod config;

use cli::Args;
use config::{discover_config, discover_issue_template, load_config_from_path, AuditConfiguration};
use iq_scm_audit::prelude::*;
use iq_scm_audit::shared::error::{AuditError, ExitCode};
use owo_colors::OwoColorize;
use std::path::Path;
use std::process;

#[tokio::main]
async fn main() {
    match run().await {
        Ok(response) => print_summary(&response),
        Err(e) => {
            eprintln!("\n{}\n", "❌ An error occurred:".red().bold());
            eprintln!("{}", e);

            // Display error chain
            let mut source = e.source();
            while let Some(err) = source {
                eprintln!("\nCaused by: {}", err);
                source = err.source();
            }

            if let Some(audit_error) = e.downcast_ref::<AuditError>() {
                let queued = audit_error.queued_messages();
                if !queued.is_empty() {
                    eprintln!("\n{}", "Queued messages:".yellow());
                    for (index, message) in queued.iter().enumerate() {
                        eprintln!("  [{}] {}", index + 1, message.dimmed());
                    }
                }
            }

            eprintln!();
            process::exit(ExitCode::for_error(&e).as_i32());
        }
    }
}

async fn run() -> Result<AuditResponse> {
    // Parse command-line arguments
    let args = Args::parse_args();

    // Layer the config file under the flags
    let config_file = match args.config.as_deref() {
        Some(path) => load_config_from_path(path)?,
        None => discover_config(Path::new("."))?.unwrap_or_default(),
    };
    let configuration = AuditConfiguration::resolve(args, config_file)?;

    // Create adapters (Dependency Injection)
    let source_host = GitHubClient::new(&configuration.github_token)?;
    let governance_server = IqClient::new(
        &configuration.iq_server_url,
        &configuration.iq_username,
        &configuration.iq_password,
    )?;
    let policy_evaluator = IqCliEvaluator::new(
        configuration.iq_cli_jar.clone(),
        &configuration.iq_server_url,
        &configuration.iq_username,
        &configuration.iq_password,
    );
    let work_directory = WorkDirectory::create()?;
    let issue_template = configuration
        .issue_template
        .clone()
        .or_else(|| discover_issue_template(Path::new(".")));
    let issue_formatter = match issue_template.as_deref() {
        Some(path) => IssueMarkdownFormatter::from_template_file(path)?,
        None => IssueMarkdownFormatter::new(),
    };
    let progress_reporter = StderrProgressReporter::new();

    let use_case = RunAuditUseCase::new(
        source_host,
        governance_server,
        policy_evaluator,
        work_directory,
        issue_formatter,
        progress_reporter,
        ScanResultPoller::default(),
    );

    // Downloads are removed when the use case (and its work directory) drops
    use_case.execute(configuration.to_request()).await
}

fn print_summary(response: &AuditResponse) {
    println!("{}", "Audit summary".bold());
    println!("  Repositories found:     {}", response.repositories_found);
    println!(
        "  Repositories onboarded: {}",
        response.repositories_onboarded().green()
    );
    println!("  Repositories skipped:   {}", response.repositories_skipped);
    println!("  Issues created:         {}", response.issues_created);
}

