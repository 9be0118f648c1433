use crate::application::dto::{AuditRequest, AuditResponse};
use crate::application::use_cases::ScanResultPoller;
use crate::onboarding::domain::{
    Application, Asset, AuditIssue, EvaluationStage, Organization, Repository,
};
use crate::onboarding::policies::ExistingApplicationPolicy;
use crate::ports::outbound::{
    ArtifactStore, GovernanceServer, IssueFormatter, PolicyEvaluator, ProgressReporter, SourceHost,
};
use crate::sbom_generation::domain::Dependency;
use crate::sbom_generation::services::SbomBuilder;
use crate::shared::Result;

/// RunAuditUseCase - Onboards every repository matching a search query
///
/// Repositories are processed strictly one after another: register the
/// application, scan its SBOM, evaluate release and package artifacts, queue
/// the issue. Issues are only opened once the whole batch went through.
///
/// # Type Parameters
/// * `SH` - SourceHost implementation
/// * `GS` - GovernanceServer implementation
/// * `PE` - PolicyEvaluator implementation
/// * `AS` - ArtifactStore implementation
/// * `IF` - IssueFormatter implementation
/// * `PR` - ProgressReporter implementation
pub struct RunAuditUseCase<SH, GS, PE, AS, IF, PR> {
    source_host: SH,
    governance_server: GS,
    policy_evaluator: PE,
    artifact_store: AS,
    issue_formatter: IF,
    progress_reporter: PR,
    poller: ScanResultPoller,
}

impl<SH, GS, PE, AS, IF, PR> RunAuditUseCase<SH, GS, PE, AS, IF, PR>
where
    SH: SourceHost,
    GS: GovernanceServer,
    PE: PolicyEvaluator,
    AS: ArtifactStore,
    IF: IssueFormatter,
    PR: ProgressReporter,
{
    /// Creates a new RunAuditUseCase with injected dependencies
    pub fn new(
        source_host: SH,
        governance_server: GS,
        policy_evaluator: PE,
        artifact_store: AS,
        issue_formatter: IF,
        progress_reporter: PR,
        poller: ScanResultPoller,
    ) -> Self {
        Self {
            source_host,
            governance_server,
            policy_evaluator,
            artifact_store,
            issue_formatter,
            progress_reporter,
            poller,
        }
    }

    /// Executes the audit
    ///
    /// # Errors
    /// The first failure aborts the whole batch; no issue is opened in that case.
    pub async fn execute(&self, request: AuditRequest) -> Result<AuditResponse> {
        // Step 1: Existing applications (only needed to skip them)
        let applications = self.load_existing_applications(&request).await?;

        // Step 2: Organization owning the new applications
        let organization = self.prepare_organization(&request).await?;

        // Step 3: Repository discovery
        self.progress_reporter.report("🔍 Searching repositories...");
        let repositories = self.source_host.search_repositories(&request.query).await?;
        self.progress_reporter
            .report(&format!("✅ Found {} repositories", repositories.len()));

        // Step 4: Onboard one repository at a time
        let mut response = AuditResponse {
            repositories_found: repositories.len(),
            ..Default::default()
        };
        let total = repositories.len();
        for (index, repository) in repositories.iter().enumerate() {
            self.progress_reporter
                .report_progress(index, total, Some(&repository.name_with_owner));

            if request.skip_existing_applications {
                if let Some(existing) = ExistingApplicationPolicy::find(&applications, repository) {
                    self.progress_reporter.report(&format!(
                        "⏭️  Existing application configured, skipping - {}:{}:{}",
                        existing.name, existing.public_id, existing.repository_url
                    ));
                    response.repositories_skipped += 1;
                    continue;
                }
            }

            let issue = self
                .onboard_repository(&request, &organization, repository)
                .await?;
            response.issues.push(issue);
        }
        if total > 0 {
            self.progress_reporter.report_progress(total, total, None);
        }

        // Step 5: Tracking issues
        if !request.skip_issue_creation {
            response.issues_created = self.create_issues(&response.issues).await?;
        }

        self.progress_reporter.report_completion(&format!(
            "✅ Audit complete: {} onboarded, {} skipped, {} issues created",
            response.repositories_onboarded(),
            response.repositories_skipped,
            response.issues_created
        ));

        Ok(response)
    }

    async fn load_existing_applications(&self, request: &AuditRequest) -> Result<Vec<Application>> {
        if !request.skip_existing_applications {
            return Ok(Vec::new());
        }
        self.progress_reporter.report("📋 Getting IQ applications...");
        self.governance_server.list_applications().await
    }

    async fn prepare_organization(&self, request: &AuditRequest) -> Result<Organization> {
        self.progress_reporter.report(&format!(
            "🏢 Getting or creating IQ organization - {}",
            request.organization
        ));
        let organization = self
            .governance_server
            .get_or_create_organization(&request.organization)
            .await?;
        self.governance_server
            .configure_organization_scm(&organization.id, &request.source_host_token)
            .await?;
        Ok(organization)
    }

    async fn onboard_repository(
        &self,
        request: &AuditRequest,
        organization: &Organization,
        repository: &Repository,
    ) -> Result<AuditIssue> {
        self.progress_reporter
            .report(&format!("📦 Creating IQ application - {}", repository.name));
        let application = self
            .governance_server
            .get_or_create_application(&organization.id, &repository.name, &repository.name)
            .await?;
        self.governance_server
            .configure_application_scm(&application.id, &repository.url)
            .await?;

        let mut issue = AuditIssue {
            iq_server_url: request.iq_server_url.clone(),
            repository: application.public_id.clone(),
            contact: request.contact.clone(),
            name_with_owner: repository.name_with_owner.clone(),
            ..Default::default()
        };

        issue.audit_report_url = self
            .scan_dependencies(&application, &repository.dependencies)
            .await?;

        if !request.skip_evaluations {
            if let Some(assets) = &repository.release_assets {
                let report = self
                    .evaluate_artifacts(
                        repository,
                        &application,
                        assets,
                        EvaluationStage::StageRelease,
                    )
                    .await?;
                issue.release_report_url = Some(report);
            }
            if let Some(files) = &repository.package_files {
                let report = self
                    .evaluate_artifacts(repository, &application, files, EvaluationStage::Release)
                    .await?;
                issue.package_report_url = Some(report);
            }
        }

        Ok(issue)
    }

    /// Submits the repository's SBOM and waits for the scan report.
    ///
    /// Repositories without dependency records are not scanned.
    async fn scan_dependencies(
        &self,
        application: &Application,
        dependencies: &[Dependency],
    ) -> Result<Option<String>> {
        if dependencies.is_empty() {
            return Ok(None);
        }

        let sbom = SbomBuilder::build(dependencies)?;
        self.progress_reporter.report(&format!(
            "📝 Submitting SBOM with {} components ({} dependencies)",
            sbom.components().len(),
            dependencies.len()
        ));
        let ticket = self
            .governance_server
            .submit_sbom(&application.id, &sbom)
            .await?;

        let result = self
            .poller
            .poll(&self.governance_server, &ticket.status_url)
            .await?;
        if result.is_error {
            self.progress_reporter.report_error(&format!(
                "⚠️  SBOM scan of {} reported an error",
                application.public_id
            ));
        }
        self.progress_reporter.report(&format!(
            "   Policy action: {}",
            result.policy_action
        ));

        Ok(Some(result.report_url))
    }

    async fn evaluate_artifacts(
        &self,
        repository: &Repository,
        application: &Application,
        assets: &[Asset],
        stage: EvaluationStage,
    ) -> Result<String> {
        let directory = self
            .artifact_store
            .stage_directory(&repository.name_with_owner, stage)?;

        for asset in assets {
            self.progress_reporter
                .report(&format!("⬇️  Downloading - {}", asset.name));
            let content = self.source_host.download(&asset.url).await?;
            self.artifact_store.store(&directory, &asset.name, &content)?;
        }

        let label = match stage {
            EvaluationStage::StageRelease => "latest release",
            EvaluationStage::Release => "latest package",
        };
        self.progress_reporter
            .report(&format!("🔬 Evaluating {}", label));
        let result = self
            .policy_evaluator
            .evaluate(&directory, &application.public_id, stage)
            .await?;

        Ok(result.report_url)
    }

    async fn create_issues(&self, issues: &[AuditIssue]) -> Result<usize> {
        for issue in issues {
            let body = self.issue_formatter.format(issue)?;
            self.source_host
                .create_issue(&issue.name_with_owner, AuditIssue::TITLE, &body)
                .await?;
            self.progress_reporter
                .report(&format!("📨 Created issue on {}", issue.name_with_owner));
        }
        Ok(issues.len())
    }
}
