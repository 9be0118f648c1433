use async_trait::async_trait;
use iq_scm_audit::prelude::*;
use std::sync::{Arc, Mutex};

/// Mock GovernanceServer
///
/// Status fetches walk through `status_bodies`; once the list runs out the
/// last body repeats. Every SBOM submitted is kept for inspection.
#[derive(Clone)]
pub struct MockGovernanceServer {
    pub applications: Vec<Application>,
    pub status_bodies: Vec<String>,
    pub status_fetches: Arc<Mutex<usize>>,
    pub submitted: Arc<Mutex<Vec<(String, Sbom)>>>,
    pub scm_configured: Arc<Mutex<Vec<(String, String)>>>,
}

impl MockGovernanceServer {
    pub const READY: &'static str =
        r#"{"policyAction":"None","reportHtmlUrl":"ui/links/application/demo/report/1","isError":false}"#;

    pub fn new() -> Self {
        Self {
            applications: Vec::new(),
            status_bodies: vec![Self::READY.to_string()],
            status_fetches: Arc::new(Mutex::new(0)),
            submitted: Arc::new(Mutex::new(Vec::new())),
            scm_configured: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_applications(mut self, applications: Vec<Application>) -> Self {
        self.applications = applications;
        self
    }

    pub fn with_status_bodies(mut self, bodies: &[&str]) -> Self {
        self.status_bodies = bodies.iter().map(|b| b.to_string()).collect();
        self
    }

    pub fn submitted_sboms(&self) -> Vec<(String, Sbom)> {
        self.submitted.lock().unwrap().clone()
    }

    pub fn status_fetch_count(&self) -> usize {
        *self.status_fetches.lock().unwrap()
    }
}

impl Default for MockGovernanceServer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl GovernanceServer for MockGovernanceServer {
    async fn list_applications(&self) -> Result<Vec<Application>> {
        Ok(self.applications.clone())
    }

    async fn get_or_create_organization(&self, name: &str) -> Result<Organization> {
        Ok(Organization {
            id: format!("org-{}", name),
            name: name.to_string(),
        })
    }

    async fn configure_organization_scm(&self, organization_id: &str, token: &str) -> Result<()> {
        self.scm_configured
            .lock()
            .unwrap()
            .push((organization_id.to_string(), token.to_string()));
        Ok(())
    }

    async fn get_or_create_application(
        &self,
        _organization_id: &str,
        public_id: &str,
        name: &str,
    ) -> Result<Application> {
        Ok(Application {
            id: format!("app-{}", public_id),
            public_id: public_id.to_string(),
            name: name.to_string(),
            repository_url: String::new(),
        })
    }

    async fn configure_application_scm(
        &self,
        application_id: &str,
        repository_url: &str,
    ) -> Result<()> {
        self.scm_configured
            .lock()
            .unwrap()
            .push((application_id.to_string(), repository_url.to_string()));
        Ok(())
    }

    async fn submit_sbom(&self, application_id: &str, sbom: &Sbom) -> Result<ScanTicket> {
        self.submitted
            .lock()
            .unwrap()
            .push((application_id.to_string(), sbom.clone()));
        Ok(ScanTicket {
            status_url: format!("api/v2/scan/applications/{}/status/1", application_id),
        })
    }

    async fn fetch_scan_status(&self, _status_url: &str) -> Result<String> {
        let mut fetches = self.status_fetches.lock().unwrap();
        let index = (*fetches).min(self.status_bodies.len() - 1);
        *fetches += 1;
        Ok(self.status_bodies[index].clone())
    }
}
