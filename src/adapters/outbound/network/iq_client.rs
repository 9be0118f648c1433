use crate::adapters::outbound::formatters::CycloneDxFormatter;
use crate::onboarding::domain::{Application, Organization, ScanTicket};
use crate::ports::outbound::{GovernanceServer, SbomFormatter};
use crate::sbom_generation::domain::Sbom;
use crate::shared::error::AuditError;
use crate::shared::Result;
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;

#[derive(Debug, Deserialize)]
struct ApplicationsPayload {
    #[serde(default)]
    applications: Vec<ApplicationPayload>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApplicationPayload {
    id: String,
    public_id: String,
    name: String,
}

impl From<ApplicationPayload> for Application {
    fn from(payload: ApplicationPayload) -> Self {
        Application {
            id: payload.id,
            public_id: payload.public_id,
            name: payload.name,
            repository_url: String::new(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct OrganizationsPayload {
    #[serde(default)]
    organizations: Vec<OrganizationPayload>,
}

#[derive(Debug, Deserialize)]
struct OrganizationPayload {
    id: String,
    name: String,
}

impl From<OrganizationPayload> for Organization {
    fn from(payload: OrganizationPayload) -> Self {
        Organization {
            id: payload.id,
            name: payload.name,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SourceControlPayload {
    #[serde(default)]
    repository_url: String,
}

/// IqClient adapter for the Nexus IQ REST API (`/api/v2`)
///
/// All requests use basic authentication. Response bodies are parsed whatever
/// the HTTP status, since the server reports most failures as non-JSON text;
/// unparseable bodies become [`AuditError::UnexpectedResponse`].
pub struct IqClient {
    client: reqwest::Client,
    server_url: String,
    username: String,
    password: String,
    formatter: CycloneDxFormatter,
}

impl IqClient {
    const API_ENDPOINT: &'static str = "/api/v2/";
    const APPLICATIONS: &'static str = "applications/";
    const APPLICATION_SCM: &'static str = "sourceControl/application/";
    const ORGANIZATIONS: &'static str = "organizations/";
    const ORGANIZATION_SCM: &'static str = "sourceControl/organization/";
    const SCAN: &'static str = "scan/applications/";
    const TIMEOUT_SECONDS: u64 = 60;

    /// Creates a new IQ client with default configuration
    pub fn new(server_url: &str, username: &str, password: &str) -> Result<Self> {
        let user_agent = format!("iq-scm-audit/{}", env!("CARGO_PKG_VERSION"));
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(Self::TIMEOUT_SECONDS))
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            server_url: server_url.trim_end_matches('/').to_string(),
            username: username.to_string(),
            password: password.to_string(),
            formatter: CycloneDxFormatter::new(),
        })
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}{}{}", self.server_url, Self::API_ENDPOINT, path)
    }

    /// Status URLs handed out by the scan endpoint are relative to the server root.
    fn status_url(&self, status_url: &str) -> String {
        format!("{}/{}", self.server_url, status_url.trim_start_matches('/'))
    }

    async fn get(&self, url: &str) -> Result<String> {
        let response = self
            .client
            .get(url)
            .basic_auth(&self.username, Some(&self.password))
            .send()
            .await?;
        Ok(response.text().await?)
    }

    async fn post_json(&self, url: &str, body: &serde_json::Value) -> Result<String> {
        let response = self
            .client
            .post(url)
            .basic_auth(&self.username, Some(&self.password))
            .json(body)
            .send()
            .await?;
        Ok(response.text().await?)
    }

    async fn post_xml(&self, url: &str, body: String) -> Result<String> {
        let response = self
            .client
            .post(url)
            .basic_auth(&self.username, Some(&self.password))
            .header(CONTENT_TYPE, "application/xml")
            .body(body)
            .send()
            .await?;
        Ok(response.text().await?)
    }

    fn parse<T: DeserializeOwned>(endpoint: &str, body: String) -> Result<T> {
        serde_json::from_str(&body).map_err(|_| {
            AuditError::UnexpectedResponse {
                endpoint: endpoint.to_string(),
                body,
            }
            .into()
        })
    }

    /// Source URL configured for an application.
    ///
    /// The server answers with an error body when none is configured, which is
    /// treated as "no URL".
    async fn application_repository_url(&self, application_id: &str) -> Result<String> {
        let url = self.api_url(&format!("{}{}", Self::APPLICATION_SCM, application_id));
        let body = self.get(&url).await?;
        Ok(serde_json::from_str::<SourceControlPayload>(&body)
            .map(|scm| scm.repository_url)
            .unwrap_or_default())
    }
}

#[async_trait]
impl GovernanceServer for IqClient {
    async fn list_applications(&self) -> Result<Vec<Application>> {
        let url = self.api_url(Self::APPLICATIONS);
        let payload: ApplicationsPayload = Self::parse(&url, self.get(&url).await?)?;

        let mut applications = Vec::with_capacity(payload.applications.len());
        for application in payload.applications {
            let mut application = Application::from(application);
            application.repository_url = self.application_repository_url(&application.id).await?;
            applications.push(application);
        }
        Ok(applications)
    }

    async fn get_or_create_organization(&self, name: &str) -> Result<Organization> {
        let url = self.api_url(Self::ORGANIZATIONS);
        let payload: OrganizationsPayload = Self::parse(&url, self.get(&url).await?)?;

        if let Some(existing) = payload
            .organizations
            .into_iter()
            .find(|organization| organization.name == name)
        {
            return Ok(existing.into());
        }

        let created: OrganizationPayload =
            Self::parse(&url, self.post_json(&url, &json!({ "name": name })).await?)?;
        Ok(created.into())
    }

    async fn configure_organization_scm(&self, organization_id: &str, token: &str) -> Result<()> {
        let url = self.api_url(&format!("{}{}", Self::ORGANIZATION_SCM, organization_id));
        self.post_json(&url, &json!({ "token": token, "provider": "GitHub" }))
            .await?;
        Ok(())
    }

    async fn get_or_create_application(
        &self,
        organization_id: &str,
        public_id: &str,
        name: &str,
    ) -> Result<Application> {
        let lookup_url = format!(
            "{}?publicId={}",
            self.api_url(Self::APPLICATIONS),
            urlencoding::encode(public_id)
        );
        let payload: ApplicationsPayload = Self::parse(&lookup_url, self.get(&lookup_url).await?)?;
        if let Some(existing) = payload.applications.into_iter().next() {
            return Ok(existing.into());
        }

        let url = self.api_url(Self::APPLICATIONS);
        let body = json!({
            "publicId": public_id,
            "name": name,
            "organizationId": organization_id,
        });
        let created: ApplicationPayload = Self::parse(&url, self.post_json(&url, &body).await?)?;
        Ok(created.into())
    }

    async fn configure_application_scm(
        &self,
        application_id: &str,
        repository_url: &str,
    ) -> Result<()> {
        let url = self.api_url(&format!("{}{}", Self::APPLICATION_SCM, application_id));
        self.post_json(&url, &json!({ "repositoryUrl": repository_url }))
            .await?;
        Ok(())
    }

    async fn submit_sbom(&self, application_id: &str, sbom: &Sbom) -> Result<ScanTicket> {
        let url = self.api_url(&format!("{}{}/sources/cyclone", Self::SCAN, application_id));
        let xml = self.formatter.format(sbom)?;
        Self::parse(&url, self.post_xml(&url, xml).await?)
    }

    async fn fetch_scan_status(&self, status_url: &str) -> Result<String> {
        self.get(&self.status_url(status_url)).await
    }
}
