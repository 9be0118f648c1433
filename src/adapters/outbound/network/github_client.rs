use crate::onboarding::domain::{Asset, Repository};
use crate::ports::outbound::SourceHost;
use crate::sbom_generation::domain::Dependency;
use crate::shared::error::AuditError;
use crate::shared::Result;
use anyhow::Context;
use async_trait::async_trait;
use reqwest::header::ACCEPT;
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;

const SEARCH_QUERY: &str = r#"
query($queryString: String!, $repositoryCursor: String) {
  search(query: $queryString, type: REPOSITORY, first: 5, after: $repositoryCursor) {
    repositoryCount
    pageInfo { endCursor hasNextPage }
    nodes {
      ... on Repository {
        name
        nameWithOwner
        url
        sshUrl
        dependencyGraphManifests {
          totalCount
          nodes {
            filename
            dependencies { nodes { packageManager packageName requirements } }
          }
        }
        packages(last: 1) {
          totalCount
          nodes { name latestVersion { files(last: 10) { nodes { name url } } } }
        }
        releases(last: 1) {
          nodes { url releaseAssets(last: 10) { nodes { name url } } }
        }
      }
    }
  }
}
"#;

/// Preview media types unlocking the dependency graph and packages APIs
const PREVIEW_MEDIA_TYPES: &str =
    "application/vnd.github.hawkgirl-preview+json, application/vnd.github.packages-preview+json";

#[derive(Debug, Deserialize)]
struct GraphQlResponse {
    data: Option<SearchData>,
    #[serde(default)]
    errors: Vec<GraphQlError>,
}

#[derive(Debug, Deserialize)]
struct GraphQlError {
    message: String,
}

#[derive(Debug, Deserialize)]
struct SearchData {
    search: RepositorySearch,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RepositorySearch {
    #[serde(default)]
    nodes: Vec<RepositoryNode>,
    page_info: PageInfo,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PageInfo {
    end_cursor: Option<String>,
    has_next_page: bool,
}

#[derive(Debug, Deserialize)]
struct Connection<T> {
    #[serde(default = "Vec::new")]
    nodes: Vec<T>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct RepositoryNode {
    name: String,
    name_with_owner: String,
    url: String,
    ssh_url: String,
    dependency_graph_manifests: Option<Connection<ManifestNode>>,
    packages: Option<Connection<PackageNode>>,
    releases: Option<Connection<ReleaseNode>>,
}

#[derive(Debug, Deserialize)]
struct ManifestNode {
    dependencies: Option<Connection<DependencyNode>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DependencyNode {
    package_manager: Option<String>,
    package_name: Option<String>,
    requirements: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PackageNode {
    latest_version: Option<PackageVersionNode>,
}

#[derive(Debug, Deserialize)]
struct PackageVersionNode {
    files: Connection<AssetNode>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ReleaseNode {
    release_assets: Connection<AssetNode>,
}

#[derive(Debug, Deserialize)]
struct AssetNode {
    name: String,
    url: String,
}

impl From<AssetNode> for Asset {
    fn from(node: AssetNode) -> Self {
        Asset::new(node.name, node.url)
    }
}

impl From<RepositoryNode> for Repository {
    fn from(node: RepositoryNode) -> Self {
        let dependencies = node
            .dependency_graph_manifests
            .into_iter()
            .flat_map(|manifests| manifests.nodes)
            .filter_map(|manifest| manifest.dependencies)
            .flat_map(|dependencies| dependencies.nodes)
            .map(|d| {
                Dependency::new(
                    d.package_manager.unwrap_or_default(),
                    d.package_name.unwrap_or_default(),
                    d.requirements.unwrap_or_default(),
                )
            })
            .collect();

        let release_assets = node
            .releases
            .and_then(|releases| releases.nodes.into_iter().last())
            .map(|release| release.release_assets.nodes.into_iter().map(Asset::from).collect());

        let package_files = node
            .packages
            .and_then(|packages| packages.nodes.into_iter().last())
            .and_then(|package| package.latest_version)
            .map(|version| version.files.nodes.into_iter().map(Asset::from).collect());

        Repository {
            name: node.name,
            name_with_owner: node.name_with_owner,
            url: node.url,
            ssh_url: node.ssh_url,
            dependencies,
            release_assets,
            package_files,
        }
    }
}

/// Decodes one page of the repository search.
fn parse_search_page(body: &str) -> Result<RepositorySearch> {
    let response: GraphQlResponse =
        serde_json::from_str(body).context("Failed to parse GitHub GraphQL response")?;

    if !response.errors.is_empty() {
        let messages: Vec<&str> = response.errors.iter().map(|e| e.message.as_str()).collect();
        anyhow::bail!("GitHub GraphQL query failed: {}", messages.join("; "));
    }

    response
        .data
        .map(|data| data.search)
        .context("GitHub GraphQL response carried no data")
}

/// GitHubClient adapter for the GitHub GraphQL and REST APIs
///
/// Repository search pages through the GraphQL `search` connection five
/// repositories at a time. A page that fails is retried; once more than
/// [`GitHubClient::MAX_QUERY_ERRORS`] failures have accumulated the search
/// gives up with every queued message.
pub struct GitHubClient {
    client: reqwest::Client,
    token: String,
    api_url: String,
    retry_delay: Duration,
}

impl GitHubClient {
    pub const API_URL: &'static str = "https://api.github.com";
    pub const MAX_QUERY_ERRORS: usize = 9;
    const TIMEOUT_SECONDS: u64 = 60;

    /// Creates a new GitHub client with default configuration
    pub fn new(token: &str) -> Result<Self> {
        let user_agent = format!("iq-scm-audit/{}", env!("CARGO_PKG_VERSION"));
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(Self::TIMEOUT_SECONDS))
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            token: token.to_string(),
            api_url: Self::API_URL.to_string(),
            retry_delay: Duration::from_millis(500),
        })
    }

    fn graphql_url(&self) -> String {
        format!("{}/graphql", self.api_url)
    }

    fn issues_url(&self, name_with_owner: &str) -> String {
        format!("{}/repos/{}/issues", self.api_url, name_with_owner)
    }

    async fn search_page(&self, query: &str, cursor: Option<&str>) -> Result<RepositorySearch> {
        let body = json!({
            "query": SEARCH_QUERY,
            "variables": {
                "queryString": query,
                "repositoryCursor": cursor,
            },
        });

        let response = self
            .client
            .post(self.graphql_url())
            .bearer_auth(&self.token)
            .header(ACCEPT, PREVIEW_MEDIA_TYPES)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            anyhow::bail!("GitHub GraphQL request failed with status {}: {}", status, text);
        }

        parse_search_page(&text)
    }
}

#[async_trait]
impl SourceHost for GitHubClient {
    async fn search_repositories(&self, query: &str) -> Result<Vec<Repository>> {
        let query = format!("{} fork:true", query);
        let mut cursor: Option<String> = None;
        let mut repositories = Vec::new();
        let mut errors: Vec<String> = Vec::new();

        loop {
            match self.search_page(&query, cursor.as_deref()).await {
                Ok(search) => {
                    repositories.extend(search.nodes.into_iter().map(Repository::from));
                    if !search.page_info.has_next_page {
                        break;
                    }
                    cursor = search.page_info.end_cursor;
                }
                Err(e) => {
                    errors.push(format!("{:#}", e));
                    if errors.len() > Self::MAX_QUERY_ERRORS {
                        return Err(AuditError::SourceHostQueryFailed { errors }.into());
                    }
                    tokio::time::sleep(self.retry_delay).await;
                }
            }
        }

        Ok(repositories)
    }

    async fn download(&self, url: &str) -> Result<Vec<u8>> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .with_context(|| format!("Failed to download {}", url))?;

        if !response.status().is_success() {
            anyhow::bail!("Download of {} failed with status {}", url, response.status());
        }

        Ok(response.bytes().await?.to_vec())
    }

    async fn create_issue(&self, name_with_owner: &str, title: &str, body: &str) -> Result<()> {
        let response = self
            .client
            .post(self.issues_url(name_with_owner))
            .bearer_auth(&self.token)
            .json(&json!({ "title": title, "body": body }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            anyhow::bail!(
                "Creating issue on {} failed with status {}: {}",
                name_with_owner,
                status,
                text
            );
        }
        Ok(())
    }
}
