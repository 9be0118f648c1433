use async_trait::async_trait;
use iq_scm_audit::prelude::*;
use std::sync::{Arc, Mutex};

/// An issue opened through [`MockSourceHost`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedIssue {
    pub name_with_owner: String,
    pub title: String,
    pub body: String,
}

/// Mock SourceHost serving a fixed repository list
#[derive(Default, Clone)]
pub struct MockSourceHost {
    pub repositories: Vec<Repository>,
    pub queries: Arc<Mutex<Vec<String>>>,
    pub downloads: Arc<Mutex<Vec<String>>>,
    pub issues: Arc<Mutex<Vec<CreatedIssue>>>,
}

impl MockSourceHost {
    pub fn new(repositories: Vec<Repository>) -> Self {
        Self {
            repositories,
            ..Default::default()
        }
    }

    pub fn created_issues(&self) -> Vec<CreatedIssue> {
        self.issues.lock().unwrap().clone()
    }

    pub fn downloaded_urls(&self) -> Vec<String> {
        self.downloads.lock().unwrap().clone()
    }
}

#[async_trait]
impl SourceHost for MockSourceHost {
    async fn search_repositories(&self, query: &str) -> Result<Vec<Repository>> {
        self.queries.lock().unwrap().push(query.to_string());
        Ok(self.repositories.clone())
    }

    async fn download(&self, url: &str) -> Result<Vec<u8>> {
        self.downloads.lock().unwrap().push(url.to_string());
        Ok(format!("content of {}", url).into_bytes())
    }

    async fn create_issue(&self, name_with_owner: &str, title: &str, body: &str) -> Result<()> {
        self.issues.lock().unwrap().push(CreatedIssue {
            name_with_owner: name_with_owner.to_string(),
            title: title.to_string(),
            body: body.to_string(),
        });
        Ok(())
    }
}
