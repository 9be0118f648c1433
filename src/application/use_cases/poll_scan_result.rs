use crate::onboarding::domain::ScanResult;
use crate::ports::outbound::GovernanceServer;
use crate::shared::error::AuditError;
use crate::shared::Result;
use std::time::Duration;

/// Failed parses tolerated before polling gives up
const DEFAULT_MAX_FAILURES: usize = 30;

/// Wait between two status fetches
const DEFAULT_INTERVAL: Duration = Duration::from_secs(1);

/// Retry budget of the scan-result poller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollPolicy {
    /// Polling stops once more than this many fetches failed to parse
    pub max_failures: usize,
    pub interval: Duration,
}

impl Default for PollPolicy {
    fn default() -> Self {
        Self {
            max_failures: DEFAULT_MAX_FAILURES,
            interval: DEFAULT_INTERVAL,
        }
    }
}

/// Waits for an asynchronous SBOM scan to finish.
///
/// A body that does not parse as a [`ScanResult`] counts as a failure, whether
/// the server answered "still processing" or something broken; the two cannot
/// be told apart. Failed bodies are kept in order and handed back in
/// [`AuditError::ScanRetriesExhausted`] when the budget runs out.
pub struct ScanResultPoller {
    policy: PollPolicy,
}

impl ScanResultPoller {
    pub fn new(policy: PollPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> PollPolicy {
        self.policy
    }

    /// Polls `status_url` until it yields a scan result.
    ///
    /// # Errors
    /// - [`AuditError::ScanRetriesExhausted`] after `max_failures + 1` unparseable bodies
    /// - any transport error of the status fetch, immediately
    pub async fn poll<GS>(&self, server: &GS, status_url: &str) -> Result<ScanResult>
    where
        GS: GovernanceServer + ?Sized,
    {
        let mut failures: Vec<String> = Vec::new();

        loop {
            let body = server.fetch_scan_status(status_url).await?;
            match serde_json::from_str::<ScanResult>(&body) {
                Ok(result) => return Ok(result),
                Err(_) => {
                    failures.push(body);
                    if failures.len() > self.policy.max_failures {
                        return Err(AuditError::ScanRetriesExhausted {
                            status_url: status_url.to_string(),
                            attempts: failures.len(),
                            responses: failures,
                        }
                        .into());
                    }
                }
            }

            tokio::time::sleep(self.policy.interval).await;
        }
    }
}

impl Default for ScanResultPoller {
    fn default() -> Self {
        Self::new(PollPolicy::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::onboarding::domain::{Application, Organization, ScanTicket};
    use crate::sbom_generation::domain::Sbom;
    use async_trait::async_trait;
    use std::sync::Mutex;
    use tokio::time::Instant;

    const VALID: &str =
        r#"{"policyAction":"Failure","reportHtmlUrl":"ui/links/report/1","isError":false}"#;

    /// Serves scripted status bodies; once the script runs out the last body repeats.
    struct ScriptedStatus {
        bodies: Vec<String>,
        fetches: Mutex<Vec<Instant>>,
        fail_transport: bool,
    }

    impl ScriptedStatus {
        fn new(bodies: Vec<&str>) -> Self {
            Self {
                bodies: bodies.into_iter().map(str::to_string).collect(),
                fetches: Mutex::new(Vec::new()),
                fail_transport: false,
            }
        }

        fn fetch_count(&self) -> usize {
            self.fetches.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl GovernanceServer for ScriptedStatus {
        async fn list_applications(&self) -> Result<Vec<Application>> {
            unimplemented!()
        }
        async fn get_or_create_organization(&self, _name: &str) -> Result<Organization> {
            unimplemented!()
        }
        async fn configure_organization_scm(&self, _id: &str, _token: &str) -> Result<()> {
            unimplemented!()
        }
        async fn get_or_create_application(
            &self,
            _organization_id: &str,
            _public_id: &str,
            _name: &str,
        ) -> Result<Application> {
            unimplemented!()
        }
        async fn configure_application_scm(&self, _id: &str, _url: &str) -> Result<()> {
            unimplemented!()
        }
        async fn submit_sbom(&self, _id: &str, _sbom: &Sbom) -> Result<ScanTicket> {
            unimplemented!()
        }

        async fn fetch_scan_status(&self, _status_url: &str) -> Result<String> {
            if self.fail_transport {
                anyhow::bail!("connection reset");
            }
            let mut fetches = self.fetches.lock().unwrap();
            fetches.push(Instant::now());
            let index = (fetches.len() - 1).min(self.bodies.len() - 1);
            Ok(self.bodies[index].clone())
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_returns_immediately_on_first_success() {
        let server = ScriptedStatus::new(vec![VALID]);
        let started = Instant::now();

        let result = ScanResultPoller::default()
            .poll(&server, "status/1")
            .await
            .unwrap();

        assert_eq!(result.policy_action, "Failure");
        assert_eq!(result.report_url, "ui/links/report/1");
        assert_eq!(server.fetch_count(), 1);
        assert_eq!(started.elapsed(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn test_succeeds_on_sixth_attempt_with_one_second_spacing() {
        let server = ScriptedStatus::new(vec![
            "Not Found",
            "<html>busy</html>",
            "",
            "{",
            r#"{"status":"processing"}"#,
            VALID,
        ]);

        let result = ScanResultPoller::default()
            .poll(&server, "status/1")
            .await
            .unwrap();

        assert_eq!(result.report_url, "ui/links/report/1");
        let fetches = server.fetches.lock().unwrap();
        assert_eq!(fetches.len(), 6);
        for pair in fetches.windows(2) {
            assert_eq!(pair[1] - pair[0], Duration::from_secs(1));
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_gives_up_after_thirty_one_attempts() {
        let server = ScriptedStatus::new(vec!["Scan pending"]);

        let err = ScanResultPoller::default()
            .poll(&server, "status/9")
            .await
            .unwrap_err();

        assert_eq!(server.fetch_count(), 31);
        match err.downcast_ref::<AuditError>() {
            Some(AuditError::ScanRetriesExhausted {
                status_url,
                attempts,
                responses,
            }) => {
                assert_eq!(status_url, "status/9");
                assert_eq!(*attempts, 31);
                assert_eq!(responses.len(), 31);
                assert!(responses.iter().all(|body| body == "Scan pending"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_queued_bodies_keep_order() {
        let server = ScriptedStatus::new(vec!["first", "second", "third"]);
        let poller = ScanResultPoller::new(PollPolicy {
            max_failures: 2,
            interval: Duration::from_millis(10),
        });

        let err = poller.poll(&server, "status").await.unwrap_err();
        let audit_error = err.downcast_ref::<AuditError>().unwrap();
        assert_eq!(audit_error.queued_messages(), ["first", "second", "third"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_transport_error_is_not_retried() {
        let mut server = ScriptedStatus::new(vec![VALID]);
        server.fail_transport = true;

        let err = ScanResultPoller::default()
            .poll(&server, "status")
            .await
            .unwrap_err();
        assert!(err.to_string().contains("connection reset"));
        assert!(err.downcast_ref::<AuditError>().is_none());
    }

    #[test]
    fn test_default_policy() {
        let policy = PollPolicy::default();
        assert_eq!(policy.max_failures, 30);
        assert_eq!(policy.interval, Duration::from_secs(1));
    }
}
