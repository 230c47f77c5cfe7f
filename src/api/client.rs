use anyhow::{Result, anyhow};
use reqwest::blocking::Client;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::domain::dashboard::DashboardData;

pub const DASHBOARD_PATH: &str = "/api/v1/analysis/dashboard";
pub const HEALTH_PATH: &str = "/health";

/// Deadline for `health` and `service_info`. The dashboard fetch has none.
pub const HEALTH_TIMEOUT: Duration = Duration::from_secs(5);

/// `GET /health`
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct HealthStatus {
    pub status: String,
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}

/// `GET /` banner of the analysis service.
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ServiceInfo {
    pub message: String,
    pub version: String,
    pub status: String,
    pub docs: String,
}

/// Blocking client for the email analysis API.
#[derive(Debug, Clone)]
pub struct DashboardClient {
    http: Client,
    base_url: String,
    health_timeout: Duration,
}

impl DashboardClient {
    /// `base_url` is the scheme+host(+port) of the API; a trailing `/` is ignored.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        // The dashboard request has no deadline; reqwest's blocking default is 30s.
        let http = Client::builder()
            .timeout(None::<Duration>)
            .user_agent(concat!("mail_insights/", env!("CARGO_PKG_VERSION")))
            .build()?;

        let base_url: String = base_url.into();
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            health_timeout: HEALTH_TIMEOUT,
        })
    }

    #[must_use]
    pub fn with_health_timeout(mut self, timeout: Duration) -> Self {
        self.health_timeout = timeout;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn dashboard_url(&self) -> String {
        format!("{}{}", self.base_url, DASHBOARD_PATH)
    }

    /// Fetch stats and classified emails in one request.
    pub fn fetch_dashboard(&self) -> Result<DashboardData> {
        self.get_json(DASHBOARD_PATH, None)
    }

    pub fn health(&self) -> Result<HealthStatus> {
        self.get_json(HEALTH_PATH, Some(self.health_timeout))
    }

    pub fn service_info(&self) -> Result<ServiceInfo> {
        self.get_json("/", Some(self.health_timeout))
    }

    /// `health`, but a reachable service that is not `healthy` is an error too.
    pub fn check_health(&self) -> Result<HealthStatus> {
        let health = self
            .health()
            .map_err(|e| anyhow!("Health check against {} failed: {e}", self.base_url))?;
        if !health.is_healthy() {
            return Err(anyhow!(
                "{} reports status '{}'",
                self.base_url,
                health.status
            ));
        }
        Ok(health)
    }

    fn get_json<T: DeserializeOwned>(&self, path: &str, timeout: Option<Duration>) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        log::debug!("GET {url}");

        let mut req = self.http.get(&url);
        if let Some(t) = timeout {
            req = req.timeout(t);
        }
        let resp = req
            .send()
            .map_err(|e| anyhow!("Request to {url} failed: {e}"))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(anyhow!("{url} returned {status}"));
        }

        resp.json::<T>()
            .map_err(|e| anyhow!("Failed to parse response from {url}: {e}"))
    }
}


#[cfg(test)]
mod tests {
    use super::test_server::{dead_url, serve};
    use super::*;
    use std::net::TcpListener;
    use std::time::Instant;

    const PAYLOAD: &str = r#"{
        "stats": {"totalEmails": 42, "priorityEmails": 7, "actionRequired": 3,
                  "meetings": 2, "timeSaved": 6},
        "emails": [
            {"priority":"High","category":"Work","subject":"Contract",
             "from":"legal@example.com","summary":"Review clause 4","date":"Tue"}
        ]
    }"#;

    #[test]
    fn fetches_dashboard() {
        let base = serve(vec![(DASHBOARD_PATH, 200, PAYLOAD.to_string())], 1);
        let client = DashboardClient::new(format!("{base}/")).unwrap();

        let data = client.fetch_dashboard().unwrap();
        assert_eq!(data.stats.total_emails, 42);
        assert_eq!(data.stats.time_saved, 6);
        assert_eq!(data.emails[0].sender, "legal@example.com");
    }

    #[test]
    fn non_success_status_is_an_error() {
        let base = serve(vec![(DASHBOARD_PATH, 500, "{}".to_string())], 1);
        let client = DashboardClient::new(base).unwrap();

        let err = client.fetch_dashboard().unwrap_err();
        assert!(err.to_string().contains("500"));
    }

    #[test]
    fn malformed_body_is_an_error() {
        let base = serve(vec![(DASHBOARD_PATH, 200, "<html>".to_string())], 1);
        let client = DashboardClient::new(base).unwrap();

        let err = client.fetch_dashboard().unwrap_err();
        assert!(err.to_string().contains("parse"));
    }

    #[test]
    fn unreachable_server_is_an_error() {
        let client = DashboardClient::new(dead_url()).unwrap();
        assert!(client.fetch_dashboard().is_err());
    }

    #[test]
    fn reads_health_and_banner() {
        let base = serve(
            vec![
                (HEALTH_PATH, 200, r#"{"status":"healthy"}"#.to_string()),
                (
                    "/",
                    200,
                    r#"{"message":"Email Intelligence API","version":"1.0.0","status":"running","docs":"/docs"}"#
                        .to_string(),
                ),
            ],
            2,
        );
        let client = DashboardClient::new(base).unwrap();

        assert!(client.health().unwrap().is_healthy());
        let info = client.service_info().unwrap();
        assert_eq!(info.version, "1.0.0");
        assert_eq!(info.docs, "/docs");
    }

    #[test]
    fn check_health_accepts_healthy_service() {
        let base = serve(
            vec![(HEALTH_PATH, 200, r#"{"status":"healthy"}"#.to_string())],
            1,
        );
        let client = DashboardClient::new(base).unwrap();
        assert_eq!(client.check_health().unwrap().status, "healthy");
    }

    #[test]
    fn check_health_rejects_unhealthy_status() {
        let base = serve(
            vec![(HEALTH_PATH, 200, r#"{"status":"unhealthy"}"#.to_string())],
            2,
        );
        let client = DashboardClient::new(base).unwrap();

        assert!(!client.health().unwrap().is_healthy());
        let err = client.check_health().unwrap_err();
        assert!(err.to_string().contains("unhealthy"));
    }

    #[test]
    fn check_health_reports_error_status_as_failed() {
        let base = serve(
            vec![(HEALTH_PATH, 503, r#"{"status":"starting"}"#.to_string())],
            1,
        );
        let client = DashboardClient::new(base).unwrap();

        let err = client.check_health().unwrap_err().to_string();
        assert!(err.contains("Health check against"), "{err}");
        assert!(err.contains("503"), "{err}");
        assert!(!err.contains("unreachable"), "{err}");
    }

    #[test]
    fn health_gives_up_on_silent_server() {
        // accepts connections (kernel backlog) but never answers
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        let client = DashboardClient::new(format!("http://127.0.0.1:{port}"))
            .unwrap()
            .with_health_timeout(Duration::from_millis(200));

        let started = Instant::now();
        assert!(client.check_health().is_err());
        assert!(started.elapsed() < Duration::from_secs(5));
        drop(listener);
    }

    #[test]
    fn builds_dashboard_url() {
        let client = DashboardClient::new("http://api.local:8000//").unwrap();
        assert_eq!(
            client.dashboard_url(),
            "http://api.local:8000/api/v1/analysis/dashboard"
        );
    }
}
