use crate::domain::model::LeadSubmission;
use crate::domain::ports::{ConfigProvider, LeadSink};
use crate::utils::error::{Result, SubmissionError};
use async_trait::async_trait;
use reqwest::Client;

pub const LEADS_PATH: &str = "/api/leads";

/// Posts leads to the dashboard service.
#[derive(Debug, Clone)]
pub struct DashboardClient {
    client: Client,
    leads_url: String,
}

impl DashboardClient {
    pub fn new<C: ConfigProvider + ?Sized>(config: &C) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout())
            .build()?;

        Ok(Self {
            client,
            leads_url: format!("{}{}", config.dashboard_url().trim_end_matches('/'), LEADS_PATH),
        })
    }

    pub fn leads_url(&self) -> &str {
        &self.leads_url
    }
}

#[async_trait]
impl LeadSink for DashboardClient {
    async fn send(&self, lead: &LeadSubmission) -> std::result::Result<(), SubmissionError> {
        tracing::debug!("Posting lead to: {}", self.leads_url);

        let response = self
            .client
            .post(&self.leads_url)
            .json(lead)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    tracing::warn!("Lead submission timed out: {}", e);
                } else {
                    tracing::warn!("Lead submission failed to reach dashboard: {}", e);
                }
                SubmissionError::unreachable()
            })?;

        let status = response.status();
        tracing::debug!("Dashboard response status: {}", status);

        let body = response.text().await.map_err(|e| {
            tracing::warn!("Failed to read dashboard response body: {}", e);
            SubmissionError::unreachable()
        })?;

        // The body is parsed whatever the status; an error response may
        // still carry a message. A body that is not JSON means the response
        // did not come from the dashboard API.
        let Ok(parsed) = serde_json::from_str::<serde_json::Value>(&body) else {
            tracing::warn!("Dashboard returned a non-JSON body ({})", status);
            return Err(SubmissionError::unreachable());
        };

        if !status.is_success() {
            let server_message = parsed.get("error").and_then(|v| v.as_str());
            tracing::warn!(
                "Dashboard rejected lead ({}): {}",
                status,
                server_message.unwrap_or("<no message>")
            );
            return Err(SubmissionError::rejected(server_message));
        }

        tracing::info!("Lead accepted for subdomain '{}'", lead.subdomain);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::{GENERIC_FAILURE_MESSAGE, REJECTED_FALLBACK_MESSAGE};
    use httpmock::prelude::*;
    use std::time::Duration;

    struct MockConfig {
        dashboard_url: String,
        timeout: Duration,
    }

    impl MockConfig {
        fn new(dashboard_url: String) -> Self {
            Self {
                dashboard_url,
                timeout: Duration::from_secs(5),
            }
        }
    }

    impl ConfigProvider for MockConfig {
        fn dashboard_url(&self) -> &str {
            &self.dashboard_url
        }

        fn request_timeout(&self) -> Duration {
            self.timeout
        }
    }

    fn sample_lead() -> LeadSubmission {
        LeadSubmission {
            name: "Jane Doe".to_string(),
            email: "jane@acme.com".to_string(),
            phone: "555-0100".to_string(),
            service: "lawn-care".to_string(),
            message: "Front yard please".to_string(),
            subdomain: "acme".to_string(),
        }
    }

    #[test]
    fn test_leads_url_trims_trailing_slash() {
        let client = DashboardClient::new(&MockConfig::new("https://dash.example.com/".to_string()))
            .unwrap();
        assert_eq!(client.leads_url(), "https://dash.example.com/api/leads");
    }

    #[tokio::test]
    async fn test_send_posts_json_body() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(POST)
                .path("/api/leads")
                .header("content-type", "application/json")
                .json_body(serde_json::json!({
                    "name": "Jane Doe",
                    "email": "jane@acme.com",
                    "phone": "555-0100",
                    "service": "lawn-care",
                    "message": "Front yard please",
                    "subdomain": "acme"
                }));
            then.status(201)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({"id": "lead_1", "status": "created"}));
        });

        let client = DashboardClient::new(&MockConfig::new(server.base_url())).unwrap();
        let result = client.send(&sample_lead()).await;

        api_mock.assert();
        assert_eq!(result, Ok(()));
    }

    #[tokio::test]
    async fn test_send_rejected_uses_server_error_text() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(POST).path("/api/leads");
            then.status(409)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({"error": "Duplicate lead"}));
        });

        let client = DashboardClient::new(&MockConfig::new(server.base_url())).unwrap();
        let err = client.send(&sample_lead()).await.unwrap_err();

        api_mock.assert();
        assert_eq!(
            err,
            SubmissionError::Rejected {
                message: "Duplicate lead".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_send_rejected_json_without_error_uses_fallback() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(POST).path("/api/leads");
            then.status(422)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({"error": ""}));
        });

        let client = DashboardClient::new(&MockConfig::new(server.base_url())).unwrap();
        let err = client.send(&sample_lead()).await.unwrap_err();

        api_mock.assert();
        assert_eq!(err.message(), REJECTED_FALLBACK_MESSAGE);
        assert!(matches!(err, SubmissionError::Rejected { .. }));
    }

    #[tokio::test]
    async fn test_send_html_error_page_is_unreachable() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(POST).path("/api/leads");
            then.status(502).body("<html>Bad Gateway</html>");
        });

        let client = DashboardClient::new(&MockConfig::new(server.base_url())).unwrap();
        let err = client.send(&sample_lead()).await.unwrap_err();

        api_mock.assert();
        assert_eq!(err, SubmissionError::unreachable());
        assert_eq!(err.message(), GENERIC_FAILURE_MESSAGE);
    }

    #[tokio::test]
    async fn test_send_empty_error_body_is_unreachable() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(POST).path("/api/leads");
            then.status(500);
        });

        let client = DashboardClient::new(&MockConfig::new(server.base_url())).unwrap();
        let err = client.send(&sample_lead()).await.unwrap_err();

        api_mock.assert();
        assert!(matches!(err, SubmissionError::Unreachable { .. }));
    }

    #[tokio::test]
    async fn test_send_malformed_success_body_is_unreachable() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(POST).path("/api/leads");
            then.status(200).body("<html>ok</html>");
        });

        let client = DashboardClient::new(&MockConfig::new(server.base_url())).unwrap();
        let err = client.send(&sample_lead()).await.unwrap_err();

        api_mock.assert();
        assert_eq!(err, SubmissionError::unreachable());
    }

    #[tokio::test]
    async fn test_send_timeout_is_unreachable() {
        let server = MockServer::start();
        let _slow_mock = server.mock(|when, then| {
            when.method(POST).path("/api/leads");
            then.status(200)
                .delay(Duration::from_millis(1500))
                .json_body(serde_json::json!({"ok": true}));
        });

        let mut config = MockConfig::new(server.base_url());
        config.timeout = Duration::from_millis(200);
        let client = DashboardClient::new(&config).unwrap();
        let err = client.send(&sample_lead()).await.unwrap_err();

        assert_eq!(err.message(), GENERIC_FAILURE_MESSAGE);
    }
}
