use crate::domain::content::SiteContent;
use crate::domain::model::LeadSubmission;
use crate::utils::error::SubmissionError;
use async_trait::async_trait;
use std::time::Duration;

/// Destination for lead submissions. One call to `send` is one outbound
/// request.
#[async_trait]
pub trait LeadSink: Send + Sync {
    async fn send(&self, lead: &LeadSubmission) -> std::result::Result<(), SubmissionError>;
}

pub trait ConfigProvider: Send + Sync {
    fn dashboard_url(&self) -> &str;
    fn request_timeout(&self) -> Duration;
}

/// Read-only access to the site's content.
pub trait ContentProvider: Send + Sync {
    fn content(&self) -> &SiteContent;
}
