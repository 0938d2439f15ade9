//! HTTP client for the CRM form ingestion endpoint

use super::payload::Submission;
use super::traits::CrmClientTrait;
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::StatusCode;
use thiserror::Error;

/// Default ingestion URL (HubSpot Forms v3 integration submit)
pub const DEFAULT_SUBMIT_URL: &str = "https://api.hsforms.com/submissions/v3/integration/submit/6958578/21de475a-af2c-47c2-ae02-414aefdfdeb4";

/// Errors returned when a submission is not accepted
#[derive(Debug, Error)]
pub enum CrmError {
    #[error("failed to reach CRM endpoint: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("CRM endpoint rejected submission with status {status}")]
    Rejected { status: u16 },
}

/// Client for posting form submissions to the CRM
pub struct CrmClient {
    http: reqwest::Client,
    /// Ingestion endpoint URL
    submit_url: String,
}

impl CrmClient {
    /// Create a new CRM client for the given endpoint
    pub fn new(submit_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            submit_url: submit_url.into(),
        }
    }

    pub fn submit_url(&self) -> &str {
        &self.submit_url
    }
}

#[async_trait]
impl CrmClientTrait for CrmClient {
    async fn submit(&self, submission: &Submission) -> Result<(), CrmError> {
        tracing::debug!(
            url = %self.submit_url,
            fields = submission.fields.len(),
            "Submitting contact form"
        );

        let response = self
            .http
            .post(&self.submit_url)
            .header(CONTENT_TYPE, "application/json")
            .json(submission)
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(CrmError::Rejected {
                status: status.as_u16(),
            });
        }

        tracing::info!("Contact form accepted by CRM");
        Ok(())
    }
}
