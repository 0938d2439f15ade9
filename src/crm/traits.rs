//! Trait abstraction for the CRM client to enable mocking in tests

use super::client::CrmError;
use super::payload::Submission;
use async_trait::async_trait;

/// Trait for CRM submission, enabling mocking in tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CrmClientTrait: Send + Sync {
    /// Submit a completed form. Succeeds only on HTTP 200.
    async fn submit(&self, submission: &Submission) -> Result<(), CrmError>;
}
