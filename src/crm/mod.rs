//! CRM client module for lead submission over HTTP

mod client;
mod payload;
mod traits;

pub use client::{CrmClient, CrmError, DEFAULT_SUBMIT_URL};
pub use payload::{Submission, SubmissionField, CONTACT_OBJECT_TYPE, PAGE_NAME};
pub use traits::CrmClientTrait;

#[cfg(test)]
pub use traits::MockCrmClientTrait;
