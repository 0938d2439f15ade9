//! Submission payload sent to the CRM ingestion endpoint

use serde::Serialize;
use serde_json::Value;

/// Page name reported with every submission
pub const PAGE_NAME: &str = "Contact sales";

/// CRM object type for contacts
pub const CONTACT_OBJECT_TYPE: &str = "0-1";

/// One field entry of a submission
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionField {
    pub object_type_id: &'static str,
    pub name: &'static str,
    /// Omitted when the field was never filled in
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
}

/// Read-only snapshot of the form built at submit time
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub page_uri: String,
    pub page_name: String,
    pub fields: Vec<SubmissionField>,
}
