//! Configuration handling for the TUI

use crate::crm::DEFAULT_SUBMIT_URL;
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Page URI reported when none is configured
pub const DEFAULT_PAGE_URI: &str = "https://posthog.com/contact-sales";

/// Community link shown on the confirmation view
pub const DEFAULT_COMMUNITY_URL: &str = "https://posthog.com/slack";

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ContactConfig {
    /// CRM ingestion endpoint
    pub submit_url: Option<String>,
    /// Page URI sent with the submission
    pub page_uri: Option<String>,
    /// Link shown after a successful submission
    pub community_url: Option<String>,
    /// Play the confetti animation on success
    pub confetti: Option<bool>,
}

impl ContactConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "posthog", "contact-sales-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file, then apply environment overrides
    pub fn load() -> Result<Self> {
        let mut config = match Self::config_path() {
            Some(path) if path.exists() => {
                let content = fs::read_to_string(&path)?;
                tracing::debug!("Loaded config from {}", path.display());
                serde_json::from_str(&content)?
            }
            _ => Self::default(),
        };

        config.apply_env(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Override values from environment variables
    fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(url) = lookup("CONTACT_SALES_SUBMIT_URL") {
            self.submit_url = Some(url);
        }
        if let Some(uri) = lookup("CONTACT_SALES_PAGE_URI") {
            self.page_uri = Some(uri);
        }
    }

    pub fn submit_url(&self) -> &str {
        self.submit_url.as_deref().unwrap_or(DEFAULT_SUBMIT_URL)
    }

    pub fn page_uri(&self) -> &str {
        self.page_uri.as_deref().unwrap_or(DEFAULT_PAGE_URI)
    }

    pub fn community_url(&self) -> &str {
        self.community_url.as_deref().unwrap_or(DEFAULT_COMMUNITY_URL)
    }

    pub fn confetti_enabled(&self) -> bool {
        self.confetti.unwrap_or(true)
    }
}
