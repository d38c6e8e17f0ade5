use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::names;
use crate::QueryType;

/// Hands a domain's query traffic to another authoritative responder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Delegate {
    pub id: i64,
    pub domain: Arc<str>,
    pub base_url: Arc<str>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Delegate {
    /// Target of the redirect issued instead of answering locally:
    /// `<base_url>/IN/<name>/<type>`.
    pub fn redirect_url(&self, name: &str, query_type: &QueryType) -> String {
        format!(
            "{}/IN/{}/{}",
            self.base_url.trim_end_matches('/'),
            names::normalize(name),
            query_type.as_str()
        )
    }

    pub fn validate_base_url(base_url: &str) -> Result<(), String> {
        let rest = base_url
            .strip_prefix("https://")
            .or_else(|| base_url.strip_prefix("http://"))
            .ok_or_else(|| "Delegate base URL must start with http:// or https://".to_string())?;
        if rest.trim_end_matches('/').is_empty() {
            return Err("Delegate base URL has no host".to_string());
        }
        if base_url.chars().any(char::is_whitespace) {
            return Err("Delegate base URL cannot contain whitespace".to_string());
        }
        if base_url.len() > 2048 {
            return Err("Delegate base URL cannot exceed 2048 characters".to_string());
        }
        Ok(())
    }
}
