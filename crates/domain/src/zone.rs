use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub const DEFAULT_ZONE_TTL: u32 = 3600;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Zone {
    pub id: i64,
    pub domain: Arc<str>,
    pub owner: Arc<str>,
    pub ttl: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Zone {
    pub fn new(id: i64, domain: Arc<str>, owner: Arc<str>, ttl: u32) -> Self {
        let now = Utc::now();
        Self {
            id,
            domain,
            owner,
            ttl,
            created_at: now,
            updated_at: now,
        }
    }

    /// SOA serial: the last-updated time in epoch seconds.
    pub fn serial(&self) -> i64 {
        self.updated_at.timestamp()
    }

    pub fn validate_domain(domain: &str) -> Result<(), String> {
        if domain.is_empty() {
            return Err("Zone domain cannot be empty".to_string());
        }
        if domain.len() > 253 {
            return Err("Zone domain cannot exceed 253 characters".to_string());
        }
        if domain.starts_with('.') || domain.contains("..") {
            return Err("Zone domain contains an empty label".to_string());
        }
        let valid = domain
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '.' || c == '_');
        if !valid {
            return Err(
                "Zone domain contains invalid characters (only alphanumeric, hyphens, dots and underscores are allowed)".to_string(),
            );
        }
        Ok(())
    }

    pub fn validate_ttl(ttl: u32) -> Result<(), String> {
        if ttl == 0 {
            return Err("Zone TTL must be a positive integer".to_string());
        }
        Ok(())
    }

    pub fn validate_owner(owner: &str) -> Result<(), String> {
        if owner.trim().is_empty() {
            return Err("Zone owner cannot be empty".to_string());
        }
        if owner.len() > 320 {
            return Err("Zone owner cannot exceed 320 characters".to_string());
        }
        Ok(())
    }
}
