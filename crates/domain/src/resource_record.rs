use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A stored, user-managed record. `name` is fully qualified without the
/// trailing dot and `record_type` is upper case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceRecord {
    pub id: i64,
    pub zone_id: i64,
    pub name: Arc<str>,
    pub record_type: Arc<str>,
    pub ttl: Option<u32>,
    pub data: Arc<str>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ResourceRecord {
    pub fn is_wildcard(&self) -> bool {
        self.name.contains('*')
    }

    /// Effective TTL, falling back to the owning zone's default.
    pub fn effective_ttl(&self, zone_ttl: u32) -> u32 {
        self.ttl.unwrap_or(zone_ttl)
    }

    pub fn validate_name(name: &str) -> Result<(), String> {
        if name.is_empty() {
            return Err("Record name cannot be empty".to_string());
        }
        if name.len() > 253 {
            return Err("Record name cannot exceed 253 characters".to_string());
        }
        let valid = name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '.' || c == '_' || c == '*');
        if !valid {
            return Err(
                "Record name contains invalid characters (only alphanumeric, hyphens, dots, underscores and wildcards are allowed)".to_string(),
            );
        }
        Ok(())
    }

    pub fn validate_type(record_type: &str) -> Result<(), String> {
        if record_type.is_empty() {
            return Err("Record type cannot be empty".to_string());
        }
        if record_type.len() > 16 {
            return Err("Record type cannot exceed 16 characters".to_string());
        }
        if !record_type
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-')
        {
            return Err("Record type must be alphanumeric".to_string());
        }
        match record_type.to_ascii_uppercase().as_str() {
            "SOA" | "AXFR" | "ANY" => Err(format!(
                "Record type {} is synthesized and cannot be stored",
                record_type.to_ascii_uppercase()
            )),
            _ => Ok(()),
        }
    }

    pub fn validate_data(data: &str) -> Result<(), String> {
        if data.trim().is_empty() {
            return Err("Record data cannot be empty".to_string());
        }
        if data.len() > 4096 {
            return Err("Record data cannot exceed 4096 characters".to_string());
        }
        Ok(())
    }

    pub fn validate_ttl(ttl: Option<u32>) -> Result<(), String> {
        match ttl {
            Some(0) => Err("Record TTL must be a positive integer".to_string()),
            _ => Ok(()),
        }
    }
}
