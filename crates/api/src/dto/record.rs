use serde::{Deserialize, Serialize};
use zonecast_domain::ResourceRecord;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordResponse {
    pub id: i64,
    pub zone_id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub record_type: String,
    /// Absent when the zone TTL applies.
    pub ttl: Option<u32>,
    pub data: String,
    pub created_at: String,
    pub updated_at: String,
}

impl RecordResponse {
    pub fn from_domain(record: ResourceRecord) -> Self {
        Self {
            id: record.id,
            zone_id: record.zone_id,
            name: record.name.to_string(),
            record_type: record.record_type.to_string(),
            ttl: record.ttl,
            data: record.data.to_string(),
            created_at: record.created_at.to_rfc3339(),
            updated_at: record.updated_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateRecordRequest {
    pub name: String,
    #[serde(rename = "type")]
    pub record_type: String,
    pub ttl: Option<u32>,
    pub data: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateRecordRequest {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub record_type: Option<String>,
    pub ttl: Option<u32>,
    pub data: Option<String>,
}
