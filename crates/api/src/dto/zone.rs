use serde::{Deserialize, Serialize};
use zonecast_domain::Zone;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZoneResponse {
    pub id: i64,
    pub domain: String,
    pub owner: String,
    pub ttl: u32,
    pub serial: i64,
    pub created_at: String,
    pub updated_at: String,
}

impl ZoneResponse {
    pub fn from_domain(zone: Zone) -> Self {
        Self {
            id: zone.id,
            domain: zone.domain.to_string(),
            owner: zone.owner.to_string(),
            ttl: zone.ttl,
            serial: zone.serial(),
            created_at: zone.created_at.to_rfc3339(),
            updated_at: zone.updated_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateZoneRequest {
    pub domain: String,
    pub owner: String,
    pub ttl: Option<u32>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ZoneQuery {
    pub owner: Option<String>,
}
