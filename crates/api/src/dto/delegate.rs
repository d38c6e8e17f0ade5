use serde::{Deserialize, Serialize};
use zonecast_domain::Delegate;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DelegateResponse {
    pub id: i64,
    pub domain: String,
    pub base_url: String,
    pub created_at: String,
    pub updated_at: String,
}

impl DelegateResponse {
    pub fn from_domain(delegate: Delegate) -> Self {
        Self {
            id: delegate.id,
            domain: delegate.domain.to_string(),
            base_url: delegate.base_url.to_string(),
            created_at: delegate.created_at.to_rfc3339(),
            updated_at: delegate.updated_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateDelegateRequest {
    pub domain: String,
    pub base_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateDelegateRequest {
    pub domain: Option<String>,
    pub base_url: Option<String>,
}
