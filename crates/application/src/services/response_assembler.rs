use std::sync::Arc;
use tracing::{debug, instrument};
use zonecast_domain::{names, DomainError, Message, ResponseCode, SoaSettings, Zone};

use super::query_resolver::Resolved;
use crate::ports::ZoneRepository;

/// Turns a resolver result into a response message and its rcode.
pub struct ResponseAssembler {
    zones: Arc<dyn ZoneRepository>,
    soa: SoaSettings,
}

impl ResponseAssembler {
    pub fn new(zones: Arc<dyn ZoneRepository>, soa: SoaSettings) -> Self {
        Self { zones, soa }
    }

    #[instrument(skip(self, resolved), fields(answers = resolved.answer.len()))]
    pub async fn assemble(&self, name: &str, resolved: Resolved) -> Result<Message, DomainError> {
        if !resolved.answer.is_empty() {
            return Ok(Message::new(ResponseCode::NoError).with_answer(resolved.answer));
        }

        // Name exists but holds nothing of the requested type.
        if let Some(zone) = resolved.governing_zone {
            return Ok(Message::new(ResponseCode::NoError)
                .with_authority(vec![self.soa.soa_record(&zone)]));
        }

        match self.authoritative_zone(name).await? {
            Some(zone) => {
                debug!(zone = %zone.domain, "Name does not exist in zone");
                Ok(Message::new(ResponseCode::NxDomain)
                    .with_authority(vec![self.soa.soa_record(&zone)]))
            }
            None => {
                debug!("No zone registered for name or its second-level parent");
                Ok(Message::new(ResponseCode::Refused))
            }
        }
    }

    /// A zone registered for `name` itself or for its last two labels.
    async fn authoritative_zone(&self, name: &str) -> Result<Option<Zone>, DomainError> {
        let name = names::normalize(name);
        if let Some(zone) = self.zones.get_by_domain(name).await? {
            return Ok(Some(zone));
        }

        let parent = names::second_level(name);
        if parent == name {
            return Ok(None);
        }
        self.zones.get_by_domain(parent).await
    }
}
