use std::sync::Arc;
use std::time::Instant;
use tracing::{info, instrument};
use zonecast_domain::{names, DomainError, QueryType, Resolution};

use crate::services::{DelegationService, QueryResolver, ResponseAssembler};

/// Entry point of the query interface: delegation check, then local
/// resolution and response assembly.
pub struct ResolveQueryUseCase {
    delegation: Arc<DelegationService>,
    resolver: Arc<QueryResolver>,
    assembler: Arc<ResponseAssembler>,
}

impl ResolveQueryUseCase {
    pub fn new(
        delegation: Arc<DelegationService>,
        resolver: Arc<QueryResolver>,
        assembler: Arc<ResponseAssembler>,
    ) -> Self {
        Self {
            delegation,
            resolver,
            assembler,
        }
    }

    #[instrument(skip(self), fields(qtype = %query_type))]
    pub async fn execute(
        &self,
        name: &str,
        query_type: &QueryType,
    ) -> Result<Resolution, DomainError> {
        let start = Instant::now();
        let name = names::normalize(name);
        if name.is_empty() {
            return Err(DomainError::InvalidDomainName(
                "Query name cannot be empty".to_string(),
            ));
        }

        // Single hop: the delegate is trusted to answer authoritatively.
        if let Some(delegate) = self.delegation.find_for(name).await? {
            let location = delegate.redirect_url(name, query_type);
            info!(
                name = %name,
                delegate = %delegate.domain,
                location = %location,
                "Query delegated"
            );
            return Ok(Resolution::Redirect { location });
        }

        let resolved = self.resolver.resolve(name, query_type).await?;
        let message = self.assembler.assemble(name, resolved).await?;

        info!(
            name = %name,
            rcode = %message.rcode(),
            answers = message.answer.len(),
            elapsed_us = start.elapsed().as_micros() as u64,
            "Query answered"
        );

        Ok(Resolution::Answer(message))
    }
}
