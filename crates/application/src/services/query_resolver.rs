use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, instrument};
use zonecast_domain::{
    names, DomainError, QueryType, Record, ResourceRecord, SoaSettings, Zone,
    MAX_ANSWER_RECORDS,
};

use crate::ports::{ResourceRecordRepository, ZoneRepository};

/// Answer set computed for one query, before response-code derivation.
#[derive(Debug, Clone)]
pub struct Resolved {
    pub answer: Vec<Record>,
    /// Zone owning the records found for the queried name, or the zone
    /// whose apex is the queried name.
    pub governing_zone: Option<Zone>,
}

/// Decides what to answer for `(name, type)` against the Record Store.
///
/// Stateless: every call re-reads the store and issues a small, bounded
/// number of capped lookups.
pub struct QueryResolver {
    zones: Arc<dyn ZoneRepository>,
    records: Arc<dyn ResourceRecordRepository>,
    soa: SoaSettings,
}

impl QueryResolver {
    pub fn new(
        zones: Arc<dyn ZoneRepository>,
        records: Arc<dyn ResourceRecordRepository>,
        soa: SoaSettings,
    ) -> Self {
        Self {
            zones,
            records,
            soa,
        }
    }

    #[instrument(skip(self), fields(qtype = %query_type))]
    pub async fn resolve(&self, name: &str, query_type: &QueryType) -> Result<Resolved, DomainError> {
        let name = names::normalize(name);
        let candidates = self.candidates(name).await?;

        let mut zones = ZoneCache::default();
        zones.load(self.zones.as_ref(), &candidates).await?;
        let governing_zone = if candidates.is_empty() {
            // An apex without records of its own is still governed.
            self.zones.get_by_domain(name).await?
        } else {
            match self.enclosing_zone(name).await? {
                Some(zone) => Some(zone),
                None => zones.lowest(),
            }
        };

        let answer = match (query_type, &governing_zone) {
            (QueryType::Any, _) => zones.to_records(&candidates),
            (QueryType::Soa, Some(zone)) => {
                if name == zone.domain.as_ref() {
                    vec![self.soa.soa_record(zone)]
                } else {
                    vec![self.soa.soa_alias(zone, name)]
                }
            }
            (QueryType::Axfr, Some(zone)) => {
                if name == zone.domain.as_ref() {
                    self.transfer(zone).await?
                } else {
                    vec![self.soa.soa_alias(zone, name)]
                }
            }
            _ => {
                let matching: Vec<ResourceRecord> = candidates
                    .iter()
                    .filter(|r| r.record_type.eq_ignore_ascii_case(query_type.as_str()))
                    .cloned()
                    .collect();

                if matching.is_empty() && query_type.is_address() {
                    let cnames = self
                        .records
                        .find_by_name_and_type(name, "CNAME", MAX_ANSWER_RECORDS)
                        .await?;
                    zones.load(self.zones.as_ref(), &cnames).await?;
                    zones.to_records(&cnames)
                } else {
                    zones.to_records(&matching)
                }
            }
        };

        let answer: Vec<Record> = answer
            .into_iter()
            .map(|record| record.expand_wildcard(name))
            .collect();

        debug!(
            name = %name,
            candidates = candidates.len(),
            wildcard = candidates.first().is_some_and(|r| r.is_wildcard()),
            answers = answer.len(),
            governing_zone = ?governing_zone.as_ref().map(|z| z.domain.as_ref()),
            "Query resolved"
        );

        Ok(Resolved {
            answer,
            governing_zone,
        })
    }

    /// Exact-name records, or the single-level wildcard set when there are
    /// none at all, whatever their type.
    async fn candidates(&self, name: &str) -> Result<Vec<ResourceRecord>, DomainError> {
        let exact = self.records.find_by_name(name, MAX_ANSWER_RECORDS).await?;
        if !exact.is_empty() {
            return Ok(exact);
        }

        match names::wildcard_for(name) {
            Some(wildcard) => {
                self.records
                    .find_by_name(&wildcard, MAX_ANSWER_RECORDS)
                    .await
            }
            None => Ok(Vec::new()),
        }
    }

    /// The most specific registered zone at `name` or one of its ancestors.
    /// Which zone owns the stored records plays no part.
    async fn enclosing_zone(&self, name: &str) -> Result<Option<Zone>, DomainError> {
        for domain in names::lineage(name) {
            if let Some(zone) = self.zones.get_by_domain(domain).await? {
                return Ok(Some(zone));
            }
        }
        Ok(None)
    }

    /// Full zone transfer: the SOA first, then every record of the zone.
    async fn transfer(&self, zone: &Zone) -> Result<Vec<Record>, DomainError> {
        let members = self
            .records
            .find_by_zone(zone.id, MAX_ANSWER_RECORDS)
            .await?;

        let mut answer = Vec::with_capacity(members.len() + 1);
        answer.push(self.soa.soa_record(zone));
        answer.extend(members.iter().map(|r| Record::from_stored(r, zone.ttl)));
        Ok(answer)
    }
}

#[derive(Default)]
struct ZoneCache {
    zones: HashMap<i64, Zone>,
}

impl ZoneCache {
    async fn load(
        &mut self,
        repo: &dyn ZoneRepository,
        records: &[ResourceRecord],
    ) -> Result<(), DomainError> {
        for record in records {
            if self.zones.contains_key(&record.zone_id) {
                continue;
            }
            if let Some(zone) = repo.get_by_id(record.zone_id).await? {
                self.zones.insert(zone.id, zone);
            }
        }
        Ok(())
    }

    fn lowest(&self) -> Option<Zone> {
        self.zones.values().min_by_key(|z| z.id).cloned()
    }

    fn to_records(&self, records: &[ResourceRecord]) -> Vec<Record> {
        records
            .iter()
            .filter_map(|r| {
                self.zones
                    .get(&r.zone_id)
                    .map(|zone| Record::from_stored(r, zone.ttl))
            })
            .collect()
    }
}
