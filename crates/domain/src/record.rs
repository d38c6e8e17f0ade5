use std::sync::Arc;

use crate::names;
use crate::ResourceRecord;

pub const CLASS_IN: &str = "IN";

/// Where an answer record came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordSource {
    Stored { id: i64, zone_id: i64 },
    Soa { zone_id: i64 },
    SoaAlias { zone_id: i64 },
}

/// A record as it appears in a response section.
///
/// Stored and synthesized records share this one shape; `source` tells them
/// apart without type-testing at use sites. `name` is kept without the
/// trailing dot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub name: Arc<str>,
    pub record_type: Arc<str>,
    pub rdata: Arc<str>,
    pub ttl: u32,
    pub source: RecordSource,
}

impl Record {
    pub fn from_stored(record: &ResourceRecord, zone_ttl: u32) -> Self {
        Self {
            name: Arc::clone(&record.name),
            record_type: Arc::from(record.record_type.to_ascii_uppercase().as_str()),
            rdata: Arc::clone(&record.data),
            ttl: record.effective_ttl(zone_ttl),
            source: RecordSource::Stored {
                id: record.id,
                zone_id: record.zone_id,
            },
        }
    }

    pub fn fqdn(&self) -> String {
        names::fqdn(&self.name)
    }

    pub fn class(&self) -> &'static str {
        CLASS_IN
    }

    pub fn is_wildcard(&self) -> bool {
        self.name.contains('*')
    }

    /// Answer-time wildcard expansion: the record is presented under the
    /// queried name. Non-wildcard records are returned untouched.
    pub fn expand_wildcard(self, queried: &str) -> Self {
        if self.is_wildcard() {
            Self {
                name: Arc::from(names::normalize(queried)),
                ..self
            }
        } else {
            self
        }
    }
}
