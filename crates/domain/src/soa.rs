//! Synthetic SOA records. Nothing here is ever stored.

use std::sync::Arc;

use crate::names;
use crate::{Record, RecordSource, Zone};

/// TTL of the alias handed out for SOA/AXFR queries below the apex.
pub const SOA_ALIAS_TTL: u32 = 1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoaSettings {
    pub primary_ns: String,
    pub hostmaster: String,
    pub refresh: u32,
    pub retry: u32,
    pub expire: u32,
    pub minimum: u32,
}

impl Default for SoaSettings {
    fn default() -> Self {
        Self {
            primary_ns: "ns1.zonecast.local".to_string(),
            hostmaster: "hostmaster@zonecast.local".to_string(),
            refresh: 3600,
            retry: 600,
            expire: 86400,
            minimum: 3600,
        }
    }
}

impl SoaSettings {
    /// The apex SOA of `zone`. The serial tracks the zone's last update.
    pub fn soa_record(&self, zone: &Zone) -> Record {
        Record {
            name: Arc::clone(&zone.domain),
            record_type: Arc::from("SOA"),
            rdata: Arc::from(self.rdata(zone.serial()).as_str()),
            ttl: zone.ttl,
            source: RecordSource::Soa { zone_id: zone.id },
        }
    }

    /// A CNAME-shaped pointer from a sub-name to the zone apex, signalling
    /// where authority lives without claiming an SOA for the sub-name.
    pub fn soa_alias(&self, zone: &Zone, queried: &str) -> Record {
        Record {
            name: Arc::from(names::normalize(queried)),
            record_type: Arc::from("CNAME"),
            rdata: Arc::from(names::fqdn(&zone.domain).as_str()),
            ttl: SOA_ALIAS_TTL,
            source: RecordSource::SoaAlias { zone_id: zone.id },
        }
    }

    fn rdata(&self, serial: i64) -> String {
        format!(
            "{} {} {} {} {} {} {}",
            names::fqdn(&self.primary_ns),
            names::fqdn(&self.hostmaster.replace('@', ".")),
            serial,
            self.refresh,
            self.retry,
            self.expire,
            self.minimum
        )
    }
}
