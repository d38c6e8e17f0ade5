#![allow(dead_code)]
use chrono::{TimeZone, Utc};
use std::sync::Arc;
use zonecast_domain::{ResourceRecord, Zone};

pub struct ZoneBuilder {
    id: i64,
    domain: Arc<str>,
    owner: Arc<str>,
    ttl: u32,
    updated_epoch: i64,
}

impl ZoneBuilder {
    pub fn new() -> Self {
        Self {
            id: 1,
            domain: "example.com".into(),
            owner: "alice@example.com".into(),
            ttl: 3600,
            updated_epoch: 1_700_000_000,
        }
    }

    pub fn id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    pub fn domain(mut self, domain: &str) -> Self {
        self.domain = domain.into();
        self
    }

    pub fn ttl(mut self, ttl: u32) -> Self {
        self.ttl = ttl;
        self
    }

    pub fn updated_epoch(mut self, secs: i64) -> Self {
        self.updated_epoch = secs;
        self
    }

    pub fn build(self) -> Zone {
        let mut zone = Zone::new(self.id, self.domain, self.owner, self.ttl);
        zone.updated_at = Utc.timestamp_opt(self.updated_epoch, 0).unwrap();
        zone
    }
}

pub struct RecordBuilder {
    id: i64,
    zone_id: i64,
    name: Arc<str>,
    record_type: Arc<str>,
    ttl: Option<u32>,
    data: Arc<str>,
}

impl RecordBuilder {
    pub fn new() -> Self {
        Self {
            id: 1,
            zone_id: 1,
            name: "www.example.com".into(),
            record_type: "A".into(),
            ttl: None,
            data: "1.2.3.4".into(),
        }
    }

    pub fn id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    pub fn name(mut self, name: &str) -> Self {
        self.name = name.into();
        self
    }

    pub fn record_type(mut self, record_type: &str) -> Self {
        self.record_type = record_type.into();
        self
    }

    pub fn ttl(mut self, ttl: u32) -> Self {
        self.ttl = Some(ttl);
        self
    }

    pub fn data(mut self, data: &str) -> Self {
        self.data = data.into();
        self
    }

    pub fn build(self) -> ResourceRecord {
        let now = Utc::now();
        ResourceRecord {
            id: self.id,
            zone_id: self.zone_id,
            name: self.name,
            record_type: self.record_type,
            ttl: self.ttl,
            data: self.data,
            created_at: now,
            updated_at: now,
        }
    }
}
