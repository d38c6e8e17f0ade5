#![allow(dead_code)]
use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use std::sync::Arc;
use tokio::sync::RwLock;
use zonecast_application::ports::{DelegateRepository, ResourceRecordRepository, ZoneRepository};
use zonecast_domain::{Delegate, DomainError, ResourceRecord, Zone};

fn next_serial_time(previous: DateTime<Utc>) -> DateTime<Utc> {
    let now = Utc::now();
    let floor = previous + Duration::seconds(1);
    if now > floor {
        now
    } else {
        floor
    }
}

// ── MockZoneRepository ────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct MockZoneRepository {
    zones: Arc<RwLock<Vec<Zone>>>,
    next_id: Arc<RwLock<i64>>,
    should_fail: Arc<RwLock<bool>>,
}

impl MockZoneRepository {
    pub fn new() -> Self {
        Self {
            zones: Arc::new(RwLock::new(Vec::new())),
            next_id: Arc::new(RwLock::new(1)),
            should_fail: Arc::new(RwLock::new(false)),
        }
    }

    pub async fn set_should_fail(&self, should_fail: bool) {
        *self.should_fail.write().await = should_fail;
    }

    pub async fn count(&self) -> usize {
        self.zones.read().await.len()
    }

    /// Inserts a zone directly, bypassing validation.
    pub async fn add(&self, domain: &str) -> Zone {
        self.create(domain.to_string(), "alice@example.com".to_string(), 3600)
            .await
            .unwrap()
    }

    pub async fn touch(&self, zone_id: i64) {
        let mut zones = self.zones.write().await;
        if let Some(zone) = zones.iter_mut().find(|z| z.id == zone_id) {
            zone.updated_at = next_serial_time(zone.updated_at);
        }
    }

    async fn check(&self) -> Result<(), DomainError> {
        if *self.should_fail.read().await {
            return Err(DomainError::DatabaseError("mock store offline".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl ZoneRepository for MockZoneRepository {
    async fn create(&self, domain: String, owner: String, ttl: u32) -> Result<Zone, DomainError> {
        self.check().await?;
        let mut zones = self.zones.write().await;
        if zones.iter().any(|z| z.domain.as_ref() == domain) {
            return Err(DomainError::ZoneAlreadyExists(domain));
        }
        let mut next_id = self.next_id.write().await;
        let zone = Zone::new(*next_id, Arc::from(domain.as_str()), Arc::from(owner.as_str()), ttl);
        *next_id += 1;
        zones.push(zone.clone());
        Ok(zone)
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<Zone>, DomainError> {
        self.check().await?;
        Ok(self.zones.read().await.iter().find(|z| z.id == id).cloned())
    }

    async fn get_by_domain(&self, domain: &str) -> Result<Option<Zone>, DomainError> {
        self.check().await?;
        Ok(self
            .zones
            .read()
            .await
            .iter()
            .find(|z| z.domain.as_ref() == domain)
            .cloned())
    }

    async fn get_all(&self) -> Result<Vec<Zone>, DomainError> {
        self.check().await?;
        Ok(self.zones.read().await.clone())
    }

    async fn get_by_owner(&self, owner: &str) -> Result<Vec<Zone>, DomainError> {
        self.check().await?;
        Ok(self
            .zones
            .read()
            .await
            .iter()
            .filter(|z| z.owner.as_ref() == owner)
            .cloned()
            .collect())
    }

    async fn delete(&self, id: i64) -> Result<(), DomainError> {
        self.check().await?;
        let mut zones = self.zones.write().await;
        let before = zones.len();
        zones.retain(|z| z.id != id);
        if zones.len() == before {
            return Err(DomainError::ZoneNotFound(format!("Zone {} not found", id)));
        }
        Ok(())
    }
}

// ── MockResourceRecordRepository ──────────────────────────────────────────────

#[derive(Clone)]
pub struct MockResourceRecordRepository {
    records: Arc<RwLock<Vec<ResourceRecord>>>,
    next_id: Arc<RwLock<i64>>,
    zones: MockZoneRepository,
}

impl MockResourceRecordRepository {
    pub fn new(zones: MockZoneRepository) -> Self {
        Self {
            records: Arc::new(RwLock::new(Vec::new())),
            next_id: Arc::new(RwLock::new(1)),
            zones,
        }
    }

    pub async fn count(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn add(&self, zone: &Zone, name: &str, record_type: &str, data: &str) -> ResourceRecord {
        self.create(
            zone.id,
            name.to_string(),
            record_type.to_string(),
            None,
            data.to_string(),
        )
        .await
        .unwrap()
    }
}

#[async_trait]
impl ResourceRecordRepository for MockResourceRecordRepository {
    async fn create(
        &self,
        zone_id: i64,
        name: String,
        record_type: String,
        ttl: Option<u32>,
        data: String,
    ) -> Result<ResourceRecord, DomainError> {
        self.zones.check().await?;
        let now = Utc::now();
        let mut next_id = self.next_id.write().await;
        let record = ResourceRecord {
            id: *next_id,
            zone_id,
            name: Arc::from(name.as_str()),
            record_type: Arc::from(record_type.to_ascii_uppercase().as_str()),
            ttl,
            data: Arc::from(data.as_str()),
            created_at: now,
            updated_at: now,
        };
        *next_id += 1;
        self.records.write().await.push(record.clone());
        self.zones.touch(zone_id).await;
        Ok(record)
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<ResourceRecord>, DomainError> {
        self.zones.check().await?;
        Ok(self.records.read().await.iter().find(|r| r.id == id).cloned())
    }

    async fn update(
        &self,
        id: i64,
        name: Option<String>,
        record_type: Option<String>,
        ttl: Option<u32>,
        data: Option<String>,
    ) -> Result<ResourceRecord, DomainError> {
        self.zones.check().await?;
        let mut records = self.records.write().await;
        let record = records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(DomainError::RecordNotFound(id))?;

        if let Some(n) = name {
            record.name = Arc::from(n.as_str());
        }
        if let Some(t) = record_type {
            record.record_type = Arc::from(t.to_ascii_uppercase().as_str());
        }
        if ttl.is_some() {
            record.ttl = ttl;
        }
        if let Some(d) = data {
            record.data = Arc::from(d.as_str());
        }
        record.updated_at = Utc::now();
        let updated = record.clone();
        drop(records);

        self.zones.touch(updated.zone_id).await;
        Ok(updated)
    }

    async fn delete(&self, id: i64) -> Result<(), DomainError> {
        self.zones.check().await?;
        let mut records = self.records.write().await;
        let pos = records
            .iter()
            .position(|r| r.id == id)
            .ok_or(DomainError::RecordNotFound(id))?;
        let removed = records.remove(pos);
        drop(records);

        self.zones.touch(removed.zone_id).await;
        Ok(())
    }

    async fn find_by_name(
        &self,
        name: &str,
        limit: u32,
    ) -> Result<Vec<ResourceRecord>, DomainError> {
        self.zones.check().await?;
        Ok(self
            .records
            .read()
            .await
            .iter()
            .filter(|r| r.name.as_ref() == name)
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn find_by_name_and_type(
        &self,
        name: &str,
        record_type: &str,
        limit: u32,
    ) -> Result<Vec<ResourceRecord>, DomainError> {
        self.zones.check().await?;
        Ok(self
            .records
            .read()
            .await
            .iter()
            .filter(|r| r.name.as_ref() == name && r.record_type.as_ref() == record_type)
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn find_by_zone(
        &self,
        zone_id: i64,
        limit: u32,
    ) -> Result<Vec<ResourceRecord>, DomainError> {
        self.zones.check().await?;
        Ok(self
            .records
            .read()
            .await
            .iter()
            .filter(|r| r.zone_id == zone_id)
            .take(limit as usize)
            .cloned()
            .collect())
    }
}

// ── MockDelegateRepository ────────────────────────────────────────────────────

#[derive(Clone)]
pub struct MockDelegateRepository {
    delegates: Arc<RwLock<Vec<Delegate>>>,
    next_id: Arc<RwLock<i64>>,
}

impl MockDelegateRepository {
    pub fn new() -> Self {
        Self {
            delegates: Arc::new(RwLock::new(Vec::new())),
            next_id: Arc::new(RwLock::new(1)),
        }
    }

    pub async fn count(&self) -> usize {
        self.delegates.read().await.len()
    }
}

#[async_trait]
impl DelegateRepository for MockDelegateRepository {
    async fn create(&self, domain: String, base_url: String) -> Result<Delegate, DomainError> {
        let now = Utc::now();
        let mut next_id = self.next_id.write().await;
        let delegate = Delegate {
            id: *next_id,
            domain: Arc::from(domain.as_str()),
            base_url: Arc::from(base_url.as_str()),
            created_at: now,
            updated_at: now,
        };
        *next_id += 1;
        self.delegates.write().await.push(delegate.clone());
        Ok(delegate)
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<Delegate>, DomainError> {
        Ok(self
            .delegates
            .read()
            .await
            .iter()
            .find(|d| d.id == id)
            .cloned())
    }

    async fn get_all(&self) -> Result<Vec<Delegate>, DomainError> {
        Ok(self.delegates.read().await.clone())
    }

    async fn find_by_domain(&self, domain: &str) -> Result<Option<Delegate>, DomainError> {
        Ok(self
            .delegates
            .read()
            .await
            .iter()
            .find(|d| d.domain.as_ref() == domain)
            .cloned())
    }

    async fn update(
        &self,
        id: i64,
        domain: Option<String>,
        base_url: Option<String>,
    ) -> Result<Delegate, DomainError> {
        let mut delegates = self.delegates.write().await;
        let delegate = delegates
            .iter_mut()
            .find(|d| d.id == id)
            .ok_or(DomainError::DelegateNotFound(id))?;
        if let Some(d) = domain {
            delegate.domain = Arc::from(d.as_str());
        }
        if let Some(u) = base_url {
            delegate.base_url = Arc::from(u.as_str());
        }
        delegate.updated_at = Utc::now();
        Ok(delegate.clone())
    }

    async fn delete(&self, id: i64) -> Result<(), DomainError> {
        let mut delegates = self.delegates.write().await;
        let before = delegates.len();
        delegates.retain(|d| d.id != id);
        if delegates.len() == before {
            return Err(DomainError::DelegateNotFound(id));
        }
        Ok(())
    }
}
