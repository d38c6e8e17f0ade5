use serde::{Deserialize, Serialize};

use crate::soa::SoaSettings;
use crate::zone::DEFAULT_ZONE_TTL;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ZonesConfig {
    /// Name server advertised as MNAME in every synthesized SOA
    #[serde(default = "default_primary_ns")]
    pub primary_ns: String,

    /// Responsible mailbox, written with `@`; rendered as RNAME
    #[serde(default = "default_hostmaster")]
    pub hostmaster: String,

    /// TTL given to zones created without one
    #[serde(default = "default_ttl")]
    pub default_ttl: u32,

    #[serde(default = "default_refresh")]
    pub refresh: u32,

    #[serde(default = "default_retry")]
    pub retry: u32,

    #[serde(default = "default_expire")]
    pub expire: u32,

    #[serde(default = "default_minimum")]
    pub minimum: u32,
}

impl Default for ZonesConfig {
    fn default() -> Self {
        Self {
            primary_ns: default_primary_ns(),
            hostmaster: default_hostmaster(),
            default_ttl: default_ttl(),
            refresh: default_refresh(),
            retry: default_retry(),
            expire: default_expire(),
            minimum: default_minimum(),
        }
    }
}

impl ZonesConfig {
    pub fn soa_settings(&self) -> SoaSettings {
        SoaSettings {
            primary_ns: self.primary_ns.clone(),
            hostmaster: self.hostmaster.clone(),
            refresh: self.refresh,
            retry: self.retry,
            expire: self.expire,
            minimum: self.minimum,
        }
    }
}

fn default_primary_ns() -> String {
    SoaSettings::default().primary_ns
}

fn default_hostmaster() -> String {
    SoaSettings::default().hostmaster
}

fn default_ttl() -> u32 {
    DEFAULT_ZONE_TTL
}

fn default_refresh() -> u32 {
    3600
}

fn default_retry() -> u32 {
    600
}

fn default_expire() -> u32 {
    86400
}

fn default_minimum() -> u32 {
    3600
}
