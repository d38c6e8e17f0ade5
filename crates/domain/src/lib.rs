//! Zonecast Domain Layer
pub mod config;
pub mod delegate;
pub mod errors;
pub mod message;
pub mod names;
pub mod query_type;
pub mod record;
pub mod resource_record;
pub mod soa;
pub mod zone;

pub use config::{
    CliOverrides, Config, ConfigError, DatabaseConfig, LoggingConfig, ServerConfig, ZonesConfig,
};
pub use delegate::Delegate;
pub use errors::DomainError;
pub use message::{Header, Message, Resolution, ResponseCode};
pub use query_type::QueryType;
pub use record::{Record, RecordSource};
pub use resource_record::ResourceRecord;
pub use soa::SoaSettings;
pub use zone::Zone;

/// Upper bound on rows fetched by any single store enumeration.
pub const MAX_ANSWER_RECORDS: u32 = 1000;
