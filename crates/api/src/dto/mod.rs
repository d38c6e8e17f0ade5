pub mod delegate;
pub mod message;
pub mod record;
pub mod zone;

pub use delegate::{CreateDelegateRequest, DelegateResponse, UpdateDelegateRequest};
pub use message::{HeaderDto, MessageResponse, RecordDto};
pub use record::{CreateRecordRequest, RecordResponse, UpdateRecordRequest};
pub use zone::{CreateZoneRequest, ZoneQuery, ZoneResponse};
