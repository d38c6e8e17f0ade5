mod delegate_repository;
mod resource_record_repository;
mod zone_repository;

pub use delegate_repository::DelegateRepository;
pub use resource_record_repository::ResourceRecordRepository;
pub use zone_repository::ZoneRepository;
