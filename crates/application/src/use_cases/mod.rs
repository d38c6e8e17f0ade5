pub mod delegates;
pub mod query;
pub mod records;
pub mod zones;

pub use delegates::{
    CreateDelegateUseCase, DeleteDelegateUseCase, GetDelegatesUseCase, UpdateDelegateUseCase,
};
pub use query::ResolveQueryUseCase;
pub use records::{
    CreateRecordUseCase, DeleteRecordUseCase, GetRecordsUseCase, UpdateRecordUseCase,
};
pub use zones::{CreateZoneUseCase, DeleteZoneUseCase, GetZonesUseCase};
