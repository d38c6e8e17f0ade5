mod create_zone;
mod delete_zone;
mod get_zones;

pub use create_zone::CreateZoneUseCase;
pub use delete_zone::DeleteZoneUseCase;
pub use get_zones::GetZonesUseCase;
