pub mod delegates;
pub mod health;
pub mod query;
pub mod records;
pub mod zones;

pub use health::health_check;
