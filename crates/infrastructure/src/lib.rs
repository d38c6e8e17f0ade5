pub mod database;
pub mod repositories;
