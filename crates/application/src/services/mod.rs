mod delegation_service;
mod query_resolver;
mod response_assembler;

pub use delegation_service::DelegationService;
pub use query_resolver::{QueryResolver, Resolved};
pub use response_assembler::ResponseAssembler;
