mod create_delegate;
mod delete_delegate;
mod get_delegates;
mod update_delegate;

pub use create_delegate::CreateDelegateUseCase;
pub use delete_delegate::DeleteDelegateUseCase;
pub use get_delegates::GetDelegatesUseCase;
pub use update_delegate::UpdateDelegateUseCase;
