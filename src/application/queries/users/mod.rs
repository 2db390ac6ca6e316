mod get;
mod list;
mod profile;
mod service;

pub use get::GetUserQuery;
pub use list::ListUsersQuery;
pub use service::UserQueryService;
