mod create;
mod delete;
mod login;
mod password;
mod service;
mod update;

pub use create::CreateUserCommand;
pub use login::{LoginResult, LoginUserCommand};
pub use service::UserCommandService;
pub use update::UpdateUserCommand;
