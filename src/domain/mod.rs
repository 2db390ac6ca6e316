pub mod analytics;
pub mod article;
pub mod category;
pub mod errors;
pub mod policy;
pub mod slug;
pub mod user;
