pub mod entity;
pub mod repository;

pub use entity::{Category, CategoryId, CategoryName, CategoryUpdate, NewCategory};
pub use repository::CategoryRepository;
