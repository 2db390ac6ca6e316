pub mod repository;

pub use repository::{DailyViews, ViewEvent, ViewStatsRepository, ViewTotals};
