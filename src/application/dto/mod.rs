pub mod analytics;
pub mod articles;
pub mod auth;
pub mod categories;
pub mod seo;
pub mod serde_time;
pub mod users;

pub use analytics::{
    ArticleDailyViewsDto, ArticleStatsDto, DailyViewsDto, DashboardStatsDto, TopArticleDto,
};
pub use articles::{ArticleAssembler, ArticleDto};
pub use auth::{AuthTokenDto, AuthenticatedUser, TokenClaims, TokenSubject};
pub use categories::CategoryDto;
pub use seo::{MetaTagsDto, SeoSettingsDto, SeoSettingsUpdate};
pub use users::{UserDto, UserProfileDto};
