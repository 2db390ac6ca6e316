use std::sync::Arc;

use crate::application::dto::ArticleAssembler;
use crate::domain::article::ArticleReadRepository;

pub struct ArticleQueryService {
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) assembler: Arc<ArticleAssembler>,
}

impl ArticleQueryService {
    pub fn new(
        read_repo: Arc<dyn ArticleReadRepository>,
        assembler: Arc<ArticleAssembler>,
    ) -> Self {
        Self {
            read_repo,
            assembler,
        }
    }

    /// Negative offsets reset to zero; a non-positive or oversized page size
    /// falls back to the maximum of 100.
    pub(super) fn clamp_listing(skip: i64, limit: i64) -> (u32, u32) {
        const MAX_LIMIT: i64 = 100;

        let skip = skip.max(0);
        let limit = if limit <= 0 || limit > MAX_LIMIT {
            MAX_LIMIT
        } else {
            limit
        };
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        (skip.min(i64::from(u32::MAX)) as u32, limit as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::ArticleQueryService;

    #[test]
    fn clamp_listing_resets_negative_skip() {
        assert_eq!(ArticleQueryService::clamp_listing(-5, 20), (0, 20));
    }

    #[test]
    fn clamp_listing_caps_oversized_limits() {
        assert_eq!(ArticleQueryService::clamp_listing(0, 500), (0, 100));
        assert_eq!(ArticleQueryService::clamp_listing(0, 0), (0, 100));
        assert_eq!(ArticleQueryService::clamp_listing(0, -1), (0, 100));
    }

    #[test]
    fn clamp_listing_keeps_in_range_values() {
        assert_eq!(ArticleQueryService::clamp_listing(40, 25), (40, 25));
    }
}
