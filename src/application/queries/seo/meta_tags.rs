// src/application/queries/seo/meta_tags.rs
use std::collections::BTreeMap;

use super::{SeoQueryService, service::SITE_NAME};
use crate::application::{dto::MetaTagsDto, error::ApplicationResult};

pub struct GetMetaTagsQuery {
    pub page: Option<String>,
}

impl SeoQueryService {
    /// Flattened tag map the frontend injects into the document head. Every
    /// page currently receives the site-wide set.
    pub async fn meta_tags(&self, query: GetMetaTagsQuery) -> ApplicationResult<MetaTagsDto> {
        let settings = self.store.load().await?;
        let page = query.page.unwrap_or_else(|| "home".to_owned());

        let mut tags = BTreeMap::new();
        tags.insert("title".to_owned(), settings.site_title.clone());
        tags.insert("description".to_owned(), settings.site_description.clone());
        tags.insert("keywords".to_owned(), settings.site_keywords.clone());
        tags.insert("og:title".to_owned(), settings.site_title.clone());
        tags.insert(
            "og:description".to_owned(),
            settings.site_description.clone(),
        );
        tags.insert("og:image".to_owned(), settings.og_image.clone());
        tags.insert("og:url".to_owned(), settings.canonical_url.clone());
        tags.insert("og:type".to_owned(), "website".to_owned());
        tags.insert("og:site_name".to_owned(), SITE_NAME.to_owned());
        tags.insert(
            "twitter:card".to_owned(),
            "summary_large_image".to_owned(),
        );
        tags.insert("twitter:site".to_owned(), settings.twitter_handle.clone());
        tags.insert("twitter:title".to_owned(), settings.site_title);
        tags.insert(
            "twitter:description".to_owned(),
            settings.site_description,
        );
        tags.insert("twitter:image".to_owned(), settings.og_image);
        tags.insert("robots".to_owned(), settings.robots);
        tags.insert("canonical".to_owned(), settings.canonical_url);
        tags.insert("language".to_owned(), settings.language);

        Ok(MetaTagsDto {
            page,
            meta_tags: tags,
        })
    }
}
