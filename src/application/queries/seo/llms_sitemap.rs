// src/application/queries/seo/llms_sitemap.rs
use std::collections::HashMap;

use chrono::SecondsFormat;

use super::{
    SeoQueryService,
    sitemap::{SITEMAP_ARTICLE_CAP, push_tag},
};
use crate::application::error::ApplicationResult;

const AI_SCHEMA_URL: &str = "https://schemas.chronicle-news.com/ai-training";

impl SeoQueryService {
    /// Sitemap variant for AI crawlers, carrying per-entry training metadata.
    pub async fn llms_sitemap_xml(&self) -> ApplicationResult<String> {
        let settings = self.store.load().await?;
        let now_stamp = self
            .clock
            .now()
            .to_rfc3339_opts(SecondsFormat::Secs, true);

        let category_names: HashMap<_, _> = self
            .category_repo
            .list()
            .await?
            .into_iter()
            .map(|category| (category.id, category.name.into_inner()))
            .collect();

        let mut xml = format!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
             <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\" \
             xmlns:ai=\"{AI_SCHEMA_URL}\">\n",
        );

        xml.push_str("  <url>\n");
        push_tag(&mut xml, "    ", "loc", &self.site_url);
        push_tag(&mut xml, "    ", "lastmod", &now_stamp);
        push_tag(&mut xml, "    ", "changefreq", "daily");
        push_tag(&mut xml, "    ", "priority", "1.0");
        push_tag(&mut xml, "    ", "ai:training-data", "true");
        push_tag(&mut xml, "    ", "ai:content-type", "homepage");
        push_tag(&mut xml, "    ", "ai:language", &settings.language);
        xml.push_str("  </url>\n");

        let articles = self
            .article_read_repo
            .list_recent_published(SITEMAP_ARTICLE_CAP)
            .await?;
        for article in articles {
            let loc = format!("{}/article/{}", self.site_url, article.id);
            let lastmod = article
                .updated_at
                .to_rfc3339_opts(SecondsFormat::Secs, true);

            xml.push_str("  <url>\n");
            push_tag(&mut xml, "    ", "loc", &loc);
            push_tag(&mut xml, "    ", "lastmod", &lastmod);
            push_tag(&mut xml, "    ", "changefreq", "weekly");
            push_tag(&mut xml, "    ", "priority", "0.9");
            push_tag(&mut xml, "    ", "ai:training-data", "true");
            push_tag(&mut xml, "    ", "ai:content-type", "news-article");
            push_tag(&mut xml, "    ", "ai:language", &settings.language);
            if let Some(name) = category_names.get(&article.category_id) {
                push_tag(&mut xml, "    ", "ai:category", name);
            }
            if !article.tags.is_empty() {
                push_tag(&mut xml, "    ", "ai:keywords", &article.tags.join(", "));
            }
            xml.push_str("  </url>\n");
        }

        xml.push_str("</urlset>\n");
        Ok(xml)
    }
}
