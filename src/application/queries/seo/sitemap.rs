// src/application/queries/seo/sitemap.rs
use chrono::{Duration, SecondsFormat};

use super::{SeoQueryService, service::SITE_NAME};
use crate::application::error::ApplicationResult;

/// Crawlers stop reading extremely long sitemaps; cap the article section.
pub(super) const SITEMAP_ARTICLE_CAP: u32 = 1000;

/// Articles touched within this window get the Google News block.
const NEWS_WINDOW_DAYS: i64 = 2;

pub(super) fn push_tag(xml: &mut String, indent: &str, name: &str, value: &str) {
    xml.push_str(indent);
    xml.push('<');
    xml.push_str(name);
    xml.push('>');
    xml.push_str(&html_escape::encode_text(value));
    xml.push_str("</");
    xml.push_str(name);
    xml.push_str(">\n");
}

pub(super) fn push_url_entry(
    xml: &mut String,
    loc: &str,
    lastmod: &str,
    changefreq: &str,
    priority: &str,
) {
    xml.push_str("  <url>\n");
    push_tag(xml, "    ", "loc", loc);
    push_tag(xml, "    ", "lastmod", lastmod);
    push_tag(xml, "    ", "changefreq", changefreq);
    push_tag(xml, "    ", "priority", priority);
    xml.push_str("  </url>\n");
}

impl SeoQueryService {
    pub async fn sitemap_xml(&self) -> ApplicationResult<String> {
        let settings = self.store.load().await?;
        let now = self.clock.now();
        let now_stamp = now.to_rfc3339_opts(SecondsFormat::Secs, true);
        let news_cutoff = now - Duration::days(NEWS_WINDOW_DAYS);

        let mut xml = String::from(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
             <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\" \
             xmlns:news=\"http://www.google.com/schemas/sitemap-news/0.9\">\n",
        );

        push_url_entry(&mut xml, &self.site_url, &now_stamp, "daily", "1.0");

        for category in self.category_repo.list().await? {
            let loc = format!("{}/category/{}", self.site_url, category.slug);
            push_url_entry(&mut xml, &loc, &now_stamp, "daily", "0.8");
        }

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

            if article.updated_at > news_cutoff {
                let publication_date = article
                    .published_at
                    .unwrap_or(article.created_at)
                    .format("%Y-%m-%d")
                    .to_string();
                xml.push_str("    <news:news>\n      <news:publication>\n");
                push_tag(&mut xml, "        ", "news:name", SITE_NAME);
                push_tag(&mut xml, "        ", "news:language", &settings.language);
                xml.push_str("      </news:publication>\n");
                push_tag(
                    &mut xml,
                    "      ",
                    "news:publication_date",
                    &publication_date,
                );
                push_tag(&mut xml, "      ", "news:title", article.title.as_str());
                xml.push_str("    </news:news>\n");
            }

            xml.push_str("  </url>\n");
        }

        xml.push_str("</urlset>\n");
        Ok(xml)
    }
}
