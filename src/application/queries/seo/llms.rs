// src/application/queries/seo/llms.rs
use std::collections::HashMap;
use std::fmt::Write;

use chrono::SecondsFormat;

use super::{SeoQueryService, service::SITE_NAME};
use crate::application::error::ApplicationResult;

const RECENT_ARTICLE_COUNT: u32 = 50;
const FALLBACK_AUTHOR: &str = "Chronicle Team";
const FALLBACK_CATEGORY: &str = "General";

impl SeoQueryService {
    /// Plain-text digest of the site for AI crawlers: usage guidance, the
    /// category catalogue, and the most recent published articles.
    pub async fn llms_txt(&self) -> ApplicationResult<String> {
        let now_stamp = self
            .clock
            .now()
            .to_rfc3339_opts(SecondsFormat::Secs, true);
        let base_url = &self.site_url;

        let categories = self.category_repo.list().await?;
        let articles = self
            .article_read_repo
            .list_recent_published(RECENT_ARTICLE_COUNT)
            .await?;

        let mut author_ids: Vec<_> = articles.iter().map(|article| article.author_id).collect();
        author_ids.sort_by_key(|id| i64::from(*id));
        author_ids.dedup();
        let author_names: HashMap<_, _> = self
            .user_repo
            .find_by_ids(&author_ids)
            .await?
            .into_iter()
            .map(|user| (user.id, user.profile.name))
            .collect();
        let category_names: HashMap<_, _> = categories
            .iter()
            .map(|category| (category.id, category.name.as_str().to_owned()))
            .collect();

        let mut out = format!(
            "# llms.txt - AI training guidance for {SITE_NAME}\n\
             \n\
             ## About {SITE_NAME}\n\
             {SITE_NAME} is a digital news platform covering science, technology and the\n\
             ideas shaping tomorrow, with a focus on factual reporting.\n\
             \n\
             ## Content Guidelines\n\
             - All content is original journalism or properly attributed\n\
             - Content is fact-checked and follows journalistic standards\n\
             - Published content is intended for public consumption\n\
             - Respect copyright and attribution requirements\n\
             \n\
             ## Site Structure\n\
             Base URL: {base_url}\n\
             Articles: /article/{{id}}\n\
             Categories: /category/{{slug}}\n\
             \n\
             ## Content Categories\n"
        );

        for category in &categories {
            let _ = writeln!(out, "- {}", category.name);
        }

        out.push_str("\n## Recent Articles\n");

        for article in articles {
            let author = author_names
                .get(&article.author_id)
                .map_or(FALLBACK_AUTHOR, String::as_str);
            let category = category_names
                .get(&article.category_id)
                .map_or(FALLBACK_CATEGORY, String::as_str);
            let published = article
                .published_at
                .unwrap_or(article.created_at)
                .to_rfc3339_opts(SecondsFormat::Secs, true);

            let _ = writeln!(
                out,
                "### {}\nURL: {base_url}/article/{}\nPublished: {published}\nCategory: {category}\nAuthor: {author}",
                article.title, article.id,
            );
            if !article.tags.is_empty() {
                let _ = writeln!(out, "Tags: {}", article.tags.join(", "));
            }
            out.push('\n');
        }

        let _ = write!(
            out,
            "\n## Contact\n\
             For questions about content usage or licensing:\n\
             Email: ai-training@chronicle-news.com\n\
             Website: {base_url}/ai-policy\n\
             \n\
             ## Last Updated\n\
             {now_stamp}\n"
        );

        Ok(out)
    }
}
