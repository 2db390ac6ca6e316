// src/application/dto/seo.rs
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SeoSettingsDto {
    pub site_title: String,
    pub site_description: String,
    pub site_keywords: String,
    pub og_image: String,
    pub twitter_handle: String,
    pub language: String,
    pub robots: String,
    pub canonical_url: String,
}

impl SeoSettingsDto {
    /// Initial settings for a deployment, with absolute URLs rooted at the
    /// configured site address.
    pub fn for_site(site_url: &str) -> Self {
        let site_url = site_url.trim_end_matches('/');
        Self {
            og_image: format!("{site_url}/og-image.jpg"),
            canonical_url: site_url.to_owned(),
            ..Self::default()
        }
    }
}

impl Default for SeoSettingsDto {
    fn default() -> Self {
        Self {
            site_title: "Chronicle - Science & Technology News".into(),
            site_description:
                "Independent reporting on science, technology and the ideas shaping tomorrow."
                    .into(),
            site_keywords: "science, technology, news, research, innovation".into(),
            og_image: "/og-image.jpg".into(),
            twitter_handle: "@chroniclenews".into(),
            language: "en".into(),
            robots: "index, follow".into(),
            canonical_url: String::new(),
        }
    }
}

/// Field-wise partial update; absent fields keep their current value.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct SeoSettingsUpdate {
    #[serde(default)]
    pub site_title: Option<String>,
    #[serde(default)]
    pub site_description: Option<String>,
    #[serde(default)]
    pub site_keywords: Option<String>,
    #[serde(default)]
    pub og_image: Option<String>,
    #[serde(default)]
    pub twitter_handle: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub robots: Option<String>,
    #[serde(default)]
    pub canonical_url: Option<String>,
}

impl SeoSettingsUpdate {
    pub fn apply_to(self, mut settings: SeoSettingsDto) -> SeoSettingsDto {
        if let Some(site_title) = self.site_title {
            settings.site_title = site_title;
        }
        if let Some(site_description) = self.site_description {
            settings.site_description = site_description;
        }
        if let Some(site_keywords) = self.site_keywords {
            settings.site_keywords = site_keywords;
        }
        if let Some(og_image) = self.og_image {
            settings.og_image = og_image;
        }
        if let Some(twitter_handle) = self.twitter_handle {
            settings.twitter_handle = twitter_handle;
        }
        if let Some(language) = self.language {
            settings.language = language;
        }
        if let Some(robots) = self.robots {
            settings.robots = robots;
        }
        if let Some(canonical_url) = self.canonical_url {
            settings.canonical_url = canonical_url;
        }
        settings
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MetaTagsDto {
    pub page: String,
    pub meta_tags: BTreeMap<String, String>,
}
