// src/application/queries/seo/robots.rs
use super::SeoQueryService;

impl SeoQueryService {
    /// Static policy text; only the site address varies per deployment.
    pub fn robots_txt(&self) -> String {
        let base_url = &self.site_url;
        format!(
            "User-agent: *\n\
             Allow: /\n\
             \n\
             # Sitemaps\n\
             Sitemap: {base_url}/seo/sitemap.xml\n\
             Sitemap: {base_url}/seo/llms-sitemap.xml\n\
             \n\
             # AI Training Data\n\
             # llms.txt file for AI training guidelines\n\
             # {base_url}/seo/llms.txt\n\
             \n\
             # Crawl-delay for respectful crawling\n\
             Crawl-delay: 1\n\
             \n\
             # Block admin and private areas\n\
             Disallow: /admin/\n\
             Disallow: /api/\n\
             Disallow: /private/\n\
             \n\
             # Block search parameters\n\
             Disallow: /*?search=\n\
             Disallow: /*?q=\n"
        )
    }
}
