// tests/e2e_seo.rs
use axum::http::{header, StatusCode};
use serde_json::json;

mod support;
use support::helpers::{
    assert_error_response, body_json, body_text, category_id_by_slug, create_article, create_user,
    login, login_admin, make_test_router, request, TEST_SITE_URL,
};

fn content_type(resp: &axum::response::Response) -> String {
    resp.headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("")
        .to_owned()
}

fn cache_control(resp: &axum::response::Response) -> String {
    resp.headers()
        .get(header::CACHE_CONTROL)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("")
        .to_owned()
}

#[tokio::test]
async fn settings_are_admin_only() {
    let app = make_test_router().await;
    let admin = login_admin(&app).await;

    create_user(&app, &admin, "curious", "just-an-editor", "editor").await;
    let editor = login(&app, "curious", "just-an-editor").await;

    let anonymous = request(&app, "GET", "/api/seo/settings", None, None).await;
    assert_error_response(anonymous, StatusCode::UNAUTHORIZED, "Unauthorized").await;

    let as_editor = request(&app, "GET", "/api/seo/settings", Some(&editor), None).await;
    assert_error_response(as_editor, StatusCode::FORBIDDEN, "Forbidden").await;

    let as_admin = request(&app, "GET", "/api/seo/settings", Some(&admin), None).await;
    assert_eq!(as_admin.status(), StatusCode::OK);

    let settings = body_json(as_admin).await;
    assert_eq!(settings["canonical_url"], TEST_SITE_URL);
    assert_eq!(settings["robots"], "index, follow");
}

/// Absent fields keep their current values; the change survives a re-read.
#[tokio::test]
async fn settings_updates_are_partial_and_persisted() {
    let app = make_test_router().await;
    let admin = login_admin(&app).await;

    let updated = request(
        &app,
        "PUT",
        "/api/seo/settings",
        Some(&admin),
        Some(json!({ "site_title": "Chronicle Weekly", "twitter_handle": "@weekly" })),
    )
    .await;
    assert_eq!(updated.status(), StatusCode::OK);

    let body = body_json(updated).await;
    assert_eq!(body["site_title"], "Chronicle Weekly");
    assert_eq!(body["twitter_handle"], "@weekly");
    assert_eq!(body["robots"], "index, follow");

    let reread = request(&app, "GET", "/api/seo/settings", Some(&admin), None).await;
    let reread = body_json(reread).await;
    assert_eq!(reread["site_title"], "Chronicle Weekly");
    assert_eq!(reread["canonical_url"], TEST_SITE_URL);
}

#[tokio::test]
async fn meta_tags_are_public_and_reflect_settings() {
    let app = make_test_router().await;
    let admin = login_admin(&app).await;

    let resp = request(&app, "GET", "/api/seo/meta-tags", None, None).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["page"], "home");
    assert_eq!(body["meta_tags"]["og:site_name"], "Chronicle");
    assert_eq!(body["meta_tags"]["og:type"], "website");

    let update = request(
        &app,
        "PUT",
        "/api/seo/settings",
        Some(&admin),
        Some(json!({ "site_title": "Retitled" })),
    )
    .await;
    assert_eq!(update.status(), StatusCode::OK);

    let resp = request(&app, "GET", "/api/seo/meta-tags?page=about", None, None).await;
    let body = body_json(resp).await;
    assert_eq!(body["page"], "about");
    assert_eq!(body["meta_tags"]["title"], "Retitled");
    assert_eq!(body["meta_tags"]["og:title"], "Retitled");
}

/// The sitemap lists the site root, the category pages, and published
/// articles with a Google News block for fresh ones. Drafts stay out.
#[tokio::test]
async fn sitemap_lists_published_articles_only() {
    let app = make_test_router().await;
    let admin = login_admin(&app).await;
    let category_id = category_id_by_slug(&app, "technology").await;

    let published = create_article(&app, &admin, "Public Story", category_id).await;
    let published_id = published["id"].as_i64().unwrap();
    let publish = request(
        &app,
        "POST",
        &format!("/api/articles/{published_id}/publish"),
        Some(&admin),
        None,
    )
    .await;
    assert_eq!(publish.status(), StatusCode::OK);

    let draft = create_article(&app, &admin, "Hidden Draft", category_id).await;
    let draft_id = draft["id"].as_i64().unwrap();

    let resp = request(&app, "GET", "/seo/sitemap.xml", None, None).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(content_type(&resp).starts_with("application/xml"));
    assert_eq!(cache_control(&resp), "public, max-age=3600");

    let xml = body_text(resp).await;
    assert!(xml.starts_with("<?xml version=\"1.0\""));
    assert!(xml.contains(&format!("<loc>{TEST_SITE_URL}</loc>")));
    assert!(xml.contains(&format!("<loc>{TEST_SITE_URL}/category/technology</loc>")));
    assert!(xml.contains(&format!("<loc>{TEST_SITE_URL}/article/{published_id}</loc>")));
    assert!(!xml.contains(&format!("<loc>{TEST_SITE_URL}/article/{draft_id}</loc>")));

    // Published moments ago, so the news block applies.
    assert!(xml.contains("<news:news>"));
    assert!(xml.contains("<news:title>Public Story</news:title>"));
}

#[tokio::test]
async fn llms_sitemap_carries_training_metadata() {
    let app = make_test_router().await;
    let admin = login_admin(&app).await;
    let category_id = category_id_by_slug(&app, "biology").await;

    let article = create_article(&app, &admin, "Trained On", category_id).await;
    let id = article["id"].as_i64().unwrap();
    request(
        &app,
        "POST",
        &format!("/api/articles/{id}/publish"),
        Some(&admin),
        None,
    )
    .await;

    let resp = request(&app, "GET", "/seo/llms-sitemap.xml", None, None).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(content_type(&resp).starts_with("application/xml"));

    let xml = body_text(resp).await;
    assert!(xml.contains("<ai:training-data>true</ai:training-data>"));
    assert!(xml.contains("<ai:content-type>news-article</ai:content-type>"));
    assert!(xml.contains(&format!("<loc>{TEST_SITE_URL}/article/{id}</loc>")));
    assert!(xml.contains("<ai:category>Biology</ai:category>"));
}

#[tokio::test]
async fn llms_txt_digests_categories_and_recent_articles() {
    let app = make_test_router().await;
    let admin = login_admin(&app).await;
    let category_id = category_id_by_slug(&app, "environment").await;

    let article = create_article(&app, &admin, "Readable Summary", category_id).await;
    let id = article["id"].as_i64().unwrap();
    request(
        &app,
        "POST",
        &format!("/api/articles/{id}/publish"),
        Some(&admin),
        None,
    )
    .await;

    let resp = request(&app, "GET", "/seo/llms.txt", None, None).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(content_type(&resp).starts_with("text/plain"));

    let text = body_text(resp).await;
    assert!(text.starts_with("# llms.txt"));
    assert!(text.contains(&format!("Base URL: {TEST_SITE_URL}")));
    assert!(text.contains("- Environment"));
    assert!(text.contains("### Readable Summary"));
    assert!(text.contains(&format!("URL: {TEST_SITE_URL}/article/{id}")));
    assert!(text.contains("Author: Administrator"));
}

#[tokio::test]
async fn robots_txt_points_at_both_sitemaps() {
    let app = make_test_router().await;

    let resp = request(&app, "GET", "/seo/robots.txt", None, None).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(content_type(&resp).starts_with("text/plain"));
    assert_eq!(cache_control(&resp), "public, max-age=86400");

    let text = body_text(resp).await;
    assert!(text.starts_with("User-agent: *"));
    assert!(text.contains(&format!("Sitemap: {TEST_SITE_URL}/seo/sitemap.xml")));
    assert!(text.contains(&format!("Sitemap: {TEST_SITE_URL}/seo/llms-sitemap.xml")));
    assert!(text.contains("Disallow: /admin/"));
}
