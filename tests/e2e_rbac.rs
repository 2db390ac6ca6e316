// tests/e2e_rbac.rs
// Role and ownership enforcement across the API surface: admin, editor and
// reporter accounts working on each other's resources.
use axum::http::StatusCode;
use serde_json::json;

mod support;
use support::helpers::{
    assert_error_response, body_json, category_id_by_slug, create_article, create_user, login,
    login_admin, make_test_router, request,
};

#[tokio::test]
async fn user_management_is_admin_only() {
    let app = make_test_router().await;
    let admin = login_admin(&app).await;

    create_user(&app, &admin, "edith", "to-the-lighthouse", "editor").await;
    let editor = login(&app, "edith", "to-the-lighthouse").await;

    let list = request(&app, "GET", "/api/users", Some(&editor), None).await;
    assert_error_response(list, StatusCode::FORBIDDEN, "Forbidden").await;

    let get = request(&app, "GET", "/api/users/1", Some(&editor), None).await;
    assert_error_response(get, StatusCode::FORBIDDEN, "Forbidden").await;

    let create = request(
        &app,
        "POST",
        "/api/users",
        Some(&editor),
        Some(json!({
            "username": "sneaky",
            "email": "sneaky@example.org",
            "password": "irrelevant-pw",
            "profile": { "name": "Sneaky" }
        })),
    )
    .await;
    assert_error_response(create, StatusCode::FORBIDDEN, "Forbidden").await;

    let update = request(
        &app,
        "PUT",
        "/api/users/1",
        Some(&editor),
        Some(json!({ "is_active": false })),
    )
    .await;
    assert_error_response(update, StatusCode::FORBIDDEN, "Forbidden").await;

    let delete = request(&app, "DELETE", "/api/users/1", Some(&editor), None).await;
    assert_error_response(delete, StatusCode::FORBIDDEN, "Forbidden").await;
}

#[tokio::test]
async fn admins_cannot_delete_their_own_account() {
    let app = make_test_router().await;
    let admin = login_admin(&app).await;

    let me = request(&app, "GET", "/api/auth/me", Some(&admin), None).await;
    let admin_id = body_json(me).await["id"].as_i64().unwrap();

    let resp = request(
        &app,
        "DELETE",
        &format!("/api/users/{admin_id}"),
        Some(&admin),
        None,
    )
    .await;
    assert_error_response(resp, StatusCode::BAD_REQUEST, "Bad Request").await;
}

/// Listings for non-admins are pinned to the caller's own articles, and an
/// explicit author filter cannot widen them.
#[tokio::test]
async fn reporters_list_only_their_own_articles() {
    let app = make_test_router().await;
    let admin = login_admin(&app).await;
    let category_id = category_id_by_slug(&app, "technology").await;

    create_user(&app, &admin, "nelly", "around-the-world", "reporter").await;
    let reporter = login(&app, "nelly", "around-the-world").await;

    create_article(&app, &admin, "Admin Scoop", category_id).await;
    create_article(&app, &reporter, "Reporter Beat", category_id).await;

    let listed = request(&app, "GET", "/api/articles", Some(&reporter), None).await;
    let articles = body_json(listed).await;
    let articles = articles.as_array().unwrap();
    assert_eq!(articles.len(), 1);
    assert_eq!(articles[0]["title"], "Reporter Beat");

    // author_id=1 is the admin; the filter is ignored for non-admins.
    let widened = request(
        &app,
        "GET",
        "/api/articles?author_id=1",
        Some(&reporter),
        None,
    )
    .await;
    let widened = body_json(widened).await;
    assert_eq!(widened.as_array().unwrap().len(), 1);

    let admin_view = request(&app, "GET", "/api/articles", Some(&admin), None).await;
    assert_eq!(body_json(admin_view).await.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn reading_another_authors_article_by_id_is_forbidden() {
    let app = make_test_router().await;
    let admin = login_admin(&app).await;
    let category_id = category_id_by_slug(&app, "medicine").await;

    create_user(&app, &admin, "nosy", "curiosity-killed", "reporter").await;
    let reporter = login(&app, "nosy", "curiosity-killed").await;

    let article = create_article(&app, &admin, "Private Draft", category_id).await;
    let id = article["id"].as_i64().unwrap();

    let resp = request(&app, "GET", &format!("/api/articles/{id}"), Some(&reporter), None).await;
    assert_error_response(resp, StatusCode::FORBIDDEN, "Forbidden").await;
}

#[tokio::test]
async fn editing_another_authors_article_is_forbidden() {
    let app = make_test_router().await;
    let admin = login_admin(&app).await;
    let category_id = category_id_by_slug(&app, "biology").await;

    create_user(&app, &admin, "ring", "lardner-jr-1942", "reporter").await;
    create_user(&app, &admin, "herb", "blue-pencil-pro", "editor").await;
    let reporter = login(&app, "ring", "lardner-jr-1942").await;
    let editor = login(&app, "herb", "blue-pencil-pro").await;

    let article = create_article(&app, &reporter, "Beat Report", category_id).await;
    let id = article["id"].as_i64().unwrap();

    // Editors do not own it, so they cannot edit it.
    let denied = request(
        &app,
        "PUT",
        &format!("/api/articles/{id}"),
        Some(&editor),
        Some(json!({ "subtitle": "Sharpened" })),
    )
    .await;
    assert_error_response(denied, StatusCode::FORBIDDEN, "Forbidden").await;

    // Admins can edit anything.
    let allowed = request(
        &app,
        "PUT",
        &format!("/api/articles/{id}"),
        Some(&admin),
        Some(json!({ "subtitle": "Sharpened" })),
    )
    .await;
    assert_eq!(allowed.status(), StatusCode::OK);
}

/// Publishing is a role gate with no ownership clause: editors may publish
/// anyone's article, reporters nobody's.
#[tokio::test]
async fn publishing_requires_the_editor_role() {
    let app = make_test_router().await;
    let admin = login_admin(&app).await;
    let category_id = category_id_by_slug(&app, "environment").await;

    create_user(&app, &admin, "scoop", "hold-the-front", "reporter").await;
    create_user(&app, &admin, "max", "perkins-editor", "editor").await;
    let reporter = login(&app, "scoop", "hold-the-front").await;
    let editor = login(&app, "max", "perkins-editor").await;

    let article = create_article(&app, &reporter, "Hot Take", category_id).await;
    let id = article["id"].as_i64().unwrap();

    let denied = request(
        &app,
        "POST",
        &format!("/api/articles/{id}/publish"),
        Some(&reporter),
        None,
    )
    .await;
    assert_error_response(denied, StatusCode::FORBIDDEN, "Forbidden").await;

    let published = request(
        &app,
        "POST",
        &format!("/api/articles/{id}/publish"),
        Some(&editor),
        None,
    )
    .await;
    assert_eq!(published.status(), StatusCode::OK);
}

/// Deletion takes the editor role and ownership together; admins bypass
/// both.
#[tokio::test]
async fn deletion_requires_role_and_ownership() {
    let app = make_test_router().await;
    let admin = login_admin(&app).await;
    let category_id = category_id_by_slug(&app, "technology").await;

    create_user(&app, &admin, "cub", "first-assignment", "reporter").await;
    create_user(&app, &admin, "vera", "spike-that-story", "editor").await;
    let reporter = login(&app, "cub", "first-assignment").await;
    let editor = login(&app, "vera", "spike-that-story").await;

    let own_by_reporter = create_article(&app, &reporter, "Reporter Piece", category_id).await;
    let own_by_editor = create_article(&app, &editor, "Editor Piece", category_id).await;

    // Reporters cannot delete even their own work.
    let denied = request(
        &app,
        "DELETE",
        &format!("/api/articles/{}", own_by_reporter["id"]),
        Some(&reporter),
        None,
    )
    .await;
    assert_error_response(denied, StatusCode::FORBIDDEN, "Forbidden").await;

    // Editors cannot delete what they do not own.
    let not_owner = request(
        &app,
        "DELETE",
        &format!("/api/articles/{}", own_by_reporter["id"]),
        Some(&editor),
        None,
    )
    .await;
    assert_error_response(not_owner, StatusCode::FORBIDDEN, "Forbidden").await;

    // Editors delete their own, admins delete anything.
    let own = request(
        &app,
        "DELETE",
        &format!("/api/articles/{}", own_by_editor["id"]),
        Some(&editor),
        None,
    )
    .await;
    assert_eq!(own.status(), StatusCode::OK);

    let by_admin = request(
        &app,
        "DELETE",
        &format!("/api/articles/{}", own_by_reporter["id"]),
        Some(&admin),
        None,
    )
    .await;
    assert_eq!(by_admin.status(), StatusCode::OK);
}

/// Deactivation locks the account out immediately: the live token dies with
/// the flag, not with its expiry.
#[tokio::test]
async fn deactivated_accounts_are_locked_out() {
    let app = make_test_router().await;
    let admin = login_admin(&app).await;

    let user_id = create_user(&app, &admin, "mallory", "soon-to-be-gone", "reporter").await;
    let token = login(&app, "mallory", "soon-to-be-gone").await;

    let disable = request(
        &app,
        "PUT",
        &format!("/api/users/{user_id}"),
        Some(&admin),
        Some(json!({ "is_active": false })),
    )
    .await;
    assert_eq!(disable.status(), StatusCode::OK);

    let stale_token = request(&app, "GET", "/api/auth/me", Some(&token), None).await;
    assert_error_response(stale_token, StatusCode::FORBIDDEN, "Account Inactive").await;

    let relogin = request(
        &app,
        "POST",
        "/api/auth/login",
        None,
        Some(json!({ "username": "mallory", "password": "soon-to-be-gone" })),
    )
    .await;
    assert_error_response(relogin, StatusCode::FORBIDDEN, "Account Inactive").await;
}

/// Role and active status are re-read from storage per request, so a
/// promotion applies to tokens issued before it.
#[tokio::test]
async fn role_changes_apply_to_existing_tokens() {
    let app = make_test_router().await;
    let admin = login_admin(&app).await;
    let category_id = category_id_by_slug(&app, "medicine").await;

    let user_id = create_user(&app, &admin, "rising", "star-reporter", "reporter").await;
    let token = login(&app, "rising", "star-reporter").await;

    let article = create_article(&app, &token, "Before Promotion", category_id).await;
    let id = article["id"].as_i64().unwrap();

    let denied = request(
        &app,
        "POST",
        &format!("/api/articles/{id}/publish"),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(denied.status(), StatusCode::FORBIDDEN);

    let promote = request(
        &app,
        "PUT",
        &format!("/api/users/{user_id}"),
        Some(&admin),
        Some(json!({ "role": "editor" })),
    )
    .await;
    assert_eq!(promote.status(), StatusCode::OK);

    let allowed = request(
        &app,
        "POST",
        &format!("/api/articles/{id}/publish"),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(allowed.status(), StatusCode::OK);
}

#[tokio::test]
async fn user_updates_with_no_fields_are_rejected() {
    let app = make_test_router().await;
    let admin = login_admin(&app).await;
    let user_id = create_user(&app, &admin, "static", "nothing-changes", "reporter").await;

    let resp = request(
        &app,
        "PUT",
        &format!("/api/users/{user_id}"),
        Some(&admin),
        Some(json!({})),
    )
    .await;
    assert_error_response(resp, StatusCode::BAD_REQUEST, "Bad Request").await;
}
