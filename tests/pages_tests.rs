
use reqwest::StatusCode;
use serde_json::{json, Value};
use test_content::*;
use test_utils::*;

fn titles(items: &Value) -> Vec<String> {
    items
        .as_array()
        .expect("array")
        .iter()
        .map(|p| p["title"].as_str().unwrap().to_string())
        .collect()
}

fn projects() -> Vec<folio_site::entities::project::Project> {
    vec![
        project("Unordered", Some("Web"), None, true),
        project("Second", Some("CLI"), Some(2), true),
        project("First", Some("Web"), Some(1), true),
        project("Third", None, Some(3), true),
    ]
}

#[actix_rt::test]
async fn home_joins_profile_projects_and_posts() {
    let mut posts = numbered_posts(6);
    posts.push(TestPost::new("deep-dive", 0).category("Engineering").build());
    let app = TestApp::spawn(posts, projects(), Some(profile(Some("sam@folio.test")))).await;

    let body = app.get_json("/").await;

    assert_eq!(body["profile"]["name"], "Sam Doe");
    assert_eq!(titles(&body["featured_projects"]), vec!["First", "Second", "Third"]);
    assert_eq!(body["latest_posts"].as_array().unwrap().len(), 4);
    assert_eq!(body["latest_posts"][0]["slug"], "post-1");
    assert_eq!(body["deep_dives"].as_array().unwrap().len(), 1);
    assert_eq!(body["deep_dives"][0]["slug"], "deep-dive");
    assert_eq!(body["site"]["url"], "https://folio.test");
}

#[actix_rt::test]
async fn home_without_profile_still_renders() {
    let app = TestApp::spawn(vec![], vec![], None).await;

    let response = app.get("/").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = response.json().await.unwrap();
    assert!(body["profile"].is_null());
    assert!(body["latest_posts"].as_array().unwrap().is_empty());
}

#[actix_rt::test]
async fn projects_follow_display_order_with_nulls_last() {
    let app = TestApp::spawn(vec![], projects(), None).await;

    let body = app.get_json("/projects").await;

    assert_eq!(titles(&body["projects"]), vec!["First", "Second", "Third", "Unordered"]);
    assert_eq!(body["categories"], json!(["All", "Web", "CLI"]));
    assert!(body["selected_category"].is_null());
    assert_eq!(body["projects"][0]["tech_stack"], json!(["Rust", "actix-web"]));
}

#[actix_rt::test]
async fn project_category_filter() {
    let app = TestApp::spawn(vec![], projects(), None).await;

    let web = app.get_json("/projects?category=Web").await;
    assert_eq!(titles(&web["projects"]), vec!["First", "Unordered"]);
    assert_eq!(web["selected_category"], "Web");

    let all = app.get_json("/projects?category=All").await;
    assert_eq!(all["projects"].as_array().unwrap().len(), 4);

    let none = app.get_json("/projects?category=Games").await;
    assert!(none["projects"].as_array().unwrap().is_empty());
    assert_eq!(none["empty_state"], "No projects found in this category.");
}

#[actix_rt::test]
async fn project_detail_renders_long_description() {
    let items = projects();
    let id = items[2].id;
    let app = TestApp::spawn(vec![], items, None).await;

    let response = app.get(&format!("/projects/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["title"], "First");
    assert!(body["description_html"].as_str().unwrap().contains("<strong>full</strong>"));

    let ids = app.get_json("/api/v1/projects/ids").await;
    assert_eq!(ids.as_array().unwrap().len(), 4);
}

#[actix_rt::test]
async fn project_detail_rejects_bad_ids() {
    let app = TestApp::spawn(vec![], projects(), None).await;

    let malformed = app.get("/projects/not-a-uuid").await;
    assert_eq!(malformed.status(), StatusCode::BAD_REQUEST);

    let missing = app.get(&format!("/projects/{}", uuid::Uuid::new_v4())).await;
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
    let body: Value = missing.json().await.unwrap();
    assert!(body["error"].as_str().unwrap().starts_with("Not found"));
}

#[actix_rt::test]
async fn about_lists_skills() {
    let app = TestApp::spawn(vec![], vec![], Some(profile(None))).await;

    let body = app.get_json("/about").await;

    assert_eq!(body["skills"], json!(["Rust", "Postgres"]));
    assert_eq!(body["profile"]["location"], "Seoul");
}

#[actix_rt::test]
async fn contact_page_falls_back_to_configured_email() {
    let app = TestApp::spawn(vec![], vec![], Some(profile(None))).await;

    let body = app.get_json("/contact").await;

    assert_eq!(body["email"], "fallback@folio.test");
    assert_eq!(body["links"]["github_url"], "https://github.com/samdoe");
}

#[actix_rt::test]
async fn contact_submit_returns_mailto_for_profile_email() {
    let app = TestApp::spawn(vec![], vec![], Some(profile(Some("sam@folio.test")))).await;

    let response = app
        .post_json(
            "/api/v1/contact",
            &json!({
                "name": "Ada",
                "email": "ada@example.com",
                "subject": "Hi",
                "message": "Let's talk"
            }),
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = response.json().await.unwrap();
    let mailto = body["mailto"].as_str().unwrap();
    assert!(mailto.starts_with("mailto:sam@folio.test?subject=%5BPortfolio%5D%20Hi&body="));
}

#[actix_rt::test]
async fn contact_submit_validates_fields() {
    let app = TestApp::spawn(vec![], vec![], Some(profile(Some("sam@folio.test")))).await;

    let response = app
        .post_json(
            "/api/v1/contact",
            &json!({ "name": "", "email": "nope", "subject": "Hi", "message": "x" }),
        )
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Validation failed");
    let fields: Vec<&str> = body["details"]
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["field"].as_str().unwrap())
        .collect();
    assert_eq!(fields, vec!["email", "name"]);
}

#[actix_rt::test]
async fn malformed_json_gets_json_error() {
    let app = TestApp::spawn(vec![], vec![], None).await;

    let response = app
        .client
        .post(format!("{}/api/v1/contact", app.address))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.unwrap();
    assert!(body["error"].as_str().unwrap().starts_with("JSON payload error"));
}

#[actix_rt::test]
async fn health_reports_database_ok() {
    let app = TestApp::spawn(vec![], vec![], None).await;

    let body = app.get_json("/health").await;

    assert_eq!(body["status"], "healthy");
    assert_eq!(body["database"], "OK");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[actix_rt::test]
async fn unknown_route_is_json_not_found() {
    let app = TestApp::spawn(vec![], vec![], None).await;

    let response = app.get("/nowhere").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["details"], "/nowhere");
}
