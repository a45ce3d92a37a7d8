
use reqwest::StatusCode;
use serde_json::Value;
use test_content::*;
use test_utils::*;

fn slugs(body: &Value) -> Vec<String> {
    body["posts"]
        .as_array()
        .expect("posts array")
        .iter()
        .map(|p| p["slug"].as_str().unwrap().to_string())
        .collect()
}

#[actix_rt::test]
async fn first_page_holds_page_size_posts_newest_first() {
    let app = TestApp::spawn(numbered_posts(12), vec![], None).await;

    let body = app.get_json("/blog").await;

    assert_eq!(slugs(&body), vec!["post-1", "post-2", "post-3", "post-4", "post-5"]);
    assert_eq!(body["source"], "server");
    assert_eq!(body["pagination"]["total_items"], 12);
    assert_eq!(body["pagination"]["total_pages"], 3);
    assert_eq!(body["pagination"]["has_next"], true);
    assert!(body["empty_state"].is_null());
}

#[actix_rt::test]
async fn last_page_holds_the_remainder() {
    let app = TestApp::spawn(numbered_posts(12), vec![], None).await;

    let body = app.get_json("/blog?page=3").await;

    assert_eq!(slugs(&body), vec!["post-11", "post-12"]);
    assert_eq!(body["pagination"]["has_next"], false);
    assert_eq!(body["pagination"]["has_prev"], true);
}

#[actix_rt::test]
async fn page_past_the_end_renders_no_results() {
    let app = TestApp::spawn(numbered_posts(12), vec![], None).await;

    let body = app.get_json("/blog?page=9").await;

    assert!(slugs(&body).is_empty());
    assert_eq!(body["empty_state"], "No posts matched your filters.");
    assert_eq!(body["pagination"]["total_pages"], 3);
}

#[actix_rt::test]
async fn malformed_page_falls_back_to_first() {
    let app = TestApp::spawn(numbered_posts(7), vec![], None).await;

    for query in ["?page=abc", "?page=0", "?page=-2"] {
        let body = app.get_json(&format!("/blog{query}")).await;
        assert_eq!(body["pagination"]["page"], 1, "query {query}");
        assert_eq!(slugs(&body).len(), 5);
    }
}

#[actix_rt::test]
async fn tag_filter_is_exact_and_tag_list_is_sorted() {
    let posts = vec![
        TestPost::new("ownership", 3).tags(&["rust", "memory"]).build(),
        TestPost::new("goroutines", 2).tags(&["go"]).build(),
        TestPost::new("async-rust", 1).tags(&["rust"]).build(),
        TestPost::new("hidden", 4).tags(&["zig"]).draft().build(),
    ];
    let app = TestApp::spawn(posts, vec![], None).await;

    let body = app.get_json("/blog?tag=rust").await;

    assert_eq!(slugs(&body), vec!["ownership", "async-rust"]);
    assert_eq!(body["selected_tag"], "rust");
    assert_eq!(body["pagination"]["total_items"], 2);
    assert_eq!(body["tags"], serde_json::json!(["go", "memory", "rust"]));
}

#[actix_rt::test]
async fn tag_no_post_carries_renders_no_results() {
    let posts = vec![
        TestPost::new("a", 2).tags(&["js"]).build(),
        TestPost::new("b", 1).tags(&["go"]).build(),
    ];
    let app = TestApp::spawn(posts, vec![], None).await;

    let body = app.get_json("/blog?tag=go").await;
    assert_eq!(slugs(&body), vec!["b"]);
    assert!(body["empty_state"].is_null());

    let body = app.get_json("/blog?tag=rust").await;
    assert!(slugs(&body).is_empty());
    assert_eq!(body["selected_tag"], "rust");
    assert_eq!(body["pagination"]["total_items"], 0);
    assert_eq!(body["empty_state"], "No posts matched your filters.");
}

#[actix_rt::test]
async fn search_switches_source_and_matches_title_excerpt_or_tag() {
    let posts = vec![
        TestPost::new("react-tips", 2).title("React tips").tags(&["react"]).build(),
        TestPost::new("go-basics", 1).title("Go basics").tags(&["go"]).build(),
    ];
    let app = TestApp::spawn(posts, vec![], None).await;

    let body = app.get_json("/blog?q=REACT").await;

    assert_eq!(body["source"], "search");
    assert_eq!(body["query"], "REACT");
    assert_eq!(slugs(&body), vec!["react-tips"]);
}

#[actix_rt::test]
async fn search_pages_independently_of_server_page() {
    let app = TestApp::spawn(numbered_posts(12), vec![], None).await;

    let body = app.get_json("/blog?q=post&page=3&search_page=2").await;

    assert_eq!(body["pagination"]["page"], 2);
    assert_eq!(slugs(&body), vec!["post-6", "post-7", "post-8", "post-9", "post-10"]);
}

#[actix_rt::test]
async fn search_without_match_renders_no_results() {
    let app = TestApp::spawn(numbered_posts(3), vec![], None).await;

    let body = app.get_json("/blog?q=kubernetes").await;

    assert!(slugs(&body).is_empty());
    assert_eq!(body["empty_state"], "No posts matched your filters.");
}

#[actix_rt::test]
async fn search_composes_with_tag() {
    let posts = vec![
        TestPost::new("rust-web", 2).title("Web servers").tags(&["rust"]).build(),
        TestPost::new("go-web", 1).title("Web servers in Go").tags(&["go"]).build(),
    ];
    let app = TestApp::spawn(posts, vec![], None).await;

    let body = app.get_json("/blog?q=web&tag=go").await;

    assert_eq!(slugs(&body), vec!["go-web"]);
}

#[actix_rt::test]
async fn detail_renders_html_toc_and_comments() {
    let app = TestApp::spawn(vec![TestPost::new("hello-world", 0).build()], vec![], None).await;

    let response = app.get("/blog/hello-world").await;
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.unwrap();

    let toc: Vec<&str> = body["toc"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["id"].as_str().unwrap())
        .collect();
    assert_eq!(toc, vec!["overview", "details"]);
    assert!(body["content_html"].as_str().unwrap().contains(r#"<h2 id="overview">"#));
    assert_eq!(body["comments"]["provider"], "giscus");
    assert_eq!(body["comments"]["term"], "/blog/hello-world");
}

#[actix_rt::test]
async fn detail_without_headings_has_no_toc() {
    let post = TestPost::new("plain", 0).content(Some("Just one paragraph.")).build();
    let app = TestApp::spawn(vec![post], vec![], None).await;

    let body = app.get_json("/blog/plain").await;

    assert!(body["toc"].is_null());
}

#[actix_rt::test]
async fn missing_draft_or_empty_posts_are_not_found() {
    let posts = vec![
        TestPost::new("draft", 0).draft().build(),
        TestPost::new("empty", 1).content(None).build(),
        TestPost::new("blank", 2).content(Some("   ")).build(),
    ];
    let app = TestApp::spawn(posts, vec![], None).await;

    for slug in ["nope", "draft", "empty", "blank"] {
        let response = app.get(&format!("/blog/{slug}")).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "slug {slug}");
    }
}

#[actix_rt::test]
async fn view_endpoint_increments_each_call() {
    let app = TestApp::spawn(vec![TestPost::new("counted", 0).build()], vec![], None).await;
    let path = "/api/v1/blog/posts/counted/views";

    let first: Value = app.post_json(path, &serde_json::json!({})).await.json().await.unwrap();
    let second: Value = app.post_json(path, &serde_json::json!({})).await.json().await.unwrap();

    assert_eq!(first["view_count"], 1);
    assert_eq!(second["view_count"], 2);

    let detail = app.get_json("/blog/counted").await;
    assert_eq!(detail["view_count"], 2);
}

#[actix_rt::test]
async fn view_for_unknown_slug_is_not_found() {
    let app = TestApp::spawn(vec![], vec![], None).await;

    let response = app
        .post_json("/api/v1/blog/posts/ghost/views", &serde_json::json!({}))
        .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[actix_rt::test]
async fn slugs_and_tags_endpoints_list_published_content() {
    let posts = vec![
        TestPost::new("b-post", 2).tags(&["web"]).build(),
        TestPost::new("a-post", 1).tags(&["cli", "web"]).build(),
        TestPost::new("secret", 3).tags(&["hidden"]).draft().build(),
    ];
    let app = TestApp::spawn(posts, vec![], None).await;

    assert_eq!(app.get_json("/api/v1/blog/slugs").await, serde_json::json!(["b-post", "a-post"]));
    assert_eq!(app.get_json("/api/v1/blog/tags").await, serde_json::json!(["cli", "web"]));
}

#[actix_rt::test]
async fn sitemap_lists_static_pages_and_published_posts() {
    let posts = vec![
        TestPost::new("public", 0).build(),
        TestPost::new("private", 1).draft().build(),
    ];
    let app = TestApp::spawn(posts, vec![], None).await;

    let response = app.get("/sitemap.xml").await;
    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response.headers()["content-type"].to_str().unwrap().to_string();
    assert!(content_type.starts_with("application/xml"));

    let xml = response.text().await.unwrap();
    assert!(xml.contains("<loc>https://folio.test/projects</loc>"));
    assert!(xml.contains("<loc>https://folio.test/blog/public</loc>"));
    assert!(xml.contains("<lastmod>2024-01-01T09:00:00Z</lastmod>"));
    assert!(!xml.contains("private"));
}

#[actix_rt::test]
async fn robots_allows_all_and_points_at_sitemap() {
    let app = TestApp::spawn(vec![], vec![], None).await;

    let robots = app.get("/robots.txt").await.text().await.unwrap();

    assert!(robots.contains("User-Agent: *"));
    assert!(robots.contains("Sitemap: https://folio.test/sitemap.xml"));
}

#[actix_rt::test]
async fn trailing_slash_is_normalized() {
    let app = TestApp::spawn(numbered_posts(2), vec![], None).await;

    let response = app.get("/blog/").await;

    assert_eq!(response.status(), StatusCode::OK);
}
