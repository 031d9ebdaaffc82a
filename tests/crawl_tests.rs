//! Integration tests for crawl mode
//!
//! These tests use wiremock to serve small sites and check traversal order,
//! scope filtering and the abort-on-failure behaviour end-to-end.

use page_harvest::config::Config;
use page_harvest::crawler::{build_http_client, run_crawl, Crawler};
use page_harvest::storage::read_url_list;
use page_harvest::url::Scope;
use page_harvest::{ConfigError, FetchError, HarvestError};
use std::time::Duration;
use url::Url;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn html_page(body: &str) -> ResponseTemplate {
    ResponseTemplate::new(200)
        .set_body_string(format!("<html><body>{}</body></html>", body))
        .insert_header("content-type", "text/html")
}

async fn mount_page(server: &MockServer, page_path: &str, body: &str) {
    Mock::given(method("GET"))
        .and(path(page_path))
        .respond_with(html_page(body))
        .mount(server)
        .await;
}

fn crawler_for(seed: &str, scope: &str) -> Crawler {
    let client = build_http_client(Duration::from_secs(5)).expect("Failed to build client");
    Crawler::new(
        client,
        Url::parse(seed).expect("Failed to parse seed"),
        Scope::new(scope),
    )
}

fn as_strings(urls: &[Url]) -> Vec<String> {
    urls.iter().map(|u| u.to_string()).collect()
}

#[tokio::test]
async fn test_two_page_site_skips_out_of_scope_link() {
    let server = MockServer::start().await;
    let base = server.uri();

    mount_page(
        &server,
        "/",
        r#"<a href="/b">B</a> <a href="https://out-of-scope.example.org/c">C</a>"#,
    )
    .await;
    mount_page(&server, "/b", "<p>No links here</p>").await;

    let crawler = crawler_for(&format!("{}/", base), &format!("{}/", base));
    let mut sink: Vec<Url> = Vec::new();
    let visited = crawler.crawl(&mut sink).await.expect("Crawl failed");

    assert_eq!(
        as_strings(&visited),
        vec![format!("{}/", base), format!("{}/b", base)]
    );
    assert_eq!(sink, visited);
}

#[tokio::test]
async fn test_preorder_depth_first_without_duplicates() {
    let server = MockServer::start().await;
    let base = server.uri();

    mount_page(&server, "/", r#"<a href="/a">A</a><a href="/b">B</a>"#).await;
    mount_page(&server, "/a", r#"<a href="/a1">A1</a><a href="/">Home</a>"#).await;
    mount_page(&server, "/a1", r#"<a href="/b">B</a>"#).await;
    mount_page(&server, "/b", r#"<a href="/a">A</a><a href="/c">C</a>"#).await;
    mount_page(&server, "/c", "").await;

    let crawler = crawler_for(&format!("{}/", base), &format!("{}/", base));
    let mut sink: Vec<Url> = Vec::new();
    let visited = crawler.crawl(&mut sink).await.expect("Crawl failed");

    // "/b" is reached through "/a1" before the seed's own "/b" link
    assert_eq!(
        as_strings(&visited),
        vec![
            format!("{}/", base),
            format!("{}/a", base),
            format!("{}/a1", base),
            format!("{}/b", base),
            format!("{}/c", base),
        ]
    );
}

#[tokio::test]
async fn test_every_url_within_scope_prefix() {
    let server = MockServer::start().await;
    let base = server.uri();

    mount_page(
        &server,
        "/docs/",
        r#"<a href="/docs/intro">Intro</a><a href="/blog/post">Blog</a>"#,
    )
    .await;
    mount_page(&server, "/docs/intro", r#"<a href="/pricing">Pricing</a>"#).await;

    let scope = format!("{}/docs/", base);
    let crawler = crawler_for(&scope, &scope);
    let mut sink: Vec<Url> = Vec::new();
    let visited = crawler.crawl(&mut sink).await.expect("Crawl failed");

    assert_eq!(visited.len(), 2);
    assert_eq!(visited[0].as_str(), scope);
    for url in &visited {
        assert!(url.as_str().starts_with(&scope), "{} escaped scope", url);
    }
}

#[tokio::test]
async fn test_links_resolve_against_seed_url() {
    let server = MockServer::start().await;
    let base = server.uri();

    mount_page(&server, "/", r#"<a href="sub/">Sub</a>"#).await;
    // Relative to the seed this is /page, not /sub/page
    mount_page(&server, "/sub/", r#"<a href="page">Page</a>"#).await;
    mount_page(&server, "/page", "").await;

    let crawler = crawler_for(&format!("{}/", base), &format!("{}/", base));
    let mut sink: Vec<Url> = Vec::new();
    let visited = crawler.crawl(&mut sink).await.expect("Crawl failed");

    assert_eq!(
        as_strings(&visited),
        vec![
            format!("{}/", base),
            format!("{}/sub/", base),
            format!("{}/page", base),
        ]
    );
}

#[tokio::test]
async fn test_fetch_failure_aborts_and_keeps_partial_list() {
    let server = MockServer::start().await;
    let base = server.uri();

    mount_page(
        &server,
        "/",
        r#"<a href="/ok">OK</a><a href="/missing">Missing</a><a href="/never">Never</a>"#,
    )
    .await;
    mount_page(&server, "/ok", "").await;
    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/never"))
        .respond_with(html_page(""))
        .expect(0)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let list_path = dir.path().join("webpages.txt");

    let mut config = Config::default();
    config.crawl.seed_url = Some(format!("{}/", base));
    config.crawl.url_list_path = list_path.to_string_lossy().into_owned();

    let result = run_crawl(&config).await;
    match result {
        Err(HarvestError::Fetch(FetchError::Status { status, url })) => {
            assert_eq!(status, 404);
            assert_eq!(url, format!("{}/missing", base));
        }
        other => panic!("Expected a 404 fetch error, got {:?}", other),
    }

    let written = read_url_list(&list_path).expect("Failed to read list");
    assert_eq!(written, vec![format!("{}/", base), format!("{}/ok", base)]);
}

#[tokio::test]
async fn test_seed_failure_writes_nothing() {
    let server = MockServer::start().await;
    let base = server.uri();

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let list_path = dir.path().join("webpages.txt");

    let mut config = Config::default();
    config.crawl.seed_url = Some(format!("{}/", base));
    config.crawl.url_list_path = list_path.to_string_lossy().into_owned();

    assert!(run_crawl(&config).await.is_err());
    assert!(read_url_list(&list_path).expect("List file missing").is_empty());
}

#[tokio::test]
async fn test_run_crawl_writes_list_file() {
    let server = MockServer::start().await;
    let base = server.uri();

    mount_page(&server, "/", r#"<a href="/about">About</a>"#).await;
    mount_page(&server, "/about", r#"<a href="/">Home</a>"#).await;

    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let list_path = dir.path().join("webpages.txt");

    let mut config = Config::default();
    config.crawl.seed_url = Some(format!("{}/", base));
    config.crawl.url_list_path = list_path.to_string_lossy().into_owned();

    let visited = run_crawl(&config).await.expect("Crawl failed");
    assert_eq!(visited.len(), 2);

    let content = std::fs::read_to_string(&list_path).expect("Failed to read list");
    assert_eq!(
        content,
        format!("URL : {}/\nURL : {}/about\n", base, base)
    );
}

#[tokio::test]
async fn test_seed_outside_scope_is_rejected() {
    let server = MockServer::start().await;
    let base = server.uri();

    Mock::given(method("GET"))
        .respond_with(html_page(r#"<a href="/docs/a">Docs</a>"#))
        .expect(0)
        .mount(&server)
        .await;

    let crawler = crawler_for(&format!("{}/home", base), &format!("{}/docs/", base));
    let mut sink: Vec<Url> = Vec::new();
    let result = crawler.crawl(&mut sink).await;

    assert!(matches!(
        result,
        Err(HarvestError::Config(ConfigError::Validation(_)))
    ));
    assert!(sink.is_empty());

    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let list_path = dir.path().join("webpages.txt");

    let mut config = Config::default();
    config.crawl.seed_url = Some(format!("{}/home", base));
    config.crawl.scope_prefix = Some(format!("{}/docs/", base));
    config.crawl.url_list_path = list_path.to_string_lossy().into_owned();

    assert!(run_crawl(&config).await.is_err());
    assert!(!list_path.exists());
}
