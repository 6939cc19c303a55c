use crate::{html, test_crawler};
use site_indexer::config::parse_config;
use site_indexer::crawler::crawl;
use site_indexer::print_results;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer};

async fn mount_site(mock_server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html(
            r#"<html><head><title>Home</title></head><body>
                <p>Welcome to the Test site</p>
                <a href="/guide">Guide</a>
                <a href="/blog">Blog</a>
            </body></html>"#,
        ))
        .mount(mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/guide"))
        .respond_with(html(
            r#"<html><body><p>testing, TESTING, test test test</p>
                <a href="/">Home</a></body></html>"#,
        ))
        .mount(mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/blog"))
        .respond_with(html("<html><body><p>Nothing relevant</p></body></html>"))
        .mount(mock_server)
        .await;
}

#[tokio::test]
async fn test_crawl_then_search() {
    let mock_server = MockServer::start().await;
    mount_site(&mock_server).await;
    let base_url = mock_server.uri();

    let report = test_crawler().crawl(&base_url).await.expect("Crawl failed");
    let results = report.search("TEST");

    assert_eq!(
        results.urls(),
        [format!("{}/", base_url), format!("{}/guide", base_url)]
    );
}

#[tokio::test]
async fn test_empty_keyword_returns_every_indexed_page() {
    let mock_server = MockServer::start().await;
    mount_site(&mock_server).await;
    let base_url = mock_server.uri();

    let report = test_crawler().crawl(&base_url).await.expect("Crawl failed");
    let results = report.search("");

    assert_eq!(results.len(), 3);
    assert!(results.iter().eq(report.index.urls()));
}

#[tokio::test]
async fn test_missing_keyword_prints_no_results() {
    let mock_server = MockServer::start().await;
    mount_site(&mock_server).await;

    let report = test_crawler()
        .crawl(&mock_server.uri())
        .await
        .expect("Crawl failed");
    let results = report.search("zebra");

    let mut out = Vec::new();
    print_results(&results, &mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "No results found.\n");
}

#[tokio::test]
async fn test_configured_crawl() {
    let mock_server = MockServer::start().await;
    mount_site(&mock_server).await;
    let base_url = mock_server.uri();

    let config = parse_config(&format!(
        r#"
[crawler]
traversal = "breadth-first"
request-timeout-secs = 5

[search]
seed-url = "{}"
keyword = "relevant"
"#,
        base_url
    ))
    .expect("Invalid config");

    let report = crawl(&config).await.expect("Crawl failed");
    let results = report.search(&config.search.keyword);

    assert_eq!(results.urls(), [format!("{}/blog", base_url)]);
    assert_eq!(report.index.len(), 3);
}
