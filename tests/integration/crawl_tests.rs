use crate::{crawler_with, html, test_crawler};
use site_indexer::config::{CrawlerConfig, UserAgentConfig};
use site_indexer::crawler::{Fetcher, HttpFetcher, PageOutcome};
use std::time::Duration;
use url::Url;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_crawl_stays_on_seed_domain() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html(
            r#"<html><body>
                <h1>Welcome!</h1>
                <a href="/about">About Us</a>
                <a href="https://www.external.com">External Link</a>
            </body></html>"#,
        ))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/about"))
        .respond_with(html("<html><body>About page</body></html>"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let report = test_crawler().crawl(&base_url).await.expect("Crawl failed");

    let visited: Vec<&str> = report.visited.iter().collect();
    assert_eq!(
        visited,
        vec![format!("{}/", base_url), format!("{}/about", base_url)]
    );
    assert!(!report.visited.contains("https://www.external.com/"));
    assert_eq!(report.index.len(), 2);
    assert_eq!(
        report.index.get(&format!("{}/about", base_url)),
        Some("About page")
    );
}

#[tokio::test]
async fn test_self_link_fetched_once() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html(&format!(
            r#"<html><body><a href="{}">Go to Example</a></body></html>"#,
            base_url
        )))
        .expect(1)
        .mount(&mock_server)
        .await;

    let report = test_crawler().crawl(&base_url).await.expect("Crawl failed");

    assert_eq!(report.visited.len(), 1);
}

#[tokio::test]
async fn test_non_html_seed_not_indexed() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(b"%PDF-1.4".to_vec(), "application/pdf"),
        )
        .mount(&mock_server)
        .await;

    let report = test_crawler().crawl(&base_url).await.expect("Crawl failed");
    let seed = format!("{}/", base_url);

    assert!(report.visited.contains(&seed));
    assert!(!report.index.contains(&seed));
    assert!(matches!(
        report.outcome(&seed),
        Some(PageOutcome::SkippedNonHtml { .. })
    ));
}

#[tokio::test]
async fn test_non_html_body_not_downloaded() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/doc.pdf"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(vec![0xff; 64 * 1024], "application/pdf"),
        )
        .mount(&mock_server)
        .await;

    let fetcher = HttpFetcher::from_config(&CrawlerConfig::default(), &UserAgentConfig::default())
        .expect("Failed to build fetcher");
    let url = Url::parse(&format!("{}/doc.pdf", mock_server.uri())).unwrap();
    let page = fetcher.fetch(&url).await.expect("Fetch failed");

    assert!(!page.is_html());
    assert!(page.body.is_empty());
    assert_eq!(page.status, 200);
    assert_eq!(page.content_type.as_deref(), Some("application/pdf"));
}

#[tokio::test]
async fn test_seed_looked_up_as_given() {
    let mock_server = MockServer::start().await;
    // No trailing slash
    let base_url = mock_server.uri();

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html(""))
        .mount(&mock_server)
        .await;

    let report = test_crawler().crawl(&base_url).await.expect("Crawl failed");

    assert_eq!(report.index.get(&base_url), Some(""));
    assert!(report.visited.contains(&base_url));
    assert_eq!(report.outcome(&base_url), Some(&PageOutcome::Indexed));
}

#[tokio::test]
async fn test_empty_html_body() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html(""))
        .mount(&mock_server)
        .await;

    let report = test_crawler().crawl(&base_url).await.expect("Crawl failed");

    assert_eq!(report.index.len(), 1);
    assert_eq!(report.index.get(&format!("{}/", base_url)), Some(""));
}

#[tokio::test]
async fn test_malformed_link_not_crawled() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html(
            "<html><body><a href='htp://example.com'>Broken Link</a></body></html>",
        ))
        .expect(1)
        .mount(&mock_server)
        .await;

    let report = test_crawler().crawl(&base_url).await.expect("Crawl failed");

    assert!(!report.visited.contains("htp://example.com"));
    assert_eq!(report.statistics.links_malformed, 1);
}

#[tokio::test]
async fn test_unreachable_seed_reports_failure() {
    // Nothing listens on port 1
    let report = test_crawler()
        .crawl("http://127.0.0.1:1/")
        .await
        .expect("Crawl failed");

    assert_eq!(report.visited.len(), 1);
    assert!(report.index.is_empty());
    assert!(matches!(
        report.outcome("http://127.0.0.1:1/"),
        Some(PageOutcome::FetchFailed { .. })
    ));
}

#[tokio::test]
async fn test_timeout_is_confined_to_one_page() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html(r#"<a href="/slow">slow</a><a href="/fast">fast</a>"#))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(html("too late").set_delay(Duration::from_secs(3)))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/fast"))
        .respond_with(html("quick"))
        .mount(&mock_server)
        .await;

    let crawler = crawler_with(CrawlerConfig {
        request_timeout_secs: 1,
        connect_timeout_secs: 1,
        ..CrawlerConfig::default()
    });
    let report = crawler.crawl(&base_url).await.expect("Crawl failed");

    assert_eq!(report.visited.len(), 3);
    assert!(!report.index.contains(&format!("{}/slow", base_url)));
    assert_eq!(report.index.get(&format!("{}/fast", base_url)), Some("quick"));
    assert_eq!(report.statistics.fetch_failures, 1);
}

#[tokio::test]
async fn test_error_status_with_html_is_indexed() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html(r#"<a href="/missing">missing</a>"#))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_raw(b"<p>Not Found</p>".to_vec(), "text/html"),
        )
        .mount(&mock_server)
        .await;

    let report = test_crawler().crawl(&base_url).await.expect("Crawl failed");

    assert_eq!(
        report.index.get(&format!("{}/missing", base_url)),
        Some("Not Found")
    );
}

#[tokio::test]
async fn test_page_budget_limits_requests() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    let links: String = (0..20)
        .map(|i| format!(r#"<a href="/page{}">{}</a>"#, i, i))
        .collect();

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html(&links))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .respond_with(html("leaf"))
        .mount(&mock_server)
        .await;

    let crawler = crawler_with(CrawlerConfig {
        max_pages: Some(5),
        ..CrawlerConfig::default()
    });
    let report = crawler.crawl(&base_url).await.expect("Crawl failed");

    assert_eq!(report.visited.len(), 5);
    assert!(report.statistics.budget_exhausted);

    let requests = mock_server
        .received_requests()
        .await
        .expect("Request recording disabled");
    assert_eq!(requests.len(), 5);
}
