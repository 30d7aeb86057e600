//! Dead-link removal, with a stub checker and with the HTTP checker.

mod common;

use common::{topics, today, FixedClock, SpyProvider, StubLinkChecker, VALID_ITEMS};
use std::sync::Arc;
use trendpulse::config::ReporterConfig;
use trendpulse::domain::entities::report_item::ReportItem;
use trendpulse::domain::entities::report_result::ReportResult;
use trendpulse::domain::ports::link_checker::LinkChecker;
use trendpulse::domain::values::time_frame::TimeFrame;
use trendpulse::infrastructure::http::link_checker::HttpLinkChecker;
use trendpulse::TrendPulse;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_dead_links_are_dropped() {
    let checker = StubLinkChecker::new(&["https://tech.example.org/article/micro-texture"]);
    let tp = TrendPulse::with_providers(
        ReporterConfig::with_api_key("k"),
        SpyProvider::text(VALID_ITEMS),
        Arc::new(FixedClock(today())),
        checker.clone(),
    );

    let mut report = tp
        .generate_trend_report(&topics(&["CMF Design"]), TimeFrame::Any)
        .await
        .unwrap();
    let dropped = tp.verify_links(&mut report).await;

    assert_eq!(dropped, 1);
    assert_eq!(report.items.len(), 1);
    assert_eq!(report.items[0].source, "Example Design");
}

#[tokio::test]
async fn test_items_without_links_are_kept_unchecked() {
    let checker = StubLinkChecker::new(&[]);
    let tp = TrendPulse::with_providers(
        ReporterConfig::with_api_key("k"),
        SpyProvider::text("[]"),
        Arc::new(FixedClock(today())),
        checker.clone(),
    );
    let mut report = ReportResult::new(
        "r".into(),
        topics(&["UI"]),
        today(),
        TimeFrame::Any,
        vec![
            ReportItem {
                title: "no link".into(),
                ..Default::default()
            },
            ReportItem {
                title: "null link".into(),
                url: "null".into(),
                ..Default::default()
            },
        ],
    );

    assert_eq!(tp.verify_links(&mut report).await, 0);
    assert_eq!(report.items.len(), 2);
    assert!(checker.checked().is_empty());
}

#[tokio::test]
async fn test_http_checker_only_rejects_404() {
    let server = MockServer::start().await;
    Mock::given(method("HEAD"))
        .and(path("/gone"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;
    Mock::given(method("HEAD"))
        .and(path("/ok"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;
    Mock::given(method("HEAD"))
        .and(path("/blocked"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;

    let checker = HttpLinkChecker::new();
    assert!(!checker.is_alive(&format!("{}/gone", server.uri())).await);
    assert!(checker.is_alive(&format!("{}/ok", server.uri())).await);
    assert!(checker.is_alive(&format!("{}/blocked", server.uri())).await);
}

#[tokio::test]
async fn test_http_checker_keeps_unreachable_links() {
    let checker = HttpLinkChecker::new();
    assert!(checker.is_alive("http://127.0.0.1:9/article").await);
}
