//! Integration tests for domain-sift

use std::time::Duration;

use assert_cmd::Command;
use httpmock::prelude::*;
use predicates::prelude::*;
use serde_json::json;
use tempfile::TempDir;

use domain_sift::{
    config::{FetchConfig, ReportConfig},
    DomainSiftError, DumpSource, DumpWriter, ListingSource, NameClassifier, PatternTag, Pipeline,
    RegistrarClient, StrategyKind,
};

const LANDING: &str = "<html><script>var csrftoken = 'tok123';</script></html>";

fn fetch_config(server: &MockServer) -> FetchConfig {
    FetchConfig {
        base_url: server.base_url(),
        page_size: 2,
        max_pages: 5,
        request_delay: Duration::ZERO,
        max_retries: 2,
        backoff: Duration::ZERO,
        timeout: Duration::from_secs(5),
        ..Default::default()
    }
}

fn item(domain: &str, tld: &str, price: f64) -> serde_json::Value {
    json!({"domain": domain, "tld": tld, "price": price, "price_renewal": price})
}

#[test]
fn test_classifier_properties() {
    let classifier = NameClassifier::new(StrategyKind::Lexicon);

    let lower = classifier.classify("radar");
    let upper = classifier.classify("RADAR");
    assert!(lower.has(PatternTag::Palindrome));
    assert_eq!(lower.tags, upper.tags);

    assert!(classifier.classify("aabbc").has(PatternTag::DoubleStart));

    let house = classifier.classify("house");
    assert!(house.matched);
    assert!(house.has(PatternTag::Word));

    let hex = classifier.classify("0xcat");
    assert!(hex.has(PatternTag::HasNumbers));
    assert!(hex.has(PatternTag::HexLike));

    assert!(!classifier.classify("").matched);
    assert!(!classifier.classify("café").matched);
}

#[test]
fn test_leet_strategy() {
    let classifier = NameClassifier::new(StrategyKind::Leet);
    assert_eq!(classifier.classify("l33t5").tags, vec![PatternTag::LeetLike]);
    assert!(!classifier.classify("abcde").matched);
}

#[tokio::test]
async fn test_dump_to_report() {
    let dir = TempDir::new().unwrap();
    let dump_path = dir.path().join("dump.jsonl");

    let mut writer = DumpWriter::create(&dump_path).unwrap();
    writer
        .write_page(&json!({"urls": [item("radar", "com", 4.0), item("qwrtz", "com", 1.0)]}))
        .unwrap();
    writer
        .write_page(&json!({"data": [["house.io", 5, "2.50", "3.00"], ["radar.com", 5, "1.00", "1.00"]]}))
        .unwrap();
    drop(writer);

    let config = ReportConfig {
        output_dir: dir.path().join("output"),
        ..Default::default()
    };
    let pipeline = Pipeline::new(NameClassifier::default(), config);
    let mut source = DumpSource::new(&dump_path);
    let report = pipeline.run(&mut source).await.unwrap();

    assert_eq!(report.total_listings, 4);
    assert_eq!(report.unique_listings, 3);
    let domains: Vec<_> = report.entries.iter().map(|e| e.domain.as_str()).collect();
    assert_eq!(domains, vec!["house.io", "radar.com"]);
    // first occurrence wins
    assert_eq!(report.entries[1].price, 4.0);

    pipeline.persist(&report).unwrap();
    let csv = std::fs::read_to_string(pipeline.config().csv_path()).unwrap();
    assert!(csv.starts_with("domain,price,renewal,tld,reasons"));
    assert!(csv.contains("radar.com,4.00,4.00,com,palindrome"));
}

#[tokio::test]
async fn test_registrar_pages_until_short_page() {
    let server = MockServer::start();

    let landing = server.mock(|when, then| {
        when.method(GET).path("/");
        then.status(200).body(LANDING);
    });
    let first = server.mock(|when, then| {
        when.method(POST)
            .path("/urls/")
            .header("x-csrftoken", "tok123")
            .header("x-requested-with", "XMLHttpRequest")
            .x_www_form_urlencoded_tuple("start", "0");
        then.status(200)
            .json_body(json!({"recordsTotal": 3, "urls": [item("radar", "com", 1.0), item("house", "io", 2.0)]}));
    });
    let second = server.mock(|when, then| {
        when.method(POST)
            .path("/urls/")
            .x_www_form_urlencoded_tuple("start", "2");
        then.status(200)
            .json_body(json!({"recordsTotal": 3, "urls": [item("aabbc", "net", 3.0)]}));
    });

    let dir = TempDir::new().unwrap();
    let dump_path = dir.path().join("dump.jsonl");
    let mut client = RegistrarClient::new(fetch_config(&server))
        .unwrap()
        .with_dump(DumpWriter::create(&dump_path).unwrap());

    let pages = std::sync::Mutex::new(Vec::new());
    let listings = client
        .fetch_all(|p| pages.lock().unwrap().push((p.page, p.collected)))
        .await
        .unwrap();

    landing.assert();
    first.assert();
    second.assert();
    assert_eq!(listings.len(), 3);
    assert_eq!(*pages.lock().unwrap(), vec![(1, 2), (2, 3)]);
    assert_eq!(client.dump().unwrap().pages_written(), 2);
    drop(client);

    let replayed = DumpSource::new(&dump_path).fetch_listings().await.unwrap();
    assert_eq!(replayed, listings);
}

#[tokio::test]
async fn test_registrar_stops_on_empty_page() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/");
        then.status(200).body(LANDING);
    });
    let search = server.mock(|when, then| {
        when.method(POST).path("/urls/");
        then.status(200).json_body(json!({"urls": []}));
    });

    let mut client = RegistrarClient::new(fetch_config(&server)).unwrap();
    let listings = client.fetch_listings().await.unwrap();

    assert!(listings.is_empty());
    search.assert_hits(1);
}

#[tokio::test]
async fn test_registrar_retries_server_errors() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/");
        then.status(200).body(LANDING);
    });
    let search = server.mock(|when, then| {
        when.method(POST).path("/urls/");
        then.status(503);
    });

    let mut client = RegistrarClient::new(fetch_config(&server)).unwrap();
    let err = client.fetch_listings().await.unwrap_err();

    // one attempt plus two retries
    search.assert_hits(3);
    assert!(matches!(err, DomainSiftError::Network { status_code: Some(503), .. }));
}

#[tokio::test]
async fn test_registrar_forbidden_is_fatal() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/");
        then.status(200).body(LANDING);
    });
    let search = server.mock(|when, then| {
        when.method(POST).path("/urls/");
        then.status(403);
    });

    let mut client = RegistrarClient::new(fetch_config(&server)).unwrap();
    let err = client.fetch_listings().await.unwrap_err();

    search.assert_hits(1);
    assert!(err.is_fatal());
}

#[tokio::test]
async fn test_registrar_timeout_reports_configured_limit() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/");
        then.status(200).body(LANDING);
    });
    server.mock(|when, then| {
        when.method(POST).path("/urls/");
        then.status(200)
            .delay(Duration::from_secs(3))
            .json_body(json!({"urls": []}));
    });

    let config = FetchConfig {
        max_retries: 0,
        timeout: Duration::from_secs(1),
        ..fetch_config(&server)
    };
    let mut client = RegistrarClient::new(config).unwrap();
    let err = client.fetch_listings().await.unwrap_err();

    assert!(matches!(err, DomainSiftError::Timeout { timeout_secs: 1, .. }));
    assert!(err.user_message().contains("1s"));
}

#[tokio::test]
async fn test_registrar_missing_token() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/");
        then.status(200).body("<html>maintenance</html>");
    });

    let mut client = RegistrarClient::new(fetch_config(&server)).unwrap();
    let err = client.open_session().await.unwrap_err();
    assert!(matches!(err, DomainSiftError::Session { .. }));
}

#[test]
fn test_cli_classify() {
    let dir = TempDir::new().unwrap();
    Command::cargo_bin("domain-sift")
        .unwrap()
        .current_dir(dir.path())
        .args(["classify", "radar", "qwrtz"])
        .assert()
        .success()
        .stdout(predicate::str::contains("palindrome"))
        .stdout(predicate::str::contains("no pattern"));
}

#[test]
fn test_cli_rejects_unknown_strategy() {
    let dir = TempDir::new().unwrap();
    Command::cargo_bin("domain-sift")
        .unwrap()
        .current_dir(dir.path())
        .args(["--strategy", "magic", "classify", "radar"])
        .assert()
        .failure();
}

#[test]
fn test_cli_report_from_dump() {
    let dir = TempDir::new().unwrap();
    let dump_path = dir.path().join("dump.jsonl");
    std::fs::write(
        &dump_path,
        format!(
            "{}\n",
            json!({"urls": [item("radar", "com", 1.0), item("l33t5", "io", 2.0)]})
        ),
    )
    .unwrap();
    let output_dir = dir.path().join("out");

    Command::cargo_bin("domain-sift")
        .unwrap()
        .current_dir(dir.path())
        .args(["--strategy", "composite", "report", "--input"])
        .arg(&dump_path)
        .arg("--output-dir")
        .arg(&output_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("radar.com"))
        .stdout(predicate::str::contains("leet_like"));

    assert!(output_dir.join("domains_interesting.json").exists());
    assert!(output_dir.join("domains_interesting.csv").exists());
}

#[test]
fn test_cli_fetch_sends_configured_filters() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/");
        then.status(200).body(LANDING);
    });
    let search = server.mock(|when, then| {
        when.method(POST)
            .path("/urls/")
            .x_www_form_urlencoded_tuple("price", "50")
            .x_www_form_urlencoded_tuple("price_renewal", "50")
            .x_www_form_urlencoded_tuple("has_number", "1");
        then.status(200).json_body(json!({"urls": []}));
    });

    let dir = TempDir::new().unwrap();
    Command::cargo_bin("domain-sift")
        .unwrap()
        .current_dir(dir.path())
        .env("SIFT_BASE_URL", server.base_url())
        .env("SIFT_REQUEST_DELAY_MS", "0")
        .args(["--max-price", "50", "--has-number", "yes", "fetch", "--max-pages", "1"])
        .arg("--dump")
        .arg(dir.path().join("dump.jsonl"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Fetched 0 listings"));

    search.assert();
}
