//! End-to-end tests for the field presence gate on the submit route.

use serde_json::{json, Value};

use fieldgate::config::ServiceConfig;
use fieldgate::validation::DataSource;

mod common;

fn client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}

#[tokio::test]
async fn test_complete_submission_passes() {
    let service = common::spawn_service(ServiceConfig::default()).await;

    let res = client()
        .post(service.url("/submit"))
        .json(&json!({"name": "Ann", "email": "a@b.com", "password": "x"}))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 200);
    assert_eq!(
        res.json::<Value>().await.unwrap(),
        json!({"message": "Fields are valid!"})
    );

    service.stop();
}

#[tokio::test]
async fn test_empty_and_absent_fields_rejected_in_order() {
    let service = common::spawn_service(ServiceConfig::default()).await;

    let res = client()
        .post(service.url("/submit"))
        .json(&json!({"name": "", "email": "a@b.com"}))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 400);
    assert_eq!(
        res.json::<Value>().await.unwrap(),
        json!({
            "error": "Missing or empty fields",
            "missingFields": ["name", "password"]
        })
    );

    service.stop();
}

#[tokio::test]
async fn test_whitespace_only_value_counts_as_missing() {
    let service = common::spawn_service(ServiceConfig::default()).await;

    let res = client()
        .post(service.url("/submit"))
        .json(&json!({"name": "  ", "email": "a@b.com", "password": "x"}))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 400);
    assert_eq!(
        res.json::<Value>().await.unwrap()["missingFields"],
        json!(["name"])
    );

    service.stop();
}

#[tokio::test]
async fn test_query_gate_survives_absent_query_string() {
    let mut config = ServiceConfig::default();
    config.validation.fields = vec!["token".to_string()];
    config.validation.source = DataSource::Query;
    let service = common::spawn_service(config).await;

    let res = client()
        .post(service.url("/submit"))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 400);
    assert_eq!(
        res.json::<Value>().await.unwrap(),
        json!({
            "error": "Missing or empty fields",
            "missingFields": ["token"]
        })
    );

    service.stop();
}

#[tokio::test]
async fn test_query_gate_passes_with_token_present() {
    let mut config = ServiceConfig::default();
    config.validation.fields = vec!["token".to_string()];
    config.validation.source = DataSource::Query;
    let service = common::spawn_service(config).await;

    let res = client()
        .post(service.url("/submit?token=abc"))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 200);

    service.stop();
}

#[tokio::test]
async fn test_numeric_zero_counts_as_missing() {
    let service = common::spawn_service(ServiceConfig::default()).await;

    let res = client()
        .post(service.url("/submit"))
        .json(&json!({"name": "Ann", "email": "a@b.com", "password": 0}))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 400);
    assert_eq!(
        res.json::<Value>().await.unwrap()["missingFields"],
        json!(["password"])
    );

    service.stop();
}

#[tokio::test]
async fn test_missing_body_reports_every_field() {
    let service = common::spawn_service(ServiceConfig::default()).await;

    let res = client()
        .post(service.url("/submit"))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 400);
    assert_eq!(
        res.json::<Value>().await.unwrap()["missingFields"],
        json!(["name", "email", "password"])
    );

    service.stop();
}

#[tokio::test]
async fn test_urlencoded_form_passes_the_gate() {
    let service = common::spawn_service(ServiceConfig::default()).await;

    let res = client()
        .post(service.url("/submit"))
        .form(&[("name", "Ann"), ("email", "a@b.com"), ("password", "x")])
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 200);

    service.stop();
}

#[tokio::test]
async fn test_other_routes_are_not_gated() {
    let service = common::spawn_service(ServiceConfig::default()).await;

    let res = client().get(service.url("/health")).send().await.unwrap();

    assert_eq!(res.status(), 200);

    service.stop();
}
