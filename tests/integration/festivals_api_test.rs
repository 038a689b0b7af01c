// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::{fixture_body, local_settings, start_festivals_server, JSON_UTF8};
use axum::http::StatusCode;
use festival_contract::domain::services::contract_service::{
    CheckOutcome, ContractService, CHECK_CONTENTS, CHECK_CONTENT_TYPE, CHECK_STATUS_CODE,
};
use festival_contract::infrastructure::fixture_loader::FixtureLoader;
use festival_contract::utils::errors::ContractError;
use std::io::Write;

/// 本地接口返回与夹具相同的数据时三项检查全部通过
#[tokio::test]
async fn test_identical_response_passes_every_check() {
    let endpoint = start_festivals_server(StatusCode::OK, JSON_UTF8, fixture_body()).await;
    let service = ContractService::from_settings(&local_settings(&endpoint)).unwrap();

    let report = service.verify_all().await;

    assert!(report.is_success(), "{:?}", report);
    assert!(matches!(
        report.get(CHECK_CONTENTS),
        Some(Ok(CheckOutcome::Passed))
    ));
}

#[tokio::test]
async fn test_rock_fest_fixture_matches() {
    let body = r#"[{"name":"Rock Fest","bands":[{"name":"The Band","recordLabel":"Big Label"}]}]"#;
    let mut fixture = tempfile::NamedTempFile::new().unwrap();
    fixture.write_all(body.as_bytes()).unwrap();

    let endpoint = start_festivals_server(StatusCode::OK, JSON_UTF8, body).await;
    let mut settings = local_settings(&endpoint);
    settings.fixture.path = fixture.path().to_path_buf();
    let service = ContractService::from_settings(&settings).unwrap();

    assert_eq!(service.check_contents().await.unwrap(), CheckOutcome::Passed);
}

#[tokio::test]
async fn test_empty_response_fails_on_length() {
    let endpoint = start_festivals_server(StatusCode::OK, JSON_UTF8, "[]").await;
    let service = ContractService::from_settings(&local_settings(&endpoint)).unwrap();

    match service.check_contents().await {
        Err(ContractError::LengthMismatch { expected, actual }) => {
            assert_eq!(expected, 5);
            assert_eq!(actual, 0);
        }
        other => panic!("unexpected result: {:?}", other),
    }
}

#[tokio::test]
async fn test_throttled_response() {
    let endpoint =
        start_festivals_server(StatusCode::TOO_MANY_REQUESTS, JSON_UTF8, r#"{"error":"slow down"}"#)
            .await;
    let service = ContractService::from_settings(&local_settings(&endpoint)).unwrap();

    let report = service.verify_all().await;

    assert!(matches!(
        report.get(CHECK_STATUS_CODE),
        Some(Err(ContractError::StatusMismatch {
            expected: 200,
            actual: 429
        }))
    ));
    assert!(matches!(
        report.get(CHECK_CONTENTS),
        Some(Ok(CheckOutcome::Skipped { status: 429 }))
    ));
    // The header is still checked, and here the throttled response carries the right one.
    assert!(matches!(
        report.get(CHECK_CONTENT_TYPE),
        Some(Ok(CheckOutcome::Passed))
    ));
}

#[tokio::test]
async fn test_plain_json_content_type_is_rejected() {
    let endpoint =
        start_festivals_server(StatusCode::OK, "application/json", fixture_body()).await;
    let service = ContractService::from_settings(&local_settings(&endpoint)).unwrap();

    let error = service.check_content_type().await.unwrap_err();

    assert!(error.is_violation());
}

#[tokio::test]
async fn test_changed_record_label_is_reported() {
    let changed = fixture_body().replace("XS Recordings", "XL Recordings");
    let endpoint = start_festivals_server(StatusCode::OK, JSON_UTF8, changed).await;
    let service = ContractService::from_settings(&local_settings(&endpoint)).unwrap();

    match service.check_contents().await {
        Err(ContractError::FestivalMismatch { index, actual, .. }) => {
            assert_eq!(index, 0);
            assert_eq!(actual.name(), Some("LOL-palooza"));
        }
        other => panic!("unexpected result: {:?}", other),
    }
}

#[tokio::test]
async fn test_unreachable_endpoint_is_not_a_violation() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let service =
        ContractService::from_settings(&local_settings(&format!("http://{}/festivals", addr)))
            .unwrap();

    let error = service.check_status().await.unwrap_err();

    assert!(matches!(error, ContractError::Client(_)));
    assert!(!error.is_violation());
}

/// 夹具中缺少 recordLabel 的乐队得到 None
#[tokio::test]
async fn test_shipped_fixture_tolerates_missing_fields() {
    let festivals = FixtureLoader::new("data/festivals.json").load().await.unwrap();

    let twisted_tour = festivals
        .iter()
        .find(|f| f.name() == Some("Twisted Tour"))
        .unwrap();
    let squint = twisted_tour.bands().last().unwrap();
    assert_eq!(squint.name(), Some("Squint-281"));
    assert_eq!(squint.record_label(), None);

    assert!(festivals.iter().any(|f| f.name().is_none()));
}
